//! Boundary with the policy store.
//!
//! Stores report "not found" as `Ok(None)` and anything else that went wrong
//! as `Err`. The validation layer does not distinguish the two: [`recover`]
//! folds both into `None` at every call site.

pub mod mock;

use models::{Policy, SearchFilter, Service, ServiceDefinition};

use crate::errors::StoreError;

/// Read access to services, service definitions and policies.
///
/// Implementations are shared between concurrently running validators and
/// must be safe for concurrent reads.
pub trait ServiceStore: Send + Sync {
    fn get_service(&self, id: i64) -> Result<Option<Service>, StoreError>;
    fn get_service_by_name(&self, name: &str) -> Result<Option<Service>, StoreError>;

    fn get_service_def(&self, id: i64) -> Result<Option<ServiceDefinition>, StoreError>;
    fn get_service_def_by_name(&self, name: &str) -> Result<Option<ServiceDefinition>, StoreError>;

    fn get_policy(&self, id: i64) -> Result<Option<Policy>, StoreError>;
    /// `Ok(None)` and `Ok(Some(vec![]))` are different answers and are kept apart.
    fn get_policies(&self, filter: &SearchFilter) -> Result<Option<Vec<Policy>>, StoreError>;
}

/// Map a store answer to an optional value; errors become `None`.
pub fn recover<T>(result: Result<Option<T>, StoreError>) -> Option<T> {
    result.ok().flatten()
}
