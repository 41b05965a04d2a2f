use std::sync::Arc;

use common::is_blank;
use models::{Policy, SearchFilter, Service, ServiceDefinition};
use tracing::{instrument, warn};

use super::action::Action;
use super::failure::ValidationFailure;
use super::validator::{fail_on, Validator};
use crate::errors::ValidationError;
use crate::store::{recover, ServiceStore};

/// Store access shared by every concrete validator.
///
/// Each lookup answers `None` both when the entity does not exist and when the
/// store failed; a validator cannot confirm a reference in either case.
pub struct ValidatorSupport<S: ServiceStore> {
    store: Arc<S>,
}

impl<S: ServiceStore> Clone for ValidatorSupport<S> {
    fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: ServiceStore> ValidatorSupport<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    /// # Examples
    /// ```
    /// use policy_validator::store::mock::MockServiceStore;
    /// use policy_validator::ValidatorSupport;
    /// assert!(ValidatorSupport::<MockServiceStore>::builder().build().is_err());
    /// ```
    pub fn builder() -> ValidatorSupportBuilder<S> { ValidatorSupportBuilder { store: None } }

    pub fn store(&self) -> &Arc<S> { &self.store }

    #[instrument(level = "trace", skip(self))]
    pub fn service(&self, id: i64) -> Option<Service> {
        recover(self.store.get_service(id))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn service_by_name(&self, name: &str) -> Option<Service> {
        recover(self.store.get_service_by_name(name))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn service_def(&self, id: i64) -> Option<ServiceDefinition> {
        recover(self.store.get_service_def(id))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn service_def_by_name(&self, name: &str) -> Option<ServiceDefinition> {
        recover(self.store.get_service_def_by_name(name))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn policy(&self, id: i64) -> Option<Policy> {
        recover(self.store.get_policy(id))
    }

    /// Policies of a service, optionally narrowed to one policy name.
    ///
    /// A blank `policy_name` does not narrow the search. An empty result from
    /// the store is returned as `Some(vec![])`.
    #[instrument(level = "trace", skip(self))]
    pub fn policies(&self, service_name: &str, policy_name: Option<&str>) -> Option<Vec<Policy>> {
        let mut filter = SearchFilter::new();
        filter.set_param(SearchFilter::SERVICE_NAME, service_name);
        if let Some(name) = policy_name.filter(|n| !is_blank(Some(*n))) {
            filter.set_param(SearchFilter::POLICY_NAME, name);
        }
        recover(self.store.get_policies(&filter))
    }
}

/// Calling `validate` on the bare support object is a programming error:
/// concrete validators implement the trait themselves.
impl<S: ServiceStore> Validator for ValidatorSupport<S> {
    fn validate(&self, id: i64, action: Action) -> Result<(), ValidationError> {
        warn!(id, %action, "validate called without a concrete validator");
        fail_on(vec![ValidationFailure::builder()
            .is_an_internal_error()
            .because_of("unimplemented method called")
            .build()])
    }
}

pub struct ValidatorSupportBuilder<S: ServiceStore> {
    store: Option<Arc<S>>,
}

impl<S: ServiceStore> ValidatorSupportBuilder<S> {
    pub fn store(mut self, store: Arc<S>) -> Self {
        self.store = Some(store);
        self
    }

    /// Fails when no store was supplied.
    pub fn build(self) -> Result<ValidatorSupport<S>, ValidationError> {
        let store = self
            .store
            .ok_or_else(|| ValidationError::InvalidArgument("service store can't be null".into()))?;
        Ok(ValidatorSupport::new(store))
    }
}
