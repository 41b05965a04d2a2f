//! Validation layer of the policy engine.
//! - `store`: the boundary to the policy store and its failure containment.
//! - `validation`: facade, normalization helpers and the validator contract
//!   that concrete policy/service/service-definition validators build on.
//! - `storage`: a JSON-document backed store for tools and tests.

pub mod errors;
pub mod store;
pub mod storage;
pub mod validation;
pub mod bootstrap;
#[cfg(test)]
pub mod test_support;

pub use errors::{StoreError, ValidationError};
pub use store::ServiceStore;
pub use validation::{Action, Validator, ValidatorSupport};
