use std::collections::HashSet;

use common::is_blank;

use super::action::Action;
use super::failure::ValidationFailure;
use crate::errors::ValidationError;

/// Contract of every concrete validator: check the object identified by `id`
/// before `action` is applied to it.
pub trait Validator {
    fn validate(&self, id: i64, action: Action) -> Result<(), ValidationError>;
}

/// `Ok` when nothing failed, otherwise an error carrying every failure.
pub fn fail_on(failures: Vec<ValidationFailure>) -> Result<(), ValidationError> {
    if failures.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Invalid(failures))
    }
}

/// Record `value` in `seen`; a missing or repeated id is a failure.
pub fn is_unique_id(
    value: Option<i64>,
    seen: &mut HashSet<i64>,
    field_name: &str,
    collection_name: &str,
    failures: &mut Vec<ValidationFailure>,
) -> bool {
    match value {
        None => {
            failures.push(
                ValidationFailure::builder()
                    .field(field_name)
                    .sub_field(collection_name)
                    .is_missing()
                    .because_of("value is null")
                    .build(),
            );
            false
        }
        Some(v) if !seen.insert(v) => {
            failures.push(
                ValidationFailure::builder()
                    .field(field_name)
                    .sub_field(collection_name)
                    .is_semantically_incorrect()
                    .because_of(format!("duplicate value [{v}]"))
                    .build(),
            );
            false
        }
        Some(_) => true,
    }
}

/// Case-insensitive variant of [`is_unique_id`] for names; blank is missing.
pub fn is_unique_name(
    value: Option<&str>,
    seen: &mut HashSet<String>,
    field_name: &str,
    collection_name: &str,
    failures: &mut Vec<ValidationFailure>,
) -> bool {
    let Some(name) = value.filter(|v| !is_blank(Some(*v))) else {
        failures.push(
            ValidationFailure::builder()
                .field(field_name)
                .sub_field(collection_name)
                .is_missing()
                .because_of("value is null/empty")
                .build(),
        );
        return false;
    };
    if !seen.insert(name.to_lowercase()) {
        failures.push(
            ValidationFailure::builder()
                .field(field_name)
                .sub_field(collection_name)
                .is_semantically_incorrect()
                .because_of(format!("duplicate value [{name}]"))
                .build(),
        );
        return false;
    }
    true
}
