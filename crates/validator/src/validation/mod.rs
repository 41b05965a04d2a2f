//! Building blocks for concrete validators.
//!
//! A concrete validator owns a [`ValidatorSupport`] for store access, runs the
//! pure helpers in [`normalize`] over what it gets back, records
//! [`ValidationFailure`]s and implements [`Validator`].

pub mod action;
pub mod failure;
pub mod normalize;
pub mod support;
pub mod validator;

pub use action::Action;
pub use failure::{ValidationFailure, ValidationFailureBuilder};
pub use support::{ValidatorSupport, ValidatorSupportBuilder};
pub use validator::{fail_on, is_unique_id, is_unique_name, Validator};
