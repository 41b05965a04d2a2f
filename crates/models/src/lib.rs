//! Domain entities consumed by the validation layer.
//! - Every field that may be missing on the wire is an `Option`.
//! - List elements are `Option` too, so a `null` inside a JSON array survives
//!   deserialization and is skipped downstream instead of failing the parse.

pub mod errors;
pub mod service;
pub mod service_def;
pub mod policy;
pub mod search_filter;
pub mod document;

pub use policy::{Policy, PolicyResource};
pub use search_filter::SearchFilter;
pub use service::Service;
pub use service_def::{AccessTypeDef, EnumDef, EnumElementDef, ResourceDef, ServiceConfigDef, ServiceDefinition};
