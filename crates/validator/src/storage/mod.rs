//! Store implementations backed by files rather than a database.

pub mod json_store;

pub use json_store::JsonServiceStore;
