//! Shared helpers for the validation workspace: logging setup and the
//! string predicates every layer uses to decide whether a name is usable.

pub mod utils;

pub use utils::strings::{is_blank, is_empty, same_name};
