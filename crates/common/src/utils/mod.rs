pub mod logging;
pub mod strings;
