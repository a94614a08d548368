//! Provider domain activities - business logic functions
//!
//! Activities do the work against injected dependencies and return final
//! data types; HTTP handlers stay thin.

mod queries;

pub use queries::*;
