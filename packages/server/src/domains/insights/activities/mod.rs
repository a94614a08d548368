//! Insight refresh activities

mod refresh;

pub use refresh::*;
