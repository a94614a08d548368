//! Review domain activities - submission and stats write-back

mod mutations;

pub use mutations::*;
