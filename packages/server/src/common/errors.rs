use thiserror::Error;

use crate::common::types::RatingAttribute;

/// Validation and business errors for the provider directory
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("{attribute} rating must be between 1 and 5")]
    OutOfRangeRating {
        attribute: RatingAttribute,
        value: i16,
    },

    #[error("Provider not found")]
    ProviderNotFound,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
