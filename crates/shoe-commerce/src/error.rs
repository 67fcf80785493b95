//! Commerce error types.

use thiserror::Error;

/// Errors raised when a listing is checked or decoded.
///
/// Classification itself never fails; these only surface from the
/// opt-in validation path and from deserializing listing data.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Listing is missing a slug.
    #[error("Listing has an empty slug")]
    EmptySlug,

    /// Listing is missing a display name.
    #[error("Listing {0} has an empty name")]
    EmptyName(String),

    /// Listing advertises no colors.
    #[error("Listing {0} must offer at least one color")]
    NoColors(String),

    /// A price field is below zero.
    #[error("Listing {slug} has a negative {field}: {cents}")]
    NegativePrice {
        slug: String,
        field: &'static str,
        cents: i64,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
