//! Shoe catalog module.
//!
//! Contains the listing record and the variant it is displayed as.

mod listing;
mod variant;

pub use listing::ShoeListing;
pub use variant::{classify, Variant, VariantClassifier};
