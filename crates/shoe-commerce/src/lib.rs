//! Shoe listing domain types and variant classification.
//!
//! This crate provides the data side of a shoe product card:
//!
//! - **Money**: cents-based amounts with currency-aware display
//! - **Catalog**: the `ShoeListing` input record and its `Variant`
//! - **Clock**: injectable time source and the recency window that
//!   decides what counts as a new release
//!
//! # Example
//!
//! ```rust,ignore
//! use shoe_commerce::prelude::*;
//!
//! let classifier = VariantClassifier::new(SystemClock, RecencyWindow::default());
//! let variant = classifier.classify_listing(&listing);
//! println!("{}", variant); // "on-sale", "new-release" or "default"
//! ```

pub mod catalog;
pub mod clock;
pub mod error;
pub mod money;

pub use error::CommerceError;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{classify, ShoeListing, Variant, VariantClassifier};
    pub use crate::clock::{Clock, FixedClock, RecencyWindow, SystemClock};
    pub use crate::error::CommerceError;
    pub use crate::money::{Currency, Money};
}
