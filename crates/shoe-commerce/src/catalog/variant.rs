//! Card variant classification.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ShoeListing;
use crate::clock::{Clock, RecencyWindow};
use crate::money::Money;

/// How a listing is presented on its card.
///
/// Exactly one variant applies to a listing. The tag label, tag color
/// and price strike-through are all derived from this one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// A sale price was supplied.
    OnSale,
    /// Released inside the recency window.
    NewRelease,
    /// Neither.
    #[default]
    Default,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "on-sale" => Some(Variant::OnSale),
            "new-release" => Some(Variant::NewRelease),
            "default" => Some(Variant::Default),
            _ => None,
        }
    }

    /// Whether the card shows a tag for this variant.
    pub fn has_tag(&self) -> bool {
        !matches!(self, Variant::Default)
    }

    /// Whether the base price is struck through and the sale price shown.
    pub fn is_on_sale(&self) -> bool {
        matches!(self, Variant::OnSale)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the variant for a listing.
///
/// Sale wins over newness: a supplied sale price means `OnSale` whatever
/// its amount and whatever the release date.
pub fn classify(
    sale_price: Option<Money>,
    release_date: DateTime<Utc>,
    now: DateTime<Utc>,
    window: RecencyWindow,
) -> Variant {
    if sale_price.is_some() {
        Variant::OnSale
    } else if window.contains(release_date, now) {
        Variant::NewRelease
    } else {
        Variant::Default
    }
}

/// Classifier bound to a clock and a recency window.
#[derive(Debug, Clone)]
pub struct VariantClassifier<C> {
    clock: C,
    window: RecencyWindow,
}

impl<C: Clock> VariantClassifier<C> {
    pub fn new(clock: C, window: RecencyWindow) -> Self {
        Self { clock, window }
    }

    /// The recency window in use.
    pub fn window(&self) -> RecencyWindow {
        self.window
    }

    /// The clock in use.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Classify raw inputs against the current time of the clock.
    pub fn classify(&self, sale_price: Option<Money>, release_date: DateTime<Utc>) -> Variant {
        classify(sale_price, release_date, self.clock.now(), self.window)
    }

    /// Classify a listing.
    pub fn classify_listing(&self, listing: &ShoeListing) -> Variant {
        self.classify(listing.sale_price(), listing.release_date)
    }
}
