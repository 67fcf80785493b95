//! Shoe listing record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// One shoe as supplied by the catalog.
///
/// Field names follow the catalog feed (`imageSrc`, `salePrice`,
/// `releaseDate`, `numOfColors`). Prices are integer minor units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoeListing {
    /// URL-friendly identifier, used to build the card link.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Image resource reference.
    pub image_src: String,
    /// Base price in minor units.
    #[serde(rename = "price")]
    pub price_cents: i64,
    /// Discounted price in minor units. `Some(0)` is a real price.
    #[serde(rename = "salePrice", default)]
    pub sale_price_cents: Option<i64>,
    /// When the listing became available.
    pub release_date: DateTime<Utc>,
    /// Number of color variants on offer.
    pub num_of_colors: u32,
    /// Currency of both prices.
    #[serde(default)]
    pub currency: Currency,
}

impl ShoeListing {
    /// Create a full-price listing in USD.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price_cents: i64,
        release_date: DateTime<Utc>,
        num_of_colors: u32,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            image_src: image_src.into(),
            price_cents,
            sale_price_cents: None,
            release_date,
            num_of_colors,
            currency: Currency::default(),
        }
    }

    /// Set a sale price.
    pub fn with_sale_price(mut self, sale_price_cents: i64) -> Self {
        self.sale_price_cents = Some(sale_price_cents);
        self
    }

    /// Set the currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Decode a listing from catalog JSON.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a list of listings from catalog JSON.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Base price.
    pub fn price(&self) -> Money {
        Money::new(self.price_cents, self.currency)
    }

    /// Sale price, when one was supplied.
    pub fn sale_price(&self) -> Option<Money> {
        self.sale_price_cents
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Whether the sale price is actually below the base price.
    ///
    /// Classification does not consult this: any supplied sale price puts
    /// the listing on sale.
    pub fn has_effective_discount(&self) -> bool {
        self.sale_price_cents
            .map(|sale| sale < self.price_cents)
            .unwrap_or(false)
    }

    /// Check the listing for data that would render badly.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.slug.trim().is_empty() {
            return Err(CommerceError::EmptySlug);
        }
        if self.name.trim().is_empty() {
            return Err(CommerceError::EmptyName(self.slug.clone()));
        }
        if self.num_of_colors == 0 {
            return Err(CommerceError::NoColors(self.slug.clone()));
        }
        if self.price_cents < 0 {
            return Err(CommerceError::NegativePrice {
                slug: self.slug.clone(),
                field: "price",
                cents: self.price_cents,
            });
        }
        if let Some(sale) = self.sale_price_cents.filter(|cents| *cents < 0) {
            return Err(CommerceError::NegativePrice {
                slug: self.slug.clone(),
                field: "sale price",
                cents: sale,
            });
        }
        Ok(())
    }
}
