//! Shoe Card - product card workload for shoe listings.
//!
//! Renders one listing as a linked card: image with a promotional tag,
//! name and price, color count and sale price. The tag, its color and the
//! price strike-through all follow from the listing's single `Variant`.
//!
//! ```rust,ignore
//! let renderer = ShoeCardRenderer::from_config(CardConfig::default(), SystemClock);
//! let html = renderer.render(&listing);
//! ```

mod config;
mod format;
mod sections;
mod styles;
mod theme;
mod view;

pub use config::{CardConfig, LoggingConfig};
pub use format::{format_price, pluralize, shoe_path};
pub use sections::{render_card_styles, render_shoe_card};
pub use styles::{styles_for, Display, StyleAttributes, TextDecoration};
pub use theme::{Palette, Theme, Weights};
pub use view::{assemble, ImageView, PriceView, ShoeCardView, TagView, IMAGE_SPACER_PX};

use shoe_commerce::catalog::{ShoeListing, Variant, VariantClassifier};
use shoe_commerce::clock::Clock;
use shoe_commerce::CommerceError;
use shoe_observability::{RenderId, StructuredLogger};

/// Classifies listings and renders their cards.
#[derive(Debug, Clone)]
pub struct ShoeCardRenderer<C> {
    classifier: VariantClassifier<C>,
    route_prefix: String,
    theme: Theme,
    logger: StructuredLogger,
}

impl<C: Clock> ShoeCardRenderer<C> {
    /// Build a renderer from configuration and a clock.
    pub fn from_config(config: CardConfig, clock: C) -> Self {
        let logger = StructuredLogger::new(RenderId::generate())
            .with_component("shoe-card")
            .with_min_level(config.logging.level)
            .with_format(config.logging.format);

        Self {
            classifier: VariantClassifier::new(clock, config.recency_window()),
            route_prefix: config.route_prefix,
            theme: config.theme,
            logger,
        }
    }

    /// Replace the logger, e.g. to share one render id across a batch.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Variant for a listing at the clock's current time.
    pub fn classify(&self, listing: &ShoeListing) -> Variant {
        self.classifier.classify_listing(listing)
    }

    /// Display structure for a listing.
    pub fn view(&self, listing: &ShoeListing) -> ShoeCardView {
        let variant = self.classify(listing);

        if variant.is_on_sale() && !listing.has_effective_discount() {
            self.logger
                .warn_builder("sale price is not below base price")
                .field("slug", listing.slug.as_str())
                .field_i64("price_cents", listing.price_cents)
                .field_i64("sale_price_cents", listing.sale_price_cents.unwrap_or_default())
                .emit();
        }

        self.logger
            .debug_builder("assembled shoe card")
            .field("slug", listing.slug.as_str())
            .field("variant", variant.as_str())
            .emit();

        assemble(listing, variant, &self.route_prefix)
    }

    /// Render a listing's card markup. Never fails; listing data is
    /// trusted as given.
    pub fn render(&self, listing: &ShoeListing) -> String {
        let view = self.view(listing);
        let styles = styles_for(view.variant, &self.theme);
        render_shoe_card(&view, &styles)
    }

    /// Validate the listing, then render it.
    pub fn render_checked(&self, listing: &ShoeListing) -> Result<String, CommerceError> {
        if let Err(e) = listing.validate() {
            self.logger
                .warn_builder("rejected listing")
                .field("slug", listing.slug.as_str())
                .field("error", e.to_string())
                .emit();
            return Err(e);
        }
        Ok(self.render(listing))
    }

    /// Stylesheet matching this renderer's theme.
    pub fn stylesheet(&self) -> String {
        render_card_styles(&self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use shoe_commerce::clock::FixedClock;
    use shoe_observability::{LogLevel, LogSink};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn renderer(config: CardConfig) -> ShoeCardRenderer<FixedClock> {
        ShoeCardRenderer::from_config(config, FixedClock::new(now()))
    }

    fn listing(age_days: i64) -> ShoeListing {
        ShoeListing::new(
            "metcon",
            "Nike Metcon",
            "/assets/metcon.jpg",
            15000,
            now() - Duration::days(age_days),
            2,
        )
    }

    #[test]
    fn test_route_prefix_from_config() {
        let config = CardConfig {
            route_prefix: "/sneakers".to_string(),
            ..CardConfig::default()
        };
        let view = renderer(config).view(&listing(100));
        assert_eq!(view.href, "/sneakers/metcon");
    }

    #[test]
    fn test_window_from_config() {
        let config = CardConfig {
            recency_window_days: 60,
            ..CardConfig::default()
        };
        assert_eq!(renderer(config).classify(&listing(45)), Variant::NewRelease);
        assert_eq!(
            renderer(CardConfig::default()).classify(&listing(45)),
            Variant::Default
        );
    }

    fn captured(sink: &LogSink) -> Vec<serde_json::Value> {
        sink.lines()
            .iter()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_sale_price_not_below_base_logs_warning() {
        let sink = LogSink::memory();
        let logger = StructuredLogger::new(RenderId::from_string("batch-1"))
            .with_component("shoe-card")
            .with_sink(sink.clone());
        let renderer = renderer(CardConfig::default()).with_logger(logger);

        let shoe = listing(400).with_sale_price(15000);
        let html = renderer.render(&shoe);
        assert!(html.contains("data-variant=\"on-sale\""));

        let entries = captured(&sink);
        assert_eq!(entries.len(), 1);
        let warn = &entries[0];
        assert_eq!(warn["level"], "warn");
        assert_eq!(warn["message"], "sale price is not below base price");
        assert_eq!(warn["render_id"], "batch-1");
        assert_eq!(warn["slug"], "metcon");
        assert_eq!(warn["price_cents"], 15000);
        assert_eq!(warn["sale_price_cents"], 15000);
    }

    #[test]
    fn test_real_discount_logs_no_warning() {
        let sink = LogSink::memory();
        let logger = StructuredLogger::new(RenderId::generate()).with_sink(sink.clone());
        let renderer = renderer(CardConfig::default()).with_logger(logger);

        renderer.render(&listing(400).with_sale_price(12000));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_debug_entry_records_variant() {
        let sink = LogSink::memory();
        let logger = StructuredLogger::new(RenderId::generate())
            .with_min_level(LogLevel::Debug)
            .with_sink(sink.clone());
        let renderer = renderer(CardConfig::default()).with_logger(logger);

        renderer.render(&listing(3));
        let entries = captured(&sink);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["level"], "debug");
        assert_eq!(entries[0]["slug"], "metcon");
        assert_eq!(entries[0]["variant"], "new-release");
    }

    #[test]
    fn test_render_checked_accepts_valid_listing() {
        let renderer = renderer(CardConfig::default());
        let shoe = listing(400).with_sale_price(12000);
        let checked = renderer.render_checked(&shoe).unwrap();
        assert_eq!(checked, renderer.render(&shoe));
        assert!(checked.contains("shoe-card-sale-price\">$120.00"));
    }

    #[test]
    fn test_render_checked_rejects_invalid() {
        let mut shoe = listing(1);
        shoe.num_of_colors = 0;
        let err = renderer(CardConfig::default()).render_checked(&shoe).unwrap_err();
        assert!(matches!(err, CommerceError::NoColors(_)));
    }

    #[test]
    fn test_render_is_permissive() {
        let mut shoe = listing(1);
        shoe.num_of_colors = 0;
        let html = renderer(CardConfig::default()).render(&shoe);
        assert!(html.contains("0 Colors"));
    }

    #[test]
    fn test_stylesheet_uses_configured_theme() {
        let mut config = CardConfig::default();
        config.theme.colors.gray_900 = "black".to_string();
        assert!(renderer(config).stylesheet().contains("color: black;"));
    }
}
