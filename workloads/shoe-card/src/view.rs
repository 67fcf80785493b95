//! Display structure assembled from a listing and its variant.

use serde::Serialize;

use shoe_commerce::catalog::{ShoeListing, Variant};

use crate::format::{format_price, pluralize, shoe_path};

/// Vertical gap between the image and the text rows, in pixels.
pub const IMAGE_SPACER_PX: u32 = 12;

/// Everything the card shows, with no markup attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoeCardView {
    /// Link target wrapping the whole card.
    pub href: String,
    pub variant: Variant,
    pub image: ImageView,
    /// Overlay tag. Absent for the default variant.
    pub tag: Option<TagView>,
    pub spacer_px: u32,
    pub name: String,
    pub price: PriceView,
    /// Color count label, e.g. "3 Colors".
    pub color_info: String,
    /// Formatted sale price. Only present when on sale.
    pub sale_price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub src: String,
    /// Empty: the image is decorative, the name carries the meaning.
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagView {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceView {
    pub text: String,
    pub struck_through: bool,
}

/// Map a listing and its variant onto the card structure.
pub fn assemble(listing: &ShoeListing, variant: Variant, route_prefix: &str) -> ShoeCardView {
    let on_sale = variant.is_on_sale();

    ShoeCardView {
        href: shoe_path(route_prefix, &listing.slug),
        variant,
        image: ImageView {
            src: listing.image_src.clone(),
            alt: String::new(),
        },
        tag: variant.has_tag().then(|| TagView {
            label: variant.as_str().to_string(),
        }),
        spacer_px: IMAGE_SPACER_PX,
        name: listing.name.clone(),
        price: PriceView {
            text: format_price(&listing.price()),
            struck_through: on_sale,
        },
        color_info: pluralize("Color", listing.num_of_colors),
        sale_price: listing
            .sale_price()
            .filter(|_| on_sale)
            .map(|sale| format_price(&sale)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn listing() -> ShoeListing {
        ShoeListing::new(
            "react-infinity-run",
            "Nike React Infinity Run",
            "/assets/react-infinity-run.jpg",
            13000,
            Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap(),
            3,
        )
    }

    #[test]
    fn test_on_sale_view() {
        let shoe = listing().with_sale_price(11000);
        let view = assemble(&shoe, Variant::OnSale, "/shoe");
        assert_eq!(view.href, "/shoe/react-infinity-run");
        assert_eq!(view.tag.as_ref().unwrap().label, "on-sale");
        assert_eq!(view.price.text, "$130.00");
        assert!(view.price.struck_through);
        assert_eq!(view.sale_price.as_deref(), Some("$110.00"));
        assert_eq!(view.color_info, "3 Colors");
        assert_eq!(view.image.alt, "");
        assert_eq!(view.spacer_px, 12);
    }

    #[test]
    fn test_new_release_view() {
        let view = assemble(&listing(), Variant::NewRelease, "/shoe");
        assert_eq!(view.tag.as_ref().unwrap().label, "new-release");
        assert!(!view.price.struck_through);
        assert_eq!(view.sale_price, None);
    }

    #[test]
    fn test_default_view_has_no_tag() {
        let view = assemble(&listing(), Variant::Default, "/shoe");
        assert!(view.tag.is_none());
        assert!(!view.price.struck_through);
        assert_eq!(view.sale_price, None);
    }

    #[test]
    fn test_sale_price_hidden_unless_on_sale() {
        let shoe = listing().with_sale_price(11000);
        let view = assemble(&shoe, Variant::NewRelease, "/shoe");
        assert_eq!(view.sale_price, None);
    }

    #[test]
    fn test_single_color_is_singular() {
        let mut shoe = listing();
        shoe.num_of_colors = 1;
        assert_eq!(assemble(&shoe, Variant::Default, "/shoe").color_info, "1 Color");
    }
}
