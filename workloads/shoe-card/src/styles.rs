//! Per-variant style attributes.

use shoe_commerce::catalog::Variant;

use crate::theme::Theme;

/// CSS `display` values the card toggles between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    pub fn as_css(&self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::None => "none",
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Display::Block)
    }
}

/// CSS `text-decoration` for the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDecoration {
    None,
    LineThrough,
}

impl TextDecoration {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextDecoration::None => "none",
            TextDecoration::LineThrough => "line-through",
        }
    }
}

/// The bundle of visual attributes one variant selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleAttributes {
    /// Tag overlay visibility.
    pub tag_display: Display,
    /// Sale price visibility.
    pub sale_display: Display,
    /// Tag background color.
    pub tag_background: String,
    /// Base price decoration.
    pub price_decoration: TextDecoration,
}

impl StyleAttributes {
    /// Inline custom properties consumed by the card stylesheet.
    pub fn to_css_vars(&self) -> String {
        format!(
            "--display: {}; --sale-display: {}; --background-color: {}; --text-decoration: {}",
            self.tag_display.as_css(),
            self.sale_display.as_css(),
            self.tag_background,
            self.price_decoration.as_css()
        )
    }
}

/// Select the style attributes for a variant.
pub fn styles_for(variant: Variant, theme: &Theme) -> StyleAttributes {
    match variant {
        Variant::OnSale => StyleAttributes {
            tag_display: Display::Block,
            sale_display: Display::Block,
            tag_background: theme.colors.primary.clone(),
            price_decoration: TextDecoration::LineThrough,
        },
        Variant::NewRelease => StyleAttributes {
            tag_display: Display::Block,
            sale_display: Display::None,
            tag_background: theme.colors.secondary.clone(),
            price_decoration: TextDecoration::None,
        },
        Variant::Default => StyleAttributes {
            tag_display: Display::None,
            sale_display: Display::None,
            tag_background: theme.colors.primary.clone(),
            price_decoration: TextDecoration::None,
        },
    }
}
