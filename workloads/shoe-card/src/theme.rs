//! Color palette and font weights.

use serde::{Deserialize, Serialize};

/// Theme passed explicitly into card rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub colors: Palette,
    #[serde(default)]
    pub weights: Weights,
}

/// CSS color values used by the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Sale accent: on-sale tag background and sale price text.
    pub primary: String,
    /// New-release tag background.
    pub secondary: String,
    /// Tag text.
    pub white: String,
    /// Base price and color count.
    pub gray_700: String,
    /// Shoe name.
    pub gray_900: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "hsl(340deg 65% 47%)".to_string(),
            secondary: "hsl(240deg 60% 63%)".to_string(),
            white: "hsl(0deg 0% 100%)".to_string(),
            gray_700: "hsl(220deg 5% 40%)".to_string(),
            gray_900: "hsl(220deg 3% 20%)".to_string(),
        }
    }
}

/// Font weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Price and color count.
    pub normal: u16,
    /// Tag, name and sale price.
    pub medium: u16,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            normal: 500,
            medium: 600,
        }
    }
}
