//! Card configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use shoe_commerce::clock::{RecencyWindow, DEFAULT_RECENCY_DAYS};
use shoe_observability::{LogFormat, LogLevel};

use crate::theme::Theme;

/// Configuration for rendering shoe cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Days since release during which a shoe is tagged as new.
    #[serde(default = "default_recency_window_days")]
    pub recency_window_days: u32,

    /// Path prefix for shoe detail links.
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Palette and font weights.
    #[serde(default)]
    pub theme: Theme,
}

fn default_recency_window_days() -> u32 {
    DEFAULT_RECENCY_DAYS
}

fn default_route_prefix() -> String {
    "/shoe".to_string()
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            recency_window_days: default_recency_window_days(),
            route_prefix: default_route_prefix(),
            logging: LoggingConfig::default(),
            theme: Theme::default(),
        }
    }
}

impl CardConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Recency window for variant classification.
    pub fn recency_window(&self) -> RecencyWindow {
        RecencyWindow::from_days(self.recency_window_days)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level emitted.
    #[serde(default)]
    pub level: LogLevel,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CardConfig::default();
        assert_eq!(config.recency_window_days, 30);
        assert_eq!(config.route_prefix, "/shoe");
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.recency_window(), RecencyWindow::from_days(30));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(CardConfig::from_toml_str("").unwrap(), CardConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = CardConfig::from_toml_str(
            r#"
recency_window_days = 14
route_prefix = "/sneakers"

[logging]
level = "debug"
format = "human"

[theme.colors]
secondary = "rebeccapurple"

[theme.weights]
normal = 400
"#,
        )
        .unwrap();

        assert_eq!(config.recency_window().days(), 14);
        assert_eq!(config.route_prefix, "/sneakers");
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Human);
        assert_eq!(config.theme.colors.secondary, "rebeccapurple");
        assert_eq!(config.theme.colors.primary, Theme::default().colors.primary);
        assert_eq!(config.theme.weights.normal, 400);
        assert_eq!(config.theme.weights.medium, 600);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(CardConfig::from_toml_str("recency_window_days = \"soon\"").is_err());
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = CardConfig::load("/nonexistent/shoe-card.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/shoe-card.toml"));
    }

    #[test]
    fn test_load_json_file() {
        let path = std::env::temp_dir().join(format!("shoe-card-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"recency_window_days": 7}"#).unwrap();
        let config = CardConfig::load(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.recency_window_days, 7);
        assert_eq!(config.route_prefix, "/shoe");
    }
}
