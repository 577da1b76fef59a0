use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How product cards are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Prefix for every price (default: "₱").
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Badge text shown on every card (default: "25% off").
    #[serde(default = "default_discount_label")]
    pub discount_label: String,
    /// Card width in terminal columns, borders included (default: 34).
    #[serde(default = "default_card_width")]
    pub card_width: u16,
}

/// Event loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture mouse clicks and wheel (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Log output. Nothing is logged unless a file is set here or through
/// `CATALOG_VIEW_LOG`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

pub const MIN_CARD_WIDTH: u16 = 24;
pub const MAX_CARD_WIDTH: u16 = 80;

fn default_currency_symbol() -> String {
    "₱".to_string()
}

fn default_discount_label() -> String {
    "25% off".to_string()
}

fn default_card_width() -> u16 {
    34
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            discount_label: default_discount_label(),
            card_width: default_card_width(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl DisplayConfig {
    pub fn format_price(&self, price: u32) -> String {
        format!("{}{}", self.currency_symbol, price)
    }
}
