//! Page-level configuration.
//!
//! # Design
//! - Every field has a default so pages without a configuration block behave like the
//!   stock templates.
//! - Overrides come from an inline JSON block; unknown keys are ignored so templates can
//!   carry settings for other scripts.

use serde::Deserialize;
use thiserror::Error;

/// Element id of the inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "sms-ui-config";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration block is not valid JSON for [`UiConfig`].
    #[error("invalid ui configuration")]
    Json {
        /// Underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}

/// Texts and timings used by the page helpers.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Local storage key for the theme preference.
    pub theme_storage_key: String,
    /// Default alert lifetime in milliseconds.
    pub alert_duration_ms: u32,
    /// Delay before server-rendered alerts are scheduled for removal.
    pub alert_sweep_delay_ms: u32,
    /// Lifetime of server-rendered alerts once scheduled.
    pub alert_sweep_dismiss_ms: u32,
    /// Default label for `show_loading`.
    pub loading_text: String,
    /// Default label for form submit buttons.
    pub processing_text: String,
    /// Label for asynchronous saves.
    pub saving_text: String,
    /// Delay after which a custom form's loading state is forced off.
    pub fallback_clear_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_string(),
            alert_duration_ms: 5_000,
            alert_sweep_delay_ms: 100,
            alert_sweep_dismiss_ms: 5_000,
            loading_text: "Loading...".to_string(),
            processing_text: "Processing...".to_string(),
            saving_text: "Saving...".to_string(),
            fallback_clear_ms: 10_000,
        }
    }
}

impl UiConfig {
    /// Parse overrides from JSON; blank input yields the defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] when the text is not a valid configuration object.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }
}
