//! User preference settings

use std::time::Duration;

use enlace_common::carousel::DEFAULT_AUTO_ADVANCE;

use super::theme::ThemePreference;
use crate::constants::{DEFAULT_ASSIST_ENDPOINT, DEFAULT_ASSIST_MODEL};
use crate::style::{WINDOW_HEIGHT, WINDOW_WIDTH};

// =============================================================================
// Assist Settings
// =============================================================================

/// Text-generation endpoint configuration
#[derive(Clone, serde::Serialize, serde::Deserialize)]
pub struct AssistSettings {
    /// API base URL (without the model path)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API key sent as the `key` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Request timeout in seconds (None = transport default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl AssistSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl std::fmt::Debug for AssistSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistSettings")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field(
                "api_key",
                &(!self.api_key.is_empty()).then_some("[REDACTED]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Default for AssistSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: String::new(),
            request_timeout_secs: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ASSIST_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_ASSIST_MODEL.to_string()
}

// =============================================================================
// Settings
// =============================================================================

/// User preferences for the application
///
/// The session role is deliberately absent: every launch starts as the
/// default role.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    /// UI theme preference
    #[serde(default)]
    pub theme: ThemePreference,

    /// Name shown in the header and sidebar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Seconds between automatic carousel advances
    #[serde(default = "default_carousel_interval_secs")]
    pub carousel_interval_secs: u64,

    /// Window width in pixels
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Window height in pixels
    #[serde(default = "default_window_height")]
    pub window_height: f32,

    /// Window X position (None = system default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_x: Option<i32>,

    /// Window Y position (None = system default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_y: Option<i32>,

    /// AI-assist endpoint
    #[serde(default)]
    pub assist: AssistSettings,
}

impl Settings {
    /// Carousel auto-advance interval, never shorter than one second
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_secs(self.carousel_interval_secs.max(1))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            display_name: None,
            carousel_interval_secs: default_carousel_interval_secs(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            window_x: None,
            window_y: None,
            assist: AssistSettings::default(),
        }
    }
}

// =============================================================================
// Default Functions (for serde)
// =============================================================================

fn default_carousel_interval_secs() -> u64 {
    DEFAULT_AUTO_ADVANCE.as_secs()
}

fn default_window_width() -> f32 {
    WINDOW_WIDTH
}

fn default_window_height() -> f32 {
    WINDOW_HEIGHT
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, ThemePreference::default());
        assert!(settings.display_name.is_none());
        assert_eq!(settings.carousel_interval(), Duration::from_secs(5));
        assert_eq!(settings.window_width, WINDOW_WIDTH);
        assert_eq!(settings.window_height, WINDOW_HEIGHT);
        assert!(settings.window_x.is_none());
        assert!(settings.window_y.is_none());
        assert_eq!(settings.assist.endpoint, DEFAULT_ASSIST_ENDPOINT);
        assert_eq!(settings.assist.model, DEFAULT_ASSIST_MODEL);
        assert!(settings.assist.request_timeout().is_none());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"display_name": "Ana Gómez"}"#).expect("deserialize");
        assert_eq!(settings.display_name.as_deref(), Some("Ana Gómez"));
        assert_eq!(settings.carousel_interval_secs, 5);
        assert_eq!(settings.assist.model, DEFAULT_ASSIST_MODEL);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let settings = Settings {
            carousel_interval_secs: 0,
            ..Default::default()
        };
        assert_eq!(settings.carousel_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let assist = AssistSettings {
            api_key: "secret-key".to_string(),
            request_timeout_secs: Some(30),
            ..Default::default()
        };
        let debug = format!("{assist:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("[REDACTED]"));
        assert_eq!(assist.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let settings = Settings {
            display_name: Some("Carlos Ruiz".to_string()),
            window_x: Some(40),
            window_y: Some(60),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).expect("serialize");
        let deserialized: Settings = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(deserialized.display_name, settings.display_name);
        assert_eq!(deserialized.window_x, Some(40));
        assert_eq!(deserialized.window_y, Some(60));
        assert_eq!(deserialized.theme, settings.theme);
    }
}
