//! Application-wide constants
//!
//! Shared constants used across multiple modules.

/// Application name
pub const APP_NAME: &str = "Enlace RB";

/// Application directory name (used in config directory path)
pub const APP_DIR_NAME: &str = "enlace";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Text-generation API base URL
pub const DEFAULT_ASSIST_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Text-generation model
pub const DEFAULT_ASSIST_MODEL: &str = "gemini-2.0-flash";

/// Number of announcement slides on the dashboard
pub const ANNOUNCEMENT_COUNT: usize = 3;

/// Number of pictures in the dashboard gallery
pub const GALLERY_COUNT: usize = 4;

/// Number of entries in the notifications dropdown
pub const NOTIFICATION_COUNT: usize = 3;

/// Quick-access targets on the dashboard, in display order
pub const QUICK_ACCESS_TARGETS: &[&str] = &[
    "hr-update-data-view",
    "hr-vacancy-request-view",
    "hr-certificates-view",
    "docs-policies",
];

/// Quick-access target that is gated by the vacancy-request permission
pub const VACANCY_QUICK_ACCESS_TARGET: &str = "hr-vacancy-request-view";
