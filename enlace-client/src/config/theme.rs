//! Theme preference

use std::fmt;

use iced::Theme;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Saved theme, stored by its display name
#[derive(Clone, PartialEq)]
pub struct ThemePreference(pub Theme);

impl ThemePreference {
    /// Theme to hand to iced
    pub fn to_iced_theme(&self) -> Theme {
        self.0.clone()
    }

    /// Look up a built-in theme by display name
    pub fn from_name(name: &str) -> Option<Self> {
        Theme::ALL
            .iter()
            .find(|theme| theme.to_string() == name)
            .cloned()
            .map(Self)
    }
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self(Theme::Light)
    }
}

impl fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ThemePreference")
            .field(&self.0.to_string())
            .finish()
    }
}

impl Serialize for ThemePreference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for ThemePreference {
    /// Unknown names fall back to the default theme
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name).unwrap_or_default())
    }
}
