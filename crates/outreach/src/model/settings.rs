//! Settings model.

use crate::style::widgets::palette::ThemeMode;

/// Backend used when neither the settings file nor the environment names one.
pub const DEFAULT_API_URL: &str = "http://localhost:4000/api";

/// Environment variable overriding the stored API URL.
pub const API_URL_ENV: &str = "OUTREACH_API_URL";

/// Rows per page for locally paginated tables.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Application settings that persist across sessions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Current theme mode (serialized as string).
    #[serde(with = "theme_mode_serde")]
    pub theme_mode: ThemeMode,
    /// Backend base URL.
    pub api_url: String,
    /// Rows per page chosen last.
    pub page_size: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Light,
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppSettings {
    /// Applies the `OUTREACH_API_URL` override, if set and non-empty.
    #[must_use]
    pub fn with_env_override(self, env_url: Option<String>) -> Self {
        match env_url {
            Some(url) if !url.trim().is_empty() => Self {
                api_url: url.trim().to_string(),
                ..self
            },
            _ => self,
        }
    }

    /// Page size, never zero.
    #[must_use]
    pub fn effective_page_size(&self) -> usize {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }
}

/// Serde helpers for `ThemeMode` (since it doesn't derive `Serialize`/`Deserialize`).
mod theme_mode_serde {
    use super::ThemeMode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "dark" => Ok(ThemeMode::Dark),
            _ => Ok(ThemeMode::Light),
        }
    }
}
