//! Client configuration.
//!
//! Layered like the rest of the stack: built-in defaults, then an optional
//! `attendops.toml` next to the binary, then `ATTENDOPS_*` environment variables
//! (`ATTENDOPS_API__BASE_URL=...`). In the browser only the defaults apply, and
//! the default base URL is fixed at build time through `ATTENDOPS_API_URL`.

use std::sync::OnceLock;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use store::SessionKeys;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StorageSettings {
    pub token_key: String,
    pub role_key: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NotificationSettings {
    /// Seconds a toast stays on screen.
    pub toast_secs: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub api: ApiSettings,
    pub storage: StorageSettings,
    pub notifications: NotificationSettings,
}

impl Default for Settings {
    fn default() -> Self {
        let keys = SessionKeys::default();
        Self {
            api: ApiSettings {
                base_url: default_base_url().to_string(),
            },
            storage: StorageSettings {
                token_key: keys.token,
                role_key: keys.role,
            },
            notifications: NotificationSettings { toast_secs: 4 },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        let defaults = Settings::default();
        let config = Config::builder()
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default("storage.token_key", defaults.storage.token_key)?
            .set_default("storage.role_key", defaults.storage.role_key)?
            .set_default("notifications.toast_secs", defaults.notifications.toast_secs as i64)?
            .add_source(
                File::with_name("attendops.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("ATTENDOPS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Storage keys for the persisted session.
    pub fn session_keys(&self) -> SessionKeys {
        SessionKeys {
            token: self.storage.token_key.clone(),
            role: self.storage.role_key.clone(),
        }
    }
}

fn default_base_url() -> &'static str {
    option_env!("ATTENDOPS_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Process-wide settings, loaded on first use.
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| {
        Settings::new().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default settings: {e}");
            Settings::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_settings() {
        set_var("ATTENDOPS_API__BASE_URL", "https://attendance.test");
        let settings = Settings::new().unwrap_or_default();
        assert_eq!(settings.api.base_url, "https://attendance.test");
        assert_eq!(settings.storage.token_key, "token");
        assert_eq!(settings.storage.role_key, "userRole");
        assert_eq!(settings.notifications.toast_secs, 4);
        assert_eq!(settings.session_keys(), SessionKeys::default());
    }
}
