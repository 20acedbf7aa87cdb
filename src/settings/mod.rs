//! Persistent user settings.

pub mod settings;
pub mod store;

pub use settings::{Settings, Theme};
pub use store::{default_settings_path, SettingsError, SettingsStore};
