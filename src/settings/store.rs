//! Loading and saving [`Settings`] as JSON.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::settings::settings::Settings;

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "dockshell";
/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Error type for settings persistence
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Platform settings location.
///
/// `~/.config/dockshell/settings.json` on Linux,
/// `~/Library/Application Support/dockshell/settings.json` on macOS.
/// Falls back to the working directory when no config dir is known.
pub fn default_settings_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME),
        None => PathBuf::from(".").join(SETTINGS_FILE_NAME),
    }
}

/// Owns the current settings and moves them to and from disk
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    settings: Settings,
}

impl SettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Load settings from `path`.
    ///
    /// Returns `Ok(false)` and keeps the current values when the file does not
    /// exist. On a read or parse error the current values are kept as well.
    pub fn load(&mut self, path: &Path) -> Result<bool, SettingsError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}", path.display());
                return Ok(false);
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let parsed: Settings =
            serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        self.settings = parsed.sanitized();
        Ok(true)
    }

    /// Write settings to `path` as pretty JSON, creating parent directories.
    ///
    /// The file is written next to the target and renamed into place so a
    /// crash never leaves a truncated settings file behind.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source: io::Error| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut json = serde_json::to_string_pretty(&self.settings)?;
        json.push('\n');

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(io_err)?;
        fs::rename(&tmp_path, path).map_err(io_err)?;
        Ok(())
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    pub fn get_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Restore defaults in memory (disk is untouched until the next save)
    pub fn reset(&mut self) {
        self.settings = Settings::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Theme;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let mut store = SettingsStore::default();
        let loaded = store.load(&dir.path().join("nope.json")).unwrap();
        assert!(!loaded);
        assert_eq!(store.get(), &Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join(SETTINGS_FILE_NAME);

        let mut store = SettingsStore::default();
        store.get_mut().theme = Theme::Classic;
        store.get_mut().font_size = 18.0;
        store.get_mut().maximized = true;
        store.save(&path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        let mut reloaded = SettingsStore::default();
        assert!(reloaded.load(&path).unwrap());
        assert_eq!(reloaded.get(), store.get());
    }

    #[test]
    fn test_saved_file_is_pretty_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        SettingsStore::default().save(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"windowWidth\": 1280,"));
        assert!(text.contains("\"theme\": \"dark\""));
    }

    #[test]
    fn test_malformed_file_is_error_and_keeps_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let mut store = SettingsStore::default();
        store.get_mut().font_size = 12.0;
        let err = store.load(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert_eq!(store.get().font_size, 12.0);
    }

    #[test]
    fn test_load_sanitizes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{ "fontSize": 3.0, "windowWidth": 5 }"#).unwrap();

        let mut store = SettingsStore::default();
        store.load(&path).unwrap();
        assert_eq!(store.get().font_size, 10.0);
        assert_eq!(store.get().window_width, 320);
    }

    #[test]
    fn test_bad_window_size_keeps_other_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{"windowWidth": -5, "theme": "light", "fontSize": 18}"#).unwrap();

        let mut store = SettingsStore::default();
        assert!(store.load(&path).unwrap());
        assert_eq!(store.get().window_width, 320);
        assert_eq!(store.get().theme, Theme::Light);
        assert_eq!(store.get().font_size, 18.0);
    }

    #[test]
    fn test_reset() {
        let mut store = SettingsStore::default();
        store.get_mut().theme = Theme::Light;
        store.reset();
        assert_eq!(store.get(), &Settings::default());
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        let path = default_settings_path();
        assert!(path.ends_with(Path::new(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
            || path.ends_with(SETTINGS_FILE_NAME));
    }
}
