//! User settings value object and theme names.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const MIN_FONT_SIZE: f32 = 10.0;
pub const MAX_FONT_SIZE: f32 = 24.0;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 240;

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Classic,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::Classic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Classic => "classic",
        }
    }

    /// Capitalized name for menus
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Classic => "Classic",
        }
    }

    /// Parse a theme name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Theme {
    /// Unknown names fall back to the dark theme instead of failing the whole file.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Theme::from_name(&name).unwrap_or_else(|| {
            log::warn!("Unknown theme {:?}, using {}", name, Theme::Dark);
            Theme::Dark
        }))
    }
}

/// Persisted user settings.
///
/// Serialized with camelCase keys; keys missing from the file take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    #[serde(deserialize_with = "window_dimension")]
    pub window_width: u32,
    #[serde(deserialize_with = "window_dimension")]
    pub window_height: u32,
    pub maximized: bool,
    pub show_demo_window: bool,
    pub font_size: f32,
    pub theme: Theme,
}

/// Accepts any JSON number for a window dimension, rounding and saturating into `u32`.
/// Negative or fractional values are left for [`Settings::sanitized`] to fix up.
fn window_dimension<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    Ok(value.round().clamp(0.0, u32::MAX as f64) as u32)
}

impl Settings {
    /// Copy with out-of-range values pulled back into range
    pub fn sanitized(&self) -> Self {
        let font_size = if self.font_size.is_finite() {
            self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
        } else {
            Settings::default().font_size
        };

        Self {
            window_width: self.window_width.max(MIN_WINDOW_WIDTH),
            window_height: self.window_height.max(MIN_WINDOW_HEIGHT),
            font_size,
            ..self.clone()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            maximized: false,
            show_demo_window: false,
            font_size: 16.0,
            theme: Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.window_width, 1280);
        assert_eq!(settings.window_height, 720);
        assert!(!settings.maximized);
        assert!(!settings.show_demo_window);
        assert_eq!(settings.font_size, 16.0);
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["windowWidth"], 1280);
        assert_eq!(json["windowHeight"], 720);
        assert_eq!(json["maximized"], false);
        assert_eq!(json["showDemoWindow"], false);
        assert_eq!(json["fontSize"], 16.0);
        assert_eq!(json["theme"], "dark");
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "theme": "light", "fontSize": 20.0 }"#).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.font_size, 20.0);
        assert_eq!(settings.window_width, 1280);
        assert!(!settings.show_demo_window);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        let settings: Settings = serde_json::from_str(r#"{ "theme": "solarized" }"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn test_theme_names() {
        assert_eq!(Theme::from_name("Classic"), Some(Theme::Classic));
        assert_eq!(Theme::from_name(" LIGHT "), Some(Theme::Light));
        assert_eq!(Theme::from_name(""), None);
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn test_sanitized() {
        let settings = Settings {
            window_width: 10,
            window_height: 0,
            font_size: 99.0,
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(settings.window_width, MIN_WINDOW_WIDTH);
        assert_eq!(settings.window_height, MIN_WINDOW_HEIGHT);
        assert_eq!(settings.font_size, MAX_FONT_SIZE);

        let nan = Settings {
            font_size: f32::NAN,
            ..Settings::default()
        };
        assert_eq!(nan.sanitized().font_size, 16.0);
    }

    #[test]
    fn test_window_size_accepts_any_number() {
        let settings: Settings = serde_json::from_str(
            r#"{ "windowWidth": -5, "windowHeight": 1280.6, "theme": "light" }"#,
        )
        .unwrap();
        assert_eq!(settings.window_width, 0);
        assert_eq!(settings.window_height, 1281);
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.sanitized().window_width, MIN_WINDOW_WIDTH);

        let huge: Settings = serde_json::from_str(r#"{ "windowWidth": 5e9 }"#).unwrap();
        assert_eq!(huge.window_width, u32::MAX);
    }
}
