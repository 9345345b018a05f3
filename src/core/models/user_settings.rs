use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

/// Read-only settings. The file is optional and never written back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserSettings {
    pub theme_mode: ThemeMode,
    pub always_on_top: bool,
    pub window_width: f32,
    pub window_height: f32,
    pub show_tray_icon: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            always_on_top: true,
            window_width: global_constants::DEFAULT_WINDOW_WIDTH,
            window_height: global_constants::DEFAULT_WINDOW_HEIGHT,
            // tray-icon needs a running GTK loop on Linux, which iced does not provide
            show_tray_icon: !cfg!(target_os = "linux"),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!(
                "[SETTINGS] No settings file at {:?}, using defaults",
                settings_path
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] {:?}", settings);

        Ok(settings.clamped())
    }

    /// Main window size, never below the minimum size floor.
    pub fn window_size(&self) -> (f32, f32) {
        (
            self.window_width.max(global_constants::MAIN_WINDOW_MIN_WIDTH),
            self.window_height.max(global_constants::MAIN_WINDOW_MIN_HEIGHT),
        )
    }

    fn clamped(mut self) -> Self {
        let (width, height) = self.window_size();
        self.window_width = width;
        self.window_height = height;
        self
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("clipboard-mirror-settings-test");
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn test_theme_mode_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_theme_mode_deserialization() {
        let theme: ThemeMode = serde_json::from_str("\"Light\"").unwrap();
        assert_eq!(theme, ThemeMode::Light);
    }

    #[test]
    fn test_user_settings_default_values() {
        let settings = UserSettings::default();

        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert!(settings.always_on_top);
        assert_eq!(settings.window_width, global_constants::DEFAULT_WINDOW_WIDTH);
        assert_eq!(
            settings.window_height,
            global_constants::DEFAULT_WINDOW_HEIGHT
        );
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: UserSettings = serde_json::from_str(r#"{ "theme_mode": "Light" }"#).unwrap();

        assert_eq!(settings.theme_mode, ThemeMode::Light);
        assert!(settings.always_on_top);
        assert_eq!(settings.window_width, global_constants::DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn test_load_from_missing_path_returns_defaults() {
        let path = temp_settings_path("does_not_exist.json");
        std::fs::remove_file(&path).ok();

        let settings = UserSettings::load_from_path(&path).unwrap();

        assert_eq!(settings, UserSettings::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_load_from_path_clamps_window_size_to_minimum() {
        let path = temp_settings_path("tiny_window.json");
        std::fs::write(&path, r#"{ "window_width": 10.0, "window_height": 5.0 }"#).unwrap();

        let settings = UserSettings::load_from_path(&path).unwrap();

        assert_eq!(settings.window_width, global_constants::MAIN_WINDOW_MIN_WIDTH);
        assert_eq!(
            settings.window_height,
            global_constants::MAIN_WINDOW_MIN_HEIGHT
        );
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_from_path_rejects_malformed_json() {
        let path = temp_settings_path("malformed.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(UserSettings::load_from_path(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
