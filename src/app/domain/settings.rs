use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::color_scheme::ColorScheme;
use super::language::Language;
use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub default_language: Language,

    #[serde(default)]
    pub color_scheme: ColorScheme,

    #[serde(default = "default_line_numbers")]
    pub line_numbers_enabled: bool,

    #[serde(default = "default_word_wrap")]
    pub word_wrap_enabled: bool,

    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,
}

fn default_line_numbers() -> bool {
    true
}

fn default_word_wrap() -> bool {
    true
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            color_scheme: ColorScheme::default(),
            line_numbers_enabled: default_line_numbers(),
            word_wrap_enabled: default_word_wrap(),
            theme_mode: default_theme_mode(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save();
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = Self::get_config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("codetint");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.default_language, Language::Python);
        assert_eq!(settings.color_scheme, ColorScheme::InspiredGitHub);
        assert!(settings.line_numbers_enabled);
        assert!(settings.word_wrap_enabled);
        assert_eq!(settings.theme_mode, ThemeMode::SystemDefault);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Simulate old config missing new fields
        let json = r#"{"line_numbers_enabled": false}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert!(!settings.line_numbers_enabled); // Should use file value
        assert_eq!(settings.default_language, Language::Python); // Should use default
        assert_eq!(settings.color_scheme, ColorScheme::InspiredGitHub);
    }

    #[test]
    fn test_theme_mode_serialization() {
        let settings = AppSettings {
            theme_mode: ThemeMode::Dark,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Dark\""));
    }

    #[test]
    fn test_language_serialization() {
        let settings = AppSettings {
            default_language: Language::Cpp,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.default_language, Language::Cpp);
    }
}
