//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/chessboard/chessboard.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `CHESSBOARD_*` prefix
//!
//! Only the glyphs are configurable; the size bounds are fixed at build time.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::Palette;

/// Unified configuration for chessboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Glyph for light squares (default: space)
    pub light: String,
    /// Glyph for dark squares (default: "#")
    pub dark: String,
}

impl Default for Settings {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            light: palette.light.to_string(),
            dark: palette.dark.to_string(),
        }
    }
}

/// Get the XDG config directory for chessboard.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "chessboard").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("chessboard.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist when given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("light", defaults.light)
            .map_err(config_err)?
            .set_default("dark", defaults.dark)
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                builder = builder.add_source(File::from(global_path).format(FileFormat::Toml));
            }
        }

        if let Some(path) = config_file {
            debug!("load: explicit config {}", path.display());
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        builder = builder.add_source(Environment::with_prefix("CHESSBOARD"));

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Validate the glyphs and turn them into a palette.
    pub fn palette(&self) -> Result<Palette, ApplicationError> {
        Ok(Palette {
            light: parse_glyph("light", &self.light)?,
            dark: parse_glyph("dark", &self.dark)?,
        })
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

/// A glyph is exactly one character and never a line break.
fn parse_glyph(name: &str, value: &str) -> Result<char, ApplicationError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '\n' && c != '\r' => Ok(c),
        _ => Err(ApplicationError::Config {
            message: format!("{name} must be a single non-newline character, got {value:?}"),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_settings_when_building_palette_then_space_and_hash() {
        let palette = Settings::default().palette().expect("default palette");
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn given_multi_char_glyph_when_building_palette_then_config_error() {
        let settings = Settings {
            light: "ab".into(),
            dark: "#".into(),
        };
        let err = settings.palette().unwrap_err();
        assert!(matches!(err, ApplicationError::Config { .. }));
        assert!(err.to_string().contains("light"));
    }

    #[test]
    fn given_empty_or_newline_glyph_when_building_palette_then_config_error() {
        for bad in ["", "\n", "\r"] {
            let settings = Settings {
                light: " ".into(),
                dark: bad.into(),
            };
            assert!(settings.palette().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn given_unicode_glyph_when_building_palette_then_accepted() {
        let settings = Settings {
            light: "·".into(),
            dark: "█".into(),
        };
        let palette = settings.palette().unwrap();
        assert_eq!(palette.light, '·');
        assert_eq!(palette.dark, '█');
    }

    #[test]
    fn given_settings_when_serializing_then_toml_has_both_keys() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("light = \" \""));
        assert!(toml.contains("dark = \"#\""));
    }
}
