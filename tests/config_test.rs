//! Integration tests for Settings loading from an explicit config file.
//!
//! These tests run without CHESSBOARD_* variables; a global config in the
//! user's XDG directory would still be layered underneath.

use std::fs;

use tempfile::TempDir;

use chessboard::application::ApplicationError;
use chessboard::config::Settings;
use chessboard::domain::Palette;

#[test]
fn given_no_config_file_when_loading_then_palette_is_default() {
    let settings = Settings::load(None).expect("load defaults");
    assert_eq!(settings.palette().expect("palette"), Palette::default());
}

#[test]
fn given_config_file_with_both_glyphs_when_loading_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.toml");
    fs::write(&path, "light = \".\"\ndark = \"@\"\n").unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.light, ".");
    assert_eq!(settings.dark, "@");
    assert_eq!(
        settings.palette().unwrap(),
        Palette {
            light: '.',
            dark: '@'
        }
    );
}

#[test]
fn given_config_file_with_one_glyph_when_loading_then_other_keeps_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.toml");
    fs::write(&path, "dark = \"X\"\n").unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.light, " ");
    assert_eq!(settings.dark, "X");
}

#[test]
fn given_config_file_without_toml_extension_when_loading_then_parsed_as_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chessboardrc");
    fs::write(&path, "dark = \"*\"\n").unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.dark, "*");
}

#[test]
fn given_missing_config_file_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }), "{err:?}");
}

#[test]
fn given_malformed_config_file_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "light = [unterminated\n").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }), "{err:?}");
}

#[test]
fn given_multi_char_glyph_in_file_when_building_palette_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.toml");
    fs::write(&path, "dark = \"##\"\n").unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");
    let err = settings.palette().unwrap_err();

    assert!(err.to_string().contains("dark"), "{err}");
}

#[test]
fn given_loaded_settings_when_serializing_then_round_trips_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.toml");
    let original = Settings {
        light: "·".into(),
        dark: "█".into(),
    };
    fs::write(&path, original.to_toml().unwrap()).unwrap();

    let loaded = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(loaded, original);
}
