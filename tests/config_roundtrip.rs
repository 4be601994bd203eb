// SPDX-License-Identifier: MPL-2.0
//! Integration tests for configuration persistence.

use dig_deep_coach::app::config::{self, ApiConfig, Config, GeneralConfig};
use dig_deep_coach::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn full_config_survives_a_round_trip() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let config = Config {
        general: GeneralConfig {
            theme_mode: ThemeMode::Light,
        },
        api: ApiConfig {
            base_url: Some("https://coach.digdeep.example".into()),
            token: Some("abc123".into()),
        },
    };

    config::save_to_path(&config, &path).expect("save");
    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded, config);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("nested").join("deeper").join("settings.toml");

    config::save_to_path(&Config::default(), &path).expect("save");
    assert!(path.exists());
}

#[test]
fn theme_mode_uses_lowercase_names_on_disk() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let config = Config {
        general: GeneralConfig {
            theme_mode: ThemeMode::Dark,
        },
        api: ApiConfig::default(),
    };

    config::save_to_path(&config, &path).expect("save");
    let contents = std::fs::read_to_string(&path).expect("read");
    assert!(contents.contains("theme_mode = \"dark\""));
}

#[test]
fn unknown_keys_are_tolerated() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[general]\ntheme_mode = \"light\"\nfuture_option = true\n",
    )
    .expect("write");

    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
}
