//! Configuration file loading and validation.

use std::time::Duration;

use afterglow_engine::{AfterglowConfig, ConfigError, Settings};
use tempfile::tempdir;

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn full_config_resolves_settings() {
    let (_dir, path) = write_config(
        r"
[app]
high_contrast = true
ascii_only = true
frame_ms = 33
seed = 42

[field]
particles = 12
device_pixel_ratio = 2.0

[trail]
enabled = false
spawn_interval_ms = 80

[typewriter]
char_interval_ms = 10

[toast]
duration_ms = 500
",
    );
    let config = AfterglowConfig::load_from(&path).unwrap().unwrap();
    let settings = Settings::from_config(Some(&config), None).unwrap();

    assert!(settings.ui.high_contrast);
    assert!(settings.ui.ascii_only);
    assert!(!settings.ui.reduced_motion);
    assert_eq!(settings.frame, Duration::from_millis(33));
    assert_eq!(settings.seed, Some(42));
    assert_eq!(settings.particles, 12);
    assert_eq!(settings.device_pixel_ratio, 2.0);
    assert!(!settings.trail_enabled);
    assert_eq!(settings.spawn_interval, Duration::from_millis(80));
    assert_eq!(settings.char_interval, Duration::from_millis(10));
    assert_eq!(settings.toast_duration, Duration::from_millis(500));
}

#[test]
fn seed_from_environment_wins() {
    let (_dir, path) = write_config("[app]\nseed = 1\n");
    let config = AfterglowConfig::load_from(&path).unwrap().unwrap();
    let settings = Settings::from_config(Some(&config), Some("77")).unwrap();
    assert_eq!(settings.seed, Some(77));
}

#[test]
fn zero_duration_is_rejected() {
    let (_dir, path) = write_config("[toast]\nduration_ms = 0\n");
    let config = AfterglowConfig::load_from(&path).unwrap().unwrap();
    let err = Settings::from_config(Some(&config), None).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }), "{err}");
}

#[test]
fn syntax_error_names_the_file() {
    let (_dir, path) = write_config("[app\n");
    let err = AfterglowConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), Some(path.as_path()));
}

#[test]
fn missing_file_is_not_an_error() {
    let dir = tempdir().unwrap();
    let loaded = AfterglowConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert!(loaded.is_none());
}
