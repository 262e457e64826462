//! `~/.afterglow/config.toml` loading and validation.

use std::path::{Path, PathBuf};
use std::time::Duration;

use afterglow_types::ui::UiOptions;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::field::DEFAULT_PARTICLE_COUNT;
use crate::toast::DEFAULT_TOAST_DURATION;
use crate::trail::DEFAULT_SPAWN_INTERVAL;
use crate::typewriter::DEFAULT_CHAR_INTERVAL;

pub const SEED_ENV: &str = "AFTERGLOW_SEED";

const DEFAULT_FRAME: Duration = Duration::from_millis(16);

const fn default_true() -> bool {
    true
}

/// Raw file contents. Every section and key is optional.
///
/// Durations are signed so that a negative value in the file is reported
/// instead of failing to parse.
#[derive(Debug, Default, Deserialize)]
pub struct AfterglowConfig {
    pub app: Option<AppConfig>,
    pub field: Option<FieldConfig>,
    pub trail: Option<TrailConfig>,
    pub typewriter: Option<TypewriterConfig>,
    pub toast: Option<ToastConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Use ASCII-only glyphs for icons and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Freeze particle motion and the cursor glow.
    #[serde(default)]
    pub reduced_motion: bool,
    pub frame_ms: Option<i64>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FieldConfig {
    pub particles: Option<usize>,
    pub device_pixel_ratio: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TrailConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub spawn_interval_ms: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TypewriterConfig {
    pub char_interval_ms: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ToastConfig {
    pub duration_ms: Option<i64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => Some(path),
            Self::Invalid { .. } => None,
        }
    }
}

impl AfterglowConfig {
    /// Load from the default location. A missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| {
            warn!(path = %path.display(), %source, "failed to read config");
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map(Some).map_err(|source| {
            warn!(path = %path.display(), %source, "failed to parse config");
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".afterglow").join("config.toml"))
}

/// Validated runtime settings with every default filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub ui: UiOptions,
    pub frame: Duration,
    pub seed: Option<u64>,
    pub particles: usize,
    pub device_pixel_ratio: f32,
    pub trail_enabled: bool,
    pub spawn_interval: Duration,
    pub char_interval: Duration,
    pub toast_duration: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui: UiOptions::default(),
            frame: DEFAULT_FRAME,
            seed: None,
            particles: DEFAULT_PARTICLE_COUNT,
            device_pixel_ratio: 1.0,
            trail_enabled: true,
            spawn_interval: DEFAULT_SPAWN_INTERVAL,
            char_interval: DEFAULT_CHAR_INTERVAL,
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }
}

impl Settings {
    /// Resolve settings from an optional config and the raw value of
    /// [`SEED_ENV`], which wins over the file's seed.
    pub fn from_config(
        config: Option<&AfterglowConfig>,
        env_seed: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(config) = config {
            if let Some(app) = &config.app {
                settings.ui = UiOptions {
                    ascii_only: app.ascii_only,
                    high_contrast: app.high_contrast,
                    reduced_motion: app.reduced_motion,
                };
                if let Some(ms) = app.frame_ms {
                    settings.frame = positive_millis("app.frame_ms", ms)?;
                }
                settings.seed = app.seed;
            }

            if let Some(field) = &config.field {
                if let Some(particles) = field.particles {
                    if particles == 0 {
                        return Err(ConfigError::Invalid {
                            key: "field.particles",
                            reason: "must be at least 1".to_string(),
                        });
                    }
                    settings.particles = particles;
                }
                if let Some(ratio) = field.device_pixel_ratio {
                    if !(ratio.is_finite() && ratio > 0.0) {
                        return Err(ConfigError::Invalid {
                            key: "field.device_pixel_ratio",
                            reason: format!("{ratio} is not a positive number"),
                        });
                    }
                    settings.device_pixel_ratio = ratio;
                }
            }

            if let Some(trail) = &config.trail {
                settings.trail_enabled = trail.enabled;
                if let Some(ms) = trail.spawn_interval_ms {
                    settings.spawn_interval = positive_millis("trail.spawn_interval_ms", ms)?;
                }
            }

            if let Some(ms) = config.typewriter.as_ref().and_then(|t| t.char_interval_ms) {
                settings.char_interval = positive_millis("typewriter.char_interval_ms", ms)?;
            }

            if let Some(ms) = config.toast.as_ref().and_then(|t| t.duration_ms) {
                settings.toast_duration = positive_millis("toast.duration_ms", ms)?;
            }
        }

        if let Some(raw) = env_seed {
            match raw.trim().parse::<u64>() {
                Ok(seed) => settings.seed = Some(seed),
                Err(err) => warn!(value = raw, %err, "ignoring unparseable {SEED_ENV}"),
            }
        }

        Ok(settings)
    }

    /// Load the default config file and environment, falling back to defaults
    /// (with a warning) when the file is unreadable or invalid.
    #[must_use]
    pub fn load() -> Self {
        let env_seed = std::env::var(SEED_ENV).ok();
        let config = match AfterglowConfig::load() {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "using default config");
                None
            }
        };
        Self::from_config(config.as_ref(), env_seed.as_deref()).unwrap_or_else(|err| {
            warn!(%err, "using default config");
            Self::from_config(None, env_seed.as_deref()).unwrap_or_default()
        })
    }
}

fn positive_millis(key: &'static str, ms: i64) -> Result<Duration, ConfigError> {
    match u64::try_from(ms) {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::Invalid {
            key,
            reason: format!("{ms}ms is not a positive duration"),
        }),
    }
}
