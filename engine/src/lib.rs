//! Simulation engine for Afterglow.
//!
//! Owns every animated component and the [`App`] composition root. Nothing
//! here touches the terminal: drawing goes through the [`Surface`] trait and
//! time only moves when the caller ticks.
//!
//! [`Surface`]: afterglow_types::Surface

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod app;
mod backdrop;
mod config;
mod field;
mod render;
mod thinking;
mod timers;
mod toast;
mod trail;
mod typewriter;

pub use afterglow_types;

pub use app::App;
pub use backdrop::{Blob, GradientBackdrop};
pub use config::{
    AfterglowConfig, AppConfig, ConfigError, FieldConfig, SEED_ENV, Settings, ToastConfig,
    TrailConfig, TypewriterConfig,
};
pub use field::{CORE_CANVAS, DEFAULT_PARTICLE_COUNT, ParticleField};
pub use render::{draw_backdrop, draw_core_glow, draw_glow_points, draw_particles};
pub use thinking::{
    BUBBLE_ENTRANCE, Edge, EdgeFlicker, FLICKER_DURATION, PROGRESS_TWEEN, StepError,
    THOUGHT_PHASES, ThinkingState, ThoughtPhase,
};
pub use timers::{TimerId, Timers};
pub use toast::{DEFAULT_TOAST_DURATION, ToastQueue};
pub use trail::{DEFAULT_SPAWN_INTERVAL, TrailEngine};
pub use typewriter::{DEFAULT_CHAR_INTERVAL, Typewriter};
