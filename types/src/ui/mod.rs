//! UI-facing data shared by the engine and the terminal front end.
//!
//! Pure data types with no IO, no async, no ratatui dependency.

mod animation;
mod options;

pub use animation::{EffectTimer, ease_in_out_sine, ease_out_cubic, normalized_progress};
pub use options::{PointerSample, UiOptions};
