//! The "system is working" visualization: particle core, phase timeline,
//! typewriter thought and edge flicker, driven by an external step index.

use std::time::Duration;

use afterglow_types::ui::{EffectTimer, ease_in_out_sine, ease_out_cubic};
use afterglow_types::{RandomSource, Surface, Timeline, TimelineError, Vec2, lerp};
use thiserror::Error;
use tracing::debug;

use crate::field::ParticleField;
use crate::typewriter::Typewriter;

pub const FLICKER_DURATION: Duration = Duration::from_millis(500);
pub const BUBBLE_ENTRANCE: Duration = Duration::from_millis(300);
pub const PROGRESS_TWEEN: Duration = Duration::from_millis(500);

/// One step of the thinking sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThoughtPhase {
    pub key: &'static str,
    pub icon: &'static str,
    pub ascii_icon: &'static str,
    pub text: &'static str,
}

pub const THOUGHT_PHASES: [ThoughtPhase; 5] = [
    ThoughtPhase {
        key: "reading",
        icon: "🤖",
        ascii_icon: "[r]",
        text: "Reading and analyzing your document...",
    },
    ThoughtPhase {
        key: "analyzing",
        icon: "🧠",
        ascii_icon: "[a]",
        text: "Identifying key themes and insights...",
    },
    ThoughtPhase {
        key: "extracting",
        icon: "🔍",
        ascii_icon: "[x]",
        text: "Extracting core concepts...",
    },
    ThoughtPhase {
        key: "organizing",
        icon: "📊",
        ascii_icon: "[o]",
        text: "Organizing information...",
    },
    ThoughtPhase {
        key: "finalizing",
        icon: "✨",
        ascii_icon: "[*]",
        text: "Crafting the perfect summary...",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("step {step} is outside 0..={last}")]
    OutOfRange { step: usize, last: usize },
    #[error("thinking state has been shut down")]
    Retired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

/// A one-shot highlight along a single panel edge.
#[derive(Debug, Clone)]
pub struct EdgeFlicker {
    edge: Edge,
    timer: EffectTimer,
}

impl EdgeFlicker {
    #[must_use]
    pub fn new(edge: Edge) -> Self {
        Self {
            edge,
            timer: EffectTimer::new(FLICKER_DURATION),
        }
    }

    #[must_use]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Rises from 0 to 1 over the first half, falls back over the second.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        let progress = self.timer.progress();
        let ramp = if progress <= 0.5 {
            progress * 2.0
        } else {
            (1.0 - progress) * 2.0
        };
        ease_in_out_sine(ramp)
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

/// Composes the particle core, the checkpoint timeline and the typewriter
/// over the fixed thought phases.
///
/// The step is always supplied from outside; nothing here advances it.
#[derive(Debug, Clone)]
pub struct ThinkingState {
    phases: &'static [ThoughtPhase],
    step: usize,
    field: ParticleField,
    timeline: Timeline,
    typewriter: Typewriter,
    flicker: Option<EdgeFlicker>,
    bubble: EffectTimer,
    /// Displayed progress when the current tween started.
    progress_from: f32,
    progress_tween: EffectTimer,
    /// Set by [`ThinkingState::shutdown`]; time no longer moves afterwards.
    retired: bool,
}

impl ThinkingState {
    pub fn new(field: ParticleField, mut typewriter: Typewriter) -> Result<Self, TimelineError> {
        let phases: &'static [ThoughtPhase] = &THOUGHT_PHASES;
        let timeline = Timeline::thinking_checkpoints()?;
        typewriter.restart(phases[0].text);
        Ok(Self {
            phases,
            step: 0,
            field,
            timeline,
            typewriter,
            flicker: None,
            bubble: EffectTimer::new(BUBBLE_ENTRANCE),
            progress_from: 0.0,
            progress_tween: EffectTimer::finished(),
            retired: false,
        })
    }

    /// Move to `step`. An increase past zero flickers a random edge; stepping
    /// back never flickers.
    pub fn set_step(&mut self, step: usize, rng: &mut dyn RandomSource) -> Result<(), StepError> {
        if self.retired {
            return Err(StepError::Retired);
        }
        let last = self.phases.len() - 1;
        if step > last {
            return Err(StepError::OutOfRange { step, last });
        }
        if step == self.step {
            return Ok(());
        }

        let increased = step > self.step;
        self.progress_from = self.displayed_progress();
        self.progress_tween.restart(PROGRESS_TWEEN);
        self.step = step;
        self.typewriter.set_source(self.phases[step].text);
        self.bubble.restart(BUBBLE_ENTRANCE);
        if increased && step > 0 {
            let edge = Edge::ALL[rng.index(Edge::ALL.len())];
            debug!(step, edge = edge.as_str(), "edge flicker");
            self.flicker = Some(EdgeFlicker::new(edge));
        }
        debug!(step, key = self.phases[step].key, "thinking step changed");
        Ok(())
    }

    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    /// `step / (phase_count - 1) * 100`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let last = self.phases.len().saturating_sub(1);
        if last == 0 {
            return 100.0;
        }
        self.step as f32 / last as f32 * 100.0
    }

    /// Progress as drawn: eases from the previous value over half a second.
    #[must_use]
    pub fn displayed_progress(&self) -> f32 {
        let t = ease_out_cubic(self.progress_tween.progress());
        lerp(self.progress_from, self.progress(), t)
    }

    /// The checkpoint timeline counts from one, so it runs a step ahead.
    #[must_use]
    pub fn timeline_step(&self) -> u32 {
        u32::try_from(self.step + 1).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn active_phase(&self) -> &ThoughtPhase {
        &self.phases[self.step]
    }

    /// The typewriter's revealed prefix of the active thought.
    #[must_use]
    pub fn thought_text(&self) -> &str {
        self.typewriter.visible()
    }

    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    #[must_use]
    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    #[must_use]
    pub fn flicker(&self) -> Option<&EdgeFlicker> {
        self.flicker.as_ref()
    }

    /// Entrance progress of the thought bubble since the last step change.
    #[must_use]
    pub fn bubble_progress(&self) -> f32 {
        self.bubble.progress()
    }

    #[must_use]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Advance the time-driven parts: typewriter, flicker and bubble.
    pub fn advance(&mut self, delta: Duration) {
        if self.retired {
            return;
        }
        self.typewriter.advance(delta);
        self.bubble.advance(delta);
        self.progress_tween.advance(delta);
        if let Some(flicker) = &mut self.flicker {
            flicker.advance(delta);
            if flicker.is_finished() {
                self.flicker = None;
            }
        }
    }

    /// Run one frame of the particle core. With `animate` off the field is
    /// drawn where it stands.
    pub fn render_core(
        &mut self,
        pointer: Vec2,
        surface: Option<&mut dyn Surface>,
        rng: &mut dyn RandomSource,
        animate: bool,
    ) -> bool {
        if animate {
            let canvas = self.field.canvas();
            return self.field.tick(pointer, canvas, surface, rng);
        }
        match surface {
            Some(surface) => {
                self.field.render_static(surface);
                true
            }
            None => false,
        }
    }

    /// Drop the pending reveal and any flicker. Later ticks are no-ops.
    pub fn shutdown(&mut self) {
        self.retired = true;
        self.typewriter.cancel();
        self.flicker = None;
    }

    #[must_use]
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    /// Back to the first phase with no pending flicker.
    pub fn reset(&mut self) {
        if self.retired {
            return;
        }
        self.step = 0;
        self.flicker = None;
        self.bubble.restart(BUBBLE_ENTRANCE);
        self.progress_from = 0.0;
        self.progress_tween = EffectTimer::finished();
        self.typewriter.restart(self.phases[0].text);
    }
}
