use std::time::{Duration, Instant};

use afterglow_types::ui::{PointerSample, UiOptions};
use afterglow_types::{
    SeededRandom, Surface, TimelineError, ToastError, ToastId, ToastKind, Vec2,
};
use tracing::{debug, info};

use crate::backdrop::GradientBackdrop;
use crate::config::Settings;
use crate::field::{CORE_CANVAS, ParticleField};
use crate::render::draw_backdrop;
use crate::thinking::{StepError, ThinkingState};
use crate::toast::ToastQueue;
use crate::trail::TrailEngine;
use crate::typewriter::Typewriter;

/// Composition root: every animated component plus the shared random source
/// and the last observed pointer.
///
/// Input handlers write the pointer, the frame loop reads it. Both run on the
/// same task, so the last sample written before a frame is the one it sees.
#[derive(Debug)]
pub struct App {
    settings: Settings,
    rng: SeededRandom,
    thinking: ThinkingState,
    trail: TrailEngine,
    toasts: ToastQueue,
    backdrop: GradientBackdrop,
    pointer: Option<PointerSample>,
    elapsed: Duration,
    frames: u64,
    last_frame: Instant,
    should_quit: bool,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self, TimelineError> {
        let mut rng = match settings.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };
        info!(seed = rng.seed(), particles = settings.particles, "starting afterglow");

        let field = ParticleField::initialize(settings.particles, CORE_CANVAS, &mut rng);
        let thinking = ThinkingState::new(field, Typewriter::new(settings.char_interval))?;

        let mut trail = TrailEngine::new(settings.spawn_interval);
        trail.set_active(settings.trail_enabled && !settings.ui.reduced_motion);

        let mut toasts = ToastQueue::new(settings.toast_duration);
        toasts.activate();

        Ok(Self {
            settings,
            rng,
            thinking,
            trail,
            toasts,
            backdrop: GradientBackdrop::new(),
            pointer: None,
            elapsed: Duration::ZERO,
            frames: 0,
            last_frame: Instant::now(),
            should_quit: false,
        })
    }

    /// Wall time since the previous call, for driving [`App::tick`].
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    /// Advance every time-driven component by one frame.
    pub fn tick(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
        self.frames = self.frames.wrapping_add(1);
        self.thinking.advance(delta);
        self.trail.advance(delta);
        self.toasts.advance(delta);
        if !self.settings.ui.reduced_motion {
            self.backdrop.advance(delta);
        }
    }

    pub fn set_pointer(&mut self, sample: PointerSample) {
        self.pointer = Some(sample);
    }

    #[must_use]
    pub fn pointer(&self) -> Option<PointerSample> {
        self.pointer
    }

    pub fn set_step(&mut self, step: usize) -> Result<(), StepError> {
        self.thinking.set_step(step, &mut self.rng)
    }

    /// Step forward, staying put on the last phase.
    pub fn next_step(&mut self) -> bool {
        let next = self.thinking.step() + 1;
        next < self.thinking.phase_count() && self.set_step(next).is_ok()
    }

    /// Step back, staying put on the first phase.
    pub fn prev_step(&mut self) -> bool {
        match self.thinking.step().checked_sub(1) {
            Some(prev) => self.set_step(prev).is_ok(),
            None => false,
        }
    }

    pub fn reset(&mut self) {
        debug!("thinking sequence reset");
        self.thinking.reset();
    }

    pub fn push_toast(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
    ) -> Result<ToastId, ToastError> {
        self.toasts.push(message, kind)
    }

    pub fn dismiss_toast(&mut self, id: ToastId) -> Result<bool, ToastError> {
        self.toasts.dismiss(id)
    }

    pub fn dismiss_newest_toast(&mut self) -> Result<Option<ToastId>, ToastError> {
        self.toasts.dismiss_newest()
    }

    /// Toggle cursor glow spawning. Reduced motion keeps it off.
    pub fn toggle_glow(&mut self) {
        let active = !self.trail.is_active() && !self.settings.ui.reduced_motion;
        self.trail.set_active(active);
    }

    /// Run one frame of the particle core against `surface`. `pointer` is in
    /// the core surface's logical coordinates.
    pub fn render_core(&mut self, surface: Option<&mut dyn Surface>, pointer: Vec2) -> bool {
        let animate = !self.settings.ui.reduced_motion;
        self.thinking.render_core(pointer, surface, &mut self.rng, animate)
    }

    /// Run one frame of the cursor glow. `pointer` is in the overlay
    /// surface's logical coordinates, `None` until the pointer has been seen.
    pub fn render_trail(
        &mut self,
        surface: Option<&mut dyn Surface>,
        pointer: Option<Vec2>,
    ) -> bool {
        self.trail.tick(pointer, surface, &mut self.rng)
    }

    pub fn render_backdrop(&self, surface: &mut dyn Surface) {
        surface.clear();
        draw_backdrop(surface, &self.backdrop);
    }

    #[must_use]
    pub fn thinking(&self) -> &ThinkingState {
        &self.thinking
    }

    #[must_use]
    pub fn trail(&self) -> &TrailEngine {
        &self.trail
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    #[must_use]
    pub fn backdrop(&self) -> &GradientBackdrop {
        &self.backdrop
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.settings.ui
    }

    /// Total time advanced through [`App::tick`].
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Tear down: pending toast timers, the typewriter reveal and the edge
    /// flicker are dropped and the glow stops spawning. Later ticks cannot
    /// bring any of them back.
    pub fn shutdown(&mut self) {
        info!(frames = self.frames, "shutting down");
        self.thinking.shutdown();
        self.toasts.deactivate();
        self.trail.set_active(false);
    }
}
