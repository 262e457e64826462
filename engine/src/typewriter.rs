//! Incremental text reveal on a fixed cadence.

use std::time::Duration;

use crate::timers::{TimerId, Timers};

pub const DEFAULT_CHAR_INTERVAL: Duration = Duration::from_millis(30);

/// Reveals a source string one character per interval.
///
/// At most one reveal is pending at any time: restarting cancels it before
/// scheduling the next, so a stale reveal can never touch the new source.
#[derive(Debug, Clone)]
pub struct Typewriter {
    source: String,
    /// Characters revealed so far.
    revealed: usize,
    /// Character count of `source`.
    total: usize,
    interval: Duration,
    timers: Timers<()>,
    pending: Option<TimerId>,
}

impl Typewriter {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            source: String::new(),
            revealed: 0,
            total: 0,
            interval,
            timers: Timers::new(),
            pending: None,
        }
    }

    /// Start revealing `text` from the beginning, whatever was showing before.
    pub fn restart(&mut self, text: impl Into<String>) {
        if let Some(id) = self.pending.take() {
            self.timers.cancel(id);
        }
        self.source = text.into();
        self.total = self.source.chars().count();
        self.revealed = 0;
        self.schedule_next();
    }

    /// Switch to `text`, restarting only if it differs from the current source.
    pub fn set_source(&mut self, text: &str) {
        if text != self.source {
            self.restart(text);
        }
    }

    /// Stop revealing. The visible prefix stays as it is.
    pub fn cancel(&mut self) {
        self.timers.cancel_all();
        self.pending = None;
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timers.advance(delta);
        while self.timers.pop_due().is_some() {
            self.pending = None;
            self.revealed = (self.revealed + 1).min(self.total);
            self.schedule_next();
        }
    }

    fn schedule_next(&mut self) {
        if self.revealed < self.total {
            self.pending = Some(self.timers.schedule(self.interval, ()));
        }
    }

    /// The revealed prefix of the source.
    #[must_use]
    pub fn visible(&self) -> &str {
        match self.source.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.source[..end],
            None => &self.source,
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Fully revealed and waiting for a new source.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    #[must_use]
    pub fn has_pending_reveal(&self) -> bool {
        self.pending.is_some_and(|id| self.timers.is_pending(id))
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_INTERVAL)
    }
}
