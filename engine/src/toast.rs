//! Transient notifications with per-toast auto-dismiss.

use std::time::Duration;

use afterglow_types::{Toast, ToastError, ToastId, ToastKind};
use tracing::{debug, error};

use crate::timers::{TimerId, Timers};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone)]
struct Entry {
    toast: Toast,
    timer: TimerId,
}

/// FIFO of toasts, each removed by its own timer or by explicit dismissal,
/// whichever comes first.
///
/// The queue only accepts operations while its owner has it mounted; using it
/// otherwise is a caller bug and is reported as [`ToastError::Inactive`].
#[derive(Debug, Clone)]
pub struct ToastQueue {
    entries: Vec<Entry>,
    timers: Timers<ToastId>,
    clock: Duration,
    default_duration: Duration,
    active: bool,
}

impl ToastQueue {
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            entries: Vec::new(),
            timers: Timers::new(),
            clock: Duration::ZERO,
            default_duration,
            active: false,
        }
    }

    pub fn activate(&mut self) {
        debug!("toast queue mounted");
        self.active = true;
    }

    /// Unmount: drop every toast and every pending dismissal.
    pub fn deactivate(&mut self) {
        if self.active {
            debug!(dropped = self.entries.len(), "toast queue unmounted");
        }
        self.active = false;
        self.timers.cancel_all();
        self.entries.clear();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    fn ensure_active(&self, operation: &'static str) -> Result<(), ToastError> {
        if self.active {
            Ok(())
        } else {
            error!(operation, "toast queue used while not mounted");
            Err(ToastError::Inactive)
        }
    }

    /// Push with the queue's default duration.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
    ) -> Result<ToastId, ToastError> {
        self.push_with_duration(message, kind, self.default_duration)
    }

    pub fn push_with_duration(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Duration,
    ) -> Result<ToastId, ToastError> {
        self.ensure_active("push")?;
        let id = ToastId::new();
        let timer = self.timers.schedule(duration, id);
        self.entries.push(Entry {
            toast: Toast {
                id,
                message: message.into(),
                kind,
                created_at: self.clock,
            },
            timer,
        });
        debug!(%id, kind = kind.as_str(), ?duration, "toast pushed");
        Ok(id)
    }

    /// Remove a toast now. Dismissing an unknown or already removed token is
    /// a no-op; returns whether anything was removed.
    pub fn dismiss(&mut self, id: ToastId) -> Result<bool, ToastError> {
        self.ensure_active("dismiss")?;
        Ok(self.remove(id))
    }

    /// Dismiss the most recently pushed toast still showing.
    pub fn dismiss_newest(&mut self) -> Result<Option<ToastId>, ToastError> {
        self.ensure_active("dismiss_newest")?;
        let newest = self.entries.last().map(|entry| entry.toast.id);
        if let Some(id) = newest {
            self.remove(id);
        }
        Ok(newest)
    }

    fn remove(&mut self, id: ToastId) -> bool {
        let Some(index) = self.entries.iter().position(|e| e.toast.id == id) else {
            return false;
        };
        let entry = self.entries.remove(index);
        self.timers.cancel(entry.timer);
        true
    }

    /// Advance the queue clock and expire due toasts.
    ///
    /// An inactive queue holds nothing, so advancing it only moves the clock.
    pub fn advance(&mut self, delta: Duration) {
        self.clock = self.clock.saturating_add(delta);
        for id in self.timers.drain(delta) {
            if let Some(index) = self.entries.iter().position(|e| e.toast.id == id) {
                self.entries.remove(index);
                debug!(%id, "toast expired");
            }
        }
    }

    /// Toasts in arrival order.
    pub fn toasts(&self) -> impl ExactSizeIterator<Item = &Toast> {
        self.entries.iter().map(|entry| &entry.toast)
    }

    /// Time since the toast was pushed, if it is still showing.
    #[must_use]
    pub fn age(&self, id: ToastId) -> Option<Duration> {
        self.entries
            .iter()
            .find(|entry| entry.toast.id == id)
            .map(|entry| self.clock.saturating_sub(entry.toast.created_at))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pending auto-dismiss timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}
