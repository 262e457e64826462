//! Toast notification data.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use uuid::Uuid;

/// Opaque unique token identifying one pushed toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(Uuid);

impl ToastId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
}

impl ToastKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    /// Offset on the owning queue's clock when the toast was pushed.
    pub created_at: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToastError {
    /// The queue was used while its owning context was not mounted.
    #[error("toast queue used outside an active context")]
    Inactive,
}
