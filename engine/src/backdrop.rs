//! Slowly drifting gradient blobs behind the thinking panel.

use std::time::Duration;

use afterglow_types::{Rgb, Vec2, lerp};

/// A blob that loops along closed keyframes at constant speed.
#[derive(Debug, Clone)]
pub struct Blob {
    x_keys: [f32; 5],
    y_keys: [f32; 5],
    period: Duration,
    color: Rgb,
    alpha: f32,
}

impl Blob {
    /// Offset from the resting position, in percent of the blob size.
    #[must_use]
    pub fn offset_percent(&self, elapsed: Duration) -> Vec2 {
        if self.period.is_zero() {
            return Vec2::new(self.x_keys[0], self.y_keys[0]);
        }
        let cycle = (elapsed.as_secs_f32() / self.period.as_secs_f32()).fract();
        let segments = (self.x_keys.len() - 1) as f32;
        let scaled = cycle * segments;
        let index = (scaled.floor() as usize).min(self.x_keys.len() - 2);
        let t = scaled - index as f32;
        Vec2::new(
            lerp(self.x_keys[index], self.x_keys[index + 1], t),
            lerp(self.y_keys[index], self.y_keys[index + 1], t),
        )
    }

    #[must_use]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

#[derive(Debug, Clone)]
pub struct GradientBackdrop {
    blobs: [Blob; 2],
    elapsed: Duration,
}

impl GradientBackdrop {
    #[must_use]
    pub fn new() -> Self {
        Self {
            blobs: [
                Blob {
                    x_keys: [0.0, 50.0, 0.0, -50.0, 0.0],
                    y_keys: [0.0, 25.0, 50.0, 25.0, 0.0],
                    period: Duration::from_secs(20),
                    color: Rgb::CORE_BLUE,
                    alpha: 0.15,
                },
                Blob {
                    x_keys: [50.0, 0.0, -50.0, 0.0, 50.0],
                    y_keys: [50.0, 25.0, 0.0, 25.0, 50.0],
                    period: Duration::from_secs(25),
                    color: Rgb::INDIGO,
                    alpha: 0.1,
                },
            ],
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }
}

impl Default for GradientBackdrop {
    fn default() -> Self {
        Self::new()
    }
}
