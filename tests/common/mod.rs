//! Shared test utilities and fixtures

#![allow(dead_code)]

use afterglow_engine::afterglow_types::{Rgb, Surface, Vec2};
use afterglow_engine::{App, Settings};

/// A seeded app with default settings.
pub fn seeded_app(seed: u64) -> App {
    App::new(Settings {
        seed: Some(seed),
        ..Settings::default()
    })
    .unwrap()
}

/// Surface that only counts what was drawn on it.
#[derive(Debug, Default)]
pub struct CountingSurface {
    pub size: Vec2,
    pub clears: usize,
    pub radials: usize,
    pub lines: usize,
}

impl CountingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            ..Self::default()
        }
    }
}

impl Surface for CountingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn device_pixel_ratio(&self) -> f32 {
        1.0
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn fill_radial(&mut self, _center: Vec2, _radius: f32, _color: Rgb, _alpha: f32) {
        self.radials += 1;
    }

    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _color: Rgb, _alpha: f32) {
        self.lines += 1;
    }
}
