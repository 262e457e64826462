use glam::Vec2;
use thiserror::Error;

use crate::Rgb;

/// A 2D raster drawing target.
///
/// Coordinates are logical units with the origin at the top-left corner.
/// Implementations scale them by [`Surface::device_pixel_ratio`] onto their
/// backing pixels, so callers never deal with physical resolution.
pub trait Surface {
    /// Logical size of the drawable area.
    fn size(&self) -> Vec2;

    /// Physical pixels per logical unit.
    fn device_pixel_ratio(&self) -> f32;

    /// Reset every pixel to fully transparent.
    fn clear(&mut self);

    /// Fill a disc whose color fades linearly from `alpha` at `center` to
    /// fully transparent at `radius`.
    fn fill_radial(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32);

    /// Stroke a one-pixel segment from `from` to `to`.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgb, alpha: f32);
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    #[error("surface size {width}x{height} has no pixels")]
    Empty { width: u16, height: u16 },
    #[error("device pixel ratio {0} is not a positive number")]
    InvalidPixelRatio(f32),
}
