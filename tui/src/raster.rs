//! Pixel raster behind the animated surfaces, blitted onto the terminal with
//! half-block cells.
//!
//! Each terminal cell holds two vertically stacked pixels: `▀` draws the top
//! pixel in the foreground color and the bottom pixel in the background.

use afterglow_engine::afterglow_types::{Rgb, Surface, SurfaceError, Vec2};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

pub const HALF_BLOCK: &str = "▀";

/// Below this coverage a pixel is treated as transparent when blitting.
const VISIBLE_ALPHA: f32 = 1.0 / 255.0;

/// Premultiplied RGBA, each channel in `0..=1`.
type Pixel = [f32; 4];

#[derive(Debug, Clone)]
pub struct Raster {
    width: usize,
    height: usize,
    /// Physical pixels per logical unit.
    scale: f32,
    pixels: Vec<Pixel>,
}

impl Raster {
    pub fn new(width: usize, height: usize, scale: f32) -> Result<Self, SurfaceError> {
        let mut raster = Self {
            width: 0,
            height: 0,
            scale: 1.0,
            pixels: Vec::new(),
        };
        raster.set_scale(scale)?;
        raster.resize(width, height)?;
        Ok(raster)
    }

    /// A raster covering `area` at two pixels per cell.
    pub fn for_cells(area: Rect, scale: f32) -> Result<Self, SurfaceError> {
        Self::new(
            usize::from(area.width),
            usize::from(area.height) * 2,
            scale,
        )
    }

    /// Resize the backing store, discarding its contents.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::Empty {
                width: u16::try_from(width).unwrap_or(u16::MAX),
                height: u16::try_from(height).unwrap_or(u16::MAX),
            });
        }
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width * height, [0.0; 4]);
        Ok(())
    }

    /// Match the raster to `area`. Returns whether anything changed.
    pub fn fit_cells(&mut self, area: Rect) -> Result<bool, SurfaceError> {
        let width = usize::from(area.width);
        let height = usize::from(area.height) * 2;
        if width == self.width && height == self.height {
            return Ok(false);
        }
        self.resize(width, height)?;
        Ok(true)
    }

    pub fn set_scale(&mut self, scale: f32) -> Result<(), SurfaceError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(SurfaceError::InvalidPixelRatio(scale));
        }
        self.scale = scale;
        Ok(())
    }

    #[must_use]
    pub fn pixel_size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Logical position of the center of a terminal cell relative to `area`.
    #[must_use]
    pub fn cell_to_logical(&self, area: Rect, column: u16, row: u16) -> Option<Vec2> {
        if !area.contains((column, row).into()) {
            return None;
        }
        Some(self.relative_logical(area, column, row))
    }

    /// Like [`Raster::cell_to_logical`] but also maps cells outside `area`,
    /// which land outside the logical bounds.
    #[must_use]
    pub fn relative_logical(&self, area: Rect, column: u16, row: u16) -> Vec2 {
        let x = f32::from(column) - f32::from(area.x) + 0.5;
        let y = (f32::from(row) - f32::from(area.y)) * 2.0 + 1.0;
        Vec2::new(x, y) / self.scale
    }

    fn composite(&mut self, x: i32, y: i32, color: [f32; 3], alpha: f32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height || alpha <= 0.0 {
            return;
        }
        let alpha = alpha.min(1.0);
        let dst = &mut self.pixels[y * self.width + x];
        let keep = 1.0 - alpha;
        dst[0] = color[0] * alpha + dst[0] * keep;
        dst[1] = color[1] * alpha + dst[1] * keep;
        dst[2] = color[2] * alpha + dst[2] * keep;
        dst[3] = alpha + dst[3] * keep;
    }

    /// Write the raster into `buf` over `area`.
    ///
    /// Cells already holding half-blocks or blanks take both pixels. Cells
    /// holding text keep their glyph and only get their background tinted by
    /// the average of the two pixels. `base` stands in for cells without an
    /// RGB background.
    pub fn blend_into(&self, area: Rect, buf: &mut Buffer, base: Rgb) {
        let area = area.intersection(buf.area);
        let columns = usize::from(area.width).min(self.width);
        let rows = usize::from(area.height).min(self.height / 2);

        for row in 0..rows {
            for column in 0..columns {
                let top = self.pixels[row * 2 * self.width + column];
                let bottom = self.pixels[(row * 2 + 1) * self.width + column];
                if top[3] < VISIBLE_ALPHA && bottom[3] < VISIBLE_ALPHA {
                    continue;
                }

                let position = (area.x + column as u16, area.y + row as u16);
                let Some(cell) = buf.cell_mut(position) else {
                    continue;
                };
                let bg = rgb_of(cell.bg).unwrap_or(base);
                match cell.symbol() {
                    HALF_BLOCK => {
                        let fg = rgb_of(cell.fg).unwrap_or(base);
                        cell.set_fg(to_color(over(top, fg)));
                        cell.set_bg(to_color(over(bottom, bg)));
                    }
                    " " | "" => {
                        cell.set_symbol(HALF_BLOCK);
                        cell.set_fg(to_color(over(top, bg)));
                        cell.set_bg(to_color(over(bottom, bg)));
                    }
                    _ => {
                        let mean = [
                            (top[0] + bottom[0]) * 0.5,
                            (top[1] + bottom[1]) * 0.5,
                            (top[2] + bottom[2]) * 0.5,
                            (top[3] + bottom[3]) * 0.5,
                        ];
                        cell.set_bg(to_color(over(mean, bg)));
                    }
                }
            }
        }
    }
}

fn over(pixel: Pixel, base: Rgb) -> Rgb {
    let [r, g, b] = base.to_unit();
    let keep = 1.0 - pixel[3].min(1.0);
    Rgb::from_unit([pixel[0] + r * keep, pixel[1] + g * keep, pixel[2] + b * keep])
}

fn rgb_of(color: Color) -> Option<Rgb> {
    match color {
        Color::Rgb(r, g, b) => Some(Rgb::new(r, g, b)),
        Color::Black => Some(Rgb::BLACK),
        _ => None,
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

impl Surface for Raster {
    fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) / self.scale
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.scale
    }

    fn clear(&mut self) {
        self.pixels.fill([0.0; 4]);
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        let center = center * self.scale;
        let radius = radius * self.scale;
        let rgb = color.to_unit();

        // Sub-pixel discs still land on the pixel under their center.
        if radius < 1.0 {
            self.composite(
                center.x.floor() as i32,
                center.y.floor() as i32,
                rgb,
                alpha * radius.max(0.0),
            );
            return;
        }

        let min_x = (center.x - radius).floor() as i32;
        let max_x = (center.x + radius).ceil() as i32;
        let min_y = (center.y - radius).floor() as i32;
        let max_y = (center.y + radius).ceil() as i32;
        if max_x < 0 || max_y < 0 || min_x >= self.width as i32 || min_y >= self.height as i32 {
            return;
        }

        for y in min_y.max(0)..=max_y.min(self.height as i32 - 1) {
            for x in min_x.max(0)..=max_x.min(self.width as i32 - 1) {
                let offset = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                let distance = offset.length();
                if distance >= radius {
                    continue;
                }
                self.composite(x, y, rgb, alpha * (1.0 - distance / radius));
            }
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgb, alpha: f32) {
        let from = from * self.scale;
        let to = to * self.scale;
        let rgb = color.to_unit();
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as i32;
        let mut last = None;
        for i in 0..=steps {
            let point = from + delta * (i as f32 / steps as f32);
            let pixel = (point.x.floor() as i32, point.y.floor() as i32);
            if last == Some(pixel) {
                continue;
            }
            last = Some(pixel);
            self.composite(pixel.0, pixel.1, rgb, alpha);
        }
    }
}
