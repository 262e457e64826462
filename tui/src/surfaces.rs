//! Rasters backing the animated layers, kept across frames.

use ratatui::layout::Rect;
use tracing::{debug, warn};

use afterglow_engine::CORE_CANVAS;

use crate::raster::Raster;

/// Physical pixels per logical unit on the full-screen glow overlay, before
/// the configured device pixel ratio.
pub const OVERLAY_SCALE: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Backdrop,
    Core,
    Overlay,
}

/// Owns the backdrop, core and overlay rasters.
///
/// A layer that cannot be sized reports itself unavailable and the frame
/// skips it. After [`Surfaces::release`] every layer stays unavailable.
#[derive(Debug)]
pub struct Surfaces {
    backdrop: Option<Raster>,
    core: Option<Raster>,
    overlay: Option<Raster>,
    device_pixel_ratio: f32,
    released: bool,
}

impl Surfaces {
    #[must_use]
    pub fn new(device_pixel_ratio: f32) -> Self {
        Self {
            backdrop: None,
            core: None,
            overlay: None,
            device_pixel_ratio,
            released: false,
        }
    }

    /// Refit the overlay to the new terminal size right away and drop the
    /// layout-dependent layers so the next frame rebuilds them.
    pub fn resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "terminal resized");
        self.backdrop = None;
        self.core = None;
        let area = Rect::new(0, 0, width, height);
        let scale = self.scale_for(Layer::Overlay, area);
        Self::fit(&mut self.overlay, area, scale, self.released);
    }

    /// Drop every raster. Later frames draw only the text layers.
    pub fn release(&mut self) {
        debug!("releasing surfaces");
        self.released = true;
        self.backdrop = None;
        self.core = None;
        self.overlay = None;
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    #[must_use]
    pub fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    /// The raster for `layer`, sized to `area`, or `None` when unavailable.
    pub fn layer(&mut self, layer: Layer, area: Rect) -> Option<&mut Raster> {
        let scale = self.scale_for(layer, area);
        let slot = match layer {
            Layer::Backdrop => &mut self.backdrop,
            Layer::Core => &mut self.core,
            Layer::Overlay => &mut self.overlay,
        };
        Self::fit(slot, area, scale, self.released)
    }

    /// Pixels per logical unit for `layer` over `area`. The core always maps
    /// its logical canvas onto the full raster width.
    #[must_use]
    pub fn scale_for(&self, layer: Layer, area: Rect) -> f32 {
        match layer {
            Layer::Backdrop => self.device_pixel_ratio,
            Layer::Overlay => OVERLAY_SCALE * self.device_pixel_ratio,
            Layer::Core => f32::from(area.width.max(1)) / CORE_CANVAS.x,
        }
    }

    fn fit(
        slot: &mut Option<Raster>,
        area: Rect,
        scale: f32,
        released: bool,
    ) -> Option<&mut Raster> {
        if released || area.is_empty() {
            return None;
        }
        let fitted = match slot.take() {
            Some(mut raster) => raster
                .set_scale(scale)
                .and_then(|()| raster.fit_cells(area))
                .map(|_| raster),
            None => Raster::for_cells(area, scale),
        };
        match fitted {
            Ok(raster) => Some(slot.insert(raster)),
            Err(e) => {
                warn!("surface unavailable: {e}");
                None
            }
        }
    }
}
