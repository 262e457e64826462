//! Plain RGB colors shared by the simulation and the renderers.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Core particle blue (`#3b82f6`).
    pub const CORE_BLUE: Self = Self::new(59, 130, 246);
    /// Secondary indigo used for the backdrop blobs (`#6366f1`).
    pub const INDIGO: Self = Self::new(99, 102, 241);
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as floats in `[0, 1]`.
    #[must_use]
    pub fn to_unit(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }

    #[must_use]
    pub fn from_unit(channels: [f32; 3]) -> Self {
        let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(to_byte(channels[0]), to_byte(channels[1]), to_byte(channels[2]))
    }

    /// Mix toward `other` by `t` (0 keeps `self`, 1 yields `other`).
    #[must_use]
    pub fn mix(self, other: Self, t: f32) -> Self {
        let a = self.to_unit();
        let b = other.to_unit();
        let t = t.clamp(0.0, 1.0);
        Self::from_unit([
            crate::lerp(a[0], b[0], t),
            crate::lerp(a[1], b[1], t),
            crate::lerp(a[2], b[2], t),
        ])
    }
}
