/// Presentation switches resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Freeze particle motion and suppress the cursor glow.
    pub reduced_motion: bool,
}

/// Last observed pointer location, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSample {
    pub column: u16,
    pub row: u16,
}
