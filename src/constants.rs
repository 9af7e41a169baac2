//! Default tuning values for the viewer core.
//!
//! Everything here can be overridden through [`crate::config::ViewerConfig`];
//! these are the reference values the original interaction was tuned with.

/// Zoom constants.
pub mod zoom {
    /// Scale multiplier/divisor per wheel step
    pub const FACTOR: f32 = 1.2;
    /// Pan step size for keyboard navigation (pixels)
    pub const PAN_STEP: f32 = 100.0;
}

/// Host layout constants.
pub mod layout {
    /// Fraction of the window reserved on each side of the viewport
    /// (the viewer area is centered at 90% of the window width/height)
    pub const WINDOW_MARGIN_FRACTION: f32 = 0.05;
}

/// Transition constants.
pub mod transition {
    /// Duration of the animated transform transition (milliseconds)
    pub const DURATION_MS: u64 = 150;
}
