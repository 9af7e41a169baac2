//! Pan/zoom transform mathematics.
//!
//! This module contains the geometry behind cursor-anchored zooming and
//! clamped panning, extracted from the controller for testability.

use crate::geometry::{Point, Rect, Size, clamp};

/// Per-axis margin (pixels) between the window edge and the viewport.
///
/// The host layout centers the viewport in the window and reserves
/// `fraction` of the window on each side, so the viewport spans
/// `1 - 2 * fraction` of it. Cursor positions arrive in window
/// coordinates while the viewport box is host-local; this margin bridges
/// the two spaces. A fraction that leaves no span collapses to zero.
pub fn window_margin(viewport: Size, fraction: f32) -> (f32, f32) {
    let span = 1.0 - 2.0 * fraction;
    if !(span > 0.0) {
        return (0.0, 0.0);
    }
    (
        finite_or_zero(viewport.width / span * fraction),
        finite_or_zero(viewport.height / span * fraction),
    )
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

/// Pan/zoom transform state.
///
/// `pan_x`/`pan_y` are a translation in pixels applied at the current
/// scale. The controller maintains `scale >= 1`, and `scale == 1` always
/// comes with a zero pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub pan_x: f32,
    pub pan_y: f32,
}

impl Transform {
    pub fn new(scale: f32, pan_x: f32, pan_y: f32) -> Self {
        Self { scale, pan_x, pan_y }
    }

    /// The unscaled, uncentered state (scale 1, no pan).
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0
    }

    /// On-screen bounding box of the image at the current scale and pan.
    ///
    /// The scaled image is centered in the viewport, translated by the
    /// pan offset, and shifted by `margin` into window coordinates so it
    /// can be compared against cursor positions.
    pub fn display_rect(&self, viewport: Size, image: Size, margin: (f32, f32)) -> Rect {
        let width = image.width * self.scale;
        let height = image.height * self.scale;
        let left = (viewport.width - width) / 2.0 + self.pan_x + margin.0;
        let top = (viewport.height - height) / 2.0 + self.pan_y + margin.1;
        Rect { left, top, right: left + width, bottom: top + height }
    }

    /// Pan adjustment that keeps the point under the cursor visually
    /// stationary while scale moves from the current value to
    /// `target_scale`.
    ///
    /// Returns zero when the cursor lies outside `rect` on either axis:
    /// zooming with the cursor off-image must not shift the pan.
    pub fn anchor_delta(&self, target_scale: f32, cursor: Point, rect: &Rect) -> (f32, f32) {
        if !rect.contains(cursor) {
            return (0.0, 0.0);
        }
        let center = rect.center();
        let clamped = rect.clamp_point(cursor);
        let delta_scale = target_scale - self.scale;
        (
            (center.x - clamped.x) / self.scale * delta_scale,
            (center.y - clamped.y) / self.scale * delta_scale,
        )
    }

    /// Interpolated zoom-out bound per axis: pan 0 at scale 1, the
    /// current pan at the current scale.
    ///
    /// Requires `scale > 1`. The controller's snap-to-unity early return
    /// is the only guard; zoom never reaches this with `scale == 1`.
    pub fn shrink_bound(&self, target_scale: f32) -> (f32, f32) {
        let ratio = (target_scale - 1.0) / (self.scale - 1.0);
        (self.pan_x * ratio, self.pan_y * ratio)
    }

    /// Maximum pan magnitude per axis: half the overflow of the scaled
    /// image beyond the viewport, or zero when the image fits.
    pub fn pan_bounds(&self, viewport: Size, image: Size) -> (f32, f32) {
        let bound_x = ((image.width * self.scale - viewport.width) / 2.0).max(0.0);
        let bound_y = ((image.height * self.scale - viewport.height) / 2.0).max(0.0);
        (finite_or_zero(bound_x), finite_or_zero(bound_y))
    }

    /// Apply a pan delta, clamped per axis to `pan_bounds`.
    ///
    /// The clamp range is widened to never be tighter than the current
    /// pan, so a resize that left the pan outside the nominal bound does
    /// not snap it back; it just cannot move further out.
    pub fn pan_by(&self, dx: f32, dy: f32, viewport: Size, image: Size) -> Transform {
        let (bound_x, bound_y) = self.pan_bounds(viewport, image);
        let max_x = bound_x.max(self.pan_x);
        let min_x = (-bound_x).min(self.pan_x);
        let max_y = bound_y.max(self.pan_y);
        let min_y = (-bound_y).min(self.pan_y);
        Transform {
            scale: self.scale,
            pan_x: clamp(self.pan_x + dx, min_x, max_x),
            pan_y: clamp(self.pan_y + dy, min_y, max_y),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
