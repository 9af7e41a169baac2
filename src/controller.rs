//! The pan/zoom controller.
//!
//! Owns all interaction state for one viewing session and converts
//! discrete input events into a new, clamped transform plus a flag
//! telling the render sink whether to animate the change.

use crate::constants::{layout, zoom};
use crate::event::{PanDirection, ZoomDirection};
use crate::geometry::{Point, Size};
use crate::transform::{Transform, window_margin};

/// A computed transform plus whether the host should animate applying it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformUpdate {
    pub transform: Transform,
    /// Enable the transition animation for this update (zoom steps are
    /// animated, drag panning is not).
    pub transition: bool,
}

/// Tuning knobs for the controller, normally sourced from
/// [`crate::config::ViewerConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerOptions {
    /// Scale multiplier/divisor per zoom step, must be > 1
    pub scale_factor: f32,
    /// Pan step for discrete moves (pixels)
    pub key_move_step: f32,
    /// Fraction of the window the host layout reserves on each side of
    /// the viewport
    pub window_margin_fraction: f32,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            scale_factor: zoom::FACTOR,
            key_move_step: zoom::PAN_STEP,
            window_margin_fraction: layout::WINDOW_MARGIN_FRACTION,
        }
    }
}

/// Converts discrete input events (wheel, drag, arrow keys) into a new,
/// clamped [`Transform`].
///
/// One controller instance lives for exactly one viewing session; state
/// never survives across sessions. Operations are synchronous and must be
/// applied in the order the events occurred. Viewport and image sizes are
/// taken fresh on every call since the host layout can change between
/// events.
#[derive(Debug, Clone)]
pub struct PanZoomController {
    transform: Transform,
    dragged: bool,
    options: ControllerOptions,
}

impl PanZoomController {
    pub fn new(options: ControllerOptions) -> Self {
        Self {
            transform: Transform::identity(),
            dragged: false,
            options,
        }
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Whether the current pointer-down was followed by actual movement.
    /// Distinguishes click-to-close from drag-to-pan.
    pub fn dragged(&self) -> bool {
        self.dragged
    }

    /// Clear the drag flag at the start of a pointer gesture.
    pub fn begin_drag(&mut self) {
        self.dragged = false;
    }

    /// Record that the pointer moved during the current gesture.
    pub fn mark_dragged(&mut self) {
        self.dragged = true;
    }

    /// Return to the unscaled, uncentered state.
    ///
    /// Called on session start and whenever a zoom step would bring the
    /// scale to or below 1.
    pub fn reset(&mut self) -> TransformUpdate {
        self.transform = Transform::identity();
        log::debug!("🔄 View reset");
        TransformUpdate { transform: self.transform, transition: true }
    }

    /// Apply one zoom step anchored at `cursor` (window coordinates).
    ///
    /// Zooming out below the unity threshold snaps fully to the identity
    /// transform, never to an intermediate sub-1 scale. On zoom-out the
    /// pan is additionally clamped toward an interpolated bound so its
    /// magnitude shrinks monotonically to zero as the scale approaches 1.
    pub fn zoom(
        &mut self,
        direction: ZoomDirection,
        cursor: Point,
        viewport: Size,
        image: Size,
    ) -> TransformUpdate {
        let current = self.transform;
        let target_scale = match direction {
            ZoomDirection::In => current.scale * self.options.scale_factor,
            ZoomDirection::Out => current.scale / self.options.scale_factor,
        };
        if target_scale <= 1.0 {
            return self.reset();
        }

        let margin = window_margin(viewport, self.options.window_margin_fraction);
        let rect = current.display_rect(viewport, image, margin);
        let (dx, dy) = current.anchor_delta(target_scale, cursor, &rect);
        let mut pan_x = current.pan_x + dx;
        let mut pan_y = current.pan_y + dy;

        if direction == ZoomDirection::Out {
            // current.scale > 1 here: a zoom-out landing at or below 1
            // took the early return above.
            let (bound_x, bound_y) = current.shrink_bound(target_scale);
            pan_x = if pan_x > 0.0 { pan_x.min(bound_x) } else { pan_x.max(bound_x) };
            pan_y = if pan_y > 0.0 { pan_y.min(bound_y) } else { pan_y.max(bound_y) };
        }

        self.transform = Transform::new(target_scale, pan_x, pan_y);
        log::debug!(
            "🔍 Zoom {:?}: {:.2}x, pan ({:.1}, {:.1})",
            direction,
            target_scale,
            pan_x,
            pan_y
        );
        TransformUpdate { transform: self.transform, transition: true }
    }

    /// Apply a pan delta, clamped to the image overflow bounds.
    ///
    /// A no-op at scale 1 (panning is disabled at unity scale); callers
    /// normally check first, but calling anyway is tolerated.
    pub fn pan(&mut self, dx: f32, dy: f32, viewport: Size, image: Size) -> TransformUpdate {
        if self.transform.is_identity() {
            return TransformUpdate { transform: self.transform, transition: false };
        }
        self.transform = self.transform.pan_by(dx, dy, viewport, image);
        log::debug!(
            "🖐️ Pan ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            dx,
            dy,
            self.transform.pan_x,
            self.transform.pan_y
        );
        TransformUpdate { transform: self.transform, transition: false }
    }

    /// Pan by one fixed keyboard step.
    ///
    /// Directions follow the inverted screen-space convention: the arrow
    /// moves the visible window over the image, so `Up` translates the
    /// image down (positive pan on Y).
    pub fn discrete_move(
        &mut self,
        direction: PanDirection,
        viewport: Size,
        image: Size,
    ) -> TransformUpdate {
        let step = self.options.key_move_step;
        let (dx, dy) = match direction {
            PanDirection::Up => (0.0, step),
            PanDirection::Down => (0.0, -step),
            PanDirection::Left => (step, 0.0),
            PanDirection::Right => (-step, 0.0),
        };
        self.pan(dx, dy, viewport, image)
    }
}

impl Default for PanZoomController {
    fn default() -> Self {
        Self::new(ControllerOptions::default())
    }
}
