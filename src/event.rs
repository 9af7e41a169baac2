//! Input events delivered by the host.
//!
//! The host is responsible for filtering events to "viewer is active" and
//! for delivering them in the order they occurred; every event here maps
//! to one synchronous controller step.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Events the viewer session responds to.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Mouse button pressed.
    MousePressed { position: Point },
    /// Mouse moved; `dx`/`dy` are the movement since the previous event.
    MouseMoved { dx: f32, dy: f32 },
    /// Mouse button released.
    MouseReleased { position: Point },
    /// Click (press and release without leaving the element).
    Clicked { position: Point },
    /// Mouse wheel scrolled, cursor position in window coordinates.
    MouseWheel { delta: WheelDelta, position: Point },
    /// Keyboard key pressed.
    KeyPressed { key: Key },
}

/// Wheel deltas along the three scroll axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelDelta {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WheelDelta {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The first nonzero component in x, y, z order, or zero when the
    /// whole delta is zero (such an event is ignored entirely).
    pub fn primary(&self) -> f32 {
        if self.x != 0.0 {
            self.x
        } else if self.y != 0.0 {
            self.y
        } else {
            self.z
        }
    }
}

/// Keyboard keys (simplified set, enough for viewer navigation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Space,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Direction of a zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Direction of a discrete (keyboard) pan step.
///
/// Directions name where the visible window moves, not the image: the
/// image is translated the opposite way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}
