//! Viewer session: input wiring on top of the controller.
//!
//! A [`ViewerSession`] lives from the moment the host shows an image to
//! the moment it closes or removes it. The host delivers input events and
//! fresh geometry; the session answers with an optional transform update
//! for the render sink and an optional action the host must carry out.

use crate::config::ViewerConfig;
use crate::controller::{PanZoomController, TransformUpdate};
use crate::event::{InputEvent, ZoomDirection};
use crate::geometry::Size;
use crate::keybindings::KeyBindings;

/// Host-visible outcome of one input event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionOutput {
    /// New transform to apply, if the event changed it.
    pub update: Option<TransformUpdate>,
    /// Action the host must carry out.
    pub action: Option<SessionAction>,
}

impl SessionOutput {
    fn none() -> Self {
        Self::default()
    }

    fn updated(update: TransformUpdate) -> Self {
        Self { update: Some(update), action: None }
    }
}

/// Actions the session cannot perform itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Close the viewer. Issued on a click that was not a drag; the
    /// host owns the actual close mechanism.
    CloseRequested,
}

/// One viewing session.
///
/// Re-opening always constructs a fresh session starting at scale 1;
/// nothing survives a close. An image swap inside a session needs no
/// special handling here: geometry arrives fresh on every call and the
/// transform intentionally persists across the swap.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    controller: PanZoomController,
    bindings: KeyBindings,
    pointer_down: bool,
}

impl ViewerSession {
    pub fn new(config: &ViewerConfig) -> Self {
        log::debug!("Viewer session opened");
        Self {
            controller: PanZoomController::new(config.controller_options()),
            bindings: config.keybindings.clone(),
            pointer_down: false,
        }
    }

    pub fn controller(&self) -> &PanZoomController {
        &self.controller
    }

    /// Feed one input event through the session.
    ///
    /// `viewport` and `image` must be the host's current geometry; they
    /// are never cached across calls.
    pub fn handle_event(&mut self, event: InputEvent, viewport: Size, image: Size) -> SessionOutput {
        match event {
            InputEvent::MousePressed { .. } => {
                self.pointer_down = true;
                self.controller.begin_drag();
                SessionOutput::none()
            }
            InputEvent::MouseMoved { dx, dy } => {
                if !self.pointer_down {
                    return SessionOutput::none();
                }
                // At unity scale movement neither pans nor counts as a
                // drag, so the follow-up click still closes the viewer.
                if self.controller.transform().is_identity() {
                    return SessionOutput::none();
                }
                if dx == 0.0 && dy == 0.0 {
                    return SessionOutput::none();
                }
                self.controller.mark_dragged();
                SessionOutput::updated(self.controller.pan(dx, dy, viewport, image))
            }
            InputEvent::MouseReleased { .. } => {
                self.pointer_down = false;
                SessionOutput::none()
            }
            InputEvent::Clicked { .. } => {
                if self.controller.dragged() {
                    SessionOutput::none()
                } else {
                    log::debug!("Close requested (click without drag)");
                    SessionOutput {
                        update: None,
                        action: Some(SessionAction::CloseRequested),
                    }
                }
            }
            InputEvent::MouseWheel { delta, position } => {
                let primary = delta.primary();
                if primary == 0.0 {
                    return SessionOutput::none();
                }
                let direction = if primary < 0.0 {
                    ZoomDirection::In
                } else {
                    ZoomDirection::Out
                };
                SessionOutput::updated(self.controller.zoom(direction, position, viewport, image))
            }
            InputEvent::KeyPressed { key } => match self.bindings.direction_for_key(key) {
                Some(direction) => {
                    SessionOutput::updated(self.controller.discrete_move(direction, viewport, image))
                }
                None => SessionOutput::none(),
            },
        }
    }
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Key, WheelDelta};
    use crate::geometry::Point;

    const VIEWPORT: Size = Size { width: 900.0, height: 900.0 };
    const IMAGE: Size = Size { width: 900.0, height: 900.0 };

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn zoomed_session() -> ViewerSession {
        init_logging();
        let mut session = ViewerSession::default();
        // One wheel-in step at the exact display center (the 5% margin
        // shifts the 900px viewport center to 500): scale 1.2, pan (0, 0).
        let out = session.handle_event(
            InputEvent::MouseWheel {
                delta: WheelDelta::new(0.0, -120.0, 0.0),
                position: Point::new(500.0, 500.0),
            },
            VIEWPORT,
            IMAGE,
        );
        assert!(out.update.is_some());
        session
    }

    #[test]
    fn test_click_without_drag_requests_close() {
        init_logging();
        let mut session = ViewerSession::default();
        let position = Point::new(100.0, 100.0);
        session.handle_event(InputEvent::MousePressed { position }, VIEWPORT, IMAGE);
        session.handle_event(InputEvent::MouseReleased { position }, VIEWPORT, IMAGE);
        let out = session.handle_event(InputEvent::Clicked { position }, VIEWPORT, IMAGE);
        assert_eq!(out.action, Some(SessionAction::CloseRequested));
        assert!(out.update.is_none());
    }

    #[test]
    fn test_click_after_drag_does_not_close() {
        let mut session = zoomed_session();
        let position = Point::new(100.0, 100.0);
        session.handle_event(InputEvent::MousePressed { position }, VIEWPORT, IMAGE);
        let moved = session.handle_event(
            InputEvent::MouseMoved { dx: 10.0, dy: 5.0 },
            VIEWPORT,
            IMAGE,
        );
        assert!(moved.update.is_some());
        session.handle_event(InputEvent::MouseReleased { position }, VIEWPORT, IMAGE);
        let out = session.handle_event(InputEvent::Clicked { position }, VIEWPORT, IMAGE);
        assert_eq!(out.action, None);
    }

    #[test]
    fn test_move_at_unity_scale_still_closes_on_click() {
        let mut session = ViewerSession::default();
        let position = Point::new(100.0, 100.0);
        session.handle_event(InputEvent::MousePressed { position }, VIEWPORT, IMAGE);
        let moved = session.handle_event(
            InputEvent::MouseMoved { dx: 25.0, dy: 0.0 },
            VIEWPORT,
            IMAGE,
        );
        assert!(moved.update.is_none());
        session.handle_event(InputEvent::MouseReleased { position }, VIEWPORT, IMAGE);
        let out = session.handle_event(InputEvent::Clicked { position }, VIEWPORT, IMAGE);
        assert_eq!(out.action, Some(SessionAction::CloseRequested));
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut session = zoomed_session();
        let out = session.handle_event(
            InputEvent::MouseMoved { dx: 10.0, dy: 10.0 },
            VIEWPORT,
            IMAGE,
        );
        assert!(out.update.is_none());
    }

    #[test]
    fn test_zero_movement_does_not_mark_drag() {
        let mut session = zoomed_session();
        let position = Point::new(100.0, 100.0);
        session.handle_event(InputEvent::MousePressed { position }, VIEWPORT, IMAGE);
        session.handle_event(InputEvent::MouseMoved { dx: 0.0, dy: 0.0 }, VIEWPORT, IMAGE);
        assert!(!session.controller().dragged());
    }

    #[test]
    fn test_zero_wheel_delta_is_ignored() {
        let mut session = ViewerSession::default();
        let out = session.handle_event(
            InputEvent::MouseWheel {
                delta: WheelDelta::default(),
                position: Point::new(400.0, 300.0),
            },
            VIEWPORT,
            IMAGE,
        );
        assert!(out.update.is_none());
        assert!(session.controller().transform().is_identity());
    }

    #[test]
    fn test_negative_wheel_delta_zooms_in_with_transition() {
        let mut session = ViewerSession::default();
        let out = session.handle_event(
            InputEvent::MouseWheel {
                delta: WheelDelta::new(0.0, -120.0, 0.0),
                position: Point::new(400.0, 300.0),
            },
            VIEWPORT,
            IMAGE,
        );
        let update = out.update.expect("zoom should produce an update");
        assert_eq!(update.transform.scale, 1.2);
        assert!(update.transition);
    }

    #[test]
    fn test_wheel_axis_fallback_zooms_out() {
        let mut session = zoomed_session();
        let out = session.handle_event(
            InputEvent::MouseWheel {
                // Only the z axis carries a delta; positive means out.
                delta: WheelDelta::new(0.0, 0.0, 120.0),
                position: Point::new(400.0, 300.0),
            },
            VIEWPORT,
            IMAGE,
        );
        let update = out.update.expect("zoom should produce an update");
        assert!(update.transform.is_identity());
    }

    #[test]
    fn test_bound_key_pans_without_transition() {
        let mut session = zoomed_session();
        let out = session.handle_event(InputEvent::KeyPressed { key: Key::Up }, VIEWPORT, IMAGE);
        let update = out.update.expect("bound key should pan");
        assert!(!update.transition);
        // Bound at scale 1.2: (900 * 1.2 - 900) / 2 = 90, under the 100px step.
        assert_eq!(update.transform.pan_y, 90.0);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut session = zoomed_session();
        let out = session.handle_event(
            InputEvent::KeyPressed { key: Key::Char('q') },
            VIEWPORT,
            IMAGE,
        );
        assert!(out.update.is_none());
        assert!(out.action.is_none());
    }
}
