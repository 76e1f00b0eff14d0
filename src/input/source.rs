//! Touch and mouse pointer sources.
//!
//! A [`PointerSource`] owns the transient per-frame pointer state. The host
//! event loop feeds it raw [`PointerEvent`]s and calls
//! [`begin_frame`](PointerSource::begin_frame) at each frame boundary;
//! the `began`/`ended` edge queries then refer to "this frame".
//!
//! Both variants run on any build, so desktop tests can exercise the touch
//! path with synthetic events.

use glam::Vec2;

use super::event::{PointerButton, PointerEvent, TouchPhase};
use crate::options::Backend;

/// Read-only view of the current primary pointer.
///
/// All queries are total; with no active pointer they return `false` or
/// the last known cursor position.
pub trait PointerSource {
    /// Ingest a raw pointer event.
    fn handle_event(&mut self, event: PointerEvent);

    /// Mark a frame boundary: clear edge flags and age touch phases.
    fn begin_frame(&mut self);

    /// Whether the primary pointer transitioned to "down" this frame.
    fn began(&self) -> bool;

    /// Whether the primary pointer was lifted this frame.
    fn ended(&self) -> bool;

    /// Current pointer position in screen space.
    fn position(&self) -> Vec2;
}

/// Construct the pointer source for a configured backend.
///
/// `Backend::Auto` resolves by target platform; the choice is logged.
#[must_use]
pub fn source_for_backend(backend: Backend) -> Box<dyn PointerSource> {
    let resolved = backend.resolve();
    log::info!("pointer backend: {resolved:?} (configured {backend:?})");
    match resolved {
        Backend::Touch => Box::new(TouchSource::new()),
        _ => Box::new(MouseSource::new()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MouseSource
// ─────────────────────────────────────────────────────────────────────────────

/// Pointer source backed by the mouse: the primary button plays the role
/// of the finger.
#[derive(Debug, Default)]
pub struct MouseSource {
    position: Vec2,
    pressed: bool,
    pressed_this_frame: bool,
    released_this_frame: bool,
}

impl MouseSource {
    /// Create a mouse source with no buttons held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PointerSource for MouseSource {
    fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::CursorMoved { x, y } => {
                self.position = Vec2::new(x, y);
            }
            PointerEvent::Button {
                button: PointerButton::Left,
                pressed,
            } => {
                if pressed && !self.pressed {
                    self.pressed_this_frame = true;
                } else if !pressed && self.pressed {
                    self.released_this_frame = true;
                }
                self.pressed = pressed;
            }
            // Secondary buttons and touch events are not the primary pointer
            PointerEvent::Button { .. } | PointerEvent::Touch { .. } => {}
        }
    }

    fn begin_frame(&mut self) {
        self.pressed_this_frame = false;
        self.released_this_frame = false;
    }

    fn began(&self) -> bool {
        self.pressed_this_frame
    }

    fn ended(&self) -> bool {
        self.released_this_frame
    }

    fn position(&self) -> Vec2 {
        self.position
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TouchSource
// ─────────────────────────────────────────────────────────────────────────────

/// A tracked finger contact.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TouchContact {
    id: u64,
    phase: TouchPhase,
    position: Vec2,
}

/// Pointer source backed by a multi-touch device.
///
/// Contacts are kept in arrival order; the first contact is the primary
/// pointer. A cursor position is still tracked as the fallback for
/// [`position`](PointerSource::position) when no contact is active.
#[derive(Debug, Default)]
pub struct TouchSource {
    touches: Vec<TouchContact>,
    cursor: Vec2,
}

impl TouchSource {
    /// Create a touch source with no active contacts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently active contacts.
    #[must_use]
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }
}

impl PointerSource for TouchSource {
    fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Touch { id, phase, x, y } => {
                let position = Vec2::new(x, y);
                match self.touches.iter_mut().find(|c| c.id == id) {
                    Some(contact) => {
                        contact.phase = phase;
                        contact.position = position;
                    }
                    None if phase == TouchPhase::Began => {
                        self.touches.push(TouchContact { id, phase, position });
                    }
                    // Updates for contacts with no Began seen are dropped
                    None => {}
                }
            }
            PointerEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
            }
            PointerEvent::Button { .. } => {}
        }
    }

    fn begin_frame(&mut self) {
        self.touches.retain(|c| !c.phase.is_terminal());
        for contact in &mut self.touches {
            contact.phase = TouchPhase::Stationary;
        }
    }

    fn began(&self) -> bool {
        // Exactly one contact, and it began this frame. Two or more
        // simultaneous contacts never count as a begin.
        self.touches.len() == 1 && self.touches[0].phase == TouchPhase::Began
    }

    fn ended(&self) -> bool {
        self.touches
            .first()
            .is_some_and(|c| c.phase.is_terminal())
    }

    fn position(&self) -> Vec2 {
        self.touches
            .first()
            .map_or(self.cursor, |c| c.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(id: u64, phase: TouchPhase, x: f32, y: f32) -> PointerEvent {
        PointerEvent::Touch { id, phase, x, y }
    }

    #[test]
    fn mouse_press_edge_lasts_one_frame() {
        let mut mouse = MouseSource::new();
        mouse.begin_frame();
        assert!(!mouse.began() && !mouse.ended());

        mouse.handle_event(PointerEvent::Button {
            button: PointerButton::Left,
            pressed: true,
        });
        assert!(mouse.began());
        assert!(!mouse.ended());

        mouse.begin_frame();
        assert!(!mouse.began());

        mouse.handle_event(PointerEvent::Button {
            button: PointerButton::Left,
            pressed: false,
        });
        assert!(mouse.ended());
    }

    #[test]
    fn mouse_ignores_secondary_buttons() {
        let mut mouse = MouseSource::new();
        mouse.handle_event(PointerEvent::Button {
            button: PointerButton::Right,
            pressed: true,
        });
        assert!(!mouse.began());
    }

    #[test]
    fn mouse_tracks_cursor_position() {
        let mut mouse = MouseSource::new();
        mouse.handle_event(PointerEvent::CursorMoved { x: 42.0, y: 7.0 });
        assert_eq!(mouse.position(), Vec2::new(42.0, 7.0));
    }

    #[test]
    fn single_touch_begins() {
        let mut source = TouchSource::new();
        source.handle_event(touch(1, TouchPhase::Began, 100.0, 200.0));
        assert!(source.began());
        assert!(!source.ended());
        assert_eq!(source.position(), Vec2::new(100.0, 200.0));
    }

    #[test]
    fn two_simultaneous_touches_never_begin() {
        let mut source = TouchSource::new();
        source.handle_event(touch(1, TouchPhase::Began, 100.0, 200.0));
        source.handle_event(touch(2, TouchPhase::Began, 300.0, 400.0));
        assert!(!source.began());
        // Position still reports the first contact
        assert_eq!(source.position(), Vec2::new(100.0, 200.0));
    }

    #[test]
    fn touch_phase_ages_across_frames() {
        let mut source = TouchSource::new();
        source.handle_event(touch(1, TouchPhase::Began, 0.0, 0.0));
        assert!(source.began());

        source.begin_frame();
        assert!(!source.began());
        assert_eq!(source.touch_count(), 1);

        source.handle_event(touch(1, TouchPhase::Ended, 0.0, 0.0));
        assert!(source.ended());

        source.begin_frame();
        assert_eq!(source.touch_count(), 0);
        assert!(!source.ended());
    }

    #[test]
    fn cancelled_touch_counts_as_ended() {
        let mut source = TouchSource::new();
        source.handle_event(touch(1, TouchPhase::Began, 0.0, 0.0));
        source.begin_frame();
        source.handle_event(touch(1, TouchPhase::Cancelled, 0.0, 0.0));
        assert!(source.ended());
    }

    #[test]
    fn no_touches_falls_back_to_cursor() {
        let mut source = TouchSource::new();
        source.handle_event(PointerEvent::CursorMoved { x: 5.0, y: 6.0 });
        assert_eq!(source.position(), Vec2::new(5.0, 6.0));
        assert!(!source.began());
        assert!(!source.ended());
    }

    #[test]
    fn unknown_contact_updates_are_dropped() {
        let mut source = TouchSource::new();
        source.handle_event(touch(9, TouchPhase::Moved, 1.0, 1.0));
        assert_eq!(source.touch_count(), 0);
    }
}
