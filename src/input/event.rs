//! Platform-agnostic pointer events.
//!
//! These are fed into a [`PointerSource`](super::PointerSource), which
//! tracks per-frame pointer state for the
//! [`InputFacade`](super::InputFacade) queries.
//!
//! All positions are in screen space: origin bottom-left, Y up, physical
//! pixels. Window backends with a top-left origin (winit among them) must
//! flip Y against the surface height before feeding events in; the
//! `viewer`-feature conversions below do this.

/// A raw pointer event from the host window/platform layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Cursor (mouse) moved to an absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, bottom-left origin.
        y: f32,
    },
    /// Mouse button pressed or released.
    Button {
        /// Which button changed.
        button: PointerButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// A finger contact changed.
    Touch {
        /// Platform-assigned contact identifier.
        id: u64,
        /// Lifecycle stage of the contact.
        phase: TouchPhase,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, bottom-left origin.
        y: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Lifecycle stage of a single finger contact.
///
/// `Stationary` is produced by frame aging (a touch that neither began nor
/// moved this frame), not by platform events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Contact started this frame.
    Began,
    /// Contact moved this frame.
    Moved,
    /// Contact held without movement.
    Stationary,
    /// Contact lifted this frame.
    Ended,
    /// Contact cancelled by the platform (palm rejection, focus loss).
    Cancelled,
}

impl TouchPhase {
    /// Whether this phase terminates the contact.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => Self::Began,
            winit::event::TouchPhase::Moved => Self::Moved,
            winit::event::TouchPhase::Ended => Self::Ended,
            winit::event::TouchPhase::Cancelled => Self::Cancelled,
        }
    }
}

#[cfg(feature = "viewer")]
impl PointerEvent {
    /// Convert a winit touch event, flipping Y into bottom-left screen
    /// space against `surface_height`.
    #[must_use]
    pub fn from_winit_touch(touch: &winit::event::Touch, surface_height: f32) -> Self {
        Self::Touch {
            id: touch.id,
            phase: touch.phase.into(),
            x: touch.location.x as f32,
            y: surface_height - touch.location.y as f32,
        }
    }
}
