//! Input handling: pointer event types, the touch/mouse source
//! abstraction, and the unified query facade.

/// Platform-agnostic pointer events.
pub mod event;
/// Unified pointer query surface.
pub mod facade;
/// On-screen keyboard polling state machine.
pub mod keyboard;
/// Touch and mouse pointer sources.
pub mod source;

pub use event::{PointerButton, PointerEvent, TouchPhase};
pub use facade::InputFacade;
pub use keyboard::{KeyboardHost, KeyboardSession, KeyboardState};
pub use source::{MouseSource, PointerSource, TouchSource};
