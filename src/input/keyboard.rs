//! On-screen keyboard management as a per-frame polling state machine.
//!
//! The platform keyboard itself (an OS overlay) is reached through the
//! [`KeyboardHost`] trait; the engine adapter implements it over whatever
//! the platform provides. [`KeyboardSession`] tracks the open/close
//! lifecycle and enforces the configured text length limit on every poll.

use log::debug;

/// Engine adapter over the platform's on-screen keyboard.
pub trait KeyboardHost {
    /// Whether the keyboard overlay is fully visible on screen.
    fn visible(&self) -> bool;

    /// Whether the user has committed the field (return/done key).
    fn done(&self) -> bool;

    /// Current text in the edit field.
    fn text(&self) -> &str;

    /// Truncate the edit field to at most `max_chars` characters.
    fn truncate(&mut self, max_chars: usize);

    /// Deactivate the keyboard, committing the field as-is.
    fn dismiss(&mut self);
}

/// Lifecycle stage of an on-screen keyboard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardState {
    /// No session in progress.
    #[default]
    Closed,
    /// Session started, waiting for the overlay to become visible.
    Opening,
    /// Overlay visible, user editing.
    Open,
    /// Field committed, waiting for the overlay to go away.
    Closing,
}

/// A single on-screen keyboard editing session, driven by per-frame polls.
#[derive(Debug, Default)]
pub struct KeyboardSession {
    state: KeyboardState,
    /// Maximum field length in characters, if limited.
    max_length: Option<usize>,
}

impl KeyboardSession {
    /// Create an idle session with an optional text length limit.
    #[must_use]
    pub fn new(max_length: Option<usize>) -> Self {
        Self {
            state: KeyboardState::Closed,
            max_length,
        }
    }

    /// Current lifecycle stage.
    #[must_use]
    pub fn state(&self) -> KeyboardState {
        self.state
    }

    /// Whether a session is in progress (anything but `Closed`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state != KeyboardState::Closed
    }

    /// Start a session. The host is expected to have opened the platform
    /// keyboard already; polling takes over from here.
    pub fn begin(&mut self) {
        debug!("keyboard session: begin");
        self.state = KeyboardState::Opening;
    }

    /// Advance the session by one frame. Returns whether the session is
    /// still active.
    pub fn poll(&mut self, host: &mut dyn KeyboardHost) -> bool {
        match self.state {
            KeyboardState::Closed => {}
            KeyboardState::Opening => {
                if host.visible() {
                    debug!("keyboard session: open");
                    self.state = KeyboardState::Open;
                }
            }
            KeyboardState::Open => {
                self.enforce_limit(host);
                if host.done() {
                    self.state = KeyboardState::Closing;
                } else if !host.visible() {
                    // Overlay dismissed externally: commit the field as-is
                    host.dismiss();
                    self.state = KeyboardState::Closing;
                }
            }
            KeyboardState::Closing => {
                self.enforce_limit(host);
                if !host.visible() {
                    debug!("keyboard session: closed");
                    self.state = KeyboardState::Closed;
                }
            }
        }
        self.is_active()
    }

    /// Clamp the field to the configured length limit.
    fn enforce_limit(&self, host: &mut dyn KeyboardHost) {
        if let Some(max) = self.max_length {
            if host.text().chars().count() > max {
                host.truncate(max);
            }
        }
    }
}
