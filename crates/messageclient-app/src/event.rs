//! Application input events.
//!
//! Inputs that drive the [`crate::App`] state machine: terminal input on
//! one side, drained queue messages and connection notices on the other.

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// One inbound message drained from the queue, delivered in FIFO order
    /// on the UI task.
    Message(String),

    /// A connection came up.
    ConnectionStarted {
        /// Displayable endpoint of the new connection.
        address: String,
    },

    /// The current connection ended.
    ConnectionClosed,

    /// An outbound send failed after the input line was already cleared.
    SendFailed {
        /// Human-readable error description.
        error: String,
    },
}
