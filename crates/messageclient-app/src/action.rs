//! Application side-effects.
//!
//! Instructions produced by the [`crate::App`] state machine for the
//! runtime to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Close the window and disconnect.
    Quit,

    /// Hand one committed line to the client.
    Send {
        /// Outbound wire text, trailing newline included.
        line: String,
    },
}
