//! Window connection state.

/// Connection state of the window.
///
/// `Disconnected` exists only between construction and the first connection
/// callback, so the user effectively never sees it. A closed connection
/// leaves the window usable: the transcript stays, and sends fail through
/// their own error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// No connection callback observed yet.
    Disconnected,

    /// Connected; inbound messages flow and the input line is live.
    Connected {
        /// Displayable endpoint of the current connection.
        address: String,
    },

    /// The connection ended; the window may remain visible.
    Closed,
}
