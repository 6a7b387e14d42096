//! Inbound observer contract.

use std::sync::Arc;

use crate::Client;

/// Receives inbound messages and connection lifecycle events.
///
/// Callbacks may arrive from arbitrary threads owned by the client
/// implementation and must not block.
pub trait MessageObserver: Send + Sync {
    /// One inbound message unit (a line including its trailing newline).
    fn received_message(&self, text: &str);

    /// A connection is up. May fire more than once across reconnects, each
    /// call supplying a fresh client handle.
    fn connection_started(&self, client: Arc<dyn Client>);

    /// The current connection ended.
    fn connection_closed(&self);
}
