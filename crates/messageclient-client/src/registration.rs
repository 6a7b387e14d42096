//! Observer registration handoff.

use std::sync::{Arc, Mutex, PoisonError};

use messageclient_api::MessageObserver;
use tokio::sync::oneshot;

/// One-shot slot carrying the registered observer to the connection task.
///
/// The connection task waits on the receiving end before touching the
/// socket, which guarantees `connection_started` precedes the first
/// `received_message`.
pub(crate) struct ObserverCell {
    slot: Mutex<Option<oneshot::Sender<Arc<dyn MessageObserver>>>>,
}

impl ObserverCell {
    /// Create the cell and the receiving end for the connection task.
    pub(crate) fn new() -> (Self, oneshot::Receiver<Arc<dyn MessageObserver>>) {
        let (tx, rx) = oneshot::channel();
        (Self { slot: Mutex::new(Some(tx)) }, rx)
    }

    /// Hand `observer` to the connection task.
    ///
    /// The contract is one observer per client; later registrations are
    /// dropped with a warning.
    pub(crate) fn install(&self, observer: Arc<dyn MessageObserver>) {
        let sender = self.slot.lock().unwrap_or_else(PoisonError::into_inner).take();
        match sender {
            Some(tx) => {
                if tx.send(observer).is_err() {
                    tracing::debug!("connection task gone before registration");
                }
            },
            None => tracing::warn!("ignoring second observer registration"),
        }
    }
}
