//! Outbound client contract and the shared handle cell.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{ClientError, MessageObserver};

/// Handle to an active connection.
///
/// Implementations own the transport; the UI only sends lines and asks the
/// connection to stop. One message unit is one line including its trailing
/// newline.
pub trait Client: Send + Sync {
    /// Send one outbound message.
    ///
    /// Fails with [`ClientError::Closed`] once the transport is gone.
    fn send_message(&self, text: &str) -> Result<(), ClientError>;

    /// Close the connection.
    ///
    /// Best-effort: the registered observer receives
    /// [`MessageObserver::connection_closed`] once the transport winds down.
    fn close(&self) -> Result<(), ClientError>;

    /// Displayable endpoint identifier.
    fn address(&self) -> String;

    /// Register the observer that receives inbound messages and connection
    /// lifecycle callbacks.
    fn register(&self, observer: Arc<dyn MessageObserver>);
}

/// Shared, replaceable reference to the current [`Client`].
///
/// Written when a connection (re)starts and read on every commit of the
/// input line, potentially from different threads. Reads always observe the
/// initial or a later-installed client.
#[derive(Clone)]
pub struct SharedClient {
    inner: Arc<Mutex<Arc<dyn Client>>>,
}

impl SharedClient {
    /// Create a cell holding `client`.
    pub fn new(client: Arc<dyn Client>) -> Self {
        Self { inner: Arc::new(Mutex::new(client)) }
    }

    /// Install a new client, replacing the previous one.
    pub fn replace(&self, client: Arc<dyn Client>) {
        *self.lock() = client;
    }

    /// Current client.
    pub fn get(&self) -> Arc<dyn Client> {
        Arc::clone(&self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Arc<dyn Client>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
