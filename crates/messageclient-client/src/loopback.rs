//! In-process loopback client.
//!
//! Echoes every sent line back through the observer from its own task,
//! standing in for a remote peer when no server is available. Default mode
//! of the binary and the workhorse of end-to-end tests.

use std::sync::Arc;

use messageclient_api::{Client, ClientError, MessageObserver};
use tokio::sync::{mpsc, oneshot, watch};

use crate::registration::ObserverCell;

/// Client whose peer is the local process: every send comes straight back
/// as an inbound message.
pub struct LoopbackClient {
    outgoing: mpsc::UnboundedSender<String>,
    observer: ObserverCell,
    shutdown: watch::Sender<bool>,
}

impl LoopbackClient {
    /// Spawn the echo task and return the client.
    pub fn spawn() -> Arc<Self> {
        let (outgoing, outgoing_rx) = mpsc::unbounded_channel();
        let (observer, observer_rx) = ObserverCell::new();
        let (shutdown, _) = watch::channel(false);

        let client = Arc::new(Self { outgoing, observer, shutdown: shutdown.clone() });
        tokio::spawn(run_echo(outgoing_rx, observer_rx, shutdown, Arc::clone(&client)));
        client
    }
}

impl Client for LoopbackClient {
    fn send_message(&self, text: &str) -> Result<(), ClientError> {
        self.outgoing.send(text.to_owned()).map_err(|_| ClientError::Closed)
    }

    fn close(&self) -> Result<(), ClientError> {
        let _ = self.shutdown.send(true);
        Ok(())
    }

    fn address(&self) -> String {
        "loopback".to_owned()
    }

    fn register(&self, observer: Arc<dyn MessageObserver>) {
        self.observer.install(observer);
    }
}

/// Echo sent lines back as inbound messages until shutdown.
async fn run_echo(
    mut outgoing: mpsc::UnboundedReceiver<String>,
    observer_rx: oneshot::Receiver<Arc<dyn MessageObserver>>,
    shutdown: watch::Sender<bool>,
    client: Arc<LoopbackClient>,
) {
    let mut stop = shutdown.subscribe();

    let observer = tokio::select! {
        _ = stop.wait_for(|stop| *stop) => return,
        registered = observer_rx => match registered {
            Ok(observer) => observer,
            Err(_) => return,
        },
    };
    observer.connection_started(client);

    loop {
        tokio::select! {
            _ = stop.wait_for(|stop| *stop) => break,
            line = outgoing.recv() => match line {
                Some(line) => observer.received_message(&line),
                None => break,
            },
        }
    }
    observer.connection_closed();
}
