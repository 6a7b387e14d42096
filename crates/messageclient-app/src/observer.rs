//! Observer adapter.
//!
//! [`WindowObserver`] is the observer a window registers with its client.
//! Callbacks arrive on client-owned threads; the adapter only enqueues and
//! posts, never touching widget state directly. Connection banners travel
//! through the same queue as inbound traffic, so their ordering relative
//! to messages is deterministic.

use std::sync::Arc;

use messageclient_api::{Client, MessageObserver, SharedClient};

use crate::{MessageQueue, UiNotice, UiSender};

/// Bridges client callbacks onto the UI task.
pub struct WindowObserver {
    queue: Arc<MessageQueue>,
    client: SharedClient,
    ui: UiSender,
}

impl WindowObserver {
    /// Create an adapter feeding `queue` and `ui`, maintaining `client` as
    /// the current connection handle.
    pub fn new(queue: Arc<MessageQueue>, client: SharedClient, ui: UiSender) -> Self {
        Self { queue, client, ui }
    }

    /// Enqueue a locally-generated banner line and request a drain.
    fn post_banner(&self, text: &str) {
        self.queue.enqueue(format!("-- {text}"));
        self.ui.post(UiNotice::Drain);
    }
}

impl MessageObserver for WindowObserver {
    fn received_message(&self, text: &str) {
        self.queue.enqueue(text.to_owned());
        self.ui.post(UiNotice::Drain);
    }

    fn connection_started(&self, client: Arc<dyn Client>) {
        let address = client.address();
        self.client.replace(client);

        // The show-window notice and the banner are separate posts; a fast
        // inbound message between them may drain ahead of the banner.
        self.ui.post(UiNotice::ConnectionStarted { address: address.clone() });
        self.post_banner(&format!("Connected to {address}\n"));
    }

    fn connection_closed(&self) {
        self.post_banner("Connection closed.\n");
        self.ui.post(UiNotice::ConnectionClosed);
    }
}

#[cfg(test)]
mod tests {
    use messageclient_api::ClientError;
    use tokio::sync::mpsc::UnboundedReceiver;

    use super::*;

    struct StubClient {
        addr: &'static str,
    }

    impl Client for StubClient {
        fn send_message(&self, _text: &str) -> Result<(), ClientError> {
            Ok(())
        }

        fn close(&self) -> Result<(), ClientError> {
            Ok(())
        }

        fn address(&self) -> String {
            self.addr.to_string()
        }

        fn register(&self, _observer: Arc<dyn MessageObserver>) {}
    }

    fn adapter()
    -> (WindowObserver, Arc<MessageQueue>, SharedClient, UnboundedReceiver<UiNotice>) {
        let (ui, rx) = crate::ui_channel();
        let queue = Arc::new(MessageQueue::new());
        let shared = SharedClient::new(Arc::new(StubClient { addr: "initial" }));
        let observer = WindowObserver::new(Arc::clone(&queue), shared.clone(), ui);
        (observer, queue, shared, rx)
    }

    #[test]
    fn received_message_enqueues_and_requests_drain() {
        let (observer, queue, _shared, mut rx) = adapter();

        observer.received_message("hello\n");

        assert_eq!(queue.drain_available(), vec!["hello\n"]);
        assert!(matches!(rx.try_recv(), Ok(UiNotice::Drain)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn connection_started_replaces_handle_then_banners() {
        let (observer, queue, shared, mut rx) = adapter();

        observer.connection_started(Arc::new(StubClient { addr: "1.2.3.4:9" }));

        assert_eq!(shared.get().address(), "1.2.3.4:9");
        assert_eq!(queue.drain_available(), vec!["-- Connected to 1.2.3.4:9\n"]);
        assert!(
            matches!(rx.try_recv(), Ok(UiNotice::ConnectionStarted { address }) if address == "1.2.3.4:9")
        );
        assert!(matches!(rx.try_recv(), Ok(UiNotice::Drain)));
    }

    #[test]
    fn connection_closed_banners_after_pending_traffic() {
        let (observer, queue, _shared, mut rx) = adapter();

        observer.received_message("m\n");
        observer.connection_closed();

        assert_eq!(queue.drain_available(), vec!["m\n", "-- Connection closed.\n"]);
        assert!(matches!(rx.try_recv(), Ok(UiNotice::Drain)));
        assert!(matches!(rx.try_recv(), Ok(UiNotice::Drain)));
        assert!(matches!(rx.try_recv(), Ok(UiNotice::ConnectionClosed)));
    }
}
