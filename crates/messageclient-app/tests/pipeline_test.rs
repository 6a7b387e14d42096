//! Integration tests for the inbound pipeline.
//!
//! Drives the observer adapter exactly as a client transport would, pumps
//! the dispatcher the way the UI loop does, and checks the transcript.

use std::sync::Arc;

use messageclient_api::{Client, ClientError, MessageObserver, SharedClient};
use messageclient_app::{App, AppEvent, MessageQueue, UiNotice, WindowObserver, ui_channel};
use tokio::sync::mpsc::UnboundedReceiver;

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

struct Harness {
    app: App,
    queue: Arc<MessageQueue>,
    shared: SharedClient,
    observer: Arc<WindowObserver>,
    notices: UnboundedReceiver<UiNotice>,
}

impl Harness {
    fn new() -> Self {
        let (ui, notices) = ui_channel();
        let queue = Arc::new(MessageQueue::new());
        let shared = SharedClient::new(Arc::new(StubClient { addr: "initial" }));
        let observer = Arc::new(WindowObserver::new(Arc::clone(&queue), shared.clone(), ui));
        Self { app: App::new(), queue, shared, observer, notices }
    }

    /// Run pending UI work to completion, exactly as the event loop does.
    fn pump(&mut self) {
        while let Ok(notice) = self.notices.try_recv() {
            match notice {
                UiNotice::Drain => {
                    for message in self.queue.drain_available() {
                        let _ = self.app.handle(AppEvent::Message(message));
                    }
                },
                UiNotice::ConnectionStarted { address } => {
                    let _ = self.app.handle(AppEvent::ConnectionStarted { address });
                },
                UiNotice::ConnectionClosed => {
                    let _ = self.app.handle(AppEvent::ConnectionClosed);
                },
            }
        }
    }

    fn transcript(&self) -> &str {
        self.app.transcript().as_str()
    }
}

#[test]
fn inbound_messages_appear_in_delivery_order() {
    let mut h = Harness::new();

    h.observer.received_message("hello\n");
    h.observer.received_message("world\n");
    h.pump();

    assert_eq!(h.transcript(), "hello\nworld\n");
}

#[test]
fn connected_banner_precedes_subsequent_traffic() {
    let mut h = Harness::new();

    h.observer.connection_started(Arc::new(StubClient { addr: "1.2.3.4:9" }));
    h.observer.received_message("hi\n");
    h.pump();

    assert_eq!(h.transcript(), "-- Connected to 1.2.3.4:9\nhi\n");
    assert_eq!(h.shared.get().address(), "1.2.3.4:9");
}

#[test]
fn clear_resets_the_transcript() {
    let mut h = Harness::new();

    h.observer.received_message("a\n");
    h.observer.received_message("!clear\n");
    h.observer.received_message("b\n");
    h.pump();

    assert_eq!(h.transcript(), "b\n");
}

#[test]
fn unknown_commands_leave_no_trace() {
    let mut h = Harness::new();

    h.observer.received_message("!unknown foo\n");
    h.observer.received_message("x\n");
    h.pump();

    assert_eq!(h.transcript(), "x\n");
}

#[test]
fn full_session_transcript() {
    let mut h = Harness::new();

    h.observer.connection_started(Arc::new(StubClient { addr: "1.2.3.4:9" }));
    h.observer.received_message("m\n");
    h.observer.connection_closed();
    h.pump();

    assert_eq!(h.transcript(), "-- Connected to 1.2.3.4:9\nm\n-- Connection closed.\n");
}

#[test]
fn over_posted_drains_are_noops() {
    let mut h = Harness::new();

    // Two messages post two drains; the first drain takes both.
    h.observer.received_message("one\n");
    h.observer.received_message("two\n");
    h.pump();

    assert_eq!(h.transcript(), "one\ntwo\n");
}

#[test]
fn threaded_producers_keep_per_producer_order() {
    let mut h = Harness::new();
    let producers = 4;
    let per_producer = 50;

    let handles: Vec<_> = (0..producers)
        .map(|producer| {
            let observer = Arc::clone(&h.observer);
            std::thread::spawn(move || {
                for n in 0..per_producer {
                    observer.received_message(&format!("{producer}:{n}\n"));
                }
            })
        })
        .collect();
    for handle in handles {
        let _ = handle.join();
    }
    h.pump();

    let lines: Vec<&str> = h.transcript().lines().collect();
    assert_eq!(lines.len(), producers * per_producer);

    for producer in 0..producers {
        let prefix = format!("{producer}:");
        let seen: Vec<_> = lines.iter().filter(|l| l.starts_with(&prefix)).collect();
        let expected: Vec<_> = (0..per_producer).map(|n| format!("{producer}:{n}")).collect();
        assert_eq!(seen.len(), per_producer);
        for (got, want) in seen.iter().zip(expected.iter()) {
            assert_eq!(**got, want.as_str());
        }
    }
}
