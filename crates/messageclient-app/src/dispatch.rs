//! UI dispatcher.
//!
//! Producers hand work to the UI task by posting [`UiNotice`]s; the UI task
//! receives them serially in submission order. Posting never blocks and is
//! safe from any thread. Once the UI loop has exited, notices are dropped.

use tokio::sync::mpsc;

/// Work posted to the UI task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiNotice {
    /// Drain the message queue into the transcript.
    Drain,

    /// A connection came up; show the window and update the status line.
    ConnectionStarted {
        /// Displayable endpoint of the new connection.
        address: String,
    },

    /// The current connection ended.
    ConnectionClosed,
}

/// Posting half of the UI dispatcher.
#[derive(Debug, Clone)]
pub struct UiSender {
    tx: mpsc::UnboundedSender<UiNotice>,
}

impl UiSender {
    /// Post a notice to the UI task. Never blocks; dropped if the UI loop
    /// is gone.
    pub fn post(&self, notice: UiNotice) {
        if self.tx.send(notice).is_err() {
            tracing::debug!("UI loop stopped, dropping notice");
        }
    }
}

/// Create the dispatcher pair: a cloneable sender for producers and the
/// receiving end owned by the UI task.
pub fn ui_channel() -> (UiSender, mpsc::UnboundedReceiver<UiNotice>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (UiSender { tx }, rx)
}
