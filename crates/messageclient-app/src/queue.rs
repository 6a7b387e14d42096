//! Inbound message queue.
//!
//! Unbounded FIFO between client producer threads and the UI task.
//! Enqueues are serialized by the internal lock, so FIFO order holds even
//! when producers contend. Draining takes everything currently queued
//! without blocking; an over-posted drain sees an empty queue and is a
//! no-op.

use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Unbounded FIFO of inbound messages awaiting UI insertion.
#[derive(Debug, Default)]
pub struct MessageQueue {
    inner: Mutex<VecDeque<String>>,
}

impl MessageQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message at the tail. Callable from any thread; never fails.
    pub fn enqueue(&self, message: String) {
        self.lock().push_back(message);
    }

    /// Take every message currently queued, in FIFO order.
    ///
    /// Snapshot drain: messages enqueued after this returns wait for the
    /// next drain.
    pub fn drain_available(&self) -> Vec<String> {
        self.lock().drain(..).collect()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
