//! Application layer for MessageClient
//!
//! Pure state machine plus the thread-safe plumbing that feeds it: the
//! inbound message queue, the UI dispatcher channel, and the observer
//! adapter that client transports call into from their own tasks. All
//! widget mutation happens on the single UI task that drains the queue;
//! producers only enqueue and post.
//!
//! # Components
//!
//! - [`App`]: UI state machine (transcript, input line, window state)
//! - [`MessageQueue`]: unbounded FIFO between producers and the UI task
//! - [`UiSender`]: "run this on the UI task" primitive
//! - [`WindowObserver`]: the [`messageclient_api::MessageObserver`] a
//!   window registers with its client

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod command;
mod dispatch;
mod event;
mod input;
mod observer;
mod queue;
mod state;
mod transcript;

pub use action::AppAction;
pub use app::App;
pub use command::Command;
pub use dispatch::{UiNotice, UiSender, ui_channel};
pub use event::AppEvent;
pub use input::KeyInput;
pub use observer::WindowObserver;
pub use queue::MessageQueue;
pub use state::ConnectionState;
pub use transcript::Transcript;
