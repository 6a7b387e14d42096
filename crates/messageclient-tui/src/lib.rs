//! Terminal UI for MessageClient
//!
//! Thin shell over the pure state machine in [`messageclient_app`]: this
//! crate owns the terminal, renders with ratatui, and runs the event loop
//! that serializes all widget mutation onto one task.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod runtime;
pub mod ui;

pub use runtime::{Runtime, RuntimeError};
