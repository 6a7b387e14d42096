//! Connection contracts for MessageClient
//!
//! Defines the two traits that bind the UI to a transport implementation:
//! [`Client`] (outbound messages and lifecycle, consumed by the UI) and
//! [`MessageObserver`] (inbound messages and connection events, implemented
//! by the UI). Transport implementations live elsewhere; this crate carries
//! only the contracts and their error type.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod client;
mod error;
mod observer;

pub use client::{Client, SharedClient};
pub use error::ClientError;
pub use observer::MessageObserver;
