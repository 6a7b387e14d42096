//! Client transports for MessageClient
//!
//! Concrete implementations of the [`messageclient_api::Client`] contract.
//! [`TcpClient`] speaks newline-delimited text over a socket; the
//! [`LoopbackClient`] echoes sends back in-process, standing in for a
//! remote peer when no server is available.
//!
//! Both run their I/O on spawned tasks and deliver inbound lines through
//! the registered [`messageclient_api::MessageObserver`], so callers never
//! block on the network.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod loopback;
mod registration;
mod tcp;

pub use loopback::LoopbackClient;
pub use tcp::TcpClient;
