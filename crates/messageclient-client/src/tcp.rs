//! Line-framed TCP client.
//!
//! One connection, two tasks: a reader that turns socket lines into
//! observer callbacks and a writer fed by an unbounded channel so sends
//! never block the caller. Either task stopping (socket EOF, write error,
//! or an explicit `close`) flips the shared shutdown flag and takes the
//! other task down with it.

use std::sync::Arc;

use messageclient_api::{Client, ClientError, MessageObserver};
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::{
        TcpStream,
        tcp::{OwnedReadHalf, OwnedWriteHalf},
    },
    sync::{mpsc, oneshot, watch},
};

use crate::registration::ObserverCell;

/// TCP connection speaking newline-delimited text.
pub struct TcpClient {
    addr: String,
    outgoing: mpsc::UnboundedSender<String>,
    observer: ObserverCell,
    shutdown: watch::Sender<bool>,
}

impl TcpClient {
    /// Connect to `addr` and spawn the connection tasks.
    ///
    /// The reader stays idle until an observer is registered, then issues
    /// `connection_started` and delivers one callback per inbound line,
    /// trailing newline restored.
    pub async fn connect(addr: &str) -> Result<Arc<Self>, ClientError> {
        let stream = TcpStream::connect(addr).await?;
        let (read_half, write_half) = stream.into_split();

        let (outgoing, outgoing_rx) = mpsc::unbounded_channel();
        let (observer, observer_rx) = ObserverCell::new();
        let (shutdown, _) = watch::channel(false);

        let client =
            Arc::new(Self { addr: addr.to_owned(), outgoing, observer, shutdown: shutdown.clone() });

        tokio::spawn(run_writer(write_half, outgoing_rx, shutdown.clone()));
        tokio::spawn(run_reader(read_half, observer_rx, shutdown, Arc::clone(&client)));

        Ok(client)
    }
}

impl Client for TcpClient {
    fn send_message(&self, text: &str) -> Result<(), ClientError> {
        self.outgoing.send(text.to_owned()).map_err(|_| ClientError::Closed)
    }

    fn close(&self) -> Result<(), ClientError> {
        let _ = self.shutdown.send(true);
        Ok(())
    }

    fn address(&self) -> String {
        self.addr.clone()
    }

    fn register(&self, observer: Arc<dyn MessageObserver>) {
        self.observer.install(observer);
    }
}

/// Drain the outgoing channel onto the socket until shutdown or error.
async fn run_writer(
    mut write_half: OwnedWriteHalf,
    mut outgoing: mpsc::UnboundedReceiver<String>,
    shutdown: watch::Sender<bool>,
) {
    let mut stop = shutdown.subscribe();
    loop {
        tokio::select! {
            _ = stop.wait_for(|stop| *stop) => break,
            line = outgoing.recv() => match line {
                Some(line) => {
                    if let Err(e) = write_half.write_all(line.as_bytes()).await {
                        tracing::error!(error = %e, "write failed, dropping connection");
                        break;
                    }
                },
                None => break,
            },
        }
    }
    let _ = shutdown.send(true);
    let _ = write_half.shutdown().await;
}

/// Deliver inbound lines to the observer until EOF, error, or shutdown.
async fn run_reader(
    read_half: OwnedReadHalf,
    observer_rx: oneshot::Receiver<Arc<dyn MessageObserver>>,
    shutdown: watch::Sender<bool>,
    client: Arc<TcpClient>,
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

    let mut lines = BufReader::new(read_half).lines();
    loop {
        tokio::select! {
            _ = stop.wait_for(|stop| *stop) => break,
            line = lines.next_line() => match line {
                Ok(Some(line)) => observer.received_message(&format!("{line}\n")),
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = %e, "read failed, dropping connection");
                    break;
                },
            },
        }
    }
    let _ = shutdown.send(true);
    observer.connection_closed();
}
