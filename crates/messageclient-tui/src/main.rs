//! MessageClient entry point.

use std::sync::Arc;

use clap::Parser;
use messageclient_api::{Client, SharedClient};
use messageclient_app::{MessageQueue, WindowObserver, ui_channel};
use messageclient_client::{LoopbackClient, TcpClient};
use messageclient_tui::Runtime;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// MessageClient terminal UI
#[derive(Parser, Debug)]
#[command(name = "messageclient")]
#[command(about = "Terminal chat client for line-based message servers")]
#[command(version)]
struct Args {
    /// Server address to connect to (host:port)
    ///
    /// If not provided, runs against an in-process loopback peer that
    /// echoes every sent line.
    #[arg(short, long)]
    server: Option<String>,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // Diagnostics go to stderr so the alternate screen stays clean.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let client: Arc<dyn Client> = match &args.server {
        Some(addr) => TcpClient::connect(addr).await?,
        None => LoopbackClient::spawn(),
    };

    let (ui, notices) = ui_channel();
    let queue = Arc::new(MessageQueue::new());
    let shared = SharedClient::new(Arc::clone(&client));
    let observer = Arc::new(WindowObserver::new(Arc::clone(&queue), shared.clone(), ui));
    client.register(observer);

    let runtime = Runtime::new(shared, queue, notices)?;
    Ok(runtime.run().await?)
}
