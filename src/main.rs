use clap::Parser;
use feedstore_core::config::Config;
use feedstore_http::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "feedstore", about = "Authority-gated feed store over HTTP")]
struct Cli {
    /// Config file (defaults to ~/.config/feedstore/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overriding `[server] bind`.
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Write debug logs to /tmp/feedstore-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/feedstore-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("feedstore debug log started, tail -f /tmp/feedstore-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| EnvFilter::new(&config.log.filter)),
            )
            .init();
    }

    let bind = match cli.bind {
        Some(addr) => addr,
        None => config.server.bind.parse()?,
    };

    let store = config.feed.build_store()?;
    let state = AppState::new(store, &config.server.caller_header)?;
    let listener = tokio::net::TcpListener::bind(bind).await?;
    feedstore_http::serve(listener, state).await
}
