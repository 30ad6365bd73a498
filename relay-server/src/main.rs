use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use taskdeck_relay::{router, AppState};

#[derive(Parser, Debug)]
#[command(
    name = "taskdeck-relay",
    about = "Serves the Taskdeck frontend and relays API calls to the backend"
)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    listen: SocketAddr,

    /// Base URL of the task backend
    #[arg(long, env = "BACKEND_BASE_URL", default_value = "http://localhost:8000")]
    backend_url: String,

    /// Directory holding the built frontend
    #[arg(long, default_value = "dist")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let state = AppState::new(args.backend_url);
    let app = router(state, &args.static_dir);

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .context("bind listen address")?;
    tracing::info!(addr = %args.listen, "taskdeck relay listening");
    axum::serve(listener, app).await.context("serve")?;
    Ok(())
}
