use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use viewer::api;
use viewer::AppState;

#[derive(Parser, Debug)]
#[command(name = "viewer")]
#[command(about = "Local web viewer for recorded debugging-agent session logs")]
struct Args {
    /// Path to a recorded session log (JSON). May be omitted and loaded
    /// later through the page.
    log_file: Option<PathBuf>,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viewer=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let state = match &args.log_file {
        Some(path) => {
            let session = session_log::load_session(path)
                .with_context(|| format!("failed to load session log {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                problem = %session.problem,
                total_steps = session.total_steps(),
                "session log loaded"
            );
            AppState::with_session(session)
        }
        None => {
            tracing::info!("no log file given; open the page to load one");
            AppState::new()
        }
    };

    let app = api::router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("viewer listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
