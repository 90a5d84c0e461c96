use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use angojob::cache::JobCache;
use angojob::commands;
use angojob::config::{Command, Config, LogFormat};
use angojob::routes;
use angojob::sources::MockSource;
use angojob::state::AppState;
use angojob::store::FileStore;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("angojob=info,tower_http=info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(config.log_format);

    let store = Arc::new(FileStore::new(&config.store_path));
    tracing::info!("Using store at {}", store.path().display());
    let source = MockSource::new(config.batch_size, config.fetch_delay(), config.mock_seed);
    let state = AppState::new(Arc::new(source), JobCache::new(store));

    match config.resolved_command() {
        Command::Serve { listen_addr } => {
            let count = state.bootstrap().await;
            tracing::info!("Board ready with {count} jobs");

            let app = routes::app(state);
            let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
            tracing::info!("Listening on {listen_addr}");
            axum::serve(listener, app).await?;
        }
        Command::Export(args) => {
            let path = commands::export(&state, &args).await?;
            println!("{}", path.display());
        }
        Command::Fetch => {
            let count = commands::fetch(&state).await?;
            println!("{count} jobs cached");
        }
        Command::Stats => {
            let stats = commands::stats(&state).await;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
