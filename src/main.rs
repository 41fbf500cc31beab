//! News Keyword Search — Service Binary
//! Boots the Axum HTTP server, wiring the orchestrator, providers, and routes.
//!
//! The service applies a default timeout to searches; see `config.rs` for the
//! env knobs.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use news_keyword_search::api::{self, AppState};
use news_keyword_search::config::Settings;
use news_keyword_search::fetch::live::RssProvider;
use news_keyword_search::fetch::mock::MockProvider;
use news_keyword_search::orchestrator::SearchOrchestrator;
use news_keyword_search::sources::SourceCatalog;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op elsewhere.
    let _ = dotenvy::dotenv();
    init_tracing();

    let settings = Settings::from_env();
    info!(?settings, "configuration loaded");

    let catalog = SourceCatalog::new();
    for (region, (count, names)) in catalog.grouping_summary() {
        info!(%region, count, sources = ?names, "catalogued sources");
    }

    let live = Arc::new(RssProvider::new());
    let mock = Arc::new(MockProvider::new());
    let orchestrator = Arc::new(SearchOrchestrator::new(
        catalog,
        live,
        mock,
        settings.mock_mode,
    ));
    if settings.mock_mode {
        info!("starting with mock provider active");
    }

    let state = AppState {
        orchestrator,
        default_timeout_secs: settings.default_timeout_secs,
    };
    let app = api::router(state);

    let listener = TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
