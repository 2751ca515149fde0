use axum::{
    Router,
    extract::Extension,
    routing::get,
};
use iching_oracle::config::OracleConfig;
use iching_oracle::hexagram::handlers::{handle_get_hexagram, handle_list_hexagrams};
use iching_oracle::oracle::handlers::handle_health;
use iching_oracle::oracle::service::OracleService;
use iching_oracle::search::handlers::{handle_create_query, handle_similar_queries};
use iching_oracle::storage::handlers::{handle_get_query, handle_list_queries};
use iching_oracle::storage::memory::QueryLog;
use iching_oracle::storage::protocol::*;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // .with_max_level(tracing::Level::DEBUG)
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut config = OracleConfig::from_env()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" if i + 1 < args.len() => {
                config.bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--lexicon" if i + 1 < args.len() => {
                config.lexicon_path = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>] [--lexicon <path>]", args[0]);
                eprintln!("Example: {} --bind 127.0.0.1:8000", args[0]);
                eprintln!(
                    "Example: {} --lexicon ./glove/glove.6B.300d.txt",
                    args[0]
                );
                std::process::exit(0);
            }
            other => {
                tracing::warn!("Ignoring unknown argument '{}'", other);
                i += 1;
            }
        }
    }

    tracing::info!(
        "Lexicon: {} (dimension {}, cache {})",
        config.lexicon_path.display(),
        config.dimension,
        if config.use_cache { "on" } else { "off" }
    );

    // 1. Engine state (blocking, once per process):
    let init_config = config.clone();
    let oracle = tokio::task::spawn_blocking(move || OracleService::initialize(&init_config))
        .await?
        .inspect_err(|e| tracing::error!("Failed to initialize oracle: {}", e))?;
    let stats = oracle.lexicon().stats();
    tracing::info!(
        "Lexicon ready: {} entries from {:?} ({} malformed lines)",
        stats.entries,
        stats.source,
        stats.malformed_lines
    );
    tracing::info!(
        "Serving {} hexagrams, top_k={}",
        oracle.prototypes().len(),
        oracle.top_k()
    );

    // 2. Query log:
    let log = Arc::new(QueryLog::new());

    // 3. HTTP Router:
    let app = Router::new()
        .route(ENDPOINT_HEALTH, get(handle_health))
        .route(
            ENDPOINT_QUERIES,
            get(handle_list_queries).post(handle_create_query),
        )
        .route(ENDPOINT_SIMILAR, get(handle_similar_queries))
        .route(ENDPOINT_QUERY_BY_ID, get(handle_get_query))
        .route(ENDPOINT_HEXAGRAMS, get(handle_list_hexagrams))
        .route(ENDPOINT_HEXAGRAM_BY_ID, get(handle_get_hexagram))
        .layer(Extension(oracle))
        .layer(Extension(log));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
