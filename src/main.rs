// src/main.rs

use dotenvy::dotenv;
use examdesk::config::Config;
use examdesk::models::catalog::Catalog;
use examdesk::routes;
use examdesk::state::AppState;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "examdesk.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Load the stream catalog once; it is read-only afterwards
    let catalog = match &config.catalog_path {
        Some(path) => match Catalog::from_json_file(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!("Failed to load catalog: {}", e);
                std::process::exit(1);
            }
        },
        None => Catalog::default(),
    };
    tracing::info!("Catalog loaded with {} streams", catalog.streams().len());

    let addr = config.bind_addr.clone();

    // Create AppState
    let state = AppState::new(config, catalog);

    // Create the Axum application router
    let app = routes::create_router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("Listening on {}", addr);

    // Start the server
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
    }
}
