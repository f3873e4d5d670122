use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;

use chronicles::cache::ContentCache;
use chronicles::content::scanner::ContentRoots;
use chronicles::http::state::AppState;
use chronicles::{cli, config, http};

/// Set to true once the first Ctrl+C is received. Second Ctrl+C force-exits.
static SHUTTING_DOWN: AtomicBool = AtomicBool::new(false);

/// Wait for the first Ctrl+C (graceful shutdown).
/// On second Ctrl+C (during shutdown wait), force-exits immediately.
async fn wait_for_shutdown() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    if SHUTTING_DOWN.swap(true, Ordering::SeqCst) {
        eprintln!("\nchronicles: forced exit");
        std::process::exit(1);
    }
}

/// Initial scan of all three categories before the listener starts taking
/// traffic, with the same count lines the old deployment logged.
async fn eager_scan(cache: &ContentCache) {
    match cache.comics().await {
        Ok(data) => tracing::info!("Found {} comic series", data.series.len()),
        Err(e) => tracing::error!("Initial comic scan failed: {e}"),
    }
    match cache.stories().await {
        Ok(data) => tracing::info!("Found {} stories", data.stories.len()),
        Err(e) => tracing::error!("Initial story scan failed: {e}"),
    }
    match cache.artwork().await {
        Ok(data) => tracing::info!(
            "Found {} official artwork, {} fan art",
            data.artwork.official.len(),
            data.artwork.fanart.len()
        ),
        Err(e) => tracing::error!("Initial artwork scan failed: {e}"),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = cli::Args::parse();

    let file_config = config::find_config_file(args.config.as_deref()).and_then(|path| {
        match config::load_config(&path) {
            Ok(cfg) => {
                tracing::debug!("Loaded config from {}", path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("Failed to parse config file: {}", e);
                None
            }
        }
    });

    let config = config::Config::resolve(file_config, &args, config::port_from_env());

    tracing::info!(
        "The Chronicles of Max server starting on port {}",
        config.port
    );
    tracing::info!("Comics will be served from: {}", config.comics_dir.display());
    tracing::info!("Stories will be served from: {}", config.stories_dir.display());
    tracing::info!(
        "Thumbnails will be generated in: {}",
        config.thumbnails_dir.display()
    );

    let roots = ContentRoots::from_config(&config);
    let cache = Arc::new(ContentCache::new(roots));

    eager_scan(&cache).await;

    let state = AppState {
        cache: Arc::clone(&cache),
    };
    let app = http::build_router(state);

    let addr = if config.localhost {
        format!("127.0.0.1:{}", config.port)
    } else {
        format!("0.0.0.0:{}", config.port)
    };
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("error: failed to bind {}: {}", addr, e);
            std::process::exit(1);
        });
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
        .unwrap_or_else(|e| tracing::error!("HTTP server error: {}", e));

    tracing::info!("Goodbye.");
}
