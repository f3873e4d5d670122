pub mod api;
pub mod files;
pub mod state;

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // The front-end shell may be served from a different origin during
    // development, so the API answers any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/comics", get(api::get_comics))
        .route("/api/stories", get(api::get_stories))
        .route("/api/artwork", get(api::get_artwork))
        .route("/api/comics/scan", post(api::rescan_comics))
        .route("/api/stories/scan", post(api::rescan_stories))
        .route("/api/artwork/scan", post(api::rescan_artwork))
        .route("/comics/{series}/{filename}", get(files::serve_comic))
        .route("/artwork/{category}/{filename}", get(files::serve_artwork))
        .route("/stories/{filename}", get(files::serve_story))
        .route("/thumbnails/{series}/{filename}", get(files::serve_thumbnail))
        .route("/", get(files::serve_index))
        // Client-side routing: every unknown path gets the shell
        .fallback(files::serve_index)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
