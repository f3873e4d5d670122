use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::http::state::AppState;

/// `{success: true, data: ...}` with 200.
fn ok_response<T: Serialize>(data: &T) -> Response {
    Json(json!({ "success": true, "data": data })).into_response()
}

/// `{success: false, error: ...}` with 500.
fn error_response(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "error": message })),
    )
        .into_response()
}

pub async fn get_comics(State(state): State<AppState>) -> Response {
    match state.cache.comics().await {
        Ok(data) => ok_response(&*data),
        Err(e) => {
            tracing::error!("Error getting comic data: {e}");
            error_response(e.to_string())
        }
    }
}

pub async fn get_stories(State(state): State<AppState>) -> Response {
    match state.cache.stories().await {
        Ok(data) => ok_response(&*data),
        Err(e) => {
            tracing::error!("Error getting story data: {e}");
            error_response(e.to_string())
        }
    }
}

pub async fn get_artwork(State(state): State<AppState>) -> Response {
    match state.cache.artwork().await {
        Ok(data) => ok_response(&*data),
        Err(e) => {
            tracing::error!("Error getting artwork data: {e}");
            error_response(e.to_string())
        }
    }
}

pub async fn rescan_comics(State(state): State<AppState>) -> Response {
    match state.cache.force_comics().await {
        Ok(data) => ok_response(&*data),
        Err(e) => {
            tracing::error!("Error rescanning comics: {e}");
            error_response(e.to_string())
        }
    }
}

pub async fn rescan_stories(State(state): State<AppState>) -> Response {
    match state.cache.force_stories().await {
        Ok(data) => ok_response(&*data),
        Err(e) => {
            tracing::error!("Error rescanning stories: {e}");
            error_response(e.to_string())
        }
    }
}

pub async fn rescan_artwork(State(state): State<AppState>) -> Response {
    match state.cache.force_artwork().await {
        Ok(data) => ok_response(&*data),
        Err(e) => {
            tracing::error!("Error rescanning artwork: {e}");
            error_response(e.to_string())
        }
    }
}
