use std::path::PathBuf;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use tokio_util::io::ReaderStream;

use crate::content::kind::content_type_for;
use crate::http::state::AppState;

/// Reject path components that would escape the content directory. Axum
/// percent-decodes parameters before they get here, so `..%2F` tricks land
/// in these checks too.
fn component_ok(component: &str) -> bool {
    !component.is_empty()
        && component != "."
        && component != ".."
        && !component.contains('/')
        && !component.contains('\\')
}

/// Stream a file back to the client with its MIME type and length. Missing
/// files are 404; any other open failure is 500.
async fn stream_file(path: PathBuf) -> Response {
    let file = match tokio::fs::File::open(&path).await {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return StatusCode::NOT_FOUND.into_response();
        }
        Err(e) => {
            tracing::error!("Failed to open file {}: {}", path.display(), e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type_for(&path)),
    );
    if let Ok(meta) = file.metadata().await {
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(meta.len()));
    }

    let body = Body::from_stream(ReaderStream::new(file));
    (StatusCode::OK, headers, body).into_response()
}

pub async fn serve_comic(
    State(state): State<AppState>,
    Path((series, filename)): Path<(String, String)>,
) -> Response {
    if !component_ok(&series) || !component_ok(&filename) {
        return StatusCode::NOT_FOUND.into_response();
    }
    stream_file(state.cache.roots().comics.join(series).join(filename)).await
}

pub async fn serve_artwork(
    State(state): State<AppState>,
    Path((category, filename)): Path<(String, String)>,
) -> Response {
    if !component_ok(&category) || !component_ok(&filename) {
        return StatusCode::NOT_FOUND.into_response();
    }
    stream_file(state.cache.roots().artwork.join(category).join(filename)).await
}

pub async fn serve_story(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    if !component_ok(&filename) {
        return StatusCode::NOT_FOUND.into_response();
    }
    stream_file(state.cache.roots().stories.join(filename)).await
}

pub async fn serve_thumbnail(
    State(state): State<AppState>,
    Path((series, filename)): Path<(String, String)>,
) -> Response {
    if !component_ok(&series) || !component_ok(&filename) {
        return StatusCode::NOT_FOUND.into_response();
    }
    stream_file(state.cache.roots().thumbnails.join(series).join(filename)).await
}

/// The single-page front-end shell, compiled into the binary.
pub async fn serve_index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
