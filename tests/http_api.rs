use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use chronicles::cache::ContentCache;
use chronicles::content::scanner::ContentRoots;
use chronicles::http::{build_router, state::AppState};

fn touch(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// Router backed by a populated temp content tree.
fn make_app(dir: &TempDir) -> axum::Router {
    let roots = ContentRoots {
        comics: dir.path().join("comics"),
        stories: dir.path().join("literature"),
        artwork: dir.path().join("artwork"),
        thumbnails: dir.path().join("thumbnails"),
    };
    let state = AppState {
        cache: Arc::new(ContentCache::new(roots)),
    };
    build_router(state)
}

fn seeded_tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    touch(
        &dir.path().join("comics").join("Series 1").join("01 - Pilot.png"),
        "pretend png bytes",
    );
    touch(
        &dir.path().join("literature").join("night-watch.txt"),
        "Chronicles of Max\nA Short Story\nAuthor: A. Maynard\nfiller\nThe Night Watch\nBody text.",
    );
    touch(
        &dir.path()
            .join("artwork")
            .join("official")
            .join("Sunset Over Ruins - Jane Doe.png"),
        "pretend png bytes",
    );
    dir
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

// ── JSON API ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn api_comics_returns_success_envelope() {
    let dir = seeded_tree();
    let response = get(make_app(&dir), "/api/comics").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["series"][0]["name"], "Series 1");
    assert_eq!(body["data"]["series"][0]["comics"][0]["number"], 1);
    assert_eq!(body["data"]["series"][0]["comics"][0]["title"], "Pilot");
}

#[tokio::test]
async fn api_comics_serializes_camel_case_fields() {
    let dir = seeded_tree();
    let body = body_json(get(make_app(&dir), "/api/comics").await).await;
    let comic = &body["data"]["series"][0]["comics"][0];
    assert!(comic.get("fileSize").is_some());
    assert!(comic.get("lastModified").is_some());
    assert!(body["data"].get("lastUpdated").is_some());
    assert!(body["data"]["series"][0].get("totalComics").is_some());
}

#[tokio::test]
async fn api_stories_returns_parsed_story() {
    let dir = seeded_tree();
    let body = body_json(get(make_app(&dir), "/api/stories").await).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["stories"][0]["title"], "The Night Watch");
    assert_eq!(body["data"]["stories"][0]["author"], "A. Maynard");
}

#[tokio::test]
async fn api_artwork_returns_both_categories() {
    let dir = seeded_tree();
    let body = body_json(get(make_app(&dir), "/api/artwork").await).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"]["artwork"]["official"][0]["title"],
        "Sunset Over Ruins"
    );
    assert!(body["data"]["artwork"]["fanart"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn api_cache_hit_returns_identical_last_updated() {
    let dir = seeded_tree();
    let app = make_app(&dir);
    let first = body_json(get(app.clone(), "/api/comics").await).await;
    let second = body_json(get(app, "/api/comics").await).await;
    assert_eq!(first["data"]["lastUpdated"], second["data"]["lastUpdated"]);
}

#[tokio::test]
async fn api_force_scan_is_post_and_refreshes() {
    let dir = seeded_tree();
    let app = make_app(&dir);
    let before = body_json(get(app.clone(), "/api/comics").await).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/comics/scan")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let after = body_json(response).await;
    assert_eq!(after["success"], true);
    assert_ne!(before["data"]["lastUpdated"], after["data"]["lastUpdated"]);
}

#[tokio::test]
async fn api_missing_roots_still_succeed_with_sample_data() {
    let dir = tempfile::tempdir().unwrap(); // empty tree
    let body = body_json(get(make_app(&dir), "/api/comics").await).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["series"][0]["name"], "Series 1");
}

// ── file streaming ────────────────────────────────────────────────────────────

#[tokio::test]
async fn comic_file_streams_with_mime_type() {
    let dir = seeded_tree();
    let response = get(make_app(&dir), "/comics/Series%201/01%20-%20Pilot.png").await;
    assert_eq!(response.status(), StatusCode::OK);
    let ct = response.headers().get("content-type").unwrap().to_str().unwrap();
    assert_eq!(ct, "image/png");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"pretend png bytes");
}

#[tokio::test]
async fn story_file_streams() {
    let dir = seeded_tree();
    let response = get(make_app(&dir), "/stories/night-watch.txt").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_file_is_404() {
    let dir = seeded_tree();
    let response = get(make_app(&dir), "/comics/Series%201/99%20-%20Nope.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn traversal_attempt_is_404() {
    let dir = seeded_tree();
    // %2e%2e%2f = "../" inside a single path component
    let response = get(make_app(&dir), "/stories/%2e%2e%2fCargo.toml").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ── shell and CORS ────────────────────────────────────────────────────────────

#[tokio::test]
async fn index_serves_html_shell() {
    let dir = seeded_tree();
    let response = get(make_app(&dir), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("The Chronicles of Max"));
}

#[tokio::test]
async fn unknown_route_falls_back_to_shell() {
    let dir = seeded_tree();
    let response = get(make_app(&dir), "/some/client/side/route").await;
    assert_eq!(response.status(), StatusCode::OK);
    let ct = response.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(ct.contains("text/html"));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let dir = seeded_tree();
    let response = make_app(&dir)
        .oneshot(
            Request::builder()
                .uri("/api/comics")
                .header("origin", "https://elsewhere.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let allow = response
        .headers()
        .get("access-control-allow-origin")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(allow, "*");
}

#[tokio::test]
async fn cors_preflight_succeeds() {
    let dir = seeded_tree();
    let response = make_app(&dir)
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/comics")
                .header("origin", "https://elsewhere.example")
                .header("access-control-request-method", "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
