use std::sync::Arc;

use crate::cache::ContentCache;

/// Shared application state injected into all route handlers.
/// The cache owns the snapshots; handlers only read them.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<ContentCache>,
}
