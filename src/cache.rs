//! In-memory snapshot cache, one slot per content category. A snapshot is
//! immutable once stored; a newer scan replaces it wholesale.

use std::sync::Arc;

use chrono::{Duration, Utc};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::content::model::{ArtworkData, ComicsData, StoriesData};
use crate::content::scanner::{scan_artwork, scan_comics, scan_stories, ContentRoots};

/// Snapshots older than this are rescanned on the next read.
const AUTO_REFRESH_DAYS: i64 = 7;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("scan task failed: {0}")]
    Scan(#[from] tokio::task::JoinError),
}

/// Per-category snapshot cache with a time-to-live.
///
/// Reads serve the cached snapshot while it is fresh and rescan otherwise;
/// force methods always rescan. Scans run on the blocking pool. There is no
/// guard against overlapping scans: two simultaneous misses both scan and
/// the later write wins, which is fine for this read-mostly workload.
pub struct ContentCache {
    roots: ContentRoots,
    ttl: Duration,
    comics: RwLock<Option<Arc<ComicsData>>>,
    stories: RwLock<Option<Arc<StoriesData>>>,
    artwork: RwLock<Option<Arc<ArtworkData>>>,
}

impl ContentCache {
    pub fn new(roots: ContentRoots) -> Self {
        Self::with_ttl(roots, Duration::days(AUTO_REFRESH_DAYS))
    }

    /// TTL override, used by tests to exercise expiry.
    pub fn with_ttl(roots: ContentRoots, ttl: Duration) -> Self {
        ContentCache {
            roots,
            ttl,
            comics: RwLock::new(None),
            stories: RwLock::new(None),
            artwork: RwLock::new(None),
        }
    }

    pub fn roots(&self) -> &ContentRoots {
        &self.roots
    }

    pub async fn comics(&self) -> Result<Arc<ComicsData>, CacheError> {
        if let Some(snapshot) = self.comics.read().await.as_ref() {
            if Utc::now() - snapshot.last_updated <= self.ttl {
                return Ok(Arc::clone(snapshot));
            }
            tracing::info!("Comic snapshot expired, rescanning");
        }
        self.force_comics().await
    }

    pub async fn force_comics(&self) -> Result<Arc<ComicsData>, CacheError> {
        let roots = self.roots.clone();
        let snapshot = Arc::new(tokio::task::spawn_blocking(move || scan_comics(&roots)).await?);
        *self.comics.write().await = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    pub async fn stories(&self) -> Result<Arc<StoriesData>, CacheError> {
        if let Some(snapshot) = self.stories.read().await.as_ref() {
            if Utc::now() - snapshot.last_updated <= self.ttl {
                return Ok(Arc::clone(snapshot));
            }
            tracing::info!("Story snapshot expired, rescanning");
        }
        self.force_stories().await
    }

    pub async fn force_stories(&self) -> Result<Arc<StoriesData>, CacheError> {
        let roots = self.roots.clone();
        let snapshot = Arc::new(tokio::task::spawn_blocking(move || scan_stories(&roots)).await?);
        *self.stories.write().await = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    pub async fn artwork(&self) -> Result<Arc<ArtworkData>, CacheError> {
        if let Some(snapshot) = self.artwork.read().await.as_ref() {
            if Utc::now() - snapshot.last_updated <= self.ttl {
                return Ok(Arc::clone(snapshot));
            }
            tracing::info!("Artwork snapshot expired, rescanning");
        }
        self.force_artwork().await
    }

    pub async fn force_artwork(&self) -> Result<Arc<ArtworkData>, CacheError> {
        let roots = self.roots.clone();
        let snapshot = Arc::new(tokio::task::spawn_blocking(move || scan_artwork(&roots)).await?);
        *self.artwork.write().await = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }
}
