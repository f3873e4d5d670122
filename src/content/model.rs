//! Data model for scan results. Field names serialize in camelCase to match
//! the wire format the front-end shell consumes.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One comic page inside a series. Metadata is derived from the filename
/// ("<N> - <Title>.<ext>") and file stats; nothing is persisted elsewhere.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comic {
    pub number: u32,
    pub title: String,
    pub filename: String,
    /// Serving route, e.g. "/comics/Series 1/01 - Pilot.png"
    pub path: String,
    /// Serving route of the generated thumbnail; null when generation failed.
    pub thumbnail: Option<String>,
    pub extension: String,
    pub file_size: u64,
    pub last_modified: DateTime<Utc>,
    pub series: String,
}

/// A named group of sequentially numbered comics in one subdirectory.
/// `comics` is sorted ascending by episode number (stable).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub name: String,
    pub path: String,
    pub total_comics: usize,
    pub last_updated: DateTime<Utc>,
    pub comics: Vec<Comic>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub title: String,
    pub author: String,
    pub filename: String,
    pub path: String,
    /// At most 200 characters plus an "..." suffix when truncated.
    pub description: String,
    pub file_size: u64,
    pub last_modified: DateTime<Utc>,
    /// Published date; the file's mtime stands in for it.
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkItem {
    pub title: String,
    pub author: String,
    pub filename: String,
    pub path: String,
    pub category: String,
    pub file_size: u64,
    pub last_modified: DateTime<Utc>,
    pub date: DateTime<Utc>,
}

/// Artwork split by origin. Directory-enumeration order, no further sort.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkCollection {
    pub official: Vec<ArtworkItem>,
    pub fanart: Vec<ArtworkItem>,
}

/// Immutable result of one full comics scan. Held by the cache until the
/// next scan supersedes it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComicsData {
    pub last_updated: DateTime<Utc>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoriesData {
    pub last_updated: DateTime<Utc>,
    pub stories: Vec<Story>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkData {
    pub last_updated: DateTime<Utc>,
    pub artwork: ArtworkCollection,
}
