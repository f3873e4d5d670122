use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use walkdir::WalkDir;

use crate::content::body::parse_story_body;
use crate::content::extract::extract_text;
use crate::content::filename::{parse_artwork, parse_episode, story_fallback_title};
use crate::content::kind::{classify, Category, FileKind};
use crate::content::model::{
    ArtworkCollection, ArtworkData, ArtworkItem, Comic, ComicsData, Series, StoriesData, Story,
};
use crate::content::{sample, thumbs};

const UNPARSED_DESCRIPTION: &str = "Story content could not be parsed.";

/// On-disk locations of the four content directories. Cloned into the
/// blocking scan tasks, so it stays cheap to copy.
#[derive(Debug, Clone)]
pub struct ContentRoots {
    pub comics: PathBuf,
    pub stories: PathBuf,
    pub artwork: PathBuf,
    pub thumbnails: PathBuf,
}

impl ContentRoots {
    pub fn from_config(config: &crate::config::Config) -> Self {
        ContentRoots {
            comics: config.comics_dir.clone(),
            stories: config.stories_dir.clone(),
            artwork: config.artwork_dir.clone(),
            thumbnails: config.thumbnails_dir.clone(),
        }
    }
}

/// Immediate children of `dir`, sorted by name. Unreadable entries log warn
/// and are skipped; a missing directory yields an empty list.
fn list_entries(dir: &Path) -> Vec<walkdir::DirEntry> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                tracing::warn!("Cannot access entry in {}: {}", dir.display(), e);
                None
            }
        })
        .collect()
}

fn mtime(path: &Path) -> Option<DateTime<Utc>> {
    match std::fs::metadata(path).and_then(|m| m.modified()) {
        Ok(t) => Some(t.into()),
        Err(e) => {
            tracing::warn!("Cannot stat {}: {}", path.display(), e);
            None
        }
    }
}

/// Scan the comics root: one subdirectory per series, each holding episode
/// image files. Series with no recognizable comics are omitted. A missing
/// root substitutes the built-in sample dataset.
pub fn scan_comics(roots: &ContentRoots) -> ComicsData {
    let start = Instant::now();
    if !roots.comics.is_dir() {
        tracing::warn!(
            "Comics directory missing at {}, serving sample data",
            roots.comics.display()
        );
        return sample::sample_comics();
    }

    let mut series_list = Vec::new();
    for entry in list_entries(&roots.comics) {
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(series) = scan_series(entry.path(), &name, roots) {
            series_list.push(series);
        }
    }

    let total: usize = series_list.iter().map(|s| s.comics.len()).sum();
    tracing::info!(
        "Scanned {} comics in {} series in {:.1}s",
        total,
        series_list.len(),
        start.elapsed().as_secs_f64()
    );

    ComicsData {
        last_updated: Utc::now(),
        series: series_list,
    }
}

/// Scan one series directory. Returns None when it contains no comics.
fn scan_series(dir: &Path, series_name: &str, roots: &ContentRoots) -> Option<Series> {
    let mut comics = Vec::new();

    for entry in list_entries(dir) {
        if !entry.file_type().is_file() {
            continue;
        }
        if classify(entry.path(), Category::Comics) != FileKind::Image {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().into_owned();
        let Some(last_modified) = mtime(entry.path()) else {
            continue;
        };
        let file_size = entry.metadata().map(|m| m.len()).unwrap_or(0);

        let parsed = parse_episode(&filename);
        let thumbnail = match thumbs::ensure_thumbnail(
            entry.path(),
            &roots.thumbnails,
            series_name,
            &filename,
        ) {
            Ok(route) => Some(route),
            Err(e) => {
                tracing::warn!("No thumbnail for {}: {}", entry.path().display(), e);
                None
            }
        };

        let extension = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_ascii_lowercase()))
            .unwrap_or_default();

        comics.push(Comic {
            number: parsed.number,
            title: parsed.title,
            path: format!("/comics/{series_name}/{filename}"),
            filename,
            thumbnail,
            extension,
            file_size,
            last_modified,
            series: series_name.to_string(),
        });
    }

    if comics.is_empty() {
        return None;
    }
    // Stable sort: equal episode numbers keep enumeration order
    comics.sort_by_key(|c| c.number);

    Some(Series {
        name: series_name.to_string(),
        path: format!("comics/{series_name}/"),
        total_comics: comics.len(),
        last_updated: Utc::now(),
        comics,
    })
}

/// Scan the stories root: a flat directory of documents in any supported
/// format. Sorted newest first. A missing root substitutes sample data.
pub fn scan_stories(roots: &ContentRoots) -> StoriesData {
    let start = Instant::now();
    if !roots.stories.is_dir() {
        tracing::warn!(
            "Stories directory missing at {}, serving sample data",
            roots.stories.display()
        );
        return sample::sample_stories();
    }

    let mut stories = Vec::new();
    for entry in list_entries(&roots.stories) {
        if !entry.file_type().is_file() {
            continue;
        }
        if classify(entry.path(), Category::Stories) != FileKind::Document {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().into_owned();
        if let Some(story) = parse_story_file(entry.path(), &filename) {
            stories.push(story);
        }
    }

    // Newest first; stable so same-date stories keep enumeration order
    stories.sort_by(|a, b| b.date.cmp(&a.date));

    tracing::info!(
        "Scanned {} stories in {:.1}s",
        stories.len(),
        start.elapsed().as_secs_f64()
    );

    StoriesData {
        last_updated: Utc::now(),
        stories,
    }
}

/// Parse one story document. Extraction or template failures degrade to
/// filename-derived fields; only an unreadable stat skips the file.
fn parse_story_file(path: &Path, filename: &str) -> Option<Story> {
    let last_modified = mtime(path)?;
    let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    let fallback_title = story_fallback_title(filename);
    let (title, author, description) = match extract_text(path) {
        Ok(content) => {
            let body = parse_story_body(&content);
            (
                body.title.unwrap_or(fallback_title),
                body.author.unwrap_or_else(|| "Unknown".to_string()),
                body.description,
            )
        }
        Err(e) => {
            tracing::warn!("Cannot extract text from {}: {}", path.display(), e);
            (
                fallback_title,
                "Unknown".to_string(),
                UNPARSED_DESCRIPTION.to_string(),
            )
        }
    };

    Some(Story {
        title,
        author,
        filename: filename.to_string(),
        path: format!("/stories/{filename}"),
        description,
        file_size,
        last_modified,
        date: last_modified,
    })
}

/// Scan the artwork root: official/ and fanart/ subfolders, independently.
/// Missing folders (including the root itself) yield empty collections.
pub fn scan_artwork(roots: &ContentRoots) -> ArtworkData {
    let start = Instant::now();
    let official = scan_artwork_category(&roots.artwork.join("official"), "official");
    let fanart = scan_artwork_category(&roots.artwork.join("fanart"), "fanart");

    tracing::info!(
        "Scanned {} official artwork, {} fan art in {:.1}s",
        official.len(),
        fanart.len(),
        start.elapsed().as_secs_f64()
    );

    ArtworkData {
        last_updated: Utc::now(),
        artwork: ArtworkCollection { official, fanart },
    }
}

fn scan_artwork_category(dir: &Path, category: &str) -> Vec<ArtworkItem> {
    if !dir.is_dir() {
        tracing::debug!("No {} artwork folder at {}", category, dir.display());
        return Vec::new();
    }

    let mut items = Vec::new();
    for entry in list_entries(dir) {
        if !entry.file_type().is_file() {
            continue;
        }
        if classify(entry.path(), Category::Artwork) != FileKind::Image {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().into_owned();
        let Some(last_modified) = mtime(entry.path()) else {
            continue;
        };
        let file_size = entry.metadata().map(|m| m.len()).unwrap_or(0);

        let parsed = parse_artwork(&filename);
        items.push(ArtworkItem {
            title: parsed.title,
            author: parsed.author,
            path: format!("/artwork/{category}/{filename}"),
            filename,
            category: category.to_string(),
            file_size,
            last_modified,
            date: last_modified,
        });
    }
    items
}
