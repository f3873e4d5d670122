use std::path::Path;

/// Content category a directory scan is running for. Comics additionally
/// accept svg pages; artwork does not; stories match document formats only.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    Comics,
    Artwork,
    Stories,
}

/// Classification of a single file within a category.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Document,
    Ignored,
}

const COMIC_IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];
const ARTWORK_IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];
const STORY_DOC_EXTS: &[&str] = &["txt", "md", "html", "pdf", "rtf"];

/// Classify a file path by its extension for the given category.
///
/// Pure and total: unknown extensions (and extensionless files) classify as
/// `Ignored`. Extensions match case-insensitively.
pub fn classify(path: &Path, category: Category) -> FileKind {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return FileKind::Ignored;
    };
    let ext = ext.to_ascii_lowercase();

    let (set, kind) = match category {
        Category::Comics => (COMIC_IMAGE_EXTS, FileKind::Image),
        Category::Artwork => (ARTWORK_IMAGE_EXTS, FileKind::Image),
        Category::Stories => (STORY_DOC_EXTS, FileKind::Document),
    };
    if set.contains(&ext.as_str()) {
        kind
    } else {
        FileKind::Ignored
    }
}

/// MIME type used when streaming a file back to the client.
/// Falls back to application/octet-stream for anything unrecognized.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "txt" => "text/plain; charset=utf-8",
        "md" => "text/markdown; charset=utf-8",
        "html" => "text/html; charset=utf-8",
        "pdf" => "application/pdf",
        "rtf" => "application/rtf",
        _ => "application/octet-stream",
    }
}
