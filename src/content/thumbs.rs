use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use thiserror::Error;

/// Longest edge of a generated thumbnail, in pixels.
const THUMB_MAX_DIM: u32 = 300;
const THUMB_JPEG_QUALITY: u8 = 85;

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("cannot decode {0}")]
    Decode(String),
    #[error("no thumbnail support for {0}")]
    Unsupported(String),
}

/// Make sure an up-to-date thumbnail exists for a comic page and return its
/// serving route ("/thumbnails/<series>/<stem>_thumb.jpg").
///
/// An existing thumbnail newer than the source is reused without decoding
/// anything. Images already within the size bound are re-encoded but not
/// enlarged. SVG pages have no raster decoder and fail with `Unsupported`.
pub fn ensure_thumbnail(
    source: &Path,
    thumbnails_root: &Path,
    series: &str,
    filename: &str,
) -> Result<String, ThumbnailError> {
    let ext = source
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if ext == "svg" {
        return Err(ThumbnailError::Unsupported(filename.to_string()));
    }

    let stem = filename.rsplit_once('.').map(|(s, _)| s).unwrap_or(filename);
    let thumb_name = format!("{stem}_thumb.jpg");
    let thumb_dir = thumbnails_root.join(series);
    let thumb_path = thumb_dir.join(&thumb_name);
    let route = format!("/thumbnails/{series}/{thumb_name}");

    if thumbnail_is_fresh(source, &thumb_path) {
        return Ok(route);
    }

    std::fs::create_dir_all(&thumb_dir)?;

    let img = image::open(source).map_err(|e| ThumbnailError::Decode(e.to_string()))?;
    let thumb = if img.width() <= THUMB_MAX_DIM && img.height() <= THUMB_MAX_DIM {
        img
    } else {
        img.thumbnail(THUMB_MAX_DIM, THUMB_MAX_DIM)
    };

    let file = std::fs::File::create(&thumb_path)?;
    let mut writer = std::io::BufWriter::new(file);
    let mut encoder = JpegEncoder::new_with_quality(&mut writer, THUMB_JPEG_QUALITY);
    encoder
        .encode_image(&thumb.to_rgb8())
        .map_err(|e| ThumbnailError::Decode(e.to_string()))?;

    Ok(route)
}

/// True when the thumbnail exists and is newer than its source.
fn thumbnail_is_fresh(source: &Path, thumb: &Path) -> bool {
    let (Ok(src_meta), Ok(thumb_meta)) = (std::fs::metadata(source), std::fs::metadata(thumb))
    else {
        return false;
    };
    match (src_meta.modified(), thumb_meta.modified()) {
        (Ok(src_mtime), Ok(thumb_mtime)) => thumb_mtime > src_mtime,
        _ => false,
    }
}
