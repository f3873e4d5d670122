use regex::Regex;
use std::sync::LazyLock;

/// Episode filenames follow "<N> - <Title>.<ext>", optionally with an E
/// prefix on the number ("E01 - Pilot.png"). The separator dash may be
/// surrounded by any amount of whitespace.
static EPISODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[Ee]?(\d+)\s*-\s*(.+)\.\w+$").unwrap());

/// Result of parsing an episode filename. `number` is 0 when the filename
/// does not match the expected pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeName {
    pub number: u32,
    pub title: String,
}

/// Result of parsing an artwork filename ("TITLE - AUTHOR.ext").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkName {
    pub title: String,
    pub author: String,
}

/// File stem (name without the final extension).
fn stem(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((s, _)) if !s.is_empty() => s,
        _ => filename,
    }
}

/// Parse "<N|EN> - <Title>.<ext>". Never fails: a filename that does not
/// match the grammar falls back to number 0 and the stem as title.
pub fn parse_episode(filename: &str) -> EpisodeName {
    if let Some(caps) = EPISODE_RE.captures(filename) {
        // Numbers too large for u32 fall through to the fallback
        if let Ok(number) = caps[1].parse::<u32>() {
            return EpisodeName {
                number,
                title: caps[2].trim().to_string(),
            };
        }
    }
    EpisodeName {
        number: 0,
        title: stem(filename).to_string(),
    }
}

/// Parse "TITLE - AUTHOR.ext", splitting the stem on the first " - ".
/// Without a separator the whole stem (dashes/underscores spaced out)
/// becomes the title and the author is "Unknown".
pub fn parse_artwork(filename: &str) -> ArtworkName {
    let stem = stem(filename);
    match stem.split_once(" - ") {
        Some((title, author)) if !author.trim().is_empty() => ArtworkName {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
        },
        _ => ArtworkName {
            title: stem.replace(['-', '_'], " ").trim().to_string(),
            author: "Unknown".to_string(),
        },
    }
}

/// Filename-derived fallback title for stories: stem with dashes and
/// underscores replaced by spaces.
pub fn story_fallback_title(filename: &str) -> String {
    stem(filename).replace(['-', '_'], " ")
}
