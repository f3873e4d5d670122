/// Story documents exported from the shared drive carry a fixed two-line
/// header before the real content. Matching is exact and case-sensitive.
pub const STORY_HEADER: &str = "Chronicles of Max";
pub const STORY_SUBTITLE: &str = "A Short Story";

const DESCRIPTION_LIMIT: usize = 200;

/// Fields recovered from a story document body. `title` and `author` are
/// None when the document is not in the recognized template; callers keep
/// their filename-derived fallbacks in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryBody {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: String,
}

/// First 200 characters of `text`, with "..." appended only when something
/// was actually cut off. Counts characters, not bytes, so multi-byte text
/// never splits mid-character.
fn truncate_description(text: &str) -> String {
    let mut out: String = text.chars().take(DESCRIPTION_LIMIT).collect();
    if text.chars().count() > DESCRIPTION_LIMIT {
        out.push_str("...");
    }
    out
}

/// Parse the decoded plain text of a story document.
///
/// Template detection: at least four non-empty lines, the first two equal to
/// the fixed header and subtitle. In that case the author comes from an
/// "Author: ..." third line, the title is the first line at index >= 4 that
/// is not a link, and the description is drawn from the body that follows.
///
/// Anything else falls back to a description built from the first three
/// lines. Never fails.
pub fn parse_story_body(content: &str) -> StoryBody {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.len() >= 4 && lines[0] == STORY_HEADER && lines[1] == STORY_SUBTITLE {
        let author = lines[2]
            .to_lowercase()
            .starts_with("author: ")
            .then(|| {
                // Keep the original casing; split after the first ": "
                lines[2]
                    .split_once(": ")
                    .map(|(_, a)| a.to_string())
                    .unwrap_or_default()
            })
            .filter(|a| !a.is_empty());

        // The story title is the first post-header line that is not a link;
        // the body starts on the line after it.
        let mut title = None;
        let mut body_start = 4;
        for (i, line) in lines.iter().enumerate().skip(4) {
            if !line.starts_with("http") {
                title = Some(line.to_string());
                body_start = i + 1;
                break;
            }
        }

        let body = lines[body_start.min(lines.len())..].join(" ");
        return StoryBody {
            title,
            author,
            description: truncate_description(&body),
        };
    }

    let head = lines[..lines.len().min(3)].join(" ");
    StoryBody {
        title: None,
        author: None,
        description: truncate_description(&head),
    }
}
