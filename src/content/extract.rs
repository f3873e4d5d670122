//! Per-format text extraction behind one trait, so the story pipeline stays
//! format-agnostic. Extraction is best-effort: every strategy produces plain
//! text with line breaks preserved well enough for template detection.

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
    #[error("no extractor accepts {0}")]
    Unsupported(String),
}

/// One text-extraction strategy. `accepts` checks the file extension;
/// `extract` produces decoded plain text or fails with `ExtractionError`.
pub trait TextExtractor: Send + Sync {
    fn accepts(&self, path: &Path) -> bool;
    fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}

fn has_ext(path: &Path, exts: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .is_some_and(|e| exts.contains(&e.as_str()))
}

/// Dispatch to the first matching extractor.
pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    let extractors: &[&dyn TextExtractor] = &[
        &PdfExtractor,
        &HtmlExtractor,
        &RtfExtractor,
        &PlainTextExtractor,
    ];
    for extractor in extractors {
        if extractor.accepts(path) {
            return extractor.extract(path);
        }
    }
    Err(ExtractionError::Unsupported(path.display().to_string()))
}

/// txt/md: read as UTF-8, tolerating stray bytes.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn accepts(&self, path: &Path) -> bool {
        has_ext(path, &["txt", "md"])
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// html: strip tags and decode the handful of entities the exported
/// documents actually use. Block-level closing tags become line breaks so
/// the header lines survive as separate lines.
pub struct HtmlExtractor;

impl TextExtractor for HtmlExtractor {
    fn accepts(&self, path: &Path) -> bool {
        has_ext(path, &["html"])
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path)?;
        Ok(strip_html(&String::from_utf8_lossy(&bytes)))
    }
}

/// rtf: drop groups and control words, keeping only document text.
pub struct RtfExtractor;

impl TextExtractor for RtfExtractor {
    fn accepts(&self, path: &Path) -> bool {
        has_ext(path, &["rtf"])
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path)?;
        Ok(strip_rtf(&String::from_utf8_lossy(&bytes)))
    }
}

/// pdf: delegated to the pdf-extract crate.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn accepts(&self, path: &Path) -> bool {
        has_ext(path, &["pdf"])
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        pdf_extract::extract_text(path).map_err(|e| ExtractionError::Pdf(e.to_string()))
    }
}

fn find_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Tags whose end marks a line break in the extracted text.
fn is_block_tag(name: &str) -> bool {
    matches!(
        name,
        "p" | "div" | "li" | "tr" | "title" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
    )
}

pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len() / 2);
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        let Some(end) = after.find('>') else {
            // Unterminated tag: discard the remainder
            rest = "";
            break;
        };
        let tag = &after[1..end];
        let name = tag
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/' || c == '>')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();

        rest = &after[end + 1..];

        // Skip script/style bodies entirely — they are not content.
        if (name == "script" || name == "style") && !tag.starts_with('/') {
            let close = format!("</{name}>");
            match find_case_insensitive(rest, &close) {
                Some(pos) => rest = &rest[pos + close.len()..],
                None => {
                    rest = "";
                    break;
                }
            }
            out.push('\n');
            continue;
        }

        if name == "br" || (tag.starts_with('/') && is_block_tag(&name)) {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }
    out.push_str(rest);

    let decoded = out
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    // Collapse runs of spaces within each line; drop blank lines later stages
    // do not care about, but keep the line structure itself.
    decoded
        .lines()
        .map(|l| l.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header groups whose contents are formatting tables, not document text.
const RTF_SKIP_GROUPS: &[&str] = &["fonttbl", "colortbl", "stylesheet", "info", "pict", "header", "footer"];

pub fn strip_rtf(rtf: &str) -> String {
    let bytes = rtf.as_bytes();
    let mut out = String::with_capacity(rtf.len() / 2);
    // Content bytes are buffered and decoded in runs so multi-byte UTF-8
    // sequences survive intact.
    let mut pending: Vec<u8> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                // Peek for a destination group to skip wholesale.
                if let Some(name) = group_control_word(bytes, i + 1) {
                    if RTF_SKIP_GROUPS.contains(&name.as_str()) {
                        i = skip_group(bytes, i);
                        continue;
                    }
                }
                i += 1;
            }
            b'}' => i += 1,
            b'\\' => {
                flush_pending(&mut out, &mut pending);
                let (consumed, text) = control_sequence(bytes, i);
                out.push_str(&text);
                i += consumed;
            }
            b'\r' | b'\n' => i += 1, // raw newlines are not content in RTF
            b => {
                pending.push(b);
                i += 1;
            }
        }
    }
    flush_pending(&mut out, &mut pending);
    out
}

fn flush_pending(out: &mut String, pending: &mut Vec<u8>) {
    if !pending.is_empty() {
        out.push_str(&String::from_utf8_lossy(pending));
        pending.clear();
    }
}

/// Control word immediately following a group opener, e.g. `{\fonttbl`.
/// `\*\name` destination markers are resolved to `name`.
fn group_control_word(bytes: &[u8], mut i: usize) -> Option<String> {
    if bytes.get(i) != Some(&b'\\') {
        return None;
    }
    i += 1;
    if bytes.get(i) == Some(&b'*') {
        i += 1;
        if bytes.get(i) != Some(&b'\\') {
            return None;
        }
        i += 1;
    }
    let start = i;
    while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
        i += 1;
    }
    (i > start).then(|| String::from_utf8_lossy(&bytes[start..i]).into_owned())
}

/// Index just past the `}` matching the `{` at `open`.
fn skip_group(bytes: &[u8], open: usize) -> usize {
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            }
            // Escaped braces don't affect nesting
            b'\\' if i + 1 < bytes.len() => i += 1,
            _ => {}
        }
        i += 1;
    }
    bytes.len()
}

/// Consume one `\...` sequence starting at `i`; returns (bytes consumed,
/// replacement text).
fn control_sequence(bytes: &[u8], i: usize) -> (usize, String) {
    let Some(&next) = bytes.get(i + 1) else {
        return (1, String::new());
    };

    if next.is_ascii_alphabetic() {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_alphabetic() {
            j += 1;
        }
        let word = String::from_utf8_lossy(&bytes[i + 1..j]).into_owned();
        // Optional numeric parameter
        if bytes.get(j) == Some(&b'-') {
            j += 1;
        }
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        // A single trailing space is part of the control word
        if bytes.get(j) == Some(&b' ') {
            j += 1;
        }
        let text = match word.as_str() {
            "par" | "line" | "sect" | "page" => "\n".to_string(),
            "tab" => " ".to_string(),
            _ => String::new(),
        };
        (j - i, text)
    } else if next == b'\'' {
        // \'hh — 8-bit character escape
        let hex = bytes.get(i + 2..i + 4);
        let ch = hex
            .and_then(|h| std::str::from_utf8(h).ok())
            .and_then(|h| u8::from_str_radix(h, 16).ok())
            .map(|b| b as char);
        match ch {
            Some(c) => (4, c.to_string()),
            None => (2, String::new()),
        }
    } else {
        // Escaped symbol: \\ \{ \} pass through, anything else is dropped
        let text = match next {
            b'\\' | b'{' | b'}' => (next as char).to_string(),
            b'~' => " ".to_string(),
            _ => String::new(),
        };
        (2, text)
    }
}
