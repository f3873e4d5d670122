use chronicles::content::body::{parse_story_body, StoryBody};

const TEMPLATE_DOC: &str = "\
Chronicles of Max
A Short Story
Author: A. Maynard
https://example.com/shared-doc
The Night Watch
Max had never trusted the moon.
It followed him everywhere.
";

#[test]
fn template_author_extracted() {
    let body = parse_story_body(TEMPLATE_DOC);
    assert_eq!(body.author.as_deref(), Some("A. Maynard"));
}

#[test]
fn template_title_skips_link_lines() {
    let body = parse_story_body(TEMPLATE_DOC);
    assert_eq!(body.title.as_deref(), Some("The Night Watch"));
}

#[test]
fn template_description_from_story_body() {
    let body = parse_story_body(TEMPLATE_DOC);
    assert_eq!(
        body.description,
        "Max had never trusted the moon. It followed him everywhere."
    );
}

#[test]
fn template_author_prefix_is_case_insensitive() {
    let doc = "Chronicles of Max\nA Short Story\nAUTHOR: Jane Doe\nfiller\nTitle Line\nBody.";
    let body = parse_story_body(doc);
    assert_eq!(body.author.as_deref(), Some("Jane Doe"));
}

#[test]
fn header_match_is_case_sensitive() {
    let doc = "chronicles of max\nA Short Story\nAuthor: X\nfiller\nTitle\nBody.";
    let body = parse_story_body(doc);
    assert_eq!(body.title, None);
    assert_eq!(body.author, None);
}

#[test]
fn long_description_is_truncated_with_ellipsis() {
    let long_body = "word ".repeat(100);
    let doc = format!("Chronicles of Max\nA Short Story\nAuthor: X\nfiller\nTitle\n{long_body}");
    let body = parse_story_body(&doc);
    assert!(body.description.ends_with("..."));
    // 200 characters of content plus the three-dot suffix
    assert_eq!(body.description.chars().count(), 203);
}

#[test]
fn short_description_gets_no_ellipsis() {
    let doc = "Chronicles of Max\nA Short Story\nAuthor: X\nfiller\nTitle\nShort body.";
    let body = parse_story_body(doc);
    assert_eq!(body.description, "Short body.");
}

#[test]
fn fallback_uses_first_three_lines() {
    let doc = "line one\nline two\nline three\nline four";
    let body = parse_story_body(doc);
    assert_eq!(body.description, "line one line two line three");
    assert_eq!(body.title, None);
    assert_eq!(body.author, None);
}

#[test]
fn fallback_short_content_has_no_ellipsis() {
    let body = parse_story_body("just one line");
    assert_eq!(body.description, "just one line");
}

#[test]
fn fallback_long_lines_truncate_at_200_chars() {
    let doc = "a".repeat(300);
    let body = parse_story_body(&doc);
    assert_eq!(body.description.chars().count(), 203);
    assert!(body.description.ends_with("..."));
}

#[test]
fn empty_input_is_harmless() {
    let body = parse_story_body("");
    assert_eq!(body, StoryBody::default());
}

#[test]
fn blank_lines_are_ignored_before_template_check() {
    let doc = "\n\nChronicles of Max\n\nA Short Story\nAuthor: X\nfiller\nReal Title\nBody text.";
    let body = parse_story_body(doc);
    assert_eq!(body.title.as_deref(), Some("Real Title"));
}

#[test]
fn missing_author_line_keeps_unknown() {
    let doc = "Chronicles of Max\nA Short Story\nWritten one rainy evening\nfiller\nTitle\nBody.";
    let body = parse_story_body(doc);
    assert_eq!(body.author, None);
    assert_eq!(body.title.as_deref(), Some("Title"));
}
