use super::html::text_content;
use regex::Regex;
use std::sync::OnceLock;

/// Paragraphs at or below this length are captions, hatnotes and the like.
const MIN_PARAGRAPH_CHARS: usize = 50;
const SKIPPED_PREFIXES: [&str; 3] = ["==", "^", "["];

fn paragraph_pattern() -> &'static Regex {
    static PARAGRAPH: OnceLock<Regex> = OnceLock::new();
    PARAGRAPH.get_or_init(|| {
        Regex::new(r"(?is)<p\b[^>]*>(.*?)</p\s*>").expect("paragraph pattern compiles")
    })
}

fn citation_pattern() -> &'static Regex {
    static CITATION: OnceLock<Regex> = OnceLock::new();
    CITATION.get_or_init(|| {
        Regex::new(r"(?is)<sup\b[^>]*>.*?</sup\s*>").expect("citation pattern compiles")
    })
}

/// First line of plain article text that reads like a real paragraph.
///
/// Returns an empty string when nothing qualifies.
pub fn first_paragraph(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .find(|line| {
            line.chars().count() > MIN_PARAGRAPH_CHARS
                && !SKIPPED_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
        })
        .unwrap_or_default()
        .to_string()
}

/// [`first_paragraph`] over a saved article page.
///
/// Each `<p>` element becomes one line of text; citation superscripts are dropped.
pub fn describe_html(html: &str) -> String {
    let without_citations = citation_pattern().replace_all(html, "");
    let text = paragraph_pattern()
        .captures_iter(&without_citations)
        .map(|caps| text_content(&caps[1]).replace('\n', " "))
        .collect::<Vec<_>>()
        .join("\n");
    first_paragraph(&text)
}
