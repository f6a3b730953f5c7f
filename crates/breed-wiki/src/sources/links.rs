//! Harvests article links from the saved "List of dog breeds" page.

use super::html::{decode_entities, text_content};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const ARTICLE_PREFIX: &str = "/wiki/";

/// One outbound article link: its display text and absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiLink {
    pub text: String,
    pub url: String,
}

impl WikiLink {
    /// Builds a link with its display text trimmed and inner whitespace runs
    /// (line breaks, `&nbsp;`) collapsed to single spaces.
    pub fn new(text: &str, url: impl Into<String>) -> Self {
        Self {
            text: text.split_whitespace().collect::<Vec<_>>().join(" "),
            url: url.into(),
        }
    }
}

fn anchor_pattern() -> &'static Regex {
    static ANCHOR: OnceLock<Regex> = OnceLock::new();
    ANCHOR.get_or_init(|| {
        Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a\s*>").expect("anchor pattern compiles")
    })
}

fn href_pattern() -> &'static Regex {
    static HREF: OnceLock<Regex> = OnceLock::new();
    HREF.get_or_init(|| {
        Regex::new(r#"(?i)\bhref\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("href pattern compiles")
    })
}

/// Every article anchor in `html`, in document order.
///
/// Namespace pages (`File:`, `Category:`, ...), the main page and other
/// "List of" pages are dropped, and hrefs are made absolute against `base_url`.
pub fn extract_links(html: &str, base_url: &str) -> Vec<WikiLink> {
    let base = base_url.trim_end_matches('/');

    anchor_pattern()
        .captures_iter(html)
        .filter_map(|anchor| {
            let href = href_pattern()
                .captures(&anchor[1])
                .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
                .map(|value| decode_entities(value.as_str()))?;
            if !is_article_href(&href) {
                return None;
            }
            Some(WikiLink::new(
                &text_content(&anchor[2]),
                format!("{base}{href}"),
            ))
        })
        .collect()
}

/// Whether a site-relative href points at a regular article.
pub fn is_article_href(href: &str) -> bool {
    href.starts_with(ARTICLE_PREFIX)
        && !href.contains(':')
        && !href.contains("Main_Page")
        && !href.contains("List_of")
}

/// Article title from an absolute article URL (`.../wiki/Beagle` -> `Beagle`).
pub fn page_title(url: &str) -> &str {
    url.rsplit(ARTICLE_PREFIX).next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{resolve, CandidateIndex, MatchKind};

    const BASE: &str = "https://en.wikipedia.org";

    #[test]
    fn article_links_are_extracted_in_order() {
        let html = r#"
            <ul>
              <li><a href="/wiki/Affenpinscher" title="Affenpinscher">Affenpinscher</a></li>
              <li><a class="mw-redirect" href='/wiki/Golden_Retriever'><i>Golden</i> Retriever </a></li>
            </ul>
        "#;

        let links = extract_links(html, BASE);
        assert_eq!(
            links,
            vec![
                WikiLink {
                    text: "Affenpinscher".to_string(),
                    url: "https://en.wikipedia.org/wiki/Affenpinscher".to_string(),
                },
                WikiLink {
                    text: "Golden Retriever".to_string(),
                    url: "https://en.wikipedia.org/wiki/Golden_Retriever".to_string(),
                },
            ]
        );
    }

    #[test]
    fn non_article_links_are_filtered() {
        let html = r##"
            <a href="/wiki/File:Beagle.jpg">image</a>
            <a href="/wiki/Main_Page">Main page</a>
            <a href="/wiki/List_of_dog_breeds_from_India">Indian breeds</a>
            <a href="https://example.org/wiki/Beagle">external</a>
            <a href="#cite_note-1">[1]</a>
            <a name="anchor">no href</a>
            <a href="/wiki/Beagle">Beagle</a>
        "##;

        let links = extract_links(html, "https://en.wikipedia.org/");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "https://en.wikipedia.org/wiki/Beagle");
    }

    #[test]
    fn entities_in_text_and_href_are_decoded() {
        let html = r#"<a href="/wiki/Bichon_Fris%C3%A9?a=1&amp;b=2">Bichon Fris&#233; &amp; Co</a>"#;
        let links = extract_links(html, BASE);
        assert_eq!(links[0].text, "Bichon Frisé & Co");
        assert!(links[0].url.ends_with("?a=1&b=2"));
    }

    #[test]
    fn wrapped_anchor_text_is_collapsed_to_single_spaces() {
        let html = "<a href=\"/wiki/Akita_Inu\">American\n    Akita</a>\
                    <a href=\"/wiki/Basset_Hound\">Basset&nbsp;&nbsp;\tHound </a>";
        let links = extract_links(html, BASE);
        let texts: Vec<&str> = links.iter().map(|link| link.text.as_str()).collect();
        assert_eq!(texts, vec!["American Akita", "Basset Hound"]);

        let index = CandidateIndex::build(links.iter().map(|link| (&link.text, &link.url)));
        let result = resolve("American Akita", &index);
        assert_eq!(result.kind(), MatchKind::Exact);
        assert_eq!(result.url(), Some("https://en.wikipedia.org/wiki/Akita_Inu"));
        assert!(!index.contains("american\n    akita"));
    }

    #[test]
    fn page_title_is_last_article_segment() {
        assert_eq!(page_title("https://en.wikipedia.org/wiki/Beagle"), "Beagle");
        assert_eq!(page_title("Beagle"), "Beagle");
    }
}
