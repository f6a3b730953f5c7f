use crate::matching::{normalize_name, resolve, CandidateIndex, MatchKind, MatchResult};
use crate::sources::page_title;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Resolution outcome for one dataset breed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedMatch {
    pub breed: String,
    /// Empty when no article was found.
    pub wikipedia_url: String,
    /// Article page name, as used to fetch the article itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_variation: Option<String>,
    pub kind: MatchKind,
    pub slug: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub total: usize,
    pub exact: usize,
    pub fuzzy: usize,
    pub unmatched: usize,
}

impl MatchSummary {
    fn record(&mut self, kind: MatchKind) {
        self.total += 1;
        match kind {
            MatchKind::Exact => self.exact += 1,
            MatchKind::Fuzzy => self.fuzzy += 1,
            MatchKind::Unmatched => self.unmatched += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub generated_at: DateTime<Utc>,
    pub index_size: usize,
    pub summary: MatchSummary,
    pub matches: Vec<BreedMatch>,
}

impl MatchReport {
    /// Resolves every breed against `index`, logging each outcome.
    pub fn build<I, S>(breeds: I, index: &CandidateIndex) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = MatchSummary::default();
        let mut matches = Vec::new();

        for breed in breeds {
            let breed = breed.as_ref();
            let result = resolve(breed, index);
            log_outcome(breed, &result);
            summary.record(result.kind());
            matches.push(BreedMatch {
                breed: breed.to_string(),
                wikipedia_url: result.url().unwrap_or_default().to_string(),
                article_title: result.url().map(|url| page_title(url).to_string()),
                matched_variation: result.variation().map(str::to_string),
                kind: result.kind(),
                slug: breed_slug(breed),
            });
        }

        info!(
            total = summary.total,
            exact = summary.exact,
            fuzzy = summary.fuzzy,
            unmatched = summary.unmatched,
            "resolved dataset breeds"
        );

        Self {
            generated_at: Utc::now(),
            index_size: index.len(),
            summary,
            matches,
        }
    }

    pub fn unmatched(&self) -> impl Iterator<Item = &BreedMatch> {
        self.matches
            .iter()
            .filter(|entry| entry.kind == MatchKind::Unmatched)
    }
}

fn log_outcome(breed: &str, result: &MatchResult) {
    match result {
        MatchResult::Exact { variation, .. } if *variation == normalize_name(breed) => {
            info!(breed, "found exact match");
        }
        MatchResult::Exact { variation, url } | MatchResult::Fuzzy { variation, url, .. } => {
            info!(breed, matched = %variation, %url, kind = result.kind().label(), "found match");
        }
        MatchResult::NoMatch => warn!(breed, "no match found"),
    }
}

/// File-system safe stem for per-breed artifacts (`"Retrievers (Golden)"` ->
/// `"retrievers_golden"`).
pub fn breed_slug(breed: &str) -> String {
    breed
        .to_lowercase()
        .replace('\u{a0}', " ")
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect()
}
