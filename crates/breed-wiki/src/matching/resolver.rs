use super::index::CandidateIndex;
use super::normalizer::normalize_name;
use super::variations::breed_variations;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Share of the larger word set that must overlap for a one-word-apart match.
const MIN_OVERLAP_NUMERATOR: usize = 4;
const MIN_OVERLAP_DENOMINATOR: usize = 5;
/// Shared words that are enough on their own, regardless of set sizes.
const MIN_SHARED_WORDS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Fuzzy,
    #[serde(rename = "none")]
    Unmatched,
}

impl MatchKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Fuzzy => "fuzzy",
            Self::Unmatched => "none",
        }
    }
}

/// Outcome of resolving one breed name against a [`CandidateIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// One of the target's variations is an index key.
    Exact { url: String, variation: String },
    /// Word-overlap fallback; `score` is the number of shared words.
    Fuzzy {
        url: String,
        variation: String,
        score: usize,
    },
    NoMatch,
}

impl MatchResult {
    pub fn kind(&self) -> MatchKind {
        match self {
            Self::Exact { .. } => MatchKind::Exact,
            Self::Fuzzy { .. } => MatchKind::Fuzzy,
            Self::NoMatch => MatchKind::Unmatched,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Exact { url, .. } | Self::Fuzzy { url, .. } => Some(url),
            Self::NoMatch => None,
        }
    }

    /// The index key the target was matched through.
    pub fn variation(&self) -> Option<&str> {
        match self {
            Self::Exact { variation, .. } | Self::Fuzzy { variation, .. } => Some(variation),
            Self::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }
}

/// Resolves `target` to a single article URL.
///
/// Exact lookups run first, in variation generation order, and always win.
/// Only when none of them hits does the word-overlap fallback scan the whole
/// index; the highest number of shared words wins and ties go to the entry
/// registered first.
pub fn resolve(target: &str, index: &CandidateIndex) -> MatchResult {
    for variation in breed_variations(target) {
        if let Some(url) = index.get(&variation) {
            return MatchResult::Exact {
                url: url.to_string(),
                variation,
            };
        }
    }

    let normalized = normalize_name(target);
    let target_words = word_set(&normalized);
    let mut best: Option<(usize, &str, &str)> = None;

    for (variation, url) in index.iter() {
        let Some(score) = overlap(&target_words, &word_set(variation)) else {
            continue;
        };
        if best.map_or(true, |(best_score, _, _)| score > best_score) {
            best = Some((score, variation, url));
        }
    }

    match best {
        Some((score, variation, url)) => MatchResult::Fuzzy {
            url: url.to_string(),
            variation: variation.to_string(),
            score,
        },
        None => MatchResult::NoMatch,
    }
}

/// Whether two names plausibly denote the same breed.
///
/// One name's words must be a subset of the other's, and they must share
/// either at least two words or at least 80% of the larger word set.
pub fn is_good_match(left: &str, right: &str) -> bool {
    overlap(&word_set(left), &word_set(right)).is_some()
}

/// Number of shared words when the two sets form a good match.
fn overlap(left: &HashSet<&str>, right: &HashSet<&str>) -> Option<usize> {
    if left.is_empty() || right.is_empty() {
        return None;
    }
    if !left.is_subset(right) && !right.is_subset(left) {
        return None;
    }

    let shared = left.intersection(right).count();
    let largest = left.len().max(right.len());
    let good = shared >= MIN_SHARED_WORDS
        || shared * MIN_OVERLAP_DENOMINATOR >= largest * MIN_OVERLAP_NUMERATOR;
    good.then_some(shared)
}

fn word_set(name: &str) -> HashSet<&str> {
    name.split_whitespace().collect()
}
