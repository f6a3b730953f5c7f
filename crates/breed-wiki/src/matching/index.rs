use super::variations::breed_variations;
use std::collections::HashMap;
use tracing::debug;

/// Variations this short are too ambiguous to register ("of", "a", ...).
pub const MIN_VARIATION_CHARS: usize = 3;

/// Lookup table from every known spelling of a linked breed to its article URL.
///
/// Iteration follows first-registration order. Re-registering a variation
/// replaces its URL but keeps its original position, which is what makes
/// fuzzy tie-breaking reproducible.
#[derive(Debug, Clone, Default)]
pub struct CandidateIndex {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl CandidateIndex {
    /// Builds the index from `(display text, absolute url)` pairs.
    ///
    /// The stream is expected to be pre-filtered to article links. Both the
    /// trimmed display text and the breed name carried by the URL are expanded
    /// into variations, and later links overwrite earlier ones for a shared key.
    pub fn build<I, T, U>(links: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
        T: AsRef<str>,
        U: AsRef<str>,
    {
        let mut index = Self::default();
        let mut link_count = 0usize;

        for (text, url) in links {
            let url = url.as_ref();
            let display = text.as_ref().trim();
            let from_url = breed_from_url(url);

            index.register(display, url);
            index.register(&from_url, url);
            link_count += 1;
        }

        debug!(
            links = link_count,
            variations = index.len(),
            "built candidate index"
        );
        index
    }

    fn register(&mut self, source: &str, url: &str) {
        if source.is_empty() {
            return;
        }

        for variation in breed_variations(source) {
            if variation.chars().count() < MIN_VARIATION_CHARS {
                continue;
            }
            match self.positions.get(&variation) {
                Some(&position) => self.entries[position].1 = url.to_string(),
                None => {
                    self.positions.insert(variation.clone(), self.entries.len());
                    self.entries.push((variation, url.to_string()));
                }
            }
        }
    }

    pub fn get(&self, variation: &str) -> Option<&str> {
        self.positions
            .get(variation)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn contains(&self, variation: &str) -> bool {
        self.positions.contains_key(variation)
    }

    /// `(variation, url)` pairs in first-registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(variation, url)| (variation.as_str(), url.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reads the breed name out of an article URL's last path segment.
///
/// `.../wiki/Chinook_(dog)` keeps its parenthetical, while
/// `.../wiki/Akita_dog` drops the `_dog` suffix. Percent escapes are decoded
/// when they form valid UTF-8.
pub fn breed_from_url(url: &str) -> String {
    let segment = url.rsplit('/').next().unwrap_or_default();
    let decoded = urlencoding::decode(segment)
        .map(|value| value.into_owned())
        .unwrap_or_else(|_| segment.to_string());
    let trimmed = decoded.strip_suffix("_dog").unwrap_or(decoded.as_str());
    trimmed.replace('_', " ")
}
