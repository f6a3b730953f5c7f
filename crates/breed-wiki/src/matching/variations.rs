use super::normalizer::{normalize_name, QUALIFIED_BREED_TYPES};

/// Alternate spellings of one breed name, in generation order and without
/// duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariationSet {
    variations: Vec<String>,
}

impl VariationSet {
    fn insert(&mut self, variation: String) {
        if !self.variations.contains(&variation) {
            self.variations.push(variation);
        }
    }

    pub fn contains(&self, variation: &str) -> bool {
        self.variations.iter().any(|candidate| candidate == variation)
    }
}

impl IntoIterator for VariationSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.variations.into_iter()
    }
}

/// Expands a raw breed name into the spellings it may appear under.
///
/// The set starts with the raw name and its normalized form. Retriever and
/// spaniel names with at least two normalized tokens also get both orderings
/// of `"{first token} {type}"`, since link text and dataset names disagree on
/// whether the qualifier comes first ("Golden Retriever" vs "Retriever, Golden").
pub fn breed_variations(name: &str) -> VariationSet {
    let normalized = normalize_name(name);
    let lowered = name.to_lowercase();

    let mut set = VariationSet::default();
    set.insert(name.to_string());
    set.insert(normalized.clone());

    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    if tokens.len() < 2 {
        return set;
    }

    let first = tokens[0];
    for kind in QUALIFIED_BREED_TYPES {
        if lowered.contains(kind) {
            set.insert(format!("{first} {kind}"));
            set.insert(format!("{kind} {first}"));
        }
    }

    set
}
