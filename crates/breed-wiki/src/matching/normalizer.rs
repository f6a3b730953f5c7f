//! Canonical form used to compare breed names from the dataset with link text.
//!
//! Normalization is a fixed sequence of small string transforms. Each step is
//! its own function so the pipeline can be read (and tested) one rule at a time.

/// Leading words that only name the category a breed belongs to.
const CATEGORY_PREFIXES: [&str; 4] = ["dogs", "spaniels", "retrievers", "terriers"];

/// Breed types whose qualifier is commonly written in parentheses,
/// e.g. "Retriever (Golden)".
pub(crate) const QUALIFIED_BREED_TYPES: [&str; 2] = ["retriever", "spaniel"];

/// Normalizes a raw breed name.
///
/// The ordered steps are repeated until the output stops changing, so
/// `normalize_name(&normalize_name(x)) == normalize_name(x)` for every input.
/// Every pass after the first can only remove characters, which bounds the loop.
pub fn normalize_name(name: &str) -> String {
    let mut current = normalize_pass(name);
    loop {
        let next = normalize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_pass(name: &str) -> String {
    let lowered = name.to_lowercase();
    let promoted = promote_qualifier(&lowered);
    let without_category = strip_category_prefix(&promoted);
    let singular = strip_plural_suffix(without_category);
    let cleaned = remove_punctuation(singular);
    cleaned.trim().to_string()
}

/// Rewrites `"retriever (golden)"` as `"golden retriever "`.
///
/// Only the first parenthetical group is considered, and only names of a
/// [`QUALIFIED_BREED_TYPES`] type are rewritten. Anything else is returned
/// unchanged and its parentheses are dropped later by [`remove_punctuation`].
pub(crate) fn promote_qualifier(name: &str) -> String {
    let Some(open) = name.find('(') else {
        return name.to_string();
    };
    let Some(close) = name[open + 1..].find(')') else {
        return name.to_string();
    };
    if !QUALIFIED_BREED_TYPES.iter().any(|kind| name.contains(kind)) {
        return name.to_string();
    }

    let qualifier = &name[open + 1..open + 1 + close];
    format!("{} {}", qualifier, &name[..open])
}

/// Drops a leading category word and the whitespace after it.
///
/// A name that consists of nothing but the category word is kept, so a bare
/// "terriers" still normalizes to "terrier" rather than to an empty string.
pub(crate) fn strip_category_prefix(name: &str) -> &str {
    for prefix in CATEGORY_PREFIXES {
        if let Some(rest) = name.strip_prefix(prefix) {
            let rest = rest.trim_start();
            if rest.is_empty() {
                return name;
            }
            return rest;
        }
    }
    name
}

/// Removes one trailing `es`, or failing that one trailing `s`.
///
/// This is a heuristic: names that genuinely end in `s` lose it as well.
pub(crate) fn strip_plural_suffix(name: &str) -> &str {
    name.strip_suffix("es")
        .or_else(|| name.strip_suffix('s'))
        .unwrap_or(name)
}

pub(crate) fn remove_punctuation(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect()
}
