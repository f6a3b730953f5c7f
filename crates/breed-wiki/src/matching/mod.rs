//! Breed-name resolution: normalization, variation expansion, the candidate
//! index built from harvested links, and the two-phase resolver.
//!
//! Everything here is pure computation. A [`CandidateIndex`] is built once and
//! only read afterwards, so it can be shared across threads freely.

mod index;
mod normalizer;
mod resolver;
mod variations;

pub use index::{breed_from_url, CandidateIndex, MIN_VARIATION_CHARS};
pub use normalizer::normalize_name;
pub use resolver::{is_good_match, resolve, MatchKind, MatchResult};
pub use variations::{breed_variations, VariationSet};
