use breed_wiki::matching::{
    breed_variations, is_good_match, normalize_name, resolve, CandidateIndex, MatchKind,
    MatchResult,
};
use breed_wiki::report::MatchReport;
use breed_wiki::sources::{extract_links, BreedDataset};

const BASE: &str = "https://en.wikipedia.org";
const U1: &str = "https://en.wikipedia.org/wiki/Golden_Retriever";

fn fixture_index() -> CandidateIndex {
    let html = include_str!("fixtures/list_of_dog_breeds.html");
    let links = extract_links(html, BASE);
    CandidateIndex::build(links.iter().map(|link| (&link.text, &link.url)))
}

#[test]
fn golden_retriever_resolves_through_promoted_qualifier() {
    assert_eq!(normalize_name("Retriever (Golden)"), "golden retriever");
    let variations = breed_variations("Retriever (Golden)");
    assert!(variations.contains("golden retriever"));
    assert!(variations.contains("retriever golden"));

    let index = CandidateIndex::build([("golden retriever", U1)]);
    assert_eq!(
        resolve("Retriever (Golden)", &index),
        MatchResult::Exact {
            url: U1.to_string(),
            variation: "golden retriever".to_string(),
        }
    );
}

#[test]
fn bare_category_word_does_not_fuzzy_match_longer_names() {
    assert_eq!(normalize_name("Terriers"), "terrier");
    assert!(!is_good_match("terrier", "toy terrier"));

    let index = CandidateIndex::build([("toy terrier", "https://x/wiki/Toy_Terrier")]);
    assert_eq!(resolve("Terriers", &index), MatchResult::NoMatch);
}

#[test]
fn two_shared_words_accept_a_subset_name() {
    let cocker = "https://en.wikipedia.org/wiki/Cocker_Spaniel";
    let index = CandidateIndex::build([("cocker spaniel", cocker)]);
    let result = resolve("English Cocker Spaniel", &index);

    assert_eq!(result.kind(), MatchKind::Fuzzy);
    assert_eq!(result.url(), Some(cocker));
    assert_eq!(result.variation(), Some("cocker spaniel"));
}

#[test]
fn empty_name_never_matches() {
    assert_eq!(normalize_name(""), "");
    let variations: Vec<String> = breed_variations("").into_iter().collect();
    assert_eq!(variations, vec![String::new()]);
    assert_eq!(resolve("", &fixture_index()), MatchResult::NoMatch);
}

#[test]
fn raw_name_key_takes_precedence_over_fuzzy_candidates() {
    let index = CandidateIndex::build([
        ("German Shepherd Dog", "https://x/wiki/Fuzzy"),
        ("German Shepherd", "https://x/wiki/Raw"),
    ]);
    let result = resolve("German Shepherd", &index);
    assert_eq!(result.kind(), MatchKind::Exact);
    assert_eq!(result.url(), Some("https://x/wiki/Raw"));
}

#[test]
fn fixture_page_yields_only_article_links() {
    let html = include_str!("fixtures/list_of_dog_breeds.html");
    let links = extract_links(html, BASE);

    assert_eq!(links.len(), 8);
    assert!(links.iter().all(|link| link.url.starts_with(BASE)));
    assert!(links.iter().all(|link| !link.url.contains("List_of")));
    assert_eq!(links[0].text, "Labrador Retriever");
    assert_eq!(links[7].url, "https://en.wikipedia.org/wiki/Akita_(dog)");
}

#[test]
fn dataset_breeds_resolve_against_fixture_page() {
    let breeds = BreedDataset::from_reader(&include_bytes!("fixtures/breed_traits.csv")[..])
        .expect("dataset parses");
    let report = MatchReport::build(&breeds, &fixture_index());

    let outcome = |breed: &str| {
        report
            .matches
            .iter()
            .find(|entry| entry.breed == breed)
            .unwrap_or_else(|| panic!("{breed} missing from report"))
    };

    let labrador = outcome("Retrievers (Labrador)");
    assert_eq!(labrador.kind, MatchKind::Exact);
    assert_eq!(
        labrador.wikipedia_url,
        "https://en.wikipedia.org/wiki/Labrador_Retriever"
    );
    assert_eq!(labrador.article_title.as_deref(), Some("Labrador_Retriever"));

    let shepherd = outcome("German Shepherd Dogs");
    assert_eq!(shepherd.kind, MatchKind::Fuzzy);
    assert_eq!(shepherd.matched_variation.as_deref(), Some("german shepherd"));

    assert_eq!(outcome("Spaniels (English Cocker)").kind, MatchKind::Fuzzy);
    assert_eq!(outcome("Terriers").kind, MatchKind::Unmatched);
    assert_eq!(outcome("Terriers").wikipedia_url, "");

    assert_eq!(report.summary.total, 8);
    assert_eq!(report.summary.exact, 3);
    assert_eq!(report.summary.fuzzy, 2);
    assert_eq!(report.summary.unmatched, 3);
}

#[test]
fn index_is_shareable_across_threads() {
    let index = std::sync::Arc::new(fixture_index());
    let handles: Vec<_> = ["Retrievers (Golden)", "French Bulldogs"]
        .into_iter()
        .map(|breed| {
            let index = std::sync::Arc::clone(&index);
            std::thread::spawn(move || resolve(breed, &index))
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("resolver thread completes");
        assert_eq!(result.kind(), MatchKind::Exact);
    }
}
