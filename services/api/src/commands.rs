use breed_wiki::config::{AppConfig, SourceConfig};
use breed_wiki::error::AppError;
use breed_wiki::matching::{CandidateIndex, MatchKind};
use breed_wiki::report::MatchReport;
use breed_wiki::sources::{describe_html, extract_links, BreedDataset};
use breed_wiki::telemetry;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Breed traits CSV with a `Breed` column
    #[arg(long)]
    pub(crate) breeds: PathBuf,
    /// Saved HTML of the "List of dog breeds" page
    #[arg(long)]
    pub(crate) page: PathBuf,
    /// Override the configured site root used to absolutize article links
    #[arg(long)]
    pub(crate) base_url: Option<String>,
    /// Emit the report as JSON instead of a text listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DescribeArgs {
    /// Saved HTML of a breed article
    #[arg(long)]
    pub(crate) page: PathBuf,
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let MatchArgs {
        breeds,
        page,
        base_url,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let source = match base_url {
        Some(base_url) => SourceConfig::from_base_url(&base_url)?,
        None => config.source,
    };

    let breeds = BreedDataset::from_path(&breeds)?;
    let html = std::fs::read_to_string(&page)?;
    let report = match_breeds(&breeds, &html, &source);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_match_report(&report);
    }

    Ok(())
}

pub(crate) fn match_breeds(breeds: &[String], html: &str, source: &SourceConfig) -> MatchReport {
    let links = extract_links(html, &source.wiki_base_url);
    let index = CandidateIndex::build(links.iter().map(|link| (&link.text, &link.url)));
    info!(
        links = links.len(),
        variations = index.len(),
        "collected breed names and urls"
    );

    MatchReport::build(breeds, &index)
}

fn render_match_report(report: &MatchReport) {
    println!("Breed article matches");
    println!(
        "Candidate variations: {} (generated {})",
        report.index_size,
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    );

    for entry in &report.matches {
        match (entry.kind, entry.matched_variation.as_deref()) {
            (MatchKind::Unmatched, _) | (_, None) => println!("- {}: no match", entry.breed),
            (kind, Some(variation)) => println!(
                "- {} -> {} [{} via '{}']",
                entry.breed,
                entry.wikipedia_url,
                kind.label(),
                variation
            ),
        }
    }

    let summary = report.summary;
    println!(
        "\n{} breeds: {} exact, {} fuzzy, {} unmatched",
        summary.total, summary.exact, summary.fuzzy, summary.unmatched
    );
}

pub(crate) fn run_describe(args: DescribeArgs) -> Result<(), AppError> {
    let html = std::fs::read_to_string(&args.page)?;
    let description = describe_html(&html);

    if description.is_empty() {
        println!("No suitable description found");
    } else {
        println!("{description}");
    }

    Ok(())
}
