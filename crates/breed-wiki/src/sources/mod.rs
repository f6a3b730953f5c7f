//! Inputs to the resolver: the breed dataset, the harvested article links,
//! and description text pulled from matched articles.

mod dataset;
mod description;
mod html;
mod links;

pub use dataset::{BreedDataset, DatasetError};
pub use description::{describe_html, first_paragraph};
pub use links::{extract_links, is_article_href, page_title, WikiLink};
