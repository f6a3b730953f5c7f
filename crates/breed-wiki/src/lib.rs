//! Resolves dog-breed names from a tabular dataset to Wikipedia articles
//! harvested from the "List of dog breeds" page.

pub mod config;
pub mod error;
pub mod matching;
pub mod report;
pub mod sources;
pub mod telemetry;
