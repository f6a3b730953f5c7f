use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Io(err) => write!(f, "failed to read breed dataset: {}", err),
            DatasetError::Csv(err) => write!(f, "invalid breed dataset CSV: {}", err),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io(err) => Some(err),
            DatasetError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct BreedRow {
    #[serde(rename = "Breed")]
    breed: String,
}

/// Breed names from the traits dataset, in file order.
pub struct BreedDataset;

impl BreedDataset {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads the `Breed` column; other columns are ignored and blank names skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<String>, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut breeds = Vec::new();

        for record in csv_reader.deserialize::<BreedRow>() {
            let row = record?;
            // the dataset separates some words with no-break spaces
            let name = row.breed.replace('\u{a0}', " ").trim().to_string();
            if !name.is_empty() {
                breeds.push(name);
            }
        }

        Ok(breeds)
    }
}
