use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::info;

use super::domain::{Customer, ValidationOutcome};
use super::service::{check_threshold, CustomerValidationService, ValidationError};

#[derive(Debug)]
pub enum BatchImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Validation(ValidationError),
}

impl std::fmt::Display for BatchImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchImportError::Io(err) => write!(f, "failed to read customer batch: {}", err),
            BatchImportError::Csv(err) => write!(f, "invalid customer batch CSV: {}", err),
            BatchImportError::Validation(err) => {
                write!(f, "could not validate customer batch: {}", err)
            }
        }
    }
}

impl std::error::Error for BatchImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchImportError::Io(err) => Some(err),
            BatchImportError::Csv(err) => Some(err),
            BatchImportError::Validation(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BatchImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<ValidationError> for BatchImportError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

/// Outcome for one CSV row. `row` is 1-based and excludes the header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchMatch {
    pub row: usize,
    pub name1: String,
    pub name2: String,
    pub outcome: ValidationOutcome,
}

/// Scores every customer pair of a `name1,name2,email1,email2` CSV export.
pub struct BatchImporter;

impl BatchImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        service: &CustomerValidationService,
        threshold: f64,
    ) -> Result<Vec<BatchMatch>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, service, threshold)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        service: &CustomerValidationService,
        threshold: f64,
    ) -> Result<Vec<BatchMatch>, BatchImportError> {
        let threshold = check_threshold(threshold)?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut matches = Vec::new();

        for (index, record) in csv_reader.deserialize::<BatchRow>().enumerate() {
            let row = record?;
            let lhs = Customer::new(row.name1, row.email1);
            let rhs = Customer::new(row.name2, row.email2);
            let outcome = service.validate(&lhs, &rhs, threshold)?;

            matches.push(BatchMatch {
                row: index + 1,
                name1: lhs.name,
                name2: rhs.name,
                outcome,
            });
        }

        let matched = matches.iter().filter(|entry| entry.outcome.matched).count();
        info!(rows = matches.len(), matched, threshold, "customer batch scored");
        Ok(matches)
    }
}

#[derive(Debug, Deserialize)]
struct BatchRow {
    name1: String,
    name2: String,
    #[serde(default, deserialize_with = "missing_as_empty")]
    email1: String,
    #[serde(default, deserialize_with = "missing_as_empty")]
    email2: String,
}

fn missing_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
