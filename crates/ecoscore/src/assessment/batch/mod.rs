mod parser;

use super::{AssessmentRequest, ValidationError};
use std::io::Read;
use std::path::Path;

use parser::parse_rows;

#[derive(Debug)]
pub enum BatchImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Composition { row: usize, detail: String },
    Invalid { row: usize, source: ValidationError },
}

impl std::fmt::Display for BatchImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchImportError::Io(err) => write!(f, "failed to read batch file: {}", err),
            BatchImportError::Csv(err) => write!(f, "invalid batch CSV data: {}", err),
            BatchImportError::Composition { row, detail } => {
                write!(f, "row {}: malformed materials column ({})", row, detail)
            }
            BatchImportError::Invalid { row, source } => write!(f, "row {}: {}", row, source),
        }
    }
}

impl std::error::Error for BatchImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchImportError::Io(err) => Some(err),
            BatchImportError::Csv(err) => Some(err),
            BatchImportError::Invalid { source, .. } => Some(source),
            BatchImportError::Composition { .. } => None,
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

/// Reads product rows from CSV into validated assessment requests.
///
/// Expected headers: `product_name, materials, weight_kg, origin_country,
/// destination_country` and an optional `shipping_mode`. The `materials` column holds
/// `name:share` pairs separated by `;`.
pub struct BatchAssessmentImporter;

impl BatchAssessmentImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<AssessmentRequest>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<AssessmentRequest>, BatchImportError> {
        let requests = parse_rows(reader)?;
        for (index, request) in requests.iter().enumerate() {
            request
                .validate()
                .map_err(|source| BatchImportError::Invalid {
                    row: index + 1,
                    source,
                })?;
        }
        Ok(requests)
    }
}
