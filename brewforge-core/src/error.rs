use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrewforgeError {
    #[error("Computed batch volume of {0} L is outside the exportable range (0, 10000]")]
    BatchVolumeOutOfRange(f64),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("An error occurred while writing the gravity log: {0}")]
    LoggingError(#[from] anyhow::Error),
}
