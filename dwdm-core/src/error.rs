use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("Frequency must be positive and finite, got {0} THz")]
    NonPositiveFrequency(f64),

    #[error("Wavelength must be positive and finite, got {0} nm")]
    NonPositiveWavelength(f64),

    #[error("Flexible slot width must be positive and finite, got {0} GHz")]
    InvalidSlotWidth(f64),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to write CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),
}
