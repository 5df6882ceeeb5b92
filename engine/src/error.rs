use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Expected column '{0}' not found in CSV header")]
    MissingColumn(String),

    #[error("No valid contract records remained after cleaning")]
    EmptyDataset,

    #[error("Chart rendering error: {0}")]
    ChartError(String),
}
