use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV row {line}: {msg}")]
    CsvRow { line: usize, msg: String },

    #[error("data quality error: {0}")]
    DataQuality(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
