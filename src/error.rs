use thiserror::Error;

#[derive(Error, Debug)]
pub enum KrError {
    #[error("could not read or write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unreadable key-result CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid report settings: {0}")]
    Config(String),

    #[error("rejected input: {0}")]
    Validation(String),

    #[error("nothing to aggregate: {0}")]
    NoResults(String),
}

pub type KrResult<T> = Result<T, KrError>;
