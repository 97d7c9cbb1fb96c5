use thiserror::Error;

/// Failures surfaced by the roster generator. Nothing is recovered
/// internally; every error propagates to the boundary and aborts the run.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The input document is not valid JSON, is not an object, or is
    /// missing one of its required top-level keys.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// An individual user or response record failed field validation.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// A custom mass catalog could not be parsed or is inconsistent.
    #[error("invalid mass catalog: {0}")]
    InvalidCatalog(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl ScheduleError {
    /// Error kind name reported in the failure document. The wire contract
    /// only distinguishes bad input documents from everything else.
    pub fn kind(&self) -> &'static str {
        match self {
            ScheduleError::MalformedInput(_) => "MalformedInput",
            _ => "Unexpected",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
