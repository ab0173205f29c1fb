use thiserror::Error;

/// Failures while reading a capitals file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("reading capitals file: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsing capitals file: {0}")]
    Csv(#[from] csv::Error),

    /// Only produced under `LoadPolicy::Strict`.
    #[error("malformed line {line}: {reason}")]
    Malformed { line: u64, reason: String },
}

/// Lookup failures. None of these are fatal; front ends report them and move on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("capital {0} is not in the data")]
    CapitalNotFound(String),

    /// The reference capital exists but every record shares its name.
    #[error("no other capital to compare {0} against")]
    NoCandidate(String),
}
