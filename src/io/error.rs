use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse xyz data: {details} (at line ~{line})")]
    Parse { line: usize, details: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("prediction table is missing the '{0}' column")]
    MissingColumn(&'static str),
}

impl Error {
    pub fn parse(line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            line,
            details: details.into(),
        }
    }
}
