use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

/// Why a single GET against the news API did not produce a payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The API answered 404 for a lookup that distinguishes absence.
    #[error("resource not found")]
    NotFound,

    /// Any other non-2xx answer.
    #[error("request failed with status {status}")]
    RequestFailed { status: u16 },

    /// Transport, configuration or decoding failure.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl FetchError {
    pub fn unexpected(err: impl std::fmt::Display) -> Self {
        FetchError::Unexpected(err.to_string())
    }
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;
