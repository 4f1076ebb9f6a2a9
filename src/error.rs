use thiserror::Error;

/// Failures surfaced by the adapter. Nothing is caught or retried
/// internally; every variant propagates straight to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or transport failure reaching the upstream API.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The upstream does not know the requested resource name.
    #[error("{kind} \"{name}\" not found upstream")]
    NotFound { kind: &'static str, name: String },

    /// The upstream answered, but the payload violates an assumption the
    /// adapter depends on (missing fields, empty type list, stat-name
    /// collision after capitalization, malformed body).
    #[error("upstream data integrity: {0}")]
    DataIntegrity(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::UpstreamUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
