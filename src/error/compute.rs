use thiserror::Error;

/// Errors raised while talking to the Compute Engine API or obtaining its
/// access token.
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Transport or decoding failure from reqwest.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    ///
    /// `message` is the API's `error.message` when the body carries one,
    /// otherwise the raw body.
    #[error("{status}: {message}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Error message reported by the API
        message: String,
    },

    /// The access token could not be obtained from the metadata server.
    #[error("failed to obtain access token: {0}")]
    Token(String),

    /// The configured API base URL cannot carry instance paths.
    #[error("invalid Compute Engine API URL '{0}'")]
    InvalidUrl(String),
}

impl From<url::ParseError> for ComputeError {
    fn from(err: url::ParseError) -> Self {
        ComputeError::InvalidUrl(err.to_string())
    }
}
