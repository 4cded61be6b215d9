//! Error types for OpenAgenda API calls.

/// All errors that can occur while querying the OpenAgenda API.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// The server answered outside the 200–299 range.
    #[error("HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// Network-level failure: DNS, connection refused/reset, timeout.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A base URL or path segment could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl FetchError {
    /// The HTTP status code, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        // JSON decoding never goes through reqwest, so anything arriving
        // here is wire-level.
        FetchError::Transport(e)
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
