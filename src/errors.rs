use thiserror::Error;

/// Failure of a single remote call.
///
/// The variants stay distinct at the API boundary; the view layer decides
/// how much of the difference the visitor gets to see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("remote API answered with HTTP {status}")]
    Http { status: u16 },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unexpected response body: {0}")]
    Malformed(String),
}

impl FetchError {
    pub fn http(status: reqwest::StatusCode) -> Self {
        Self::Http {
            status: status.as_u16(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            Self::http(status)
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("CATALOG_API_URL is not a valid http(s) URL: {0:?}")]
    InvalidApiUrl(String),
}
