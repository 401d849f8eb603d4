//! Fetch error taxonomy shared by the list and detail paths.

use thiserror::Error;

/// Coarse classification of a [`FetchError`] for display and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not complete (connect, DNS, timeout, bad request URL).
    Network,
    /// The body was not valid JSON or did not have the expected shape.
    Decode,
    /// The server answered with a non-2xx status.
    NotFound,
}

/// Error returned by a single list or detail fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl reported a transport failure.
    #[error("network: {0}")]
    Network(#[from] curl::Error),
    /// The configured endpoint could not be turned into a request URL.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
    /// The blocking transfer task panicked or was cancelled.
    #[error("fetch task failed: {0}")]
    Join(String),
    /// Response had a non-2xx status.
    #[error("HTTP {code}")]
    Status { code: u32 },
    /// Response body did not decode.
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Network(_) | FetchError::Url(_) | FetchError::Join(_) => ErrorKind::Network,
            FetchError::Status { .. } => ErrorKind::NotFound,
            FetchError::Decode(_) => ErrorKind::Decode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_not_found() {
        let e = FetchError::Status { code: 404 };
        assert_eq!(e.kind(), ErrorKind::NotFound);
        assert_eq!(e.to_string(), "HTTP 404");
    }

    #[test]
    fn bad_json_is_decode() {
        let e: FetchError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert_eq!(e.kind(), ErrorKind::Decode);
    }

    #[test]
    fn bad_url_and_join_are_network() {
        let e: FetchError = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(e.kind(), ErrorKind::Network);
        assert_eq!(FetchError::Join("panicked".into()).kind(), ErrorKind::Network);
    }
}
