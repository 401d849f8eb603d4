//! HTTP GET over libcurl.
//!
//! Transfers are blocking; [`get`] moves them onto the blocking pool so the
//! async side only suspends at the network round-trip.

use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::HttpConfig;
use crate::error::FetchError;

/// Per-request transport settings derived from [`HttpConfig`].
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub user_agent: String,
}

impl HttpOptions {
    pub fn from_config(cfg: &HttpConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self::from_config(&HttpConfig::default())
    }
}

/// Status and body of a completed GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON. Non-2xx responses are an error regardless of body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        if !self.is_success() {
            return Err(FetchError::Status { code: self.status });
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Performs a GET and collects the whole body.
///
/// Follows redirects. Runs in the current thread; async callers use [`get`].
pub fn get_blocking(url: &str, opts: &HttpOptions) -> Result<HttpResponse, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;
    easy.useragent(&opts.user_agent)?;

    let mut list = curl::easy::List::new();
    list.append("Accept: application/json")?;
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!(url, status, bytes = body.len(), "GET finished");
    Ok(HttpResponse { status, body })
}

pub async fn get(url: String, opts: HttpOptions) -> Result<HttpResponse, FetchError> {
    tokio::task::spawn_blocking(move || get_blocking(&url, &opts))
        .await
        .map_err(|e| FetchError::Join(e.to_string()))?
}
