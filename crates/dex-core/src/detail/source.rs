//! Detail sources: fetch one arbitrary JSON record by identifier.

use serde_json::Value;
use std::future::Future;

use crate::config::DexConfig;
use crate::error::FetchError;
use crate::http::{self, HttpOptions};

pub trait DetailSource {
    fn fetch_detail(&self, id: &str) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// `<endpoint>/<id>`; a trailing slash on the endpoint is not doubled.
pub fn detail_url(endpoint: &str, id: &str) -> String {
    format!("{}/{}", endpoint.trim_end_matches('/'), id)
}

/// Detail endpoint over HTTP. Any non-2xx status is an error.
#[derive(Debug, Clone)]
pub struct HttpDetailSource {
    endpoint: String,
    http: HttpOptions,
}

impl HttpDetailSource {
    pub fn new(endpoint: impl Into<String>, http: HttpOptions) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    pub fn from_config(cfg: &DexConfig) -> Self {
        Self::new(cfg.detail_endpoint.clone(), HttpOptions::from_config(&cfg.http()))
    }
}

impl DetailSource for HttpDetailSource {
    async fn fetch_detail(&self, id: &str) -> Result<Value, FetchError> {
        let response = http::get(detail_url(&self.endpoint, id), self.http.clone()).await?;
        response.json()
    }
}
