//! Page sources: where the paginator gets its pages from.

use std::future::Future;

use crate::config::DexConfig;
use crate::error::FetchError;
use crate::http::{self, HttpOptions};

use super::page::{list_url, CatalogPage};

/// Anything that can return one page of the catalog at an offset.
pub trait PageSource {
    fn fetch_page(
        &self,
        offset: u64,
        limit: usize,
    ) -> impl Future<Output = Result<CatalogPage, FetchError>> + Send;
}

/// List endpoint over HTTP: `GET <endpoint>?limit=..&offset=..`.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    endpoint: String,
    http: HttpOptions,
}

impl HttpPageSource {
    pub fn new(endpoint: impl Into<String>, http: HttpOptions) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    pub fn from_config(cfg: &DexConfig) -> Self {
        Self::new(cfg.list_endpoint.clone(), HttpOptions::from_config(&cfg.http()))
    }
}

impl PageSource for HttpPageSource {
    async fn fetch_page(&self, offset: u64, limit: usize) -> Result<CatalogPage, FetchError> {
        let url = list_url(&self.endpoint, limit, offset)?;
        let response = http::get(url, self.http.clone()).await?;
        response.json()
    }
}
