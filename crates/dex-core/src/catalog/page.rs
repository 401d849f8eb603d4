//! List endpoint response shape and request URL.

use serde::Deserialize;

use super::item::CatalogItem;

/// One page from the list endpoint. Only `results` drives merging; the rest is
/// informational.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogPage {
    pub results: Vec<CatalogItem>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Builds `<base>?limit=<limit>&offset=<offset>`, keeping any query already on `base`.
pub fn list_url(base: &str, limit: usize, offset: u64) -> Result<String, url::ParseError> {
    let mut url = url::Url::parse(base)?;
    url.query_pairs_mut()
        .append_pair("limit", &limit.to_string())
        .append_pair("offset", &offset.to_string());
    Ok(url.into())
}
