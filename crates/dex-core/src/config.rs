use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Nesting limit used when `max_render_depth` is not set.
pub const DEFAULT_MAX_RENDER_DEPTH: usize = 64;

/// Transport parameters (optional `[http]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            user_agent: concat!("dex/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// How far the fetch cursor moves after a successful page.
///
/// `page_size` keeps compatibility with catalogs that always return full pages;
/// a short non-final page then skips the remainder of its window.
/// `returned` advances by the number of items the page actually carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorAdvance {
    #[default]
    PageSize,
    Returned,
}

/// Global configuration loaded from `~/.config/dex/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DexConfig {
    /// Paginated list endpoint; `limit` and `offset` are appended as query parameters.
    pub list_endpoint: String,
    /// Detail endpoint; the item identifier is appended as the last path segment.
    pub detail_endpoint: String,
    /// Asset-host template for item sprites; `{id}` is replaced by the identifier.
    pub sprite_url_template: String,
    /// Items requested per page.
    pub page_size: usize,
    /// Cursor advance policy: "page_size" (default) or "returned".
    #[serde(default)]
    pub cursor_advance: Option<CursorAdvance>,
    /// Maximum container nesting rendered in the detail view (None = 64).
    #[serde(default)]
    pub max_render_depth: Option<usize>,
    /// Optional transport settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            list_endpoint: "https://pokeapi.co/api/v2/pokemon".to_string(),
            detail_endpoint: "https://pokeapi.co/api/v2/pokemon".to_string(),
            sprite_url_template:
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png"
                    .to_string(),
            page_size: 20,
            cursor_advance: None,
            max_render_depth: None,
            http: None,
        }
    }
}

impl DexConfig {
    pub fn cursor_advance(&self) -> CursorAdvance {
        self.cursor_advance.unwrap_or_default()
    }

    pub fn render_depth_limit(&self) -> usize {
        self.max_render_depth.unwrap_or(DEFAULT_MAX_RENDER_DEPTH)
    }

    pub fn http(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dex")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DexConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<DexConfig> {
    if !path.exists() {
        let default_cfg = DexConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: DexConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
