//! `dex render <path>` – render a local JSON file.

use anyhow::{Context, Result};
use dex_core::config::DexConfig;
use dex_core::render;
use std::fs;
use std::path::Path;

pub fn run_render(cfg: &DexConfig, path: &Path) -> Result<()> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&data).with_context(|| format!("parse JSON: {}", path.display()))?;
    let tree = render::render_bounded(&value, cfg.render_depth_limit())?;
    print!("{}", render::outline(&tree));
    Ok(())
}
