//! `dex config` – show where the config lives and what it says.

use anyhow::Result;
use dex_core::config::{self, DexConfig};

pub fn run_config(cfg: &DexConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
