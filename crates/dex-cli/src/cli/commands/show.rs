//! `dex show <id>` – fetch one record and print it.

use anyhow::Result;
use dex_core::config::DexConfig;
use dex_core::detail::{DetailFailure, DetailState, DetailView, HttpDetailSource};
use dex_core::render;

pub async fn run_show(cfg: &DexConfig, id: &str, raw_json: bool) -> Result<()> {
    let source = HttpDetailSource::from_config(cfg);
    let mut view = DetailView::new(cfg.render_depth_limit());

    match view.navigate(&source, id).await {
        DetailState::Loaded { record, tree, .. } => {
            if raw_json {
                println!("{}", serde_json::to_string_pretty(record)?);
            } else {
                print!("{}", render::outline(tree));
            }
        }
        DetailState::NotFound { id, cause } => {
            println!("{id}: not found.");
            if let DetailFailure::TooDeep { limit } = cause {
                eprintln!("record nests deeper than max_render_depth = {limit}");
            }
        }
        other => anyhow::bail!("detail view stopped in unexpected state: {:?}", other),
    }
    Ok(())
}
