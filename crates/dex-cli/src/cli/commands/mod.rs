//! CLI command handlers, one per file.

mod browse;
mod config;
mod render;
mod show;

pub use browse::{run_browse, BrowseArgs};
pub use config::run_config;
pub use render::run_render;
pub use show::run_show;
