pub mod config;
pub mod logging;

pub mod catalog;
pub mod detail;
pub mod error;
pub mod feed;
pub mod http;
pub mod render;
