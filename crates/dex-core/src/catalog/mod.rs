//! Paginated catalog: items, pages, the deduplicating session collection and
//! the paginator that grows it.

mod collection;
mod item;
mod page;
mod paginator;
mod source;

pub use collection::{FilterQuery, SessionCollection};
pub use item::{derive_id, sprite_url, CatalogItem};
pub use page::{list_url, CatalogPage};
pub use paginator::{FetchOutcome, Paginator};
pub use source::{HttpPageSource, PageSource};
