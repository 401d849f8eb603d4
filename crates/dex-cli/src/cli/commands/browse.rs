//! `dex browse` – load catalog pages through the feed and list them.

use anyhow::{Context, Result};
use dex_core::catalog::{
    sprite_url, CatalogItem, FilterQuery, HttpPageSource, PageSource, Paginator,
};
use dex_core::config::DexConfig;
use dex_core::feed::{self, FeedSignal, FeedStats};
use tokio::sync::mpsc;

/// Signals buffered ahead of the feed; the sender waits when it is full.
const SIGNAL_QUEUE: usize = 8;

#[derive(Debug, Clone, Copy)]
pub struct BrowseArgs<'a> {
    pub pages: usize,
    pub filter: Option<&'a str>,
    pub sprites: bool,
}

/// One table row: `ID NAME [SPRITE]`. Items without a usable id show `-` and no sprite.
fn format_row(item: &CatalogItem, sprite_template: Option<&str>) -> String {
    let id = item.id().unwrap_or("-");
    let mut row = format!("{:<6} {:<24}", id, item.name);
    if let (Some(template), Some(id)) = (sprite_template, item.id()) {
        row.push(' ');
        row.push_str(&sprite_url(template, id));
    }
    row.trim_end().to_string()
}

/// Feeds one `Mount` and `pages - 1` load-more signals while the feed consumes them.
async fn load_pages<S: PageSource>(paginator: &Paginator<S>, pages: usize) -> Result<FeedStats> {
    let (tx, rx) = mpsc::channel(SIGNAL_QUEUE);
    let send = async move {
        tx.send(FeedSignal::Mount).await?;
        for _ in 1..pages.max(1) {
            tx.send(FeedSignal::SentinelVisible).await?;
        }
        Ok::<_, mpsc::error::SendError<FeedSignal>>(())
    };
    let (sent, stats) = tokio::join!(send, feed::run_feed(paginator, rx, None));
    sent.context("queue feed signals")?;
    Ok(stats)
}

pub async fn run_browse(cfg: &DexConfig, args: BrowseArgs<'_>) -> Result<()> {
    let paginator = Paginator::from_config(HttpPageSource::from_config(cfg), cfg);
    let stats = load_pages(&paginator, args.pages).await?;

    let query = FilterQuery::new(args.filter.unwrap_or(""));
    let visible = paginator.filter_by_query(&query);
    let template = args.sprites.then_some(cfg.sprite_url_template.as_str());

    if visible.is_empty() {
        println!("No items.");
    } else {
        let header = format!("{:<6} {:<24}", "ID", "NAME");
        if args.sprites {
            println!("{} SPRITE", header);
        } else {
            println!("{}", header.trim_end());
        }
        for item in &visible {
            println!("{}", format_row(item, template));
        }
    }
    println!(
        "Showing {} of {} loaded (next offset {}).",
        visible.len(),
        paginator.len(),
        paginator.cursor()
    );
    if stats.failed > 0 {
        eprintln!(
            "{} page request(s) failed; run again to retry.",
            stats.failed
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dex_core::catalog::CatalogPage;
    use dex_core::config::CursorAdvance;
    use dex_core::error::FetchError;

    struct OneItemPerPage;

    impl PageSource for OneItemPerPage {
        async fn fetch_page(&self, offset: u64, _limit: usize) -> Result<CatalogPage, FetchError> {
            Ok(CatalogPage {
                results: vec![CatalogItem::new(
                    format!("mon-{offset}"),
                    format!("https://x/pokemon/{offset}/"),
                )],
                next: None,
                count: None,
            })
        }
    }

    #[tokio::test]
    async fn more_pages_than_queue_slots_all_load() {
        let paginator = Paginator::new(OneItemPerPage, 1, CursorAdvance::PageSize);
        let pages = SIGNAL_QUEUE * 4 + 3;
        let stats = load_pages(&paginator, pages).await.unwrap();
        assert_eq!(stats.signals, pages);
        assert_eq!(stats.merged, pages);
        assert_eq!(paginator.len(), pages);
    }

    #[tokio::test]
    async fn zero_pages_still_mounts() {
        let paginator = Paginator::new(OneItemPerPage, 1, CursorAdvance::PageSize);
        let stats = load_pages(&paginator, 0).await.unwrap();
        assert_eq!(stats.merged, 1);
    }

    #[test]
    fn row_with_id() {
        let item = CatalogItem::new("pikachu", "https://pokeapi.co/api/v2/pokemon/25/");
        assert_eq!(format_row(&item, None), format!("{:<6} pikachu", "25"));
    }

    #[test]
    fn row_with_sprite() {
        let item = CatalogItem::new("pikachu", "https://pokeapi.co/api/v2/pokemon/25/");
        let row = format_row(&item, Some("https://img/{id}.png"));
        assert!(row.starts_with("25"));
        assert!(row.ends_with(" https://img/25.png"));
    }

    #[test]
    fn row_without_usable_id_has_no_sprite() {
        let item = CatalogItem::new("missingno", "missingno");
        let row = format_row(&item, Some("https://img/{id}.png"));
        assert!(row.starts_with('-'));
        assert!(!row.contains("https://img"));
    }
}
