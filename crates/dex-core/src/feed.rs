//! Feed scheduler: turns viewport signals into paginator fetches.
//!
//! The signal source (a terminal prompt, a scroll observer) only sends
//! [`FeedSignal`]s; it never calls the paginator itself.

use tokio::sync::mpsc;

use crate::catalog::{FetchOutcome, PageSource, Paginator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSignal {
    /// Session start; always fetches.
    Mount,
    /// The end-of-list sentinel came into view.
    SentinelVisible,
}

/// Counters for one run of [`run_feed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    pub signals: usize,
    pub merged: usize,
    pub failed: usize,
    /// Signals ignored because a fetch was already in flight.
    pub ignored: usize,
}

/// Consumes `signals` until the sender side closes.
///
/// `Mount` always calls `fetch_next`. `SentinelVisible` does so whenever the
/// paginator is idle. Each fetch result is forwarded on `outcomes` when given.
pub async fn run_feed<S: PageSource>(
    paginator: &Paginator<S>,
    mut signals: mpsc::Receiver<FeedSignal>,
    outcomes: Option<&mpsc::Sender<FetchOutcome>>,
) -> FeedStats {
    let mut stats = FeedStats::default();
    while let Some(signal) = signals.recv().await {
        stats.signals += 1;
        if signal == FeedSignal::SentinelVisible && paginator.is_busy() {
            tracing::trace!(?signal, "feed signal ignored");
            stats.ignored += 1;
            continue;
        }

        let outcome = paginator.fetch_next().await;
        match &outcome {
            FetchOutcome::Merged { .. } => stats.merged += 1,
            FetchOutcome::Failed(_) => stats.failed += 1,
            FetchOutcome::Skipped => stats.ignored += 1,
        }
        if let Some(tx) = outcomes {
            if tx.send(outcome).await.is_err() {
                tracing::debug!("feed outcome receiver dropped");
            }
        }
    }
    tracing::debug!(?stats, "feed closed");
    stats
}
