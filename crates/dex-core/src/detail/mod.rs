//! Detail view state machine: `Idle → Loading → Loaded | NotFound`.
//!
//! Every navigation takes a [`Ticket`]. Only the completion carrying the most
//! recent ticket is applied; older completions are dropped so a slow stale
//! response cannot overwrite a newer record.

mod source;

use serde_json::Value;

use crate::error::{ErrorKind, FetchError};
use crate::render::{render_bounded, DisplayNode, RenderError};

pub use source::{detail_url, DetailSource, HttpDetailSource};

/// Identifies one navigation. Later navigations get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Why a detail view ended in [`DetailState::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailFailure {
    /// Fetch failed; see [`ErrorKind`] for network / decode / status.
    Fetch { kind: ErrorKind, message: String },
    /// Record nests deeper than the configured render limit.
    TooDeep { limit: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Idle,
    Loading {
        id: String,
        ticket: Ticket,
    },
    Loaded {
        id: String,
        record: Value,
        tree: DisplayNode,
    },
    NotFound {
        id: String,
        cause: DetailFailure,
    },
}

#[derive(Debug)]
pub struct DetailView {
    state: DetailState,
    issued: u64,
    max_depth: usize,
}

impl DetailView {
    pub fn new(max_depth: usize) -> Self {
        Self {
            state: DetailState::Idle,
            issued: 0,
            max_depth,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn record(&self) -> Option<&Value> {
        match &self.state {
            DetailState::Loaded { record, .. } => Some(record),
            _ => None,
        }
    }

    pub fn tree(&self) -> Option<&DisplayNode> {
        match &self.state {
            DetailState::Loaded { tree, .. } => Some(tree),
            _ => None,
        }
    }

    /// Enters `Loading` for `id` and returns the ticket its completion must carry.
    /// The previous record, if any, is discarded.
    pub fn begin(&mut self, id: &str) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        tracing::debug!(id, ticket = ticket.0, "detail loading");
        self.state = DetailState::Loading {
            id: id.to_string(),
            ticket,
        };
        ticket
    }

    /// Applies a fetch result. Returns false (and changes nothing) when `ticket`
    /// is not the one currently loading.
    pub fn complete(&mut self, ticket: Ticket, result: Result<Value, FetchError>) -> bool {
        let id = match &self.state {
            DetailState::Loading { id, ticket: current } if *current == ticket => id.clone(),
            _ => {
                tracing::debug!(ticket = ticket.0, "discarding stale detail response");
                return false;
            }
        };

        self.state = match result {
            Ok(record) => match render_bounded(&record, self.max_depth) {
                Ok(tree) => DetailState::Loaded { id, record, tree },
                Err(RenderError::DepthExceeded { limit }) => {
                    tracing::warn!(id, limit, "detail record too deep to render");
                    DetailState::NotFound {
                        id,
                        cause: DetailFailure::TooDeep { limit },
                    }
                }
            },
            Err(e) => {
                tracing::warn!(id, kind = ?e.kind(), "detail fetch failed: {}", e);
                DetailState::NotFound {
                    id,
                    cause: DetailFailure::Fetch {
                        kind: e.kind(),
                        message: e.to_string(),
                    },
                }
            }
        };
        true
    }

    /// Runs one navigation to completion: begin, fetch, complete.
    pub async fn navigate<D: DetailSource>(&mut self, source: &D, id: &str) -> &DetailState {
        let ticket = self.begin(id);
        let result = source.fetch_detail(id).await;
        self.complete(ticket, result);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FixedSource(fn(&str) -> Result<Value, FetchError>);

    impl DetailSource for FixedSource {
        async fn fetch_detail(&self, id: &str) -> Result<Value, FetchError> {
            (self.0)(id)
        }
    }

    #[test]
    fn starts_idle() {
        let view = DetailView::new(64);
        assert_eq!(view.state(), &DetailState::Idle);
        assert!(view.record().is_none());
    }

    #[test]
    fn success_loads_and_renders() {
        let mut view = DetailView::new(64);
        let t = view.begin("25");
        assert!(matches!(view.state(), DetailState::Loading { id, .. } if id == "25"));
        assert!(view.complete(t, Ok(json!({"name": "pikachu"}))));
        assert_eq!(view.record(), Some(&json!({"name": "pikachu"})));
        assert!(matches!(view.tree(), Some(DisplayNode::Record(_))));
    }

    #[test]
    fn status_error_is_not_found() {
        let mut view = DetailView::new(64);
        let t = view.begin("99999");
        view.complete(t, Err(FetchError::Status { code: 404 }));
        match view.state() {
            DetailState::NotFound { id, cause } => {
                assert_eq!(id, "99999");
                assert!(matches!(
                    cause,
                    DetailFailure::Fetch {
                        kind: ErrorKind::NotFound,
                        ..
                    }
                ));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(view.record().is_none());
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut view = DetailView::new(64);
        let old = view.begin("1");
        let new = view.begin("2");
        assert!(old < new);

        assert!(!view.complete(old, Ok(json!({"name": "bulbasaur"}))));
        assert!(matches!(view.state(), DetailState::Loading { id, .. } if id == "2"));

        assert!(view.complete(new, Ok(json!({"name": "ivysaur"}))));
        assert_eq!(view.record(), Some(&json!({"name": "ivysaur"})));

        // A late answer for an already-completed ticket changes nothing.
        assert!(!view.complete(new, Err(FetchError::Status { code: 500 })));
        assert!(view.record().is_some());
    }

    #[test]
    fn too_deep_record_is_not_found() {
        let mut view = DetailView::new(1);
        let t = view.begin("7");
        view.complete(t, Ok(json!({"a": {"b": 1}})));
        assert!(matches!(
            view.state(),
            DetailState::NotFound {
                cause: DetailFailure::TooDeep { limit: 1 },
                ..
            }
        ));
    }

    #[tokio::test]
    async fn navigate_runs_to_completion() {
        let mut view = DetailView::new(64);
        let source = FixedSource(|id| Ok(json!({ "id": id, "cries": {"latest": "https://x/1.ogg"} })));
        let state = view.navigate(&source, "1").await;
        assert!(matches!(state, DetailState::Loaded { id, .. } if id == "1"));

        let failing = FixedSource(|_| Err(FetchError::Status { code: 404 }));
        let state = view.navigate(&failing, "nope").await;
        assert!(matches!(state, DetailState::NotFound { .. }));
    }
}
