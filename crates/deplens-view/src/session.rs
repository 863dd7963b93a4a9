//! Serialized refresh sessions over a message-passing channel.
//!
//! A [`ViewSession`] owns a background worker that turns refresh signals
//! into immutable [`ResolvedViews`] results: load the report, build the
//! graph, derive both views, emit the outcome. One worker serializes all
//! refreshes, so overlapping signals never race; each outcome carries a
//! monotonically increasing generation so a consumer can discard results
//! that were overtaken by a later refresh. The presentation side keeps all
//! of its mutable state to itself and only ever reads completed outcomes
//! from the receiver.

use tokio::sync::mpsc;

use deplens_core::node::DependencyNode;
use deplens_core::source::DependencySource;
use deplens_util::errors::{DeplensError, DeplensResult};

use crate::builder::build_graph;
use crate::views::ResolvedViews;

/// The completed result of one refresh, stamped for staleness checks.
#[derive(Debug)]
pub struct RefreshOutcome {
    /// Monotonically increasing per session, starting at 1.
    pub generation: u64,
    /// Derived views, or the load/build failure that prevented them. A
    /// failed refresh does not stop the worker.
    pub result: DeplensResult<ResolvedViews>,
}

impl RefreshOutcome {
    /// Whether a consumer that has already acted on generation `newest`
    /// should drop this outcome unused — it was overtaken by a later
    /// refresh.
    pub fn is_stale(&self, newest: u64) -> bool {
        self.generation < newest
    }
}

/// Handle to a background refresh worker.
///
/// Dropping the session (or the outcome receiver) shuts the worker down.
pub struct ViewSession {
    signal: mpsc::Sender<()>,
}

impl ViewSession {
    /// Start a worker owning `source` and return the session handle plus
    /// the receiver its outcomes arrive on.
    pub fn spawn<S>(source: S) -> (Self, mpsc::Receiver<RefreshOutcome>)
    where
        S: DependencySource + 'static,
    {
        let (signal_tx, mut signal_rx) = mpsc::channel::<()>(8);
        let (outcome_tx, outcome_rx) = mpsc::channel::<RefreshOutcome>(8);

        tokio::spawn(async move {
            let mut generation: u64 = 0;
            while signal_rx.recv().await.is_some() {
                // Signals that piled up while the last refresh ran collapse
                // into this one.
                while signal_rx.try_recv().is_ok() {}

                generation += 1;
                tracing::debug!(generation, source = %source.describe(), "refreshing views");
                let result = refresh_once(&source);
                if outcome_tx
                    .send(RefreshOutcome { generation, result })
                    .await
                    .is_err()
                {
                    break;
                }
            }
        });

        (Self { signal: signal_tx }, outcome_rx)
    }

    /// Request a refresh. The outcome arrives on the session's receiver.
    pub async fn refresh(&self) -> DeplensResult<()> {
        self.signal.send(()).await.map_err(|_| {
            DeplensError::Generic {
                message: "view session worker has shut down".to_string(),
            }
            .into()
        })
    }
}

/// One full load-build-derive pass. Runs to completion once started.
fn refresh_once(source: &dyn DependencySource) -> DeplensResult<ResolvedViews> {
    let report = source.load()?;
    let root: DependencyNode = build_graph(&report)?;
    Ok(ResolvedViews::derive(&root))
}
