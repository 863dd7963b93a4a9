//! Watch command: re-derive views whenever the report file changes.
//!
//! Uses `notify` on the report file, with events debounced so rapid saves
//! (e.g. from an IDE) trigger a single refresh. Refreshes run through a
//! [`ViewSession`], which serializes them on a background worker and hands
//! back immutable results; all printing happens here, on this side of the
//! channel. Outcomes with a generation older than the newest one seen are
//! stale and dropped unprinted.

use std::path::Path;
use std::time::Duration;

use miette::Result;
use notify::{EventKind, RecursiveMode, Watcher};

use deplens_gradle::source::FileSource;
use deplens_ops::render;
use deplens_util::errors::DeplensError;
use deplens_util::progress::{status, status_warn};
use deplens_view::session::ViewSession;

const DEBOUNCE_MS: u64 = 300;

pub async fn exec(report: &Path, view: &str, verbose: bool) -> Result<()> {
    if view != "tree" && view != "sorted" {
        return Err(DeplensError::Generic {
            message: format!("unknown view '{view}' (expected tree or sorted)"),
        }
        .into());
    }

    let (session, mut outcomes) = ViewSession::spawn(FileSource::new(report));

    let (tx, mut signals) = tokio::sync::mpsc::channel::<()>(8);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            if matches!(
                event.kind,
                EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
            ) {
                let _ = tx.blocking_send(());
            }
        }
    })
    .map_err(|e| DeplensError::Generic {
        message: format!("Failed to create file watcher: {e}"),
    })?;

    watcher
        .watch(report, RecursiveMode::NonRecursive)
        .map_err(|e| DeplensError::Generic {
            message: format!("Failed to watch {}: {e}", report.display()),
        })?;

    status("Watching", &format!("{} (view: {view})", report.display()));

    // Initial derivation before any change arrives.
    session.refresh().await?;
    let mut newest = 0u64;

    loop {
        tokio::select! {
            signal = signals.recv() => {
                if signal.is_none() {
                    break;
                }
                // Debounce: drain additional events within the window.
                tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS)).await;
                while signals.try_recv().is_ok() {}
                if verbose {
                    eprintln!("  change detected: {}", report.display());
                }
                session.refresh().await?;
            }
            outcome = outcomes.recv() => {
                let Some(outcome) = outcome else { break };
                if outcome.is_stale(newest) {
                    continue;
                }
                newest = outcome.generation;
                match outcome.result {
                    Ok(views) => {
                        let output = if view == "tree" {
                            render::render_tree(&views.hierarchical, None)
                        } else {
                            render::render_sorted(&views.sorted)
                        };
                        print!("{output}");
                        status("Watching", "for changes...");
                    }
                    Err(e) => {
                        status_warn("Error", &format!("{e}"));
                        status("Watching", "for changes...");
                    }
                }
            }
        }
    }

    Ok(())
}
