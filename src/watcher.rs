//! Change notifications for watch mode, debounced and delivered over a channel.

use crossbeam_channel::{Receiver, Sender};
use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_full::{new_debouncer, DebounceEventResult, Debouncer, RecommendedCache};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// What the crawl loop learns from the filesystem.
#[derive(Debug)]
pub enum WatchEvent {
    /// Something below the root changed; carries the number of touched paths.
    Changed(usize),
    /// The crawl root itself no longer exists.
    RootDeleted,
    Error(String),
}

/// Keeps the underlying debouncer alive; dropping it stops notifications.
pub type WatchHandle = Debouncer<RecommendedWatcher, RecommendedCache>;

/// Watch `root` recursively and forward debounced changes.
///
/// Changes that touch only paths in `ignored` (the tool's own output) are dropped.
pub fn start_watcher(
    root: &Path,
    debounce_ms: u64,
    ignored: &[PathBuf],
) -> anyhow::Result<(WatchHandle, Receiver<WatchEvent>)> {
    anyhow::ensure!(root.is_dir(), "{}: Not a directory", root.display());

    let (tx, rx): (Sender<WatchEvent>, Receiver<WatchEvent>) = crossbeam_channel::unbounded();
    let root_path: PathBuf = root.to_path_buf();
    let ignored: HashSet<PathBuf> = ignored.iter().cloned().collect();

    let mut debouncer = new_debouncer(
        Duration::from_millis(debounce_ms),
        None,
        move |result: DebounceEventResult| match result {
            Ok(events) => {
                if std::fs::metadata(&root_path).is_err() {
                    let _ = tx.send(WatchEvent::RootDeleted);
                    return;
                }
                let touched = relevant_paths(events.iter().flat_map(|e| e.paths.iter()), &ignored);
                if touched > 0 {
                    debug!(touched, "filesystem change");
                    let _ = tx.send(WatchEvent::Changed(touched));
                }
            }
            Err(errors) => {
                for error in errors {
                    let _ = tx.send(WatchEvent::Error(error.to_string()));
                }
            }
        },
    )?;

    debouncer.watch(root, RecursiveMode::Recursive)?;

    Ok((debouncer, rx))
}

/// Number of paths not in `ignored`.
fn relevant_paths<'a>(paths: impl Iterator<Item = &'a PathBuf>, ignored: &HashSet<PathBuf>) -> usize {
    paths.filter(|p| !ignored.contains(*p)).count()
}
