//! Watch-mode loop: re-crawl on filesystem changes until interrupted.

use crossbeam_channel::{select, Receiver};
use tracing::{info, warn};

use crate::crawl::{CrawlConfig, TreeCrawler};
use crate::state::{CrawlOutcome, CrawlRequest, SharedState};
use crate::watcher::WatchEvent;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Interrupted,
    RootDeleted,
    WatcherClosed,
}

/// Re-run `request` after every change event and hand each outcome to `emit`.
///
/// Each pass is a complete crawl published in one swap. Returns when `stop`
/// fires, the root disappears, or the watcher channel closes.
pub fn run<C, F>(
    state: &SharedState,
    request: &CrawlRequest,
    crawler: &C,
    config: &CrawlConfig,
    fs_rx: &Receiver<WatchEvent>,
    stop: &Receiver<()>,
    mut emit: F,
) -> Exit
where
    C: TreeCrawler + ?Sized,
    F: FnMut(&SharedState, &CrawlOutcome),
{
    loop {
        select! {
            recv(fs_rx) -> msg => {
                match msg {
                    Ok(WatchEvent::Changed(touched)) => {
                        info!(touched, root = %request.root, "change detected, re-scanning");
                        let outcome = state.crawl(request, crawler, config);
                        emit(state, &outcome);
                    }
                    Ok(WatchEvent::RootDeleted) => {
                        warn!(root = %request.root, "root directory deleted");
                        return Exit::RootDeleted;
                    }
                    Ok(WatchEvent::Error(e)) => {
                        warn!(error = %e, "watcher error");
                    }
                    Err(_) => return Exit::WatcherClosed,
                }
            }
            recv(stop) -> _ => {
                return Exit::Interrupted;
            }
        }
    }
}
