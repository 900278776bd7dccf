//! The published result of the last completed crawl.

use std::path::Path;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

use crate::crawl::{CrawlConfig, TreeCrawler};
use crate::error::Result;
use crate::filter::ExtensionFilter;
use crate::tree::{self, DirectoryNode, FileEntry};

/// Root shown before any crawl has run.
pub const UNSET_ROOT: &str = "(No path set)";
/// Placeholder leaf substituted into an empty snapshot.
pub const NO_FILES_FOUND: &str = "(No source code files found)";
pub const DEFAULT_TITLE: &str = "🔍 Source Code Visualizer";

/// One completed crawl. Immutable once published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlState {
    pub hierarchy: DirectoryNode,
    pub root: String,
    pub title: String,
}

impl CrawlState {
    pub fn initial() -> Self {
        let mut hierarchy = DirectoryNode::root();
        hierarchy.push_file(FileEntry::placeholder(UNSET_ROOT));
        Self {
            hierarchy,
            root: UNSET_ROOT.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// What to crawl: a root directory and the extensions to keep.
#[derive(Debug, Clone)]
pub struct CrawlRequest {
    pub root: String,
    pub extensions: ExtensionFilter,
}

impl CrawlRequest {
    /// Build a request from raw form-style input (`wanted_exts` is space-separated).
    pub fn parse(root: impl Into<String>, wanted_exts: &str) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            extensions: ExtensionFilter::parse(wanted_exts)?,
        })
    }
}

/// Result of a crawl request, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlOutcome {
    pub title: String,
    /// Empty on success, a user-facing explanation on failure.
    pub status: String,
}

impl CrawlOutcome {
    pub fn is_success(&self) -> bool {
        self.status.is_empty()
    }
}

/// Process-wide holder of the latest [`CrawlState`].
///
/// Readers clone the inner `Arc`; a finished crawl replaces it in one swap, so
/// a reader sees either the previous state or the new one, never a mix.
#[derive(Debug)]
pub struct SharedState {
    current: RwLock<Arc<CrawlState>>,
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new(CrawlState::initial())
    }
}

impl SharedState {
    pub fn new(state: CrawlState) -> Self {
        Self {
            current: RwLock::new(Arc::new(state)),
        }
    }

    pub fn load(&self) -> Arc<CrawlState> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    pub fn publish(&self, state: CrawlState) {
        let next = Arc::new(state);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = next;
    }

    /// Run a crawl and publish it if it completes.
    ///
    /// On failure the published state is left as it was.
    pub fn crawl<C: TreeCrawler + ?Sized>(
        &self,
        request: &CrawlRequest,
        crawler: &C,
        config: &CrawlConfig,
    ) -> CrawlOutcome {
        match crawler.crawl(Path::new(&request.root), &request.extensions, config) {
            Ok(hierarchy) => {
                let title = format!("🔍 Visualizing {}", request.root);
                self.publish(CrawlState {
                    hierarchy,
                    root: request.root.clone(),
                    title: title.clone(),
                });
                info!(root = %request.root, "published crawl");
                CrawlOutcome {
                    title,
                    status: String::new(),
                }
            }
            Err(e) => {
                warn!(root = %request.root, error = %e, "crawl failed");
                CrawlOutcome {
                    title: format!("❌ Failed Visualizing {}", request.root),
                    status: format!(
                        "An error has occurred. Ensure you entered a valid directory path. Error: {e}"
                    ),
                }
            }
        }
    }

    /// JSON text of the current snapshot.
    pub fn snapshot_json(&self, pretty: bool) -> Result<String> {
        tree::to_json(&snapshot(&self.load()), pretty)
    }
}

/// Copy of the state's hierarchy prepared for rendering.
///
/// The root takes the base name of the crawled path, and an empty root gets a
/// single placeholder file so the renderer always has a leaf.
pub fn snapshot(state: &CrawlState) -> DirectoryNode {
    let mut root = state.hierarchy.clone();
    root.set_name(root_display_name(&state.root));
    if root.is_empty() {
        root.push_file(FileEntry::placeholder(NO_FILES_FOUND));
    }
    root
}

fn root_display_name(root: &str) -> String {
    Path::new(root)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.to_string())
}
