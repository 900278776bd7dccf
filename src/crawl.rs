//! Filesystem walk that feeds qualifying files into a [`DirectoryNode`].

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Component, Path};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::filter::ExtensionFilter;
use crate::tree::{DirectoryNode, SEPARATOR};

/// Walk options that are independent of the extension filter.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Whether to follow symbolic links during traversal.
    pub follow_symlinks: bool,
    /// Glob patterns, matched against root-relative paths, for entries to prune.
    pub ignore_patterns: GlobSet,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_patterns: GlobSet::empty(),
        }
    }
}

/// Build a GlobSet from user patterns. Invalid patterns are skipped and logged.
pub fn build_ignore_set(user_patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    let mut invalid = Vec::new();
    for pattern in user_patterns {
        match Glob::new(pattern) {
            Ok(g) => {
                builder.add(g);
            }
            Err(_) => {
                invalid.push(pattern.clone());
            }
        }
    }
    if !invalid.is_empty() {
        warn!(patterns = ?invalid, "invalid ignore pattern(s), skipped");
    }
    builder.build().unwrap_or_else(|e| {
        warn!(error = %e, "failed to build ignore set");
        GlobSet::empty()
    })
}

/// Abstraction over hierarchy construction so it can be swapped or mocked.
pub trait TreeCrawler {
    fn crawl(
        &self,
        root: &Path,
        filter: &ExtensionFilter,
        config: &CrawlConfig,
    ) -> Result<DirectoryNode>;
}

/// Default `TreeCrawler` backed by walkdir.
pub struct WalkdirCrawler;

impl TreeCrawler for WalkdirCrawler {
    fn crawl(
        &self,
        root: &Path,
        filter: &ExtensionFilter,
        config: &CrawlConfig,
    ) -> Result<DirectoryNode> {
        crawl(root, filter, config)
    }
}

/// Walk `root` once and build the hierarchy of every regular file the filter keeps.
///
/// Any walk failure aborts the crawl; no partial hierarchy is returned.
pub fn crawl(root: &Path, filter: &ExtensionFilter, config: &CrawlConfig) -> Result<DirectoryNode> {
    check_root(root)?;
    info!(root = %root.display(), extensions = ?filter.extensions(), "scanning");

    let ignore_patterns = config.ignore_patterns.clone();
    let prune_root = root.to_path_buf();
    let iter = WalkDir::new(root)
        .follow_links(config.follow_symlinks)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let rel = entry
                .path()
                .strip_prefix(&prune_root)
                .unwrap_or_else(|_| entry.path());
            !ignore_patterns.is_match(rel)
        });

    let mut hierarchy = DirectoryNode::root();
    let mut skipped = 0usize;
    for entry_result in iter {
        let entry = entry_result.map_err(|e| walk_error(root, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .map_err(|_| Error::invalid_root(root.display().to_string(), "entry escaped root"))?;
        // Lossy conversion would merge distinct names into one node.
        let Some(key) = relative_key(rel) else {
            warn!(path = %entry.path().display(), "skipping path that is not valid UTF-8");
            skipped += 1;
            continue;
        };
        if !filter.is_included(entry.path()) {
            skipped += 1;
            continue;
        }
        let size = entry
            .metadata()
            .map_err(|e| walk_error(root, e))?
            .len();
        hierarchy.insert(&key, size)?;
    }

    info!(
        root = %root.display(),
        files = hierarchy.file_count(),
        dirs = hierarchy.dir_count(),
        skipped,
        "scan complete"
    );
    Ok(hierarchy)
}

fn check_root(root: &Path) -> Result<()> {
    let display = root.display().to_string();
    let meta = std::fs::metadata(root).map_err(|e| Error::invalid_root(&display, e.to_string()))?;
    if !meta.is_dir() {
        return Err(Error::invalid_root(display, "attempting to scan single file"));
    }
    std::fs::read_dir(root).map_err(|e| Error::invalid_root(&display, e.to_string()))?;
    Ok(())
}

fn walk_error(root: &Path, err: walkdir::Error) -> Error {
    if err.depth() == 0 {
        let reason = match err.io_error() {
            Some(io_err) => io_err.to_string(),
            None => err.to_string(),
        };
        return Error::invalid_root(root.display().to_string(), reason);
    }
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    debug!(path = %path.display(), "walk failed below root");
    Error::Walk { path, source: err }
}

/// Join the normal components of a root-relative path with [`SEPARATOR`].
///
/// `None` when any component is not valid UTF-8.
fn relative_key(rel: &Path) -> Option<String> {
    let mut key = String::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            if !key.is_empty() {
                key.push(SEPARATOR);
            }
            key.push_str(part.to_str()?);
        }
    }
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn relative_key_uses_forward_slashes() {
        let rel: PathBuf = ["a", "b", "c.go"].iter().collect();
        assert_eq!(relative_key(&rel).as_deref(), Some("a/b/c.go"));
    }

    #[test]
    fn relative_key_of_plain_file() {
        assert_eq!(relative_key(Path::new("main.go")).as_deref(), Some("main.go"));
    }

    #[test]
    #[cfg(unix)]
    fn relative_key_rejects_non_utf8_components() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let rel = Path::new(OsStr::from_bytes(b"d\xff")).join("f0.go");
        assert_eq!(relative_key(&rel), None);
    }

    #[test]
    fn invalid_globs_are_skipped() {
        let set = build_ignore_set(&["[".to_string(), "*.log".to_string()]);
        assert!(set.is_match("debug.log"));
        assert!(!set.is_match("main.rs"));
    }

    #[test]
    fn default_config_ignores_nothing() {
        let cfg = CrawlConfig::default();
        assert!(!cfg.follow_symlinks);
        assert!(cfg.ignore_patterns.is_empty());
    }
}
