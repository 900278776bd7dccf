//! Writing snapshots to disk or stdout, and keeping the tool's own output
//! out of the crawl it describes.

use globset::escape;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Error, Result};
use crate::state::SharedState;

/// Write the current snapshot to `output`, or stdout when no file is given.
///
/// Files are replaced via a sibling temp file so readers never see half a snapshot.
pub fn write_snapshot(state: &SharedState, output: Option<&Path>, pretty: bool) -> Result<()> {
    let json = state.snapshot_json(pretty)?;
    match output {
        Some(path) => {
            let tmp = temp_sibling(path);
            std::fs::write(&tmp, format!("{json}\n")).map_err(|source| Error::Io {
                path: tmp.clone(),
                source,
            })?;
            std::fs::rename(&tmp, path).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
            info!(output = %path.display(), bytes = json.len(), "snapshot written");
        }
        None => {
            let stdout_err = |source: std::io::Error| Error::Io {
                path: PathBuf::from("<stdout>"),
                source,
            };
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").map_err(stdout_err)?;
            stdout.flush().map_err(stdout_err)?;
        }
    }
    Ok(())
}

/// `dirdata.json` -> `dirdata.json.tmp`, in the same directory.
pub fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "snapshot".into());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Absolute paths of the files a snapshot write touches, when they live under `root`.
///
/// `root` must already be absolute (the watcher reports paths joined onto it).
/// Returns an empty list when the output is elsewhere.
pub fn self_written_paths(root: &Path, output: &Path) -> Vec<PathBuf> {
    let Some(target) = absolute_target(output) else {
        return Vec::new();
    };
    if !target.starts_with(root) {
        return Vec::new();
    }
    let tmp = temp_sibling(&target);
    vec![target, tmp]
}

/// Root-relative, glob-escaped patterns for `paths`, suitable for the crawl ignore set.
pub fn relative_globs(root: &Path, paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|p| p.strip_prefix(root).ok())
        .map(|rel| {
            let parts: Vec<String> = rel
                .components()
                .map(|c| escape(&c.as_os_str().to_string_lossy()))
                .collect();
            parts.join("/")
        })
        .collect()
}

/// Resolve `output` against the working directory with its parent canonicalized,
/// so it compares equal to paths under a canonical root.
fn absolute_target(output: &Path) -> Option<PathBuf> {
    let absolute = if output.is_absolute() {
        output.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(output)
    };
    let name = absolute.file_name()?.to_os_string();
    let parent = absolute.parent()?.canonicalize().ok()?;
    Some(parent.join(name))
}
