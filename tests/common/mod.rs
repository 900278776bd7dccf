#![allow(dead_code)]

use srcviz::crawl::CrawlConfig;
use srcviz::tree::{SerializedChild, SerializedDir};
use std::fs;
use tempfile::TempDir;

/// Default CrawlConfig: no ignores, symlinks not followed.
pub fn default_crawl_config() -> CrawlConfig {
    CrawlConfig::default()
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create files whose
/// content is the path itself (so sizes are predictable).
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, p.as_bytes()).unwrap();
        }
    }
    tmp
}

/// Undo the name escaping applied by the serializer.
pub fn unescape_html(input: &str) -> String {
    input
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#34;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

pub fn unescape_dir_name(input: &str) -> String {
    unescape_html(input).replace("\\\\", "\\")
}

/// Flatten a serialized tree back into `(path, size)` pairs, skipping the root name.
pub fn flatten(root: &SerializedDir) -> Vec<(String, u64)> {
    let mut out = Vec::new();
    collect(root, "", &mut out);
    out
}

fn collect(dir: &SerializedDir, prefix: &str, out: &mut Vec<(String, u64)>) {
    for child in dir.children.iter().flatten() {
        match child {
            SerializedChild::File(f) => {
                out.push((format!("{prefix}{}", unescape_html(&f.name)), f.size));
            }
            SerializedChild::Dir(d) => {
                let next = format!("{prefix}{}/", unescape_dir_name(&d.name));
                collect(d, &next, out);
            }
        }
    }
}
