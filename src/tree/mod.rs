//! In-memory hierarchy of directories and files built one path at a time.

pub mod escape;
pub mod serialize;

use crate::error::{Error, Result};

pub use serialize::{serialize, to_json, to_value, SerializedChild, SerializedDir, SerializedFile};

/// Separator used by relative paths handed to [`DirectoryNode::insert`].
pub const SEPARATOR: char = '/';

/// A single leaf file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Display name (final path segment).
    pub name: String,
    /// Size in bytes as observed on disk.
    pub size: u64,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Synthetic entry shown when there is nothing real to display.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::new(name, 1)
    }
}

/// One directory level. Files and subdirectories keep discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    name: String,
    files: Vec<FileEntry>,
    children: Vec<DirectoryNode>,
}

impl DirectoryNode {
    /// The synthetic root of a crawl (empty name).
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn children(&self) -> &[DirectoryNode] {
        &self.children
    }

    /// Immediate subdirectory with exactly this name.
    pub fn child(&self, name: &str) -> Option<&DirectoryNode> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.children.is_empty()
    }

    /// Number of files in this node and every node below it.
    pub fn file_count(&self) -> usize {
        self.files.len() + self.children.iter().map(Self::file_count).sum::<usize>()
    }

    /// Number of directories below this node (not counting itself).
    pub fn dir_count(&self) -> usize {
        self.children.len() + self.children.iter().map(Self::dir_count).sum::<usize>()
    }

    /// Append a file directly to this node.
    pub fn push_file(&mut self, entry: FileEntry) {
        self.files.push(entry);
    }

    /// Insert a file given by a `/`-separated path relative to this node.
    ///
    /// Missing directories are created and appended after their existing
    /// siblings; existing ones are reused. Nothing is ever removed or reordered.
    pub fn insert(&mut self, relative_path: &str, size: u64) -> Result<()> {
        let segments = split_segments(relative_path)?;
        let (basename, dirs) = segments
            .split_last()
            .ok_or_else(|| invalid_path(relative_path, "empty path"))?;

        let mut node = self;
        for dir in dirs {
            node = node.child_or_insert(dir);
        }
        node.files.push(FileEntry::new(*basename, size));
        Ok(())
    }

    fn child_or_insert(&mut self, name: &str) -> &mut DirectoryNode {
        let idx = match self.children.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None => {
                self.children.push(DirectoryNode::new(name));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }
}

fn split_segments(relative_path: &str) -> Result<Vec<&str>> {
    if relative_path.is_empty() {
        return Err(invalid_path(relative_path, "empty path"));
    }
    let segments: Vec<&str> = relative_path.split(SEPARATOR).collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(invalid_path(relative_path, "empty segment"));
    }
    Ok(segments)
}

fn invalid_path(path: &str, reason: &'static str) -> Error {
    Error::InvalidPath {
        path: path.to_string(),
        reason,
    }
}
