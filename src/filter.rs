//! Extension-based file selection.

use std::path::Path;

use crate::error::{Error, Result};

/// Token that selects every file regardless of extension.
pub const WILDCARD: &str = "*";

/// The set of extensions a crawl keeps, in the order the user gave them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    wanted: Vec<String>,
}

impl ExtensionFilter {
    /// Build a filter from already-tokenized extensions.
    pub fn new(wanted: Vec<String>) -> Result<Self> {
        if wanted.is_empty() {
            return Err(Error::InvalidExtensions(String::new()));
        }
        Ok(Self { wanted })
    }

    /// Parse a space-separated list such as `".go .rs"` or `"*"`.
    pub fn parse(input: &str) -> Result<Self> {
        let wanted: Vec<String> = input.split_whitespace().map(str::to_string).collect();
        if wanted.is_empty() {
            return Err(Error::InvalidExtensions(input.to_string()));
        }
        Ok(Self { wanted })
    }

    /// Filter that accepts every file.
    pub fn all() -> Self {
        Self {
            wanted: vec![WILDCARD.to_string()],
        }
    }

    pub fn extensions(&self) -> &[String] {
        &self.wanted
    }

    pub fn is_wildcard(&self) -> bool {
        self.wanted.iter().any(|e| e == WILDCARD)
    }

    pub fn is_included(&self, path: &Path) -> bool {
        is_included(path, &self.wanted)
    }
}

/// Decide whether `path` qualifies given the wanted extensions.
///
/// A wildcard anywhere in the list accepts the path. Otherwise the extension of
/// the final segment must equal one entry exactly (case-sensitive).
pub fn is_included<S: AsRef<str>>(path: &Path, wanted: &[S]) -> bool {
    if wanted.iter().any(|e| e.as_ref() == WILDCARD) {
        return true;
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let ext = extension_of(&name);
    wanted.iter().any(|e| e.as_ref() == ext)
}

/// Suffix starting at the last `.` of a file name, or `""` when there is none.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx..],
        None => "",
    }
}
