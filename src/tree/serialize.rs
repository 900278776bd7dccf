//! Conversion of a hierarchy into the nested value consumed by the renderer.
//!
//! Every directory becomes `{"name": ..., "children": [...]}` where `children`
//! lists the directory's files first and its subdirectories after, both in
//! discovery order. Empty directories carry no `children` field at all.

use serde::{Deserialize, Serialize};

use super::escape::{escape_dir_name, escape_html};
use super::{DirectoryNode, FileEntry};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedFile {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedDir {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SerializedChild>>,
}

/// An element of a directory's `children` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SerializedChild {
    // Files are tried first when reading back: only they carry `size`.
    File(SerializedFile),
    Dir(SerializedDir),
}

impl From<&FileEntry> for SerializedFile {
    fn from(entry: &FileEntry) -> Self {
        Self {
            name: escape_html(&entry.name),
            size: entry.size,
        }
    }
}

/// Build the escaped, ordered representation of `node` and everything below it.
pub fn serialize(node: &DirectoryNode) -> SerializedDir {
    let children = if node.is_empty() {
        None
    } else {
        let mut out = Vec::with_capacity(node.files().len() + node.children().len());
        out.extend(
            node.files()
                .iter()
                .map(|f| SerializedChild::File(SerializedFile::from(f))),
        );
        out.extend(
            node.children()
                .iter()
                .map(|d| SerializedChild::Dir(serialize(d))),
        );
        Some(out)
    };

    SerializedDir {
        name: escape_dir_name(node.name()),
        children,
    }
}

/// Serialize into a `serde_json::Value`, keeping field order.
pub fn to_value(node: &DirectoryNode) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(serialize(node))?)
}

/// Serialize into JSON text.
pub fn to_json(node: &DirectoryNode, pretty: bool) -> Result<String> {
    let value = serialize(node);
    let text = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}
