#![forbid(unsafe_code)]
//! srcviz — crawl a directory, keep files by extension, and emit the result as a
//! nested hierarchy for an interactive visualization.

pub mod cli;
pub mod crawl;
pub mod error;
pub mod event_loop;
pub mod filter;
pub mod output;
pub mod state;
pub mod tree;
pub mod watcher;

pub use error::{Error, Result};
