//! File tree representation.
//!
//! This module provides an immutable tree of files and directories keyed by
//! absolute paths. Inserting a file returns a new tree that shares every
//! untouched branch with the previous one.

mod branch;
mod entry;
mod file_tree;

pub use branch::{lookup_next, lookup_previous};
pub use entry::{Branch, Entry, EntryKind};
pub use file_tree::{FileTree, Walk};
