//! Persistent, path-keyed file tree with a navigable selection.
//!
//! Files are inserted by absolute path into a [`tree::FileTree`], which keeps
//! track of the common root of everything inserted so far. A
//! [`selection::Selection`] points at one entry of a tree and moves between
//! siblings, into directories and back to parents. Every operation returns a
//! new value; older trees and selections stay valid.

pub mod path;
pub mod selection;
pub mod tree;
