use tracing::{debug, trace};

use super::branch::{descend, empty, insert_into_branch};
use super::{Branch, Entry};
use crate::path::{common_root, is_within, parse_file_path, segments};

/// A path-ordered tree of files and directories sharing a common root.
///
/// The root is the directory path of the highest entry in the tree. It is set
/// by the first insertion and only ever shrinks afterwards, when a file outside
/// of the current root gets inserted.
#[derive(Debug)]
pub struct FileTree<H> {
    root: Option<String>,
    branches: Branch<H>,
}

impl<H> Clone for FileTree<H> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            branches: self.branches.clone(),
        }
    }
}

impl<H> Default for FileTree<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> FileTree<H> {
    pub fn new() -> Self {
        Self {
            root: None,
            branches: empty(),
        }
    }

    /// Builds a tree from an explicit root and content.
    pub fn with_root(root: impl Into<String>, branches: impl Into<Branch<H>>) -> Self {
        Self {
            root: Some(root.into()),
            branches: branches.into(),
        }
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// The top-level entries.
    pub fn branches(&self) -> &Branch<H> {
        &self.branches
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Returns a new tree with a file named after the last segment of
    /// `file_path`.
    pub fn insert(&self, file_path: &str, handle: H) -> Self {
        let (directory, name) = parse_file_path(file_path);
        self.insert_entry(directory, Entry::file(name, handle))
    }

    /// Returns a new tree with `entry` appended to the directory at
    /// `directory`.
    ///
    /// When `directory` lies outside of the current root, the root is moved up
    /// to the closest common ancestor and the previous content is nested under
    /// the directories leading to the old root.
    pub fn insert_entry(&self, directory: &str, entry: Entry<H>) -> Self {
        let Some(root) = self.root.as_deref() else {
            trace!("Starting tree at '{}' with '{}'", directory, entry.name());
            return Self::with_root(directory, vec![entry]);
        };

        if is_within(directory, root) {
            let path: Vec<&str> = segments(&directory[root.len()..]).collect();
            trace!("Inserting '{}' under '{}' at {:?}", entry.name(), root, path);
            return Self {
                root: self.root.clone(),
                branches: insert_into_branch(&self.branches, &path, &[entry]),
            };
        }

        let (new_root, inserted_path, old_root_path) = common_root(directory, root);
        debug!(
            "Rebasing tree from '{}' to '{}' to insert '{}' at '{}'",
            root,
            new_root,
            entry.name(),
            directory
        );

        let inserted = insert_into_branch(&[], &inserted_path, &[entry]);
        let branches = insert_into_branch(&inserted, &old_root_path, &self.branches);

        Self {
            root: Some(new_root),
            branches,
        }
    }

    /// Returns the children of the directory at `path`.
    ///
    /// `path` is relative to the root of the tree, e.g. `/src/bin`, and `""`
    /// names the top level. Any segment that does not name a directory yields
    /// an empty branch.
    pub fn lookup_branch(&self, path: &str) -> Branch<H> {
        let path: Vec<&str> = segments(path).collect();
        descend(&self.branches, &path).cloned().unwrap_or_else(empty)
    }

    /// Depth-first, pre-order walk over every entry along with its path
    /// relative to the root.
    pub fn walk(&self) -> Walk<'_, H> {
        Walk {
            stack: vec![(String::new(), self.branches.iter())],
        }
    }
}

/// Iterator returned by [`FileTree::walk`].
pub struct Walk<'a, H> {
    stack: Vec<(String, std::slice::Iter<'a, Entry<H>>)>,
}

impl<'a, H> Iterator for Walk<'a, H> {
    type Item = (String, &'a Entry<H>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (parent, entries) = self.stack.last_mut()?;
            let Some(entry) = entries.next() else {
                self.stack.pop();
                continue;
            };

            let path = format!("{}/{}", parent, entry.name());
            if let Some(children) = entry.children() {
                self.stack.push((path.clone(), children.iter()));
            }
            return Some((path, entry));
        }
    }
}
