use std::sync::Arc;

use crate::path;
use crate::tree::{Entry, EntryKind};

/// Where a selection points, independently of any tree.
///
/// The path is relative to the root of the tree the selection was made in and
/// includes the entry name, e.g. `/src/main.rs`. An empty path means nothing is
/// selected.
#[derive(Debug, PartialEq, Eq)]
pub struct SelectedEntry<H> {
    path: String,
    handle: Option<Arc<H>>,
    kind: EntryKind,
}

impl<H> Clone for SelectedEntry<H> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            handle: self.handle.clone(),
            kind: self.kind,
        }
    }
}

impl<H> Default for SelectedEntry<H> {
    fn default() -> Self {
        Self {
            path: String::new(),
            handle: None,
            kind: EntryKind::File,
        }
    }
}

impl<H> SelectedEntry<H> {
    pub fn new(path: impl Into<String>, handle: Option<Arc<H>>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            handle,
            kind,
        }
    }

    /// Selects `entry`, which lives in the directory at `branch_name`.
    pub fn in_branch(branch_name: &str, entry: &Entry<H>) -> Self {
        Self {
            path: format!("{}/{}", branch_name, entry.name()),
            handle: entry.handle().cloned(),
            kind: entry.kind(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The handle of the selected file, `None` for directories and for an
    /// empty selection.
    pub fn handle(&self) -> Option<&H> {
        self.handle.as_deref()
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Path of the directory holding the selected entry, `""` at the top
    /// level.
    pub fn branch_name(&self) -> &str {
        path::branch_name(&self.path)
    }

    pub fn leaf_name(&self) -> &str {
        path::leaf_name(&self.path)
    }

    /// The same entry seen from a root `prefix` higher up.
    pub(crate) fn prefixed(&self, prefix: &str) -> Self {
        Self {
            path: format!("{}{}", prefix, self.path),
            handle: self.handle.clone(),
            kind: self.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selected_entry_is_empty_file() {
        let entry = SelectedEntry::<u32>::default();

        assert_eq!(entry.path(), "");
        assert_eq!(entry.leaf_name(), "");
        assert_eq!(entry.branch_name(), "");
        assert!(entry.handle().is_none());
        assert_eq!(entry.kind(), EntryKind::File);
        assert!(entry.is_file());
        assert!(entry.is_empty());
    }

    #[test]
    fn in_branch_builds_path_from_branch_name() {
        let file = Entry::file("fileB.ext", 1);
        let selected = SelectedEntry::in_branch("/DIR", &file);

        assert_eq!(selected.path(), "/DIR/fileB.ext");
        assert_eq!(selected.branch_name(), "/DIR");
        assert_eq!(selected.leaf_name(), "fileB.ext");
        assert_eq!(selected.handle(), Some(&1));
    }

    #[test]
    fn directories_have_no_handle() {
        let dir = Entry::directory("DIR", Vec::<Entry<u32>>::new());
        let selected = SelectedEntry::in_branch("", &dir);

        assert_eq!(selected.path(), "/DIR");
        assert!(selected.is_directory());
        assert!(selected.handle().is_none());
    }

    #[test]
    fn prefixed_keeps_handle_and_kind() {
        let selected = SelectedEntry::new("/a.ext", Some(Arc::new(3)), EntryKind::File);
        let moved = selected.prefixed("/root");

        assert_eq!(moved.path(), "/root/a.ext");
        assert_eq!(moved.handle(), Some(&3));
        assert_eq!(moved.kind(), EntryKind::File);
    }
}
