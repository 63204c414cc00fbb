use std::sync::Arc;

use derive_more::{Display, IsVariant};

/// An ordered sequence of sibling entries.
///
/// Branches are immutable and reference counted, so a new tree shares every
/// branch that an insertion did not touch with the tree it was derived from.
pub type Branch<H> = Arc<[Entry<H>]>;

/// Represents the type of a file tree entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum EntryKind {
    #[default]
    #[display("file")]
    File,
    #[display("directory")]
    Directory,
}

/// A node of a file tree.
///
/// The handle attached to a file belongs to the caller and is never inspected.
#[derive(Debug, PartialEq, Eq)]
pub enum Entry<H> {
    File { name: String, handle: Arc<H> },
    Directory { name: String, children: Branch<H> },
}

// Cloning shares handles and children, so no `H: Clone` bound.
impl<H> Clone for Entry<H> {
    fn clone(&self) -> Self {
        match self {
            Entry::File { name, handle } => Entry::File {
                name: name.clone(),
                handle: Arc::clone(handle),
            },
            Entry::Directory { name, children } => Entry::Directory {
                name: name.clone(),
                children: Arc::clone(children),
            },
        }
    }
}

impl<H> Entry<H> {
    pub fn file(name: impl Into<String>, handle: H) -> Self {
        Entry::File {
            name: name.into(),
            handle: Arc::new(handle),
        }
    }

    pub fn directory(name: impl Into<String>, children: impl Into<Branch<H>>) -> Self {
        Entry::Directory {
            name: name.into(),
            children: children.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::File { name, .. } | Entry::Directory { name, .. } => name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::File { .. } => EntryKind::File,
            Entry::Directory { .. } => EntryKind::Directory,
        }
    }

    /// The handle of a file, `None` for directories.
    pub fn handle(&self) -> Option<&Arc<H>> {
        match self {
            Entry::File { handle, .. } => Some(handle),
            Entry::Directory { .. } => None,
        }
    }

    /// The children of a directory, `None` for files.
    pub fn children(&self) -> Option<&Branch<H>> {
        match self {
            Entry::File { .. } => None,
            Entry::Directory { children, .. } => Some(children),
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind().is_file()
    }

    pub fn is_directory(&self) -> bool {
        self.kind().is_directory()
    }

    /// Checks whether this entry is a directory with the given name.
    pub(crate) fn is_directory_named(&self, expected: &str) -> bool {
        matches!(self, Entry::Directory { name, .. } if name == expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_entry_exposes_name_and_handle() {
        let entry = Entry::file("file.ext", 7);

        assert_eq!(entry.name(), "file.ext");
        assert_eq!(entry.kind(), EntryKind::File);
        assert_eq!(entry.handle().map(|h| **h), Some(7));
        assert!(entry.children().is_none());
        assert!(entry.is_file());
    }

    #[test]
    fn directory_entry_exposes_children() {
        let entry = Entry::directory("DIR", vec![Entry::file("a", 1)]);

        assert!(entry.is_directory());
        assert!(entry.handle().is_none());
        assert_eq!(entry.children().map(|c| c.len()), Some(1));
        assert!(entry.is_directory_named("DIR"));
        assert!(!Entry::file("DIR", 0).is_directory_named("DIR"));
    }

    #[test]
    fn clone_shares_handle() {
        struct NotClone;
        let entry = Entry::file("f", NotClone);
        let copy = entry.clone();

        assert!(Arc::ptr_eq(
            entry.handle().expect("file has a handle"),
            copy.handle().expect("file has a handle"),
        ));
    }

    #[test]
    fn entry_kind_display() {
        assert_eq!(EntryKind::File.to_string(), "file");
        assert_eq!(EntryKind::Directory.to_string(), "directory");
        assert_eq!(EntryKind::default(), EntryKind::File);
    }
}
