use tracing::debug;

use super::SelectedEntry;
use crate::path::{self, is_within};
use crate::tree::{Branch, Entry, FileTree, lookup_next, lookup_previous};

/// A selected entry in a file tree, along with the branch it belongs to.
///
/// Navigation never fails: when there is nowhere to go, the selection stays
/// where it is.
#[derive(Debug)]
pub struct Selection<H> {
    tree: FileTree<H>,
    siblings: Branch<H>,
    selected: SelectedEntry<H>,
}

impl<H> Clone for Selection<H> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
            siblings: self.siblings.clone(),
            selected: self.selected.clone(),
        }
    }
}

impl<H> Selection<H> {
    /// Selects the first top-level entry of `tree`, or nothing if the tree is
    /// empty.
    pub fn new(tree: FileTree<H>) -> Self {
        let siblings = tree.branches().clone();
        let selected = siblings
            .first()
            .map(|first| SelectedEntry::in_branch("", first))
            .unwrap_or_default();

        Self {
            tree,
            siblings,
            selected,
        }
    }

    /// Builds a selection from explicit parts, for callers that already know
    /// the branch holding `selected`.
    ///
    /// An empty tree yields the empty selection, and an empty `selected`
    /// selects the first top-level entry. Otherwise the parts are taken as
    /// given.
    pub fn with_parts(
        tree: FileTree<H>,
        siblings: impl Into<Branch<H>>,
        selected: SelectedEntry<H>,
    ) -> Self {
        if tree.is_empty() || selected.is_empty() {
            return Self::new(tree);
        }

        Self {
            tree,
            siblings: siblings.into(),
            selected,
        }
    }

    pub fn tree(&self) -> &FileTree<H> {
        &self.tree
    }

    /// The branch holding the selected entry.
    pub fn siblings(&self) -> &Branch<H> {
        &self.siblings
    }

    pub fn selected(&self) -> &SelectedEntry<H> {
        &self.selected
    }

    /// Moves this selection onto `tree`, a newer version of the tree it was
    /// made in.
    ///
    /// Selected paths are relative to the root of the tree. If the root moved
    /// up while inserting into the new tree, the stretch between the new and the
    /// old root is put in front of the selected path so that it keeps naming
    /// the same entry.
    pub fn refresh(&self, tree: FileTree<H>) -> Self {
        if self.selected.is_empty() || tree.is_empty() {
            return Self::new(tree);
        }

        let prefix = match (self.tree.root(), tree.root()) {
            (Some(old_root), Some(new_root)) if is_within(old_root, new_root) => {
                &old_root[new_root.len()..]
            }
            _ => "",
        };

        let selected = self.selected.prefixed(prefix);
        let siblings = tree.lookup_branch(selected.branch_name());

        let still_present = siblings
            .iter()
            .any(|entry| entry.name() == selected.leaf_name() && entry.kind() == selected.kind());
        if still_present {
            return Self {
                tree,
                siblings,
                selected,
            };
        }

        debug!(
            "Selected entry '{}' is not in the refreshed tree",
            selected.path()
        );
        let Some(first) = siblings.first() else {
            return Self::new(tree);
        };
        let selected = SelectedEntry::in_branch(selected.branch_name(), first);

        Self {
            tree,
            siblings,
            selected,
        }
    }

    /// Selects the entry after the selected one. The last entry of a branch
    /// stays selected.
    pub fn select_next(&self) -> Self {
        let next = lookup_next(&self.siblings, self.selected.leaf_name());
        self.select_sibling(next)
    }

    /// Selects the entry before the selected one. The first entry of a branch
    /// stays selected.
    pub fn select_previous(&self) -> Self {
        let previous = lookup_previous(&self.siblings, self.selected.leaf_name());
        self.select_sibling(previous)
    }

    /// Selects the first entry of the selected directory. A selected file stays
    /// selected.
    pub fn visit_child(&self) -> Self {
        if self.selected.is_directory() {
            self.select_branch(self.selected.path())
        } else {
            self.clone()
        }
    }

    /// Selects the first entry of the directory above the selected one. At the
    /// top level, the first top-level entry is selected.
    pub fn visit_parent(&self) -> Self {
        let parent = path::branch_name(self.selected.branch_name());
        self.select_branch(parent)
    }

    fn select_sibling(&self, sibling: Option<&Entry<H>>) -> Self {
        match sibling {
            Some(entry) => Self {
                tree: self.tree.clone(),
                siblings: self.siblings.clone(),
                selected: SelectedEntry::in_branch(self.selected.branch_name(), entry),
            },
            None => {
                debug!(
                    "'{}' is not in its branch, keeping selection",
                    self.selected.path()
                );
                self.clone()
            }
        }
    }

    fn select_branch(&self, branch_name: &str) -> Self {
        let branch = self.tree.lookup_branch(branch_name);
        let Some(first) = branch.first() else {
            debug!("No entries under '{}', keeping selection", branch_name);
            return self.clone();
        };

        let selected = SelectedEntry::in_branch(branch_name, first);

        Self {
            tree: self.tree.clone(),
            siblings: branch,
            selected,
        }
    }
}
