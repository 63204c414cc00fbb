use std::sync::Arc;

use super::{Branch, Entry};

/// Finds the entry following the one named `name`.
///
/// The last entry of a branch is its own successor. Returns `None` when no
/// entry is named `name`.
pub fn lookup_next<'a, H>(branch: &'a [Entry<H>], name: &str) -> Option<&'a Entry<H>> {
    let position = branch.iter().position(|entry| entry.name() == name)?;
    branch.get(position + 1).or(branch.get(position))
}

/// Finds the entry preceding the one named `name`.
///
/// The first entry of a branch is its own predecessor. Returns `None` when no
/// entry is named `name`.
pub fn lookup_previous<'a, H>(branch: &'a [Entry<H>], name: &str) -> Option<&'a Entry<H>> {
    let position = branch.iter().position(|entry| entry.name() == name)?;
    branch.get(position.saturating_sub(1))
}

/// Descends along `path`, matching directories only, and returns the branch
/// found at its end.
pub(crate) fn descend<'a, H>(branch: &'a Branch<H>, path: &[&str]) -> Option<&'a Branch<H>> {
    path.iter().try_fold(branch, |current, segment| {
        current
            .iter()
            .find(|entry| entry.is_directory_named(segment))
            .and_then(Entry::children)
    })
}

/// Returns a copy of `branch` where `inserted` is appended to the directory
/// reached through `path`.
///
/// Missing directories are created and appended after their siblings. Existing
/// directories keep their position. Only the branches along `path` are copied.
pub(crate) fn insert_into_branch<H>(
    branch: &[Entry<H>],
    path: &[&str],
    inserted: &[Entry<H>],
) -> Branch<H> {
    let Some((segment, rest)) = path.split_first() else {
        return branch.iter().chain(inserted).cloned().collect();
    };

    match branch
        .iter()
        .position(|entry| entry.is_directory_named(segment))
    {
        Some(index) => {
            let mut updated = branch.to_vec();
            if let Entry::Directory { children, .. } = &mut updated[index] {
                *children = insert_into_branch(children, rest, inserted);
            }
            updated.into()
        }
        None => branch
            .iter()
            .cloned()
            .chain(std::iter::once(Entry::Directory {
                name: segment.to_string(),
                children: insert_into_branch(&[], rest, inserted),
            }))
            .collect(),
    }
}

/// An empty branch.
pub(crate) fn empty<H>() -> Branch<H> {
    Arc::from(Vec::new())
}
