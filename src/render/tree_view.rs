use std::fmt::Display;

use colored::Colorize;
use filetree::selection::SelectedEntry;
use filetree::tree::{Entry, FileTree};

const INDENT: &str = "  ";
const SELECTED_MARKER: &str = "> ";
const UNSELECTED_MARKER: &str = "  ";

/// Renders every entry of `tree` below its root, one per line.
pub fn render_tree<H: Display>(tree: &FileTree<H>, selected: &SelectedEntry<H>) -> String {
    let mut out = format!("{}\n", display_root(tree).as_str().bold());

    for (path, entry) in tree.walk() {
        let depth = path.matches('/').count() - 1;
        let marker = if path == selected.path() && entry.kind() == selected.kind() {
            SELECTED_MARKER
        } else {
            UNSELECTED_MARKER
        };
        out.push_str(&format!(
            "{marker}{}{}\n",
            INDENT.repeat(depth),
            render_entry(entry)
        ));
    }

    out
}

/// Renders the selected entry with its absolute path.
pub fn render_selection<H: Display>(tree: &FileTree<H>, selected: &SelectedEntry<H>) -> String {
    if selected.is_empty() {
        return "Nothing selected".to_string();
    }

    let path = format!("{}{}", tree.root().unwrap_or_default(), selected.path());
    match selected.handle() {
        Some(handle) => format!("Selected {} {} ({})", selected.kind(), path, handle),
        None => format!("Selected {} {}", selected.kind(), path),
    }
}

fn display_root<H>(tree: &FileTree<H>) -> String {
    match tree.root() {
        Some("") | None => "/".to_string(),
        Some(root) => root.to_string(),
    }
}

fn render_entry<H: Display>(entry: &Entry<H>) -> String {
    match entry {
        Entry::File { name, handle } => format!("{} ({})", name, handle),
        Entry::Directory { name, .. } => {
            format!("{}/", name).as_str().blue().bold().to_string()
        }
    }
}
