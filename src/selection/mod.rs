//! Navigable selection over a file tree.

mod selected_entry;
mod selection;

pub use selected_entry::SelectedEntry;
pub use selection::Selection;
