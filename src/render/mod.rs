//! Plain-text rendering of trees and selections.

mod tree_view;

pub use tree_view::{render_selection, render_tree};
