//! Directory scanning feeding the file tree.

mod scanner;

pub use scanner::{FileSize, ScanError, ScannedFile, Scanner};
