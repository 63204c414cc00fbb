use std::path::{Path, PathBuf};

use derive_more::{Display, From};
use snafu::{ResultExt, Snafu, ensure};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::BrowserConfig;
use crate::ext::PathExt;

/// Size of a file in bytes, used as the handle of scanned files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, From)]
#[display("{_0} B")]
pub struct FileSize(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Absolute, `/`-separated path of the file
    pub path: String,
    pub size: FileSize,
}

/// Lists the files below a directory, in name order.
pub struct Scanner<'a> {
    config: &'a BrowserConfig,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a BrowserConfig) -> Self {
        Self { config }
    }

    pub fn scan(&self, root: &Path) -> Result<Vec<ScannedFile>, ScanError> {
        let root = root.canonicalize().context(RootSnafu {
            path: root.to_path_buf(),
        })?;
        ensure!(root.is_dir(), NotADirectorySnafu { path: root });

        debug!("Scanning {}", root.best_effort_display());
        let mut walker = WalkDir::new(&root).sort_by_file_name().min_depth(1);
        if let Some(max_depth) = self.config.max_depth {
            walker = walker.max_depth(max_depth + 1);
        }

        let mut files = Vec::new();
        let entries = walker
            .into_iter()
            .filter_entry(|entry| !self.config.is_excluded(&entry.file_name().to_string_lossy()));
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(std::io::Error::from(e)).context(RootSnafu { path: root });
                }
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            match entry.metadata() {
                Ok(metadata) => files.push(ScannedFile {
                    path: entry.path().to_tree_path(),
                    size: metadata.len().into(),
                }),
                Err(e) => warn!("Skipping {}: {}", entry.path().best_effort_display(), e),
            }
        }

        Ok(files)
    }
}

#[derive(Debug, Snafu)]
pub enum ScanError {
    #[snafu(display("Failed to read the directory to browse: {}", path.best_effort_display()))]
    RootError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("{} is not a directory", path.best_effort_display()))]
    NotADirectory { path: PathBuf },
}
