use filetree::selection::Selection;
use filetree::tree::FileTree;
use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;
use tracing::info;

use crate::application::RuntimeConfig;
use crate::application::data::NavigationCommand;
use crate::config::{BrowserConfig, BrowserConfigError};
use crate::render::{render_selection, render_tree};
use crate::scanner::{FileSize, ScanError, ScannedFile, Scanner};

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let config = match &app_config.config {
            Some(path) => BrowserConfig::from_path(path.clone()).await,
            None => BrowserConfig::read(&app_config.root).await,
        }
        .context(ConfigSnafu)?;
        debug!("Loaded config: {:?}", config);

        let files = Scanner::new(&config)
            .scan(&app_config.root)
            .context(ScanningSnafu)?;
        info!("Scanned {} files", files.len());

        let selection = Self::browse(files, &app_config.commands);

        print!("{}", render_tree(selection.tree(), selection.selected()));
        println!("{}", render_selection(selection.tree(), selection.selected()));

        Ok(())
    }

    /// Builds the tree one file at a time, keeping a selection in sync, then
    /// navigates through it.
    fn browse(files: Vec<ScannedFile>, commands: &[NavigationCommand]) -> Selection<FileSize> {
        let selection = files
            .into_iter()
            .fold(Selection::new(FileTree::new()), |selection, file| {
                let tree = selection.tree().insert(&file.path, file.size);
                selection.refresh(tree)
            });
        debug!("Initial selection: {}", selection.selected().path());

        commands.iter().fold(selection, |selection, command| {
            let next = command.apply(&selection);
            info!(
                "{}: '{}' -> '{}'",
                command,
                selection.selected().path(),
                next.selected().path()
            );
            next
        })
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the config"))]
    ConfigError { source: BrowserConfigError },
    #[snafu(display("Critical failure encountered while scanning the directory"))]
    ScanningError { source: ScanError },
}
