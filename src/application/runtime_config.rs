use std::path::PathBuf;

use crate::application::data::NavigationCommand;
use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    pub commands: Vec<NavigationCommand>,
    pub config: Option<PathBuf>,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.root,
            commands: cli.commands,
            config: cli.config,
        }
    }
}
