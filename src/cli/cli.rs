use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{LogLevel, NavigationCommand};

#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// The directory to browse
    #[clap(default_value = ".")]
    pub root: PathBuf,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Navigation applied to the selection, in order
    #[clap(long, short, value_enum, value_delimiter = ',')]
    pub commands: Vec<NavigationCommand>,

    /// Config file to use instead of `.filetree.yaml` in the browsed directory
    #[clap(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_commands() {
        let cli = Cli::try_parse_from(["filetree", "/tmp", "-c", "next,child,parent"])
            .expect("arguments are valid");

        assert_eq!(cli.root, PathBuf::from("/tmp"));
        assert_eq!(
            cli.commands,
            vec![
                NavigationCommand::Next,
                NavigationCommand::Child,
                NavigationCommand::Parent
            ]
        );
        assert!(cli.config.is_none());
    }

    #[test]
    fn defaults_to_current_directory() {
        let cli = Cli::try_parse_from(["filetree"]).expect("arguments are valid");

        assert_eq!(cli.root, PathBuf::from("."));
        assert!(cli.commands.is_empty());
        assert!(matches!(cli.log_level, LogLevel::Warn));
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(Cli::try_parse_from(["filetree", "-c", "sideways"]).is_err());
    }
}
