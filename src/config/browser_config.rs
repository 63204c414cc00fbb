use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::ext::PathExt;

const CONFIG_FILE_NAME: &str = ".filetree.yaml";

const EXCLUDE_KEY: &str = "exclude";
const SHOW_HIDDEN_KEY: &str = "showHidden";
const MAX_DEPTH_KEY: &str = "maxDepth";

fn get_config_file_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

fn key(name: &'static str) -> Yaml<'static> {
    Yaml::Value(Scalar::String(Cow::Borrowed(name)))
}

/// Settings of a browsing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Entry names skipped while scanning
    pub exclude: Vec<String>,
    /// Whether entries starting with a dot are scanned
    pub show_hidden: bool,
    /// How many directory levels below the root are scanned, unlimited if unset
    pub max_depth: Option<usize>,
}

impl BrowserConfig {
    /// Reads the config file of the browsed directory, falling back to the
    /// defaults when there is none.
    pub async fn read(root: &Path) -> Result<Self, BrowserConfigError> {
        let path = get_config_file_path(root);
        if !path.exists() {
            debug!(
                "No config file at {}, using defaults",
                path.best_effort_display()
            );
            return Ok(Self::default());
        }
        Self::from_path(path).await
    }

    pub async fn from_path(path: PathBuf) -> Result<Self, BrowserConfigError> {
        debug!("Reading config file: {}", path.best_effort_display());
        let bytes = fs::read(&path).await.context(ReadSnafu {
            file_path: path.best_effort_display(),
        })?;
        debug!("Successfully read config file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.best_effort_display(),
        })?;
        contents.as_str().try_into()
    }

    /// Checks whether an entry with this name is left out of the tree.
    pub fn is_excluded(&self, name: &str) -> bool {
        (!self.show_hidden && name.starts_with('.')) || self.exclude.iter().any(|e| e == name)
    }

    fn parse_exclude(
        top_level: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<Vec<String>, BrowserConfigError> {
        let Some(value) = top_level.get(&key(EXCLUDE_KEY)) else {
            return Ok(Vec::new());
        };

        value
            .as_sequence()
            .context(InvalidValueSnafu {
                key: EXCLUDE_KEY,
                expected: "a list of names",
            })?
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).context(InvalidValueSnafu {
                    key: EXCLUDE_KEY,
                    expected: "a list of names",
                })
            })
            .collect()
    }

    fn parse_show_hidden(top_level: &LinkedHashMap<Yaml, Yaml>) -> Result<bool, BrowserConfigError> {
        top_level
            .get(&key(SHOW_HIDDEN_KEY))
            .map(|value| {
                value.as_bool().context(InvalidValueSnafu {
                    key: SHOW_HIDDEN_KEY,
                    expected: "a boolean",
                })
            })
            .transpose()
            .map(Option::unwrap_or_default)
    }

    fn parse_max_depth(
        top_level: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<Option<usize>, BrowserConfigError> {
        top_level
            .get(&key(MAX_DEPTH_KEY))
            .map(|value| {
                value
                    .as_integer()
                    .and_then(|depth| usize::try_from(depth).ok())
                    .context(InvalidValueSnafu {
                        key: MAX_DEPTH_KEY,
                        expected: "a non-negative integer",
                    })
            })
            .transpose()
    }
}

impl TryFrom<&str> for BrowserConfig {
    type Error = BrowserConfigError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let contents_vec = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let contents = contents_vec
            .first()
            .ok_or(BrowserConfigError::MalformedConfig)?;

        let top_level = contents
            .as_mapping()
            .ok_or(BrowserConfigError::TopLevelNotMap)?;

        for unknown in top_level.keys().filter(|k| {
            !matches!(
                k.as_str(),
                Some(EXCLUDE_KEY | SHOW_HIDDEN_KEY | MAX_DEPTH_KEY)
            )
        }) {
            debug!("Ignoring unknown config entry: {:?}", unknown);
        }

        Ok(BrowserConfig {
            exclude: Self::parse_exclude(top_level)?,
            show_hidden: Self::parse_show_hidden(top_level)?,
            max_depth: Self::parse_max_depth(top_level)?,
        })
    }
}

#[derive(Debug, Snafu)]
pub enum BrowserConfigError {
    #[snafu(display("Failed to read the config file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("The config file is not valid UTF-8: {}", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the config file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted config file"))]
    MalformedConfig,
    #[snafu(display("Top level of config should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Config entry '{}' should be {}", key, expected))]
    InvalidValue { key: String, expected: String },
}
