mod browser_config;

pub use browser_config::{BrowserConfig, BrowserConfigError};
