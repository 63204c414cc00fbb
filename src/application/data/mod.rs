mod log_level;
mod navigation_command;

pub use log_level::LogLevel;
pub use navigation_command::NavigationCommand;
