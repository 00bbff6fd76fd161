mod config;
mod error;
mod log_level;
mod logging_config;
mod management_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use management_config::ManagementConfig;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Directory name used when `A0_CONFIG_DIR` is not set
pub const CONFIG_DIR_NAME: &str = ".a0";
pub const CONFIG_FILE_NAME: &str = "config.toml";
