mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "TK_CONFIG_DIR";
const DEFAULT_CONFIG_DIRNAME: &str = ".tk";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_STORAGE_FILENAME: &str = "storage.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
