mod actor_config;
mod api_config;
mod board_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod retry_config;


pub use actor_config::ActorConfig;
pub use api_config::ApiConfig;
pub use board_config::BoardConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use retry_config::RetryConfig;

const CONFIG_DIR_ENV: &str = "ZR_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".zarada";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_API_PREFIX: &str = "/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_MENU_CODE: &str = "TASK";
const DEFAULT_NOTICE_CAPACITY: usize = 100;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
