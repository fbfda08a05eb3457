use crate::{
    ActorConfig, ApiConfig, BoardConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError,
    ConfigErrorResult, DEFAULT_CONFIG_DIR, LoggingConfig, RetryConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub actor: ActorConfig,
    pub board: BoardConfig,
    pub retry: RetryConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for ZR_CONFIG_DIR env var, else use ./.zarada/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply ZR_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: ZR_CONFIG_DIR env var > ./.zarada/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.board.validate()?;
        self.retry.validate()?;
        Ok(())
    }

    /// Log configuration summary. The actor token is never logged.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {}{} (timeout {}s)",
            self.api.base_url, self.api.api_prefix, self.api.timeout_secs
        );
        info!(
            "  actor: {} (token: {})",
            self.actor.teacher_id.as_deref().unwrap_or("anonymous"),
            if self.actor.token.is_some() {
                "set"
            } else {
                "none"
            }
        );
        info!(
            "  board: menu={}, notices={}",
            self.board.menu_code, self.board.notice_capacity
        );
        info!(
            "  retry: attempts={}, initial={}ms, max={}s, backoff={}x",
            self.retry.max_attempts,
            self.retry.initial_delay_ms,
            self.retry.max_delay_secs,
            self.retry.backoff_multiplier
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("ZR_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_string("ZR_API_PREFIX", &mut self.api.api_prefix);
        Self::apply_env_parse("ZR_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Actor
        Self::apply_env_option_string("ZR_ACTOR_TEACHER_ID", &mut self.actor.teacher_id);
        Self::apply_env_option_string("ZR_ACTOR_TOKEN", &mut self.actor.token);

        // Board
        Self::apply_env_string("ZR_BOARD_MENU_CODE", &mut self.board.menu_code);
        Self::apply_env_parse(
            "ZR_BOARD_NOTICE_CAPACITY",
            &mut self.board.notice_capacity,
        );

        // Retry
        Self::apply_env_parse("ZR_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse(
            "ZR_RETRY_INITIAL_DELAY_MS",
            &mut self.retry.initial_delay_ms,
        );
        Self::apply_env_parse("ZR_RETRY_MAX_DELAY_SECS", &mut self.retry.max_delay_secs);
        Self::apply_env_parse(
            "ZR_RETRY_BACKOFF_MULTIPLIER",
            &mut self.retry.backoff_multiplier,
        );
        Self::apply_env_bool("ZR_RETRY_JITTER", &mut self.retry.jitter);

        // Logging
        Self::apply_env_parse("ZR_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ZR_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ZR_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name)
            && !val.is_empty()
        {
            *target = Some(val);
        }
    }
}
