use crate::{ConfigError, ConfigErrorResult, DEFAULT_MENU_CODE, DEFAULT_NOTICE_CAPACITY};

use serde::Deserialize;

pub const MIN_NOTICE_CAPACITY: usize = 1;
pub const MAX_NOTICE_CAPACITY: usize = 1000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Menu code the permission gate checks for task board mutations
    pub menu_code: String,
    /// How many notices are kept before the oldest is dropped
    pub notice_capacity: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            menu_code: DEFAULT_MENU_CODE.to_string(),
            notice_capacity: DEFAULT_NOTICE_CAPACITY,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.menu_code.trim().is_empty() {
            return Err(ConfigError::board("board.menu_code must not be empty"));
        }

        if self.notice_capacity < MIN_NOTICE_CAPACITY || self.notice_capacity > MAX_NOTICE_CAPACITY
        {
            return Err(ConfigError::board(format!(
                "board.notice_capacity must be {}-{}, got {}",
                MIN_NOTICE_CAPACITY, MAX_NOTICE_CAPACITY, self.notice_capacity
            )));
        }

        Ok(())
    }
}
