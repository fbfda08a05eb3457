use crate::{CliError, CliResult};

use zr_config::LogLevel;

use std::path::Path;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, debug};

/// Initialize logger with fern
///
/// Lines go to stderr so command output on stdout stays clean.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Append here instead of stderr
/// * `colored` - Color the level name (ignored when logging to file)
#[track_caller]
pub fn initialize(log_level: LogLevel, log_file: Option<&Path>, colored: bool) -> CliResult<()> {
    let level_filter = log_level.0;
    let colors = (colored && log_file.is_none()).then(level_colors);

    let dispatch = Dispatch::new()
        .level(level_filter)
        // reqwest and hyper are chatty below warn
        .level_for("reqwest", level_filter.min(LevelFilter::Warn))
        .level_for("hyper_util", level_filter.min(LevelFilter::Warn))
        .format(move |out, message, record| {
            let level = match &colors {
                Some(colors) => colors.color(record.level()).to_string(),
                None => record.level().to_string(),
            };
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        });

    let dispatch = match log_file {
        Some(path) => {
            let file = fern::log_file(path).map_err(|e| {
                CliError::logger(format!(
                    "Failed to open log file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            dispatch.chain(file)
        }
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(path) => debug!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => debug!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}
