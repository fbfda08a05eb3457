//! zr-cli library
//!
//! Command parsing, output rendering and the glue that runs a command
//! against the board controller. The `zr` binary is a thin wrapper.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod render;


pub use app::{Run, execute, format_output, resolve_actor, run};
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, CliResult};
pub use render::Output;
