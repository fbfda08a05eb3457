use crate::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "zr")]
#[command(about = "Zarada task board from the terminal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (overrides api.base_url)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Act as this teacher (overrides actor.teacher_id)
    #[arg(long, global = true)]
    pub teacher_id: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}
