//! zr - Zarada task board CLI
//!
//! # Examples
//!
//! ```bash
//! # Show the board, only tasks assigned to teacher 10
//! zr board --assignee 10
//!
//! # Move task 7 to the done column
//! zr --teacher-id 10 move 7 --to done
//!
//! # Create a task
//! zr --teacher-id 10 create --title "Restock gloves" --content "Two boxes, size M"
//! ```

use zr_board::NoticeKind;
use zr_cli::{Cli, format_output, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    let run = match run(cli).await {
        Ok(run) => run,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for notice in &run.notices {
        let tag = match notice.kind {
            NoticeKind::Success => "ok",
            NoticeKind::Error => "error",
            NoticeKind::PermissionDenied => "denied",
        };
        eprintln!("[{tag}] {}", notice.message);
    }

    match run.output.and_then(|output| format_output(&output, json)) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
