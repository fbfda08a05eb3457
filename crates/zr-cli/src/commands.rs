use zr_core::{EntityId, TaskStatus};

use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the three-column board
    Board {
        /// Only tasks assigned to this teacher
        #[arg(long)]
        assignee: Option<EntityId>,
    },

    /// Move a task to another column (or another slot in its own)
    Move {
        task_id: EntityId,

        /// Target column: todo, inprogress or done
        #[arg(long)]
        to: TaskStatus,

        /// Slot in the target column (default: end)
        #[arg(long)]
        index: Option<usize>,
    },

    /// Create a task in the todo column
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        content: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Assigned teacher id (repeatable)
        #[arg(long = "assignee")]
        assignees: Vec<EntityId>,
    },

    /// Edit a task; omitted fields are left alone
    Update {
        task_id: EntityId,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        #[arg(long)]
        start: Option<NaiveDate>,

        #[arg(long)]
        end: Option<NaiveDate>,

        #[arg(long)]
        status: Option<TaskStatus>,

        /// Replace the assignees (repeatable)
        #[arg(long = "assignee")]
        assignees: Vec<EntityId>,
    },

    /// Delete a task
    Delete {
        task_id: EntityId,

        /// Confirm the delete
        #[arg(long)]
        yes: bool,
    },

    /// List comments on a task
    Comments { task_id: EntityId },

    /// Comment on a task as the signed-in teacher
    CommentAdd {
        task_id: EntityId,

        #[arg(long)]
        content: String,
    },

    /// Delete one of your own comments
    CommentDelete {
        task_id: EntityId,
        comment_id: EntityId,
    },

    /// List teachers
    Teachers {
        #[arg(long, default_value_t = 0)]
        page: u32,

        #[arg(long, default_value_t = 50)]
        size: u32,
    },
}
