use crate::{Cli, CliError, CliResult, Commands, Output, logger};

use zr_board::{DragEnd, DragLocation, Notice, TaskBoardController};
use zr_config::Config;
use zr_core::{EntityId, TaskDraft, TaskPatch, Teacher};
use zr_gateway::{HttpGateway, TaskGateway};

use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

/// Result of one command plus whatever notices the board raised on the way.
pub struct Run {
    pub output: CliResult<Output>,
    pub notices: Vec<Notice>,
}

/// Load config, wire up the gateway and board, and run one command.
pub async fn run(cli: Cli) -> CliResult<Run> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    if let Some(teacher_id) = cli.teacher_id {
        config.actor.teacher_id = Some(teacher_id);
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_deref().map(Path::new),
        config.logging.colored,
    )?;
    config.log_summary();

    let gateway = Arc::new(
        HttpGateway::from_config(&config.api, &config.retry)?
            .with_teacher_id(config.actor.teacher_id.as_deref())
            .with_token(config.actor.token.as_deref()),
    );

    let actor = resolve_actor(gateway.as_ref(), config.actor.teacher_id.as_deref()).await?;
    let controller =
        TaskBoardController::new(gateway.clone(), &config.board).with_actor(actor);

    let output = execute(cli.command, &controller, gateway.as_ref()).await;
    let notices = controller.drain_notices();
    controller.unmount();

    Ok(Run { output, notices })
}

/// Look up the configured teacher so permissions can be checked locally.
pub async fn resolve_actor(
    gateway: &dyn TaskGateway,
    teacher_id: Option<&str>,
) -> CliResult<Option<Teacher>> {
    let Some(teacher_id) = teacher_id else {
        debug!("No teacher configured, running anonymously");
        return Ok(None);
    };

    let teacher = gateway.get_teacher(&EntityId::from(teacher_id)).await?;
    info!(
        "Acting as {} ({}), {} menu permissions",
        teacher.name,
        teacher.id,
        teacher.permissions.len()
    );
    Ok(Some(teacher))
}

pub async fn execute(
    command: Commands,
    controller: &TaskBoardController,
    gateway: &dyn TaskGateway,
) -> CliResult<Output> {
    match command {
        Commands::Board { assignee } => {
            controller.fetch_tasks().await?;
            controller.set_assignee_filter(assignee);
            Ok(Output::Board(controller.view()))
        }

        Commands::Move { task_id, to, index } => {
            controller.fetch_tasks().await?;
            let board = controller.board();
            let (status, position) = board
                .locate(&task_id)
                .ok_or_else(|| CliError::usage(format!("Task {task_id} is not on the board")))?;
            let index = index.unwrap_or(board.column(to).len());

            let event = DragEnd::new(task_id, DragLocation::new(status, position))
                .to(DragLocation::new(to, index));
            controller.on_drag_end(event).await?;
            Ok(Output::Board(controller.view()))
        }

        Commands::Create {
            title,
            content,
            start,
            end,
            assignees,
        } => {
            let draft = TaskDraft {
                start_date: start,
                end_date: end,
                assignee_ids: assignees,
                ..TaskDraft::new(&title, &content)
            };
            controller.create_task(draft).await?;
            Ok(Output::Board(controller.view()))
        }

        Commands::Update {
            task_id,
            title,
            content,
            start,
            end,
            status,
            assignees,
        } => {
            let patch = TaskPatch {
                title,
                content,
                start_date: start,
                end_date: end,
                status,
                assignee_ids: (!assignees.is_empty()).then_some(assignees),
            };
            controller.fetch_tasks().await?;
            controller.update_task(&task_id, patch).await?;
            Ok(Output::Board(controller.view()))
        }

        Commands::Delete { task_id, yes } => {
            if !yes {
                return Err(CliError::usage(format!(
                    "Refusing to delete task {task_id} without --yes"
                )));
            }
            controller.fetch_tasks().await?;
            let task = controller.request_delete(&task_id)?;
            controller.confirm_delete().await?;
            Ok(Output::message(format!(
                "Deleted task #{} {}",
                task.id, task.title
            )))
        }

        Commands::Comments { task_id } => Ok(Output::Comments(
            controller.fetch_comments(&task_id).await?,
        )),

        Commands::CommentAdd { task_id, content } => Ok(Output::Comments(
            controller.add_comment(&task_id, &content).await?,
        )),

        Commands::CommentDelete {
            task_id,
            comment_id,
        } => Ok(Output::Comments(
            controller.delete_comment(&task_id, &comment_id).await?,
        )),

        Commands::Teachers { page, size } => {
            Ok(Output::Teachers(gateway.list_teachers(page, size).await?))
        }
    }
}

/// Serialize for `--json`, text otherwise.
pub fn format_output(output: &Output, json: bool) -> CliResult<String> {
    if json {
        Ok(serde_json::to_string_pretty(output)?)
    } else {
        Ok(output.to_text())
    }
}
