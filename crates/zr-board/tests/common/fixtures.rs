use crate::common::FakeGateway;

use zr_board::TaskBoardController;
use zr_config::BoardConfig;
use zr_core::{CommentRecord, MenuPermission, TaskRecord, Teacher};

use std::sync::Arc;

use serde_json::json;

pub const MENU: &str = "TASK";

pub fn record(id: i64, title: &str, status: &str) -> TaskRecord {
    serde_json::from_value(json!({
        "id": id,
        "title": title,
        "description": format!("{title} details"),
        "status": status,
    }))
    .unwrap()
}

pub fn assigned_record(id: i64, title: &str, status: &str, teacher_id: i64) -> TaskRecord {
    serde_json::from_value(json!({
        "id": id,
        "title": title,
        "description": "",
        "status": status,
        "assignedTo": [{ "id": teacher_id, "name": format!("Teacher {teacher_id}") }],
    }))
    .unwrap()
}

pub fn comment(id: i64, content: &str, author_id: i64) -> CommentRecord {
    serde_json::from_value(json!({
        "id": id,
        "content": content,
        "teacher": { "id": author_id, "name": format!("Teacher {author_id}") },
    }))
    .unwrap()
}

/// Three tasks across the columns: 1 and 2 in todo, 3 in progress.
pub fn seeded_records() -> Vec<TaskRecord> {
    vec![
        record(1, "Restock gloves", "todo"),
        record(2, "Call supplier", "todo"),
        record(3, "Clean room 2", "inprogress"),
    ]
}

pub fn admin() -> Teacher {
    Teacher::new(1, "Park").with_role("admin")
}

pub fn editor() -> Teacher {
    Teacher::new(10, "Kim").with_permission(MenuPermission::all(MENU))
}

pub fn read_only() -> Teacher {
    Teacher::new(11, "Lee").with_permission(MenuPermission {
        can_read: true,
        ..MenuPermission::new(MENU)
    })
}

pub fn board_config() -> BoardConfig {
    BoardConfig {
        menu_code: MENU.to_string(),
        notice_capacity: 20,
    }
}

pub fn controller(gateway: &Arc<FakeGateway>, actor: Option<Teacher>) -> TaskBoardController {
    TaskBoardController::new(gateway.clone(), &board_config()).with_actor(actor)
}

/// Controller with the board already loaded.
pub async fn loaded(gateway: &Arc<FakeGateway>, actor: Option<Teacher>) -> TaskBoardController {
    let controller = controller(gateway, actor);
    controller.fetch_tasks().await.unwrap();
    controller.drain_notices();
    controller
}
