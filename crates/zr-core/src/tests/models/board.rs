use crate::{Board, EntityId, Task, TaskRecord, TaskStatus, TeacherRef};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use serde_json::json;

fn ids(column: &[Task]) -> Vec<String> {
    column.iter().map(|t| t.id.to_string()).collect()
}

fn sample_board() -> Board {
    Board::from_tasks(vec![
        Task::new(1, "a").with_assignee(TeacherRef::new(10, "Kim")),
        Task::new(2, "b")
            .with_status(TaskStatus::InProgress)
            .with_assignee(TeacherRef::new(11, "Lee")),
        Task::new(3, "c"),
        Task::new(4, "d")
            .with_status(TaskStatus::Done)
            .with_assignee(TeacherRef::new(10, "Kim"))
            .with_assignee(TeacherRef::new(11, "Lee")),
    ])
}

#[test]
fn given_records_when_board_built_then_server_order_kept_per_column() {
    // Given
    let records: Vec<TaskRecord> = serde_json::from_value(json!([
        { "id": 1, "title": "a", "status": "todo" },
        { "id": 2, "title": "b", "status": "inprogress" },
        { "id": 3, "title": "c", "status": "todo" },
        { "id": 4, "title": "d", "status": "done" },
        { "id": 5, "title": "e", "status": "InProgress" }
    ]))
    .unwrap();

    // When
    let board = Board::from_records(records);

    // Then
    assert_eq!(ids(&board.todo), vec!["1", "3"]);
    assert_eq!(ids(&board.in_progress), vec!["2", "5"]);
    assert_eq!(ids(&board.done), vec!["4"]);
}

#[test]
fn given_unknown_status_record_when_board_built_then_dropped_everywhere() {
    // Given
    let records: Vec<TaskRecord> = serde_json::from_value(json!([
        { "id": 1, "title": "a", "status": "todo" },
        { "id": 2, "title": "old", "status": "archived" },
        { "id": 3, "title": "blank", "status": "" }
    ]))
    .unwrap();

    // When
    let board = Board::from_records(records);

    // Then
    assert_that!(board.len(), eq(1));
    assert_that!(board.locate(&EntityId::from(2)), none());
    assert_that!(board.locate(&EntityId::from(3)), none());
}

#[test]
fn given_null_status_record_when_list_decoded_then_only_that_record_dropped() {
    // Given
    let records: Vec<TaskRecord> = serde_json::from_value(json!([
        { "id": 1, "title": "ok", "status": "todo" },
        { "id": 2, "title": "bad", "status": null },
        { "id": 3, "title": null, "status": "done" }
    ]))
    .unwrap();

    // When
    let board = Board::from_records(records);

    // Then
    assert_eq!(ids(&board.todo), vec!["1"]);
    assert_eq!(ids(&board.done), vec!["3"]);
    assert_that!(board.locate(&EntityId::from(2)), none());
    assert_that!(board.done[0].title, eq(""));
}

#[test]
fn given_board_when_locate_then_column_and_index() {
    let board = sample_board();

    assert_that!(
        board.locate(&EntityId::from(3)),
        some(eq((TaskStatus::Todo, 1)))
    );
    assert_that!(
        board.task(&EntityId::from("4")).map(|t| t.title.clone()),
        some(eq("d"))
    );
}

#[test]
fn given_assignee_filter_when_applied_then_only_matching_tasks() {
    // Given
    let board = sample_board();

    // When
    let view = board.filter_by_assignee(&EntityId::from(11));

    // Then
    assert_eq!(ids(&view.todo), Vec::<String>::new());
    assert_eq!(ids(&view.in_progress), vec!["2"]);
    assert_eq!(ids(&view.done), vec!["4"]);
}

#[test]
fn given_assignee_filter_when_cleared_then_original_view_restored() {
    // Given
    let board = sample_board();
    let before = board.clone();

    // When
    let _filtered = board.view(Some(&EntityId::from(10)));
    let cleared = board.view(None);

    // Then
    assert_eq!(board, before);
    assert_eq!(cleared, before);
}

#[test]
fn test_empty_board() {
    let board = Board::default();
    assert!(board.is_empty());
    assert!(board.column(TaskStatus::Done).is_empty());
}
