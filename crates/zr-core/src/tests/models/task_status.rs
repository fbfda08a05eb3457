use crate::TaskStatus;

use std::str::FromStr;

#[test]
fn test_task_status_wire_value() {
    assert_eq!(TaskStatus::Todo.wire_value(), "todo");
    assert_eq!(TaskStatus::InProgress.wire_value(), "inprogress");
    assert_eq!(TaskStatus::Done.wire_value(), "done");
}

#[test]
fn test_task_status_column_key() {
    assert_eq!(TaskStatus::Todo.column_key(), "todo");
    assert_eq!(TaskStatus::InProgress.column_key(), "inProgress");
    assert_eq!(TaskStatus::Done.column_key(), "done");
}

#[test]
fn test_task_status_from_wire_is_case_insensitive() {
    assert_eq!(
        TaskStatus::from_wire("INPROGRESS").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(
        TaskStatus::from_wire("inProgress").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(TaskStatus::from_wire("Done").unwrap(), TaskStatus::Done);
    assert_eq!(TaskStatus::from_str("todo").unwrap(), TaskStatus::Todo);
}

#[test]
fn test_task_status_from_wire_rejects_unknown() {
    assert!(TaskStatus::from_wire("archived").is_err());
    assert!(TaskStatus::from_wire("in_progress").is_err());
    assert!(TaskStatus::from_wire("").is_err());
}

#[test]
fn test_task_status_from_column_key_is_exact() {
    assert_eq!(
        TaskStatus::from_column_key("inProgress").unwrap(),
        TaskStatus::InProgress
    );
    assert!(TaskStatus::from_column_key("inprogress").is_err());
}

#[test]
fn test_task_status_serializes_as_wire_value() {
    let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
    assert_eq!(json, "\"inprogress\"");
}

#[test]
fn test_task_status_default() {
    assert_eq!(TaskStatus::default(), TaskStatus::Todo);
}
