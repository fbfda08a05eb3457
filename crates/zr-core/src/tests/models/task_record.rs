use crate::{EntityId, Task, TaskRecord, TaskStatus, parse_calendar_date, parse_timestamp};

use chrono::{NaiveDate, TimeZone, Utc};
use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
use serde_json::json;

fn record(value: serde_json::Value) -> TaskRecord {
    serde_json::from_value(value).unwrap()
}

// =========================================================================
// Assignee normalization
// =========================================================================

#[test]
fn given_single_assignee_object_when_normalized_then_one_assignee() {
    // Given
    let rec = record(json!({
        "id": 1,
        "title": "Call supplier",
        "description": "See https://example.com/order",
        "status": "todo",
        "assignedTo": { "id": 10, "name": "Kim" }
    }));

    // When
    let task = Task::try_from_record(rec).unwrap();

    // Then
    assert_that!(task.assignees.len(), eq(1));
    assert_that!(task.assignee_display(), eq("Kim"));
    assert_that!(task.assignee_ids(), eq(&vec![EntityId::from(10)]));
    assert_that!(task.content, eq("See https://example.com/order"));
}

#[test]
fn given_assignee_array_when_normalized_then_names_joined() {
    // Given
    let rec = record(json!({
        "id": "t-2",
        "title": "Inventory",
        "status": "done",
        "assignedTo": [
            { "id": 10, "name": "Kim" },
            { "id": 11, "name": "Lee", "color": "#ff0000" }
        ]
    }));

    // When
    let task = Task::try_from_record(rec).unwrap();

    // Then
    assert_that!(task.assignee_display(), eq("Kim, Lee"));
    assert_that!(task.is_assigned_to(&EntityId::from("11")), eq(true));
    assert_that!(task.status, eq(TaskStatus::Done));
}

#[test]
fn given_only_assignee_ids_when_normalized_then_ids_kept_without_names() {
    // Given
    let rec = record(json!({
        "id": 3,
        "title": "Clean room",
        "status": "inprogress",
        "assignedToIds": [10, "11"]
    }));

    // When
    let task = Task::try_from_record(rec).unwrap();

    // Then
    assert_that!(task.assignees.len(), eq(2));
    assert_that!(task.assignee_display(), eq(""));
    assert_that!(task.is_assigned_to(&EntityId::from("10")), eq(true));
}

#[test]
fn given_ids_overlapping_objects_when_normalized_then_no_duplicates() {
    // Given
    let rec = record(json!({
        "id": 4,
        "title": "Overlap",
        "status": "todo",
        "assignedTo": [{ "id": 10, "name": "Kim" }],
        "assignedToIds": [10]
    }));

    // When
    let task = Task::try_from_record(rec).unwrap();

    // Then
    assert_that!(task.assignees.len(), eq(1));
    assert_that!(task.assignee_display(), eq("Kim"));
}

// =========================================================================
// Status / field tolerance
// =========================================================================

#[test]
fn given_unknown_status_when_normalized_then_error() {
    let rec = record(json!({ "id": 5, "title": "Old", "status": "archived" }));

    assert_that!(Task::try_from_record(rec), err(anything()));
}

#[test]
fn given_uppercase_status_when_normalized_then_mapped() {
    let rec = record(json!({ "id": 6, "title": "Loud", "status": "INPROGRESS" }));

    let task = Task::try_from_record(rec).unwrap();

    assert_that!(task.status, eq(TaskStatus::InProgress));
}

#[test]
fn given_content_alias_and_missing_optionals_when_normalized_then_defaults() {
    // Given
    let rec = record(json!({ "id": 7, "title": "Bare", "content": "body", "status": "todo" }));

    // When
    let result = Task::try_from_record(rec);

    // Then
    assert_that!(result, ok(anything()));
    let task = result.unwrap();
    assert_that!(task.content, eq("body"));
    assert_that!(task.comment_count, eq(0));
    assert_that!(task.registrar, none());
    assert_that!(task.start_date, none());
}

#[test]
fn given_dates_and_timestamps_when_normalized_then_parsed() {
    // Given
    let rec = record(json!({
        "id": 8,
        "title": "Dated",
        "status": "todo",
        "startDate": "2024-03-01",
        "endDate": "2024-03-05T00:00:00.000Z",
        "createdAt": "2024-02-28T09:30:00Z",
        "updatedAt": "2024-02-28T10:00:00",
        "registeredBy": { "id": 99, "name": "Park" },
        "commentCount": 4
    }));

    // When
    let task = Task::try_from_record(rec).unwrap();

    // Then
    assert_that!(task.start_date, some(eq(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())));
    assert_that!(task.end_date, some(eq(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())));
    assert_that!(
        task.created_at,
        some(eq(Utc.with_ymd_and_hms(2024, 2, 28, 9, 30, 0).unwrap()))
    );
    assert_that!(
        task.updated_at,
        some(eq(Utc.with_ymd_and_hms(2024, 2, 28, 10, 0, 0).unwrap()))
    );
    assert_that!(task.comment_count, eq(4));
    assert_that!(task.registrar.map(|r| r.name), some(eq("Park")));
}

#[test]
fn test_parse_calendar_date_rejects_garbage() {
    assert!(parse_calendar_date("yesterday").is_none());
    assert!(parse_calendar_date("2024-13-01").is_none());
    assert!(parse_calendar_date("").is_none());
}

#[test]
fn test_parse_timestamp_accepts_offsets() {
    let parsed = parse_timestamp("2024-01-01T09:00:00+09:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
}
