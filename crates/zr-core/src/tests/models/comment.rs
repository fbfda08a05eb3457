use crate::{Comment, CommentRecord, EntityId, UNKNOWN_AUTHOR};

use googletest::assert_that;
use googletest::prelude::{eq, none};
use serde_json::json;

fn comment(value: serde_json::Value) -> Comment {
    let record: CommentRecord = serde_json::from_value(value).unwrap();
    Comment::from_record(&EntityId::from(1), record)
}

#[test]
fn given_teacher_key_when_normalized_then_author_set() {
    let c = comment(json!({
        "id": 1, "content": "Done?", "teacher": { "id": 10, "name": "Kim" }
    }));

    assert_that!(c.author_name(), eq("Kim"));
    assert_that!(c.is_authored_by(&EntityId::from("10")), eq(true));
}

#[test]
fn given_author_key_when_normalized_then_author_set() {
    let c = comment(json!({
        "id": 2, "content": "Yes", "author": { "id": 11, "name": "Lee", "color": "blue" }
    }));

    assert_that!(c.author_name(), eq("Lee"));
    assert_eq!(c.author.and_then(|a| a.color).as_deref(), Some("blue"));
}

#[test]
fn given_no_author_when_normalized_then_unknown_and_not_deletable() {
    let c = comment(json!({ "id": 3, "content": "orphan" }));

    assert_that!(c.author_name(), eq(UNKNOWN_AUTHOR));
    assert_that!(c.author, none());
    assert_that!(c.is_authored_by(&EntityId::from("10")), eq(false));
}

#[test]
fn given_other_author_when_checked_then_not_authored_by_actor() {
    let c = comment(json!({
        "id": 4, "content": "mine", "teacher": { "id": 12, "name": "Choi" }
    }));

    assert_that!(c.is_authored_by(&EntityId::from(10)), eq(false));
}

#[test]
fn given_null_content_when_normalized_then_empty_text() {
    let c = comment(json!({
        "id": 5, "content": null, "teacher": { "id": 10, "name": null }
    }));

    assert_that!(c.content, eq(""));
    assert_that!(c.is_authored_by(&EntityId::from(10)), eq(true));
}
