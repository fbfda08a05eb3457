use crate::EntityId;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_numeric_json_id_when_deserialized_then_equals_text_id() {
    // Given
    let numeric: EntityId = serde_json::from_str("42").unwrap();
    let text: EntityId = serde_json::from_str("\"42\"").unwrap();

    // Then
    assert_that!(numeric, eq(&text));
    assert_that!(numeric.as_str(), eq("42"));
}

#[test]
fn given_numeric_id_when_serialized_then_stays_numeric() {
    // Given
    let id = EntityId::from(7);

    // When
    let json = serde_json::to_string(&id).unwrap();

    // Then
    assert_that!(json.as_str(), eq("7"));
}

#[test]
fn given_text_id_when_serialized_then_stays_text() {
    // Given
    let id = EntityId::from("7");

    // When
    let json = serde_json::to_string(&id).unwrap();

    // Then
    assert_that!(json.as_str(), eq("\"7\""));
}
