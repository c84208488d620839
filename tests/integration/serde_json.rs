//! JSON representation via serde.

use super::common::{nested_pronouns, pronouns};
use collections::Collection;

#[test]
fn test_pronouns_to_json() {
    assert_eq!(
        serde_json::to_string(&pronouns()).unwrap(),
        r#"["I","You","He"]"#
    );
}

#[test]
fn test_nested_json_round_trip() {
    let json = serde_json::to_string(&nested_pronouns()).unwrap();
    assert_eq!(
        json,
        r#"[["I","You","He"],["We","You","They"],["She","It"],[]]"#
    );

    let back: Collection<Collection<String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, nested_pronouns());
}

#[test]
fn test_deserialized_collection_stays_growable() {
    let mut nums: Collection<i32> = serde_json::from_str("[1,2,3]").unwrap();
    nums.add(4);
    nums.insert_at(0, 0).unwrap();
    assert_eq!(nums.to_string(), "[0, 1, 2, 3, 4]");
}

#[test]
fn test_rejects_wrong_element_type() {
    let result: Result<Collection<i32>, _> = serde_json::from_str(r#"[1,"two"]"#);
    assert!(result.is_err());
}
