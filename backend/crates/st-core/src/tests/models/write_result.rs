use crate::{DeleteResult, InsertResult, UpdateResult};

#[test]
fn test_insert_result_wire_shape() {
    let json = serde_json::to_value(InsertResult::inserted("abc")).unwrap();

    assert_eq!(json["acknowledged"], true);
    assert_eq!(json["insertedId"], "abc");
}

#[test]
fn test_skipped_insert_has_null_id() {
    let json = serde_json::to_value(InsertResult::skipped()).unwrap();

    assert!(json["insertedId"].is_null());
}

#[test]
fn test_update_and_delete_result_wire_shape() {
    let update = serde_json::to_value(UpdateResult::new(1)).unwrap();
    assert_eq!(update["matchedCount"], 1);
    assert_eq!(update["modifiedCount"], 1);

    let delete = serde_json::to_value(DeleteResult::new(0)).unwrap();
    assert_eq!(delete["deletedCount"], 0);
}
