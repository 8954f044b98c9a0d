use super::common::*;
use serde_json::{json, Value};

#[test]
fn detail_view_preserves_absent_notes_as_null() {
    let (service, _) = build_service();
    let record = service.submit(submission()).expect("submission accepted");

    let detail = record.detail_view();
    assert_eq!(detail.calling2, None);

    let payload = serde_json::to_value(&detail).expect("detail serializes");
    assert_eq!(payload.get("calling2"), Some(&Value::Null));
    assert_eq!(payload.get("consent_to_contact"), Some(&json!(true)));
    assert!(payload.get("created_at").is_some());
    assert_eq!(payload.get("id"), Some(&json!(record.id.0)));
}

#[test]
fn list_entry_flattens_absent_notes_to_empty_strings() {
    let (service, _) = build_service();
    let record = service.submit(submission()).expect("submission accepted");

    let entry = record.list_entry();
    assert_eq!(entry.calling2, "");

    let payload = serde_json::to_value(&entry).expect("entry serializes");
    assert_eq!(payload.get("calling2"), Some(&json!("")));
}

#[test]
fn list_entry_carries_exactly_the_table_subset() {
    let (service, _) = build_service();
    let record = service
        .submit(second_submission())
        .expect("submission accepted");

    let payload = serde_json::to_value(record.list_entry()).expect("entry serializes");
    let object = payload.as_object().expect("entry is an object");

    let expected = [
        "name",
        "phone_number",
        "email",
        "current_location",
        "course_enquiry",
        "training_mode",
        "training_timing",
        "start_time",
        "calling1",
        "calling2",
        "calling3",
        "calling4",
        "calling5",
    ];
    assert_eq!(object.len(), expected.len());
    for field in expected {
        assert!(object.contains_key(field), "missing {field}");
    }
    // Store metadata and the consent flag stay out of the table shape.
    assert!(!object.contains_key("id"));
    assert!(!object.contains_key("consent_to_contact"));
    assert!(!object.contains_key("created_at"));
}

#[test]
fn stored_note_values_pass_through_both_projections() {
    let (service, _) = build_service();
    let record = service
        .submit(second_submission())
        .expect("submission accepted");

    assert_eq!(
        record.detail_view().calling1.as_deref(),
        Some("Asked for a callback on Monday")
    );
    assert_eq!(
        record.list_entry().calling1,
        "Asked for a callback on Monday"
    );
}

#[test]
fn explicit_empty_note_stays_distinct_from_absent() {
    let (service, _) = build_service();

    let mut with_empty_note = submission();
    with_empty_note.calling3 = Some(String::new());
    let record = service.submit(with_empty_note).expect("submission accepted");

    // Storage keeps the distinction; only the detail shape can show it.
    let detail = serde_json::to_value(record.detail_view()).expect("detail serializes");
    assert_eq!(detail.get("calling3"), Some(&json!("")));
    assert_eq!(detail.get("calling2"), Some(&Value::Null));

    let entry = record.list_entry();
    assert_eq!(entry.calling3, "");
    assert_eq!(entry.calling2, "");
}
