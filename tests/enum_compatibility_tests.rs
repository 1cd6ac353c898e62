use rust_atlas::*;
mod test_utils;
use test_utils::*;

/// Enum Compatibility Tests - SwiftAtlas parity
/// Enums travel as symbol strings; unknown symbols from newer service
/// versions degrade to a sentinel instead of failing the decode, except in
/// load-bearing positions.

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_known_symbols_round_trip() {
    init_logging();
    for status in [
        TaskInstanceStatus::Succeeded,
        TaskInstanceStatus::Starting,
        TaskInstanceStatus::InProgress,
        TaskInstanceStatus::Failed,
        TaskInstanceStatus::Aborted,
        TaskInstanceStatus::Pending,
    ] {
        let wire = status.to_wire();
        let decoded = TaskInstanceStatus::from_wire(&wire, "Status").unwrap();
        assert_eq!(decoded, status);
    }
}

#[test]
fn test_unknown_platform_symbol_yields_sentinel() {
    init_logging();
    let request: SetupPushNotificationRequest =
        decode(&json!({"Platform": "SomeFutureProvider"})).unwrap();
    assert_eq!(
        request.platform,
        Some(PushSetupPlatform::Unknown("SomeFutureProvider".to_string()))
    );
}

#[test]
fn test_unknown_symbol_survives_round_trip() {
    let wire = json!({"Platform": "SomeFutureProvider", "Name": "atlas-demo"});
    let request: SetupPushNotificationRequest = decode(&wire).unwrap();
    assert_eq!(encode(&request), wire);
}

#[test]
fn test_non_string_enum_position_is_a_shape_error() {
    let error = decode::<SetupPushNotificationRequest>(&json!({"Platform": 3})).unwrap_err();
    assert_eq!(
        error,
        DecodeError::TypeMismatch {
            path: "Platform".to_string(),
            expected: SemanticKind::EnumSymbol,
            actual: WireKind::Number,
        }
    );
}

#[test]
fn test_load_bearing_enum_strict_decode_errors() {
    let error =
        ScheduledTaskType::from_wire_strict(&json!("EmailNotification"), "Type").unwrap_err();
    assert_eq!(
        error,
        DecodeError::MalformedEnumValue {
            path: "Type".to_string(),
            symbol: "EmailNotification".to_string(),
        }
    );

    let known = ScheduledTaskType::from_wire_strict(&json!("CloudScript"), "Type").unwrap();
    assert_eq!(known, ScheduledTaskType::CloudScript);
}

#[test]
fn test_lenient_decode_of_load_bearing_enum_in_container() {
    // Inside a full task decode the discriminator stays lenient; the
    // payload is what absorbs the unknown symbol.
    let task: ScheduledTask = decode(&json!({
        "Name": "survey-blast",
        "Type": "EmailNotification"
    }))
    .unwrap();
    assert!(task.task_type.as_ref().unwrap().is_unknown());
    assert_eq!(task.parameter, None);
}

#[test]
fn test_operation_types_unknown_symbol() {
    let response: UpdateGroupResponse = decode(&json!({"SetResult": "Archived"})).unwrap();
    assert_eq!(
        response.set_result,
        Some(OperationTypes::Unknown("Archived".to_string()))
    );
}

#[test]
fn test_symbol_casing_is_exact() {
    // Symbols are case-sensitive: a mismatched casing is an unknown
    // symbol, not a match.
    let permission = UserDataPermission::from_symbol("private");
    assert!(permission.is_unknown());
}

#[test]
fn test_sample_listing_uses_known_symbols_only() {
    let listing = sample_member_listing();
    let wire = encode(&listing);
    let decoded: ListGroupMembersResponse = decode(&wire).unwrap();
    assert_eq!(decoded, listing);
}
