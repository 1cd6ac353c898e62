use rust_atlas::*;
mod test_utils;
use test_utils::*;

/// Decode Error Tests - SwiftAtlas parity
/// Every failure identifies the offending field path and the expected vs
/// actual shape; nothing panics on malformed input.

#[test]
fn test_missing_required_field() {
    let error = decode::<CreateGroupRequest>(&json!({"Entity": {"Id": "E-1"}})).unwrap_err();
    assert_eq!(
        error,
        DecodeError::MissingRequiredField {
            path: "GroupName".to_string()
        }
    );
}

#[test]
fn test_required_field_null_is_a_shape_error() {
    let error = decode::<CreateGroupRequest>(&json!({"GroupName": null})).unwrap_err();
    assert_eq!(
        error,
        DecodeError::TypeMismatch {
            path: "GroupName".to_string(),
            expected: SemanticKind::String,
            actual: WireKind::Null,
        }
    );
}

#[test]
fn test_type_mismatch_reports_expected_and_actual() {
    let error = decode::<GetGroupResponse>(&json!({"ProfileVersion": "three"})).unwrap_err();
    assert_eq!(
        error,
        DecodeError::TypeMismatch {
            path: "ProfileVersion".to_string(),
            expected: SemanticKind::Integer,
            actual: WireKind::String,
        }
    );
}

#[test]
fn test_root_shape_mismatch() {
    let error = decode::<GetGroupResponse>(&json!(["not", "an", "object"])).unwrap_err();
    assert_eq!(
        error,
        DecodeError::TypeMismatch {
            path: String::new(),
            expected: SemanticKind::Object,
            actual: WireKind::Array,
        }
    );
}

#[test]
fn test_deeply_nested_error_path() {
    let wire = json!({
        "Members": [
            member_role("admins", "Administrators", "P-1").to_wire(),
            {
                "RoleId": "members",
                "Members": [
                    {"Key": {"Id": "P-2"}},
                    {"Key": {"Id": 17}}
                ]
            }
        ]
    });
    let error = decode::<ListGroupMembersResponse>(&wire).unwrap_err();
    assert_eq!(error.path(), "Members[1].Members[1].Key.Id");
    assert_eq!(
        error.to_string(),
        "type mismatch at 'Members[1].Members[1].Key.Id': expected string, got number"
    );
}

#[test]
fn test_malformed_optional_field_fails_whole_decode() {
    // Abort-on-first-error policy: a bad optional field is reported, not
    // skipped.
    let wire = json!({"GroupName": "Raiders", "Created": "not-a-timestamp"});
    let error = decode::<GetGroupResponse>(&wire).unwrap_err();
    assert_eq!(
        error,
        DecodeError::TypeMismatch {
            path: "Created".to_string(),
            expected: SemanticKind::Timestamp,
            actual: WireKind::String,
        }
    );
}

#[test]
fn test_error_survives_its_own_serialization() {
    let error = decode::<CreateGroupRequest>(&json!({})).unwrap_err();
    let json = serde_json::to_string(&error).unwrap();
    let restored: DecodeError = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, error);
}
