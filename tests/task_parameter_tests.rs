use rust_atlas::*;
mod test_utils;
use test_utils::*;

/// Task Parameter Tests - SwiftAtlas parity
/// The parameter payload is routed by the sibling task-type discriminator;
/// unrecognized discriminators retain the payload for round-trip fidelity.

#[test]
fn test_cloud_script_payload_is_routed() {
    let task = sample_cloud_script_task();
    let decoded: ScheduledTask = decode(&encode(&task)).unwrap();
    match decoded.parameter {
        Some(TaskParameter::CloudScript(parameter)) => {
            assert_eq!(parameter.function_name.as_deref(), Some("grantRewards"));
        }
        other => panic!("expected CloudScript parameter, got {:?}", other),
    }
}

#[test]
fn test_segment_payload_is_routed() {
    let wire = json!({
        "Name": "churn-winback",
        "Type": "ActionsOnPlayerSegment",
        "Parameter": {"ActionId": "send-gift", "SegmentId": "lapsed-30d"}
    });
    let task: ScheduledTask = decode(&wire).unwrap();
    match &task.parameter {
        Some(TaskParameter::ActionsOnPlayerSegment(parameter)) => {
            assert_eq!(parameter.action_id.as_deref(), Some("send-gift"));
            assert_eq!(parameter.segment_id.as_deref(), Some("lapsed-30d"));
        }
        other => panic!("expected segment parameter, got {:?}", other),
    }
}

#[test]
fn test_unknown_discriminator_decodes_with_opaque_payload() {
    let _ = env_logger::builder().is_test(true).try_init();
    let wire = json!({
        "Name": "survey-blast",
        "Type": "EmailNotification",
        "Parameter": {"TemplateId": "T-17", "Audience": "lapsed"}
    });
    let task: ScheduledTask = decode(&wire).unwrap();

    assert_eq!(
        task.task_type,
        Some(ScheduledTaskType::Unknown("EmailNotification".to_string()))
    );
    let parameter = task.parameter.as_ref().unwrap();
    assert!(parameter.is_opaque());

    // The raw payload is preserved, not discarded.
    assert_eq!(encode(&task), wire);
}

#[test]
fn test_missing_discriminator_keeps_payload_opaque() {
    let wire = json!({
        "Name": "mystery",
        "Parameter": {"Anything": [1, 2, 3]}
    });
    let task: ScheduledTask = decode(&wire).unwrap();
    assert_eq!(task.task_type, None);
    assert_eq!(
        task.parameter,
        Some(TaskParameter::Opaque(json!({"Anything": [1, 2, 3]})))
    );
    assert_eq!(encode(&task), wire);
}

#[test]
fn test_strict_routing_fails_on_unknown_discriminator() {
    let error = TaskParameter::decode_strict(
        &ScheduledTaskType::Unknown("EmailNotification".to_string()),
        &json!({"TemplateId": "T-17"}),
        "Tasks[0].Parameter",
    )
    .unwrap_err();

    assert_eq!(
        error,
        DecodeError::UnknownDiscriminator {
            path: "Tasks[0].Parameter".to_string(),
            symbol: "EmailNotification".to_string(),
        }
    );
}

#[test]
fn test_registry_lookup_names_expected_shapes() {
    assert_eq!(
        TaskParameter::expected_shape(&ScheduledTaskType::CloudScript),
        Some("CloudScriptTaskParameter")
    );
    assert_eq!(
        TaskParameter::expected_shape(&ScheduledTaskType::ActionsOnPlayerSegment),
        Some("ActionsOnPlayersInSegmentTaskParameter")
    );
    assert_eq!(
        TaskParameter::expected_shape(&ScheduledTaskType::Unknown("X".to_string())),
        None
    );
}

#[test]
fn test_known_discriminator_with_bad_payload_fails() {
    let wire = json!({
        "Name": "nightly-rewards",
        "Type": "CloudScript",
        "Parameter": "not-an-object"
    });
    let error = decode::<ScheduledTask>(&wire).unwrap_err();
    assert_eq!(
        error,
        DecodeError::TypeMismatch {
            path: "Parameter".to_string(),
            expected: SemanticKind::Object,
            actual: WireKind::String,
        }
    );
}

#[test]
fn test_update_task_request_routes_like_task() {
    let wire = json!({
        "Identifier": {"Name": "nightly-rewards"},
        "Type": "CloudScript",
        "Parameter": {"FunctionName": "grantRewards"}
    });
    let request: UpdateTaskRequest = decode(&wire).unwrap();
    assert!(matches!(
        request.parameter,
        Some(TaskParameter::CloudScript(_))
    ));
    assert_eq!(encode(&request), wire);
}

#[test]
fn test_task_list_round_trip_mixes_known_and_unknown() {
    let wire = json!({
        "Tasks": [
            encode(&sample_cloud_script_task()),
            {
                "Name": "survey-blast",
                "Type": "EmailNotification",
                "Parameter": {"TemplateId": "T-17"}
            }
        ]
    });
    let result: GetTasksResult = decode(&wire).unwrap();
    let tasks = result.tasks.as_ref().unwrap();
    assert_eq!(tasks.len(), 2);
    assert!(tasks[1].parameter.as_ref().unwrap().is_opaque());
    assert_eq!(encode(&result), wire);
}

#[test]
fn test_instance_summary_round_trip() {
    let wire = json!({
        "TaskInstanceId": "I-1",
        "Status": "InProgress",
        "PercentComplete": 40.0,
        "StartedAt": "2024-03-01T12:00:00.000Z",
        "TaskIdentifier": {"Id": "T-900"},
        "Type": "CloudScript"
    });
    let summary: TaskInstanceBasicSummary = decode(&wire).unwrap();
    assert_eq!(summary.status, Some(TaskInstanceStatus::InProgress));
    assert_eq!(summary.started_at, Some(test_instant()));
    assert_eq!(encode(&summary), wire);
}
