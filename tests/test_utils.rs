use rust_atlas::*;
use std::collections::HashMap;

/// Fixed instant used across tests so encoded documents are deterministic.
pub fn test_instant() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-03-01T12:00:00.000Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// A group response with every commonly-used field populated.
pub fn sample_group_response() -> GetGroupResponse {
    GetGroupResponse {
        admin_role_id: Some("admins".to_string()),
        created: Some(test_instant()),
        group: Some(EntityKey::new("G-100").with_type("group")),
        group_name: Some("Raiders".to_string()),
        member_role_id: Some("members".to_string()),
        profile_version: Some(3),
        roles: Some(HashMap::from([
            ("admins".to_string(), "Administrators".to_string()),
            ("members".to_string(), "Members".to_string()),
        ])),
    }
}

/// A member listing with two roles, each holding one member.
pub fn sample_member_listing() -> ListGroupMembersResponse {
    ListGroupMembersResponse {
        members: Some(
            vec![
                member_role("admins", "Administrators", "P-1"),
                member_role("members", "Members", "P-2"),
            ]
            .into(),
        ),
    }
}

pub fn member_role(role_id: &str, role_name: &str, member_id: &str) -> EntityMemberRole {
    EntityMemberRole {
        members: Some(vec![EntityWithLineage {
            key: Some(EntityKey::new(member_id).with_type("title_player_account")),
            lineage: None,
        }]),
        role_id: Some(role_id.to_string()),
        role_name: Some(role_name.to_string()),
    }
}

/// A CloudScript task with a typed parameter payload.
pub fn sample_cloud_script_task() -> ScheduledTask {
    let mut task = ScheduledTask::new("nightly-rewards");
    task.description = Some("Grant daily login rewards".to_string());
    task.is_active = Some(true);
    task.schedule = Some("0 4 * * *".to_string());
    task.task_id = Some("T-900".to_string());
    task.task_type = Some(ScheduledTaskType::CloudScript);
    task.parameter = Some(TaskParameter::CloudScript(CloudScriptTaskParameter {
        argument: Some(json!({"tier": 2})),
        function_name: Some("grantRewards".to_string()),
    }));
    task
}

/// A catalog item with unordered tags and nested bundle info.
pub fn sample_catalog_item() -> CatalogItem {
    CatalogItem {
        item_id: Some("sword_flame".to_string()),
        item_class: Some("weapon".to_string()),
        display_name: Some("Flame Sword".to_string()),
        description: Some("A sword. On fire.".to_string()),
        is_tradable: Some(true),
        tags: Some(vec!["weapon".to_string(), "fire".to_string(), "rare".to_string()].into()),
        virtual_currency_prices: Some(HashMap::from([("GC".to_string(), 1500)])),
        bundle: Some(CatalogItemBundleInfo {
            bundled_items: Some(vec!["ember".to_string(), "hilt".to_string()].into()),
            bundled_result_tables: None,
            bundled_virtual_currencies: None,
        }),
        ..CatalogItem::default()
    }
}
