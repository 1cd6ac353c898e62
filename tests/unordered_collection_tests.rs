use rust_atlas::*;
mod test_utils;
use test_utils::*;

/// Unordered Collection Tests - SwiftAtlas parity
/// Arrays marked unordered compare as multisets; permuting the wire order
/// never changes the decoded value.

#[test]
fn test_member_roles_equal_under_reversed_wire_order() {
    let forward = json!({
        "Members": [
            member_role("admins", "Administrators", "P-1").to_wire(),
            member_role("members", "Members", "P-2").to_wire(),
        ]
    });
    let reversed = json!({
        "Members": [
            member_role("members", "Members", "P-2").to_wire(),
            member_role("admins", "Administrators", "P-1").to_wire(),
        ]
    });

    let from_forward: ListGroupMembersResponse = decode(&forward).unwrap();
    let from_reversed: ListGroupMembersResponse = decode(&reversed).unwrap();
    assert_eq!(from_forward, from_reversed);
}

#[test]
fn test_member_roles_with_different_contents_stay_unequal() {
    let left: ListGroupMembersResponse = decode(&json!({
        "Members": [member_role("admins", "Administrators", "P-1").to_wire()]
    }))
    .unwrap();
    let right: ListGroupMembersResponse = decode(&json!({
        "Members": [member_role("admins", "Administrators", "P-9").to_wire()]
    }))
    .unwrap();
    assert_ne!(left, right);
}

#[test]
fn test_catalog_tags_permutation_equality() {
    let item = sample_catalog_item();
    let mut permuted = item.clone();
    permuted.tags = Some(vec!["rare".to_string(), "weapon".to_string(), "fire".to_string()].into());
    assert_eq!(permuted, item);
}

#[test]
fn test_encode_preserves_insertion_order() {
    // Unordered affects comparison only; the encoded array keeps the
    // order the caller supplied.
    let item = sample_catalog_item();
    let wire = encode(&item);
    assert_eq!(wire["Tags"], json!(["weapon", "fire", "rare"]));
}

#[test]
fn test_sort_by_natural_key() {
    let mut listing = ListGroupMembersResponse {
        members: Some(
            vec![
                member_role("members", "Members", "P-2"),
                member_role("admins", "Administrators", "P-1"),
            ]
            .into(),
        ),
    };
    let members = listing.members.as_mut().unwrap();
    members.sort_by_key_field();
    assert_eq!(members[0].role_id.as_deref(), Some("admins"));
    assert_eq!(members[1].role_id.as_deref(), Some("members"));
}

#[test]
fn test_ordered_collections_remain_order_sensitive() {
    // Plain Vec fields keep positional equality.
    let left: GetTitleDataRequest = decode(&json!({"Keys": ["a", "b"]})).unwrap();
    let right: GetTitleDataRequest = decode(&json!({"Keys": ["b", "a"]})).unwrap();
    assert_ne!(left, right);
}

#[test]
fn test_duplicate_elements_compare_as_multiset() {
    let twice: CatalogItem = decode(&json!({"Tags": ["fire", "fire"]})).unwrap();
    let once: CatalogItem = decode(&json!({"Tags": ["fire"]})).unwrap();
    let also_twice: CatalogItem = decode(&json!({"Tags": ["fire", "fire"]})).unwrap();

    assert_ne!(twice, once);
    assert_eq!(twice, also_twice);
}

#[test]
fn test_nested_unordered_round_trip() {
    let listing = sample_member_listing();
    let decoded: ListGroupMembersResponse = decode(&encode(&listing)).unwrap();
    assert_eq!(decoded, listing);
}
