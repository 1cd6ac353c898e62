use crate::error::Result;
use crate::models::common::{EntityKey, EntityWithLineage};
use crate::wire::{
    type_mismatch, FromWire, Keyed, SemanticKind, ToWire, Unordered, WireFields, WireObject,
    WireValue,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Accepts an outstanding application to join a group. Nothing is returned
/// on success.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AcceptGroupApplicationRequest {
    /// Optional custom tags for the request (build number, trace IDs).
    pub custom_tags: Option<HashMap<String, String>>,
    /// Entity to accept as. Must be the applicant or a child of it.
    pub entity: Option<EntityKey>,
    /// The identifier of the group.
    pub group: Option<EntityKey>,
}

impl ToWire for AcceptGroupApplicationRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Entity", &self.entity)
            .optional("Group", &self.group)
            .into_value()
    }
}

impl FromWire for AcceptGroupApplicationRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            entity: obj.optional("Entity")?,
            group: obj.optional("Group")?,
        })
    }
}

/// Accepts an outstanding invitation to join a group on the invited
/// entity's behalf.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AcceptGroupInvitationRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    /// Entity to perform the action on; defaults to the caller.
    pub entity: Option<EntityKey>,
    pub group: Option<EntityKey>,
}

impl ToWire for AcceptGroupInvitationRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Entity", &self.entity)
            .optional("Group", &self.group)
            .into_value()
    }
}

impl FromWire for AcceptGroupInvitationRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            entity: obj.optional("Entity")?,
            group: obj.optional("Group")?,
        })
    }
}

/// Adds members to a group or role. Non-members can only be added by title
/// claimants; everyone else goes through applications or invitations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddMembersRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub group: Option<EntityKey>,
    /// Entities to add. Only `title_player_account` and `character`
    /// entities may be group members.
    pub members: Option<Vec<EntityKey>>,
    /// Role to add the entities to; the group's default member role is
    /// used when not specified.
    pub role_id: Option<String>,
}

impl ToWire for AddMembersRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Group", &self.group)
            .optional("Members", &self.members)
            .optional("RoleId", &self.role_id)
            .into_value()
    }
}

impl FromWire for AddMembersRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            group: obj.optional("Group")?,
            members: obj.optional("Members")?,
            role_id: obj.optional("RoleId")?,
        })
    }
}

/// Creates an application to join a group, or accepts an outstanding
/// invitation instead when one exists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApplyToGroupRequest {
    /// Default true: accept an outstanding invitation instead of creating
    /// an application.
    pub auto_accept_outstanding_invite: Option<bool>,
    pub custom_tags: Option<HashMap<String, String>>,
    pub entity: Option<EntityKey>,
    pub group: Option<EntityKey>,
}

impl ToWire for ApplyToGroupRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional(
                "AutoAcceptOutstandingInvite",
                &self.auto_accept_outstanding_invite,
            )
            .optional("CustomTags", &self.custom_tags)
            .optional("Entity", &self.entity)
            .optional("Group", &self.group)
            .into_value()
    }
}

impl FromWire for ApplyToGroupRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            auto_accept_outstanding_invite: obj.optional("AutoAcceptOutstandingInvite")?,
            custom_tags: obj.optional("CustomTags")?,
            entity: obj.optional("Entity")?,
            group: obj.optional("Group")?,
        })
    }
}

/// Describes an application to join a group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApplyToGroupResponse {
    /// Entity that requested membership.
    pub entity: Option<EntityWithLineage>,
    /// When the application expires and is deleted.
    pub expires: Option<DateTime<Utc>>,
    pub group: Option<EntityKey>,
}

impl ToWire for ApplyToGroupResponse {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Entity", &self.entity)
            .optional("Expires", &self.expires)
            .optional("Group", &self.group)
            .into_value()
    }
}

impl FromWire for ApplyToGroupResponse {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            entity: obj.optional("Entity")?,
            expires: obj.optional("Expires")?,
            group: obj.optional("Group")?,
        })
    }
}

/// Blocks a list of entities from joining a group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockEntityRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub entity: Option<EntityKey>,
    pub group: Option<EntityKey>,
}

impl ToWire for BlockEntityRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Entity", &self.entity)
            .optional("Group", &self.group)
            .into_value()
    }
}

impl FromWire for BlockEntityRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            entity: obj.optional("Entity")?,
            group: obj.optional("Group")?,
        })
    }
}

/// Moves a list of entities from one role to another in a single
/// operation. The destination role must already exist.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangeMemberRoleRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    /// Role the entities become members of. Role IDs are 1-64 characters.
    pub destination_role_id: Option<String>,
    pub group: Option<EntityKey>,
    /// Entities to move; all must currently be members of the origin role.
    pub members: Option<Vec<EntityKey>>,
    pub origin_role_id: Option<String>,
}

impl ToWire for ChangeMemberRoleRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("DestinationRoleId", &self.destination_role_id)
            .optional("Group", &self.group)
            .optional("Members", &self.members)
            .optional("OriginRoleId", &self.origin_role_id)
            .into_value()
    }
}

impl FromWire for ChangeMemberRoleRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            destination_role_id: obj.optional("DestinationRoleId")?,
            group: obj.optional("Group")?,
            members: obj.optional("Members")?,
            origin_role_id: obj.optional("OriginRoleId")?,
        })
    }
}

/// Creates a new group along with its administration and member roles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateGroupRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub entity: Option<EntityKey>,
    /// Name of the group, unique at the title level. Always present.
    pub group_name: String,
}

impl CreateGroupRequest {
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            ..Self::default()
        }
    }
}

impl ToWire for CreateGroupRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Entity", &self.entity)
            .field("GroupName", &self.group_name)
            .into_value()
    }
}

impl FromWire for CreateGroupRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            entity: obj.optional("Entity")?,
            group_name: obj.required("GroupName")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateGroupResponse {
    /// ID of the administrator role for the group.
    pub admin_role_id: Option<String>,
    /// Server time the group was created.
    pub created: Option<DateTime<Utc>>,
    pub group: Option<EntityKey>,
    pub group_name: Option<String>,
    /// ID of the default member role for the group.
    pub member_role_id: Option<String>,
    /// Version of the profile, usable for concurrency control on updates.
    pub profile_version: Option<i32>,
    /// Role IDs and names belonging to the group.
    pub roles: Option<HashMap<String, String>>,
}

impl ToWire for CreateGroupResponse {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("AdminRoleId", &self.admin_role_id)
            .optional("Created", &self.created)
            .optional("Group", &self.group)
            .optional("GroupName", &self.group_name)
            .optional("MemberRoleId", &self.member_role_id)
            .optional("ProfileVersion", &self.profile_version)
            .optional("Roles", &self.roles)
            .into_value()
    }
}

impl FromWire for CreateGroupResponse {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            admin_role_id: obj.optional("AdminRoleId")?,
            created: obj.optional("Created")?,
            group: obj.optional("Group")?,
            group_name: obj.optional("GroupName")?,
            member_role_id: obj.optional("MemberRoleId")?,
            profile_version: obj.optional("ProfileVersion")?,
            roles: obj.optional("Roles")?,
        })
    }
}

/// Creates a new role within an existing group, with no members. Role ID
/// and name must both be unique within the group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateGroupRoleRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub group: Option<EntityKey>,
    /// ID of the role; set at creation and immutable. 1-64 characters.
    pub role_id: Option<String>,
    /// Name of the role; changeable later. 1-100 characters.
    pub role_name: Option<String>,
}

impl ToWire for CreateGroupRoleRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Group", &self.group)
            .optional("RoleId", &self.role_id)
            .optional("RoleName", &self.role_name)
            .into_value()
    }
}

impl FromWire for CreateGroupRoleRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            group: obj.optional("Group")?,
            role_id: obj.optional("RoleId")?,
            role_name: obj.optional("RoleName")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateGroupRoleResponse {
    pub profile_version: Option<i32>,
    pub role_id: Option<String>,
    pub role_name: Option<String>,
}

impl ToWire for CreateGroupRoleResponse {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("ProfileVersion", &self.profile_version)
            .optional("RoleId", &self.role_id)
            .optional("RoleName", &self.role_name)
            .into_value()
    }
}

impl FromWire for CreateGroupRoleResponse {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            profile_version: obj.optional("ProfileVersion")?,
            role_id: obj.optional("RoleId")?,
            role_name: obj.optional("RoleName")?,
        })
    }
}

/// Deletes a group and all roles, invitations, join requests and blocks
/// associated with it. The group cannot be recovered once removed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteGroupRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    /// ID of the group to remove.
    pub group: Option<EntityKey>,
}

impl ToWire for DeleteGroupRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Group", &self.group)
            .into_value()
    }
}

impl FromWire for DeleteGroupRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            group: obj.optional("Group")?,
        })
    }
}

/// Deletes an existing role within a group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteRoleRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub group: Option<EntityKey>,
    pub role_id: Option<String>,
}

impl ToWire for DeleteRoleRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Group", &self.group)
            .optional("RoleId", &self.role_id)
            .into_value()
    }
}

impl FromWire for DeleteRoleRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            group: obj.optional("Group")?,
            role_id: obj.optional("RoleId")?,
        })
    }
}

/// A role and the members currently in it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityMemberRole {
    /// Members in the role.
    pub members: Option<Vec<EntityWithLineage>>,
    /// ID of the role.
    pub role_id: Option<String>,
    pub role_name: Option<String>,
}

impl Keyed for EntityMemberRole {
    fn sort_key(&self) -> Option<&str> {
        self.role_id.as_deref()
    }
}

impl ToWire for EntityMemberRole {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Members", &self.members)
            .optional("RoleId", &self.role_id)
            .optional("RoleName", &self.role_name)
            .into_value()
    }
}

impl FromWire for EntityMemberRole {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            members: obj.optional("Members")?,
            role_id: obj.optional("RoleId")?,
            role_name: obj.optional("RoleName")?,
        })
    }
}

/// Returns the ID, name, role list and other non-membership information
/// about a group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetGroupRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub group: Option<EntityKey>,
    /// Full name of the group, as an alternative to the entity key.
    pub group_name: Option<String>,
}

impl ToWire for GetGroupRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Group", &self.group)
            .optional("GroupName", &self.group_name)
            .into_value()
    }
}

impl FromWire for GetGroupRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            group: obj.optional("Group")?,
            group_name: obj.optional("GroupName")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetGroupResponse {
    pub admin_role_id: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub group: Option<EntityKey>,
    pub group_name: Option<String>,
    pub member_role_id: Option<String>,
    pub profile_version: Option<i32>,
    pub roles: Option<HashMap<String, String>>,
}

impl ToWire for GetGroupResponse {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("AdminRoleId", &self.admin_role_id)
            .optional("Created", &self.created)
            .optional("Group", &self.group)
            .optional("GroupName", &self.group_name)
            .optional("MemberRoleId", &self.member_role_id)
            .optional("ProfileVersion", &self.profile_version)
            .optional("Roles", &self.roles)
            .into_value()
    }
}

impl FromWire for GetGroupResponse {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            admin_role_id: obj.optional("AdminRoleId")?,
            created: obj.optional("Created")?,
            group: obj.optional("Group")?,
            group_name: obj.optional("GroupName")?,
            member_role_id: obj.optional("MemberRoleId")?,
            profile_version: obj.optional("ProfileVersion")?,
            roles: obj.optional("Roles")?,
        })
    }
}

/// Describes an application to join a group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupApplication {
    pub entity: Option<EntityWithLineage>,
    pub expires: Option<DateTime<Utc>>,
    pub group: Option<EntityKey>,
}

impl ToWire for GroupApplication {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Entity", &self.entity)
            .optional("Expires", &self.expires)
            .optional("Group", &self.group)
            .into_value()
    }
}

impl FromWire for GroupApplication {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            entity: obj.optional("Entity")?,
            expires: obj.optional("Expires")?,
            group: obj.optional("Group")?,
        })
    }
}

/// Describes an entity that is blocked from joining a group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupBlock {
    pub entity: Option<EntityWithLineage>,
    pub group: Option<EntityKey>,
}

impl ToWire for GroupBlock {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Entity", &self.entity)
            .optional("Group", &self.group)
            .into_value()
    }
}

impl FromWire for GroupBlock {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            entity: obj.optional("Entity")?,
            group: obj.optional("Group")?,
        })
    }
}

/// Describes an invitation to a group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupInvitation {
    pub expires: Option<DateTime<Utc>>,
    pub group: Option<EntityKey>,
    pub invited_by_entity: Option<EntityWithLineage>,
    pub invited_entity: Option<EntityWithLineage>,
    /// Role the invited entity is assigned to on acceptance.
    pub role_id: Option<String>,
}

impl ToWire for GroupInvitation {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Expires", &self.expires)
            .optional("Group", &self.group)
            .optional("InvitedByEntity", &self.invited_by_entity)
            .optional("InvitedEntity", &self.invited_entity)
            .optional("RoleId", &self.role_id)
            .into_value()
    }
}

impl FromWire for GroupInvitation {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            expires: obj.optional("Expires")?,
            group: obj.optional("Group")?,
            invited_by_entity: obj.optional("InvitedByEntity")?,
            invited_entity: obj.optional("InvitedEntity")?,
            role_id: obj.optional("RoleId")?,
        })
    }
}

/// Describes a group role.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupRole {
    pub role_id: Option<String>,
    pub role_name: Option<String>,
}

impl Keyed for GroupRole {
    fn sort_key(&self) -> Option<&str> {
        self.role_id.as_deref()
    }
}

impl ToWire for GroupRole {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("RoleId", &self.role_id)
            .optional("RoleName", &self.role_name)
            .into_value()
    }
}

impl FromWire for GroupRole {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            role_id: obj.optional("RoleId")?,
            role_name: obj.optional("RoleName")?,
        })
    }
}

/// Describes a group and the roles that it contains.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupWithRoles {
    pub group: Option<EntityKey>,
    pub group_name: Option<String>,
    pub profile_version: Option<i32>,
    /// Roles within the group; order carries no meaning.
    pub roles: Option<Unordered<GroupRole>>,
}

impl ToWire for GroupWithRoles {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Group", &self.group)
            .optional("GroupName", &self.group_name)
            .optional("ProfileVersion", &self.profile_version)
            .optional("Roles", &self.roles)
            .into_value()
    }
}

impl FromWire for GroupWithRoles {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            group: obj.optional("Group")?,
            group_name: obj.optional("GroupName")?,
            profile_version: obj.optional("ProfileVersion")?,
            roles: obj.optional("Roles")?,
        })
    }
}

/// Invites a player to join a group, optionally assigning a role on
/// acceptance. An outstanding application from the entity is accepted
/// instead by default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InviteToGroupRequest {
    /// Default true: accept an outstanding application if one exists.
    pub auto_accept_outstanding_application: Option<bool>,
    pub custom_tags: Option<HashMap<String, String>>,
    pub entity: Option<EntityKey>,
    pub group: Option<EntityKey>,
    pub role_id: Option<String>,
}

impl ToWire for InviteToGroupRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional(
                "AutoAcceptOutstandingApplication",
                &self.auto_accept_outstanding_application,
            )
            .optional("CustomTags", &self.custom_tags)
            .optional("Entity", &self.entity)
            .optional("Group", &self.group)
            .optional("RoleId", &self.role_id)
            .into_value()
    }
}

impl FromWire for InviteToGroupRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            auto_accept_outstanding_application: obj
                .optional("AutoAcceptOutstandingApplication")?,
            custom_tags: obj.optional("CustomTags")?,
            entity: obj.optional("Entity")?,
            group: obj.optional("Group")?,
            role_id: obj.optional("RoleId")?,
        })
    }
}

/// Describes the invitation created by `InviteToGroup`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InviteToGroupResponse {
    pub expires: Option<DateTime<Utc>>,
    pub group: Option<EntityKey>,
    pub invited_by_entity: Option<EntityWithLineage>,
    pub invited_entity: Option<EntityWithLineage>,
    pub role_id: Option<String>,
}

impl ToWire for InviteToGroupResponse {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Expires", &self.expires)
            .optional("Group", &self.group)
            .optional("InvitedByEntity", &self.invited_by_entity)
            .optional("InvitedEntity", &self.invited_entity)
            .optional("RoleId", &self.role_id)
            .into_value()
    }
}

impl FromWire for InviteToGroupResponse {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            expires: obj.optional("Expires")?,
            group: obj.optional("Group")?,
            invited_by_entity: obj.optional("InvitedByEntity")?,
            invited_entity: obj.optional("InvitedEntity")?,
            role_id: obj.optional("RoleId")?,
        })
    }
}

/// Checks whether an entity is a member of a group or of a specific role
/// within it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IsMemberRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub entity: Option<EntityKey>,
    pub group: Option<EntityKey>,
    /// Role to check; any role when not specified.
    pub role_id: Option<String>,
}

impl ToWire for IsMemberRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Entity", &self.entity)
            .optional("Group", &self.group)
            .optional("RoleId", &self.role_id)
            .into_value()
    }
}

impl FromWire for IsMemberRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            entity: obj.optional("Entity")?,
            group: obj.optional("Group")?,
            role_id: obj.optional("RoleId")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IsMemberResponse {
    pub is_member: Option<bool>,
}

impl ToWire for IsMemberResponse {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("IsMember", &self.is_member)
            .into_value()
    }
}

impl FromWire for IsMemberResponse {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            is_member: obj.optional("IsMember")?,
        })
    }
}

/// Lists all outstanding requests to join a group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListGroupApplicationsRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub group: Option<EntityKey>,
}

impl ToWire for ListGroupApplicationsRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Group", &self.group)
            .into_value()
    }
}

impl FromWire for ListGroupApplicationsRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            group: obj.optional("Group")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListGroupApplicationsResponse {
    pub applications: Option<Vec<GroupApplication>>,
}

impl ToWire for ListGroupApplicationsResponse {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Applications", &self.applications)
            .into_value()
    }
}

impl FromWire for ListGroupApplicationsResponse {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            applications: obj.optional("Applications")?,
        })
    }
}

/// Lists all entities blocked from joining a group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListGroupBlocksRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub group: Option<EntityKey>,
}

impl ToWire for ListGroupBlocksRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Group", &self.group)
            .into_value()
    }
}

impl FromWire for ListGroupBlocksRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            group: obj.optional("Group")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListGroupBlocksResponse {
    pub blocked_entities: Option<Vec<GroupBlock>>,
}

impl ToWire for ListGroupBlocksResponse {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("BlockedEntities", &self.blocked_entities)
            .into_value()
    }
}

impl FromWire for ListGroupBlocksResponse {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            blocked_entities: obj.optional("BlockedEntities")?,
        })
    }
}

/// Lists all outstanding invitations for a group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListGroupInvitationsRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub group: Option<EntityKey>,
}

impl ToWire for ListGroupInvitationsRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Group", &self.group)
            .into_value()
    }
}

impl FromWire for ListGroupInvitationsRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            group: obj.optional("Group")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListGroupInvitationsResponse {
    pub invitations: Option<Vec<GroupInvitation>>,
}

impl ToWire for ListGroupInvitationsResponse {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Invitations", &self.invitations)
            .into_value()
    }
}

impl FromWire for ListGroupInvitationsResponse {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            invitations: obj.optional("Invitations")?,
        })
    }
}

/// Gets a list of members and the roles they belong to within a group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListGroupMembersRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    /// ID of the group to list members and roles for.
    pub group: Option<EntityKey>,
}

impl ToWire for ListGroupMembersRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Group", &self.group)
            .into_value()
    }
}

impl FromWire for ListGroupMembersRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            group: obj.optional("Group")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListGroupMembersResponse {
    /// Roles and their member entities, unordered by role ID.
    pub members: Option<Unordered<EntityMemberRole>>,
}

impl ToWire for ListGroupMembersResponse {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Members", &self.members)
            .into_value()
    }
}

impl FromWire for ListGroupMembersResponse {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            members: obj.optional("Members")?,
        })
    }
}

/// Lists all outstanding applications and invitations for an entity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListMembershipOpportunitiesRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub entity: Option<EntityKey>,
}

impl ToWire for ListMembershipOpportunitiesRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Entity", &self.entity)
            .into_value()
    }
}

impl FromWire for ListMembershipOpportunitiesRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            entity: obj.optional("Entity")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListMembershipOpportunitiesResponse {
    pub applications: Option<Vec<GroupApplication>>,
    pub invitations: Option<Vec<GroupInvitation>>,
}

impl ToWire for ListMembershipOpportunitiesResponse {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Applications", &self.applications)
            .optional("Invitations", &self.invitations)
            .into_value()
    }
}

impl FromWire for ListMembershipOpportunitiesResponse {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            applications: obj.optional("Applications")?,
            invitations: obj.optional("Invitations")?,
        })
    }
}

/// Lists the groups and roles an entity is a part of.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListMembershipRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub entity: Option<EntityKey>,
}

impl ToWire for ListMembershipRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Entity", &self.entity)
            .into_value()
    }
}

impl FromWire for ListMembershipRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            entity: obj.optional("Entity")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListMembershipResponse {
    pub groups: Option<Vec<GroupWithRoles>>,
}

impl ToWire for ListMembershipResponse {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Groups", &self.groups)
            .into_value()
    }
}

impl FromWire for ListMembershipResponse {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            groups: obj.optional("Groups")?,
        })
    }
}

/// Outcome of a group or role update.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OperationTypes {
    Created,
    Updated,
    Deleted,
    None,
    /// Symbol added service-side after this SDK was generated.
    Unknown(String),
}

impl OperationTypes {
    pub fn as_symbol(&self) -> &str {
        match self {
            OperationTypes::Created => "Created",
            OperationTypes::Updated => "Updated",
            OperationTypes::Deleted => "Deleted",
            OperationTypes::None => "None",
            OperationTypes::Unknown(symbol) => symbol,
        }
    }

    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "Created" => OperationTypes::Created,
            "Updated" => OperationTypes::Updated,
            "Deleted" => OperationTypes::Deleted,
            "None" => OperationTypes::None,
            other => OperationTypes::Unknown(other.to_string()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, OperationTypes::Unknown(_))
    }
}

impl ToWire for OperationTypes {
    fn to_wire(&self) -> WireValue {
        WireValue::String(self.as_symbol().to_string())
    }
}

impl FromWire for OperationTypes {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let symbol = value
            .as_str()
            .ok_or_else(|| type_mismatch(path, SemanticKind::EnumSymbol, value))?;
        let parsed = Self::from_symbol(symbol);
        if parsed.is_unknown() {
            log::warn!("unrecognized OperationTypes symbol '{}' at '{}'", symbol, path);
        }
        Ok(parsed)
    }
}

/// Rejects or withdraws an existing application to join the group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RemoveGroupApplicationRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub entity: Option<EntityKey>,
    pub group: Option<EntityKey>,
}

impl ToWire for RemoveGroupApplicationRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Entity", &self.entity)
            .optional("Group", &self.group)
            .into_value()
    }
}

impl FromWire for RemoveGroupApplicationRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            entity: obj.optional("Entity")?,
            group: obj.optional("Group")?,
        })
    }
}

/// Rejects or rescinds an existing invitation to join the group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RemoveGroupInvitationRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub entity: Option<EntityKey>,
    pub group: Option<EntityKey>,
}

impl ToWire for RemoveGroupInvitationRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Entity", &self.entity)
            .optional("Group", &self.group)
            .into_value()
    }
}

impl FromWire for RemoveGroupInvitationRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            entity: obj.optional("Entity")?,
            group: obj.optional("Group")?,
        })
    }
}

/// Removes members from a group. Members can always remove themselves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RemoveMembersRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub group: Option<EntityKey>,
    pub members: Option<Vec<EntityKey>>,
    /// Role to remove the entities from; the whole group when omitted.
    pub role_id: Option<String>,
}

impl ToWire for RemoveMembersRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Group", &self.group)
            .optional("Members", &self.members)
            .optional("RoleId", &self.role_id)
            .into_value()
    }
}

impl FromWire for RemoveMembersRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            group: obj.optional("Group")?,
            members: obj.optional("Members")?,
            role_id: obj.optional("RoleId")?,
        })
    }
}

/// Unblocks a list of entities from joining a group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnblockEntityRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub entity: Option<EntityKey>,
    pub group: Option<EntityKey>,
}

impl ToWire for UnblockEntityRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("Entity", &self.entity)
            .optional("Group", &self.group)
            .into_value()
    }
}

impl FromWire for UnblockEntityRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            entity: obj.optional("Entity")?,
            group: obj.optional("Group")?,
        })
    }
}

/// Updates group metadata such as the name or the default member role.
/// Only title claimants may modify the administration role.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateGroupRequest {
    /// Existing role to set as the new administrator role.
    pub admin_role_id: Option<String>,
    pub custom_tags: Option<HashMap<String, String>>,
    /// Concurrency control: update only applies when the group still has
    /// this profile version.
    pub expected_profile_version: Option<i32>,
    pub group: Option<EntityKey>,
    pub group_name: Option<String>,
    /// Existing role to set as the new default member role.
    pub member_role_id: Option<String>,
}

impl ToWire for UpdateGroupRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("AdminRoleId", &self.admin_role_id)
            .optional("CustomTags", &self.custom_tags)
            .optional("ExpectedProfileVersion", &self.expected_profile_version)
            .optional("Group", &self.group)
            .optional("GroupName", &self.group_name)
            .optional("MemberRoleId", &self.member_role_id)
            .into_value()
    }
}

impl FromWire for UpdateGroupRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            admin_role_id: obj.optional("AdminRoleId")?,
            custom_tags: obj.optional("CustomTags")?,
            expected_profile_version: obj.optional("ExpectedProfileVersion")?,
            group: obj.optional("Group")?,
            group_name: obj.optional("GroupName")?,
            member_role_id: obj.optional("MemberRoleId")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateGroupResponse {
    /// Reason the operation produced the result it did.
    pub operation_reason: Option<String>,
    pub profile_version: Option<i32>,
    pub set_result: Option<OperationTypes>,
}

impl ToWire for UpdateGroupResponse {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("OperationReason", &self.operation_reason)
            .optional("ProfileVersion", &self.profile_version)
            .optional("SetResult", &self.set_result)
            .into_value()
    }
}

impl FromWire for UpdateGroupResponse {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            operation_reason: obj.optional("OperationReason")?,
            profile_version: obj.optional("ProfileVersion")?,
            set_result: obj.optional("SetResult")?,
        })
    }
}

/// Updates the name of a role.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateGroupRoleRequest {
    pub custom_tags: Option<HashMap<String, String>>,
    pub expected_profile_version: Option<i32>,
    pub group: Option<EntityKey>,
    pub role_id: Option<String>,
    pub role_name: Option<String>,
}

impl ToWire for UpdateGroupRoleRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CustomTags", &self.custom_tags)
            .optional("ExpectedProfileVersion", &self.expected_profile_version)
            .optional("Group", &self.group)
            .optional("RoleId", &self.role_id)
            .optional("RoleName", &self.role_name)
            .into_value()
    }
}

impl FromWire for UpdateGroupRoleRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            custom_tags: obj.optional("CustomTags")?,
            expected_profile_version: obj.optional("ExpectedProfileVersion")?,
            group: obj.optional("Group")?,
            role_id: obj.optional("RoleId")?,
            role_name: obj.optional("RoleName")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateGroupRoleResponse {
    pub operation_reason: Option<String>,
    pub profile_version: Option<i32>,
    pub set_result: Option<OperationTypes>,
}

impl ToWire for UpdateGroupRoleResponse {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("OperationReason", &self.operation_reason)
            .optional("ProfileVersion", &self.profile_version)
            .optional("SetResult", &self.set_result)
            .into_value()
    }
}

impl FromWire for UpdateGroupRoleResponse {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            operation_reason: obj.optional("OperationReason")?,
            profile_version: obj.optional("ProfileVersion")?,
            set_result: obj.optional("SetResult")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{decode, encode};
    use serde_json::json;

    #[test]
    fn test_create_group_request_omits_absent_optionals() {
        let request = CreateGroupRequest::new("Raiders");
        assert_eq!(encode(&request), json!({"GroupName": "Raiders"}));
    }

    #[test]
    fn test_operation_types_symbol_table() {
        assert_eq!(OperationTypes::from_symbol("Updated"), OperationTypes::Updated);
        assert_eq!(OperationTypes::Updated.as_symbol(), "Updated");

        let future = OperationTypes::from_symbol("Archived");
        assert!(future.is_unknown());
        assert_eq!(future.as_symbol(), "Archived");
    }

    #[test]
    fn test_unknown_set_result_round_trips() {
        let wire = json!({"ProfileVersion": 4, "SetResult": "Archived"});
        let response: UpdateGroupResponse = decode(&wire).unwrap();
        assert_eq!(
            response.set_result,
            Some(OperationTypes::Unknown("Archived".to_string()))
        );
        assert_eq!(encode(&response), wire);
    }

    #[test]
    fn test_member_list_error_path() {
        let wire = json!({
            "Members": [
                {"RoleId": "admin"},
                {"RoleId": "member", "Members": [{"Key": {"Type": "character"}}]}
            ]
        });
        let error = decode::<ListGroupMembersResponse>(&wire).unwrap_err();
        assert_eq!(error.path(), "Members[1].Members[0].Key.Id");
    }
}
