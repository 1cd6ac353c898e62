use crate::error::Result;
use crate::wire::{
    type_mismatch, FromWire, SemanticKind, ToWire, WireFields, WireObject, WireValue,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Visibility of a custom user-data key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserDataPermission {
    Private,
    Public,
    /// Symbol added service-side after this SDK was generated.
    Unknown(String),
}

impl UserDataPermission {
    pub fn as_symbol(&self) -> &str {
        match self {
            UserDataPermission::Private => "Private",
            UserDataPermission::Public => "Public",
            UserDataPermission::Unknown(symbol) => symbol,
        }
    }

    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "Private" => UserDataPermission::Private,
            "Public" => UserDataPermission::Public,
            other => UserDataPermission::Unknown(other.to_string()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, UserDataPermission::Unknown(_))
    }
}

impl ToWire for UserDataPermission {
    fn to_wire(&self) -> WireValue {
        WireValue::String(self.as_symbol().to_string())
    }
}

impl FromWire for UserDataPermission {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let symbol = value
            .as_str()
            .ok_or_else(|| type_mismatch(path, SemanticKind::EnumSymbol, value))?;
        let parsed = Self::from_symbol(symbol);
        if parsed.is_unknown() {
            log::warn!(
                "unrecognized UserDataPermission symbol '{}' at '{}'",
                symbol,
                path
            );
        }
        Ok(parsed)
    }
}

/// A single custom user-data value and its metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserDataRecord {
    /// When this value was last updated.
    pub last_updated: Option<DateTime<Utc>>,
    /// Whether other players can read this value.
    pub permission: Option<UserDataPermission>,
    pub value: Option<String>,
}

impl ToWire for UserDataRecord {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("LastUpdated", &self.last_updated)
            .optional("Permission", &self.permission)
            .optional("Value", &self.value)
            .into_value()
    }
}

impl FromWire for UserDataRecord {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            last_updated: obj.optional("LastUpdated")?,
            permission: obj.optional("Permission")?,
            value: obj.optional("Value")?,
        })
    }
}

/// Fetches custom data for a player.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetUserDataRequest {
    /// Data is only returned when the stored version is greater than this.
    pub if_changed_from_data_version: Option<i64>,
    /// Specific keys to fetch; all keys when omitted.
    pub keys: Option<Vec<String>>,
    /// Service-assigned ID of the player.
    pub player_id: Option<String>,
}

impl ToWire for GetUserDataRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional(
                "IfChangedFromDataVersion",
                &self.if_changed_from_data_version,
            )
            .optional("Keys", &self.keys)
            .optional("PlayerId", &self.player_id)
            .into_value()
    }
}

impl FromWire for GetUserDataRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            if_changed_from_data_version: obj.optional("IfChangedFromDataVersion")?,
            keys: obj.optional("Keys")?,
            player_id: obj.optional("PlayerId")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetUserDataResult {
    pub data: Option<HashMap<String, UserDataRecord>>,
    /// Incremented with every write; usable in later fetches to detect
    /// updated data.
    pub data_version: Option<i64>,
    pub player_id: Option<String>,
}

impl ToWire for GetUserDataResult {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Data", &self.data)
            .optional("DataVersion", &self.data_version)
            .optional("PlayerId", &self.player_id)
            .into_value()
    }
}

impl FromWire for GetUserDataResult {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            data: obj.optional("Data")?,
            data_version: obj.optional("DataVersion")?,
            player_id: obj.optional("PlayerId")?,
        })
    }
}

/// Writes custom data for a player.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateUserDataRequest {
    /// Key-value pairs to write. Keys are trimmed of whitespace, limited
    /// in size and may not begin with `!`.
    pub data: Option<HashMap<String, String>>,
    /// Keys to delete directly. Exists because some SDK languages cannot
    /// put nulls into `Data`.
    pub keys_to_remove: Option<Vec<String>>,
    /// Permission applied to every key written by this request; private
    /// when omitted.
    pub permission: Option<UserDataPermission>,
    pub player_id: Option<String>,
}

impl ToWire for UpdateUserDataRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Data", &self.data)
            .optional("KeysToRemove", &self.keys_to_remove)
            .optional("Permission", &self.permission)
            .optional("PlayerId", &self.player_id)
            .into_value()
    }
}

impl FromWire for UpdateUserDataRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            data: obj.optional("Data")?,
            keys_to_remove: obj.optional("KeysToRemove")?,
            permission: obj.optional("Permission")?,
            player_id: obj.optional("PlayerId")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateUserDataResult {
    pub data_version: Option<i64>,
}

impl ToWire for UpdateUserDataResult {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("DataVersion", &self.data_version)
            .into_value()
    }
}

impl FromWire for UpdateUserDataResult {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            data_version: obj.optional("DataVersion")?,
        })
    }
}

/// A single ban to apply.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BanRequest {
    /// Duration in hours; permanent when omitted.
    pub duration_in_hours: Option<i64>,
    /// IP address to ban. May affect multiple players.
    pub ip_address: Option<String>,
    /// MAC address to ban. May affect multiple players.
    pub mac_address: Option<String>,
    pub player_id: Option<String>,
    /// Reason for the ban, 140 characters at most.
    pub reason: Option<String>,
}

impl ToWire for BanRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("DurationInHours", &self.duration_in_hours)
            .optional("IPAddress", &self.ip_address)
            .optional("MACAddress", &self.mac_address)
            .optional("PlayerId", &self.player_id)
            .optional("Reason", &self.reason)
            .into_value()
    }
}

impl FromWire for BanRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            duration_in_hours: obj.optional("DurationInHours")?,
            ip_address: obj.optional("IPAddress")?,
            mac_address: obj.optional("MACAddress")?,
            player_id: obj.optional("PlayerId")?,
            reason: obj.optional("Reason")?,
        })
    }
}

/// Information for an applied ban.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BanInfo {
    /// Whether the ban is in force. Expired bans may still read true but
    /// have no effect.
    pub active: Option<bool>,
    pub ban_id: Option<String>,
    pub created: Option<DateTime<Utc>>,
    /// Expiry time; permanent bans have none.
    pub expires: Option<DateTime<Utc>>,
    pub ip_address: Option<String>,
    pub mac_address: Option<String>,
    pub player_id: Option<String>,
    pub reason: Option<String>,
}

impl ToWire for BanInfo {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Active", &self.active)
            .optional("BanId", &self.ban_id)
            .optional("Created", &self.created)
            .optional("Expires", &self.expires)
            .optional("IPAddress", &self.ip_address)
            .optional("MACAddress", &self.mac_address)
            .optional("PlayerId", &self.player_id)
            .optional("Reason", &self.reason)
            .into_value()
    }
}

impl FromWire for BanInfo {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            active: obj.optional("Active")?,
            ban_id: obj.optional("BanId")?,
            created: obj.optional("Created")?,
            expires: obj.optional("Expires")?,
            ip_address: obj.optional("IPAddress")?,
            mac_address: obj.optional("MACAddress")?,
            player_id: obj.optional("PlayerId")?,
            reason: obj.optional("Reason")?,
        })
    }
}

/// Applies a list of bans. 100 at most per request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BanUsersRequest {
    pub bans: Option<Vec<BanRequest>>,
}

impl ToWire for BanUsersRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new().optional("Bans", &self.bans).into_value()
    }
}

impl FromWire for BanUsersRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            bans: obj.optional("Bans")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BanUsersResult {
    pub ban_data: Option<Vec<BanInfo>>,
}

impl ToWire for BanUsersResult {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("BanData", &self.ban_data)
            .into_value()
    }
}

impl FromWire for BanUsersResult {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            ban_data: obj.optional("BanData")?,
        })
    }
}

/// Lists all bans for a player.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetUserBansRequest {
    pub player_id: Option<String>,
}

impl ToWire for GetUserBansRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("PlayerId", &self.player_id)
            .into_value()
    }
}

impl FromWire for GetUserBansRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            player_id: obj.optional("PlayerId")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetUserBansResult {
    pub ban_data: Option<Vec<BanInfo>>,
}

impl ToWire for GetUserBansResult {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("BanData", &self.ban_data)
            .into_value()
    }
}

impl FromWire for GetUserBansResult {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            ban_data: obj.optional("BanData")?,
        })
    }
}
