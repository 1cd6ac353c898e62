use crate::error::Result;
use crate::wire::{FromWire, ToWire, WireFields, WireObject, WireValue};
use std::collections::HashMap;

/// Combined entity type and ID structure which uniquely identifies a
/// single entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityKey {
    /// Unique ID of the entity. Always present.
    pub id: String,
    /// Entity type (e.g. `title_player_account`, `character`).
    pub entity_type: Option<String>,
}

impl EntityKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entity_type: None,
        }
    }

    pub fn with_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }
}

impl ToWire for EntityKey {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .field("Id", &self.id)
            .optional("Type", &self.entity_type)
            .into_value()
    }
}

impl FromWire for EntityKey {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            id: obj.required("Id")?,
            entity_type: obj.optional("Type")?,
        })
    }
}

/// Entity key plus the keys of the entities that make up its lineage,
/// keyed by entity type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityWithLineage {
    pub key: Option<EntityKey>,
    pub lineage: Option<HashMap<String, EntityKey>>,
}

impl ToWire for EntityWithLineage {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Key", &self.key)
            .optional("Lineage", &self.lineage)
            .into_value()
    }
}

impl FromWire for EntityWithLineage {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            key: obj.optional("Key")?,
            lineage: obj.optional("Lineage")?,
        })
    }
}

/// Identifier by ID or by name; operations that accept one require at
/// least one of the two to be set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameIdentifier {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl NameIdentifier {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

impl ToWire for NameIdentifier {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Id", &self.id)
            .optional("Name", &self.name)
            .into_value()
    }
}

impl FromWire for NameIdentifier {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            id: obj.optional("Id")?,
            name: obj.optional("Name")?,
        })
    }
}

/// Response carrying no data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmptyResponse {}

impl ToWire for EmptyResponse {
    fn to_wire(&self) -> WireValue {
        WireFields::new().into_value()
    }
}

impl FromWire for EmptyResponse {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        WireObject::new(value, path)?;
        Ok(Self {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::wire::{decode, encode};
    use serde_json::json;

    #[test]
    fn test_entity_key_round_trip() {
        let key = EntityKey::new("ABCD1234").with_type("title_player_account");
        let wire = encode(&key);
        assert_eq!(
            wire,
            json!({"Id": "ABCD1234", "Type": "title_player_account"})
        );
        assert_eq!(decode::<EntityKey>(&wire).unwrap(), key);
    }

    #[test]
    fn test_entity_key_requires_id() {
        let error = decode::<EntityKey>(&json!({"Type": "group"})).unwrap_err();
        assert_eq!(
            error,
            DecodeError::MissingRequiredField {
                path: "Id".to_string()
            }
        );
    }

    #[test]
    fn test_lineage_paths_compose() {
        let wire = json!({
            "Key": {"Id": "E1"},
            "Lineage": {"title": {"Type": "title"}}
        });
        let error = decode::<EntityWithLineage>(&wire).unwrap_err();
        assert_eq!(error.path(), "Lineage.title.Id");
    }

    #[test]
    fn test_empty_response_encodes_empty_object() {
        assert_eq!(encode(&EmptyResponse {}), json!({}));
    }

    #[test]
    fn test_name_identifier_encodes_only_set_half() {
        assert_eq!(
            encode(&NameIdentifier::by_name("DailyReward")),
            json!({"Name": "DailyReward"})
        );
    }
}
