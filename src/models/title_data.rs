use crate::error::Result;
use crate::wire::{FromWire, Settable, ToWire, WireFields, WireObject, WireValue};
use std::collections::HashMap;

/// Requests title-wide key-value data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetTitleDataRequest {
    /// Specific keys to fetch; all keys when omitted.
    pub keys: Option<Vec<String>>,
}

impl ToWire for GetTitleDataRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new().optional("Keys", &self.keys).into_value()
    }
}

impl FromWire for GetTitleDataRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            keys: obj.optional("Keys")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetTitleDataResult {
    pub data: Option<HashMap<String, String>>,
}

impl ToWire for GetTitleDataResult {
    fn to_wire(&self) -> WireValue {
        WireFields::new().optional("Data", &self.data).into_value()
    }
}

impl FromWire for GetTitleDataResult {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            data: obj.optional("Data")?,
        })
    }
}

/// Sets a single title-data key. The write is additive: existing keys are
/// only replaced when the name matches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetTitleDataRequest {
    /// Key to set. Keys are trimmed of whitespace and may not begin
    /// with `!`.
    pub key: Option<String>,
    /// New value. Send an explicit null to remove the value; omit the
    /// field to leave it untouched.
    pub value: Settable<String>,
}

impl SetTitleDataRequest {
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Settable::Value(value.into()),
        }
    }

    /// Request removal of the key's value server-side.
    pub fn clear(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Settable::Null,
        }
    }
}

impl ToWire for SetTitleDataRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Key", &self.key)
            .settable("Value", &self.value)
            .into_value()
    }
}

impl FromWire for SetTitleDataRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            key: obj.optional("Key")?,
            value: obj.settable("Value")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetTitleDataResult {}

impl ToWire for SetTitleDataResult {
    fn to_wire(&self) -> WireValue {
        WireFields::new().into_value()
    }
}

impl FromWire for SetTitleDataResult {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        WireObject::new(value, path)?;
        Ok(Self {})
    }
}

/// Sets a single publisher-data key shared by all titles of the publisher.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetPublisherDataRequest {
    pub key: Option<String>,
    /// New value. Send an explicit null to remove the value; omit the
    /// field to leave it untouched.
    pub value: Settable<String>,
}

impl ToWire for SetPublisherDataRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Key", &self.key)
            .settable("Value", &self.value)
            .into_value()
    }
}

impl FromWire for SetPublisherDataRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            key: obj.optional("Key")?,
            value: obj.settable("Value")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetPublisherDataResult {}

impl ToWire for SetPublisherDataResult {
    fn to_wire(&self) -> WireValue {
        WireFields::new().into_value()
    }
}

impl FromWire for SetPublisherDataResult {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        WireObject::new(value, path)?;
        Ok(Self {})
    }
}
