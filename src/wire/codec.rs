use crate::error::{DecodeError, Result};
use crate::wire::settable::Settable;
use crate::wire::{SemanticKind, WireKind};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Wire representation of every model: a JSON-shaped tree of maps, arrays,
/// scalars and null, independent of any host-language type.
pub type WireValue = Value;

/// Fixed wire format for timestamps: RFC 3339 UTC with millisecond
/// precision, regardless of the host platform's native date representation.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Pure conversion of a model into its wire value.
pub trait ToWire {
    fn to_wire(&self) -> WireValue;
}

/// Pure conversion of a wire value into a model.
///
/// `path` is the dotted/indexed location of `value` inside the enclosing
/// document and is threaded into every [`DecodeError`].
pub trait FromWire: Sized {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self>;
}

/// Encode a model into a wire value ready for JSON serialization.
pub fn encode<T: ToWire>(model: &T) -> WireValue {
    model.to_wire()
}

/// Decode a model from an already-parsed wire value.
///
/// Decoding aborts on the first error; there is no best-effort partial
/// decode. Wire fields not declared by the target model are dropped.
pub fn decode<T: FromWire>(value: &WireValue) -> Result<T> {
    T::from_wire(value, "")
}

/// Append a field segment to a path (`Group` + `Id` -> `Group.Id`).
pub fn join_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", parent, field)
    }
}

/// Append an array index segment to a path (`Members` + 2 -> `Members[2]`).
pub fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

/// Build the standard shape-mismatch error for a wire value.
pub fn type_mismatch(path: &str, expected: SemanticKind, actual: &WireValue) -> DecodeError {
    DecodeError::TypeMismatch {
        path: path.to_string(),
        expected,
        actual: WireKind::of(actual),
    }
}

impl ToWire for String {
    fn to_wire(&self) -> WireValue {
        Value::String(self.clone())
    }
}

impl FromWire for String {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| type_mismatch(path, SemanticKind::String, value))
    }
}

impl ToWire for bool {
    fn to_wire(&self) -> WireValue {
        Value::Bool(*self)
    }
}

impl FromWire for bool {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| type_mismatch(path, SemanticKind::Boolean, value))
    }
}

impl ToWire for i32 {
    fn to_wire(&self) -> WireValue {
        Value::from(*self)
    }
}

impl FromWire for i32 {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| type_mismatch(path, SemanticKind::Integer, value))
    }
}

impl ToWire for i64 {
    fn to_wire(&self) -> WireValue {
        Value::from(*self)
    }
}

impl FromWire for i64 {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| type_mismatch(path, SemanticKind::Integer, value))
    }
}

impl ToWire for f64 {
    fn to_wire(&self) -> WireValue {
        Value::from(*self)
    }
}

impl FromWire for f64 {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| type_mismatch(path, SemanticKind::Float, value))
    }
}

impl ToWire for DateTime<Utc> {
    fn to_wire(&self) -> WireValue {
        Value::String(self.format(TIMESTAMP_FORMAT).to_string())
    }
}

impl FromWire for DateTime<Utc> {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let text = value
            .as_str()
            .ok_or_else(|| type_mismatch(path, SemanticKind::Timestamp, value))?;
        DateTime::parse_from_rfc3339(text)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|_| type_mismatch(path, SemanticKind::Timestamp, value))
    }
}

/// Opaque passthrough for fields whose shape the schema leaves open
/// (e.g. a CloudScript function argument).
impl ToWire for WireValue {
    fn to_wire(&self) -> WireValue {
        self.clone()
    }
}

impl FromWire for WireValue {
    fn from_wire(value: &WireValue, _path: &str) -> Result<Self> {
        Ok(value.clone())
    }
}

impl<T: ToWire> ToWire for Vec<T> {
    fn to_wire(&self) -> WireValue {
        Value::Array(self.iter().map(ToWire::to_wire).collect())
    }
}

impl<T: FromWire> FromWire for Vec<T> {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| type_mismatch(path, SemanticKind::Array, value))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_wire(item, &index_path(path, index)))
            .collect()
    }
}

impl<T: ToWire> ToWire for HashMap<String, T> {
    fn to_wire(&self) -> WireValue {
        let mut map = Map::new();
        for (key, item) in self {
            map.insert(key.clone(), item.to_wire());
        }
        Value::Object(map)
    }
}

impl<T: FromWire> FromWire for HashMap<String, T> {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let entries = value
            .as_object()
            .ok_or_else(|| type_mismatch(path, SemanticKind::Map, value))?;
        entries
            .iter()
            .map(|(key, item)| {
                T::from_wire(item, &join_path(path, key)).map(|decoded| (key.clone(), decoded))
            })
            .collect()
    }
}

/// Reader over a wire object during decode. Resolves fields by their exact
/// wire name and tracks the field path for error reporting.
pub struct WireObject<'a> {
    map: &'a Map<String, Value>,
    path: &'a str,
}

impl<'a> WireObject<'a> {
    pub fn new(value: &'a WireValue, path: &'a str) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            other => Err(type_mismatch(path, SemanticKind::Object, other)),
        }
    }

    /// Decode a field the schema marks as always-present.
    /// Absence is `MissingRequiredField`; an explicit null is a shape error.
    pub fn required<T: FromWire>(&self, name: &str) -> Result<T> {
        match self.map.get(name) {
            Some(value) => T::from_wire(value, &self.field_path(name)),
            None => Err(DecodeError::MissingRequiredField {
                path: self.field_path(name),
            }),
        }
    }

    /// Decode a two-state optional field. Absent and explicit null both
    /// decode to `None`; a present value of the wrong shape is an error.
    pub fn optional<T: FromWire>(&self, name: &str) -> Result<Option<T>> {
        match self.map.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::from_wire(value, &self.field_path(name)).map(Some),
        }
    }

    /// Decode a three-state optional field, preserving the distinction
    /// between an absent key and an explicit null.
    pub fn settable<T: FromWire>(&self, name: &str) -> Result<Settable<T>> {
        match self.map.get(name) {
            None => Ok(Settable::Absent),
            Some(Value::Null) => Ok(Settable::Null),
            Some(value) => T::from_wire(value, &self.field_path(name)).map(Settable::Value),
        }
    }

    /// Raw access to a field's wire value, if the key is present.
    pub fn raw(&self, name: &str) -> Option<&'a WireValue> {
        self.map.get(name)
    }

    pub fn field_path(&self, name: &str) -> String {
        join_path(self.path, name)
    }
}

/// Builder for the wire object produced by encode. Fields whose value is
/// absent are omitted entirely, never emitted as null.
#[derive(Debug, Default)]
pub struct WireFields {
    map: Map<String, Value>,
}

impl WireFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit an always-present field.
    pub fn field<T: ToWire>(mut self, name: &str, value: &T) -> Self {
        self.map.insert(name.to_string(), value.to_wire());
        self
    }

    /// Emit a two-state optional field only when it holds a value.
    pub fn optional<T: ToWire>(mut self, name: &str, value: &Option<T>) -> Self {
        if let Some(present) = value {
            self.map.insert(name.to_string(), present.to_wire());
        }
        self
    }

    /// Emit a three-state field: omitted when absent, `null` when the
    /// caller asked for a server-side clear, the value otherwise.
    pub fn settable<T: ToWire>(mut self, name: &str, value: &Settable<T>) -> Self {
        match value {
            Settable::Absent => {}
            Settable::Null => {
                self.map.insert(name.to_string(), Value::Null);
            }
            Settable::Value(present) => {
                self.map.insert(name.to_string(), present.to_wire());
            }
        }
        self
    }

    pub fn into_value(self) -> WireValue {
        Value::Object(self.map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_scalar_round_trip() {
        assert_eq!(String::from_wire(&json!("abc"), "").unwrap(), "abc");
        assert_eq!(bool::from_wire(&json!(true), "").unwrap(), true);
        assert_eq!(i32::from_wire(&json!(7), "").unwrap(), 7);
        assert_eq!(i64::from_wire(&json!(-9), "").unwrap(), -9);
        assert_eq!(f64::from_wire(&json!(2.5), "").unwrap(), 2.5);
        assert_eq!(f64::from_wire(&json!(3), "").unwrap(), 3.0);
    }

    #[test]
    fn test_integer_rejects_fractional() {
        let error = i32::from_wire(&json!(1.5), "ProfileVersion").unwrap_err();
        assert_eq!(
            error,
            DecodeError::TypeMismatch {
                path: "ProfileVersion".to_string(),
                expected: SemanticKind::Integer,
                actual: WireKind::Number,
            }
        );
    }

    #[test]
    fn test_timestamp_fixed_format() {
        let instant = Utc.with_ymd_and_hms(2023, 4, 5, 6, 7, 8).unwrap();
        assert_eq!(instant.to_wire(), json!("2023-04-05T06:07:08.000Z"));

        let decoded = DateTime::<Utc>::from_wire(&json!("2023-04-05T06:07:08.000Z"), "").unwrap();
        assert_eq!(decoded, instant);
    }

    #[test]
    fn test_timestamp_normalizes_offset_to_utc() {
        let decoded =
            DateTime::<Utc>::from_wire(&json!("2023-04-05T08:07:08.000+02:00"), "").unwrap();
        assert_eq!(decoded.to_wire(), json!("2023-04-05T06:07:08.000Z"));
    }

    #[test]
    fn test_malformed_timestamp_reports_semantic_kind() {
        let error = DateTime::<Utc>::from_wire(&json!("yesterday"), "Created").unwrap_err();
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
    fn test_array_error_carries_index_path() {
        let error = Vec::<String>::from_wire(&json!(["a", 2, "c"]), "Keys").unwrap_err();
        assert_eq!(error.path(), "Keys[1]");
    }

    #[test]
    fn test_map_error_carries_key_path() {
        let error =
            HashMap::<String, i32>::from_wire(&json!({"gold": 10, "gems": "lots"}), "Balances")
                .unwrap_err();
        assert_eq!(error.path(), "Balances.gems");
    }

    #[test]
    fn test_wire_object_required_vs_optional() {
        let value = json!({"Id": "abc", "Type": null});
        let obj = WireObject::new(&value, "").unwrap();

        assert_eq!(obj.required::<String>("Id").unwrap(), "abc");
        assert_eq!(obj.optional::<String>("Type").unwrap(), None);
        assert_eq!(obj.optional::<String>("Missing").unwrap(), None);

        let error = obj.required::<String>("Missing").unwrap_err();
        assert_eq!(
            error,
            DecodeError::MissingRequiredField {
                path: "Missing".to_string()
            }
        );
    }

    #[test]
    fn test_wire_fields_omits_absent_optionals() {
        let value = WireFields::new()
            .field("GroupName", &"Raiders".to_string())
            .optional::<String>("RoleId", &None)
            .into_value();
        assert_eq!(value, json!({"GroupName": "Raiders"}));
    }

    #[test]
    fn test_nested_paths_compose() {
        assert_eq!(join_path("", "GroupName"), "GroupName");
        assert_eq!(join_path("Group", "Id"), "Group.Id");
        assert_eq!(index_path("Members", 2), "Members[2]");
        assert_eq!(join_path(&index_path("Members", 2), "Id"), "Members[2].Id");
    }
}
