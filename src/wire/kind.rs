use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Shape of a raw wire value as observed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl WireKind {
    /// Classify a parsed wire value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => WireKind::Null,
            Value::Bool(_) => WireKind::Boolean,
            Value::Number(_) => WireKind::Number,
            Value::String(_) => WireKind::String,
            Value::Array(_) => WireKind::Array,
            Value::Object(_) => WireKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WireKind::Null => "null",
            WireKind::Boolean => "boolean",
            WireKind::Number => "number",
            WireKind::String => "string",
            WireKind::Array => "array",
            WireKind::Object => "object",
        }
    }
}

impl fmt::Display for WireKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Semantic type a field is declared with, independent of wire shape.
///
/// `Timestamp` and `EnumSymbol` both travel as strings on the wire; the
/// distinction is what error messages report when the shape is wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemanticKind {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
    EnumSymbol,
    Object,
    Array,
    Map,
}

impl SemanticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticKind::String => "string",
            SemanticKind::Integer => "integer",
            SemanticKind::Float => "number",
            SemanticKind::Boolean => "boolean",
            SemanticKind::Timestamp => "timestamp",
            SemanticKind::EnumSymbol => "enum symbol",
            SemanticKind::Object => "object",
            SemanticKind::Array => "array",
            SemanticKind::Map => "map",
        }
    }
}

impl fmt::Display for SemanticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
