use crate::wire::{SemanticKind, WireKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decode failure raised by the wire layer (exact SwiftAtlas parity).
///
/// Every variant carries the path of the offending field in dotted/indexed
/// form (e.g. `Group.Members[2].Key.Id`) so callers never see a generic
/// parse failure with no location information.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DecodeError {
    #[error("missing required field '{path}'")]
    MissingRequiredField { path: String },

    #[error("type mismatch at '{path}': expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: SemanticKind,
        actual: WireKind,
    },

    #[error("unknown discriminator '{symbol}' at '{path}': payload cannot be routed to a known shape")]
    UnknownDiscriminator { path: String, symbol: String },

    #[error("malformed enum value '{symbol}' at '{path}'")]
    MalformedEnumValue { path: String, symbol: String },
}

impl DecodeError {
    /// Path of the field the decode failed on.
    pub fn path(&self) -> &str {
        match self {
            DecodeError::MissingRequiredField { path } => path,
            DecodeError::TypeMismatch { path, .. } => path,
            DecodeError::UnknownDiscriminator { path, .. } => path,
            DecodeError::MalformedEnumValue { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_path() {
        let error = DecodeError::MissingRequiredField {
            path: "Group.Id".to_string(),
        };
        assert_eq!(error.to_string(), "missing required field 'Group.Id'");
    }

    #[test]
    fn test_type_mismatch_display() {
        let error = DecodeError::TypeMismatch {
            path: "Members[2].Key.Id".to_string(),
            expected: SemanticKind::String,
            actual: WireKind::Number,
        };
        assert_eq!(
            error.to_string(),
            "type mismatch at 'Members[2].Key.Id': expected string, got number"
        );
        assert_eq!(error.path(), "Members[2].Key.Id");
    }

    #[test]
    fn test_error_serialization() {
        let error = DecodeError::UnknownDiscriminator {
            path: "Tasks[0].Parameter".to_string(),
            symbol: "EmailNotification".to_string(),
        };
        let json = serde_json::to_string(&error).unwrap();
        let round: DecodeError = serde_json::from_str(&json).unwrap();
        assert_eq!(round, error);
    }
}
