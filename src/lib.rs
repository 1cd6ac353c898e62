//! # RustAtlas v2.0 - SwiftAtlas Parity
//!
//! Typed request/response model layer for the Atlas game services web API.
//! This version achieves exact wire-contract parity with SwiftAtlas,
//! providing the full type catalog plus a pure, stateless serialization
//! contract between the models and the JSON documents exchanged with the
//! service. Transport, authentication and retry live in the HTTP client
//! that calls into this crate; nothing here performs I/O.
//!
//! ## Features
//!
//! - **Type Catalog**: request/response/value models for groups, scheduled
//!   tasks, catalogs, title data, player data and push setup
//! - **Pure Codec**: `encode`/`decode` as stateless transformations with
//!   no shared mutable state, safe to call from any number of threads
//! - **Located Errors**: every decode failure names the offending field
//!   path (e.g. `Group.Members[2].Key.Id`) plus expected and actual kinds
//! - **Three-State Optionals**: `Settable` preserves absent vs explicit
//!   null for the fields documented as "set to null to remove"
//! - **Unordered Collections**: set-equal comparison for arrays whose
//!   order carries no meaning, with natural-ordering keys where documented
//! - **Forward Compatibility**: unknown enum symbols decode to a sentinel
//!   carrying the original string, and variant payloads with unrecognized
//!   discriminators are retained verbatim
//!
//! ## Wire contract
//!
//! - Timestamps travel as RFC 3339 UTC with millisecond precision
//!   ([`TIMESTAMP_FORMAT`]).
//! - Absent optional fields are omitted from encoded objects entirely,
//!   never emitted as null.
//! - Wire fields not declared by the target model are dropped on decode;
//!   encoding therefore normalizes documents (lexicographic key order),
//!   and semantically equal values serialize byte-for-byte identically.
//! - A decode aborts on the first error; there is no best-effort partial
//!   decode.
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_atlas::{decode, encode, CreateGroupRequest, CreateGroupResponse};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), rust_atlas::DecodeError> {
//! // Build a request and hand its wire value to the transport.
//! let request = CreateGroupRequest::new("Raiders");
//! assert_eq!(encode(&request), json!({"GroupName": "Raiders"}));
//!
//! // Decode a response body the transport already parsed.
//! let body = json!({"GroupName": "Raiders", "ProfileVersion": 1});
//! let response: CreateGroupResponse = decode(&body)?;
//! assert_eq!(response.profile_version, Some(1));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod wire;

// Codec exports (serialization contract layer)
pub use wire::{
    decode, encode, FromWire, Keyed, SemanticKind, Settable, ToWire, Unordered, WireFields,
    WireKind, WireObject, WireValue, TIMESTAMP_FORMAT,
};

// Model exports (type catalog layer)
pub use models::*;

// Error exports
pub use error::DecodeError;

// Result type alias
pub type Result<T> = std::result::Result<T, DecodeError>;

// Re-export common dependencies for convenience
pub use chrono::{DateTime, Utc};
pub use serde_json::{json, Value as JsonValue};

/// Prelude module for convenient importing
pub mod prelude {
    pub use crate::{
        decode, encode, DecodeError, FromWire, Keyed, Result, Settable, ToWire, Unordered,
        WireValue,
    };
    pub use crate::{
        CreateGroupRequest, CreateGroupResponse, EntityKey, EntityWithLineage, NameIdentifier,
        ScheduledTask, ScheduledTaskType, TaskParameter,
    };
    pub use chrono::{DateTime, Utc};
    pub use serde_json::json;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
