pub mod codec;
pub mod kind;
pub mod settable;
pub mod unordered;

pub use codec::{
    decode, encode, index_path, join_path, type_mismatch, FromWire, ToWire, WireFields,
    WireObject, WireValue, TIMESTAMP_FORMAT,
};
pub use kind::{SemanticKind, WireKind};
pub use settable::Settable;
pub use unordered::{Keyed, Unordered};
