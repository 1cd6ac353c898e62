pub mod decode_error;

pub use decode_error::DecodeError;

pub type Result<T> = std::result::Result<T, DecodeError>;
