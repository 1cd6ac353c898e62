/// Three-state optional for fields documented as "set to null to remove".
///
/// An absent field leaves the server-side value untouched; an explicit
/// null clears it; a value replaces it. Most optional fields carry no
/// clearing semantics and use plain `Option<T>` instead — this type exists
/// only for the documented subset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Settable<T> {
    /// Field omitted from the request entirely.
    #[default]
    Absent,
    /// Field sent as an explicit null, clearing the value server-side.
    Null,
    /// Field sent with a replacement value.
    Value(T),
}

impl<T> Settable<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Settable::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Settable::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Settable::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Settable::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Settable<T> {
    fn from(value: T) -> Self {
        Settable::Value(value)
    }
}
