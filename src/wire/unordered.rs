use crate::error::Result;
use crate::wire::codec::{FromWire, ToWire, WireValue};
use std::ops::{Deref, DerefMut};

/// Collection field whose element order carries no semantic meaning.
///
/// Encoded as an array in insertion order; equality is multiset-based, so
/// two values decoded from permutations of the same wire array compare
/// equal.
#[derive(Debug, Clone, Default)]
pub struct Unordered<T>(pub Vec<T>);

impl<T> Unordered<T> {
    pub fn new() -> Self {
        Unordered(Vec::new())
    }

    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

/// Natural-ordering key for elements of keyed unordered collections
/// (e.g. catalog items by `ItemId`, member-role entries by `RoleId`).
/// Elements without a key sort first.
pub trait Keyed {
    fn sort_key(&self) -> Option<&str>;
}

impl<T: Keyed> Unordered<T> {
    /// Sort the collection into its natural order by identifying key.
    pub fn sort_by_key_field(&mut self) {
        self.0.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    }
}

impl<T: PartialEq> PartialEq for Unordered<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }
        let mut claimed = vec![false; other.0.len()];
        'outer: for item in &self.0 {
            for (index, candidate) in other.0.iter().enumerate() {
                if !claimed[index] && item == candidate {
                    claimed[index] = true;
                    continue 'outer;
                }
            }
            return false;
        }
        true
    }
}

impl<T> From<Vec<T>> for Unordered<T> {
    fn from(items: Vec<T>) -> Self {
        Unordered(items)
    }
}

impl<T> FromIterator<T> for Unordered<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Unordered(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Unordered<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Unordered<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> Deref for Unordered<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Unordered<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: ToWire> ToWire for Unordered<T> {
    fn to_wire(&self) -> WireValue {
        self.0.to_wire()
    }
}

impl<T: FromWire> FromWire for Unordered<T> {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        Vec::from_wire(value, path).map(Unordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_equality() {
        let forward: Unordered<String> = vec!["a".into(), "b".into(), "c".into()].into();
        let reversed: Unordered<String> = vec!["c".into(), "b".into(), "a".into()].into();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_multiset_counts_duplicates() {
        let doubled: Unordered<&str> = vec!["a", "a", "b"].into();
        let single: Unordered<&str> = vec!["a", "b", "b"].into();
        assert_ne!(doubled, single);
    }

    #[test]
    fn test_length_mismatch_is_unequal() {
        let three: Unordered<i32> = vec![1, 2, 3].into();
        let two: Unordered<i32> = vec![1, 2].into();
        assert_ne!(three, two);
    }

    struct Entry {
        id: Option<String>,
    }

    impl Keyed for Entry {
        fn sort_key(&self) -> Option<&str> {
            self.id.as_deref()
        }
    }

    #[test]
    fn test_sort_by_key_field_puts_unkeyed_first() {
        let mut entries: Unordered<Entry> = vec![
            Entry {
                id: Some("member".to_string()),
            },
            Entry { id: None },
            Entry {
                id: Some("admin".to_string()),
            },
        ]
        .into();
        entries.sort_by_key_field();

        let keys: Vec<Option<&str>> = entries.iter().map(Keyed::sort_key).collect();
        assert_eq!(keys, vec![None, Some("admin"), Some("member")]);
    }
}
