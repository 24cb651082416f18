use indexmap::IndexMap;

use crate::types::{Name, Value};

/// Represents a PDF dictionary object containing key-value pairs.
///
/// Keys are names and stay unique: inserting an existing key replaces its
/// value in place, so the last occurrence in the source wins while the key
/// keeps the position of its first occurrence. Iteration follows source order,
/// which is what a tree view of the document wants to show.
///
/// # Examples
/// <<
///   /Type /Catalog
///   /Pages 2 0 R
///   /ViewerPreferences << /DisplayDocTitle true >>
/// >>
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Dictionary {
    records: IndexMap<Name, Value>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<Name>, value: Value) -> Option<Value> {
        self.records.insert(key.into(), value)
    }

    /// Merges `other` into `self`, letting `other` win on shared keys.
    ///
    /// Keys only present in `self` are preserved. This is how trailers of
    /// incremental updates combine: apply them in file order.
    pub fn merge(&mut self, other: Dictionary) {
        for (key, value) in other.records {
            self.records.insert(key, value);
        }
    }
}

impl<K: std::convert::Into<Name>> From<Vec<(K, Value)>> for Dictionary {
    fn from(value: Vec<(K, Value)>) -> Self {
        let value = value.into_iter().map(|(key, val)| (key.into(), val));

        Self {
            records: IndexMap::from_iter(value),
        }
    }
}

impl<K: std::convert::Into<Name>, const N: usize> From<[(K, Value); N]> for Dictionary {
    fn from(value: [(K, Value); N]) -> Self {
        let value = value.map(|(key, val)| (key.into(), val));

        Self {
            records: IndexMap::from_iter(value),
        }
    }
}

impl std::ops::Deref for Dictionary {
    type Target = IndexMap<Name, Value>;

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl IntoIterator for Dictionary {
    type Item = (Name, Value);
    type IntoIter = indexmap::map::IntoIter<Name, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Number, Reference};

    fn reference(id: usize) -> Value {
        Value::Reference(Reference { id, generation: 0 })
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("/A", Value::Number(Number::new("1")));
        dictionary.insert("/B", Value::Null);
        dictionary.insert("/A", Value::Number(Number::new("2")));

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get("/A"), Some(&Value::Number(Number::new("2"))));
        let keys = dictionary.keys().map(|key| key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["/A", "/B"]);
    }

    #[test]
    fn test_merge_with_override() {
        let mut merged = Dictionary::from([
            ("/Root", reference(1)),
            ("/Size", Value::Number(Number::new("4"))),
        ]);
        let later = Dictionary::from([
            ("/Root", reference(3)),
            ("/Prev", Value::Number(Number::new("120"))),
        ]);

        merged.merge(later);

        assert_eq!(merged.get("/Root"), Some(&reference(3)));
        assert_eq!(merged.get("/Size"), Some(&Value::Number(Number::new("4"))));
        assert_eq!(
            merged.get("/Prev"),
            Some(&Value::Number(Number::new("120")))
        );
    }
}
