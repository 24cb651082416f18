use crate::types::Value;

/// A PDF array object that contains an ordered collection of PDF values.
///
/// Arrays have no separators: `[1 0 R /Name (text)]` holds four elements,
/// in source order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Array {
    data: Vec<Value>,
}

impl From<Vec<Value>> for Array {
    fn from(value: Vec<Value>) -> Self {
        Self { data: value }
    }
}

impl std::ops::Deref for Array {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
