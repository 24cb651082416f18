use std::{fmt::Display, ops::Deref, sync::Arc};

use crate::types::{Dictionary, Value};

/// Represents a parsed PDF indirect object.
///
/// PDF indirect objects consist of:
/// - An object ID (positive integer)
/// - A generation number (non-negative integer)
/// - The `obj` keyword
/// - The object contents
/// - The `endobj` keyword
///
/// Contents are kept as the ordered sequence of values found between the
/// keywords. A plain dictionary object has one element, a stream object has
/// two (its dictionary followed by the [`Stream`](crate::Stream)).
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct IndirectObject {
    pub id: usize,
    pub generation: usize,
    contents: Arc<Vec<Value>>,
}

/// Represents a parsed PDF indirect object reference.
///
/// PDF references consist of:
/// - An object ID (positive integer)
/// - A generation number (non-negative integer)
/// - The `R` keyword
///
/// A reference is only a key. It is never resolved while parsing, and it may
/// point at an object the document does not define.
#[derive(Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Clone, Default, Copy)]
pub struct Reference {
    pub id: usize,
    pub generation: usize,
}

impl Reference {
    pub fn new(id: usize, generation: usize) -> Self {
        Self { id, generation }
    }
}

impl IndirectObject {
    pub fn new(reference: Reference, contents: Vec<Value>) -> Self {
        Self {
            id: reference.id,
            generation: reference.generation,
            contents: Arc::new(contents),
        }
    }

    pub fn reference(&self) -> Reference {
        Reference {
            id: self.id,
            generation: self.generation,
        }
    }

    pub fn contents(&self) -> &[Value] {
        &self.contents
    }

    /// Returns the first value when it is a dictionary.
    ///
    /// This is the dictionary of dictionary and stream objects alike.
    pub fn dictionary(&self) -> Option<&Dictionary> {
        match self.contents.first() {
            Some(Value::Dictionary(dictionary)) => Some(dictionary),
            _ => None,
        }
    }
}

impl Deref for IndirectObject {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.contents
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.id, self.generation)
    }
}
