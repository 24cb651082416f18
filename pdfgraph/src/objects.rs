use std::collections::BTreeMap;

use crate::types::{IndirectObject, Reference};

/// Every indirect object of a document, keyed by id and generation.
///
/// Objects are registered while parsing, in file order. A later definition
/// with the same key replaces the earlier one, which is how incremental
/// updates take effect.
#[derive(Debug, Default, Clone)]
pub struct ObjectTable {
    objects: BTreeMap<Reference, IndirectObject>,
}

impl ObjectTable {
    pub(crate) fn register(&mut self, object: IndirectObject) -> Option<IndirectObject> {
        tracing::trace!(
            reference = %object.reference(),
            values = object.len(),
            "Register object"
        );

        self.objects.insert(object.reference(), object)
    }

    pub fn get(&self, reference: &Reference) -> Option<&IndirectObject> {
        self.objects.get(reference)
    }

    pub fn contains(&self, reference: &Reference) -> bool {
        self.objects.contains_key(reference)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterates in (id, generation) order.
    pub fn iter(&self) -> impl Iterator<Item = (&Reference, &IndirectObject)> {
        self.objects.iter()
    }
}

impl<'a> IntoIterator for &'a ObjectTable {
    type Item = (&'a Reference, &'a IndirectObject);
    type IntoIter = std::collections::btree_map::Iter<'a, Reference, IndirectObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
