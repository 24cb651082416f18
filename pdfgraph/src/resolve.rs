use snafu::{OptionExt, ResultExt};

use crate::{
    document::ParsedDocument,
    error::{EmptyObject, MissingKey, ResolveError, UnexpectedValue, UnresolvedReference},
    types::{Dictionary, IndirectObject, Reference},
};

type Result<T> = std::result::Result<T, ResolveError>;

impl ParsedDocument {
    /// Looks up an indirect object.
    ///
    /// A reference without a definition is an ordinary outcome for damaged
    /// or partial files, the error can be shown and skipped.
    pub fn resolve(&self, reference: &Reference) -> Result<&IndirectObject> {
        self.objects()
            .get(reference)
            .context(UnresolvedReference {
                reference: *reference,
            })
    }

    /// The `/Root` reference of the trailer.
    pub fn root(&self) -> Result<Reference> {
        reference_at(self.trailer(), "/Root", "trailer")
    }

    /// The document catalog, the object `/Root` points at.
    pub fn catalog(&self) -> Result<&IndirectObject> {
        self.resolve(&self.root()?)
    }

    /// The root node of the page tree, found through the catalog's `/Pages`.
    pub fn pages(&self) -> Result<&IndirectObject> {
        let catalog = self.catalog()?;
        let dictionary = dictionary_of(catalog)?;
        let pages = reference_at(dictionary, "/Pages", &catalog.reference().to_string())?;

        self.resolve(&pages)
    }

    /// The document information dictionary, when the trailer names one that
    /// is defined.
    pub fn info(&self) -> Option<&IndirectObject> {
        let reference = self.trailer().get("/Info")?.as_reference().ok()?;

        self.resolve(reference).ok()
    }
}

/// The dictionary that opens an object's contents.
pub(crate) fn dictionary_of(object: &IndirectObject) -> Result<&Dictionary> {
    object.dictionary().context(EmptyObject {
        reference: object.reference(),
    })
}

pub(crate) fn reference_at(
    dictionary: &Dictionary,
    key: &'static str,
    owner: &str,
) -> Result<Reference> {
    let value = dictionary.get(key).context(MissingKey { key, owner })?;

    value
        .as_reference()
        .copied()
        .context(UnexpectedValue { key, owner })
}
