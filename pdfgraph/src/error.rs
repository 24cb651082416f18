use std::path::PathBuf;

use snafu::Snafu;

use crate::types::{Reference, ValueError};

/// Failures that abort a parse.
///
/// Offsets are byte positions in the input.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum ParseError {
    #[snafu(display("Input does not start with a `%PDF-<major>.<minor>` header"))]
    InvalidFormat,

    #[snafu(display("Unrecognized token at offset {offset}: `{context}`"))]
    UnrecognizedToken { offset: usize, context: String },

    #[snafu(display("Unbalanced `{token}` at offset {offset}"))]
    UnbalancedDelimiter { offset: usize, token: &'static str },

    #[snafu(display("Malformed dictionary closed at offset {offset}: {reason}"))]
    MalformedDictionary { offset: usize, reason: String },

    #[snafu(display("`startxref` at offset {offset} is not preceded by `trailer <<...>>`"))]
    MissingTrailerMarker { offset: usize },

    #[snafu(display(
        "Cross-reference subsection {first_id} at offset {offset} declares {declared} entries, found {found}"
    ))]
    MalformedXrefSubsection {
        offset: usize,
        first_id: usize,
        declared: usize,
        found: usize,
    },

    #[snafu(display("`{keyword}` at offset {offset} needs an object id and generation before it"))]
    MissingOperands {
        offset: usize,
        keyword: &'static str,
    },

    #[snafu(display("Failed to open file: {}", path.display()))]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to create mmap for file: {}", path.display()))]
    Mmap {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failures while navigating a parsed document.
///
/// None of them invalidate the document: a consumer can show what resolved
/// and mark the rest.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum ResolveError {
    #[snafu(display("Object {reference} is not defined in the document"))]
    UnresolvedReference { reference: Reference },

    #[snafu(display("Required key `{key}` not found in {owner}"))]
    MissingKey { key: &'static str, owner: String },

    #[snafu(display("Unexpected value for `{key}` in {owner}"))]
    UnexpectedValue {
        key: &'static str,
        owner: String,
        source: ValueError,
    },

    #[snafu(display("Object {reference} has no dictionary"))]
    EmptyObject { reference: Reference },

    #[snafu(display("Page tree node {reference} is reached twice"))]
    PageTreeCycle { reference: Reference },

    #[snafu(display("Unexpected page tree node type in {reference}. Got = `{got}`"))]
    UnexpectedNodeType { reference: Reference, got: String },
}

impl ResolveError {
    /// `true` when the failure is only a dangling reference.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, ResolveError::UnresolvedReference { .. })
    }
}
