use std::{fs::File, path::Path};

use memmap2::Mmap;
use snafu::ResultExt;

use crate::{
    error::{self, ParseError},
    machine::Machine,
    objects::ObjectTable,
    options::ParseOptions,
    types::{Dictionary, Value},
    version::Version,
    xref::XrefSection,
};

type Result<T> = std::result::Result<T, ParseError>;

/// A fully parsed document.
///
/// Holds everything a single pass over the input produced. It owns its data,
/// so the input buffer can be dropped, and it never changes after parsing.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    version: Version,
    trailer: Dictionary,
    objects: ObjectTable,
    xref_sections: Vec<XrefSection>,
    startxref_offsets: Vec<u64>,
    revision_count: usize,
    body: Vec<Value>,
}

/// Parses `input` with the default options.
pub fn parse(input: &[u8]) -> Result<ParsedDocument> {
    parse_with(input, ParseOptions::default())
}

/// Parses `input`, which must start with a `%PDF-M.m` header.
pub fn parse_with(input: &[u8], options: ParseOptions) -> Result<ParsedDocument> {
    let version = Version::from_header(input)?;

    let span = tracing::debug_span!("parse", %version, size = input.len());
    let _guard = span.enter();

    let output = Machine::new(input, options).run()?;

    Ok(ParsedDocument {
        version,
        trailer: output.trailer,
        objects: output.objects,
        xref_sections: output.xref_sections,
        startxref_offsets: output.startxref_offsets,
        revision_count: output.revision_count,
        body: output.body,
    })
}

impl ParsedDocument {
    /// Maps the file into memory and parses it.
    pub fn from_path(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).with_context(|_| error::OpenFile { path })?;
        let file = unsafe { Mmap::map(&file) }.with_context(|_| error::Mmap { path })?;

        parse_with(&file, options)
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// The trailer dictionaries of every revision, merged in file order.
    pub fn trailer(&self) -> &Dictionary {
        &self.trailer
    }

    pub fn objects(&self) -> &ObjectTable {
        &self.objects
    }

    pub fn xref_sections(&self) -> &[XrefSection] {
        &self.xref_sections
    }

    /// Offsets written after each `startxref`, in file order.
    pub fn startxref_offsets(&self) -> &[u64] {
        &self.startxref_offsets
    }

    /// Number of `trailer` sections, one per revision.
    pub fn revision_count(&self) -> usize {
        self.revision_count
    }

    /// Top-level values in file order: indirect objects and anything that
    /// was not part of one.
    pub fn body(&self) -> &[Value] {
        &self.body
    }
}
