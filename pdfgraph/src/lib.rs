//! Parser for the classic PDF syntax.
//!
//! [`parse`] reads a whole document in one pass and returns a
//! [`ParsedDocument`]: the object table, the merged trailer and the
//! cross-reference tables. Navigation from the trailer to the catalog and the
//! page tree goes through [`ParsedDocument::resolve`] and friends.
//!
//! Stream payloads and strings are kept undecoded.

mod document;
mod error;
mod lexer;
mod machine;
mod objects;
mod options;
mod pages;
mod parser;
mod resolve;
mod types;
mod version;
mod xref;

pub use document::{ParsedDocument, parse, parse_with};
pub use error::{ParseError, ResolveError};
pub use lexer::{Lexer, Token};
pub use objects::ObjectTable;
pub use options::{ParseOptions, StreamLength};
pub use pages::PageLeaves;
pub use types::{
    Array, Dictionary, HexString, IndirectObject, LiteralString, Name, Number, Reference, Stream,
    Value, ValueError,
};
pub use version::Version;
pub use xref::{XrefEntry, XrefSection, XrefSubsection};
