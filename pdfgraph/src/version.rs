use nom::Finish;
use snafu::OptionExt;

use crate::{
    error::{InvalidFormat, ParseError},
    parser,
};

/// Version declared by the `%PDF-M.m` header.
///
/// Any numbers are accepted, the value is informational only.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
}

impl Version {
    pub fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Reads the header at the very start of `input`.
    pub fn from_header(input: &[u8]) -> Result<Self, ParseError> {
        let (_, (major, minor)) = parser::version(input).finish().ok().context(InvalidFormat)?;

        Ok(Self { major, minor })
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
