use nom::Offset;
use snafu::ensure;

use crate::{
    error::{MalformedXrefSubsection, ParseError},
    parser::{self, RawSubsection},
};

/// One `xref` table as found in the file.
///
/// Tables are kept for display only. Object lookup never goes through them:
/// every object in the body is registered as it is parsed.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct XrefSection {
    /// Byte offset of the `xref` keyword.
    pub offset: usize,
    pub subsections: Vec<XrefSubsection>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct XrefSubsection {
    pub first_id: usize,
    pub count: usize,
    /// Entry lines exactly as written, end-of-line markers included.
    pub raw: Vec<u8>,
    pub entries: Vec<XrefEntry>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct XrefEntry {
    pub offset: u64,
    pub generation: u16,
    pub in_use: bool,
}

impl XrefSection {
    /// Number of entries over all subsections.
    pub fn len(&self) -> usize {
        self.subsections.iter().map(|subsection| subsection.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the subsections that follow an `xref` keyword.
    ///
    /// `input` starts right after the keyword and `base` is its absolute
    /// offset in the document. A table with no subsection at all is accepted.
    pub(crate) fn read<'a>(
        offset: usize,
        input: &'a [u8],
        base: usize,
    ) -> Result<(&'a [u8], Self), ParseError> {
        let mut section = XrefSection {
            offset,
            subsections: Vec::new(),
        };
        let mut rest = input;

        loop {
            let after_whitespace = parser::skip_whitespace(rest).map_or(rest, |(rest, _)| rest);

            let Ok((remainder, subsection)) = parser::xref_subsection(after_whitespace) else {
                rest = after_whitespace;
                break;
            };

            let subsection_offset = base + input.offset(after_whitespace);
            section.push(subsection_offset, subsection)?;
            rest = remainder;
        }

        tracing::debug!(
            offset,
            subsections = section.subsections.len(),
            entries = section.len(),
            "Read cross-reference table"
        );

        Ok((rest, section))
    }

    fn push(&mut self, offset: usize, subsection: RawSubsection<'_>) -> Result<(), ParseError> {
        ensure!(
            subsection.entries.len() == subsection.count,
            MalformedXrefSubsection {
                offset,
                first_id: subsection.first_id,
                declared: subsection.count,
                found: subsection.entries.len(),
            }
        );

        self.subsections.push(XrefSubsection {
            first_id: subsection.first_id,
            count: subsection.count,
            raw: subsection.raw.to_vec(),
            entries: subsection
                .entries
                .into_iter()
                .map(|entry| XrefEntry {
                    offset: entry.offset,
                    generation: entry.generation,
                    in_use: entry.in_use,
                })
                .collect(),
        });

        Ok(())
    }
}

impl XrefSubsection {
    /// Pairs every entry with the object id it describes.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &XrefEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (self.first_id + i, entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_section() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: &'static [u8],
            expected_subsections: Option<usize>,
            expected_remainder: &'static [u8],
        }

        let test_cases = [
            TestCase {
                name: "single subsection",
                input: b"\n0 2\n0000000000 65535 f \n0000000009 00000 n \ntrailer",
                expected_subsections: Some(1),
                expected_remainder: b"trailer",
            },
            TestCase {
                name: "two subsections",
                input: b"\r\n0 1\r\n0000000000 65535 f\r\n4 2\r\n0000000100 00000 n\r\n0000000200 00001 n\r\n\r\ntrailer",
                expected_subsections: Some(2),
                expected_remainder: b"trailer",
            },
            TestCase {
                name: "empty table",
                input: b"\ntrailer",
                expected_subsections: Some(0),
                expected_remainder: b"trailer",
            },
            TestCase {
                name: "fewer entries than declared",
                input: b"\n0 3\n0000000000 65535 f \n0000000009 00000 n \ntrailer",
                expected_subsections: None,
                expected_remainder: b"",
            },
            TestCase {
                name: "more entries than declared",
                input: b"\n0 1\n0000000000 65535 f \n0000000009 00000 n \ntrailer",
                expected_subsections: None,
                expected_remainder: b"",
            },
        ];

        for case in &test_cases {
            let result = XrefSection::read(10, case.input, 14);

            match (result, case.expected_subsections) {
                (Ok((remainder, section)), Some(expected)) => {
                    assert_eq!(
                        section.subsections.len(),
                        expected,
                        "Test '{}' failed",
                        case.name
                    );
                    assert_eq!(remainder, case.expected_remainder, "Test '{}' failed", case.name);
                    assert_eq!(section.offset, 10);
                }
                (Err(ParseError::MalformedXrefSubsection { offset, .. }), None) => {
                    assert_eq!(offset, 15, "Test '{}' failed", case.name);
                }
                (result, _) => panic!("Test '{}' failed, got: {result:?}", case.name),
            }
        }
    }

    #[test]
    fn test_subsection_ids() {
        let input = b"\n4 2\n0000000100 00000 n \n0000000200 00001 n \n".as_slice();

        let (_, section) = XrefSection::read(0, input, 0).expect("valid table");
        let ids = section.subsections[0]
            .iter()
            .map(|(id, entry)| (id, entry.generation))
            .collect::<Vec<_>>();

        assert_eq!(ids, vec![(4, 0), (5, 1)]);
        assert_eq!(section.len(), 2);
        assert_eq!(section.subsections[0].raw.len(), 40);
    }
}
