use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while},
    combinator::value,
    error::{Error, ErrorKind},
    sequence::preceded,
};

/// The six whitespace bytes: NUL, TAB, LF, FF, CR and SP.
pub fn is_whitespace(c: u8) -> bool {
    matches!(c, b'\0' | b'\t' | b'\n' | b'\x0C' | b'\r' | b' ')
}

/// Bytes that end a token even without whitespace: `( ) < > [ ] { } / %`.
pub fn is_delimiter(c: u8) -> bool {
    b"()<>[]{}/%".contains(&c)
}

/// Consumes a possibly empty run of whitespace.
pub fn skip_whitespace(input: &[u8]) -> IResult<&[u8], &[u8]> {
    take_while(is_whitespace).parse(input)
}

/// One end-of-line marker. `CRLF` is taken as a single marker.
pub fn eol(input: &[u8]) -> IResult<&[u8], ()> {
    value((), alt((tag("\r\n"), tag("\r"), tag("\n")))).parse(input)
}

/// Parses a PDF comment starting with `%`, returning its text up to the end of line.
///
/// The end-of-line marker itself is left in the remainder. The header line
/// (`%PDF-1.7`) and the `%%EOF` marker are comments as far as tokens go.
pub fn comment(input: &[u8]) -> IResult<&[u8], &[u8]> {
    preceded(tag("%"), take_while(|c| c != b'\r' && c != b'\n')).parse(input)
}

/// Succeeds without consuming when the input is at a token boundary.
///
/// A boundary is the end of input, whitespace or a delimiter. Keywords use it
/// so that `nullable` is not read as `null` followed by garbage.
pub fn boundary(input: &[u8]) -> IResult<&[u8], ()> {
    match input.first() {
        None => Ok((input, ())),
        Some(&c) if is_whitespace(c) || is_delimiter(c) => Ok((input, ())),
        Some(_) => Err(nom::Err::Error(Error::new(input, ErrorKind::Verify))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_whitespace() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: &'static [u8],
            expected_remainder: &'static [u8],
        }

        let test_cases = [
            TestCase {
                name: "empty input",
                input: b"",
                expected_remainder: b"",
            },
            TestCase {
                name: "single space",
                input: b" ",
                expected_remainder: b"",
            },
            TestCase {
                name: "whitespace followed by text",
                input: b"  abc",
                expected_remainder: b"abc",
            },
            TestCase {
                name: "text with no whitespace",
                input: b"abc",
                expected_remainder: b"abc",
            },
            TestCase {
                name: "every whitespace byte",
                input: b"\x00\t\n\x0C\r abc",
                expected_remainder: b"abc",
            },
        ];

        for case in &test_cases {
            let result = skip_whitespace(case.input);
            let actual_remainder = match result {
                Ok((rem, _)) => rem,
                Err(e) => panic!(
                    "Parsing failed for test '{}', input: {:#?}, error: {e:?}",
                    case.name, case.input
                ),
            };

            assert_eq!(
                actual_remainder, case.expected_remainder,
                "Test '{}' failed: expected remainder: {:#?}, got: {:#?}",
                case.name, case.expected_remainder, actual_remainder
            );
        }
    }

    #[test]
    fn test_eol_parser() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: &'static [u8],
            expected: bool,
            expected_remainder: &'static [u8],
        }

        let test_cases = [
            TestCase {
                name: "CRLF",
                input: b"\r\n",
                expected: true,
                expected_remainder: b"",
            },
            TestCase {
                name: "CR only",
                input: b"\r",
                expected: true,
                expected_remainder: b"",
            },
            TestCase {
                name: "LF only",
                input: b"\n",
                expected: true,
                expected_remainder: b"",
            },
            TestCase {
                name: "LF followed by CR",
                input: b"\n\r",
                expected: true,
                expected_remainder: b"\r",
            },
            TestCase {
                name: "empty input",
                input: b"",
                expected: false,
                expected_remainder: b"",
            },
        ];

        for case in &test_cases {
            let result = eol(case.input);
            let success = result.is_ok();
            assert_eq!(
                success, case.expected,
                "Test '{}' failed: expected success: {}, got: {}",
                case.name, case.expected, success
            );

            if let Ok((rem, _)) = result {
                assert_eq!(
                    rem, case.expected_remainder,
                    "Test '{}' failed: expected remainder: {:#?}, got: {:#?}",
                    case.name, case.expected_remainder, rem
                );
            }
        }
    }

    #[test]
    fn test_comment_parser() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: &'static [u8],
            expected: bool,
            expected_text: &'static [u8],
            expected_remainder: &'static [u8],
        }

        let test_cases = [
            TestCase {
                name: "empty input",
                input: b"",
                expected: false,
                expected_text: b"",
                expected_remainder: b"",
            },
            TestCase {
                name: "comment with text",
                input: b"% this is a comment\n",
                expected: true,
                expected_text: b" this is a comment",
                expected_remainder: b"\n",
            },
            TestCase {
                name: "header line",
                input: b"%PDF-1.7\r\n1 0 obj",
                expected: true,
                expected_text: b"PDF-1.7",
                expected_remainder: b"\r\n1 0 obj",
            },
            TestCase {
                name: "end of file marker without newline",
                input: b"%%EOF",
                expected: true,
                expected_text: b"%EOF",
                expected_remainder: b"",
            },
            TestCase {
                name: "binary comment",
                input: b"%\xE2\xE3\xCF\xD3\n",
                expected: true,
                expected_text: b"\xE2\xE3\xCF\xD3",
                expected_remainder: b"\n",
            },
            TestCase {
                name: "no comment character",
                input: b"this is not a comment",
                expected: false,
                expected_text: b"",
                expected_remainder: b"",
            },
        ];

        for case in &test_cases {
            let result = comment(case.input);
            let success = result.is_ok();
            assert_eq!(
                success, case.expected,
                "Test '{}' failed: expected success: {}, got: {}",
                case.name, case.expected, success
            );

            if let Ok((rem, text)) = result {
                assert_eq!(text, case.expected_text, "Test '{}' failed", case.name);
                assert_eq!(
                    rem, case.expected_remainder,
                    "Test '{}' failed: expected remainder: {:#?}, got: {:#?}",
                    case.name, case.expected_remainder, rem
                );
            }
        }
    }

    #[test]
    fn test_boundary() {
        assert!(boundary(b"").is_ok());
        assert!(boundary(b" x").is_ok());
        assert!(boundary(b"/Name").is_ok());
        assert!(boundary(b">>").is_ok());
        assert!(boundary(b"x").is_err());
    }
}
