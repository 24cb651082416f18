use nom::{IResult, Offset, Parser, branch::alt, bytes::complete::tag, combinator::value};

use crate::{
    error::{ParseError, UnrecognizedToken},
    parser::{self, keyword},
    xref::XrefSection,
};

/// Bytes of input quoted in an unrecognized token error.
const CONTEXT_LENGTH: usize = 16;

/// A lexical token.
///
/// Payloads borrow from the input and are still undecoded.
#[derive(Debug, PartialEq, Clone)]
pub enum Token<'a> {
    /// Text after `%`, up to the end of line
    Comment(&'a [u8]),
    Boolean(bool),
    /// Numeric text, sign and dot included
    Number(&'a [u8]),
    /// Content between the outer parentheses
    LiteralString(&'a [u8]),
    /// Content between `<` and `>`
    HexString(&'a [u8]),
    /// Name text including the leading slash
    Name(&'a [u8]),
    ArrayBegin,
    ArrayEnd,
    DictionaryBegin,
    DictionaryEnd,
    /// Stream payload and its absolute offset
    Stream { offset: usize, data: &'a [u8] },
    Null,
    Obj,
    EndObj,
    Reference,
    Xref(XrefSection),
    Trailer,
    StartXref,
}

/// Tokens whose payload is known once matched.
#[derive(Debug, Clone)]
enum Lexeme<'a> {
    Token(Token<'a>),
    Stream(&'a [u8]),
    Xref,
}

/// Splits a document into tokens.
///
/// Patterns are tried in a fixed order and the first match wins:
/// comment, boolean, number, literal string, hexadecimal string, name,
/// `[ ] << >>`, stream, and the keywords `null obj endobj R xref trailer
/// startxref`. Whitespace after every token is skipped.
///
/// The iterator ends at the end of input, or after the first error.
#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a [u8],
    position: usize,
    stream_length: Option<usize>,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            stream_length: None,
            failed: false,
        };
        lexer.skip_whitespace();

        lexer
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Lets the next token take a stream payload of exactly `length` bytes.
    ///
    /// The hint holds for one token only. When `endstream` does not follow
    /// the declared span the payload ends at the first `endstream` instead.
    pub fn declare_stream_length(&mut self, length: usize) {
        self.stream_length = Some(length);
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.position..];
        if let Ok((remainder, _)) = parser::skip_whitespace(rest) {
            self.position += rest.offset(remainder);
        }
    }

    fn next_token(&mut self) -> Result<Option<(usize, Token<'a>)>, ParseError> {
        let start = self.position;
        let rest = &self.input[start..];
        if rest.is_empty() {
            return Ok(None);
        }

        let stream_length = self.stream_length.take();
        let lexeme = lexeme(rest, stream_length);

        let (remainder, token) = match lexeme {
            Ok((remainder, Lexeme::Token(token))) => (remainder, token),
            Ok((remainder, Lexeme::Stream(data))) => {
                let offset = start + rest.offset(data);
                (remainder, Token::Stream { offset, data })
            }
            Ok((remainder, Lexeme::Xref)) => {
                let base = start + rest.offset(remainder);
                let (remainder, section) = XrefSection::read(start, remainder, base)?;
                (remainder, Token::Xref(section))
            }
            Err(_) => {
                let context = &rest[..rest.len().min(CONTEXT_LENGTH)];

                return UnrecognizedToken {
                    offset: start,
                    context: String::from_utf8_lossy(context),
                }
                .fail();
            }
        };

        self.position = start + rest.offset(remainder);
        self.skip_whitespace();

        tracing::trace!(offset = start, ?token, "Token");

        Ok(Some((start, token)))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<(usize, Token<'a>), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = self.next_token().transpose();
        if matches!(result, Some(Err(_))) {
            self.failed = true;
        }

        result
    }
}

fn lexeme<'a>(input: &'a [u8], stream_length: Option<usize>) -> IResult<&'a [u8], Lexeme<'a>> {
    let scalar = alt((
        parser::comment.map(Token::Comment),
        parser::boolean.map(Token::Boolean),
        parser::numeric.map(Token::Number),
        parser::literal_string.map(Token::LiteralString),
        parser::hexadecimal_string.map(Token::HexString),
        parser::name.map(Token::Name),
    ));

    let delimiter = alt((
        value(Token::ArrayBegin, tag("[")),
        value(Token::ArrayEnd, tag("]")),
        value(Token::DictionaryBegin, tag("<<")),
        value(Token::DictionaryEnd, tag(">>")),
    ));

    let stream = |input: &'a [u8]| -> IResult<&'a [u8], &'a [u8]> {
        match stream_length {
            Some(length) => {
                alt((parser::stream_with_length(length), parser::stream)).parse(input)
            }
            None => parser::stream(input),
        }
    };

    let keywords = alt((
        value(Token::Null, keyword("null")),
        value(Token::Obj, keyword("obj")),
        value(Token::EndObj, keyword("endobj")),
        value(Token::Reference, keyword("R")),
        value(Token::Trailer, keyword("trailer")),
        value(Token::StartXref, keyword("startxref")),
    ));

    alt((
        scalar.map(Lexeme::Token),
        delimiter.map(Lexeme::Token),
        stream.map(Lexeme::Stream),
        keywords.map(Lexeme::Token),
        value(Lexeme::Xref, keyword("xref")),
    ))
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &[u8]) -> Result<Vec<Token<'_>>, ParseError> {
        Lexer::new(input)
            .map(|result| result.map(|(_, token)| token))
            .collect()
    }

    #[test]
    fn test_token_sequence() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: &'static [u8],
            expected: Vec<Token<'static>>,
        }

        let test_cases = [
            TestCase {
                name: "indirect object with dictionary",
                input: b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n",
                expected: vec![
                    Token::Number(b"1"),
                    Token::Number(b"0"),
                    Token::Obj,
                    Token::DictionaryBegin,
                    Token::Name(b"/Type"),
                    Token::Name(b"/Catalog"),
                    Token::Name(b"/Pages"),
                    Token::Number(b"2"),
                    Token::Number(b"0"),
                    Token::Reference,
                    Token::DictionaryEnd,
                    Token::EndObj,
                ],
            },
            TestCase {
                name: "no separators between delimiters",
                input: b"<</Kids[3 0 R]/Count 1>>",
                expected: vec![
                    Token::DictionaryBegin,
                    Token::Name(b"/Kids"),
                    Token::ArrayBegin,
                    Token::Number(b"3"),
                    Token::Number(b"0"),
                    Token::Reference,
                    Token::ArrayEnd,
                    Token::Name(b"/Count"),
                    Token::Number(b"1"),
                    Token::DictionaryEnd,
                ],
            },
            TestCase {
                name: "scalars",
                input: b"true false null 3 3.14 3. -3.14 (a(b)c) <48 65> % note\n",
                expected: vec![
                    Token::Boolean(true),
                    Token::Boolean(false),
                    Token::Null,
                    Token::Number(b"3"),
                    Token::Number(b"3.14"),
                    Token::Number(b"3."),
                    Token::Number(b"-3.14"),
                    Token::LiteralString(b"a(b)c"),
                    Token::HexString(b"48 65"),
                    Token::Comment(b" note"),
                ],
            },
            TestCase {
                name: "empty hexadecimal string and empty dictionary",
                input: b"<><<>>",
                expected: vec![
                    Token::HexString(b""),
                    Token::DictionaryBegin,
                    Token::DictionaryEnd,
                ],
            },
            TestCase {
                name: "trailer keywords",
                input: b"trailer\n<< /Size 1 >>\nstartxref\n0\n%%EOF",
                expected: vec![
                    Token::Trailer,
                    Token::DictionaryBegin,
                    Token::Name(b"/Size"),
                    Token::Number(b"1"),
                    Token::DictionaryEnd,
                    Token::StartXref,
                    Token::Number(b"0"),
                    Token::Comment(b"%EOF"),
                ],
            },
            TestCase {
                name: "empty input",
                input: b"  \n ",
                expected: vec![],
            },
        ];

        for case in &test_cases {
            let result = tokens(case.input);
            assert_eq!(
                result.as_ref().ok(),
                Some(&case.expected),
                "Test '{}' failed, got: {result:?}",
                case.name
            );
        }
    }

    #[test]
    fn test_offsets() {
        let offsets = Lexer::new(b"  1 0 R\n/Name")
            .map(|result| result.map(|(offset, _)| offset))
            .collect::<Result<Vec<_>, _>>()
            .expect("valid tokens");

        assert_eq!(offsets, vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_stream_token() {
        let input = b"<< /Length 5 >>\nstream\nhello\nendstream\nendobj";
        let tokens = tokens(input).expect("valid tokens");

        assert_eq!(
            tokens[4],
            Token::Stream {
                offset: 23,
                data: b"hello\n",
            }
        );
        assert_eq!(tokens[5], Token::EndObj);
    }

    #[test]
    fn test_declared_stream_length() {
        let input = b"stream\nab endstream cd\nendstream\nendobj";

        let mut lexer = Lexer::new(input);
        lexer.declare_stream_length(15);
        let token = lexer.next().and_then(|result| result.ok());
        assert_eq!(
            token,
            Some((
                0,
                Token::Stream {
                    offset: 7,
                    data: b"ab endstream cd",
                }
            ))
        );

        let mut lexer = Lexer::new(input);
        lexer.declare_stream_length(4);
        let token = lexer.next().and_then(|result| result.ok());
        assert_eq!(
            token,
            Some((
                0,
                Token::Stream {
                    offset: 7,
                    data: b"ab ",
                }
            ))
        );
    }

    #[test]
    fn test_xref_token() {
        let input = b"xref\n0 1\n0000000000 65535 f \ntrailer";
        let tokens = tokens(input).expect("valid tokens");

        assert_eq!(tokens.len(), 2);
        assert!(matches!(&tokens[0], Token::Xref(section) if section.subsections.len() == 1));
        assert_eq!(tokens[1], Token::Trailer);
    }

    #[test]
    fn test_unrecognized_token() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: &'static [u8],
            expected_offset: usize,
        }

        let test_cases = [
            TestCase {
                name: "unknown keyword",
                input: b"1 0 foo",
                expected_offset: 4,
            },
            TestCase {
                name: "keyword prefix",
                input: b"nullptr",
                expected_offset: 0,
            },
            TestCase {
                name: "number with two dots",
                input: b"[1 1.2.3]",
                expected_offset: 3,
            },
            TestCase {
                name: "number glued to text",
                input: b"7 12abc",
                expected_offset: 2,
            },
            TestCase {
                name: "unterminated string",
                input: b"/A (abc",
                expected_offset: 3,
            },
            TestCase {
                name: "stray endstream",
                input: b"endstream",
                expected_offset: 0,
            },
            TestCase {
                name: "stream without endstream",
                input: b"stream\nabc",
                expected_offset: 0,
            },
        ];

        for case in &test_cases {
            match tokens(case.input) {
                Err(ParseError::UnrecognizedToken { offset, .. }) => {
                    assert_eq!(offset, case.expected_offset, "Test '{}' failed", case.name)
                }
                result => panic!("Test '{}' failed, got: {result:?}", case.name),
            }
        }
    }

    #[test]
    fn test_lexer_stops_after_error() {
        let mut lexer = Lexer::new(b"} 1");
        assert!(matches!(lexer.next(), Some(Err(_))));
        assert!(lexer.next().is_none());
    }
}
