use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take, take_until},
    combinator::{opt, value},
    sequence::{delimited, terminated},
};

use crate::parser::whitespace::eol;

fn stream_keyword(input: &[u8]) -> IResult<&[u8], ()> {
    value((), (tag("stream"), alt((tag("\r\n"), tag("\n"))))).parse(input)
}

/// Parses a stream body, from the `stream` keyword to the first `endstream`.
///
/// Returns the bytes between the end-of-line that follows `stream` and the
/// `endstream` keyword. The search is purely textual: a payload that happens
/// to contain the bytes `endstream` is cut short at that point. Use
/// [`stream_with_length`] when the declared length is known.
///
/// # Example
/// ```text
/// stream
/// BT /F1 12 Tf ET
/// endstream
/// ```
pub fn stream(input: &[u8]) -> IResult<&[u8], &[u8]> {
    delimited(stream_keyword, take_until("endstream"), tag("endstream")).parse(input)
}

/// Parses a stream body of exactly `length` bytes.
///
/// Succeeds only if `endstream` follows the declared span, optionally after
/// one end-of-line marker.
pub fn stream_with_length<'a>(
    length: usize,
) -> impl Parser<&'a [u8], Output = &'a [u8], Error = nom::error::Error<&'a [u8]>> {
    delimited(
        stream_keyword,
        take(length),
        terminated(opt(eol), tag("endstream")),
    )
}
