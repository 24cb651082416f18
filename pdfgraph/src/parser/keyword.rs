use nom::{
    IResult, Parser, branch::alt, bytes::complete::tag, combinator::value, sequence::terminated,
};

use crate::parser::whitespace::boundary;

/// Matches `word` only when it stands alone as a token.
pub fn keyword<'a>(
    word: &'static str,
) -> impl Parser<&'a [u8], Output = &'a [u8], Error = nom::error::Error<&'a [u8]>> {
    terminated(tag(word), boundary)
}

/// `true` or `false`, so `trueish` is not a boolean.
pub fn boolean(input: &[u8]) -> IResult<&[u8], bool> {
    alt((value(true, keyword("true")), value(false, keyword("false")))).parse(input)
}

pub fn null(input: &[u8]) -> IResult<&[u8], ()> {
    value((), keyword("null")).parse(input)
}
