use std::str::FromStr;

use nom::{
    AsChar, IResult, ParseTo, Parser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while_m_n, take_while1},
    character::complete::digit1,
    combinator::{consumed, eof, value},
    multi::many0,
};

use crate::parser::whitespace::eol;

/// A cross-reference subsection as it appears in the file, before any checks.
#[derive(Debug, PartialEq)]
pub struct RawSubsection<'a> {
    pub first_id: usize,
    pub count: usize,
    pub raw: &'a [u8],
    pub entries: Vec<RawEntry>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct RawEntry {
    pub offset: u64,
    pub generation: u16,
    pub in_use: bool,
}

fn spaces(input: &[u8]) -> IResult<&[u8], &[u8]> {
    take_while(|c: u8| c == b' ').parse(input)
}

/// Parses a subsection header line, `first_id count` followed by an end-of-line.
pub fn subsection_header(input: &[u8]) -> IResult<&[u8], (usize, usize)> {
    let number = || digit1.map_opt(|digits: &[u8]| digits.parse_to());

    (
        number(),
        take_while1(|c: u8| c == b' '),
        number(),
        spaces,
        eol,
    )
        .map(|(first_id, _, count, _, _)| (first_id, count))
        .parse(input)
}

fn fixed_digits<'a, T: FromStr>(
    count: usize,
) -> impl Parser<&'a [u8], Output = T, Error = nom::error::Error<&'a [u8]>> {
    take_while_m_n(count, count, |c: u8| c.is_dec_digit())
        .map_opt(|digits: &[u8]| digits.parse_to())
}

/// Parses one fixed-width entry line: `nnnnnnnnnn ggggg n`.
///
/// Writers pad the line to 20 bytes with either a space before a single
/// end-of-line byte or a two byte end-of-line, so trailing spaces are
/// accepted before the end-of-line.
pub fn entry(input: &[u8]) -> IResult<&[u8], RawEntry> {
    (
        fixed_digits::<u64>(10),
        tag(" "),
        fixed_digits::<u16>(5),
        tag(" "),
        alt((value(true, tag("n")), value(false, tag("f")))),
        spaces,
        alt((eol, value((), eof))),
    )
        .map(|(offset, _, generation, _, in_use, _, _)| RawEntry {
            offset,
            generation,
            in_use,
        })
        .parse(input)
}

/// Parses a subsection header and every entry line that follows it.
///
/// The entry count is not checked here; `raw` covers the entry lines that
/// were actually read.
pub fn subsection(input: &[u8]) -> IResult<&[u8], RawSubsection<'_>> {
    (subsection_header, consumed(many0(entry)))
        .map(|((first_id, count), (raw, entries))| RawSubsection {
            first_id,
            count,
            raw,
            entries,
        })
        .parse(input)
}
