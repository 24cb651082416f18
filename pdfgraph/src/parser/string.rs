use nom::{
    AsChar, IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take, take_while, take_while_m_n, take_while1},
    combinator::{recognize, value},
    multi::{fold, many0_count},
    sequence::{delimited, preceded},
};

use crate::parser::whitespace::{eol, is_whitespace};

/// Recognizes a literal string and returns the raw bytes between its outer parentheses.
///
/// Parentheses nest, so `(a(b)c)` is a single token with content `a(b)c`. A
/// backslash protects the byte after it, which is how `\(` and `\)` avoid
/// changing the nesting depth. Escapes are not interpreted here, see
/// [`decode_literal`].
pub fn literal_string(input: &[u8]) -> IResult<&[u8], &[u8]> {
    delimited(tag("("), recognize(many0_count(literal_fragment)), tag(")")).parse(input)
}

fn literal_fragment(input: &[u8]) -> IResult<&[u8], ()> {
    alt((
        value((), take_while1(|c| !matches!(c, b'\\' | b'(' | b')'))),
        value((), preceded(tag("\\"), take(1usize))),
        value((), balanced_parentheses),
    ))
    .parse(input)
}

fn balanced_parentheses(input: &[u8]) -> IResult<&[u8], &[u8]> {
    recognize(delimited(tag("("), many0_count(literal_fragment), tag(")"))).parse(input)
}

/// Recognizes a hexadecimal string and returns the raw bytes between `<` and `>`.
///
/// Only hex digits and whitespace are allowed inside, which also keeps `<<`
/// from being read as an (unterminated) hex string.
pub fn hexadecimal_string(input: &[u8]) -> IResult<&[u8], &[u8]> {
    delimited(
        tag("<"),
        take_while(|c: u8| c.is_hex_digit() || is_whitespace(c)),
        tag(">"),
    )
    .parse(input)
}

/// Resolves the escape sequences of a raw literal string.
pub fn decode_literal(raw: &[u8]) -> Vec<u8> {
    #[derive(Debug)]
    enum Fragment<'a> {
        Literal(&'a [u8]),
        Byte(u8),
        Continuation,
    }

    let octal_char = take_while_m_n(1, 3, |c| matches!(c, b'0'..=b'7')).map(|digits: &[u8]| {
        digits
            .iter()
            .fold(0u8, |acc, digit| acc.wrapping_mul(8).wrapping_add(digit - b'0'))
    });

    let escaped_char = preceded(
        tag("\\"),
        alt((
            value(b'\n', tag("n")),
            value(b'\r', tag("r")),
            value(b'\t', tag("t")),
            value(b'\x08', tag("b")),
            value(b'\x0C', tag("f")),
            value(b'(', tag("(")),
            value(b')', tag(")")),
            value(b'\\', tag("\\")),
            octal_char,
        )),
    )
    .map(Fragment::Byte);

    let continuation = preceded(tag("\\"), eol).map(|_| Fragment::Continuation);

    // Unknown escape: the backslash is dropped, the byte is kept.
    let unknown_escape = preceded(tag("\\"), take(1usize)).map(Fragment::Literal);

    let bare_eol = eol.map(|_| Fragment::Byte(b'\n'));

    let literal = take_while1(|c| !matches!(c, b'\\' | b'\r' | b'\n')).map(Fragment::Literal);

    let content = alt((
        literal,
        escaped_char,
        continuation,
        unknown_escape,
        bare_eol,
    ));

    let decoded: IResult<&[u8], Vec<u8>> = fold(0.., content, Vec::new, |mut data, fragment| {
        match fragment {
            Fragment::Literal(chunk) => data.extend_from_slice(chunk),
            Fragment::Byte(c) => data.push(c),
            Fragment::Continuation => {}
        }
        data
    })
    .parse(raw);

    decoded.map(|(_, data)| data).unwrap_or_default()
}

/// Converts the raw content of a hexadecimal string into bytes.
///
/// Whitespace is ignored; a missing final digit is taken as `0`.
pub fn decode_hexadecimal(raw: &[u8]) -> Vec<u8> {
    let digits = raw
        .iter()
        .filter_map(|c| (*c as char).to_digit(16))
        .map(|digit| digit as u8)
        .collect::<Vec<_>>();

    digits
        .chunks(2)
        .map(|pair| match pair {
            [high, low] => (high << 4) | low,
            [high] => high << 4,
            _ => 0,
        })
        .collect()
}
