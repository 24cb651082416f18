use nom::{
    AsChar, IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while_m_n, take_while1},
    combinator::recognize,
    multi::fold,
    sequence::preceded,
};

use crate::parser::whitespace::{is_delimiter, is_whitespace};

/// Recognizes a PDF name and returns it including the leading slash.
///
/// The name runs until whitespace or one of the delimiters `()<>[]{}/%`, so
/// `/Type/Catalog` yields two names. `/` on its own is the (valid) empty name.
pub fn name(input: &[u8]) -> IResult<&[u8], &[u8]> {
    recognize(preceded(
        tag("/"),
        take_while(|c| !is_whitespace(c) && !is_delimiter(c)),
    ))
    .parse(input)
}

/// Strips the slash of a raw name and resolves `#xx` escapes.
///
/// A `#` that is not followed by two hex digits is kept as is.
pub fn decode_name(raw: &[u8]) -> Vec<u8> {
    let raw = raw.strip_prefix(b"/").unwrap_or(raw);

    let sym_code = preceded(tag("#"), take_while_m_n(2, 2, |c: u8| c.is_hex_digit())).map(
        |code: &[u8]| {
            code.iter()
                .filter_map(|c| (*c as char).to_digit(16))
                .fold(0u8, |acc, digit| (acc << 4) | digit as u8)
        },
    );

    let chunk = alt((
        take_while1(|c: u8| c != b'#').map(|chunk: &[u8]| chunk.to_vec()),
        sym_code.map(|code| vec![code]),
        tag("#").map(|hash: &[u8]| hash.to_vec()),
    ));

    let decoded: IResult<&[u8], Vec<u8>> = fold(0.., chunk, Vec::new, |mut data, chunk| {
        data.extend_from_slice(&chunk);
        data
    })
    .parse(raw);

    decoded.map(|(_, data)| data).unwrap_or_default()
}
