use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{digit1, one_of},
    combinator::{opt, recognize},
    sequence::{preceded, terminated},
};

use crate::parser::whitespace::boundary;

/// Recognizes a numeric token and returns its text unchanged.
///
/// Alternatives are tried longest first, so `3.14` is not split into `3.`
/// and `14`:
/// - `digits.digits`
/// - `digits.` (trailing bare dot)
/// - `.digits`
/// - `digits`
///
/// Each form takes an optional leading `+` or `-`. The token must end at
/// whitespace, a delimiter or the end of input, so `1.2.3` and `12abc` are
/// rejected as a whole.
pub fn numeric(input: &[u8]) -> IResult<&[u8], &[u8]> {
    let number = recognize(preceded(
        opt(one_of("+-")),
        alt((
            recognize((digit1, tag("."), digit1)),
            recognize((digit1, tag("."))),
            recognize((tag("."), digit1)),
            digit1,
        )),
    ));

    terminated(number, boundary).parse(input)
}
