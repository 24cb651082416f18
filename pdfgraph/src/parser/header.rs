use nom::{
    IResult, ParseTo, Parser,
    bytes::complete::tag,
    character::complete::digit1,
    sequence::{preceded, separated_pair},
};

/// Parses the file header and returns the major and minor version numbers.
///
/// # Example
/// ```text
/// %PDF-1.7
/// ```
pub fn version(input: &[u8]) -> IResult<&[u8], (u16, u16)> {
    let number = || digit1.map_opt(|digits: &[u8]| digits.parse_to());

    preceded(tag("%PDF-"), separated_pair(number(), tag("."), number())).parse(input)
}
