use crate::parser::{decode_hexadecimal, decode_literal};

/// A literal string as it appeared between its outer parentheses.
///
/// The tokenizer only finds the string boundaries (balanced parentheses,
/// escaped parentheses), it does not interpret escapes. `(a(b)c)` keeps the
/// raw content `a(b)c`, and `(x\n)` keeps the two bytes `\` `n`.
///
/// # Examples
/// ```text
/// (Hello World)              // raw = Hello World
/// (Hello\nWorld)             // raw keeps the escape, decode() yields a newline
/// (Nested (parens) ok)       // raw = Nested (parens) ok
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LiteralString {
    raw: Vec<u8>,
}

impl LiteralString {
    pub fn new(raw: impl Into<Vec<u8>>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Resolves escape sequences.
    ///
    /// Handles `\n \r \t \b \f \( \) \\`, one to three digit octal codes and
    /// backslash line continuations. A bare end-of-line becomes `\n`, and an
    /// unknown escape keeps the escaped byte while dropping the backslash.
    pub fn decode(&self) -> Vec<u8> {
        decode_literal(&self.raw)
    }
}

/// A hexadecimal string as it appeared between `<` and `>`.
///
/// # Examples
/// ```text
/// <48656C6C6F>               // decode() = Hello
/// <4F60 597D>                // whitespace between digits is ignored
/// <ABC>                      // odd digit count, decode() = [0xAB, 0xC0]
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HexString {
    raw: Vec<u8>,
}

impl HexString {
    pub fn new(raw: impl Into<Vec<u8>>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Converts the hex digits into bytes, padding an odd final digit with `0`.
    pub fn decode(&self) -> Vec<u8> {
        decode_hexadecimal(&self.raw)
    }
}
