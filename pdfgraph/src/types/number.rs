use std::fmt::Display;

use nom::ParseTo;
use smol_str::SmolStr;

/// Represents a numeric token exactly as it was written in the document.
///
/// PDF distinguishes integers (`42`, `-17`) from reals (`3.14`, `3.`, `.5`, `-3.14`).
/// The source text is kept verbatim so the distinction survives, and so that
/// writing the number back produces the original bytes. Conversions to Rust
/// numeric types are done on demand.
///
/// # Examples
/// 42              // Integer
/// +17             // Integer with explicit sign
/// 3.14            // Real
/// 3.              // Real with trailing bare dot
/// -.002           // Real without integer part
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Number {
    text: SmolStr,
}

impl Number {
    pub fn new(text: impl Into<SmolStr>) -> Self {
        Self { text: text.into() }
    }

    /// Builds a number from the raw token bytes produced by the tokenizer.
    ///
    /// Numeric tokens are ASCII by construction, so the lossy conversion never
    /// replaces anything in practice.
    pub(crate) fn from_token(token: &[u8]) -> Self {
        Self::new(String::from_utf8_lossy(token).as_ref())
    }

    /// Returns the original textual form.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// `true` when the source text had no decimal point.
    pub fn is_integer(&self) -> bool {
        !self.text.contains('.')
    }

    /// Converts an integer token into `T`.
    ///
    /// Returns `None` for real tokens, even when their value is whole (`3.0`),
    /// and when the value does not fit into `T`.
    pub fn as_integer<T>(&self) -> Option<T>
    where
        T: TryFrom<i64>,
    {
        if !self.is_integer() {
            return None;
        }

        let value: i64 = self.text.as_bytes().parse_to()?;
        T::try_from(value).ok()
    }

    /// Converts either form into a floating point value.
    pub fn as_f64(&self) -> Option<f64> {
        self.text.as_bytes().parse_to()
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
