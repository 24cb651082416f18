use snafu::{OptionExt, Snafu};

use crate::types::{
    Array, Dictionary, HexString, IndirectObject, LiteralString, Name, Number, Reference, Stream,
};

#[derive(Debug, Snafu)]
pub struct Error(error::Error);
type Result<T> = std::result::Result<T, Error>;

/// Represents every value the parser can produce.
///
/// The set is closed: a document is a tree of these, and consumers walk it by
/// matching on the variant.
///
/// # Examples
/// true                       // Boolean
/// 42                         // Number (integer form)
/// 3.14                       // Number (real form)
/// (Hello World)              // LiteralString
/// <48656C6C6F>               // HexString
/// /Type                      // Name
/// null                       // Null
/// [1 2 3]                    // Array
/// << /Key /Value >>          // Dictionary
/// stream ... endstream       // Stream
/// 1 0 R                      // Reference
/// 1 0 obj ... endobj         // IndirectObject
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Value {
    /// Null object represented by the 'null' literal
    Null,
    /// A boolean value (true/false literal)
    Boolean(bool),
    /// Numeric token in its original textual form
    Number(Number),
    /// String in parentheses, escapes not decoded
    LiteralString(LiteralString),
    /// String in angle brackets, digits not decoded
    HexString(HexString),
    /// Names starting with '/' followed by a sequence of characters
    Name(Name),
    /// Array object, contains 0 or more values
    Array(Array),
    /// Dictionary object, contains key-value pairs
    Dictionary(Dictionary),
    /// Raw stream payload
    Stream(Stream),
    /// Indirect reference to an object, used to reference objects defined elsewhere in the PDF
    Reference(Reference),
    /// Indirect object definition
    IndirectObject(IndirectObject),
}

impl Value {
    /// Short variant name, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Boolean(_) => "Boolean",
            Value::Number(_) => "Number",
            Value::LiteralString(_) => "LiteralString",
            Value::HexString(_) => "HexString",
            Value::Name(_) => "Name",
            Value::Array(_) => "Array",
            Value::Dictionary(_) => "Dictionary",
            Value::Stream(_) => "Stream",
            Value::Reference(_) => "Reference",
            Value::IndirectObject(_) => "IndirectObject",
        }
    }

    /// Checks if the value is a null object.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Boolean(data) => Ok(*data),
            _ => Err(self.unexpected("Boolean")),
        }
    }

    pub fn as_number(&self) -> Result<&Number> {
        match self {
            Value::Number(number) => Ok(number),
            _ => Err(self.unexpected("Number")),
        }
    }

    /// Attempts to convert the value to an integer of type `T`.
    ///
    /// Only succeeds if the value is a number written in integer form and it
    /// fits into `T`.
    ///
    /// # Errors
    /// Returns an error if the value is not a number, is written as a real,
    /// or overflows `T`.
    pub fn as_integer<T>(&self) -> Result<T>
    where
        T: TryFrom<i64>,
    {
        let number = self.as_number()?;

        Ok(number.as_integer().with_context(|| error::TypeConversion {
            text: number.to_string(),
        })?)
    }

    /// Converts a number in either form to `f64`.
    pub fn as_f64(&self) -> Result<f64> {
        let number = self.as_number()?;

        Ok(number.as_f64().with_context(|| error::TypeConversion {
            text: number.to_string(),
        })?)
    }

    pub fn as_name(&self) -> Result<&Name> {
        match self {
            Value::Name(name) => Ok(name),
            _ => Err(self.unexpected("Name")),
        }
    }

    pub fn as_array(&self) -> Result<&Array> {
        match self {
            Value::Array(array) => Ok(array),
            _ => Err(self.unexpected("Array")),
        }
    }

    pub fn as_dictionary(&self) -> Result<&Dictionary> {
        match self {
            Value::Dictionary(dictionary) => Ok(dictionary),
            _ => Err(self.unexpected("Dictionary")),
        }
    }

    pub fn as_stream(&self) -> Result<&Stream> {
        match self {
            Value::Stream(stream) => Ok(stream),
            _ => Err(self.unexpected("Stream")),
        }
    }

    pub fn as_reference(&self) -> Result<&Reference> {
        match self {
            Value::Reference(reference) => Ok(reference),
            _ => Err(self.unexpected("Reference")),
        }
    }

    pub fn as_indirect_object(&self) -> Result<&IndirectObject> {
        match self {
            Value::IndirectObject(object) => Ok(object),
            _ => Err(self.unexpected("IndirectObject")),
        }
    }

    fn unexpected(&self, expected: &'static str) -> Error {
        error::Error::UnexpectedType {
            expected,
            got: self.type_name(),
        }
        .into()
    }
}

mod error {
    use snafu::Snafu;

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(super)), context(suffix(false)))]
    pub(super) enum Error {
        #[snafu(display("Unexpected value type. Expected = {expected}. Got = {got}"))]
        UnexpectedType {
            expected: &'static str,
            got: &'static str,
        },

        #[snafu(display("Can't convert `{text}` into Rust type"))]
        TypeConversion { text: String },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let number = Value::Number(Number::new("12"));
        assert_eq!(number.as_integer::<u32>().ok(), Some(12));
        assert_eq!(number.as_f64().ok(), Some(12.0));
        assert!(number.as_name().is_err());

        let real = Value::Number(Number::new("1.5"));
        assert!(real.as_integer::<i64>().is_err());
        assert_eq!(real.as_f64().ok(), Some(1.5));

        let name = Value::Name(Name::from("/Catalog"));
        assert_eq!(name.as_name().map(|name| name.as_str()).ok(), Some("/Catalog"));

        let reference = Value::Reference(Reference::new(2, 0));
        assert_eq!(reference.as_reference().ok(), Some(&Reference::new(2, 0)));
        assert!(Value::Null.is_null());
        assert!(Value::Boolean(true).as_bool().unwrap_or(false));
    }

    #[test]
    fn test_unexpected_type_message() {
        let err = Value::Null.as_dictionary().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected value type. Expected = Dictionary. Got = Null"
        );
    }
}
