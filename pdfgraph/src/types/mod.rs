pub mod array;
pub mod dictionary;
pub mod indirect_object;
pub mod name;
pub mod number;
pub mod stream;
pub mod string;
pub mod value;

pub use array::Array;
pub use dictionary::Dictionary;
pub use indirect_object::{IndirectObject, Reference};
pub use name::Name;
pub use number::Number;
pub use stream::Stream;
pub use string::{HexString, LiteralString};
pub use value::Value;

pub use value::Error as ValueError;
