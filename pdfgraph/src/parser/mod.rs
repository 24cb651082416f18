mod header;
mod keyword;
mod name;
mod numeric;
mod stream;
mod string;
mod whitespace;
mod xref;

pub use header::version;
pub use keyword::{boolean, keyword, null};
pub use name::{decode_name, name};
pub use numeric::numeric;
pub use stream::{stream, stream_with_length};
pub use string::{decode_hexadecimal, decode_literal, hexadecimal_string, literal_string};
pub use whitespace::{comment, skip_whitespace};
pub use xref::{RawSubsection, subsection as xref_subsection};
