/// Represents the payload of a PDF stream, exactly as stored in the file.
///
/// The bytes span from just after the `stream` keyword and its end-of-line
/// marker up to (not including) the `endstream` keyword. Nothing is decoded:
/// applying `/Filter` entries of the stream dictionary is left to the caller.
/// The dictionary itself is a separate [`Value`](crate::Value) sitting right
/// before the stream inside the indirect object contents.
///
/// # Example
/// ```text
/// <<
///   /Length 128
///   /Filter /FlateDecode
/// >>
/// stream
/// ...compressed binary data...
/// endstream
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Stream {
    offset: usize,
    data: Vec<u8>,
}

impl Stream {
    /// `offset` is the position of the `stream` keyword in the document.
    pub fn new(offset: usize, data: impl Into<Vec<u8>>) -> Self {
        Self {
            offset,
            data: data.into(),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn raw_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
