/// How the end of a stream payload is found.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum StreamLength {
    /// The payload ends at the first `endstream` after the `stream` keyword.
    ///
    /// Payloads that contain the bytes `endstream` are cut short.
    #[default]
    FirstEndstream,
    /// Use a direct integer `/Length` of the stream dictionary when
    /// `endstream` follows the declared span, otherwise fall back to
    /// [`StreamLength::FirstEndstream`].
    Declared,
}

/// Settings of a single parse.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ParseOptions {
    pub stream_length: StreamLength,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stream_length(mut self, stream_length: StreamLength) -> Self {
        self.stream_length = stream_length;
        self
    }
}
