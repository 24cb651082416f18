use std::io::Read;

use flate2::read::ZlibDecoder;
use pdfgraph::{Dictionary, Stream, Value};
use snafu::{ResultExt, Snafu};

#[derive(Debug, Snafu)]
pub struct Error(error::Error);
type Result<T> = std::result::Result<T, Error>;

/// Upper bound on the preallocated output, as a multiple of the encoded size.
const MAX_EXPANSION: usize = 64;

/// Filters this tool knows how to undo.
#[derive(Debug, PartialEq)]
enum Filter {
    FlateDecode,
    Pipeline(Vec<Filter>),
}

/// Decodes a stream payload according to the `/Filter` of its dictionary.
///
/// Returns the raw bytes unchanged when there is no filter. Only
/// `/FlateDecode` is supported, alone or in an array.
pub fn decode(dictionary: &Dictionary, stream: &Stream) -> Result<Vec<u8>> {
    let Some(filter) = dictionary.get("/Filter") else {
        return Ok(stream.raw_bytes().to_vec());
    };

    // `/DL` comes from the file, so it only sizes the buffer up to a bound.
    let capacity = dictionary
        .get("/DL")
        .and_then(|length| length.as_integer::<usize>().ok())
        .unwrap_or(stream.len())
        .min(stream.len().saturating_mul(MAX_EXPANSION));

    apply_filter(stream.raw_bytes(), &filter_of(filter)?, capacity)
}

fn filter_of(value: &Value) -> Result<Filter> {
    match value {
        Value::Name(name) => match name.as_str() {
            "/FlateDecode" => Ok(Filter::FlateDecode),
            _ => Err(error::Error::UnsupportedFilter {
                name: name.to_string(),
            }
            .into()),
        },
        Value::Array(pipeline) => Ok(Filter::Pipeline(
            pipeline.iter().map(filter_of).collect::<Result<Vec<_>>>()?,
        )),
        _ => Err(error::Error::InvalidFilterValue {
            got: value.type_name(),
        }
        .into()),
    }
}

fn apply_filter(data: &[u8], filter: &Filter, capacity: usize) -> Result<Vec<u8>> {
    match filter {
        Filter::FlateDecode => {
            let mut decoder = ZlibDecoder::new(data);
            let mut data = Vec::with_capacity(capacity);

            decoder
                .read_to_end(&mut data)
                .context(error::Decompression)?;

            Ok(data)
        }
        Filter::Pipeline(filters) => filters
            .iter()
            .try_fold(data.to_vec(), |data, filter| apply_filter(&data, filter, capacity)),
    }
}

mod error {
    use snafu::Snafu;

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(super)), context(suffix(false)))]
    pub(super) enum Error {
        #[snafu(display("Unsupported stream filter {name}"))]
        UnsupportedFilter { name: String },

        #[snafu(display("Unsupported stream filters value. Got = {got}"))]
        InvalidFilterValue { got: &'static str },

        #[snafu(display("Error during decompression"))]
        Decompression { source: std::io::Error },
    }
}
