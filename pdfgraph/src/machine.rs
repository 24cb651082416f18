use snafu::ensure;

use crate::{
    error::{
        MalformedDictionary, MissingOperands, MissingTrailerMarker, ParseError,
        UnbalancedDelimiter,
    },
    lexer::{Lexer, Token},
    objects::ObjectTable,
    options::{ParseOptions, StreamLength},
    types::{
        Array, Dictionary, HexString, IndirectObject, LiteralString, Name, Number, Reference,
        Stream, Value,
    },
    xref::XrefSection,
};

type Result<T> = std::result::Result<T, ParseError>;

/// Opens a scope on the operand stack.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Marker {
    Array,
    Dictionary,
    Object(Reference),
    Trailer,
}

impl Marker {
    fn token(&self) -> &'static str {
        match self {
            Marker::Array => "[",
            Marker::Dictionary => "<<",
            Marker::Object(_) => "obj",
            Marker::Trailer => "trailer",
        }
    }
}

#[derive(Debug)]
enum Entry {
    Value(Value),
    Marker(Marker),
}

/// Everything a finished parse produced.
#[derive(Debug, Default)]
pub(crate) struct Output {
    pub objects: ObjectTable,
    pub trailer: Dictionary,
    pub xref_sections: Vec<XrefSection>,
    pub startxref_offsets: Vec<u64>,
    pub revision_count: usize,
    pub body: Vec<Value>,
}

/// Builds values from tokens with an operand stack.
///
/// Scalars are pushed as they come. Opening tokens push a marker, closing
/// tokens pop everything down to the nearest marker and push the composite
/// built from it. `obj` registers its object before the body is read, so a
/// body referring to its own object can be resolved.
pub(crate) struct Machine<'a> {
    lexer: Lexer<'a>,
    options: ParseOptions,
    stack: Vec<(usize, Entry)>,
    output: Output,
    expect_startxref_offset: bool,
}

impl<'a> Machine<'a> {
    pub fn new(input: &'a [u8], options: ParseOptions) -> Self {
        Self {
            lexer: Lexer::new(input),
            options,
            stack: Vec::new(),
            output: Output::default(),
            expect_startxref_offset: false,
        }
    }

    pub fn run(mut self) -> Result<Output> {
        while let Some(token) = self.lexer.next() {
            let (offset, token) = token?;
            self.step(offset, token)?;
        }

        self.finish()
    }

    fn step(&mut self, offset: usize, token: Token<'a>) -> Result<()> {
        let after_startxref = std::mem::take(&mut self.expect_startxref_offset);

        match token {
            Token::Comment(_) => self.expect_startxref_offset = after_startxref,
            Token::Boolean(data) => self.push(offset, Value::Boolean(data)),
            Token::Number(text) => {
                let number = Number::from_token(text);
                if after_startxref {
                    self.output.startxref_offsets.extend(number.as_integer::<u64>());
                }
                self.push(offset, Value::Number(number));
            }
            Token::LiteralString(raw) => {
                self.push(offset, Value::LiteralString(LiteralString::new(raw)))
            }
            Token::HexString(raw) => self.push(offset, Value::HexString(HexString::new(raw))),
            Token::Name(raw) => self.push(offset, Value::Name(Name::from_token(raw))),
            Token::Null => self.push(offset, Value::Null),
            Token::Stream {
                offset: data_offset,
                data,
            } => self.push(offset, Value::Stream(Stream::new(data_offset, data))),
            Token::ArrayBegin => self.open(offset, Marker::Array),
            Token::ArrayEnd => {
                let (_, values) = self.close(offset, "]", |marker| marker == Marker::Array)?;
                self.push(offset, Value::Array(Array::from(values)));
            }
            Token::DictionaryBegin => self.open(offset, Marker::Dictionary),
            Token::DictionaryEnd => {
                let (_, values) =
                    self.close(offset, ">>", |marker| marker == Marker::Dictionary)?;
                let dictionary = dictionary(offset, values)?;
                self.declare_stream_length(&dictionary);
                self.push(offset, Value::Dictionary(dictionary));
            }
            Token::Obj => {
                let reference = self.pop_reference(offset, "obj")?;
                self.output
                    .objects
                    .register(IndirectObject::new(reference, Vec::new()));
                self.open(offset, Marker::Object(reference));
            }
            Token::EndObj => {
                let (marker, values) =
                    self.close(offset, "endobj", |marker| matches!(marker, Marker::Object(_)))?;
                let Marker::Object(reference) = marker else {
                    return UnbalancedDelimiter {
                        offset,
                        token: "endobj",
                    }
                    .fail();
                };

                let object = IndirectObject::new(reference, values);
                self.output.objects.register(object.clone());
                self.push(offset, Value::IndirectObject(object));
            }
            Token::Reference => {
                let reference = self.pop_reference(offset, "R")?;
                self.push(offset, Value::Reference(reference));
            }
            Token::Xref(section) => self.output.xref_sections.push(section),
            Token::Trailer => self.open(offset, Marker::Trailer),
            Token::StartXref => {
                self.merge_trailer(offset)?;
                self.expect_startxref_offset = true;
            }
        }

        Ok(())
    }

    fn push(&mut self, offset: usize, value: Value) {
        self.stack.push((offset, Entry::Value(value)));
    }

    fn open(&mut self, offset: usize, marker: Marker) {
        self.stack.push((offset, Entry::Marker(marker)));
    }

    /// Pops every value above the nearest marker, then the marker itself.
    ///
    /// Values are returned in the order they were pushed.
    fn close(
        &mut self,
        offset: usize,
        token: &'static str,
        expected: impl Fn(Marker) -> bool,
    ) -> Result<(Marker, Vec<Value>)> {
        let Some(position) = self
            .stack
            .iter()
            .rposition(|(_, entry)| matches!(entry, Entry::Marker(_)))
        else {
            return UnbalancedDelimiter { offset, token }.fail();
        };

        let marker = match self.stack[position].1 {
            Entry::Marker(marker) if expected(marker) => marker,
            _ => return UnbalancedDelimiter { offset, token }.fail(),
        };

        let values = self
            .stack
            .drain(position..)
            .filter_map(|(_, entry)| match entry {
                Entry::Value(value) => Some(value),
                Entry::Marker(_) => None,
            })
            .collect();

        Ok((marker, values))
    }

    /// Pops the `id generation` pair in front of `obj` and `R`.
    fn pop_reference(&mut self, offset: usize, keyword: &'static str) -> Result<Reference> {
        let reference = match self.stack.as_slice() {
            [.., (_, Entry::Value(id)), (_, Entry::Value(generation))] => {
                match (id.as_integer::<usize>(), generation.as_integer::<usize>()) {
                    (Ok(id), Ok(generation)) => Some(Reference::new(id, generation)),
                    _ => None,
                }
            }
            _ => None,
        };

        let Some(reference) = reference else {
            return MissingOperands { offset, keyword }.fail();
        };
        self.stack.truncate(self.stack.len() - 2);

        Ok(reference)
    }

    fn merge_trailer(&mut self, offset: usize) -> Result<()> {
        let trailer = match self.stack.as_mut_slice() {
            [
                ..,
                (_, Entry::Marker(Marker::Trailer)),
                (_, Entry::Value(Value::Dictionary(dictionary))),
            ] => std::mem::take(dictionary),
            _ => return MissingTrailerMarker { offset }.fail(),
        };
        self.stack.truncate(self.stack.len() - 2);

        let keys = trailer.len();
        self.output.trailer.merge(trailer);
        self.output.revision_count += 1;

        tracing::debug!(
            offset,
            keys,
            revision = self.output.revision_count,
            "Merged trailer"
        );

        Ok(())
    }

    fn declare_stream_length(&mut self, dictionary: &Dictionary) {
        if self.options.stream_length != StreamLength::Declared {
            return;
        }

        if let Some(length) = dictionary
            .get("/Length")
            .and_then(|length| length.as_integer::<usize>().ok())
        {
            self.lexer.declare_stream_length(length);
        }
    }

    fn finish(mut self) -> Result<Output> {
        if let Some((offset, Entry::Marker(marker))) = self
            .stack
            .iter()
            .find(|(_, entry)| matches!(entry, Entry::Marker(_)))
        {
            return UnbalancedDelimiter {
                offset: *offset,
                token: marker.token(),
            }
            .fail();
        }

        self.output.body = self
            .stack
            .into_iter()
            .filter_map(|(_, entry)| match entry {
                Entry::Value(value) => Some(value),
                Entry::Marker(_) => None,
            })
            .collect();

        tracing::debug!(
            objects = self.output.objects.len(),
            revisions = self.output.revision_count,
            xref_sections = self.output.xref_sections.len(),
            "Parsed document"
        );

        Ok(self.output)
    }
}

/// Pairs up the values of a dictionary scope.
fn dictionary(offset: usize, values: Vec<Value>) -> Result<Dictionary> {
    ensure!(
        values.len() % 2 == 0,
        MalformedDictionary {
            offset,
            reason: format!("odd number of values ({})", values.len()),
        }
    );

    let mut dictionary = Dictionary::new();
    let mut values = values.into_iter();

    while let (Some(key), Some(value)) = (values.next(), values.next()) {
        let Value::Name(key) = key else {
            return MalformedDictionary {
                offset,
                reason: format!("key is a {}, not a Name", key.type_name()),
            }
            .fail();
        };

        dictionary.insert(key, value);
    }

    Ok(dictionary)
}
