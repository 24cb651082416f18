use std::path::PathBuf;

use clap::{ArgAction, Parser};
use pdfgraph::{ParseOptions, Reference, StreamLength};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    pub filename: PathBuf,

    /// Use the `/Length` of stream dictionaries to find where payloads end
    #[arg(long)]
    pub declared_length: bool,

    /// Print one object, given as `ID GEN`
    #[arg(long, num_args = 2, value_names = ["ID", "GEN"])]
    pub object: Option<Vec<usize>>,

    /// Inflate `/FlateDecode` payloads of the printed object
    #[arg(long, requires = "object")]
    pub inflate: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn options(&self) -> ParseOptions {
        let stream_length = if self.declared_length {
            StreamLength::Declared
        } else {
            StreamLength::FirstEndstream
        };

        ParseOptions::new().with_stream_length(stream_length)
    }

    pub fn object(&self) -> Option<Reference> {
        match self.object.as_deref() {
            Some([id, generation]) => Some(Reference::new(*id, *generation)),
            _ => None,
        }
    }

    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
