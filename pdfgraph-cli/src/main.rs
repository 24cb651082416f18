mod cli;
mod filters;
mod report;

use pdfgraph::ParsedDocument;
use snafu::{ResultExt, Whatever};

#[snafu::report]
fn main() -> Result<(), Whatever> {
    let cli = cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let document = ParsedDocument::from_path(&cli.filename, cli.options())
        .with_whatever_context(|_| format!("Failed to parse {}", cli.filename.display()))?;

    match cli.object() {
        Some(reference) => report::object(&document, &reference, cli.inflate)?,
        None => report::summary(&document),
    }

    Ok(())
}
