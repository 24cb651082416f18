use pdfgraph::{IndirectObject, ParsedDocument, Reference, Value};
use snafu::{ResultExt, Whatever};

use crate::filters;

/// Prints the structure of the document: header, revisions, cross-reference
/// tables, trailer, catalog and page tree.
///
/// Broken references are reported and skipped.
pub fn summary(document: &ParsedDocument) {
    println!("Version: {}", document.version());
    println!("Objects: {}", document.objects().len());
    println!("Revisions: {}", document.revision_count());

    for offset in document.startxref_offsets() {
        println!("startxref {offset}");
    }

    for section in document.xref_sections() {
        println!("xref at {} ({} entries)", section.offset, section.len());
        for subsection in &section.subsections {
            let in_use = subsection.entries.iter().filter(|entry| entry.in_use).count();
            println!(
                "  {} {} ({in_use} in use)",
                subsection.first_id, subsection.count
            );
        }
    }

    println!("Trailer: {}", render(&Value::Dictionary(document.trailer().clone())));

    match document.catalog() {
        Ok(catalog) => println!("Catalog: {}", render_object(catalog)),
        Err(err) => tracing::warn!("{err}"),
    }

    if let Some(info) = document.info() {
        println!("Info: {}", render_object(info));
    }

    match document.pages() {
        Ok(pages) => println!("Pages: {}", pages.reference()),
        Err(err) => tracing::warn!("{err}"),
    }

    match document.page_count() {
        Ok(count) => println!("Page count: {count}"),
        Err(err) => tracing::warn!("{err}"),
    }

    match document.page_leaves() {
        Ok(leaves) => {
            let references = leaves
                .iter()
                .map(|page| page.reference().to_string())
                .collect::<Vec<_>>();
            println!("Page leaves: {}", references.join(", "));
        }
        Err(err) => tracing::warn!("{err}"),
    }
}

/// Prints one object, optionally with its stream payloads inflated.
pub fn object(document: &ParsedDocument, reference: &Reference, inflate: bool) -> Result<(), Whatever> {
    let object = document
        .resolve(reference)
        .whatever_context("Failed to resolve object")?;

    println!("{} obj", object.reference());
    for value in object.contents() {
        match (value, object.dictionary()) {
            (Value::Stream(stream), Some(dictionary)) if inflate => {
                let data = filters::decode(dictionary, stream)
                    .with_whatever_context(|_| format!("Failed to decode stream of {reference}"))?;

                println!("stream ({} bytes decoded)", data.len());
                println!("{}", String::from_utf8_lossy(&data));
                println!("endstream");
            }
            _ => println!("{}", render(value)),
        }
    }
    println!("endobj");

    Ok(())
}

fn render_object(object: &IndirectObject) -> String {
    let contents = object.contents().iter().map(render).collect::<Vec<_>>();

    format!("{} obj {} endobj", object.reference(), contents.join(" "))
}

/// Writes a value back in a compact, single line form.
fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Boolean(data) => data.to_string(),
        Value::Number(number) => number.to_string(),
        Value::LiteralString(string) => format!("({})", String::from_utf8_lossy(string.raw_bytes())),
        Value::HexString(string) => format!("<{}>", String::from_utf8_lossy(string.raw_bytes())),
        Value::Name(name) => name.to_string(),
        Value::Array(array) => {
            let values = array.iter().map(render).collect::<Vec<_>>();
            format!("[{}]", values.join(" "))
        }
        Value::Dictionary(dictionary) => {
            let records = dictionary
                .iter()
                .map(|(key, value)| format!("{key} {}", render(value)))
                .collect::<Vec<_>>();
            format!("<< {} >>", records.join(" "))
        }
        Value::Stream(stream) => format!("stream ({} bytes at {})", stream.len(), stream.offset()),
        Value::Reference(reference) => reference.to_string(),
        Value::IndirectObject(object) => render_object(object),
    }
}
