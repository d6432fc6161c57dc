//! Load the document, resolve every record and write the listing.

use anyhow::{Context, Result};
use spritelist_core::document;
use spritelist_core::generate::generate;
use spritelist_core::render::render;
use std::io::Write;

use super::Options;

/// Writes the rendered listing to `out`.
///
/// The whole listing is built before the first byte is written, so a failing
/// record leaves `out` untouched.
pub fn run_generate<W: Write>(opts: &Options, out: &mut W) -> Result<()> {
    let doc = document::load_document(&opts.input)
        .with_context(|| format!("load {}", opts.input.display()))?;
    let entries = generate(&doc, &opts.template)?;
    let text = render(&entries, opts.format, &opts.array_name)?;

    out.write_all(text.as_bytes()).context("write output")?;
    out.flush().context("flush output")?;

    tracing::info!(
        input = %opts.input.display(),
        format = %opts.format,
        entries = entries.len(),
        "listing written"
    );
    Ok(())
}
