//! Generate a static UID lookup table from Part 6 of the DICOM Standard.
//!
//! One sequential pass: acquire the docbook document, locate the
//! "UID Values" table, extract one six-field record per row, apply the
//! global substitutions, check the document revision (warning only), and
//! render the records as a generated Rust source file. Runs offline,
//! once per standard revision; never on a request path.

#![deny(unsafe_code)]

use std::path::PathBuf;

pub mod codegen;
pub mod config;
pub mod docbook;
pub mod error;
pub mod model;
pub mod source;
pub mod transform;
pub mod version;

pub use config::{GeneratorConfig, SourceSpec};
pub use error::GenerateError;
pub use model::UidEntry;

/// Summary of a completed run, consumed by the CLI.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of dictionary entries written.
    pub entry_count: usize,
    /// Revision found in the document subtitle.
    pub revision: String,
    /// Where the generated source was written.
    pub output_path: PathBuf,
}

/// Run the whole conversion for one configuration.
///
/// Either the whole table converts or the run fails before any output is
/// written; the destination is only opened once all records are rendered.
/// A revision mismatch is logged as a warning and does not abort.
pub fn generate(config: &GeneratorConfig) -> Result<GenerateReport, GenerateError> {
    let xml = source::acquire(&config.source)?;
    let document = docbook::parse_document(&xml, &config.table_caption)?;

    let subtitle = document.subtitle.ok_or(GenerateError::MissingSubtitle)?;
    let revision = version::revision_token(&subtitle)?.to_string();
    if let version::RevisionCheck::Mismatch { document, expected } =
        version::check_revision(&revision, &config.expected_revision)
    {
        tracing::warn!(
            document = %document,
            expected = %expected,
            "document revision differs from the expected revision; update the host library"
        );
    }

    let mut entries = document.entries;
    transform::apply_substitutions(&mut entries);

    let rendered = codegen::render(&entries);
    codegen::write_dictionary(&config.output_path, &rendered)?;
    tracing::info!(
        entries = entries.len(),
        output = %config.output_path.display(),
        "dictionary written"
    );

    Ok(GenerateReport {
        entry_count: entries.len(),
        revision,
        output_path: config.output_path.clone(),
    })
}
