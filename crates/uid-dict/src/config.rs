//! Generator configuration.
//!
//! Every process-wide constant (source URL, local filename, table caption,
//! expected revision, destination path) is explicit configuration so the
//! pipeline can be exercised against synthetic documents without touching
//! the network or a real standards checkout.

use std::path::PathBuf;

/// Published location of Part 6 of the DICOM Standard, docbook format.
pub const PART06_URL: &str =
    "http://medical.nema.org/medical/dicom/current/source/docbook/part06/part06.xml";

/// Filename resolved inside a local standards directory.
pub const PART06_FILENAME: &str = "part06.xml";

/// Caption of the UID registry table (Table A-1).
pub const UID_TABLE_CAPTION: &str = "UID Values";

/// Standard revision the host library currently tracks.
pub const EXPECTED_REVISION: &str = "2025b";

/// Default destination for the generated dictionary source.
pub const DEFAULT_OUTPUT: &str = "uid_dictionary.rs";

/// Where the Part 6 document comes from.
#[derive(Debug, Clone)]
pub enum SourceSpec {
    /// Read `part06.xml` from a local directory.
    LocalDir(PathBuf),
    /// Fetch the document over HTTP.
    Download { url: String },
}

/// Full configuration for one generator run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub source: SourceSpec,
    pub table_caption: String,
    pub expected_revision: String,
    pub output_path: PathBuf,
}

impl GeneratorConfig {
    /// Configuration with the published defaults for the given source.
    #[must_use]
    pub fn new(source: SourceSpec) -> Self {
        Self {
            source,
            table_caption: UID_TABLE_CAPTION.to_string(),
            expected_revision: EXPECTED_REVISION.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    /// Override the caption of the table to convert.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.table_caption = caption.into();
        self
    }

    /// Override the revision the run is checked against.
    #[must_use]
    pub fn with_expected_revision(mut self, revision: impl Into<String>) -> Self {
        self.expected_revision = revision.into();
        self
    }

    /// Override the destination path.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}
