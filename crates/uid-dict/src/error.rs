use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to download {url}: {message}")]
    Download { url: String, message: String },

    #[error("failed to parse document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("no table with caption {caption:?} in document")]
    TableNotFound { caption: String },

    #[error("document has no subtitle element")]
    MissingSubtitle,

    #[error("cannot extract a revision from subtitle {text:?}")]
    MalformedSubtitle { text: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
