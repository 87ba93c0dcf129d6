//! Error types for quill-parser.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from parsing a markdown document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input path does not carry the `.md` extension.
    #[error("input file must be a markdown file with the '.md' extension: {path}")]
    NotMarkdown { path: PathBuf },

    /// Underlying I/O failure while reading the input file.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The front matter fence was found but its YAML did not parse.
    #[error("invalid front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}
