//! Error types for quill-core.

use thiserror::Error;

/// All errors that can arise from page metadata validation.
#[derive(Debug, Error)]
pub enum MetaError {
    /// A required front matter field is absent or not string-coercible.
    #[error("page metadata is missing required field \"{field}\"")]
    MissingField { field: &'static str },

    /// The `path` field does not begin with a forward slash.
    #[error("page path \"{path}\" must begin with a \"/\" (forward slash)")]
    InvalidPath { path: String },
}
