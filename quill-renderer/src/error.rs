//! Error types for quill-renderer.

use std::path::PathBuf;

use thiserror::Error;

use quill_core::MetaError;

/// All errors that can arise from rendering and persisting a page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template error — covers both template parsing and execution.
    #[error("template engine error: {0}")]
    Template(#[from] tera::Error),

    /// JSON serialization error (building the tera context).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error while loading user templates.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A node kind has no template in the registry.
    #[error("no template registered for node kind ({kind})")]
    UnregisteredKind { kind: &'static str },

    /// Page metadata failed validation; no rendering is attempted.
    #[error(transparent)]
    Meta(#[from] MetaError),

    /// Filesystem error while writing the rendered page.
    #[error("output write error at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}

pub(crate) fn write_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Write {
        path: path.into(),
        source,
    }
}
