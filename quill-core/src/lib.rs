//! Quill core library — node model, page metadata, errors.
//!
//! Public API surface:
//! - [`node`] — [`Node`], [`NodeKind`], [`Span`]
//! - [`meta`] — [`FrontMatter`], [`PageMeta`]
//! - [`error`] — [`MetaError`]

pub mod error;
pub mod meta;
pub mod node;

pub use error::MetaError;
pub use meta::{FrontMatter, PageMeta};
pub use node::{Node, NodeKind, Span};
