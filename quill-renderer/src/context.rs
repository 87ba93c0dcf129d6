//! Template data — the serializable payload every node template receives.

use serde::Serialize;
use serde_json::{Map, Value};

use quill_core::PageMeta;

use crate::error::RenderError;

/// Per-node configuration mapping (heading level, emphasis tag, …).
pub type Config = Map<String, Value>;

/// The four inputs a node template composes: page metadata, kind-specific
/// configuration, the node's own inline content, and the already-rendered
/// child subtree.
///
/// Templates place these according to their own layout; instantiation is a
/// single combination step, never nested substitution.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateData {
    pub meta: PageMeta,
    pub config: Config,
    pub content: String,
    pub children: String,
}

impl TemplateData {
    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
