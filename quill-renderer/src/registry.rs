//! Template registry — node-kind-to-template dispatch.
//!
//! Every node kind maps to exactly one template. Default templates are baked
//! into the binary at compile time via `include_str!`; a user template
//! directory may override any of them by name. The registry is built once,
//! explicitly, and is immutable afterwards, so it is safe to share across
//! renders without synchronisation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use quill_core::NodeKind;

use crate::context::TemplateData;
use crate::error::{io_err, RenderError};

// ---------------------------------------------------------------------------
// Embedded templates
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("block/document.tera", include_str!("templates/block/document.tera")),
    ("block/text-block.tera", include_str!("templates/block/text-block.tera")),
    ("block/paragraph.tera", include_str!("templates/block/paragraph.tera")),
    ("block/heading.tera", include_str!("templates/block/heading.tera")),
    (
        "block/thematic-break.tera",
        include_str!("templates/block/thematic-break.tera"),
    ),
    ("block/code-block.tera", include_str!("templates/block/code-block.tera")),
    (
        "block/fenced-code-block.tera",
        include_str!("templates/block/fenced-code-block.tera"),
    ),
    ("block/blockquote.tera", include_str!("templates/block/blockquote.tera")),
    ("block/list.tera", include_str!("templates/block/list.tera")),
    ("block/list-item.tera", include_str!("templates/block/list-item.tera")),
    ("block/html-block.tera", include_str!("templates/block/html-block.tera")),
    ("inline/text.tera", include_str!("templates/inline/text.tera")),
    ("inline/string.tera", include_str!("templates/inline/string.tera")),
    ("inline/code-span.tera", include_str!("templates/inline/code-span.tera")),
    ("inline/emphasis.tera", include_str!("templates/inline/emphasis.tera")),
    ("inline/link.tera", include_str!("templates/inline/link.tera")),
    ("inline/image.tera", include_str!("templates/inline/image.tera")),
    ("inline/autolink.tera", include_str!("templates/inline/autolink.tera")),
    ("inline/raw-html.tera", include_str!("templates/inline/raw-html.tera")),
];

/// Template name for a node kind. Exhaustive: adding a kind without a
/// template is a compile error, not a runtime surprise.
pub fn template_name(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Document => "block/document.tera",
        NodeKind::TextBlock => "block/text-block.tera",
        NodeKind::Paragraph => "block/paragraph.tera",
        NodeKind::Heading { .. } => "block/heading.tera",
        NodeKind::ThematicBreak => "block/thematic-break.tera",
        NodeKind::CodeBlock { .. } => "block/code-block.tera",
        NodeKind::FencedCodeBlock { .. } => "block/fenced-code-block.tera",
        NodeKind::Blockquote => "block/blockquote.tera",
        NodeKind::List { .. } => "block/list.tera",
        NodeKind::ListItem => "block/list-item.tera",
        NodeKind::HtmlBlock => "block/html-block.tera",
        NodeKind::Text { .. } => "inline/text.tera",
        NodeKind::Str { .. } => "inline/string.tera",
        NodeKind::CodeSpan => "inline/code-span.tera",
        NodeKind::Emphasis { .. } => "inline/emphasis.tera",
        NodeKind::Link { .. } => "inline/link.tera",
        NodeKind::Image { .. } => "inline/image.tera",
        NodeKind::AutoLink { .. } => "inline/autolink.tera",
        NodeKind::RawHtml => "inline/raw-html.tera",
    }
}

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

// ---------------------------------------------------------------------------
// TemplateRegistry
// ---------------------------------------------------------------------------

/// Immutable binding of node kinds to template bodies.
///
/// `user_template_dir` may contain `.tera` files that override embedded
/// defaults. Template names are normalised to lowercase relative paths.
pub struct TemplateRegistry {
    tera: Tera,
}

impl TemplateRegistry {
    /// Construct a registry from the embedded templates plus any overrides
    /// found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let mut templates: HashMap<String, String> = HashMap::new();
        for (name, content) in TPLS {
            templates.insert(
                normalize_template_name(Path::new(name)),
                (*content).to_string(),
            );
        }
        if let Some(dir) = user_template_dir {
            for (name, content) in load_user_templates(dir)? {
                templates.insert(name, content);
            }
        }
        Self::from_templates(templates.into_iter().collect())
    }

    /// Construct a registry from an explicit `(name, body)` set.
    ///
    /// Kinds whose template name is absent from `templates` stay
    /// unregistered and fail at resolve time.
    pub fn from_templates(templates: Vec<(String, String)>) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates)?;
        Ok(TemplateRegistry { tera })
    }

    /// Whether `kind` has a template bound.
    pub fn contains(&self, kind: &NodeKind) -> bool {
        let name = template_name(kind);
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Resolve `kind`'s template and instantiate it with `data`.
    ///
    /// Fails with [`RenderError::UnregisteredKind`] when no template is
    /// bound for the kind; template execution failures surface as
    /// [`RenderError::Template`]. No default is ever substituted.
    pub fn render_for(&self, kind: &NodeKind, data: &TemplateData) -> Result<String, RenderError> {
        if !self.contains(kind) {
            return Err(RenderError::UnregisteredKind { kind: kind.name() });
        }
        let ctx = data.to_tera_context()?;
        Ok(self.tera.render(template_name(kind), &ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
