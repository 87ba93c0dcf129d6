//! Recursive renderer — depth-first, order-preserving tree walk.

use std::path::Path;

use quill_core::{Node, PageMeta};

use crate::context::TemplateData;
use crate::error::RenderError;
use crate::extract;
use crate::registry::TemplateRegistry;

/// Renders a document tree into a single HTML string.
///
/// Holds an immutable [`TemplateRegistry`]; create once and reuse across
/// pages. Rendering itself is synchronous and purely recursive — recursion
/// depth is bounded by document nesting depth.
pub struct Renderer {
    registry: TemplateRegistry,
}

impl Renderer {
    /// Construct a [`Renderer`] with the embedded templates plus any
    /// overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        Ok(Renderer {
            registry: TemplateRegistry::new(user_template_dir)?,
        })
    }

    /// Construct a [`Renderer`] over a caller-built registry.
    pub fn with_registry(registry: TemplateRegistry) -> Self {
        Renderer { registry }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Render `node` and everything reachable through its child and sibling
    /// chains, in document order.
    ///
    /// Any failure at any visited node aborts the whole render; there is no
    /// partial output. `source` must be the exact buffer the node spans were
    /// produced against.
    pub fn render(
        &self,
        meta: &PageMeta,
        node: &Node,
        source: &[u8],
    ) -> Result<String, RenderError> {
        // Children first: the first child renders its whole sibling chain.
        let children = match node.first_child.as_deref() {
            Some(first) => self.render(meta, first, source)?,
            None => String::new(),
        };

        let data = TemplateData {
            meta: meta.clone(),
            config: extract::config(node),
            content: extract::content(node, source),
            children,
        };
        let output = self.registry.render_for(&node.kind, &data)?;

        // Sibling chain joins with a single newline, preserving order.
        match node.next_sibling.as_deref() {
            Some(sibling) => {
                let sibling_output = self.render(meta, sibling, source)?;
                Ok(format!("{output}\n{sibling_output}"))
            }
            None => Ok(output),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::{NodeKind, Span};

    fn make_meta() -> PageMeta {
        PageMeta {
            title: "Home".into(),
            description: "The home page".into(),
            slug: "home".into(),
            path: "/".into(),
            extra: Default::default(),
        }
    }

    fn text(span: Span, soft_break: bool) -> Node {
        Node::new(NodeKind::Text { span, soft_break })
    }

    #[test]
    fn lone_node_renders_exactly_its_own_fragment() {
        let renderer = Renderer::new(None).unwrap();
        let node = Node::new(NodeKind::ThematicBreak);
        let html = renderer.render(&make_meta(), &node, b"").unwrap();
        assert_eq!(html, "<hr/>", "no trailing separator on a lone node");
    }

    #[test]
    fn sibling_chain_joins_with_single_newlines_in_order() {
        let renderer = Renderer::new(None).unwrap();
        let source = b"abc";
        let chain = Node::with_children(
            NodeKind::Paragraph,
            vec![
                text(Span::new(0, 1), true),
                text(Span::new(1, 2), true),
                text(Span::new(2, 3), true),
            ],
        );
        let html = renderer.render(&make_meta(), &chain, source).unwrap();
        assert_eq!(html, "<p>a\n\nb\n\nc\n</p>");
    }

    #[test]
    fn children_render_before_the_parent_composes() {
        let renderer = Renderer::new(None).unwrap();
        let source = b"deep";
        let tree = Node::with_children(
            NodeKind::Blockquote,
            vec![Node::with_children(
                NodeKind::Paragraph,
                vec![text(Span::new(0, 4), true)],
            )],
        );
        let html = renderer.render(&make_meta(), &tree, source).unwrap();
        assert_eq!(html, "<blockquote><p>deep\n</p></blockquote>");
    }

    #[test]
    fn heading_template_receives_level_verbatim() {
        let renderer = Renderer::new(None).unwrap();
        let source = b"Title";
        let heading = Node::with_children(
            NodeKind::Heading { level: 3 },
            vec![text(Span::new(0, 5), true)],
        );
        let html = renderer.render(&make_meta(), &heading, source).unwrap();
        assert_eq!(html, "<h3>Title\n</h3>");
    }

    #[test]
    fn emphasis_tag_choice_flows_into_markup() {
        let renderer = Renderer::new(None).unwrap();
        let source = b"hi";
        let em = Node::with_children(
            NodeKind::Emphasis { level: 1 },
            vec![text(Span::new(0, 2), true)],
        );
        let strong = Node::with_children(
            NodeKind::Emphasis { level: 2 },
            vec![text(Span::new(0, 2), true)],
        );
        let meta = make_meta();
        assert_eq!(renderer.render(&meta, &em, source).unwrap(), "<em>hi\n</em>");
        assert_eq!(
            renderer.render(&meta, &strong, source).unwrap(),
            "<strong>hi\n</strong>"
        );
    }

    #[test]
    fn empty_content_still_renders_structural_markup() {
        let renderer = Renderer::new(None).unwrap();
        let node = Node::new(NodeKind::ThematicBreak);
        assert_eq!(renderer.render(&make_meta(), &node, b"").unwrap(), "<hr/>");
    }

    #[test]
    fn failure_at_a_nested_node_aborts_the_whole_render() {
        // A registry with only the blockquote template: the nested paragraph
        // fails, and nothing is produced for the parent either.
        let registry = crate::registry::TemplateRegistry::from_templates(vec![(
            "block/blockquote.tera".to_string(),
            "<blockquote>{{ children }}</blockquote>".to_string(),
        )])
        .unwrap();
        let renderer = Renderer::with_registry(registry);
        let tree =
            Node::with_children(NodeKind::Blockquote, vec![Node::new(NodeKind::Paragraph)]);
        let err = renderer
            .render(&make_meta(), &tree, b"")
            .expect_err("nested failure must propagate");
        assert!(matches!(
            err,
            RenderError::UnregisteredKind { kind: "Paragraph" }
        ));
    }

    #[test]
    fn document_template_wraps_children_with_metadata() {
        let renderer = Renderer::new(None).unwrap();
        let source = b"hello";
        let doc = Node::with_children(
            NodeKind::Document,
            vec![Node::with_children(
                NodeKind::Paragraph,
                vec![text(Span::new(0, 5), true)],
            )],
        );
        let html = renderer.render(&make_meta(), &doc, source).unwrap();
        assert!(html.contains("<title>Home</title>"));
        assert!(html.contains("<main id=\"home\" data-path=\"/\">"));
        assert!(html.contains("<p>hello\n</p>"));
    }
}
