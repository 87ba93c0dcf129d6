//! Content and configuration extraction — pure, total functions over nodes.

use serde_json::Value;

use quill_core::{Node, NodeKind, Span};

use crate::context::Config;

/// Inline content for a node, sliced from `source`.
///
/// Only text and code-block kinds carry inline content; everything else
/// composes entirely from its rendered children and yields an empty string.
pub fn content(node: &Node, source: &[u8]) -> String {
    match &node.kind {
        NodeKind::Text { span, soft_break } => {
            let text = slice_lossy(*span, source);
            if *soft_break {
                format!("{text}\n")
            } else {
                format!("{text}<br/>\n")
            }
        }
        NodeKind::FencedCodeBlock { lines, .. } | NodeKind::CodeBlock { lines } => {
            // Exact concatenation; each line span keeps its own newline.
            lines.iter().map(|line| slice_lossy(*line, source)).collect()
        }
        NodeKind::Str { span } => slice_lossy(*span, source),
        _ => String::new(),
    }
}

/// Kind-specific structural attributes for a node's template.
pub fn config(node: &Node) -> Config {
    let mut config = Config::new();
    match &node.kind {
        NodeKind::Heading { level } => {
            config.insert("level".into(), Value::from(*level));
        }
        NodeKind::Emphasis { level } => {
            // Binary classification: anything beyond single-level emphasis
            // collapses to the same bolded treatment.
            let tag = if *level == 1 { "em" } else { "strong" };
            config.insert("tagType".into(), Value::from(tag));
        }
        NodeKind::FencedCodeBlock { language, .. } => {
            config.insert(
                "language".into(),
                Value::from(language.clone().unwrap_or_default()),
            );
        }
        NodeKind::List { ordered, start } => {
            config.insert("ordered".into(), Value::from(*ordered));
            if *ordered {
                config.insert("start".into(), Value::from(start.unwrap_or(1)));
            }
        }
        NodeKind::Link { destination, title } | NodeKind::Image { destination, title } => {
            config.insert("destination".into(), Value::from(destination.clone()));
            config.insert("title".into(), Value::from(title.clone()));
        }
        NodeKind::AutoLink { url } => {
            config.insert("destination".into(), Value::from(url.clone()));
        }
        _ => {}
    }
    config
}

fn slice_lossy(span: Span, source: &[u8]) -> String {
    String::from_utf8_lossy(span.slice(source)).into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_break_text_appends_newline() {
        let source = b"hello world";
        let node = Node::new(NodeKind::Text {
            span: Span::new(0, 5),
            soft_break: true,
        });
        assert_eq!(content(&node, source), "hello\n");
    }

    #[test]
    fn hard_break_text_appends_break_marker() {
        let source = b"hello world";
        let node = Node::new(NodeKind::Text {
            span: Span::new(0, 5),
            soft_break: false,
        });
        assert_eq!(content(&node, source), "hello<br/>\n");
    }

    #[test]
    fn fenced_code_concatenates_lines_exactly() {
        let source = b"```\nfoo\nbar\n```\n";
        let node = Node::new(NodeKind::FencedCodeBlock {
            language: None,
            lines: vec![Span::new(4, 8), Span::new(8, 12)],
        });
        assert_eq!(content(&node, source), "foo\nbar\n");
    }

    #[test]
    fn structural_kinds_yield_empty_content() {
        let source = b"irrelevant";
        for node in [
            Node::new(NodeKind::Document),
            Node::new(NodeKind::Paragraph),
            Node::new(NodeKind::Heading { level: 1 }),
            Node::new(NodeKind::ThematicBreak),
            Node::new(NodeKind::HtmlBlock),
            Node::new(NodeKind::RawHtml),
        ] {
            assert_eq!(content(&node, source), "", "kind {}", node.kind);
        }
    }

    #[test]
    fn heading_config_carries_level() {
        let node = Node::new(NodeKind::Heading { level: 3 });
        assert_eq!(config(&node).get("level"), Some(&Value::from(3)));
    }

    #[test]
    fn emphasis_config_is_binary() {
        let em = Node::new(NodeKind::Emphasis { level: 1 });
        assert_eq!(config(&em).get("tagType"), Some(&Value::from("em")));

        for level in [2, 3, 7] {
            let strong = Node::new(NodeKind::Emphasis { level });
            assert_eq!(
                config(&strong).get("tagType"),
                Some(&Value::from("strong")),
                "level {level} must collapse to strong"
            );
        }
    }

    #[test]
    fn unconfigured_kinds_yield_empty_mapping() {
        assert!(config(&Node::new(NodeKind::Paragraph)).is_empty());
        assert!(config(&Node::new(NodeKind::Document)).is_empty());
    }

    #[test]
    fn link_config_carries_destination_and_title() {
        let node = Node::new(NodeKind::Link {
            destination: "/docs".into(),
            title: "Docs".into(),
        });
        let config = config(&node);
        assert_eq!(config.get("destination"), Some(&Value::from("/docs")));
        assert_eq!(config.get("title"), Some(&Value::from("Docs")));
    }

    #[test]
    fn unordered_list_has_no_start() {
        let node = Node::new(NodeKind::List {
            ordered: false,
            start: None,
        });
        let config = config(&node);
        assert_eq!(config.get("ordered"), Some(&Value::from(false)));
        assert!(!config.contains_key("start"));
    }
}
