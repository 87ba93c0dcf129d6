//! Document node model.
//!
//! A parsed document is a tree of [`Node`]s. Each node owns its first child
//! and its next sibling, so a parent reaches all of its children by following
//! `first_child` and then the `next_sibling` chain. Traversing first-child
//! then sibling, depth first, reconstructs the original document order.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Span
// ---------------------------------------------------------------------------

/// A half-open byte range (`start..end`) into the original source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slice this span out of `source`, clamped to the buffer bounds.
    pub fn slice<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        let start = self.start.min(source.len());
        let end = self.end.min(source.len()).max(start);
        &source[start..end]
    }

    /// Shift both endpoints forward by `offset` bytes.
    pub fn shifted(&self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }
}

// ---------------------------------------------------------------------------
// NodeKind
// ---------------------------------------------------------------------------

/// The category of a parsed construct, plus its kind-specific payload.
///
/// This is a closed enumeration: template dispatch is an exhaustive match,
/// so adding a kind is a compile-time extension point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Document,
    TextBlock,
    Paragraph,
    Heading {
        /// Nesting level, 1 through 6.
        level: u8,
    },
    ThematicBreak,
    /// Indented code block; one span per source line.
    CodeBlock { lines: Vec<Span> },
    /// Fenced code block; one span per source line, fence info string parsed
    /// into `language`.
    FencedCodeBlock {
        language: Option<String>,
        lines: Vec<Span>,
    },
    Blockquote,
    List {
        ordered: bool,
        /// Start number for ordered lists.
        start: Option<u64>,
    },
    ListItem,
    HtmlBlock,
    Text {
        span: Span,
        /// True when the text ends in a soft line break (wrappable
        /// whitespace); false means an explicit visual break.
        soft_break: bool,
    },
    Str { span: Span },
    CodeSpan,
    Emphasis {
        /// Emphasis strength: 1 for single-level, 2+ for strong.
        level: u8,
    },
    Link {
        destination: String,
        title: String,
    },
    Image {
        destination: String,
        title: String,
    },
    AutoLink { url: String },
    RawHtml,
}

impl NodeKind {
    /// Stable display name, used in diagnostics and template naming.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::TextBlock => "TextBlock",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Heading { .. } => "Heading",
            NodeKind::ThematicBreak => "ThematicBreak",
            NodeKind::CodeBlock { .. } => "CodeBlock",
            NodeKind::FencedCodeBlock { .. } => "FencedCodeBlock",
            NodeKind::Blockquote => "Blockquote",
            NodeKind::List { .. } => "List",
            NodeKind::ListItem => "ListItem",
            NodeKind::HtmlBlock => "HtmlBlock",
            NodeKind::Text { .. } => "Text",
            NodeKind::Str { .. } => "String",
            NodeKind::CodeSpan => "CodeSpan",
            NodeKind::Emphasis { .. } => "Emphasis",
            NodeKind::Link { .. } => "Link",
            NodeKind::Image { .. } => "Image",
            NodeKind::AutoLink { .. } => "AutoLink",
            NodeKind::RawHtml => "RawHtml",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A single parsed construct in the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    /// First child; the remaining children hang off its sibling chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_child: Option<Box<Node>>,
    /// Next node at the same tree depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_sibling: Option<Box<Node>>,
}

impl Node {
    /// A leaf node with no children and no sibling.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            first_child: None,
            next_sibling: None,
        }
    }

    /// Build a node whose children are `children`, linked left to right
    /// through their sibling chain.
    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            first_child: link_siblings(children),
            next_sibling: None,
        }
    }

    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }

    /// Iterate over direct children in document order.
    pub fn children(&self) -> Children<'_> {
        Children {
            next: self.first_child.as_deref(),
        }
    }
}

/// Link an ordered child list into a sibling chain, returning the head.
pub fn link_siblings(children: Vec<Node>) -> Option<Box<Node>> {
    let mut head = None;
    for mut node in children.into_iter().rev() {
        node.next_sibling = head;
        head = Some(Box::new(node));
    }
    head
}

/// Iterator over a node's direct children.
pub struct Children<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next_sibling.as_deref();
        Some(current)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
