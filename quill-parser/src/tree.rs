//! Markdown event stream to node tree construction.
//!
//! pulldown-cmark emits a flat stream of start/end/leaf events with byte
//! ranges into the body text. This module folds that stream into the owned
//! first-child / next-sibling tree the renderer walks, shifting every span by
//! the body's offset so spans index the original file bytes.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, LinkType, Options, Parser, Tag};
use quill_core::node::{link_siblings, Node, NodeKind, Span};

/// Parse `body` into a document tree.
///
/// `body_offset` is the byte position of `body` within the original source;
/// all spans in the returned tree are relative to that original source.
pub(crate) fn build_tree(body: &str, body_offset: usize) -> Node {
    let mut builder = TreeBuilder::new(body_offset);
    for (event, range) in Parser::new_ext(body, Options::empty()).into_offset_iter() {
        builder.event(event, range.start, range.end, body.as_bytes());
    }
    builder.finish()
}

// ---------------------------------------------------------------------------
// TreeBuilder
// ---------------------------------------------------------------------------

/// A container node under construction.
struct Frame {
    kind: NodeKind,
    children: Vec<Node>,
}

struct TreeBuilder {
    body_offset: usize,
    /// Open containers; index 0 is the document frame.
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn new(body_offset: usize) -> Self {
        Self {
            body_offset,
            stack: vec![Frame {
                kind: NodeKind::Document,
                children: Vec::new(),
            }],
        }
    }

    fn event(&mut self, event: Event<'_>, start: usize, end: usize, body: &[u8]) {
        match event {
            Event::Start(tag) => self.stack.push(Frame {
                kind: container_kind(tag),
                children: Vec::new(),
            }),
            Event::End(_) => self.pop(),
            Event::Text(_) => self.text(start, end, body),
            Event::Code(_) => self.code_span(start, end, body),
            Event::SoftBreak => self.mark_soft_break(),
            // A hard break renders through the preceding text node's
            // default (non-soft) treatment.
            Event::HardBreak => {}
            Event::Rule => self.push_leaf(Node::new(NodeKind::ThematicBreak)),
            Event::InlineHtml(_) => self.push_leaf(Node::new(NodeKind::RawHtml)),
            // Block-level HTML text arrives inside a Tag::HtmlBlock frame;
            // the html-block template takes no inline content.
            Event::Html(_) => {}
            // Extensions are disabled at the parser, so these cannot occur.
            Event::FootnoteReference(_)
            | Event::TaskListMarker(_)
            | Event::InlineMath(_)
            | Event::DisplayMath(_) => {}
        }
    }

    /// Close the innermost container and attach it to its parent.
    fn pop(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        let frame = self.stack.pop().expect("frame present");
        self.push_leaf(Node {
            kind: frame.kind,
            first_child: link_siblings(frame.children),
            next_sibling: None,
        });
    }

    fn push_leaf(&mut self, node: Node) {
        self.stack
            .last_mut()
            .expect("document frame present")
            .children
            .push(node);
    }

    /// Text inside a code block accumulates line spans on the block itself;
    /// anywhere else it becomes a Text node.
    fn text(&mut self, start: usize, end: usize, body: &[u8]) {
        let frame = self.stack.last_mut().expect("document frame present");
        match &mut frame.kind {
            NodeKind::CodeBlock { lines } | NodeKind::FencedCodeBlock { lines, .. } => {
                lines.extend(split_line_spans(start, end, body, self.body_offset));
            }
            _ => frame.children.push(Node::new(NodeKind::Text {
                span: Span::new(start, end).shifted(self.body_offset),
                soft_break: false,
            })),
        }
    }

    /// Inline code becomes a CodeSpan whose single Text child covers the
    /// literal bytes between the backticks. The child is marked soft so a
    /// code span never grows a visible line break.
    fn code_span(&mut self, start: usize, end: usize, body: &[u8]) {
        let inner = code_span_inner(start, end, body);
        self.push_leaf(Node::with_children(
            NodeKind::CodeSpan,
            vec![Node::new(NodeKind::Text {
                span: inner.shifted(self.body_offset),
                soft_break: true,
            })],
        ));
    }

    /// A soft line break belongs to the text node that precedes it.
    fn mark_soft_break(&mut self) {
        let frame = self.stack.last_mut().expect("document frame present");
        if let Some(Node {
            kind: NodeKind::Text { soft_break, .. },
            ..
        }) = frame.children.last_mut()
        {
            *soft_break = true;
        }
    }

    fn finish(mut self) -> Node {
        // Close any containers left open by a truncated event stream.
        while self.stack.len() > 1 {
            self.pop();
        }
        let root = self.stack.pop().expect("document frame present");
        Node {
            kind: root.kind,
            first_child: link_siblings(root.children),
            next_sibling: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Event mapping helpers
// ---------------------------------------------------------------------------

fn container_kind(tag: Tag<'_>) -> NodeKind {
    match tag {
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading { level, .. } => NodeKind::Heading {
            level: heading_level_to_num(level),
        },
        Tag::BlockQuote(_) => NodeKind::Blockquote,
        Tag::CodeBlock(CodeBlockKind::Indented) => NodeKind::CodeBlock { lines: Vec::new() },
        Tag::CodeBlock(CodeBlockKind::Fenced(info)) => NodeKind::FencedCodeBlock {
            language: fence_language(&info),
            lines: Vec::new(),
        },
        Tag::List(start) => NodeKind::List {
            ordered: start.is_some(),
            start,
        },
        Tag::Item => NodeKind::ListItem,
        Tag::Emphasis => NodeKind::Emphasis { level: 1 },
        Tag::Strong => NodeKind::Emphasis { level: 2 },
        Tag::Link {
            link_type,
            dest_url,
            title,
            ..
        } => match link_type {
            LinkType::Autolink | LinkType::Email => NodeKind::AutoLink {
                url: dest_url.to_string(),
            },
            _ => NodeKind::Link {
                destination: dest_url.to_string(),
                title: title.to_string(),
            },
        },
        Tag::Image {
            dest_url, title, ..
        } => NodeKind::Image {
            destination: dest_url.to_string(),
            title: title.to_string(),
        },
        Tag::HtmlBlock => NodeKind::HtmlBlock,
        // Extensions are disabled at the parser, so these cannot occur.
        _ => NodeKind::Paragraph,
    }
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// First word of the fence info string, if any.
fn fence_language(info: &str) -> Option<String> {
    info.split_whitespace().next().map(str::to_string)
}

/// Split `start..end` of `body` into one span per line, each keeping its
/// trailing newline, shifted by `body_offset`.
fn split_line_spans(start: usize, end: usize, body: &[u8], body_offset: usize) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut line_start = start;
    for i in start..end {
        if body[i] == b'\n' {
            spans.push(Span::new(line_start, i + 1).shifted(body_offset));
            line_start = i + 1;
        }
    }
    if line_start < end {
        spans.push(Span::new(line_start, end).shifted(body_offset));
    }
    spans
}

/// Byte range of the literal inside an inline code span.
///
/// Strips the backtick runs and, per CommonMark, one leading and trailing
/// space when the content starts and ends with a space and is not all spaces.
fn code_span_inner(start: usize, end: usize, body: &[u8]) -> Span {
    let bytes = &body[start..end];
    let ticks = bytes.iter().take_while(|b| **b == b'`').count();
    let mut inner_start = start + ticks;
    let mut inner_end = end.saturating_sub(ticks).max(inner_start);

    let inner = &body[inner_start..inner_end];
    let all_spaces = inner.iter().all(|b| *b == b' ');
    if inner.len() >= 2 && inner.starts_with(b" ") && inner.ends_with(b" ") && !all_spaces {
        inner_start += 1;
        inner_end -= 1;
    }
    Span::new(inner_start, inner_end)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
