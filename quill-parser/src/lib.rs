//! # quill-parser
//!
//! Parses a markdown file into the inputs the renderer consumes: a front
//! matter mapping, a document node tree, and the original source bytes.
//! Node spans index those exact bytes, so the buffer must travel with the
//! tree unchanged.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use quill_parser::Parser;
//!
//! fn show(path: &Path) {
//!     if let Ok(page) = Parser::new().parse_file(path) {
//!         println!("{} front matter keys", page.front_matter.len());
//!     }
//! }
//! ```

pub mod error;
mod front_matter;
mod tree;

use std::path::Path;

use quill_core::{FrontMatter, Node};

pub use error::ParseError;

/// A fully parsed page, ready for rendering.
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Front matter mapping; empty when the document has no header.
    pub front_matter: FrontMatter,
    /// Root of the document tree (always a Document node).
    pub root: Node,
    /// The exact bytes that were parsed; all node spans index this buffer.
    pub source: Vec<u8>,
}

/// Markdown document parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    /// Parse the markdown file at `path`.
    ///
    /// Only `.md` files are accepted.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedPage, ParseError> {
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            return Err(ParseError::NotMarkdown {
                path: path.to_path_buf(),
            });
        }
        let source = std::fs::read_to_string(path).map_err(|e| ParseError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.parse_str(&source)
    }

    /// Parse markdown text that is already in memory.
    pub fn parse_str(&self, source: &str) -> Result<ParsedPage, ParseError> {
        let split = front_matter::split(source);
        let front_matter = match split.yaml {
            Some(yaml) => front_matter::parse(yaml)?,
            None => FrontMatter::new(),
        };
        let root = tree::build_tree(split.body, split.body_offset);
        Ok(ParsedPage {
            front_matter,
            root,
            source: source.as_bytes().to_vec(),
        })
    }
}
