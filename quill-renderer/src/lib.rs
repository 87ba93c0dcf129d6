//! # quill-renderer
//!
//! Tera-based rendering engine that turns a parsed document tree into a
//! single HTML page. Each node kind resolves to one template; the tree is
//! walked depth first — children render before their parent composes, and
//! sibling fragments join in document order.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quill_core::{FrontMatter, Node};
//! use quill_renderer::{page, Renderer};
//! use std::path::Path;
//!
//! fn build(front_matter: &FrontMatter, root: &Node, source: &[u8]) {
//!     if let Ok(renderer) = Renderer::new(None) {
//!         if let Ok(result) =
//!             page::build_page(&renderer, front_matter, root, source, Path::new("build"), false)
//!         {
//!             println!("wrote {}", result.path().display());
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod error;
pub mod extract;
pub mod page;
pub mod registry;
pub mod render;

pub use context::{Config, TemplateData};
pub use error::RenderError;
pub use page::{build_page, WriteResult};
pub use registry::TemplateRegistry;
pub use render::Renderer;
