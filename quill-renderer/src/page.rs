//! Page assembly — metadata validation, rendering, atomic persistence.
//!
//! ## Write protocol
//!
//! 1. Validate front matter into [`PageMeta`] (field-named errors).
//! 2. Render the document tree.
//! 3. SHA-256 the rendered content and compare with the file on disk —
//!    skip the write when identical.
//! 4. Write to `<path>.quill.tmp`, then rename to the final path
//!    (atomic on POSIX); the tmp file is removed on rename failure.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use quill_core::{FrontMatter, Node, PageMeta};

use crate::error::{write_err, RenderError};
use crate::render::Renderer;

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of persisting a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — on-disk content already matches.
    Unchanged { path: PathBuf },
    /// Dry-run mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path }
            | WriteResult::Unchanged { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// Page assembly
// ---------------------------------------------------------------------------

/// Destination for a page: `<build_root>/<path>/index.html`.
pub fn output_path(build_root: &Path, page_path: &str) -> PathBuf {
    build_root
        .join(page_path.trim_start_matches('/'))
        .join("index.html")
}

/// Validate, render, and persist one page.
///
/// The validated page path travels into templates unchanged — `meta.path` is
/// the page's genuine output path, never a template identifier. Validation
/// failure produces no output file.
pub fn build_page(
    renderer: &Renderer,
    front_matter: &FrontMatter,
    root: &Node,
    source: &[u8],
    build_root: &Path,
    dry_run: bool,
) -> Result<WriteResult, RenderError> {
    let meta = PageMeta::from_front_matter(front_matter)?;
    let html = renderer.render(&meta, root, source)?;
    let destination = output_path(build_root, &meta.path);
    atomic_write(&destination, &html, dry_run)
}

// ---------------------------------------------------------------------------
// atomic_write
// ---------------------------------------------------------------------------

fn sha256_hex(content: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(content);
    hex::encode(h.finalize())
}

/// Atomically write `content` to `path`, skipping identical content.
pub fn atomic_write(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, RenderError> {
    // Normalise line endings to LF before hashing and writing.
    let normalized = content.replace("\r\n", "\n");
    let content = normalized.as_str();

    if let Ok(existing) = std::fs::read(path) {
        if sha256_hex(&existing) == sha256_hex(content.as_bytes()) {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    // Parent directory creation is idempotent.
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_err(parent, e))?;
    }

    let tmp = PathBuf::from(format!("{}.quill.tmp", path.display()));
    std::fs::write(&tmp, content).map_err(|e| write_err(&tmp, e))?;

    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(write_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
