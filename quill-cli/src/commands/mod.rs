pub mod build;
pub mod check;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Expand files and directories into the markdown files they contain.
///
/// A file argument is taken as-is (the parser rejects non-`.md` files with
/// its own error); directories are walked recursively for `.md` files, in
/// sorted order so runs are deterministic.
pub fn collect_markdown_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            collect_from_dir(input, &mut files)?;
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}

fn collect_from_dir(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("cannot read directory {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()
        .with_context(|| format!("cannot read directory {}", dir.display()))?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_from_dir(&path, out)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some("md") {
            out.push(path);
        }
    }
    Ok(())
}
