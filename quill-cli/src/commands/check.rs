//! `quill check` — parse and validate pages without writing output.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;

use quill_core::PageMeta;
use quill_parser::Parser;

/// Arguments for `quill check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Markdown files or directories to check.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let files = super::collect_markdown_files(&self.inputs)?;
        if files.is_empty() {
            println!("No markdown files found.");
            return Ok(());
        }

        let parser = Parser::new();
        let mut failures = 0usize;
        for file in &files {
            let outcome = parser
                .parse_file(file)
                .map_err(anyhow::Error::from)
                .and_then(|page| {
                    PageMeta::from_front_matter(&page.front_matter)
                        .map_err(anyhow::Error::from)
                });
            match outcome {
                Ok(meta) => println!("{} {} → {}", "✓".green(), file.display(), meta.path),
                Err(err) => {
                    failures += 1;
                    eprintln!("{} {}: {err:#}", "✗".red(), file.display());
                }
            }
        }

        if failures > 0 {
            bail!("{failures} of {} page(s) failed validation", files.len());
        }
        Ok(())
    }
}
