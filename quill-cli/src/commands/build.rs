//! `quill build` — render markdown inputs into the build output directory.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use quill_parser::Parser;
use quill_renderer::{build_page, Renderer, WriteResult};

/// Arguments for `quill build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Markdown files or directories to render.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory root; pages land at `<out>/<path>/index.html`.
    #[arg(long, default_value = "build")]
    pub out: PathBuf,

    /// Directory of `.tera` templates overriding the built-in defaults.
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Show what would be written without writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildArgs {
    pub fn run(self) -> Result<()> {
        let files = super::collect_markdown_files(&self.inputs)?;
        if files.is_empty() {
            println!("No markdown files found.");
            return Ok(());
        }

        let renderer =
            Renderer::new(self.templates.as_deref()).context("failed to load templates")?;
        let parser = Parser::new();

        // Pages fail independently: report each failure, keep building the
        // rest, and exit non-zero when anything failed.
        let mut failures = 0usize;
        let mut writes = Vec::new();
        for file in &files {
            let result = parser
                .parse_file(file)
                .map_err(anyhow::Error::from)
                .and_then(|page| {
                    build_page(
                        &renderer,
                        &page.front_matter,
                        &page.root,
                        &page.source,
                        &self.out,
                        self.dry_run,
                    )
                    .map_err(anyhow::Error::from)
                });
            match result {
                Ok(write) => writes.push(write),
                Err(err) => {
                    failures += 1;
                    eprintln!("{} {}: {err:#}", "✗".red(), file.display());
                }
            }
        }

        print_results(&writes, self.dry_run);
        if failures > 0 {
            bail!("{failures} of {} page(s) failed", files.len());
        }
        Ok(())
    }
}

fn print_results(writes: &[WriteResult], dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let written = writes
        .iter()
        .filter(|r| !matches!(r, WriteResult::Unchanged { .. }))
        .count();
    let unchanged = writes.len() - written;

    println!(
        "{prefix}{} {} page(s) built ({written} written, {unchanged} unchanged)",
        "✓".green(),
        writes.len()
    );
    for r in writes {
        match r {
            WriteResult::Written { path } => println!("  ✎  {}", path.display()),
            WriteResult::WouldWrite { path } => println!("  ~  {}", path.display()),
            WriteResult::Unchanged { path } => println!("  ·  {}", path.display()),
        }
    }
}
