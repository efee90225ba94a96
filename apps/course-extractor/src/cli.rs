//! CLI argument definitions using clap derive macros.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use course_extractor::OutputShape;

pub const DEFAULT_INSTRUCTION: &str =
    "identify only CSE-related courses and include a reason for their selection";

/// Ask a language model which courses in a text match an instruction
#[derive(Parser, Debug)]
#[command(name = "course-extractor", about, version)]
pub struct Cli {
    /// File containing the course context text (`-` reads stdin)
    #[arg(short, long)]
    pub context: PathBuf,

    /// What to extract from the context
    #[arg(short, long, default_value = DEFAULT_INSTRUCTION)]
    pub instruction: String,

    /// JSON shape requested from the model (names-with-reason, names-only,
    /// object-with-reason-list). Falls back to COURSE_OUTPUT_SHAPE.
    #[arg(short, long)]
    pub shape: Option<OutputShape>,

    /// Also try the first markdown code fence when bracket parsing fails
    #[arg(long)]
    pub fenced_blocks: bool,

    /// Print the rendered prompt and exit without calling the model
    #[arg(long)]
    pub render_only: bool,
}

/// Reads the whole context, from stdin when `path` is `-`.
pub fn read_context(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read context from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read context file '{}'", path.display()))
}
