//! Headless VTML markup tool

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use vtmledit::cli::{format_lines, format_themes, format_tokens, CliArgs, Command};
use vtmledit::config::EditorConfig;
use vtmledit::syntax::auto_complete;
use vtmledit::theme::ThemeRegistry;
use vtmledit::util::{normalize_line_endings, strip_bom};

fn main() -> Result<()> {
    vtmledit::tracing::init();

    let args = CliArgs::parse();
    let config = EditorConfig::load();

    let output = match args.command {
        Command::Complete { file } => {
            let mut completed = auto_complete(&read_markup(&file)?);
            if !completed.ends_with('\n') {
                completed.push('\n');
            }
            completed
        }
        Command::Tokens { file } => format_tokens(&read_markup(&file)?),
        Command::Lines {
            file,
            width,
            no_wrap,
        } => {
            let width = if no_wrap {
                None
            } else {
                Some(width.unwrap_or(config.wrap_width))
            };
            format_lines(&read_markup(&file)?, width)
        }
        Command::Themes => format_themes(&ThemeRegistry::load()),
    };

    print!("{}", output);
    Ok(())
}

/// File contents with the byte order mark removed and `\n` line endings
fn read_markup(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "read markup file");
    Ok(normalize_line_endings(&strip_bom(&raw)))
}
