//! Command-line interface for the headless tool
//!
//! Supports:
//! - Completing missing closing tags in a markup file
//! - Dumping the highlighter's tokens per line
//! - Showing how text wraps in a box of a given width
//! - Listing available themes

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::editable::{lineize, MonospaceMeasure};
use crate::syntax::tokenize_lines;
use crate::theme::ThemeRegistry;

/// VTML markup editing tools
#[derive(Parser, Debug)]
#[command(name = "vtmledit", version, about = "VTML markup editing tools")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the file with missing closing tags inserted
    Complete {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Print highlight tokens for each line
    Tokens {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Print the wrapped display lines
    Lines {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Box width in pixels (defaults to the configured wrap width)
        #[arg(long, value_name = "PX")]
        width: Option<f64>,
        /// Only break at hard line breaks
        #[arg(long)]
        no_wrap: bool,
    },
    /// List available themes
    Themes,
}

/// One block per line: `line N:` followed by the line's tokens
pub fn format_tokens(text: &str) -> String {
    let lines = lineize(text, &MonospaceMeasure::default(), None);
    let mut out = String::new();
    for (i, tokens) in tokenize_lines(&lines).iter().enumerate() {
        let _ = writeln!(out, "line {}:", i + 1);
        for token in tokens {
            let _ = writeln!(out, "  {:<15} {:?}", token.token_type, token.content);
        }
    }
    out
}

/// Display lines as produced by the wrapper, one per output row
pub fn format_lines(text: &str, width: Option<f64>) -> String {
    let lines = lineize(text, &MonospaceMeasure::default(), width);
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        let _ = writeln!(out, "{:>4} {:?}", i + 1, line);
    }
    out
}

/// Theme codes with their font and origin
pub fn format_themes(registry: &ThemeRegistry) -> String {
    let mut out = String::new();
    for info in registry.list() {
        let _ = writeln!(out, "{:<16} {:<12} {}", info.code, info.font_name, info.source);
    }
    out
}
