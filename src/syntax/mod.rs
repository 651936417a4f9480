//! Markup syntax support
//!
//! - [`tokenize`] / [`tokenize_lines`]: classify markup for highlighting
//! - [`auto_complete`]: insert missing closing tags
//! - [`LineStyler`]: turn display lines into colored spans
//!
//! ## Architecture
//!
//! ```text
//! EditableState::lines() → tokenize_lines → MarkupHighlighter (theme)
//!                        → RenderCache (per revision) → host renderer
//! ```

mod completion;
mod highlight;
mod tokenizer;

pub use completion::auto_complete;
pub use highlight::{LineStyler, MarkupHighlighter, PlainStyler, RenderCache, StyledSpan};
pub use tokenizer::{tokenize, tokenize_lines, Token, TokenType};
