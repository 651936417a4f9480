//! Styled lines for rendering.
//!
//! A [`LineStyler`] turns display lines into colored spans. The renderer
//! owns a [`RenderCache`] keyed by buffer revision and releases it when the
//! text area is disposed.

use crate::theme::{Color, HighlightTheme};

use super::tokenizer::{tokenize_lines, TokenType};

/// A run of text drawn in one color
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSpan {
    pub text: String,
    pub token_type: TokenType,
    /// None = default font color
    pub color: Option<Color>,
}

/// Strategy for turning display lines into styled spans.
pub trait LineStyler {
    /// One entry per input line, line breaks excluded
    fn style_lines(&self, lines: &[String]) -> Vec<Vec<StyledSpan>>;
}

/// Markup highlighting driven by a theme
#[derive(Debug, Clone, Default)]
pub struct MarkupHighlighter {
    theme: HighlightTheme,
}

impl MarkupHighlighter {
    pub fn new(theme: HighlightTheme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &HighlightTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: HighlightTheme) {
        self.theme = theme;
    }
}

impl LineStyler for MarkupHighlighter {
    fn style_lines(&self, lines: &[String]) -> Vec<Vec<StyledSpan>> {
        tokenize_lines(lines)
            .into_iter()
            .map(|tokens| {
                tokens
                    .into_iter()
                    .map(|token| StyledSpan {
                        color: self.theme.color_for(token.token_type),
                        token_type: token.token_type,
                        text: token.content,
                    })
                    .collect()
            })
            .collect()
    }
}

/// Unhighlighted text: one default-colored span per non-empty line
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl LineStyler for PlainStyler {
    fn style_lines(&self, lines: &[String]) -> Vec<Vec<StyledSpan>> {
        lines
            .iter()
            .map(|line| {
                let text = crate::util::trim_line_break(line);
                if text.is_empty() {
                    Vec::new()
                } else {
                    vec![StyledSpan {
                        text: text.to_string(),
                        token_type: TokenType::Text,
                        color: None,
                    }]
                }
            })
            .collect()
    }
}

/// Styled lines memoised per buffer revision
#[derive(Debug, Clone, Default)]
pub struct RenderCache {
    revision: Option<u64>,
    lines: Vec<Vec<StyledSpan>>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Styled lines for `revision`, restyling only when the revision changed
    pub fn styled_lines(
        &mut self,
        revision: u64,
        lines: &[String],
        styler: &dyn LineStyler,
    ) -> &[Vec<StyledSpan>] {
        if self.revision != Some(revision) {
            self.lines = styler.style_lines(lines);
            self.revision = Some(revision);
        }
        &self.lines
    }

    /// Check if the cache holds lines for `revision`
    pub fn is_current(&self, revision: u64) -> bool {
        self.revision == Some(revision)
    }

    /// Force a restyle on next use (e.g. after a theme change)
    pub fn invalidate(&mut self) {
        self.revision = None;
    }

    /// Drop everything the cache holds
    pub fn release(&mut self) {
        self.revision = None;
        self.lines = Vec::new();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlighter_colors_spans() {
        let highlighter = MarkupHighlighter::default();
        let styled = highlighter.style_lines(&["<b>x</b>".to_string()]);
        assert_eq!(styled.len(), 1);

        let spans = &styled[0];
        assert_eq!(spans[1].text, "b");
        assert_eq!(spans[1].token_type, TokenType::TagName);
        assert!(spans[1].color.is_some());
        assert_eq!(spans[3].text, "x");
        assert_eq!(spans[3].color, None);
    }

    #[test]
    fn test_plain_styler() {
        let styled = PlainStyler.style_lines(&["ab\n".to_string(), "\n".to_string()]);
        assert_eq!(styled[0][0].text, "ab");
        assert!(styled[1].is_empty());
    }

    #[test]
    fn test_render_cache_by_revision() {
        let mut cache = RenderCache::new();
        let lines = vec!["<i>".to_string()];
        assert_eq!(cache.styled_lines(1, &lines, &PlainStyler)[0][0].text, "<i>");
        assert!(cache.is_current(1));

        // Same revision reuses the cached spans
        let other = vec!["changed".to_string()];
        assert_eq!(cache.styled_lines(1, &other, &PlainStyler)[0][0].text, "<i>");
        assert_eq!(cache.styled_lines(2, &other, &PlainStyler)[0][0].text, "changed");

        cache.release();
        assert!(cache.is_empty());
        assert!(!cache.is_current(2));
    }
}
