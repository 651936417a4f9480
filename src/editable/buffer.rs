//! Line buffer for the text-area engine.
//!
//! The document is held as an ordered list of display lines. Hard line breaks
//! stay attached to the end of their line (`"abc\n"`), soft-wrapped lines carry
//! no terminator, so concatenating all lines always reproduces the text.

use std::cell::OnceCell;
use std::ops::Range;

use crate::util::{char_len, normalize_line_endings, slice_chars, trim_line_break};

use super::metrics::TextMeasure;

/// Ordered sequence of display lines (always at least one).
#[derive(Debug, Clone)]
pub struct LineBuffer {
    lines: Vec<String>,
    /// Joined text, rebuilt lazily after a mutation
    cached_text: OnceCell<String>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for LineBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.lines == other.lines
    }
}

impl LineBuffer {
    /// Empty buffer holding a single empty line
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cached_text: OnceCell::new(),
        }
    }

    /// Create a buffer from already-split lines. An empty list becomes `[""]`.
    pub fn from_lines(lines: Vec<String>) -> Self {
        let mut buffer = Self::new();
        buffer.set_lines(lines);
        buffer
    }

    /// Replace all lines (drops the cached text)
    pub fn set_lines(&mut self, mut lines: Vec<String>) {
        if lines.is_empty() {
            lines.push(String::new());
        }
        self.lines = lines;
        self.cached_text = OnceCell::new();
    }

    /// All lines including their trailing line breaks
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines (always >= 1)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Raw line content including any trailing line break
    pub fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    /// Length of a line in characters, excluding the trailing line break
    pub fn line_length(&self, line: usize) -> usize {
        self.lines
            .get(line)
            .map(|l| char_len(trim_line_break(l)))
            .unwrap_or(0)
    }

    /// Length of a line in characters, including the trailing line break
    fn raw_line_length(&self, line: usize) -> usize {
        self.lines.get(line).map(|l| char_len(l)).unwrap_or(0)
    }

    /// Full logical text (cached until the next mutation)
    pub fn text(&self) -> &str {
        self.cached_text.get_or_init(|| self.lines.concat())
    }

    /// Total length in characters, line breaks included
    pub fn len_chars(&self) -> usize {
        self.lines.iter().map(|l| char_len(l)).sum()
    }

    /// Check if the buffer holds no text
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(String::is_empty)
    }

    /// Character at (line, column), None if out of bounds or on the line break
    pub fn char_at(&self, line: usize, column: usize) -> Option<char> {
        let text = trim_line_break(self.lines.get(line)?);
        text.chars().nth(column)
    }

    /// Convert (line, column) to a flat character offset.
    ///
    /// Both components are clamped: a line past the end maps to the document
    /// end, a column past the line end maps to the line end.
    pub fn position_to_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.lines.len() {
            return self.len_chars();
        }
        let preceding: usize = (0..line).map(|i| self.raw_line_length(i)).sum();
        preceding + column.min(self.line_length(line))
    }

    /// Convert a flat character offset to (line, column).
    ///
    /// An offset that falls on a soft-wrap boundary resolves to the start of
    /// the following line. Offsets past the end clamp to the end of the last line.
    pub fn offset_to_position(&self, offset: usize) -> (usize, usize) {
        let mut sum = 0;
        for (i, line) in self.lines.iter().enumerate() {
            let len = char_len(line);
            if sum + len > offset {
                return (i, offset - sum);
            }
            sum += len;
        }
        let last = self.lines.len() - 1;
        (last, self.line_length(last))
    }

    /// Text in the character range (clamped)
    pub fn slice(&self, range: Range<usize>) -> String {
        slice_chars(self.text(), range.start, range.end).to_string()
    }
}

/// Split `text` into display lines.
///
/// Line endings are normalized to `\n` first. With `box_width` set, each
/// paragraph is greedily wrapped so no line is wider than the box (trailing
/// spaces may hang past the edge); words wider than the box are broken per
/// character. Without a width only hard breaks split lines.
/// Always returns at least one line.
pub fn lineize(text: &str, measure: &dyn TextMeasure, box_width: Option<f64>) -> Vec<String> {
    let text = normalize_line_endings(text);
    let width = box_width.filter(|w| w.is_finite() && *w > 0.0);

    let paragraphs: Vec<&str> = text.split('\n').collect();
    let last = paragraphs.len() - 1;
    let mut lines = Vec::with_capacity(paragraphs.len());

    for (i, paragraph) in paragraphs.iter().enumerate() {
        let mut wrapped = match width {
            Some(w) => wrap_paragraph(paragraph, measure, w),
            None => vec![paragraph.to_string()],
        };
        if i < last {
            if let Some(tail) = wrapped.last_mut() {
                tail.push('\n');
            }
        }
        lines.append(&mut wrapped);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Greedy word wrap of a single paragraph (no line breaks inside)
fn wrap_paragraph(paragraph: &str, measure: &dyn TextMeasure, width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in split_words(paragraph) {
        if current.is_empty() {
            current = place_word(word, measure, width, &mut lines);
            continue;
        }

        let candidate = format!("{}{}", current, word.trim_end_matches(' '));
        if measure.advance(&candidate) <= width {
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = place_word(word, measure, width, &mut lines);
        }
    }

    lines.push(current);
    lines
}

/// Start a fresh line with `word`, breaking it per character if it is wider
/// than the box. Full chunks go to `lines`; the remainder is returned.
fn place_word(word: &str, measure: &dyn TextMeasure, width: f64, lines: &mut Vec<String>) -> String {
    if measure.advance(word.trim_end_matches(' ')) <= width {
        return word.to_string();
    }

    let mut chunk = String::new();
    for ch in word.chars() {
        if ch != ' ' && !chunk.is_empty() {
            let mut candidate = chunk.clone();
            candidate.push(ch);
            if measure.advance(&candidate) > width {
                lines.push(std::mem::take(&mut chunk));
            }
        }
        chunk.push(ch);
    }
    chunk
}

/// Split a paragraph into words, each keeping its trailing spaces
fn split_words(paragraph: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut prev_space = false;
    for (i, ch) in paragraph.char_indices() {
        if ch != ' ' && prev_space {
            words.push(&paragraph[start..i]);
            start = i;
        }
        prev_space = ch == ' ';
    }
    if start < paragraph.len() {
        words.push(&paragraph[start..]);
    }
    words
}
