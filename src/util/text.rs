//! Utility functions for text editing
//!
//! All offsets handled here are character (Unicode scalar) indices, not bytes.

/// Byte-order mark that some clipboards prepend to pasted text
pub const BOM: char = '\u{FEFF}';

/// Check if a character is a punctuation/symbol boundary (not whitespace)
pub fn is_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '/' | ':'
            | ','
            | '.'
            | '-'
            | '('
            | ')'
            | '{'
            | '}'
            | '['
            | ']'
            | ';'
            | '"'
            | '\''
            | '<'
            | '>'
            | '='
            | '+'
            | '*'
            | '&'
            | '|'
            | '!'
            | '@'
            | '#'
            | '$'
            | '%'
            | '^'
            | '~'
            | '`'
            | '\\'
            | '?'
            | '_'
    )
}

/// Character type for word navigation and double-click selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    /// Whitespace characters (including line breaks)
    Whitespace,
    /// Alphanumeric characters (word characters)
    WordChar,
    /// Punctuation, symbols and control characters
    Punctuation,
}

/// Get the character type for word navigation
pub fn char_type(ch: char) -> CharType {
    if ch.is_whitespace() {
        CharType::Whitespace
    } else if is_punctuation(ch) || ch.is_control() {
        CharType::Punctuation
    } else {
        CharType::WordChar
    }
}

/// Check if a character belongs to a word (for double-click selection)
pub fn is_word_char(ch: char) -> bool {
    char_type(ch) == CharType::WordChar
}

/// Number of characters in a string
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Convert a char offset to a byte offset, clamped to the end of the string
pub fn char_to_byte(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Slice by character range, clamped to the string bounds
pub fn slice_chars(s: &str, start: usize, end: usize) -> &str {
    let start_byte = char_to_byte(s, start);
    let end_byte = char_to_byte(s, end.max(start));
    &s[start_byte..end_byte]
}

/// Replace the character range `start..end` of `s` with `insert`
pub fn splice(s: &str, start: usize, end: usize, insert: &str) -> String {
    let start_byte = char_to_byte(s, start);
    let end_byte = char_to_byte(s, end.max(start));
    let mut out = String::with_capacity(s.len() + insert.len());
    out.push_str(&s[..start_byte]);
    out.push_str(insert);
    out.push_str(&s[end_byte..]);
    out
}

/// Strip any trailing line-break characters
pub fn trim_line_break(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// Normalize all line-ending styles to a single `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Remove byte-order marks (clipboard artifacts) from text
pub fn strip_bom(text: &str) -> String {
    text.chars().filter(|&c| c != BOM).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_type() {
        assert_eq!(char_type(' '), CharType::Whitespace);
        assert_eq!(char_type('\n'), CharType::Whitespace);
        assert_eq!(char_type('a'), CharType::WordChar);
        assert_eq!(char_type('é'), CharType::WordChar);
        assert_eq!(char_type('<'), CharType::Punctuation);
    }

    #[test]
    fn test_splice_utf8() {
        assert_eq!(splice("héllo", 1, 2, "E"), "hEllo");
        assert_eq!(splice("abc", 3, 3, "d"), "abcd");
        assert_eq!(splice("abc", 0, 10, ""), "");
    }

    #[test]
    fn test_slice_chars_clamps() {
        assert_eq!(slice_chars("héllo", 1, 3), "él");
        assert_eq!(slice_chars("abc", 2, 99), "c");
        assert_eq!(slice_chars("abc", 2, 1), "");
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{FEFF}<p>hi"), "<p>hi");
    }

    #[test]
    fn test_trim_line_break() {
        assert_eq!(trim_line_break("abc\n"), "abc");
        assert_eq!(trim_line_break("abc\r\n"), "abc");
        assert_eq!(trim_line_break("abc"), "abc");
    }
}
