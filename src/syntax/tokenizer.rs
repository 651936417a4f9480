//! Markup tokenizer for syntax highlighting.
//!
//! Tags are found with a flat `<...>` match; nothing is ever an error.
//! Unterminated `<` and anything else that does not match degrade to text.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::util::trim_line_break;

/// A whole tag: `<`, anything but `>`, then `>`
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Leading whitespace and the tag name
static TAG_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(\S+)").expect("valid regex"));

/// Whitespace, attribute name, `=` with its padding, double-quoted value
static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\s*)(\S+)(\s*=\s*)("[^"]*")"#).expect("valid regex")
});

/// Classification of a piece of markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenType {
    Text,
    /// `<` or `>`
    TagDelimiter,
    /// Element name, including a leading `/` on closing tags
    TagName,
    AttributeName,
    /// `=` with any surrounding whitespace
    EqualsSign,
    /// Quoted value, quotes included
    AttributeValue,
}

impl TokenType {
    pub const ALL: [TokenType; 6] = [
        TokenType::Text,
        TokenType::TagDelimiter,
        TokenType::TagName,
        TokenType::AttributeName,
        TokenType::EqualsSign,
        TokenType::AttributeValue,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TokenType::Text => "Text",
            TokenType::TagDelimiter => "TagDelimiter",
            TokenType::TagName => "TagName",
            TokenType::AttributeName => "AttributeName",
            TokenType::EqualsSign => "EqualsSign",
            TokenType::AttributeValue => "AttributeValue",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A classified substring of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub content: String,
    pub token_type: TokenType,
}

impl Token {
    pub fn new(content: impl Into<String>, token_type: TokenType) -> Self {
        Self {
            content: content.into(),
            token_type,
        }
    }
}

/// Split markup text into tokens.
///
/// Concatenating the contents of the result always gives back `text`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for tag in TAG_REGEX.find_iter(text) {
        if tag.start() > last {
            tokens.push(Token::new(&text[last..tag.start()], TokenType::Text));
        }
        tokens.push(Token::new("<", TokenType::TagDelimiter));
        tokenize_tag_content(&text[tag.start() + 1..tag.end() - 1], &mut tokens);
        tokens.push(Token::new(">", TokenType::TagDelimiter));
        last = tag.end();
    }

    if last < text.len() {
        tokens.push(Token::new(&text[last..], TokenType::Text));
    }
    tokens
}

/// Tokens for what sits between `<` and `>`
fn tokenize_tag_content(content: &str, tokens: &mut Vec<Token>) {
    let mut pos = 0;

    if let Some(caps) = TAG_NAME_REGEX.captures(content) {
        if let (Some(space), Some(name)) = (caps.get(1), caps.get(2)) {
            if !space.is_empty() {
                tokens.push(Token::new(space.as_str(), TokenType::Text));
            }
            tokens.push(Token::new(name.as_str(), TokenType::TagName));
            pos = name.end();
        }
    }

    while pos < content.len() {
        let attribute = ATTRIBUTE_REGEX
            .captures_at(content, pos)
            .filter(|caps| caps.get(0).is_some_and(|m| m.start() == pos));

        let Some(caps) = attribute else {
            tokens.push(Token::new(&content[pos..], TokenType::Text));
            break;
        };

        let groups = [
            (1, TokenType::Text),
            (2, TokenType::AttributeName),
            (3, TokenType::EqualsSign),
            (4, TokenType::AttributeValue),
        ];
        for (group, token_type) in groups {
            if let Some(m) = caps.get(group) {
                if !m.is_empty() || token_type != TokenType::Text {
                    tokens.push(Token::new(m.as_str(), token_type));
                }
            }
        }
        pos = caps.get(0).map_or(content.len(), |m| m.end());
    }
}

/// Tokenize display lines jointly so tags spanning lines are recognised,
/// then split the tokens back into one bucket per line.
///
/// Line breaks are dropped; a token crossing a line boundary is clipped into
/// one piece per line, and empty pieces are left out.
pub fn tokenize_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Vec<Token>> {
    let joined = lines
        .iter()
        .map(|line| trim_line_break(line.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");

    let mut buckets = Vec::with_capacity(lines.len().max(1));
    let mut current = Vec::new();

    for token in tokenize(&joined) {
        if !token.content.contains('\n') {
            current.push(token);
            continue;
        }
        for (i, part) in token.content.split('\n').enumerate() {
            if i > 0 {
                buckets.push(std::mem::take(&mut current));
            }
            if !part.is_empty() {
                current.push(Token::new(part, token.token_type));
            }
        }
    }

    buckets.push(current);
    buckets
}
