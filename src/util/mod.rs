//! Utility modules

pub mod text;

pub use text::{
    char_len, char_to_byte, char_type, is_punctuation, is_word_char, normalize_line_endings,
    slice_chars, splice, strip_bom, trim_line_break, CharType,
};
