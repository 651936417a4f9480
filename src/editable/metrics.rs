//! Text measurement capability supplied by the host.
//!
//! Line wrapping and caret/pixel mapping depend on how wide a run of text is
//! in the host's font. The engine only needs advance widths and a line height.

use std::fmt;

/// Measures text in the host font.
pub trait TextMeasure {
    /// Horizontal advance of `text` in pixels
    fn advance(&self, text: &str) -> f64;

    /// Height of one line in pixels (always > 0)
    fn line_height(&self) -> f64;
}

impl<T: TextMeasure + ?Sized> TextMeasure for Box<T> {
    fn advance(&self, text: &str) -> f64 {
        (**self).advance(text)
    }

    fn line_height(&self) -> f64 {
        (**self).line_height()
    }
}

impl fmt::Debug for dyn TextMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextMeasure")
            .field("line_height", &self.line_height())
            .finish()
    }
}

/// Fixed-pitch measurement: every character has the same advance.
///
/// Used by the headless CLI and by tests; a host with real fonts supplies
/// its own [`TextMeasure`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub char_width: f64,
    pub line_height: f64,
}

impl MonospaceMeasure {
    pub const fn new(char_width: f64, line_height: f64) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::new(8.0, 21.0)
    }
}

impl TextMeasure for MonospaceMeasure {
    fn advance(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }

    fn line_height(&self) -> f64 {
        self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_advance() {
        let m = MonospaceMeasure::new(10.0, 20.0);
        assert_eq!(m.advance(""), 0.0);
        assert_eq!(m.advance("héllo"), 50.0);
        assert_eq!(m.line_height(), 20.0);
    }
}
