//! Edit constraints for the text-area engine.
//!
//! Constraints define what edits are accepted and how text is laid out.

use crate::config::EditorConfig;

use super::history::DEFAULT_HISTORY_LIMIT;

/// Default line ceiling for an editor text area
pub const DEFAULT_MAX_LINES: usize = 99_999;

/// Constraints that limit what operations are allowed in an editing context.
#[derive(Debug, Clone, PartialEq)]
pub struct EditConstraints {
    /// Allow multiple lines (Enter inserts newline, Tab inserts spaces)
    pub allow_multiline: bool,

    /// Re-wrap lines to `box_width`
    pub word_wrap: bool,

    /// Width of the text box in pixels (None = unbounded)
    pub box_width: Option<f64>,

    /// Maximum number of display lines
    pub max_lines: usize,

    /// Capacity of each undo/redo stack
    pub history_limit: usize,
}

impl Default for EditConstraints {
    fn default() -> Self {
        Self::editor()
    }
}

impl EditConstraints {
    /// Full editor constraints (multi-line, wrapping, generous line limit)
    pub fn editor() -> Self {
        Self {
            allow_multiline: true,
            word_wrap: true,
            box_width: None,
            max_lines: DEFAULT_MAX_LINES,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Single-line input constraints
    pub fn single_line() -> Self {
        Self {
            allow_multiline: false,
            word_wrap: false,
            box_width: None,
            max_lines: 1,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Editor constraints taken from the persisted config
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            allow_multiline: true,
            word_wrap: config.word_wrap,
            box_width: Some(config.wrap_width),
            max_lines: config.max_lines.max(1),
            history_limit: config.history_limit,
        }
    }

    pub fn with_box_width(mut self, width: f64) -> Self {
        self.box_width = Some(width);
        self
    }

    /// Width to wrap at, if wrapping applies
    pub fn wrap_width(&self) -> Option<f64> {
        if self.word_wrap {
            self.box_width
        } else {
            None
        }
    }

    /// Check if a staged line count is acceptable.
    ///
    /// Going over the ceiling is still allowed when the edit shrinks the
    /// buffer, so an oversized document can always be trimmed back.
    pub fn accepts_line_count(&self, current: usize, staged: usize) -> bool {
        !(staged > self.max_lines && staged >= current)
    }
}
