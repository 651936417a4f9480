//! EditableState - the text-area engine: line buffer, caret, selection and history.
//!
//! Every edit is staged as a full set of lines, offered to the host's
//! [`ChangeValidator`] and the line ceiling, and only then swapped in. A
//! rejected edit leaves the buffer, caret and selection untouched.

use std::fmt;

use tracing::debug;

use crate::util::{
    char_len, is_word_char, normalize_line_endings, slice_chars, splice, strip_bom,
    trim_line_break,
};

use super::buffer::{lineize, LineBuffer};
use super::constraints::EditConstraints;
use super::cursor::{Caret, Position};
use super::events::{AcceptAll, ChangeValidator, EditorEvent};
use super::history::{EditHistory, TextDelta};
use super::messages::{MoveTarget, TextEditMsg};
use super::metrics::TextMeasure;
use super::selection::Selection;

/// Inserted by the Tab key
pub const TAB_TEXT: &str = "    ";

/// Two presses closer than this (in milliseconds) count as a multi-click
pub const MULTI_CLICK_MS: u64 = 250;

/// Error from [`EditableState::try_set_caret`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretError {
    LineOutOfRange {
        line: usize,
        line_count: usize,
    },
    ColumnOutOfRange {
        line: usize,
        column: usize,
        line_length: usize,
    },
}

impl fmt::Display for CaretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaretError::LineOutOfRange { line, line_count } => {
                write!(f, "line {} is out of range ({} lines)", line, line_count)
            }
            CaretError::ColumnOutOfRange {
                line,
                column,
                line_length,
            } => write!(
                f,
                "column {} is beyond the end of line {} (length {})",
                column, line, line_length
            ),
        }
    }
}

impl std::error::Error for CaretError {}

/// The text-area engine.
///
/// Owns the wrapped lines, a single caret, its selection and the undo
/// history. Notifications are queued and handed to the host through
/// [`drain_events`](Self::drain_events).
pub struct EditableState {
    buffer: LineBuffer,
    caret: Caret,
    selection: Selection,
    /// Constraints for this editing context
    pub constraints: EditConstraints,
    history: EditHistory,
    measure: Box<dyn TextMeasure>,
    validator: Box<dyn ChangeValidator>,
    events: Vec<EditorEvent>,
    focused: bool,
    caret_pixel: (f64, f64),
    last_click_ms: Option<u64>,
    click_count: u32,
    revision: u64,
}

impl fmt::Debug for EditableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditableState")
            .field("buffer", &self.buffer)
            .field("caret", &self.caret)
            .field("selection", &self.selection)
            .field("constraints", &self.constraints)
            .field("history", &self.history)
            .field("focused", &self.focused)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl EditableState {
    /// Create an empty text area
    pub fn new(constraints: EditConstraints, measure: impl TextMeasure + 'static) -> Self {
        let history = EditHistory::with_max_size(constraints.history_limit);
        Self {
            buffer: LineBuffer::new(),
            caret: Caret::default(),
            selection: Selection::default(),
            constraints,
            history,
            measure: Box::new(measure),
            validator: Box::new(AcceptAll),
            events: Vec::new(),
            focused: false,
            caret_pixel: (0.0, 0.0),
            last_click_ms: None,
            click_count: 0,
            revision: 0,
        }
    }

    /// Create a text area holding `text`, with empty history and no events
    pub fn with_text(
        text: &str,
        constraints: EditConstraints,
        measure: impl TextMeasure + 'static,
    ) -> Self {
        let mut state = Self::new(constraints, measure);
        let lines = state.lineize(text);
        state.buffer.set_lines(lines);
        state
    }

    /// Install the host's veto hook
    pub fn with_validator(mut self, validator: impl ChangeValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn set_validator(&mut self, validator: impl ChangeValidator + 'static) {
        self.validator = Box::new(validator);
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// Full logical text
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Display lines including their trailing line breaks
    pub fn lines(&self) -> &[String] {
        self.buffer.lines()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    /// Number of characters, not counting line breaks
    pub fn text_length_without_line_breaks(&self) -> usize {
        self.buffer.text().chars().filter(|&c| c != '\n').count()
    }

    pub fn measure(&self) -> &dyn TextMeasure {
        self.measure.as_ref()
    }

    pub fn caret(&self) -> Caret {
        self.caret
    }

    pub fn caret_position(&self) -> Position {
        self.caret.to_position()
    }

    /// Caret as a flat character offset into the text
    pub fn caret_offset(&self) -> usize {
        self.buffer
            .position_to_offset(self.caret.line, self.caret.column)
    }

    /// Caret pixel position relative to the text box origin
    pub fn caret_pixel(&self) -> (f64, f64) {
        self.caret_pixel
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Check if there is a non-empty selection
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Selection ends in document order; both are the caret when nothing is selected
    pub fn true_selection_positions(&self) -> (Position, Position) {
        if self.has_selection() {
            self.selection.ordered()
        } else {
            let caret = self.caret.to_position();
            (caret, caret)
        }
    }

    /// Selection start, collapsing to the caret when nothing is selected
    pub fn selection_start(&self) -> Position {
        self.true_selection_positions().0
    }

    /// Selection end, collapsing to the caret when nothing is selected
    pub fn selection_end(&self) -> Position {
        self.true_selection_positions().1
    }

    /// Selection as flat offsets in document order
    pub fn selection_offsets(&self) -> (usize, usize) {
        let (start, end) = self.true_selection_positions();
        (
            self.buffer.position_to_offset(start.line, start.column),
            self.buffer.position_to_offset(end.line, end.column),
        )
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> String {
        let (start, end) = self.selection_offsets();
        self.buffer.slice(start..end)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Bumped whenever the lines are replaced
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Take all queued notifications
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    /// Queued notifications, oldest first
    pub fn pending_events(&self) -> &[EditorEvent] {
        &self.events
    }

    fn emit(&mut self, event: EditorEvent) {
        self.events.push(event);
    }
}

// =============================================================================
// Layout
// =============================================================================

impl EditableState {
    /// Split text into display lines using this area's measure and wrap width
    pub fn lineize(&self, text: &str) -> Vec<String> {
        lineize(text, self.measure.as_ref(), self.constraints.wrap_width())
    }

    /// Resize the text box and re-wrap, keeping the caret's flat offset
    pub fn set_box_width(&mut self, width: f64) {
        let offset = self.caret_offset();
        self.constraints.box_width = Some(width);
        let lines = self.lineize(self.buffer.text());
        self.buffer.set_lines(lines);
        self.revision += 1;
        let (line, column) = self.buffer.offset_to_position(offset);
        self.caret = Caret::new(line, column);
        self.selection = Selection::collapsed(self.caret.to_position());
        self.update_caret_pixel();
    }

    pub fn set_max_lines(&mut self, max_lines: usize) {
        self.constraints.max_lines = max_lines.max(1);
    }

    /// Derive the line ceiling from a pixel height
    pub fn set_max_height(&mut self, height: f64) {
        let line_height = self.measure.line_height();
        if line_height > 0.0 && height.is_finite() {
            self.set_max_lines((height / line_height).floor().max(0.0) as usize);
        }
    }
}

// =============================================================================
// Caret
// =============================================================================

impl EditableState {
    /// Place the caret, clamping both components into the buffer
    pub fn set_caret(&mut self, line: usize, column: usize) {
        let line = line.min(self.buffer.line_count() - 1);
        let column = column.min(self.buffer.line_length(line));
        self.caret = Caret::new(line, column);
        self.update_caret_pixel();

        let (x, y) = self.caret_pixel;
        self.emit(EditorEvent::CaretMoved { x, y });
        self.emit(EditorEvent::CaretPositionChanged { line, column });
    }

    /// Place the caret, refusing out-of-range positions instead of clamping
    pub fn try_set_caret(&mut self, line: usize, column: usize) -> Result<(), CaretError> {
        let line_count = self.buffer.line_count();
        if line >= line_count {
            return Err(CaretError::LineOutOfRange { line, line_count });
        }
        let line_length = self.buffer.line_length(line);
        if column > line_length {
            return Err(CaretError::ColumnOutOfRange {
                line,
                column,
                line_length,
            });
        }
        self.set_caret(line, column);
        Ok(())
    }

    /// Place the caret at a flat character offset (clamped to the text)
    pub fn set_caret_offset(&mut self, offset: usize) {
        let (line, column) = self.buffer.offset_to_position(offset);
        self.set_caret(line, column);
    }

    /// Place the caret nearest to a pixel position inside the text box
    pub fn set_caret_from_pixel(&mut self, x: f64, y: f64) {
        let line_height = self.measure.line_height();
        let last_line = self.buffer.line_count() - 1;

        let valid_y = y.clamp(0.0, last_line as f64 * line_height);
        let line = ((valid_y / line_height).floor() as usize).min(last_line);

        let text = self.buffer.line(line).map(trim_line_break).unwrap_or("");
        let valid_x = x.clamp(0.0, self.measure.advance(text));

        let column = text
            .char_indices()
            .position(|(i, ch)| valid_x < self.measure.advance(&text[..i + ch.len_utf8()]))
            .unwrap_or_else(|| char_len(text));

        self.set_caret(line, column);
    }

    fn update_caret_pixel(&mut self) {
        let text = self
            .buffer
            .line(self.caret.line)
            .map(trim_line_break)
            .unwrap_or("");
        let x = self.measure.advance(slice_chars(text, 0, self.caret.column));
        let y = self.measure.line_height() * self.caret.line as f64;
        self.caret_pixel = (x, y);
    }

    /// Pull the caret back inside the buffer after the lines changed
    fn clamp_caret(&mut self) {
        let line = self.caret.line.min(self.buffer.line_count() - 1);
        let column = self.caret.column.min(self.buffer.line_length(line));
        self.caret.line = line;
        self.caret.column = column;
        self.update_caret_pixel();
    }
}

// =============================================================================
// Selection
// =============================================================================

impl EditableState {
    fn set_selection(&mut self, selection: Selection) {
        if selection == self.selection {
            return;
        }
        self.selection = selection;
        let (start, end) = self.true_selection_positions();
        self.emit(EditorEvent::SelectionChanged {
            start_line: start.line,
            start_column: start.column,
            end_line: end.line,
            end_column: end.column,
        });
    }

    /// After a caret move: extend from the old caret, or collapse
    fn finish_move(&mut self, before: Position, extend: bool) {
        let head = self.caret.to_position();
        let selection = if extend {
            let anchor = if self.selection.is_empty() {
                before
            } else {
                self.selection.anchor
            };
            Selection::new(anchor, head)
        } else {
            Selection::collapsed(head)
        };
        self.set_selection(selection);
    }

    /// Collapse selection to caret position
    pub fn clear_selection(&mut self) {
        self.set_selection(Selection::collapsed(self.caret.to_position()));
    }

    /// Select all text
    pub fn select_all(&mut self) {
        self.set_caret(usize::MAX, usize::MAX);
        self.set_selection(Selection::new(Position::zero(), self.caret.to_position()));
    }

    /// Select the word around the caret
    pub fn select_word(&mut self) {
        let pos = self.caret.to_position();
        let chars: Vec<char> = self
            .buffer
            .line(pos.line)
            .map(trim_line_break)
            .unwrap_or("")
            .chars()
            .collect();

        let mut start = pos.column.min(chars.len());
        let mut end = start;
        while start > 0 && is_word_char(chars[start - 1]) {
            start -= 1;
        }
        while end < chars.len() && is_word_char(chars[end]) {
            end += 1;
        }

        self.set_caret(pos.line, end);
        self.set_selection(Selection::new(
            Position::new(pos.line, start),
            Position::new(pos.line, end),
        ));
    }

    /// Select the caret's display line (without its line break)
    pub fn select_line(&mut self) {
        let line = self.caret.line;
        let end = self.buffer.line_length(line);
        self.set_caret(line, end);
        self.set_selection(Selection::new(
            Position::new(line, 0),
            Position::new(line, end),
        ));
    }
}

// =============================================================================
// Movement Operations
// =============================================================================

impl EditableState {
    /// Step the caret one character, or to the next word boundary.
    ///
    /// A word boundary is a position directly after a space. Steps wrap
    /// across line ends and stop at the buffer extremes.
    pub fn move_cursor(&mut self, forward: bool, whole_word: bool, extend_selection: bool) {
        let before = self.caret.to_position();
        let last_line = self.buffer.line_count() - 1;
        let can_move = if forward {
            before.column < self.buffer.line_length(before.line) || before.line < last_line
        } else {
            before.column > 0 || before.line > 0
        };

        if can_move {
            let (line, column) = self.step_caret(forward, whole_word);
            self.set_caret(line, column);
        }
        self.finish_move(before, extend_selection);
    }

    fn step_caret(&self, forward: bool, whole_word: bool) -> (usize, usize) {
        let last_line = self.buffer.line_count() - 1;
        let mut line = self.caret.line;
        let mut pos = self.caret.column as isize;

        loop {
            pos += if forward { 1 } else { -1 };

            if pos < 0 {
                if line == 0 {
                    break;
                }
                line -= 1;
                pos = self.buffer.line_length(line) as isize;
            }

            if pos > self.buffer.line_length(line) as isize {
                if line >= last_line {
                    break;
                }
                line += 1;
                pos = 0;
            }

            let at_boundary =
                pos > 0 && self.buffer.char_at(line, pos as usize - 1) == Some(' ');
            if !whole_word || at_boundary {
                break;
            }
        }

        // Overshoot at the extremes is clamped by set_caret
        (line, pos.max(0) as usize)
    }

    /// Move the caret to a target, extending or collapsing the selection
    pub fn move_to(&mut self, target: MoveTarget, extend_selection: bool) {
        let before = self.caret.to_position();
        match target {
            MoveTarget::Left => return self.move_cursor(false, false, extend_selection),
            MoveTarget::Right => return self.move_cursor(true, false, extend_selection),
            MoveTarget::WordLeft => return self.move_cursor(false, true, extend_selection),
            MoveTarget::WordRight => return self.move_cursor(true, true, extend_selection),
            MoveTarget::LineStart => self.set_caret(before.line, 0),
            MoveTarget::LineEnd => self.set_caret(before.line, usize::MAX),
            MoveTarget::DocumentStart => self.set_caret(0, 0),
            MoveTarget::DocumentEnd => self.set_caret(usize::MAX, usize::MAX),
            MoveTarget::Up => {
                if before.line == 0 {
                    return;
                }
                self.move_vertical(before.line - 1);
            }
            MoveTarget::Down => {
                if before.line + 1 >= self.buffer.line_count() {
                    return;
                }
                self.move_vertical(before.line + 1);
            }
        }
        self.finish_move(before, extend_selection);
    }

    /// Move one line up or down keeping the caret's pixel x rather than its
    /// column, so the caret stays visually aligned under proportional fonts
    pub fn move_line_by_pixel(&mut self, up: bool, extend_selection: bool) {
        let before = self.caret.to_position();
        let (x, y) = self.caret_pixel;
        let line_height = self.measure.line_height();
        // Aim at the middle of the target line
        let target_y = if up {
            y - line_height * 0.5
        } else {
            y + line_height * 1.5
        };
        self.set_caret_from_pixel(x, target_y);
        self.finish_move(before, extend_selection);
    }

    fn move_vertical(&mut self, line: usize) {
        let desired = self.caret.effective_column();
        self.set_caret(line, desired);
        self.caret.desired_column = Some(desired);
    }
}

// =============================================================================
// Editing Operations
// =============================================================================

impl EditableState {
    /// Offer staged lines as the new content.
    ///
    /// Returns false, leaving everything untouched, when the validator vetoes
    /// the lines or they would grow the buffer past the line ceiling. Accepted
    /// edits are recorded in the history unless the text is unchanged.
    pub fn load_value(&mut self, staged: Vec<String>) -> bool {
        if !self.validator.try_change(&staged) {
            debug!(lines = staged.len(), "edit rejected by validator");
            return false;
        }
        if !self
            .constraints
            .accepts_line_count(self.buffer.line_count(), staged.len())
        {
            debug!(
                lines = staged.len(),
                max_lines = self.constraints.max_lines,
                "edit rejected: too many lines"
            );
            return false;
        }

        let old_text = self.buffer.text().to_string();
        self.buffer.set_lines(staged);
        self.revision += 1;
        self.clamp_caret();

        let delta = TextDelta::compute(&old_text, self.buffer.text());
        if delta.is_noop() {
            return true;
        }

        debug!(
            start = delta.start_index,
            removed = delta.removed_text.len(),
            added = delta.added_text.len(),
            "edit committed"
        );
        self.history.push(delta);
        let text = self.buffer.text().to_string();
        self.emit(EditorEvent::TextChanged(text));
        true
    }

    /// Replace the whole text (undoable)
    pub fn set_value(&mut self, text: &str, caret_to_end: bool) -> bool {
        let staged = self.lineize(text);
        if !self.load_value(staged) {
            return false;
        }
        if caret_to_end {
            self.set_caret_offset(self.buffer.len_chars());
        }
        self.clear_selection();
        true
    }

    /// Splice `insert` over the flat range and move the caret after it
    fn replace_range(&mut self, start: usize, end: usize, insert: &str) -> bool {
        let new_text = splice(self.buffer.text(), start, end, insert);
        let staged = self.lineize(&new_text);
        if !self.load_value(staged) {
            return false;
        }
        self.set_caret_offset(start + char_len(insert));
        self.clear_selection();
        true
    }

    /// Insert text at the caret, replacing the selection if any
    pub fn insert_text(&mut self, text: &str) -> bool {
        let insert = normalize_line_endings(text);
        if insert.is_empty() && !self.has_selection() {
            return false;
        }
        let (start, end) = self.selection_offsets();
        self.replace_range(start, end, &insert)
    }

    /// Insert a single character at the caret
    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut buf))
    }

    /// Insert a line break; refused when the line ceiling is reached
    pub fn insert_newline(&mut self) -> bool {
        if !self.constraints.allow_multiline {
            return false;
        }
        let mut changed = false;
        if self.has_selection() {
            changed = self.delete_selection();
        }
        if self.buffer.line_count() >= self.constraints.max_lines {
            return changed;
        }
        let caret = self.caret_offset();
        self.replace_range(caret, caret, "\n") || changed
    }

    /// Insert four spaces
    pub fn insert_tab(&mut self) -> bool {
        self.insert_text(TAB_TEXT)
    }

    /// Insert clipboard text with byte order marks removed
    pub fn paste(&mut self, text: &str) -> bool {
        self.insert_text(&strip_bom(text))
    }

    /// Text for the clipboard: the selection, or everything when nothing is selected
    pub fn copy(&self) -> String {
        if self.has_selection() {
            self.selected_text()
        } else {
            self.buffer.text().to_string()
        }
    }

    /// Copy, then delete the selection
    pub fn cut(&mut self) -> String {
        let copied = self.copy();
        self.delete_selection();
        copied
    }

    /// Delete selection if any
    pub fn delete_selection(&mut self) -> bool {
        let (start, end) = self.selection_offsets();
        if start == end {
            return false;
        }
        self.replace_range(start, end, "")
    }

    /// Delete character before caret (Backspace)
    pub fn delete_backward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        let caret = self.caret_offset();
        if caret == 0 {
            return false;
        }
        self.replace_range(caret - 1, caret, "")
    }

    /// Delete character after caret (Delete key)
    pub fn delete_forward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        let caret = self.caret_offset();
        if caret >= self.buffer.len_chars() {
            return false;
        }
        self.replace_range(caret, caret + 1, "")
    }

    /// Delete the whitespace or non-whitespace run before the caret
    pub fn delete_word_backward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        let caret = self.caret_offset();
        if caret == 0 {
            return false;
        }

        let chars: Vec<char> = self.buffer.text().chars().collect();
        let whitespace = chars[caret - 1].is_whitespace();
        let mut start = caret - 1;
        while start > 0 && chars[start - 1].is_whitespace() == whitespace {
            start -= 1;
        }
        self.replace_range(start, caret, "")
    }

    /// Delete the whitespace or non-whitespace run after the caret
    pub fn delete_word_forward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        let caret = self.caret_offset();
        let chars: Vec<char> = self.buffer.text().chars().collect();
        if caret >= chars.len() {
            return false;
        }

        let whitespace = chars[caret].is_whitespace();
        let mut end = caret + 1;
        while end < chars.len() && chars[end].is_whitespace() == whitespace {
            end += 1;
        }
        self.replace_range(caret, end, "")
    }
}

// =============================================================================
// Undo/Redo Operations
// =============================================================================

impl EditableState {
    /// Undo the most recent edit
    pub fn undo(&mut self) -> bool {
        let Some(delta) = self.history.pop_undo() else {
            return false;
        };
        debug!(start = delta.start_index, "undo");
        if self.apply_delta(&delta, true) {
            return true;
        }
        // Put the delta back where it was
        self.history.pop_redo();
        false
    }

    /// Redo the most recently undone edit
    pub fn redo(&mut self) -> bool {
        let Some(delta) = self.history.pop_redo() else {
            return false;
        };
        debug!(start = delta.start_index, "redo");
        if self.apply_delta(&delta, false) {
            return true;
        }
        self.history.pop_undo();
        false
    }

    /// Replay a delta without recording it; the caret lands after the inserted text
    fn apply_delta(&mut self, delta: &TextDelta, reverse: bool) -> bool {
        let text = self.buffer.text();
        let len = char_len(text);
        let start = delta.start_index.min(len);
        let (expected, insert) = if reverse {
            (&delta.added_text, &delta.removed_text)
        } else {
            (&delta.removed_text, &delta.added_text)
        };
        let delete_len = char_len(expected).min(len - start);

        let new_text = splice(text, start, start + delete_len, insert);
        if new_text == text {
            return false;
        }

        let staged = self.lineize(&new_text);
        if !self.validator.try_change(&staged) {
            debug!("undo/redo rejected by validator");
            return false;
        }

        self.buffer.set_lines(staged);
        self.revision += 1;
        self.set_caret_offset(start + char_len(insert));
        self.clear_selection();
        let text = self.buffer.text().to_string();
        self.emit(EditorEvent::TextChanged(text));
        true
    }
}

// =============================================================================
// Focus and Mouse
// =============================================================================

impl EditableState {
    /// Focus the area; the caret goes to the end of the text
    pub fn focus_gained(&mut self) {
        self.focused = true;
        self.set_caret_offset(self.buffer.len_chars());
        self.clear_selection();
        self.emit(EditorEvent::FocusGained);
    }

    /// Unfocus the area; the selection is cleared
    pub fn focus_lost(&mut self) {
        self.focused = false;
        self.clear_selection();
        self.emit(EditorEvent::FocusLost);
    }

    /// Pointer press at a pixel position inside the text box.
    ///
    /// Shift extends the selection; a second and third press within
    /// [`MULTI_CLICK_MS`] select the word and the line. Further rapid
    /// presses only place the caret until the clicks slow down.
    pub fn mouse_down(&mut self, x: f64, y: f64, shift: bool, time_ms: u64) {
        let before = self.caret.to_position();
        let was_focused = self.focused;
        if !was_focused {
            self.focused = true;
            self.emit(EditorEvent::FocusGained);
        }

        self.set_caret_from_pixel(x, y);
        if shift {
            self.finish_move(before, true);
            return;
        }

        let quick = self
            .last_click_ms
            .is_some_and(|last| time_ms.saturating_sub(last) < MULTI_CLICK_MS);
        self.click_count = if quick && was_focused {
            (self.click_count + 1).min(3)
        } else {
            0
        };
        self.last_click_ms = Some(time_ms);

        match self.click_count {
            1 => self.select_word(),
            2 => self.select_line(),
            _ => self.clear_selection(),
        }
    }

    /// Pointer drag; returns true when the event was consumed
    pub fn mouse_move(&mut self, x: f64, y: f64, left_button_down: bool) -> bool {
        if !self.focused || !left_button_down {
            return false;
        }
        let before = self.caret.to_position();
        self.set_caret_from_pixel(x, y);
        self.finish_move(before, true);
        true
    }
}

// =============================================================================
// Message Dispatch
// =============================================================================

impl EditableState {
    /// Apply a message; returns true if the text, caret or selection may have changed
    pub fn apply(&mut self, msg: TextEditMsg) -> bool {
        if msg.requires_multiline() && !self.constraints.allow_multiline {
            return false;
        }

        match msg {
            TextEditMsg::Move(target) => {
                self.move_to(target, false);
                true
            }
            TextEditMsg::MoveWithSelection(target) => {
                self.move_to(target, true);
                true
            }
            TextEditMsg::InsertChar(ch) => self.insert_char(ch),
            TextEditMsg::InsertText(text) => self.insert_text(&text),
            TextEditMsg::InsertNewline => self.insert_newline(),
            TextEditMsg::InsertTab => self.insert_tab(),
            TextEditMsg::DeleteBackward => self.delete_backward(),
            TextEditMsg::DeleteForward => self.delete_forward(),
            TextEditMsg::DeleteWordBackward => self.delete_word_backward(),
            TextEditMsg::DeleteWordForward => self.delete_word_forward(),
            TextEditMsg::SelectAll => {
                self.select_all();
                true
            }
            TextEditMsg::SelectWord => {
                self.select_word();
                true
            }
            TextEditMsg::SelectLine => {
                self.select_line();
                true
            }
            TextEditMsg::CollapseSelection => {
                self.clear_selection();
                true
            }
            TextEditMsg::Paste(text) => self.paste(&text),
            TextEditMsg::Undo => self.undo(),
            TextEditMsg::Redo => self.redo(),
        }
    }
}
