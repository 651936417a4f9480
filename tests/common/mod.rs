//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use vtmledit::editable::{EditConstraints, EditableState, MonospaceMeasure, Position};

/// 10px per character, 20px per line
pub fn test_measure() -> MonospaceMeasure {
    MonospaceMeasure::new(10.0, 20.0)
}

/// Multiline area without wrapping, caret at (line, column)
pub fn test_state(text: &str, line: usize, column: usize) -> EditableState {
    let mut state = EditableState::with_text(text, EditConstraints::editor(), test_measure());
    state.set_caret(line, column);
    state.clear_selection();
    state.drain_events();
    state
}

/// Area with text selected between two flat offsets, caret at `head`
pub fn test_state_with_selection(text: &str, anchor: usize, head: usize) -> EditableState {
    let mut state = test_state(text, 0, 0);
    state.set_caret_offset(anchor);
    state.clear_selection();
    let forward = head > anchor;
    for _ in 0..anchor.abs_diff(head) {
        state.move_cursor(forward, false, true);
    }
    state.drain_events();
    state
}

/// Pixel point inside the cell at `pos`
pub fn pixel_of(pos: Position) -> (f64, f64) {
    (pos.column as f64 * 10.0, pos.line as f64 * 20.0 + 5.0)
}

/// Single-line area (max one line, no wrap)
pub fn single_line_state(text: &str) -> EditableState {
    let mut state =
        EditableState::with_text(text, EditConstraints::single_line(), test_measure());
    state.drain_events();
    state
}

/// Small corpus of markup snippets used by the law tests
pub const MARKUP_CORPUS: &[&str] = &[
    "",
    "plain text",
    "<p>hello",
    "<br/>",
    "<a><b>",
    "<a href=\"x\">t</a>",
    "<p>one\n<p>two\n",
    "< p >spaced",
    "<hotkey name=\"Interact\" /><b>x</b>",
    "<i>héllo wörld",
    "broken <tag",
    "<img src=\"a\"><img src=\"b\">",
    "line\r\nbreaks\r\n",
];
