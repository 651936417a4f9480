//! Selection tests - normalization, word/line selection, mouse, events

mod common;

use common::{pixel_of, test_state, test_state_with_selection};
use vtmledit::editable::{EditorEvent, MoveTarget, Position, TextEditMsg, MULTI_CLICK_MS};

#[test]
fn test_true_selection_positions_are_ordered() {
    let text = "ab\ncd\nef";
    let len = text.chars().count();
    for anchor in 0..=len {
        for head in 0..=len {
            let state = test_state_with_selection(text, anchor, head);
            let (start, end) = state.true_selection_positions();
            assert!(start <= end, "anchor {} head {}", anchor, head);

            let (from, to) = state.selection_offsets();
            assert_eq!((from, to), (anchor.min(head), anchor.max(head)));
        }
    }
}

#[test]
fn test_backward_selection_text() {
    let state = test_state_with_selection("hello world", 11, 6);
    assert_eq!(state.selected_text(), "world");
    assert!(state.selection().is_reversed());
    assert_eq!(state.selection_start(), Position::new(0, 6));
    assert_eq!(state.selection_end(), Position::new(0, 11));
}

#[test]
fn test_selection_across_lines() {
    let state = test_state_with_selection("one\ntwo\nthree", 2, 9);
    assert_eq!(state.selected_text(), "e\ntwo\nt");
}

#[test]
fn test_select_all_and_collapse() {
    let mut state = test_state("ab\ncd", 0, 0);
    state.apply(TextEditMsg::SelectAll);
    assert_eq!(state.selected_text(), "ab\ncd");
    assert_eq!(state.caret_position(), Position::new(1, 2));

    state.apply(TextEditMsg::CollapseSelection);
    assert!(!state.has_selection());
}

#[test]
fn test_select_word_stops_at_punctuation() {
    let mut state = test_state(r#"<font color="red">"#, 0, 3);
    state.select_word();
    assert_eq!(state.selected_text(), "font");

    state.set_caret(0, 14);
    state.select_word();
    assert_eq!(state.selected_text(), "red");
}

#[test]
fn test_select_line_excludes_break() {
    let mut state = test_state("first\nsecond", 0, 2);
    state.select_line();
    assert_eq!(state.selected_text(), "first");
}

#[test]
fn test_shift_movement_extends_then_plain_collapses() {
    let mut state = test_state("hello world", 0, 0);
    state.move_to(MoveTarget::WordRight, true);
    assert_eq!(state.selected_text(), "hello ");
    state.move_to(MoveTarget::LineEnd, true);
    assert_eq!(state.selected_text(), "hello world");

    state.move_to(MoveTarget::Left, false);
    assert!(!state.has_selection());
}

#[test]
fn test_selection_changed_event_is_ordered() {
    let mut state = test_state("hello", 0, 4);
    state.move_to(MoveTarget::Left, true);
    state.move_to(MoveTarget::Left, true);

    let last = state
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, EditorEvent::SelectionChanged { .. }))
        .last();
    assert_eq!(
        last,
        Some(EditorEvent::SelectionChanged {
            start_line: 0,
            start_column: 2,
            end_line: 0,
            end_column: 4,
        })
    );
}

#[test]
fn test_vertical_movement_remembers_column() {
    let mut state = test_state("long line\nab\nanother line", 0, 7);
    state.move_to(MoveTarget::Down, false);
    assert_eq!(state.caret_position(), Position::new(1, 2));
    state.move_to(MoveTarget::Down, false);
    assert_eq!(state.caret_position(), Position::new(2, 7));
}

// ========================================================================
// Mouse
// ========================================================================

#[test]
fn test_click_places_caret_and_focuses() {
    let mut state = test_state("ab\ncdef", 0, 0);
    let (x, y) = pixel_of(Position::new(1, 3));
    state.mouse_down(x, y, false, 1_000);

    assert!(state.is_focused());
    assert_eq!(state.caret_position(), Position::new(1, 3));
    let events = state.drain_events();
    assert!(events.contains(&EditorEvent::FocusGained));
    assert!(events.contains(&EditorEvent::CaretPositionChanged { line: 1, column: 3 }));
}

#[test]
fn test_double_and_triple_click() {
    let mut state = test_state("say hello there", 0, 0);
    state.focus_gained();
    let (x, y) = pixel_of(Position::new(0, 6));

    state.mouse_down(x, y, false, 1_000);
    assert!(!state.has_selection());
    state.mouse_down(x, y, false, 1_100);
    assert_eq!(state.selected_text(), "hello");
    state.mouse_down(x, y, false, 1_200);
    assert_eq!(state.selected_text(), "say hello there");
}

#[test]
fn test_slow_clicks_do_not_select() {
    let mut state = test_state("say hello", 0, 0);
    state.focus_gained();
    let (x, y) = pixel_of(Position::new(0, 5));
    state.mouse_down(x, y, false, 1_000);
    state.mouse_down(x, y, false, 1_000 + MULTI_CLICK_MS);
    assert!(!state.has_selection());
}

#[test]
fn test_shift_click_extends() {
    let mut state = test_state("hello world", 0, 0);
    state.focus_gained();
    let (x, y) = pixel_of(Position::new(0, 2));
    state.mouse_down(x, y, false, 0);
    let (x, y) = pixel_of(Position::new(0, 7));
    state.mouse_down(x, y, true, 1_000);
    assert_eq!(state.selected_text(), "llo w");
}

#[test]
fn test_drag_selects() {
    let mut state = test_state("hello world", 0, 0);
    let (x, y) = pixel_of(Position::new(0, 6));
    state.mouse_down(x, y, false, 0);
    let (x, y) = pixel_of(Position::new(0, 11));
    assert!(state.mouse_move(x, y, true));
    assert_eq!(state.selected_text(), "world");

    assert!(!state.mouse_move(0.0, 0.0, false));
    assert_eq!(state.selected_text(), "world");
}

#[test]
fn test_focus_lost_clears_selection() {
    let mut state = test_state_with_selection("hello", 0, 3);
    state.focus_lost();
    assert!(!state.has_selection());
    assert_eq!(state.drain_events().last(), Some(&EditorEvent::FocusLost));
}

#[test]
fn test_try_set_caret_rejects_out_of_range() {
    let mut state = test_state("ab\nc", 0, 0);
    assert!(state.try_set_caret(1, 1).is_ok());
    assert!(state.try_set_caret(1, 2).is_err());
    assert!(state.try_set_caret(5, 0).is_err());
    assert_eq!(state.caret_position(), Position::new(1, 1));

    // The permissive setter clamps instead
    state.set_caret(9, 9);
    assert_eq!(state.caret_position(), Position::new(1, 1));
}
