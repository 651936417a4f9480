//! Message types for the text-area engine.

/// Target for caret movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Move one character left
    Left,
    /// Move one character right
    Right,
    /// Move one line up
    Up,
    /// Move one line down
    Down,
    /// Move to start of line
    LineStart,
    /// Move to end of line
    LineEnd,
    /// Move one word left
    WordLeft,
    /// Move one word right
    WordRight,
    /// Move to start of document
    DocumentStart,
    /// Move to end of document
    DocumentEnd,
}

/// Message type for all text-area operations.
///
/// Clipboard reads happen in the host; `Paste` carries the clipboard text.
/// Copy and cut are not messages since they must hand text back, see
/// [`EditableState::copy`](super::EditableState::copy) and
/// [`EditableState::cut`](super::EditableState::cut).
#[derive(Debug, Clone, PartialEq)]
pub enum TextEditMsg {
    // === Movement ===
    /// Move caret and collapse selection
    Move(MoveTarget),
    /// Move caret and extend selection
    MoveWithSelection(MoveTarget),

    // === Insertion ===
    /// Insert a single character
    InsertChar(char),
    /// Insert a string
    InsertText(String),
    /// Insert a line break
    InsertNewline,
    /// Insert four spaces
    InsertTab,

    // === Deletion ===
    /// Delete character before caret (Backspace)
    DeleteBackward,
    /// Delete character after caret (Delete)
    DeleteForward,
    /// Delete word before caret (Ctrl+Backspace)
    DeleteWordBackward,
    /// Delete word after caret (Ctrl+Delete)
    DeleteWordForward,

    // === Selection ===
    SelectAll,
    /// Select the word around the caret
    SelectWord,
    /// Select the caret's line
    SelectLine,
    /// Collapse selection to caret position
    CollapseSelection,

    // === Clipboard ===
    /// Paste text from clipboard
    Paste(String),

    // === Undo/Redo ===
    Undo,
    Redo,
}

impl TextEditMsg {
    /// Check if this message modifies the buffer
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            TextEditMsg::InsertChar(_)
                | TextEditMsg::InsertText(_)
                | TextEditMsg::InsertNewline
                | TextEditMsg::InsertTab
                | TextEditMsg::DeleteBackward
                | TextEditMsg::DeleteForward
                | TextEditMsg::DeleteWordBackward
                | TextEditMsg::DeleteWordForward
                | TextEditMsg::Paste(_)
                | TextEditMsg::Undo
                | TextEditMsg::Redo
        )
    }

    /// Check if this message is a movement operation
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            TextEditMsg::Move(_) | TextEditMsg::MoveWithSelection(_)
        )
    }

    /// Check if this message is a selection operation
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            TextEditMsg::MoveWithSelection(_)
                | TextEditMsg::SelectAll
                | TextEditMsg::SelectWord
                | TextEditMsg::SelectLine
        )
    }

    /// Check if this message is only meaningful in a multi-line text area
    pub fn requires_multiline(&self) -> bool {
        matches!(
            self,
            TextEditMsg::InsertNewline
                | TextEditMsg::InsertTab
                | TextEditMsg::Move(MoveTarget::Up)
                | TextEditMsg::Move(MoveTarget::Down)
                | TextEditMsg::MoveWithSelection(MoveTarget::Up)
                | TextEditMsg::MoveWithSelection(MoveTarget::Down)
        )
    }
}
