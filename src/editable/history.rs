//! Edit history (undo/redo) for the text-area engine.
//!
//! Every committed edit is recorded as a [`TextDelta`]: the minimal
//! replacement that turns the text before the edit into the text after it,
//! found by trimming the common prefix and suffix of the two snapshots.

use std::collections::VecDeque;

use crate::util::{char_len, splice};

/// Default number of deltas kept on each stack
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// A single undoable text replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDelta {
    /// Character offset where old and new text start to differ
    pub start_index: usize,
    /// Text present before the edit (empty for pure inserts)
    pub removed_text: String,
    /// Text present after the edit (empty for pure deletes)
    pub added_text: String,
}

impl TextDelta {
    pub fn new(start_index: usize, removed_text: impl Into<String>, added_text: impl Into<String>) -> Self {
        Self {
            start_index,
            removed_text: removed_text.into(),
            added_text: added_text.into(),
        }
    }

    /// Compute the minimal delta between two snapshots.
    ///
    /// Identical texts give an empty delta at index 0.
    pub fn compute(old_text: &str, new_text: &str) -> Self {
        let old: Vec<char> = old_text.chars().collect();
        let new: Vec<char> = new_text.chars().collect();

        let prefix = old
            .iter()
            .zip(new.iter())
            .take_while(|(a, b)| a == b)
            .count();

        if prefix == old.len() && prefix == new.len() {
            return Self::default();
        }

        // Common suffix, never overlapping the prefix
        let max_suffix = old.len().min(new.len()) - prefix;
        let suffix = old
            .iter()
            .rev()
            .zip(new.iter().rev())
            .take(max_suffix)
            .take_while(|(a, b)| a == b)
            .count();

        Self {
            start_index: prefix,
            removed_text: old[prefix..old.len() - suffix].iter().collect(),
            added_text: new[prefix..new.len() - suffix].iter().collect(),
        }
    }

    /// True when applying the delta changes nothing
    pub fn is_noop(&self) -> bool {
        self.removed_text == self.added_text
    }

    /// Replay the edit on the "before" text
    pub fn apply(&self, text: &str) -> String {
        let end = self.start_index + char_len(&self.removed_text);
        splice(text, self.start_index, end, &self.added_text)
    }

    /// Undo the edit on the "after" text
    pub fn revert(&self, text: &str) -> String {
        let end = self.start_index + char_len(&self.added_text);
        splice(text, self.start_index, end, &self.removed_text)
    }
}

/// Bounded undo/redo stacks with linear history.
///
/// Pushing a new delta clears the redo stack; when a stack is over capacity
/// its oldest delta is dropped.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: VecDeque<TextDelta>,
    redo_stack: VecDeque<TextDelta>,
    max_size: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Create a new edit history with the default capacity
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a new edit history with the given capacity per stack
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_size,
        }
    }

    /// Record a committed edit (clears redo stack)
    pub fn push(&mut self, delta: TextDelta) {
        self.redo_stack.clear();
        Self::push_bounded(&mut self.undo_stack, delta, self.max_size);
    }

    /// Take the most recent edit for undoing; it moves to the redo stack
    pub fn pop_undo(&mut self) -> Option<TextDelta> {
        let delta = self.undo_stack.pop_back()?;
        Self::push_bounded(&mut self.redo_stack, delta.clone(), self.max_size);
        Some(delta)
    }

    /// Take the most recently undone edit; it moves back to the undo stack
    pub fn pop_redo(&mut self) -> Option<TextDelta> {
        let delta = self.redo_stack.pop_back()?;
        Self::push_bounded(&mut self.undo_stack, delta.clone(), self.max_size);
        Some(delta)
    }

    fn push_bounded(stack: &mut VecDeque<TextDelta>, delta: TextDelta, max_size: usize) {
        stack.push_back(delta);
        while stack.len() > max_size {
            stack.pop_front();
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}
