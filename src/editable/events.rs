//! Notifications emitted by the engine and the host validation hook.
//!
//! The engine never calls back into the host. It queues [`EditorEvent`]s that
//! the host drains after each operation with
//! [`EditableState::drain_events`](super::EditableState::drain_events).

/// Something the host may want to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The full text changed (preview refresh)
    TextChanged(String),
    /// Caret pixel position, relative to the text box origin
    CaretMoved { x: f64, y: f64 },
    /// Caret logical position
    CaretPositionChanged { line: usize, column: usize },
    /// Selection in document order
    SelectionChanged {
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    },
    FocusGained,
    FocusLost,
}

/// Host veto over a pending edit.
///
/// Receives the staged lines; returning `false` discards the edit.
pub trait ChangeValidator {
    fn try_change(&self, staged_lines: &[String]) -> bool;
}

impl<F> ChangeValidator for F
where
    F: Fn(&[String]) -> bool,
{
    fn try_change(&self, staged_lines: &[String]) -> bool {
        self(staged_lines)
    }
}

/// Validator that accepts every edit
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ChangeValidator for AcceptAll {
    fn try_change(&self, _staged_lines: &[String]) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_validator() {
        let limit = |lines: &[String]| lines.iter().map(|l| l.len()).sum::<usize>() <= 3;
        assert!(limit.try_change(&["abc".to_string()]));
        assert!(!limit.try_change(&["ab\n".to_string(), "c".to_string()]));
        assert!(AcceptAll.try_change(&[]));
    }
}
