//! Text-area engine for the markup editor.
//!
//! # Architecture
//!
//! The core components are:
//!
//! - [`LineBuffer`]: the document as wrapped display lines, plus [`lineize`]
//! - [`TextMeasure`]: host-supplied text metrics used for wrapping and hit testing
//! - [`EditableState`]: caret, selection, edit operations and undo history
//! - [`EditHistory`] / [`TextDelta`]: bounded undo/redo of minimal text diffs
//! - [`EditConstraints`]: line ceiling, wrapping and single/multi-line mode
//! - [`EditorEvent`] / [`ChangeValidator`]: notifications out, veto hook in
//! - [`TextEditMsg`]: message type for all editing operations
//!
//! # Example
//!
//! ```
//! use vtmledit::editable::{EditConstraints, EditableState, MonospaceMeasure, MoveTarget};
//!
//! let mut state = EditableState::with_text(
//!     "hello",
//!     EditConstraints::editor(),
//!     MonospaceMeasure::default(),
//! );
//!
//! state.move_to(MoveTarget::DocumentEnd, false);
//! state.insert_char('!');
//! assert_eq!(state.text(), "hello!");
//!
//! state.undo();
//! assert_eq!(state.text(), "hello");
//! ```

mod buffer;
mod constraints;
mod cursor;
mod events;
mod history;
mod messages;
mod metrics;
mod selection;
mod state;

// Re-export main types
pub use buffer::{lineize, LineBuffer};
pub use constraints::{EditConstraints, DEFAULT_MAX_LINES};
pub use cursor::{Caret, Position};
pub use events::{AcceptAll, ChangeValidator, EditorEvent};
pub use history::{EditHistory, TextDelta, DEFAULT_HISTORY_LIMIT};
pub use messages::{MoveTarget, TextEditMsg};
pub use metrics::{MonospaceMeasure, TextMeasure};
pub use selection::Selection;
pub use state::{CaretError, EditableState, MULTI_CLICK_MS, TAB_TEXT};
