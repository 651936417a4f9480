//! VTML markup editor core
//!
//! An editable multiline text area with syntax highlighting, undo/redo and
//! closing-tag completion, meant to be embedded in a host UI. The host
//! supplies text metrics, clipboard and input events; the engine answers
//! with queued notifications.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod input;
pub mod session;
pub mod syntax;
pub mod theme;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::EditorConfig;
pub use editable::{EditConstraints, EditableState, EditorEvent};
pub use session::{EditorSession, HostServices};
pub use theme::{HighlightTheme, ThemeRegistry};
