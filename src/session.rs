//! Editor dialog glue between the host and the text-area engine
//!
//! An [`EditorSession`] owns one multiline [`EditableState`], the live
//! preview text, the highlighting strategy and its render cache. Host
//! facilities (clipboard, font metrics) come in through [`HostServices`]
//! and are dropped with the session.

use std::fmt;

use tracing::{debug, info};

use crate::config::EditorConfig;
use crate::editable::{EditConstraints, EditableState, EditorEvent, MonospaceMeasure, TextMeasure};
use crate::input::{KeyEvent, MouseEvent};
use crate::syntax::{auto_complete, LineStyler, MarkupHighlighter, RenderCache, StyledSpan};
use crate::theme::{HighlightTheme, ThemeRegistry};

/// Chat commands that toggle the editor dialog
pub const EDITOR_COMMANDS: &[&str] = &["vtmle", "vtmleditor"];

/// Plain-text clipboard supplied by the host
pub trait Clipboard {
    fn get_text(&mut self) -> Option<String>;
    fn set_text(&mut self, text: &str);
}

/// In-process clipboard for headless use and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}

/// Host facilities handed to a session when it is created
pub struct HostServices {
    pub clipboard: Box<dyn Clipboard>,
    pub measure: Box<dyn TextMeasure>,
}

impl HostServices {
    pub fn new(clipboard: impl Clipboard + 'static, measure: impl TextMeasure + 'static) -> Self {
        Self {
            clipboard: Box::new(clipboard),
            measure: Box::new(measure),
        }
    }

    /// Memory clipboard and monospace metrics
    pub fn headless() -> Self {
        Self::new(MemoryClipboard::default(), MonospaceMeasure::default())
    }
}

impl fmt::Debug for HostServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostServices")
            .field("measure", &self.measure)
            .finish_non_exhaustive()
    }
}

/// The markup editor dialog
pub struct EditorSession {
    editor: EditableState,
    clipboard: Box<dyn Clipboard>,
    styler: Box<dyn LineStyler>,
    render_cache: RenderCache,
    preview: String,
    open: bool,
}

impl fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSession")
            .field("editor", &self.editor)
            .field("preview", &self.preview)
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}

impl EditorSession {
    /// Build a closed session from the user's config and available themes
    pub fn new(config: &EditorConfig, themes: &ThemeRegistry, services: HostServices) -> Self {
        let theme = themes.load_theme(&config.theme);
        info!(theme = %theme.code, "editor session created");
        Self {
            editor: EditableState::new(EditConstraints::from_config(config), services.measure),
            clipboard: services.clipboard,
            styler: Box::new(MarkupHighlighter::new(theme)),
            render_cache: RenderCache::new(),
            preview: String::new(),
            open: false,
        }
    }

    pub fn editor(&self) -> &EditableState {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditableState {
        &mut self.editor
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the dialog and focus the text area
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.editor.focus_gained();
        debug!("editor opened");
    }

    /// Hide the dialog
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.editor.focus_lost();
        debug!("editor closed");
    }

    /// Flip open/closed, returning the new state
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
        } else {
            self.open();
        }
        self.open
    }

    /// React to a chat command; returns true if it was an editor command
    pub fn handle_command(&mut self, command: &str) -> bool {
        let name = command.trim().trim_start_matches('/');
        if !EDITOR_COMMANDS.iter().any(|c| c.eq_ignore_ascii_case(name)) {
            return false;
        }
        self.toggle();
        true
    }

    /// Text shown in the live preview
    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Drain engine notifications, mirroring text changes into the preview.
    ///
    /// The events are returned so the host can forward them.
    pub fn sync(&mut self) -> Vec<EditorEvent> {
        let events = self.editor.drain_events();
        for event in &events {
            if let EditorEvent::TextChanged(text) = event {
                self.preview.clone_from(text);
            }
        }
        events
    }

    pub fn handle_key_down(&mut self, event: &KeyEvent) -> bool {
        self.editor.handle_key_down(event, self.clipboard.as_mut())
    }

    pub fn handle_char(&mut self, ch: char) -> bool {
        self.editor.handle_char(ch)
    }

    pub fn handle_mouse_down(&mut self, event: &MouseEvent) -> bool {
        self.editor.handle_mouse_down(event)
    }

    pub fn handle_mouse_move(&mut self, event: &MouseEvent) -> bool {
        self.editor.handle_mouse_move(event)
    }

    /// Replace the editor text, caret at the end (undoable)
    pub fn set_text(&mut self, text: &str) -> bool {
        self.editor.set_value(text, true)
    }

    /// Insert the missing closing tags as one undoable edit
    pub fn apply_auto_completion(&mut self) -> bool {
        let completed = auto_complete(self.editor.text());
        if completed == self.editor.text() {
            return false;
        }
        debug!("auto-completing tags");
        self.editor.set_value(&completed, false)
    }

    /// Put the whole text on the clipboard
    pub fn copy_all(&mut self) {
        let text = self.editor.text().to_string();
        self.clipboard.set_text(&text);
    }

    /// Switch the highlighting theme
    pub fn set_theme(&mut self, theme: HighlightTheme) {
        info!(theme = %theme.code, "theme changed");
        self.set_styler(MarkupHighlighter::new(theme));
    }

    /// Swap the line styling strategy
    pub fn set_styler(&mut self, styler: impl LineStyler + 'static) {
        self.styler = Box::new(styler);
        self.render_cache.invalidate();
    }

    /// Styled lines for the current text, restyled only after edits
    pub fn styled_lines(&mut self) -> &[Vec<StyledSpan>] {
        self.render_cache
            .styled_lines(self.editor.revision(), self.editor.lines(), self.styler.as_ref())
    }

    /// Release cached render artifacts and the undo history
    pub fn dispose(&mut self) {
        self.close();
        self.render_cache.release();
        self.editor.clear_history();
        debug!("editor session disposed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::PlainStyler;

    fn session() -> EditorSession {
        EditorSession::new(
            &EditorConfig::default(),
            &ThemeRegistry::new(),
            HostServices::headless(),
        )
    }

    #[test]
    fn test_memory_clipboard() {
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(clipboard.get_text(), None);
        clipboard.set_text("x");
        assert_eq!(clipboard.get_text().as_deref(), Some("x"));
    }

    #[test]
    fn test_command_toggles() {
        let mut session = session();
        assert!(!session.handle_command("say hi"));
        assert!(session.handle_command("vtmle"));
        assert!(session.is_open());
        assert!(session.editor().is_focused());
        assert!(session.handle_command("/VTMLEditor"));
        assert!(!session.is_open());
        assert!(!session.editor().is_focused());
    }

    #[test]
    fn test_preview_follows_text_changes() {
        let mut session = session();
        session.open();
        session.handle_char('a');
        session.handle_char('b');
        assert_eq!(session.preview(), "");

        let events = session.sync();
        assert!(events.contains(&EditorEvent::TextChanged("ab".to_string())));
        assert_eq!(session.preview(), "ab");
    }

    #[test]
    fn test_auto_completion_is_undoable() {
        let mut session = session();
        session.set_text("<p>hello");
        assert!(session.apply_auto_completion());
        assert_eq!(session.editor().text(), "<p>hello</p>");
        assert!(!session.apply_auto_completion());

        assert!(session.editor_mut().undo());
        assert_eq!(session.editor().text(), "<p>hello");
    }

    #[test]
    fn test_styled_lines_cached_until_edit() {
        let mut session = session();
        session.set_text("<b>x</b>");
        assert_eq!(session.styled_lines()[0][1].text, "b");

        session.set_styler(PlainStyler);
        assert_eq!(session.styled_lines()[0][0].text, "<b>x</b>");

        session.dispose();
        assert!(!session.editor().can_undo());
        assert!(!session.is_open());
    }
}
