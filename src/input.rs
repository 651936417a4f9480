//! Host input events mapped onto the text-area engine
//!
//! The host translates its toolkit events into [`KeyEvent`] / [`MouseEvent`]
//! and asks the engine to handle them. Every handler returns whether the
//! event was consumed, so the host knows to stop its own processing.

use std::fmt;

use crate::editable::{EditableState, MoveTarget};
use crate::session::Clipboard;

/// Modifier keys as a bitfield
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Control or Command: both trigger editing shortcuts
    #[inline]
    pub const fn command(self) -> bool {
        self.ctrl() || self.meta()
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push("Alt");
        }
        if self.meta() {
            parts.push("Cmd");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// Keys the text area reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Home,
    End,
    Left,
    Right,
    Up,
    Down,
    /// A bare Shift press
    Shift,
}

/// A key-down event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub const fn new(key: KeyCode, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Key with no modifiers held
    pub const fn plain(key: KeyCode) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event in text box pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseEvent {
    pub x: f64,
    pub y: f64,
    /// Pressed button for a press, held button for a drag
    pub button: Option<MouseButton>,
    pub modifiers: Modifiers,
    /// Host timestamp, used for double/triple click detection
    pub time_ms: u64,
}

impl MouseEvent {
    pub const fn new(x: f64, y: f64, button: Option<MouseButton>, time_ms: u64) -> Self {
        Self {
            x,
            y,
            button,
            modifiers: Modifiers::NONE,
            time_ms,
        }
    }

    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl EditableState {
    /// Handle a key-down event, returning whether it was consumed.
    ///
    /// Ignored while unfocused. Tab is only consumed in multiline mode, Enter
    /// is not consumed in single-line mode, Escape and Shift never are.
    pub fn handle_key_down(&mut self, event: &KeyEvent, clipboard: &mut dyn Clipboard) -> bool {
        if !self.is_focused() {
            return false;
        }

        let multiline = self.constraints.allow_multiline;
        let command = event.modifiers.command();
        let shift = event.modifiers.shift();

        match event.key {
            KeyCode::Shift | KeyCode::Escape => false,
            KeyCode::Enter | KeyCode::Tab if !multiline => false,
            KeyCode::Enter => {
                self.insert_newline();
                true
            }
            KeyCode::Tab => {
                self.insert_tab();
                true
            }
            KeyCode::Char(ch) if command => {
                self.handle_shortcut(ch, shift, clipboard);
                true
            }
            // Printable input arrives through handle_char
            KeyCode::Char(_) => true,
            KeyCode::Backspace => {
                if command {
                    self.delete_word_backward();
                } else {
                    self.delete_backward();
                }
                true
            }
            KeyCode::Delete => {
                if command {
                    self.delete_word_forward();
                } else {
                    self.delete_forward();
                }
                true
            }
            KeyCode::Home => {
                let target = if command {
                    MoveTarget::DocumentStart
                } else {
                    MoveTarget::LineStart
                };
                self.move_to(target, shift);
                true
            }
            KeyCode::End => {
                let target = if command {
                    MoveTarget::DocumentEnd
                } else {
                    MoveTarget::LineEnd
                };
                self.move_to(target, shift);
                true
            }
            KeyCode::Left => {
                let target = if command {
                    MoveTarget::WordLeft
                } else {
                    MoveTarget::Left
                };
                self.move_to(target, shift);
                true
            }
            KeyCode::Right => {
                let target = if command {
                    MoveTarget::WordRight
                } else {
                    MoveTarget::Right
                };
                self.move_to(target, shift);
                true
            }
            KeyCode::Up if command => {
                self.move_line_by_pixel(true, shift);
                true
            }
            KeyCode::Down if command => {
                self.move_line_by_pixel(false, shift);
                true
            }
            KeyCode::Up => {
                self.move_to(MoveTarget::Up, shift);
                true
            }
            KeyCode::Down => {
                self.move_to(MoveTarget::Down, shift);
                true
            }
        }
    }

    fn handle_shortcut(&mut self, ch: char, shift: bool, clipboard: &mut dyn Clipboard) {
        match ch.to_ascii_lowercase() {
            'a' => self.select_all(),
            'c' => clipboard.set_text(&self.copy()),
            'x' => {
                let text = self.cut();
                clipboard.set_text(&text);
            }
            'v' => {
                if let Some(text) = clipboard.get_text() {
                    self.paste(&text);
                }
            }
            'z' if shift => {
                self.redo();
            }
            'z' => {
                self.undo();
            }
            'y' => {
                self.redo();
            }
            _ => {}
        }
    }

    /// Handle character input; control characters are left to key-down
    pub fn handle_char(&mut self, ch: char) -> bool {
        if !self.is_focused() || ch.is_control() {
            return false;
        }
        self.insert_char(ch);
        true
    }

    /// Left press places the caret (focusing the area); other buttons pass through
    pub fn handle_mouse_down(&mut self, event: &MouseEvent) -> bool {
        if event.button != Some(MouseButton::Left) {
            return false;
        }
        self.mouse_down(event.x, event.y, event.modifiers.shift(), event.time_ms);
        true
    }

    /// Drag with the left button held extends the selection
    pub fn handle_mouse_move(&mut self, event: &MouseEvent) -> bool {
        self.mouse_move(event.x, event.y, event.button == Some(MouseButton::Left))
    }
}
