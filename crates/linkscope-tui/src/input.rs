//! Input state and key handling for the TUI.
//!
//! This module owns all text input state (buffer, cursor) and handles
//! character-level key events. Command parsing happens here on Enter.

use linkscope_app::{App, AppAction};

use crate::commands::{self, Command};

/// A key press, already mapped to what it does in this client.
///
/// Keeps the line editor free of crossterm types so it can be driven from
/// tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Insert a character at the cursor.
    Char(char),
    /// Submit the line as a message or command (Enter).
    Submit,
    /// Erase before the cursor (Backspace).
    EraseBack,
    /// Erase at the cursor (Delete).
    EraseForward,
    /// Leave the client (Esc).
    Quit,
    /// Cursor one character left.
    CursorLeft,
    /// Cursor one character right.
    CursorRight,
    /// Cursor to the start of the line (Home).
    LineStart,
    /// Cursor to the end of the line (End).
    LineEnd,
    /// Raise the channel SNR by one step (Up).
    SnrUp,
    /// Lower the channel SNR by one step (Down).
    SnrDown,
}

/// SNR change per arrow key press, in dB.
const SNR_STEP: f64 = 1.0;

/// Input state for the TUI.
///
/// Manages the text input buffer and cursor position.
/// Handles all character-level key events.
#[derive(Debug, Default)]
pub struct InputState {
    /// Text buffer for user input.
    buffer: String,
    /// Cursor position, in characters.
    cursor: usize,
}

impl InputState {
    /// Create a new empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text in the input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Byte offset of the character at `cursor`.
    fn byte_offset(&self, cursor: usize) -> usize {
        self.buffer.char_indices().nth(cursor).map_or(self.buffer.len(), |(offset, _)| offset)
    }

    /// Handle a key input event.
    ///
    /// Returns actions to process (may be empty for input-only keys,
    /// or contain session actions for commands).
    pub fn handle_key(&mut self, key: Key, app: &mut App) -> Vec<AppAction> {
        match key {
            Key::Char(c) => {
                let offset = self.byte_offset(self.cursor);
                self.buffer.insert(offset, c);
                self.cursor = self.cursor.saturating_add(1);
                vec![AppAction::Render]
            },
            Key::EraseBack => {
                if self.cursor > 0 {
                    self.cursor = self.cursor.saturating_sub(1);
                    let offset = self.byte_offset(self.cursor);
                    self.buffer.remove(offset);
                }
                vec![AppAction::Render]
            },
            Key::EraseForward => {
                if self.cursor < self.char_count() {
                    let offset = self.byte_offset(self.cursor);
                    self.buffer.remove(offset);
                }
                vec![AppAction::Render]
            },
            Key::CursorLeft => {
                self.cursor = self.cursor.saturating_sub(1);
                vec![AppAction::Render]
            },
            Key::CursorRight => {
                if self.cursor < self.char_count() {
                    self.cursor = self.cursor.saturating_add(1);
                }
                vec![AppAction::Render]
            },
            Key::LineStart => {
                self.cursor = 0;
                vec![AppAction::Render]
            },
            Key::LineEnd => {
                self.cursor = self.char_count();
                vec![AppAction::Render]
            },
            Key::Submit => self.handle_enter(app),
            Key::Quit => app.quit(),
            Key::SnrUp => app.adjust_snr(SNR_STEP),
            Key::SnrDown => app.adjust_snr(-SNR_STEP),
        }
    }

    /// Handle Enter key - parse command and call App API.
    fn handle_enter(&mut self, app: &mut App) -> Vec<AppAction> {
        let text = std::mem::take(&mut self.buffer);
        self.cursor = 0;

        if text.trim().is_empty() {
            return vec![AppAction::Render];
        }

        match commands::parse(&text) {
            Command::Join { room } => app.join(room),
            Command::Snr { snr } => app.set_snr(snr),
            Command::Password { password } => {
                let actions = app.set_password(password);
                app.log(if app.password().is_empty() { "Password cleared" } else { "Password set" });
                actions
            },
            Command::Files { paths } => app.send_files(paths),
            Command::Save { index, path } => app.save_download(index, path),
            Command::Quit => app.quit(),
            Command::Text { text } => app.send_text(&text),
            Command::Unknown { input } => {
                app.log(format!("Unknown command: {input}"));
                vec![AppAction::Render]
            },
            Command::InvalidArgs { command, error } => {
                app.log(format!("/{command}: {error}"));
                vec![AppAction::Render]
            },
        }
    }
}
