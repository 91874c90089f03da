//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering. The relay socket uses
//! tokio-tungstenite; files go through `tokio::fs`.

use std::{
    io::{self, Stdout, stdout},
    path::Path,
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use linkscope_app::{App, AppAction, AppEvent, Driver};
use linkscope_client::{
    Endpoint, EndpointError, TransportEvent,
    transport::{self, ConnectedClient, TransportError},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::sync::mpsc::error::TryRecvError;

use crate::{InputState, input::Key, ui};

/// Longest wait for terminal input before socket events are drained.
const TICK: Duration = Duration::from_millis(50);

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal or file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport error.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Relay address could not be turned into a socket URL.
    #[error("invalid relay address: {0}")]
    Endpoint(#[from] EndpointError),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm), rendering (ratatui), and the relay
/// socket. Owns the input state for text editing.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    connection: Option<ConnectedClient>,
    input_state: InputState,
}

impl TerminalDriver {
    /// Create a new terminal driver.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, connection: None, input_state: InputState::new() })
    }

    /// Map a crossterm `KeyCode` to its binding.
    fn convert_key(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::Char(c) => Some(Key::Char(c)),
            KeyCode::Enter => Some(Key::Submit),
            KeyCode::Backspace => Some(Key::EraseBack),
            KeyCode::Delete => Some(Key::EraseForward),
            KeyCode::Esc => Some(Key::Quit),
            KeyCode::Left => Some(Key::CursorLeft),
            KeyCode::Right => Some(Key::CursorRight),
            KeyCode::Up => Some(Key::SnrUp),
            KeyCode::Down => Some(Key::SnrDown),
            KeyCode::Home => Some(Key::LineStart),
            KeyCode::End => Some(Key::LineEnd),
            _ => None,
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, Self::Error> {
        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        match Self::convert_key(key_event.code) {
                            Some(key_input) => Ok(self.input_state.handle_key(key_input, app)),
                            None => Ok(vec![]),
                        }
                    },
                    Some(Ok(Event::Resize(cols, rows))) => {
                        Ok(app.handle(AppEvent::Resize(cols, rows)))
                    },
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    _ => Ok(vec![]),
                }
            }

            // Tick timeout
            () = tokio::time::sleep(TICK) => {
                Ok(app.handle(AppEvent::Tick))
            }
        }
    }

    async fn connect(&mut self, endpoint: &Endpoint) -> Result<(), Self::Error> {
        self.disconnect();
        self.connection = Some(transport::connect(endpoint).await?);
        Ok(())
    }

    fn disconnect(&mut self) {
        if let Some(conn) = self.connection.take() {
            conn.stop();
        }
    }

    async fn send_text(&mut self, text: String) -> Result<(), Self::Error> {
        let conn = self.connection.as_ref().ok_or(TransportError::Closed)?;
        conn.send(text).await?;
        Ok(())
    }

    async fn recv_event(&mut self) -> Option<TransportEvent> {
        let conn = self.connection.as_mut()?;
        let event = match conn.from_server.try_recv() {
            Ok(event) => event,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => TransportEvent::Closed { reason: None },
        };

        if matches!(event, TransportEvent::Closed { .. }) {
            self.connection = None;
        }
        Some(event)
    }

    fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    async fn read_file(&mut self, path: &Path) -> Result<Vec<u8>, Self::Error> {
        Ok(tokio::fs::read(path).await?)
    }

    async fn write_file(&mut self, path: &Path, bytes: &[u8]) -> Result<(), Self::Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| {
            ui::render(frame, app, &self.input_state);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        self.disconnect();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
