//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::{future::Future, path::Path};

use linkscope_client::{Endpoint, TransportEvent};

use crate::{App, AppAction};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. The same
/// orchestration code runs in the terminal UI and in tests.
///
/// # Implementations
///
/// - **TUI**: crossterm for terminal events, tokio-tungstenite for the socket
/// - **Tests**: scripted input and an in-memory relay
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait briefly for user input and apply it to the app.
    ///
    /// Returns the resulting actions, empty when nothing happened.
    fn poll_event(&mut self, app: &mut App) -> impl Future<Output = Result<Vec<AppAction>, Self::Error>> + Send;

    /// Open a socket to the relay, replacing any current one.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket cannot be opened. The runtime reports
    /// it as a closed session rather than stopping.
    fn connect(&mut self, endpoint: &Endpoint) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Drop the current socket, if any, without reporting a close.
    fn disconnect(&mut self);

    /// Send one text message over the socket.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket is gone.
    fn send_text(&mut self, text: String) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Next buffered socket event, without waiting.
    ///
    /// After yielding [`TransportEvent::Closed`] the socket is gone and
    /// [`is_connected`](Driver::is_connected) returns `false`.
    fn recv_event(&mut self) -> impl Future<Output = Option<TransportEvent>> + Send;

    /// Check if a socket is open.
    fn is_connected(&self) -> bool;

    /// Read a whole file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn read_file(&mut self, path: &Path) -> impl Future<Output = Result<Vec<u8>, Self::Error>> + Send;

    /// Write a whole file, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write_file(&mut self, path: &Path, bytes: &[u8]) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Stop the connection and clean up resources.
    fn stop(&mut self);
}
