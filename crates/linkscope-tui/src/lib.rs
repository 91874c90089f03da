//! Terminal UI for the link demo
//!
//! A thin shell over [`linkscope_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic
//! [`linkscope_app::Runtime`].
//!
//! This crate only handles terminal input, rendering, the socket, and files.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod commands;
pub mod input;
pub mod terminal;
pub mod ui;

pub use input::{InputState, Key};
pub use linkscope_app::{App, AppAction, AppConfig, AppEvent, Driver, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
