//! Application layer for the link demo
//!
//! Pure state machines and a generic runtime for UI and session
//! orchestration, so the same code runs against a terminal and in tests.
//!
//! # Components
//!
//! - [`App`]: view model and outbound composer (status, previews, plots, log,
//!   downloads)
//! - [`DecryptCoordinator`]: matches `rx_result` replies to decrypt requests
//! - [`Bridge`]: session bridge (translates App actions to Client events)
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod bridge;
mod config;
mod decrypt;
mod dispatch;
mod driver;
mod event;
pub mod format;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::{App, SNR_DEFAULT, SNR_MAX, SNR_MIN};
pub use bridge::{Bridge, TransportCommand};
pub use config::AppConfig;
pub use decrypt::{DEFAULT_DOWNLOAD_NAME, DecryptCoordinator, DecryptOutcome};
pub use driver::Driver;
pub use event::AppEvent;
pub use runtime::Runtime;
pub use state::{ConnectionState, Download, LOG_CAPACITY, LogPanel, PlotSlot, Plots, PreviewPanel};
