//! Client
//!
//! Action-based session client for the link demo protocol. Manages the single
//! connection to the relay: its lifecycle, the join handshake, envelope
//! encoding, and inbound decoding.
//!
//! # Architecture
//!
//! The client is Sans-IO. It receives events ([`ClientEvent`]), processes them
//! through pure state machine logic, and returns actions ([`ClientAction`])
//! for the caller to execute.
//!
//! # Components
//!
//! - [`Client`]: Session state machine (`Idle → Connecting → Open → Closed`)
//! - [`Endpoint`]: Socket URL derived from the relay origin
//! - [`ClientEvent`] / [`ClientAction`]: State machine inputs and outputs
//!
//! # Transport (optional)
//!
//! With the `transport` feature enabled, this crate also provides:
//! - [`transport::ConnectedClient`]: Handle to an open WebSocket
//! - [`transport::connect`]: Connect to the relay

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod client;
mod endpoint;
mod error;
mod event;

#[cfg(feature = "transport")]
pub mod transport;

pub use client::{Client, SessionState};
pub use endpoint::{Endpoint, SOCKET_PATH};
pub use error::{ClientError, EndpointError};
pub use event::{ClientAction, ClientEvent, TransportEvent};
pub use linkscope_proto::{Inbound, Outbound, Role};
