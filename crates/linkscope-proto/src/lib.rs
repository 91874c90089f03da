//! Linkscope protocol
//!
//! JSON envelopes exchanged between the link demo clients and the relay
//! server, one envelope per WebSocket text message, discriminated by the
//! `type` field.
//!
//! # Components
//!
//! - [`Inbound`]: envelopes the server sends to a client
//! - [`Outbound`]: envelopes a client sends to the server
//! - [`FrameRx`] / [`FramePreview`]: simulated RF frame telemetry
//! - [`codec`]: binary-to-text codec used for ciphertexts and file payloads

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod codec;
pub mod envelope;
pub mod errors;
pub mod frame;
pub mod role;

pub use envelope::{DecryptRequest, Inbound, Outbound, RxResult};
pub use errors::ProtocolError;
pub use frame::{FramePreview, FrameRx, FrameSummary, IqPoint, IqSeries, PayloadKind};
pub use role::Role;
