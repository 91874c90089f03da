//! Session state machine.
//!
//! [`Client`] owns the lifecycle of the single connection to the relay and is
//! the only path to the wire: every outbound envelope is encoded here, and
//! every inbound message is decoded here before dispatch.
//!
//! ```text
//! Idle ──connect──▶ Connecting ──opened──▶ Open ──closed──▶ Closed
//!                       ▲                                     │
//!                       └──────────────connect────────────────┘
//! ```
//!
//! There is no automatic reconnect. Leaving `Closed` requires a new
//! [`ClientEvent::Connect`].

use linkscope_proto::{Inbound, Outbound, Role};

use crate::{ClientAction, ClientError, ClientEvent};

/// Connection lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No connection attempted yet.
    Idle,
    /// Transport is opening.
    Connecting,
    /// Transport open and join sent.
    Open,
    /// Transport closed.
    Closed,
}

/// Session client.
///
/// Pure state machine: consumes [`ClientEvent`]s and returns
/// [`ClientAction`]s. No I/O dependencies.
#[derive(Debug, Clone)]
pub struct Client {
    state: SessionState,
    room: Option<String>,
    role: Option<Role>,
    last_snr: Option<f64>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Create an idle client.
    pub fn new() -> Self {
        Self { state: SessionState::Idle, room: None, role: None, last_snr: None }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: ClientEvent) -> Result<Vec<ClientAction>, ClientError> {
        match event {
            ClientEvent::Connect { room, role } => Ok(self.connect(room, role)),
            ClientEvent::TransportOpened => self.transport_opened(),
            ClientEvent::TransportClosed { reason } => Ok(self.transport_closed(reason)),
            ClientEvent::Send(outbound) => self.send(&outbound),
            ClientEvent::MessageReceived(text) => Ok(self.receive(&text)),
        }
    }

    fn connect(&mut self, room: String, role: Role) -> Vec<ClientAction> {
        let mut actions = Vec::with_capacity(2);
        if matches!(self.state, SessionState::Connecting | SessionState::Open) {
            tracing::info!(state = ?self.state, "replacing existing connection");
            actions.push(ClientAction::CloseTransport);
        }

        tracing::info!(%room, %role, "connecting");
        self.state = SessionState::Connecting;
        self.room = Some(room);
        self.role = Some(role);
        actions.push(ClientAction::OpenTransport);
        actions
    }

    fn transport_opened(&mut self) -> Result<Vec<ClientAction>, ClientError> {
        let (SessionState::Connecting, Some(room), Some(role)) =
            (self.state, self.room.clone(), self.role)
        else {
            tracing::warn!(state = ?self.state, "transport opened outside of a connect");
            return Ok(vec![]);
        };

        let join = Outbound::Join { room: room.clone(), role }.encode()?;
        self.state = SessionState::Open;
        tracing::info!(%room, %role, "session open");

        Ok(vec![ClientAction::Transmit(join), ClientAction::Opened { room, role }])
    }

    fn transport_closed(&mut self, reason: Option<String>) -> Vec<ClientAction> {
        if matches!(self.state, SessionState::Idle | SessionState::Closed) {
            return vec![];
        }

        tracing::info!(reason = reason.as_deref().unwrap_or("none"), "session closed");
        self.state = SessionState::Closed;
        vec![ClientAction::Closed { reason }]
    }

    fn send(&mut self, outbound: &Outbound) -> Result<Vec<ClientAction>, ClientError> {
        if self.state != SessionState::Open {
            tracing::debug!(kind = outbound.type_name(), state = ?self.state, "send ignored, session not open");
            return Ok(vec![]);
        }

        if let Outbound::SetSnr { snr } = outbound {
            self.last_snr = Some(*snr);
        }

        tracing::debug!(kind = outbound.type_name(), "sending envelope");
        Ok(vec![ClientAction::Transmit(outbound.encode()?)])
    }

    fn receive(&mut self, text: &str) -> Vec<ClientAction> {
        let inbound = match Inbound::decode(text) {
            Ok(inbound) => inbound,
            Err(e) => {
                tracing::debug!(error = %e, "dropping inbound envelope");
                return vec![];
            },
        };

        match &inbound {
            Inbound::Joined { snr: Some(snr), .. } | Inbound::SnrUpdate { snr } => {
                self.last_snr = Some(*snr);
            },
            _ => {},
        }

        vec![ClientAction::Deliver(inbound)]
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True when envelopes can be sent.
    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    /// Room of the current or last session. `None` before the first connect.
    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    /// Role of the current or last session. `None` before the first connect.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Last SNR seen on the wire in either direction, in dB.
    pub fn last_snr(&self) -> Option<f64> {
        self.last_snr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_client(role: Role) -> Client {
        let mut client = Client::new();
        client.handle(ClientEvent::Connect { room: "A".into(), role }).unwrap();
        client.handle(ClientEvent::TransportOpened).unwrap();
        client
    }

    #[test]
    fn connect_requests_transport() {
        let mut client = Client::new();
        let actions = client.handle(ClientEvent::Connect { room: "A".into(), role: Role::Sender });

        assert_eq!(actions.unwrap(), vec![ClientAction::OpenTransport]);
        assert_eq!(client.state(), SessionState::Connecting);
    }

    #[test]
    fn open_sends_join_first() {
        let mut client = Client::new();
        client.handle(ClientEvent::Connect { room: "A".into(), role: Role::Sender }).unwrap();
        let actions = client.handle(ClientEvent::TransportOpened).unwrap();

        assert_eq!(actions, vec![
            ClientAction::Transmit(r#"{"type":"join","room":"A","role":"tx"}"#.into()),
            ClientAction::Opened { room: "A".into(), role: Role::Sender },
        ]);
        assert!(client.is_open());
    }

    #[test]
    fn reconnect_closes_previous_transport() {
        let mut client = open_client(Role::Receiver);
        let actions =
            client.handle(ClientEvent::Connect { room: "B".into(), role: Role::Receiver }).unwrap();

        assert_eq!(actions, vec![ClientAction::CloseTransport, ClientAction::OpenTransport]);
        assert_eq!(client.room(), Some("B"));
    }

    #[test]
    fn send_before_open_is_noop() {
        let mut client = Client::new();
        let actions = client.handle(ClientEvent::Send(Outbound::SetSnr { snr: 3.0 })).unwrap();
        assert!(actions.is_empty());
        assert_eq!(client.last_snr(), None);
    }

    #[test]
    fn close_then_send_is_noop() {
        let mut client = open_client(Role::Sender);
        let actions = client.handle(ClientEvent::TransportClosed { reason: None }).unwrap();
        assert_eq!(actions, vec![ClientAction::Closed { reason: None }]);

        let actions = client
            .handle(ClientEvent::Send(Outbound::SendText { text: "hi".into(), password: "pw".into() }))
            .unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn duplicate_close_reported_once() {
        let mut client = open_client(Role::Sender);
        client.handle(ClientEvent::TransportClosed { reason: None }).unwrap();
        let actions = client.handle(ClientEvent::TransportClosed { reason: None }).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn stray_open_is_ignored() {
        let mut client = Client::new();
        assert!(client.handle(ClientEvent::TransportOpened).unwrap().is_empty());
        assert_eq!(client.state(), SessionState::Idle);
    }

    #[test]
    fn malformed_inbound_dropped() {
        let mut client = open_client(Role::Receiver);
        let actions = client.handle(ClientEvent::MessageReceived("{oops".into())).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn snr_tracked_both_directions() {
        let mut client = open_client(Role::Sender);
        client
            .handle(ClientEvent::MessageReceived(r#"{"type":"snr_update","snr":9.5}"#.into()))
            .unwrap();
        assert_eq!(client.last_snr(), Some(9.5));

        client.handle(ClientEvent::Send(Outbound::SetSnr { snr: 14.0 })).unwrap();
        assert_eq!(client.last_snr(), Some(14.0));
    }
}
