//! Session-to-application translation layer.
//!
//! The [`Bridge`] wraps the Sans-IO [`linkscope_client::Client`] and adapts
//! it to the application lifecycle.
//!
//! # Responsibilities
//!
//! - Converts [`crate::AppAction`]s into client events.
//! - Accumulates [`TransportCommand`]s for the driver to execute in the next
//!   I/O cycle.
//! - Converts client actions back into [`crate::AppEvent`]s to update the UI.

use linkscope_client::{Client, ClientAction, ClientError, ClientEvent, TransportEvent};

use crate::{AppAction, AppEvent};

/// Socket operation requested by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCommand {
    /// Open a socket to the configured endpoint.
    Open,
    /// Drop the current socket without reporting a close.
    Close,
    /// Send one text message.
    Send(String),
}

/// Bridge between App and Client session logic.
#[derive(Debug, Default)]
pub struct Bridge {
    client: Client,
    outgoing: Vec<TransportCommand>,
}

impl Bridge {
    /// Create a bridge with an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Underlying session.
    pub fn session(&self) -> &Client {
        &self.client
    }

    /// Process an App action and return resulting App events.
    pub fn process_app_action(&mut self, action: AppAction) -> Vec<AppEvent> {
        match action {
            AppAction::Connect { room, role } => {
                let result = self.client.handle(ClientEvent::Connect { room, role });
                self.handle_client_result(result)
            },
            AppAction::Send(outbound) => {
                let result = self.client.handle(ClientEvent::Send(outbound));
                self.handle_client_result(result)
            },
            AppAction::Render
            | AppAction::Quit
            | AppAction::SendFiles { .. }
            | AppAction::SaveDownload { .. } => vec![],
        }
    }

    /// The driver finished opening the socket.
    pub fn handle_transport_opened(&mut self) -> Vec<AppEvent> {
        let result = self.client.handle(ClientEvent::TransportOpened);
        self.handle_client_result(result)
    }

    /// Handle a message or close notification from the socket.
    pub fn handle_transport_event(&mut self, event: TransportEvent) -> Vec<AppEvent> {
        let event = match event {
            TransportEvent::Message(text) => ClientEvent::MessageReceived(text),
            TransportEvent::Closed { reason } => ClientEvent::TransportClosed { reason },
        };
        let result = self.client.handle(event);
        self.handle_client_result(result)
    }

    /// Take pending socket operations.
    pub fn take_outgoing(&mut self) -> Vec<TransportCommand> {
        std::mem::take(&mut self.outgoing)
    }

    fn handle_client_result(
        &mut self,
        result: Result<Vec<ClientAction>, ClientError>,
    ) -> Vec<AppEvent> {
        match result {
            Ok(actions) => self.process_client_actions(actions),
            Err(e) => vec![AppEvent::Error { message: e.to_string() }],
        }
    }

    fn process_client_actions(&mut self, actions: Vec<ClientAction>) -> Vec<AppEvent> {
        let mut events = Vec::new();

        for action in actions {
            match action {
                ClientAction::OpenTransport => {
                    self.outgoing.push(TransportCommand::Open);
                    events.push(AppEvent::Connecting);
                },
                ClientAction::CloseTransport => self.outgoing.push(TransportCommand::Close),
                ClientAction::Transmit(text) => self.outgoing.push(TransportCommand::Send(text)),
                ClientAction::Opened { room, role } => {
                    events.push(AppEvent::Connected { room, role });
                },
                ClientAction::Closed { reason } => events.push(AppEvent::Disconnected { reason }),
                ClientAction::Deliver(inbound) => events.push(AppEvent::Inbound(inbound)),
            }
        }

        events
    }
}
