//! WebSocket transport for the client.
//!
//! Provides [`ConnectedClient`] which handles socket I/O for envelope
//! transport. This is a thin layer that only moves text messages; protocol
//! logic stays in the Sans-IO [`Client`](crate::Client).

use std::time::Duration;

use futures::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::{Endpoint, TransportEvent};

/// Capacity of the inbound and outbound channels.
const CHANNEL_CAPACITY: usize = 64;

/// Longest wait for the TCP connect and WebSocket upgrade.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection failed.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Handshake did not complete in time.
    #[error("connection timed out after {0:?}")]
    Timeout(Duration),

    /// Connection task is gone.
    #[error("connection closed")]
    Closed,
}

/// Handle to an open WebSocket.
///
/// Messages are sent and received through the channels; an internal task
/// drives the socket. Dropping the handle aborts the task.
pub struct ConnectedClient {
    /// Send text messages to the server.
    pub to_server: mpsc::Sender<String>,
    /// Receive messages and the final close notification.
    pub from_server: mpsc::Receiver<TransportEvent>,
    abort_handle: tokio::task::AbortHandle,
}

impl ConnectedClient {
    /// Queue a text message for the server.
    pub async fn send(&self, text: String) -> Result<(), TransportError> {
        self.to_server.send(text).await.map_err(|_| TransportError::Closed)
    }

    /// Stop the connection.
    pub fn stop(&self) {
        self.abort_handle.abort();
    }
}

impl Drop for ConnectedClient {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Open a WebSocket to the relay, giving up after [`CONNECT_TIMEOUT`].
///
/// Returns once the handshake has completed.
pub async fn connect(endpoint: &Endpoint) -> Result<ConnectedClient, TransportError> {
    connect_within(endpoint, CONNECT_TIMEOUT).await
}

/// Open a WebSocket to the relay, giving up after `limit`.
///
/// A relay that accepts TCP but never answers the upgrade yields
/// [`TransportError::Timeout`].
pub async fn connect_within(
    endpoint: &Endpoint,
    limit: Duration,
) -> Result<ConnectedClient, TransportError> {
    let (stream, _response) = tokio::time::timeout(limit, connect_async(endpoint.as_str()))
        .await
        .map_err(|_| TransportError::Timeout(limit))?
        .map_err(|e| TransportError::Connection(e.to_string()))?;
    tracing::info!(%endpoint, "websocket open");

    let (to_server_tx, to_server_rx) = mpsc::channel::<String>(CHANNEL_CAPACITY);
    let (from_server_tx, from_server_rx) = mpsc::channel::<TransportEvent>(CHANNEL_CAPACITY);

    let handle = tokio::spawn(run_connection(stream, to_server_rx, from_server_tx));

    Ok(ConnectedClient {
        to_server: to_server_tx,
        from_server: from_server_rx,
        abort_handle: handle.abort_handle(),
    })
}

type Socket = tokio_tungstenite::WebSocketStream<
    tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
>;

/// Pump messages between the channels and the socket until either side ends.
///
/// Emits exactly one [`TransportEvent::Closed`] unless the handle was dropped.
async fn run_connection(
    stream: Socket,
    mut to_server: mpsc::Receiver<String>,
    from_server: mpsc::Sender<TransportEvent>,
) {
    let (mut write, mut read) = stream.split();

    let reason = loop {
        tokio::select! {
            outgoing = to_server.recv() => {
                let Some(text) = outgoing else {
                    let _ = write.send(Message::Close(None)).await;
                    break None;
                };
                if let Err(e) = write.send(Message::Text(text)).await {
                    break Some(e.to_string());
                }
            }

            incoming = read.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    if from_server.send(TransportEvent::Message(text)).await.is_err() {
                        return;
                    }
                },
                Some(Ok(Message::Close(frame))) => {
                    break frame.map(|f| f.reason.to_string()).filter(|r| !r.is_empty());
                },
                Some(Ok(Message::Binary(_))) => {
                    tracing::debug!("ignoring binary message");
                },
                Some(Ok(_)) => {},
                Some(Err(e)) => break Some(e.to_string()),
                None => break None,
            },
        }
    };

    tracing::info!(reason = reason.as_deref().unwrap_or("none"), "websocket closed");
    let _ = from_server.send(TransportEvent::Closed { reason }).await;
}
