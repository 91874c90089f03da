//! Server endpoint resolution.
//!
//! The relay serves its pages and its socket from the same origin, so the
//! socket URL is derived from the origin: plain HTTP maps to `ws://`, HTTPS to
//! `wss://`, and the socket lives at `/ws`.

use std::fmt;

use url::Url;

use crate::EndpointError;

/// Path the relay serves its WebSocket on.
pub const SOCKET_PATH: &str = "/ws";

/// Resolved WebSocket URL of the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
}

impl Endpoint {
    /// Resolve the socket URL for an origin.
    ///
    /// `http(s)://host[:port]` becomes `ws(s)://host[:port]/ws`. A `ws(s)://`
    /// URL is kept as given, gaining `/ws` only when it has no path.
    pub fn resolve(origin: &str) -> Result<Self, EndpointError> {
        let mut url = Url::parse(origin)?;

        let (scheme, from_page) = match url.scheme() {
            "http" => ("ws", true),
            "https" => ("wss", true),
            "ws" => ("ws", false),
            "wss" => ("wss", false),
            other => return Err(EndpointError::UnsupportedScheme(other.to_owned())),
        };

        url.set_scheme(scheme)
            .map_err(|()| EndpointError::UnsupportedScheme(url.scheme().to_owned()))?;

        if from_page {
            url.set_path(SOCKET_PATH);
            url.set_query(None);
            url.set_fragment(None);
        } else if url.path().is_empty() || url.path() == "/" {
            url.set_path(SOCKET_PATH);
        }

        Ok(Self { url })
    }

    /// Full socket URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Socket URL as text.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// True when the socket runs over TLS.
    pub fn is_secure(&self) -> bool {
        self.url.scheme() == "wss"
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
