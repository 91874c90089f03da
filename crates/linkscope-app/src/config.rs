//! Runtime configuration.

use std::path::PathBuf;

use linkscope_client::Endpoint;
use linkscope_proto::Role;

/// Configuration for a [`Runtime`](crate::Runtime).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Relay socket endpoint.
    pub endpoint: Endpoint,
    /// Role announced when joining.
    pub role: Role,
    /// Room joined on startup, if any.
    pub room: Option<String>,
    /// Initial encryption password.
    pub password: String,
    /// Directory downloads are saved to by default.
    pub download_dir: PathBuf,
}

impl AppConfig {
    /// Configuration with no auto-join, an empty password, and downloads in
    /// the working directory.
    pub fn new(endpoint: Endpoint, role: Role) -> Self {
        Self { endpoint, role, room: None, password: String::new(), download_dir: PathBuf::from(".") }
    }
}
