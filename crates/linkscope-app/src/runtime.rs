//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: UI state machine
//! - [`Bridge`]: Session bridge to Client
//! - [`Driver`]: Platform-specific I/O

use std::path::PathBuf;

use linkscope_client::{Endpoint, TransportEvent};
use linkscope_proto::{Outbound, codec};

use crate::{App, AppAction, AppConfig, AppEvent, Bridge, Driver, TransportCommand};

/// Generic runtime that orchestrates App, Bridge, and Driver.
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
    bridge: Bridge,
    endpoint: Endpoint,
    autojoin: Option<String>,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime with the given driver and configuration.
    pub fn new(driver: D, config: AppConfig) -> Self {
        let mut app = App::new(config.role);
        app.password = config.password;
        app.set_download_dir(config.download_dir);

        Self {
            driver,
            app,
            bridge: Bridge::new(),
            endpoint: config.endpoint,
            autojoin: config.room.filter(|room| !room.trim().is_empty()),
        }
    }

    /// Run the main event loop.
    ///
    /// This is the core orchestration loop that:
    /// 1. Joins the configured room, if any
    /// 2. Polls for input events from the driver
    /// 3. Drains socket events buffered by the driver
    /// 4. Processes actions and events between App and Bridge
    ///
    /// # Errors
    ///
    /// Returns an error if input polling or rendering fails. Socket and file
    /// failures are reported in the UI instead.
    pub async fn run(mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        let mut should_quit = false;
        if let Some(room) = self.autojoin.take() {
            let actions = self.app.join(room);
            should_quit = self.process_actions(actions).await?;
        }

        while !should_quit {
            should_quit = self.process_cycle().await?;
        }

        self.driver.stop();
        Ok(())
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        let actions = self.driver.poll_event(&mut self.app).await?;
        if !actions.is_empty() && self.process_actions(actions).await? {
            return Ok(true);
        }

        while self.driver.is_connected()
            && let Some(event) = self.driver.recv_event().await
        {
            let events = self.bridge.handle_transport_event(event);
            if self.process_bridge_events(events).await? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit.
    async fn process_actions(&mut self, initial_actions: Vec<AppAction>) -> Result<bool, D::Error> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.driver.render(&self.app)?,
                    AppAction::Quit => return Ok(true),

                    // Session operations go through the bridge
                    AppAction::Connect { .. } | AppAction::Send(_) => {
                        let events = self.bridge.process_app_action(action);
                        for event in events {
                            pending_actions.extend(self.app.handle(event));
                        }
                        pending_actions.extend(self.flush_transport().await?);
                    },

                    AppAction::SendFiles { paths } => {
                        pending_actions.extend(self.send_files(paths).await?);
                    },

                    AppAction::SaveDownload { path, bytes } => {
                        let result = self.driver.write_file(&path, &bytes).await;
                        let event = match result {
                            Ok(()) => {
                                tracing::info!(path = %path.display(), bytes = bytes.len(), "download saved");
                                AppEvent::Saved { path }
                            },
                            Err(e) => AppEvent::Error {
                                message: format!("could not save {}: {e}", path.display()),
                            },
                        };
                        pending_actions.extend(self.app.handle(event));
                    },
                }
            }
        }
        Ok(false)
    }

    /// Process events from Bridge back to App.
    async fn process_bridge_events(&mut self, events: Vec<AppEvent>) -> Result<bool, D::Error> {
        for event in events {
            let actions = self.app.handle(event);
            if self.process_actions(actions).await? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Read, encode, and send each file before starting the next.
    ///
    /// The password is read after encoding, so a change made while a file
    /// is being read applies to that file.
    async fn send_files(&mut self, paths: Vec<PathBuf>) -> Result<Vec<AppAction>, D::Error> {
        let mut actions = Vec::new();

        for path in paths {
            let result = self.driver.read_file(&path).await;
            let bytes = match result {
                Ok(bytes) => bytes,
                Err(e) => {
                    let message = format!("could not read {}: {e}", path.display());
                    actions.extend(self.app.handle(AppEvent::Error { message }));
                    continue;
                },
            };

            let name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
            let content_b64 = codec::encode(&bytes);
            tracing::info!(%name, bytes = bytes.len(), "sending file");

            let outbound = Outbound::SendFile { name, content_b64, password: self.app.password().to_owned() };
            for event in self.bridge.process_app_action(AppAction::Send(outbound)) {
                actions.extend(self.app.handle(event));
            }
            actions.extend(self.flush_transport().await?);
        }

        Ok(actions)
    }

    /// Execute pending socket operations.
    ///
    /// Connect and send failures are fed back to the session as a close, so
    /// the UI shows the session offline instead of the runtime stopping.
    async fn flush_transport(&mut self) -> Result<Vec<AppAction>, D::Error> {
        let mut actions = Vec::new();

        loop {
            let commands = self.bridge.take_outgoing();
            if commands.is_empty() {
                return Ok(actions);
            }

            for command in commands {
                let events = match command {
                    TransportCommand::Open => {
                        let result = self.driver.connect(&self.endpoint).await;
                        match result {
                            Ok(()) => self.bridge.handle_transport_opened(),
                            Err(e) => {
                                tracing::warn!(endpoint = %self.endpoint, error = %e, "connect failed");
                                self.transport_failed(e.to_string())
                            },
                        }
                    },
                    TransportCommand::Close => {
                        self.driver.disconnect();
                        vec![]
                    },
                    TransportCommand::Send(text) => {
                        let result = self.driver.send_text(text).await;
                        match result {
                            Ok(()) => vec![],
                            Err(e) => {
                                tracing::warn!(error = %e, "send failed");
                                self.driver.disconnect();
                                self.transport_failed(e.to_string())
                            },
                        }
                    },
                };

                for event in events {
                    actions.extend(self.app.handle(event));
                }
            }
        }
    }

    fn transport_failed(&mut self, reason: String) -> Vec<AppEvent> {
        self.bridge.handle_transport_event(TransportEvent::Closed { reason: Some(reason) })
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the App
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
