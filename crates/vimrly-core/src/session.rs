//! Session runner.
//!
//! One task owns the [`SessionState`] and the [`Dispatcher`] and handles key
//! events, external mode toggles and prefix expiries strictly in order. The
//! prefix expiry is just another branch of the loop, so it can never
//! interleave with a key.

use tokio::sync::{mpsc, watch};
use tokio::time::{sleep_until, Instant};

use crate::config::Config;
use crate::dispatcher::{Dispatch, Dispatcher};
use crate::driver::EditorDriver;
use crate::error::{Result, VimrlyError};
use crate::input::KeyInput;
use crate::message::HostMessage;
use crate::{Mode, SessionState};

/// Capacity of the host event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// An event delivered to the session by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A key press.
    Key(KeyInput),
    /// Interceptor switched on (command mode) or off.
    Toggle { enabled: bool },
    /// Explicit mode change.
    SetMode(Mode),
    /// Raw JSON from the settings panel.
    Message(String),
}

/// Sending side of a session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<HostEvent>,
}

impl SessionHandle {
    pub async fn send(&self, event: HostEvent) -> Result<()> {
        self.tx
            .send(event)
            .await
            .map_err(|_| VimrlyError::SessionClosed)
    }

    pub async fn key(&self, input: impl Into<KeyInput>) -> Result<()> {
        self.send(HostEvent::Key(input.into())).await
    }

    pub async fn toggle(&self, enabled: bool) -> Result<()> {
        self.send(HostEvent::Toggle { enabled }).await
    }

    pub async fn set_mode(&self, mode: Mode) -> Result<()> {
        self.send(HostEvent::SetMode(mode)).await
    }

    pub async fn message(&self, json: impl Into<String>) -> Result<()> {
        self.send(HostEvent::Message(json.into())).await
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Owns a session and drives it from host events.
pub struct SessionRunner<D> {
    state: SessionState,
    dispatcher: Dispatcher<D>,
    events: mpsc::Receiver<HostEvent>,
}

impl<D: EditorDriver> SessionRunner<D> {
    pub fn new(dispatcher: Dispatcher<D>, state: SessionState) -> (Self, SessionHandle) {
        let (tx, events) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let runner = Self {
            state,
            dispatcher,
            events,
        };
        (runner, SessionHandle { tx })
    }

    /// Build a session from config, starting in the configured mode.
    pub fn from_config(driver: D, config: &Config) -> (Self, SessionHandle) {
        let mut state = SessionState::new();
        if config.start_mode != Mode::Off {
            state.set_mode(config.start_mode);
        }
        Self::new(Dispatcher::from_config(driver, config), state)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn dispatcher(&self) -> &Dispatcher<D> {
        &self.dispatcher
    }

    /// Subscribe to mode changes.
    pub fn subscribe(&self) -> watch::Receiver<Mode> {
        self.state.subscribe()
    }

    /// Handle one event synchronously. Returns the key disposition for key
    /// events.
    pub fn handle_event(&mut self, event: HostEvent) -> Option<Dispatch> {
        Self::apply(&mut self.dispatcher, &mut self.state, event)
    }

    /// Run until every [`SessionHandle`] is dropped.
    ///
    /// A prefix still armed when the channel closes is allowed to expire
    /// before the session is returned.
    pub async fn run(mut self) -> (SessionState, Dispatcher<D>) {
        tracing::debug!(mode = %self.state.mode(), "Session started");
        loop {
            let armed = self
                .dispatcher
                .armed_prefix()
                .map(|a| (a.generation, a.deadline));
            let deadline = armed.map(|(_, d)| d).unwrap_or_else(Instant::now);

            // An expiry that is due is ordered ahead of any queued event.
            tokio::select! {
                biased;
                _ = sleep_until(deadline), if armed.is_some() => {
                    if let Some((generation, _)) = armed {
                        self.dispatcher.expire_prefix(generation, &mut self.state);
                    }
                }
                event = self.events.recv() => match event {
                    Some(event) => {
                        Self::apply(&mut self.dispatcher, &mut self.state, event);
                    }
                    None => break,
                },
            }
        }

        if let Some((generation, deadline)) = self
            .dispatcher
            .armed_prefix()
            .map(|a| (a.generation, a.deadline))
        {
            sleep_until(deadline).await;
            self.dispatcher.expire_prefix(generation, &mut self.state);
        }
        tracing::debug!("Session closed");
        (self.state, self.dispatcher)
    }

    fn apply(
        dispatcher: &mut Dispatcher<D>,
        state: &mut SessionState,
        event: HostEvent,
    ) -> Option<Dispatch> {
        match event {
            HostEvent::Key(input) => Some(dispatcher.dispatch_input(&input, state)),
            HostEvent::Toggle { enabled } => {
                let mode = if enabled { Mode::Command } else { Mode::Off };
                dispatcher.set_mode(state, mode);
                None
            }
            HostEvent::SetMode(mode) => {
                dispatcher.set_mode(state, mode);
                None
            }
            HostEvent::Message(json) => {
                match HostMessage::parse(&json) {
                    Ok(message) => {
                        if let Some(mode) = message.requested_mode() {
                            dispatcher.set_mode(state, mode);
                        }
                    }
                    Err(e) => tracing::warn!("Ignoring host message: {}", e),
                }
                None
            }
        }
    }
}
