//! Vim-style command keys for embedded rich-text editors.
//!
//! This crate intercepts key events and turns terse key sequences into
//! editing operations against an editor it reaches only through the
//! [`EditorDriver`] capability.
//!
//! # Features
//!
//! - **Modes**: Off, Command, Insert and Visual
//! - **Two-key commands**: `gg`, `yy`, `dd` and `:q`, disambiguated by a
//!   500 ms prefix timer with single-key fallbacks
//! - **Keystroke driver**: every operation rendered as synthetic keystrokes
//!   with platform-appropriate modifiers
//! - **Session runner**: one task ordering keys, toggles and timer expiries
//!
//! # Example
//!
//! ```
//! use vimrly_core::{Dispatch, Dispatcher, Mode, NullDriver, SessionState};
//!
//! let mut state = SessionState::new();
//! let mut dispatcher = Dispatcher::new(NullDriver);
//! dispatcher.set_mode(&mut state, Mode::Command);
//!
//! // `g` waits for a second key, `gg` jumps to the document start
//! assert_eq!(dispatcher.dispatch("g", &mut state), Dispatch::Pending);
//! assert_eq!(dispatcher.dispatch("g", &mut state), Dispatch::Consumed);
//! assert_eq!(state.pending_command(), "");
//! ```

mod command;
pub mod config;
mod dispatcher;
mod driver;
mod error;
pub mod input;
pub mod key_handler;
pub mod keystroke;
pub mod message;
mod mode;
pub mod platform;
pub mod session;
mod state;
pub mod timer;

pub use command::EditorAction;
pub use config::Config;
pub use dispatcher::{Dispatch, Dispatcher};
pub use driver::{Direction, EditorDriver, NullDriver};
pub use error::{ConfigError, DriverError, DriverResult, ParseModeError, Result, VimrlyError};
pub use input::{key_symbol, FocusTarget, KeyInput};
pub use key_handler::KeyResult;
pub use keystroke::{EditorSurface, KeyStroke, KeystrokeDriver};
pub use message::HostMessage;
pub use mode::Mode;
pub use platform::{Platform, PlatformSetting};
pub use session::{HostEvent, SessionHandle, SessionRunner};
pub use state::{IntoText, SessionState};
pub use timer::{ArmedPrefix, PrefixTimer, DEFAULT_PREFIX_TIMEOUT};

// Keystroke vocabulary for hosts implementing `EditorSurface`.
pub use crossterm::event::{KeyCode, KeyModifiers};
