//! Wordsmith Library
//!
//! Presentation state for a desktop text-processing application: the user
//! enters text, picks an action (proofread, format, translate, summarize,
//! transform), the action runs on a backend language-model service and the
//! result is shown.
//!
//! This crate re-exports the workspace crates:
//! - [`core`] - Domain types, mappers, validation, errors, logging
//! - [`backend`] - The backend RPC contract
//! - [`app`] - State, reducer, engine and view models
//!
//! ```no_run
//! # async fn demo<B: wordsmith::backend::Backend + Send + Sync + 'static>(backend: B) {
//! use wordsmith::app::{Engine, Message, Preferences};
//!
//! let preferences = Preferences::default();
//! wordsmith::init_logging(&preferences).ok();
//! let mut engine = Engine::new(backend, preferences);
//! engine.start();
//! engine.settle().await;
//! engine.dispatch(Message::ProcessAction { action_id: "proofread".into() });
//! engine.settle().await;
//! # }
//! ```

pub use wordsmith_app as app;
pub use wordsmith_backend as backend;
pub use wordsmith_core as core;

use std::path::PathBuf;

pub use wordsmith_app::{Engine, Message, Preferences, RootView};
pub use wordsmith_backend::Backend;
pub use wordsmith_core::{Error, ErrorKind, Result};

/// Install the file logger with the filter from `preferences`.
///
/// Call once per process, before the first engine is created. Returns the
/// log directory.
pub fn init_logging(preferences: &Preferences) -> Result<PathBuf> {
    wordsmith_core::logging::init(&preferences.logging.filter)
}
