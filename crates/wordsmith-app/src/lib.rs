//! wordsmith-app - Application state and orchestration for Wordsmith
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the backend adapter, the settings and session slices, the
//! `update` reducer, background task execution, the [`Engine`] store, local
//! preferences and the view models the UI renders.

pub mod actions;
pub mod adapter;
pub mod config;
pub mod engine;
pub mod handler;
pub mod message;
pub mod state;
pub mod view;

// Re-export primary types
pub use adapter::BackendAdapter;
pub use config::Preferences;
pub use engine::{Engine, EngineEvent, ScopeId, TaskHandle, TaskId};
pub use handler::{update, Task, UpdateAction, UpdateResult};
pub use message::{ActionLists, Cancelled, InitialData, Message};
pub use state::{AppState, CheckStatus, ConnectionCheck, SessionState, SettingsState};
pub use view::{MainViewModel, RootView, SettingsViewModel};
