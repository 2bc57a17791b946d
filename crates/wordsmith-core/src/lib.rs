//! # wordsmith-core - Core Domain Types
//!
//! Foundation crate for Wordsmith. Provides the backend wire records, the
//! frontend display records, the mappers between them, settings validation,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Settings`] - Provider and output settings owned by the backend
//! - [`ActionItem`], [`ActionGroup`] - Text operations and their groups
//! - [`LanguageItem`] - Language option
//! - [`ActionRequest`] - Payload for running an action
//! - [`SelectItem`], [`KeyValuePair`] - Display records for choice controls and header rows
//!
//! ### Mappers (`mappers`)
//! - [`record_to_pairs()`], [`pairs_to_record()`] - Header map <-> editable rows
//! - [`string_to_select_item()`] - Identity select item
//!
//! ### Validation (`validation`)
//! - [`validate_base_url()`] - Base URL rules for the settings form
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum, backend failures carry an [`ErrorKind`]
//! - [`ErrorReport`] - Cloneable, display-ready error snapshot
//! - [`Result`], [`ResultExt`]
//!
//! ## Prelude
//!
//! ```rust
//! use wordsmith_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod mappers;
pub mod types;
pub mod validation;

/// Prelude for common imports used throughout all Wordsmith crates
pub mod prelude {
    pub use super::error::{Error, ErrorKind, ErrorReport, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, ErrorKind, ErrorReport, Result, ResultExt};
pub use mappers::{
    action_to_select_item, fresh_id, language_to_select_item, pairs_to_record, record_to_pairs,
    string_to_select_item, strings_to_select_items,
};
pub use types::{
    ActionGroup, ActionItem, ActionRequest, CurrentProvider, KeyValuePair, LanguageItem,
    SelectItem, Settings, DEFAULT_TEMPERATURE, MAX_TEMPERATURE, MIN_TEMPERATURE,
};
pub use validation::{validate_base_url, BaseUrlError};
