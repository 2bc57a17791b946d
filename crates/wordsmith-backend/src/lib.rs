//! # wordsmith-backend - Backend RPC Contract
//!
//! Describes the operations Wordsmith consumes from its backend service and
//! the failures the IPC bridge can report. The bridge itself lives in the
//! host application; this crate only fixes the contract.
//!
//! Depends on [`wordsmith_core`] for the wire records.
//!
//! ## Public API
//!
//! - [`Backend`] / [`LocalBackend`] - The RPC surface (settings, provider
//!   checks, action lists, action processing, clipboard, log sink)
//! - [`RpcError`] - Transport failure, classified into an
//!   [`wordsmith_core::ErrorKind`] via [`RpcError::kind`]
//! - [`Operation`] - Operation names and fixed failure messages
//! - [`LogSeverity`] - Levels accepted by the backend log sink
//!
//! Enable the `test-helpers` feature for `test_utils::FakeBackend`.

pub mod rpc;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use rpc::{Backend, LocalBackend, LogSeverity, Operation, RpcError, RpcResult};
