//! Tracing/logging setup for processes embedding the inventory store.
//!
//! Library crates only emit events; binaries call [`init`] once at startup.
//! Nothing inside this workspace depends on this crate: it is for downstream
//! binaries that embed the store.

/// Initialize process-wide tracing/logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, UnknownLogFormat};
