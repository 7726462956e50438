//! # Store Error Taxonomy
//!
//! Normalized error categories shared by every store operation. Provider
//! modules translate vendor failures into these; anything without a known
//! mapping surfaces as [`StoreError::Unknown`] with the operation, entry
//! name, and underlying cause attached.

use thiserror::Error;

/// Boxed cause attached to wrapped store failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by secret store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An entry with the same name already exists (create/set).
    #[error("entry already exists")]
    AlreadyExists,

    /// No entry with the given name exists (get/delete).
    #[error("entry not found")]
    NotFound,

    /// The vault refused to decrypt or authorize access to the entry.
    #[error("cannot access '{name}': {source}")]
    AccessDenied {
        /// Name of the entry that could not be accessed.
        name: String,
        /// Vendor failure that triggered the refusal.
        source: BoxError,
    },

    /// The endpoint could not be contacted at all (DNS failure, connection
    /// refused, TLS failure). Produced by the reachability probe only.
    #[error("store is unreachable: {source}")]
    Unreachable {
        /// Transport failure reported by the probe.
        source: BoxError,
    },

    /// The operation ran out of time inside the vendor client or the probe.
    /// Reported as-is, never folded into [`StoreError::Unknown`].
    #[error("operation timed out: {source}")]
    Timeout {
        /// Timeout reported by the transport layer.
        source: BoxError,
    },

    /// Any other vendor failure, wrapped with the operation and entry name
    /// so diagnostics keep their context.
    #[error("failed to {op} '{name}': {source}")]
    Unknown {
        /// Operation that failed ("create", "read", "delete", "list").
        op: &'static str,
        /// Entry name (or listing prefix) the operation was given.
        name: String,
        /// Unclassified vendor failure.
        source: BoxError,
    },
}

impl StoreError {
    /// Wrap an unclassified failure with its operation and entry name.
    pub(crate) fn unknown(op: &'static str, name: &str, source: impl Into<BoxError>) -> Self {
        Self::Unknown {
            op,
            name: name.to_string(),
            source: source.into(),
        }
    }
}
