//! # Store Contract
//!
//! The vendor-neutral key-value contract a secrets vault adapter
//! implements. The key-management service holds stores as
//! `Arc<dyn SecretStore>` and never sees vendor types; vendor failures
//! arrive normalized as [`StoreError`] values.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Health snapshot returned by [`SecretStore::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreState {
    /// Round-trip latency of the reachability probe.
    pub latency: Duration,
}

/// One window of a prefix listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
    /// Matching entry names, sorted lexicographically.
    pub names: Vec<String>,
    /// First matching name not included in this page; `None` when the
    /// listing is exhausted. Feed it back as `continue_at` to resume.
    pub continue_at: Option<String>,
}

/// Uniform contract over a secrets vault.
///
/// One handle is shared by all callers; every method takes `&self` and is
/// safe to invoke concurrently. Deadlines are the caller's business:
/// dropping a returned future (for example under `tokio::time::timeout`)
/// aborts the underlying network call.
#[allow(
    clippy::missing_errors_doc,
    reason = "Error documentation is provided in doc comments"
)]
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Probe the vault endpoint and measure round-trip latency.
    ///
    /// Fails with [`StoreError::Unreachable`] when the endpoint cannot be
    /// contacted at all.
    async fn status(&self) -> Result<StoreState, StoreError>;

    /// Store `value` under `name` only if no entry with that name exists.
    ///
    /// Fails with [`StoreError::AlreadyExists`] on a name collision and
    /// never overwrites.
    async fn create(&self, name: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Alias for [`SecretStore::create`]: `set` never overwrites either.
    async fn set(&self, name: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Retrieve the opaque value stored under `name`.
    ///
    /// Fails with [`StoreError::NotFound`] when absent and
    /// [`StoreError::AccessDenied`] when the vault cannot decrypt the
    /// entry.
    async fn get(&self, name: &str) -> Result<Vec<u8>, StoreError>;

    /// Remove the entry unconditionally, bypassing any vendor recovery
    /// window.
    ///
    /// Fails with [`StoreError::NotFound`] when absent, including on
    /// repeated deletes.
    async fn delete(&self, name: &str) -> Result<(), StoreError>;

    /// List entry names starting with `prefix`, resuming at `continue_at`
    /// when given, returning at most `limit` names (all of them when
    /// `limit` is `None`).
    ///
    /// Vendor pagination is exhausted internally; the page cursor is the
    /// first matching name not yet returned.
    async fn list(
        &self,
        prefix: &str,
        continue_at: Option<&str>,
        limit: Option<usize>,
    ) -> Result<ListPage, StoreError>;

    /// Release held resources. Safe to call any number of times.
    async fn close(&self) -> Result<(), StoreError>;
}
