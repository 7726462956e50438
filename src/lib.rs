//! # Secret Keystore Library
//!
//! Secret-store adapter that persists key-management key material in AWS
//! Secrets Manager. It exposes a uniform key-value contract
//! ([`SecretStore`]) and internally maps each operation onto vendor API
//! calls, normalizing vendor errors into the small shared taxonomy
//! ([`StoreError`]) the key-management service consumes.
//!
//! Entries never overwrite: `create` (and its alias `set`) fail with
//! `AlreadyExists` on a name collision, and `delete` removes entries
//! without a recovery window. Listing exhausts vendor pagination
//! internally and exposes a cursor over the sorted, prefix-filtered name
//! set instead.
//!
//! ```no_run
//! use secret_keystore::{SecretStore, SecretsManagerStore, StoreConfig, StoreError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), StoreError> {
//!     let config = StoreConfig {
//!         addr: None,
//!         region: "us-east-1".to_string(),
//!         kms_key_id: None,
//!         login: None,
//!     };
//!
//!     let store = SecretsManagerStore::connect(config).await?;
//!     store.create("db-key-1", b"secret-v1").await?;
//!     let value = store.get("db-key-1").await?;
//!     assert_eq!(value, b"secret-v1");
//!     store.close().await
//! }
//! ```

pub mod config;
pub mod error;
mod listing;
pub mod provider;
pub mod store;

// Re-export the contract surface for convenience
pub use config::{Credentials, StoreConfig};
pub use error::{BoxError, StoreError};
pub use provider::aws::SecretsManagerStore;
pub use store::{ListPage, SecretStore, StoreState};
