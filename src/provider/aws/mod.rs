//! # AWS Providers
//!
//! AWS provider modules for the store contract.
//!
//! - `secrets_manager`: AWS Secrets Manager for opaque key material

pub mod secrets_manager;

// Re-export for convenience
pub use secrets_manager::SecretsManagerStore;
