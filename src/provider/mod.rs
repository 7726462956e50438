//! # Vault Providers
//!
//! Vendor-specific implementations of the store contract.

pub mod aws;
