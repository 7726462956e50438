//! # AWS Secrets Manager Store
//!
//! Store implementation backed by AWS Secrets Manager.
//!
//! This module provides functionality to:
//! - Create, retrieve and force-delete secrets
//! - List secret names with prefix filtering and cursor resumption
//! - Probe endpoint reachability and measure round-trip latency

mod auth;
mod error;

use std::time::Instant;

use async_trait::async_trait;
use aws_sdk_secretsmanager::primitives::Blob;
use aws_sdk_secretsmanager::Client as SecretsManagerClient;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::listing;
use crate::store::{ListPage, SecretStore, StoreState};

use self::error::translate;

/// Store handle bound to one Secrets Manager endpoint.
///
/// Cheap to share: the SDK client is internally reference-counted and
/// every operation takes `&self`.
pub struct SecretsManagerStore {
    client: SecretsManagerClient,
    http: reqwest::Client,
    endpoint: String,
    kms_key_id: Option<String>,
}

impl std::fmt::Debug for SecretsManagerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretsManagerStore")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for SecretsManagerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AWS Secrets Manager: {}", self.endpoint)
    }
}

/// Resolve the service endpoint for a config.
///
/// A custom address with an explicit scheme is used verbatim, which is
/// what lets tests and local stacks run over plain HTTP; a bare address
/// gets "https://" prepended. Without a custom address the regional
/// endpoint is derived.
fn endpoint_url(config: &StoreConfig) -> String {
    match config.addr.as_deref().map(|addr| addr.trim_end_matches('/')) {
        Some(addr) if addr.contains("://") => addr.to_string(),
        Some(addr) => format!("https://{addr}"),
        None => format!("https://secretsmanager.{}.amazonaws.com", config.region),
    }
}

impl SecretsManagerStore {
    /// Connect to AWS Secrets Manager with the given configuration.
    ///
    /// Static credentials in `config.login` take priority; without them
    /// the SDK's ambient chain (environment variables, shared credential
    /// files, instance role metadata) is consulted, so role-based
    /// deployments work unmodified. The endpoint is probed once before
    /// the handle is returned, so a bad address or region fails here
    /// rather than on first use.
    #[allow(
        clippy::missing_errors_doc,
        reason = "Error documentation is provided in doc comments"
    )]
    pub async fn connect(config: StoreConfig) -> Result<Self, StoreError> {
        let endpoint = endpoint_url(&config);
        let sdk_config = auth::load_sdk_config(&config, &endpoint).await;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| StoreError::unknown("connect", &endpoint, err))?;

        let store = Self {
            client: SecretsManagerClient::new(&sdk_config),
            http,
            endpoint,
            kms_key_id: config.kms_key_id,
        };

        store.status().await?;
        info!(endpoint = %store.endpoint, "connected to AWS Secrets Manager");
        Ok(store)
    }
}

#[async_trait]
impl SecretStore for SecretsManagerStore {
    async fn status(&self) -> Result<StoreState, StoreError> {
        let start = Instant::now();
        let response = self.http.get(self.endpoint.as_str()).send().await.map_err(|err| {
            if err.is_timeout() {
                StoreError::Timeout { source: err.into() }
            } else {
                StoreError::Unreachable { source: err.into() }
            }
        })?;

        // Reachability is the whole test; any HTTP status counts.
        drop(response);
        Ok(StoreState {
            latency: start.elapsed(),
        })
    }

    async fn create(&self, name: &str, value: &[u8]) -> Result<(), StoreError> {
        debug!(name, "creating secret");
        let mut request = self.client.create_secret().name(name);

        // The vault stores exactly one payload representation; values that
        // are not valid UTF-8 go through the binary field.
        request = match std::str::from_utf8(value) {
            Ok(text) => request.secret_string(text),
            Err(_) => request.secret_binary(Blob::new(value)),
        };
        if let Some(kms_key_id) = &self.kms_key_id {
            request = request.kms_key_id(kms_key_id);
        }

        request
            .send()
            .await
            .map_err(|err| translate("create", name, err))?;
        Ok(())
    }

    /// `set` never overwrites: the vault contract has no upsert, so this
    /// fails with `AlreadyExists` exactly like `create`.
    async fn set(&self, name: &str, value: &[u8]) -> Result<(), StoreError> {
        self.create(name, value).await
    }

    async fn get(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        debug!(name, "reading secret");
        let response = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|err| translate("read", name, err))?;

        // The service populates exactly one of the two payload fields.
        if let Some(text) = response.secret_string() {
            return Ok(text.as_bytes().to_vec());
        }
        if let Some(blob) = response.secret_binary() {
            return Ok(blob.as_ref().to_vec());
        }
        Err(StoreError::unknown(
            "read",
            name,
            "response carries neither a string nor a binary payload",
        ))
    }

    async fn delete(&self, name: &str) -> Result<(), StoreError> {
        debug!(name, "deleting secret");
        self.client
            .delete_secret()
            .secret_id(name)
            .force_delete_without_recovery(true)
            .send()
            .await
            .map_err(|err| translate("delete", name, err))?;
        Ok(())
    }

    async fn list(
        &self,
        prefix: &str,
        continue_at: Option<&str>,
        limit: Option<usize>,
    ) -> Result<ListPage, StoreError> {
        debug!(prefix, "listing secrets");
        let mut names = Vec::new();
        let mut pages = self.client.list_secrets().into_paginator().send();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|err| translate("list", prefix, err))?;
            for secret in page.secret_list() {
                if let Some(name) = secret.name() {
                    names.push(name.to_string());
                }
            }
        }

        Ok(listing::select_page(names, prefix, continue_at, limit))
    }

    /// The SDK client needs no explicit teardown; dropping the handle
    /// releases its resources. Kept so the service can close stores
    /// uniformly, any number of times.
    async fn close(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::endpoint_url;
    use crate::config::StoreConfig;

    fn config_with_addr(addr: Option<&str>) -> StoreConfig {
        StoreConfig {
            addr: addr.map(ToString::to_string),
            region: "eu-west-1".to_string(),
            kms_key_id: None,
            login: None,
        }
    }

    #[test]
    fn test_endpoint_url_with_scheme_used_verbatim() {
        let config = config_with_addr(Some("http://127.0.0.1:4566"));
        assert_eq!(endpoint_url(&config), "http://127.0.0.1:4566");
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let config = config_with_addr(Some("https://vault.internal:4443/"));
        assert_eq!(endpoint_url(&config), "https://vault.internal:4443");
    }

    #[test]
    fn test_endpoint_url_without_scheme_defaults_to_https() {
        let config = config_with_addr(Some("vault.internal:4443"));
        assert_eq!(endpoint_url(&config), "https://vault.internal:4443");
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash_on_bare_host() {
        let config = config_with_addr(Some("vault.internal:4443/"));
        assert_eq!(endpoint_url(&config), "https://vault.internal:4443");
    }

    #[test]
    fn test_endpoint_url_derived_from_region() {
        let config = config_with_addr(None);
        assert_eq!(
            endpoint_url(&config),
            "https://secretsmanager.eu-west-1.amazonaws.com"
        );
    }
}
