// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Assembly of a console server configuration from explicit values.
//!
//! The builder is consumed by each setter, so a partially configured builder is never
//! shared between callers. Values not supplied stay empty; the serving, OAuth and
//! document-type fields always carry the console's fixed defaults.

use super::types::{
    Auth, Brand, ClusterInfo, ConsoleConfig, Customization, Providers, ServingInfo, Session,
};
use crate::constants::{
    CONSOLE_CONFIG_API_VERSION, CONSOLE_CONFIG_KIND, DEFAULT_BIND_ADDRESS,
    DEFAULT_OAUTH_CLIENT_ID, DEFAULT_OAUTH_CLIENT_SECRET_FILE, DEFAULT_SERVING_CERT_FILE,
    DEFAULT_SERVING_KEY_FILE,
};
use crate::errors::ConfigError;

/// Builds a [`ConsoleConfig`] for the console server.
///
/// # Example
///
/// ```rust
/// use console_operator::consoleserver::{Brand, ConsoleServerConfigBuilder};
///
/// let config = ConsoleServerConfigBuilder::new()
///     .host("https://console-openshift-console.apps.example.com")
///     .brand(Brand::Okd)
///     .config();
///
/// assert_eq!(
///     config.console_base_address(),
///     "https://console-openshift-console.apps.example.com"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleServerConfigBuilder {
    host: String,
    logout_redirect: String,
    brand: Option<Brand>,
    documentation_base_url: String,
    api_server_url: String,
    status_page_id: String,
}

impl ConsoleServerConfigBuilder {
    /// Start from an empty builder; fixed defaults are filled in by [`Self::config`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Public base address of the console (`clusterInfo.consoleBaseAddress`).
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Post-logout redirect (`auth.logoutRedirect`).
    #[must_use]
    pub fn logout_url(mut self, url: impl Into<String>) -> Self {
        self.logout_redirect = url.into();
        self
    }

    /// Product brand (`customization.branding`).
    #[must_use]
    pub fn brand(mut self, brand: Brand) -> Self {
        self.brand = Some(brand);
        self
    }

    /// Documentation base URL (`customization.documentationBaseURL`).
    #[must_use]
    pub fn doc_url(mut self, url: impl Into<String>) -> Self {
        self.documentation_base_url = url.into();
        self
    }

    /// Public API server URL (`clusterInfo.masterPublicURL`).
    #[must_use]
    pub fn api_server_url(mut self, url: impl Into<String>) -> Self {
        self.api_server_url = url.into();
        self
    }

    /// statuspage.io page ID (`providers.statuspageID`).
    #[must_use]
    pub fn status_page_id(mut self, id: impl Into<String>) -> Self {
        self.status_page_id = id.into();
        self
    }

    /// Assemble the configuration.
    #[must_use]
    pub fn config(&self) -> ConsoleConfig {
        ConsoleConfig {
            api_version: CONSOLE_CONFIG_API_VERSION.to_string(),
            kind: CONSOLE_CONFIG_KIND.to_string(),
            auth: Some(Auth {
                client_id: DEFAULT_OAUTH_CLIENT_ID.to_string(),
                client_secret_file: DEFAULT_OAUTH_CLIENT_SECRET_FILE.to_string(),
                logout_redirect: self.logout_redirect.clone(),
            }),
            cluster_info: Some(ClusterInfo {
                console_base_address: self.host.clone(),
                master_public_url: self.api_server_url.clone(),
            }),
            customization: Some(Customization {
                branding: self.brand.map(Brand::as_str).unwrap_or_default().to_string(),
                documentation_base_url: self.documentation_base_url.clone(),
            }),
            providers: Some(Providers {
                status_page_id: self.status_page_id.clone(),
            }),
            serving_info: Some(ServingInfo {
                bind_address: DEFAULT_BIND_ADDRESS.to_string(),
                cert_file: DEFAULT_SERVING_CERT_FILE.to_string(),
                key_file: DEFAULT_SERVING_KEY_FILE.to_string(),
            }),
            session: Some(Session::default()),
        }
    }

    /// Assemble the configuration and encode it as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Encode`] if serialization fails.
    pub fn config_yaml(&self) -> Result<String, ConfigError> {
        self.config().to_yaml()
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod builder_tests;
