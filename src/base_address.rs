// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Resolution of the console's public base address.
//!
//! The address is not stored anywhere on its own: it lives in the
//! `clusterInfo.consoleBaseAddress` field of the console server configuration, which
//! the operator writes to `openshift-console/console-config`. Other controllers
//! (downloads, CLI links, health checks) resolve it from there.
//!
//! Resolution reads only locally mirrored state through a [`ConfigMapLookup`], so
//! the result may lag behind the cluster. An empty address is not an error; it means
//! the console configuration has not been populated yet.

use crate::constants::{
    CONSOLE_CONFIG_YAML_KEY, OPENSHIFT_CONSOLE_CONFIG_MAP_NAME, OPENSHIFT_CONSOLE_NAMESPACE,
};
use crate::consoleserver::ConsoleYamlParser;
use crate::errors::{BaseAddressError, LookupError};
use k8s_openapi::api::core::v1::ConfigMap;
use kube::runtime::reflector::{ObjectRef, Store};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

/// Read-only access to `ConfigMap`s by namespace and name.
pub trait ConfigMapLookup {
    /// Fetch one `ConfigMap`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] if no such object is known.
    fn config_map(&self, namespace: &str, name: &str) -> Result<Arc<ConfigMap>, LookupError>;
}

impl ConfigMapLookup for Store<ConfigMap> {
    fn config_map(&self, namespace: &str, name: &str) -> Result<Arc<ConfigMap>, LookupError> {
        self.get(&ObjectRef::new(name).within(namespace))
            .ok_or_else(|| LookupError::NotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
    }
}

/// Static lookup keyed by `(namespace, name)`.
impl ConfigMapLookup for BTreeMap<(String, String), ConfigMap> {
    fn config_map(&self, namespace: &str, name: &str) -> Result<Arc<ConfigMap>, LookupError> {
        self.get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .map(Arc::new)
            .ok_or_else(|| LookupError::NotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
    }
}

/// The console's public base address.
///
/// Either empty (not configured yet) or an absolute URL. The text is kept exactly as
/// configured, so `https://example.com` displays without a trailing slash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleBaseAddress {
    text: String,
    url: Option<Url>,
}

impl ConsoleBaseAddress {
    /// The unset address.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a configured address; the empty string yields [`ConsoleBaseAddress::empty`].
    ///
    /// # Errors
    ///
    /// Returns [`BaseAddressError::InvalidUrl`] if the text is not an absolute URL.
    pub fn parse(text: &str) -> Result<Self, BaseAddressError> {
        if text.is_empty() {
            return Ok(Self::empty());
        }
        let url = Url::parse(text).map_err(|source| BaseAddressError::InvalidUrl {
            value: text.to_string(),
            source,
        })?;
        Ok(Self {
            text: text.to_string(),
            url: Some(url),
        })
    }

    /// Whether no address is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.url.is_none()
    }

    /// Parsed URL, `None` when empty.
    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// The address exactly as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Host part of the address, if any.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.url.as_ref().and_then(Url::host_str)
    }
}

impl fmt::Display for ConsoleBaseAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Resolves the console base address from the console `ConfigMap`.
#[derive(Debug, Clone)]
pub struct BaseAddressResolver<L> {
    lookup: L,
}

impl<L: ConfigMapLookup> BaseAddressResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Resolve the address currently recorded in `openshift-console/console-config`.
    ///
    /// # Errors
    ///
    /// - [`BaseAddressError::Cancelled`] if `cancel` is already cancelled
    /// - [`BaseAddressError::Lookup`] if the `ConfigMap` is not known
    /// - [`BaseAddressError::MissingConfigData`] if `console-config.yaml` is absent or empty
    /// - [`BaseAddressError::Parse`] if the entry is not a console configuration
    /// - [`BaseAddressError::InvalidUrl`] if the address is not an absolute URL
    pub fn resolve(
        &self,
        cancel: &CancellationToken,
    ) -> Result<ConsoleBaseAddress, BaseAddressError> {
        if cancel.is_cancelled() {
            return Err(BaseAddressError::Cancelled);
        }

        let cm = self
            .lookup
            .config_map(OPENSHIFT_CONSOLE_NAMESPACE, OPENSHIFT_CONSOLE_CONFIG_MAP_NAME)?;

        let yaml = cm
            .data
            .as_ref()
            .and_then(|data| data.get(CONSOLE_CONFIG_YAML_KEY))
            .filter(|yaml| !yaml.is_empty())
            .ok_or_else(|| BaseAddressError::MissingConfigData {
                namespace: OPENSHIFT_CONSOLE_NAMESPACE.to_string(),
                name: OPENSHIFT_CONSOLE_CONFIG_MAP_NAME.to_string(),
                key: CONSOLE_CONFIG_YAML_KEY.to_string(),
            })?;

        let config = ConsoleYamlParser
            .parse(yaml.as_bytes())
            .map_err(BaseAddressError::Parse)?;

        let address = ConsoleBaseAddress::parse(config.console_base_address())?;
        debug!(
            namespace = %OPENSHIFT_CONSOLE_NAMESPACE,
            name = %OPENSHIFT_CONSOLE_CONFIG_MAP_NAME,
            address = %address,
            "Resolved console base address"
        );
        Ok(address)
    }
}

#[cfg(test)]
#[path = "base_address_tests.rs"]
mod base_address_tests;
