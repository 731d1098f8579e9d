// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Console server configuration document.
//!
//! The console server reads its whole configuration from one YAML document that the
//! operator stores under `console-config.yaml` in the `openshift-console/console-config`
//! `ConfigMap`. The operator recomputes the whole document on every reconcile and never
//! edits it in place.
//!
//! ## Module Structure
//!
//! - [`types`] - The typed document ([`ConsoleConfig`]) and [`Brand`]
//! - [`parser`] - YAML decoding ([`ConsoleYamlParser`]) and encoding
//! - [`builder`] - Assembly from explicit values ([`ConsoleServerConfigBuilder`])
//!
//! Neither direction validates field contents; a base address that is not a URL is
//! only rejected by [`crate::base_address`].

pub mod builder;
pub mod parser;
pub mod types;

pub use builder::ConsoleServerConfigBuilder;
pub use parser::ConsoleYamlParser;
pub use types::{
    Auth, Brand, ClusterInfo, ConsoleConfig, Customization, Providers, ServingInfo, Session,
};

use crate::constants::{
    CONSOLE_CONFIG_YAML_KEY, OPENSHIFT_CONSOLE_CONFIG_MAP_NAME, OPENSHIFT_CONSOLE_NAMESPACE,
};
use crate::errors::ConfigError;
use crate::labels::{APP_CONSOLE, LABEL_APP};
use k8s_openapi::api::core::v1::ConfigMap;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;
use tracing::debug;

/// Render a configuration as the data of the console `ConfigMap`.
///
/// The result holds exactly one entry, keyed `console-config.yaml`.
///
/// # Errors
///
/// Returns [`ConfigError::Encode`] if serialization fails.
pub fn config_map_data(config: &ConsoleConfig) -> Result<BTreeMap<String, String>, ConfigError> {
    Ok(BTreeMap::from([(
        CONSOLE_CONFIG_YAML_KEY.to_string(),
        config.to_yaml()?,
    )]))
}

/// Build the console `ConfigMap` holding a configuration.
///
/// Only builds the object; creating or updating it in the cluster is up to the caller.
///
/// # Errors
///
/// Returns [`ConfigError::Encode`] if serialization fails.
pub fn console_config_map(config: &ConsoleConfig) -> Result<ConfigMap, ConfigError> {
    debug!(
        namespace = %OPENSHIFT_CONSOLE_NAMESPACE,
        name = %OPENSHIFT_CONSOLE_CONFIG_MAP_NAME,
        "Building console ConfigMap"
    );

    Ok(ConfigMap {
        metadata: ObjectMeta {
            name: Some(OPENSHIFT_CONSOLE_CONFIG_MAP_NAME.to_string()),
            namespace: Some(OPENSHIFT_CONSOLE_NAMESPACE.to_string()),
            labels: Some(BTreeMap::from([(
                LABEL_APP.to_string(),
                APP_CONSOLE.to_string(),
            )])),
            ..Default::default()
        },
        data: Some(config_map_data(config)?),
        ..Default::default()
    })
}
