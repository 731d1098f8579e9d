// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Typed console server configuration document.
//!
//! Every leaf is a string that reads as empty when the key is absent or `null`, and
//! every section is optional, so any structurally valid document decodes. Empty leaves
//! and absent sections are omitted when encoding.

use crate::errors::UnknownBrand;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Root of the console server configuration (`console-config.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleConfig {
    /// Document API version, `console.openshift.io/v1`
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub api_version: String,

    /// Document kind, `ConsoleConfig`
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub kind: String,

    /// OAuth client settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,

    /// Public addresses of the console and the API server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_info: Option<ClusterInfo>,

    /// Branding and documentation links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization: Option<Customization>,

    /// External service integrations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub providers: Option<Providers>,

    /// Listener and serving certificate settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_info: Option<ServingInfo>,

    /// Session cookie settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

impl ConsoleConfig {
    /// `clusterInfo.consoleBaseAddress`, empty when unset.
    #[must_use]
    pub fn console_base_address(&self) -> &str {
        self.cluster_info
            .as_ref()
            .map_or("", |info| info.console_base_address.as_str())
    }
}

/// OAuth client settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auth {
    /// OAuth client the console authenticates as
    #[serde(
        default,
        rename = "clientID",
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub client_id: String,

    /// Path of the mounted OAuth client secret
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub client_secret_file: String,

    /// Where to send the browser after logout
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub logout_redirect: String,
}

/// Public addresses of the console and the API server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterInfo {
    /// Public URL of the console itself
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub console_base_address: String,

    /// Public URL of the API server
    #[serde(
        default,
        rename = "masterPublicURL",
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub master_public_url: String,
}

/// Branding and documentation links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customization {
    /// Product brand, e.g. `okd` or `ocp`
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub branding: String,

    /// Base URL for documentation links
    #[serde(
        default,
        rename = "documentationBaseURL",
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub documentation_base_url: String,
}

/// External service integrations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Providers {
    /// statuspage.io page shown in the console
    #[serde(
        default,
        rename = "statuspageID",
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub status_page_id: String,
}

/// Listener and serving certificate settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServingInfo {
    /// Listen address, e.g. `https://[::]:8443`
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub bind_address: String,

    /// Serving certificate path
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub cert_file: String,

    /// Serving key path
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub key_file: String,
}

/// Session cookie settings, carried through without interpretation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    /// Raw session settings keyed by name
    pub entries: BTreeMap<String, serde_yaml::Value>,
}

/// Product brand rendered by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    Okd,
    OpenShift,
    Ocp,
    Online,
    Dedicated,
    Azure,
    Rosa,
}

impl Brand {
    /// The value written to `customization.branding`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Okd => "okd",
            Self::OpenShift => "openshift",
            Self::Ocp => "ocp",
            Self::Online => "online",
            Self::Dedicated => "dedicated",
            Self::Azure => "azure",
            Self::Rosa => "ROSA",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Brand {
    type Err = UnknownBrand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "okd" => Ok(Self::Okd),
            "openshift" => Ok(Self::OpenShift),
            "ocp" => Ok(Self::Ocp),
            "online" => Ok(Self::Online),
            "dedicated" => Ok(Self::Dedicated),
            "azure" => Ok(Self::Azure),
            "ROSA" => Ok(Self::Rosa),
            other => Err(UnknownBrand(other.to_string())),
        }
    }
}
