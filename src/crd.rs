// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Typed views of the OpenShift resources the console operator reads.
//!
//! These resources are owned by the OpenShift API, not by this operator; only the
//! fields the operator's decisions depend on are modelled. Unknown fields are ignored
//! on deserialization, so the views stay valid as the upstream schemas grow.
//!
//! # Resource Types
//!
//! - [`Console`] - `operator.openshift.io/v1` operator configuration, declares the management state
//! - [`Infrastructure`] - `config.openshift.io/v1`, reports the control plane topology
//! - [`ClusterVersion`] - `config.openshift.io/v1`, reports the enabled cluster capabilities
//!
//! All three are cluster-scoped singletons: `Console` and `Infrastructure` are named
//! `cluster`, `ClusterVersion` is named `version`.
//!
//! # Example
//!
//! ```rust
//! use console_operator::crd::{Console, ConsoleSpec};
//!
//! let console = Console::new("cluster", ConsoleSpec {
//!     management_state: "Managed".to_string(),
//!     ..Default::default()
//! });
//! assert_eq!(console.spec.management_state, "Managed");
//! ```

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Console operator configuration.
///
/// `managementState` is kept as the raw string the API server returned so that a
/// value this operator does not know is still observable and can be rejected
/// explicitly instead of failing deserialization of the whole object.
#[derive(CustomResource, Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[kube(
    group = "operator.openshift.io",
    version = "v1",
    kind = "Console",
    plural = "consoles",
    doc = "Console operator configuration"
)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleSpec {
    /// Whether and how the operator manages the console: `Managed`, `Unmanaged` or `Removed`
    #[serde(default)]
    pub management_state: String,

    /// Console branding and documentation overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization: Option<ConsoleCustomization>,

    /// Operator log verbosity (`Normal`, `Debug`, `Trace`, `TraceAll`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Branding overrides declared on the [`Console`] operator configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleCustomization {
    /// Brand to render, e.g. `okd` or `ocp`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Base URL of the product documentation linked from the console
    #[serde(
        default,
        rename = "documentationBaseURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub documentation_base_url: Option<String>,
}

/// Cluster infrastructure configuration.
#[derive(CustomResource, Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[kube(
    group = "config.openshift.io",
    version = "v1",
    kind = "Infrastructure",
    plural = "infrastructures",
    status = "InfrastructureStatus",
    doc = "Cluster infrastructure configuration"
)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureSpec {
    /// Name of the cloud provider configuration `ConfigMap`, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_config: Option<CloudConfigReference>,
}

/// Reference to the cloud provider configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CloudConfigReference {
    /// `ConfigMap` name
    #[serde(default)]
    pub name: String,
    /// Key within the `ConfigMap`
    #[serde(default)]
    pub key: String,
}

/// Observed infrastructure state.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureStatus {
    /// Where the control plane runs: `HighlyAvailable`, `SingleReplica` or `External`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_plane_topology: Option<String>,

    /// Expected topology of infrastructure (non-control-plane) nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure_topology: Option<String>,

    /// URL of the API server as seen from outside the cluster
    #[serde(
        default,
        rename = "apiServerURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_server_url: Option<String>,
}

/// Cluster version configuration.
#[derive(CustomResource, Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[kube(
    group = "config.openshift.io",
    version = "v1",
    kind = "ClusterVersion",
    plural = "clusterversions",
    status = "ClusterVersionStatus",
    doc = "Cluster version configuration"
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterVersionSpec {
    /// Unique identifier of the cluster
    #[serde(default, rename = "clusterID")]
    pub cluster_id: String,
}

/// Observed cluster version state.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterVersionStatus {
    /// Capabilities known to and enabled on this cluster
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<ClusterVersionCapabilitiesStatus>,
}

/// Capability sets reported by the cluster version operator.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterVersionCapabilitiesStatus {
    /// Capabilities currently enabled, e.g. `Ingress`, `Console`, `openshift-samples`
    #[serde(default)]
    pub enabled_capabilities: Vec<String>,

    /// Every capability the running release knows about
    #[serde(default)]
    pub known_capabilities: Vec<String>,
}

#[cfg(test)]
#[path = "crd_tests.rs"]
mod crd_tests;
