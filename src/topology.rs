// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Cluster topology and capability gates.
//!
//! Some cluster shapes change what the console operator may rely on. On a cluster whose
//! control plane is hosted externally and whose ingress capability is disabled there is
//! no router to expose the console through, and reconcilers branch on that.

use crate::constants::{
    CAPABILITY_INGRESS, TOPOLOGY_EXTERNAL, TOPOLOGY_HIGHLY_AVAILABLE, TOPOLOGY_SINGLE_REPLICA,
};
use crate::crd::{ClusterVersion, Infrastructure};
use std::collections::BTreeSet;
use std::fmt;

/// Where the cluster's control plane runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TopologyMode {
    /// Multiple in-cluster control plane replicas
    HighlyAvailable,
    /// A single in-cluster control plane replica
    SingleReplica,
    /// The control plane is hosted outside the cluster
    External,
    /// Any other value, including an unset topology (empty string)
    Other(String),
}

impl TopologyMode {
    /// The API value of this topology mode.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::HighlyAvailable => TOPOLOGY_HIGHLY_AVAILABLE,
            Self::SingleReplica => TOPOLOGY_SINGLE_REPLICA,
            Self::External => TOPOLOGY_EXTERNAL,
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for TopologyMode {
    fn from(value: &str) -> Self {
        match value {
            TOPOLOGY_HIGHLY_AVAILABLE => Self::HighlyAvailable,
            TOPOLOGY_SINGLE_REPLICA => Self::SingleReplica,
            TOPOLOGY_EXTERNAL => Self::External,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TopologyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if the control plane is external and the ingress capability is disabled.
///
/// Total over its inputs: any topology other than [`TopologyMode::External`] yields
/// `false`, whatever the capabilities.
///
/// # Example
///
/// ```rust
/// use console_operator::topology::{is_external_control_plane_without_ingress, TopologyMode};
///
/// assert!(is_external_control_plane_without_ingress(
///     &TopologyMode::External,
///     &["openshift-samples"],
/// ));
/// assert!(!is_external_control_plane_without_ingress(
///     &TopologyMode::External,
///     &["openshift-samples", "Ingress"],
/// ));
/// ```
pub fn is_external_control_plane_without_ingress<S: AsRef<str>>(
    topology: &TopologyMode,
    enabled_capabilities: &[S],
) -> bool {
    let ingress_enabled = enabled_capabilities
        .iter()
        .any(|capability| capability.as_ref() == CAPABILITY_INGRESS);

    *topology == TopologyMode::External && !ingress_enabled
}

/// Snapshot of the control plane topology and enabled capabilities of a cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyFact {
    /// Control plane topology
    pub topology: TopologyMode,
    /// Enabled cluster capabilities
    pub enabled_capabilities: BTreeSet<String>,
}

impl TopologyFact {
    /// Create a snapshot from explicit values.
    pub fn new<I, S>(topology: TopologyMode, enabled_capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            topology,
            enabled_capabilities: enabled_capabilities.into_iter().map(Into::into).collect(),
        }
    }

    /// Read the snapshot from the `Infrastructure` and `ClusterVersion` singletons.
    ///
    /// A missing status reads as an unset topology and no enabled capabilities.
    #[must_use]
    pub fn from_cluster(infrastructure: &Infrastructure, cluster_version: &ClusterVersion) -> Self {
        let topology = infrastructure
            .status
            .as_ref()
            .and_then(|s| s.control_plane_topology.as_deref())
            .map_or_else(|| TopologyMode::Other(String::new()), TopologyMode::from);

        let enabled_capabilities = cluster_version
            .status
            .as_ref()
            .and_then(|s| s.capabilities.as_ref())
            .map(|c| c.enabled_capabilities.iter().cloned().collect())
            .unwrap_or_default();

        Self {
            topology,
            enabled_capabilities,
        }
    }

    /// Whether this cluster has an external control plane and no ingress capability.
    #[must_use]
    pub fn is_external_control_plane_without_ingress(&self) -> bool {
        self.topology == TopologyMode::External
            && !self.enabled_capabilities.contains(CAPABILITY_INGRESS)
    }
}

#[cfg(test)]
#[path = "topology_tests.rs"]
mod topology_tests;
