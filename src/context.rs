// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Shared context for the console controller with reflector stores.
//!
//! The controller receives an `Arc<Context>` that contains:
//! - Reflector stores for every resource the reconcile reads
//! - The shutdown token that parents each reconcile's cancellation token
//!
//! All reads during a reconcile go through the stores, so a cycle never issues an
//! API request of its own.

use crate::constants::{CLUSTER_SINGLETON_NAME, CLUSTER_VERSION_NAME};
use crate::crd::{ClusterVersion, Console, Infrastructure};
use crate::topology::TopologyFact;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::runtime::reflector::{ObjectRef, Store};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Shared context passed to the console controller.
#[derive(Clone)]
pub struct Context {
    /// Reflector stores for cluster state
    pub stores: Stores,

    /// Cancelled once when the process shuts down
    pub shutdown: CancellationToken,

    /// Requeue interval after a successful reconcile
    pub requeue_after: Duration,
}

/// Collection of the reflector stores the console reconcile reads.
///
/// Each store is populated by a dedicated reflector task and provides
/// in-memory access to resources without API calls.
#[derive(Clone)]
pub struct Stores {
    // Cluster-scoped singletons
    pub consoles: Store<Console>,
    pub infrastructures: Store<Infrastructure>,
    pub cluster_versions: Store<ClusterVersion>,

    // openshift-console namespace only
    pub config_maps: Store<ConfigMap>,
}

impl Stores {
    /// Get the `cluster` `Infrastructure` singleton.
    #[must_use]
    pub fn infrastructure(&self) -> Option<Arc<Infrastructure>> {
        self.infrastructures
            .get(&ObjectRef::new(CLUSTER_SINGLETON_NAME))
    }

    /// Get the `version` `ClusterVersion` singleton.
    #[must_use]
    pub fn cluster_version(&self) -> Option<Arc<ClusterVersion>> {
        self.cluster_versions
            .get(&ObjectRef::new(CLUSTER_VERSION_NAME))
    }

    /// Current topology snapshot.
    ///
    /// # Returns
    /// `None` until both singletons have been observed
    #[must_use]
    pub fn topology(&self) -> Option<TopologyFact> {
        let infrastructure = self.infrastructure()?;
        let cluster_version = self.cluster_version()?;
        Some(TopologyFact::from_cluster(&infrastructure, &cluster_version))
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod context_tests;
