// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the console operator.
//!
//! Constants are organized by category: the OpenShift API coordinates the operator reads,
//! the well-known location of the console server configuration, and the default values
//! written into a freshly built console server configuration.

// ============================================================================
// API Constants
// ============================================================================

/// API group of the operator configuration resources (`Console`)
pub const OPERATOR_API_GROUP: &str = "operator.openshift.io";

/// API group of the cluster-wide configuration resources (`Infrastructure`, `ClusterVersion`)
pub const CONFIG_API_GROUP: &str = "config.openshift.io";

/// API version shared by the OpenShift operator and config groups
pub const OPENSHIFT_API_VERSION: &str = "v1";

/// Kind name for the console operator configuration resource
pub const KIND_CONSOLE: &str = "Console";

/// Kind name for the cluster infrastructure resource
pub const KIND_INFRASTRUCTURE: &str = "Infrastructure";

/// Kind name for the cluster version resource
pub const KIND_CLUSTER_VERSION: &str = "ClusterVersion";

/// Name of the cluster-scoped `Console` and `Infrastructure` singletons
pub const CLUSTER_SINGLETON_NAME: &str = "cluster";

/// Name of the cluster-scoped `ClusterVersion` singleton
pub const CLUSTER_VERSION_NAME: &str = "version";

// ============================================================================
// Console Namespaces and Resources
// ============================================================================

/// Namespace the console server and its configuration live in
pub const OPENSHIFT_CONSOLE_NAMESPACE: &str = "openshift-console";

/// Name of the `ConfigMap` holding the console server configuration
pub const OPENSHIFT_CONSOLE_CONFIG_MAP_NAME: &str = "console-config";

/// Key inside the console `ConfigMap` whose value is the full console server YAML
pub const CONSOLE_CONFIG_YAML_KEY: &str = "console-config.yaml";

// ============================================================================
// Cluster Topology and Capabilities
// ============================================================================

/// Control plane topology value for clusters whose control plane runs outside the cluster
pub const TOPOLOGY_EXTERNAL: &str = "External";

/// Control plane topology value for a highly available in-cluster control plane
pub const TOPOLOGY_HIGHLY_AVAILABLE: &str = "HighlyAvailable";

/// Control plane topology value for a single-replica in-cluster control plane
pub const TOPOLOGY_SINGLE_REPLICA: &str = "SingleReplica";

/// Cluster capability name for the managed ingress component
pub const CAPABILITY_INGRESS: &str = "Ingress";

// ============================================================================
// Console Server Configuration Defaults
// ============================================================================

/// `apiVersion` of the console server configuration document
pub const CONSOLE_CONFIG_API_VERSION: &str = "console.openshift.io/v1";

/// `kind` of the console server configuration document
pub const CONSOLE_CONFIG_KIND: &str = "ConsoleConfig";

/// OAuth client ID the console authenticates as
pub const DEFAULT_OAUTH_CLIENT_ID: &str = "console";

/// Path of the mounted OAuth client secret inside the console pod
pub const DEFAULT_OAUTH_CLIENT_SECRET_FILE: &str = "/var/oauth-config/clientSecret";

/// Address and port the console server binds to
pub const DEFAULT_BIND_ADDRESS: &str = "https://[::]:8443";

/// Path of the mounted serving certificate inside the console pod
pub const DEFAULT_SERVING_CERT_FILE: &str = "/var/serving-cert/tls.crt";

/// Path of the mounted serving key inside the console pod
pub const DEFAULT_SERVING_KEY_FILE: &str = "/var/serving-cert/tls.key";

// ============================================================================
// Controller Timing Constants
// ============================================================================

/// Requeue interval after a successful reconcile (5 minutes)
pub const DEFAULT_REQUEUE_SECS: u64 = 300;

/// Requeue interval after a retryable failure such as a missing `ConfigMap` (15 seconds)
pub const RETRYABLE_ERROR_REQUEUE_SECS: u64 = 15;

/// Requeue interval after a non-retryable failure; waits for a spec change (10 minutes)
pub const PERMANENT_ERROR_REQUEUE_SECS: u64 = 600;
