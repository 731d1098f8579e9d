// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Standard Kubernetes status condition reasons for the console operator.
//!
//! Reasons are programmatic identifiers in CamelCase that explain why a condition has
//! a particular status. Every error type in [`crate::errors`] maps onto one of these
//! through its `reason()` method, so a caller can surface a failure in a condition
//! without matching on the error itself.
//!
//! # Example Status
//!
//! ```yaml
//! status:
//!   conditions:
//!     - type: ConsoleConfigDegraded
//!       status: "True"
//!       reason: MissingConsoleConfigData
//!       message: "ConfigMap openshift-console/console-config has no console-config.yaml entry"
//! ```

// ============================================================================
// Console Configuration Reasons
// ============================================================================

/// The console `ConfigMap` does not exist (yet) in the local cache.
///
/// Retryable: the `ConfigMap` is written by another controller and appears as the
/// cluster converges.
pub const REASON_CONSOLE_CONFIG_NOT_FOUND: &str = "ConsoleConfigNotFound";

/// The console `ConfigMap` exists but has no (or an empty) `console-config.yaml` entry.
pub const REASON_MISSING_CONSOLE_CONFIG_DATA: &str = "MissingConsoleConfigData";

/// The `console-config.yaml` entry is not a valid console server configuration document.
pub const REASON_INVALID_CONSOLE_CONFIG: &str = "InvalidConsoleConfig";

/// The `clusterInfo.consoleBaseAddress` field is not an absolute URL.
pub const REASON_INVALID_CONSOLE_BASE_ADDRESS: &str = "InvalidConsoleBaseAddress";

// ============================================================================
// Management State Reasons
// ============================================================================

/// The operator configuration declares a management state other than
/// `Managed`, `Unmanaged` or `Removed`.
pub const REASON_UNKNOWN_MANAGEMENT_STATE: &str = "UnknownManagementState";

/// The operator configuration could not be read.
pub const REASON_OPERATOR_CONFIG_UNAVAILABLE: &str = "OperatorConfigUnavailable";

// ============================================================================
// Generic Reasons
// ============================================================================

/// The reconciliation was cancelled before it could complete.
pub const REASON_RECONCILE_CANCELLED: &str = "ReconcileCancelled";
