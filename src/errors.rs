// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for the console operator core.
//!
//! This module provides specialized error types for:
//! - Lookups against the locally mirrored cluster state (reflector stores)
//! - Decoding and encoding the console server configuration document
//! - Resolving the console base address
//! - Dispatching on the operator's declared management state
//! - Identifying watch payloads in event filters
//!
//! Each type exposes `is_retryable()` so the controller's error policy can choose a
//! requeue interval, and `reason()` returning a constant from
//! [`crate::status_reasons`] for status conditions.

use crate::status_reasons::{
    REASON_CONSOLE_CONFIG_NOT_FOUND, REASON_INVALID_CONSOLE_BASE_ADDRESS,
    REASON_INVALID_CONSOLE_CONFIG, REASON_MISSING_CONSOLE_CONFIG_DATA,
    REASON_OPERATOR_CONFIG_UNAVAILABLE, REASON_RECONCILE_CANCELLED,
    REASON_UNKNOWN_MANAGEMENT_STATE,
};
use thiserror::Error;

/// Errors returned by a read-only lookup against locally mirrored cluster state.
///
/// Transient: the store is eventually consistent and the object may simply not have
/// been observed yet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No object with the given coordinates exists in the store
    #[error("configmap {namespace}/{name} not found")]
    NotFound {
        /// Namespace that was searched
        namespace: String,
        /// Name of the missing object
        name: String,
    },
}

impl LookupError {
    /// Lookup failures always resolve themselves once the store catches up.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        true
    }

    /// Status condition reason for this error.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        REASON_CONSOLE_CONFIG_NOT_FOUND
    }
}

/// Errors from the console server configuration codec.
///
/// These are syntax errors: the same input always fails the same way, so they are
/// never retryable.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document is not well-formed YAML or a node has the wrong shape
    #[error("failed to decode console config: {0}")]
    Decode(#[source] serde_yaml::Error),

    /// The typed configuration could not be rendered as YAML
    #[error("failed to encode console config: {0}")]
    Encode(#[source] serde_yaml::Error),
}

impl ConfigError {
    /// Codec errors are deterministic and never retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Status condition reason for this error.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        REASON_INVALID_CONSOLE_CONFIG
    }
}

/// Errors that can occur while resolving the console base address.
///
/// Each resolution step has its own variant so callers can tell a console
/// `ConfigMap` that has not been written yet apart from one that is broken.
#[derive(Error, Debug)]
pub enum BaseAddressError {
    /// The resolution was cancelled before it started
    #[error("console base address resolution cancelled")]
    Cancelled,

    /// The console `ConfigMap` could not be fetched from the lookup
    #[error("failed to get console configmap: {0}")]
    Lookup(#[from] LookupError),

    /// The `ConfigMap` exists but the configuration entry is absent or empty
    #[error("failed to find console config data: configmap {namespace}/{name} has no {key} entry")]
    MissingConfigData {
        /// Namespace of the `ConfigMap`
        namespace: String,
        /// Name of the `ConfigMap`
        name: String,
        /// The data key that was expected
        key: String,
    },

    /// The configuration entry is not a valid console server configuration
    #[error("failed to parse console configuration: {0}")]
    Parse(#[source] ConfigError),

    /// `clusterInfo.consoleBaseAddress` is not an absolute URL
    #[error("failed to parse console base address {value:?}: {source}")]
    InvalidUrl {
        /// The offending address text
        value: String,
        /// The URL syntax error
        #[source]
        source: url::ParseError,
    },
}

impl BaseAddressError {
    /// Whether retrying later can succeed without anyone fixing the input.
    ///
    /// Missing objects and missing data are transient while the cluster converges;
    /// malformed documents and addresses are not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Cancelled | Self::Lookup(_) | Self::MissingConfigData { .. } => true,
            Self::Parse(_) | Self::InvalidUrl { .. } => false,
        }
    }

    /// Status condition reason for this error.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Cancelled => REASON_RECONCILE_CANCELLED,
            Self::Lookup(e) => e.reason(),
            Self::MissingConfigData { .. } => REASON_MISSING_CONSOLE_CONFIG_DATA,
            Self::Parse(e) => e.reason(),
            Self::InvalidUrl { .. } => REASON_INVALID_CONSOLE_BASE_ADDRESS,
        }
    }
}

/// Errors raised while reading or acting on the declared management state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManagementStateError {
    /// The operator configuration object could not be read
    #[error("operator config {name} is unavailable: {reason}")]
    OperatorConfigUnavailable {
        /// Name of the operator configuration object
        name: String,
        /// Why it could not be read
        reason: String,
    },

    /// The declared state is none of `Managed`, `Unmanaged`, `Removed`
    #[error("console is in an unknown state: {0}")]
    UnknownState(String),
}

impl ManagementStateError {
    /// An unreadable config may appear later; an unknown state needs a spec change.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::OperatorConfigUnavailable { .. })
    }

    /// Status condition reason for this error.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::OperatorConfigUnavailable { .. } => REASON_OPERATOR_CONFIG_UNAVAILABLE,
            Self::UnknownState(_) => REASON_UNKNOWN_MANAGEMENT_STATE,
        }
    }
}

/// A watch payload that carries no object metadata, so no name or labels can be read.
///
/// Event filters never propagate this; they log it and treat the event as a non-match.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unexpected type {type_name}: watch payload carries no object metadata")]
pub struct UnidentifiedPayload {
    /// Description of the payload that could not be identified
    pub type_name: String,
}

/// A brand name the console does not know.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown console brand {0:?}")]
pub struct UnknownBrand(pub String);

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
