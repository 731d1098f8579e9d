// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Dispatch on the operator's declared management state.
//!
//! The `Console` operator configuration declares whether the operator should manage
//! the console (`Managed`), leave it alone (`Unmanaged`) or tear it down (`Removed`).
//! Each reconcile cycle reads that declaration once and runs exactly one of the three
//! branches of a [`ManagementStateHandler`].
//!
//! # Example
//!
//! ```rust,no_run
//! use console_operator::management_state::{handle_management_state, ManagementStateHandler};
//! use console_operator::crd::{Console, ConsoleSpec};
//! use tokio_util::sync::CancellationToken;
//!
//! struct Noop;
//!
//! #[async_trait::async_trait]
//! impl ManagementStateHandler for Noop {
//!     async fn handle_managed(&self, _cancel: &CancellationToken) -> anyhow::Result<()> {
//!         Ok(())
//!     }
//!     async fn handle_unmanaged(&self, _cancel: &CancellationToken) -> anyhow::Result<()> {
//!         Ok(())
//!     }
//!     async fn handle_removed(&self, _cancel: &CancellationToken) -> anyhow::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> anyhow::Result<()> {
//! let console = Console::new("cluster", ConsoleSpec {
//!     management_state: "Managed".to_string(),
//!     ..Default::default()
//! });
//! handle_management_state(&CancellationToken::new(), &Noop, &console).await?;
//! # Ok(())
//! # }
//! ```

use crate::constants::CLUSTER_SINGLETON_NAME;
use crate::crd::Console;
use crate::errors::ManagementStateError;
use anyhow::{Context as _, Result};
use kube::runtime::reflector::{ObjectRef, Store};
use std::fmt;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Declared management state of the console.
///
/// Values other than the three known ones are kept verbatim in
/// [`ManagementState::Unknown`] so the dispatcher can reject them by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ManagementState {
    Managed,
    Unmanaged,
    Removed,
    Unknown(String),
}

impl ManagementState {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Managed => "Managed",
            Self::Unmanaged => "Unmanaged",
            Self::Removed => "Removed",
            Self::Unknown(value) => value,
        }
    }
}

impl From<&str> for ManagementState {
    fn from(value: &str) -> Self {
        match value {
            "Managed" => Self::Managed,
            "Unmanaged" => Self::Unmanaged,
            "Removed" => Self::Removed,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for ManagementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three branches of a reconcile cycle, one per known management state.
///
/// Handlers receive the cycle's cancellation token and should stop early once it
/// is cancelled. Their results are returned to the caller unmodified.
#[async_trait::async_trait]
pub trait ManagementStateHandler: Send + Sync {
    /// The operator owns the console and drives it to the desired state.
    async fn handle_managed(&self, cancel: &CancellationToken) -> Result<()>;

    /// The operator must not touch the console.
    async fn handle_unmanaged(&self, cancel: &CancellationToken) -> Result<()>;

    /// The console should be removed from the cluster.
    async fn handle_removed(&self, cancel: &CancellationToken) -> Result<()>;
}

/// Source of the declared management state.
pub trait ManagementStateSource {
    /// Read the current declaration.
    ///
    /// # Errors
    ///
    /// Returns [`ManagementStateError::OperatorConfigUnavailable`] when the operator
    /// configuration cannot be read.
    fn management_state(&self) -> Result<ManagementState, ManagementStateError>;
}

impl ManagementStateSource for Console {
    fn management_state(&self) -> Result<ManagementState, ManagementStateError> {
        Ok(ManagementState::from(self.spec.management_state.as_str()))
    }
}

/// Reads the `cluster` singleton from a reflector store.
impl ManagementStateSource for Store<Console> {
    fn management_state(&self) -> Result<ManagementState, ManagementStateError> {
        let console = self
            .get(&ObjectRef::new(CLUSTER_SINGLETON_NAME))
            .ok_or_else(|| ManagementStateError::OperatorConfigUnavailable {
                name: CLUSTER_SINGLETON_NAME.to_string(),
                reason: "not present in the local cache".to_string(),
            })?;
        console.management_state()
    }
}

/// Run the handler branch matching the declared management state.
///
/// # Errors
///
/// - The source's read error, with context `failed to retrieve operator config`; no
///   handler runs in that case
/// - [`ManagementStateError::UnknownState`] for any undeclared value
/// - Whatever the selected handler returns
pub async fn handle_management_state<H, S>(
    cancel: &CancellationToken,
    handler: &H,
    source: &S,
) -> Result<()>
where
    H: ManagementStateHandler + ?Sized,
    S: ManagementStateSource + ?Sized,
{
    let state = source
        .management_state()
        .context("failed to retrieve operator config")?;

    debug!(management_state = %state, "Dispatching on console management state");

    match state {
        ManagementState::Managed => handler.handle_managed(cancel).await,
        ManagementState::Unmanaged => handler.handle_unmanaged(cancel).await,
        ManagementState::Removed => handler.handle_removed(cancel).await,
        ManagementState::Unknown(value) => Err(ManagementStateError::UnknownState(value).into()),
    }
}

#[cfg(test)]
#[path = "management_state_tests.rs"]
mod management_state_tests;
