// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Console reconciliation.
//!
//! Each cycle dispatches on the declared management state of the `cluster`
//! [`Console`]. The managed branch observes the console's externally visible state
//! (base address and whether the console route can be served at all) from the
//! reflector stores and logs it. Nothing is written back to the cluster.

use crate::base_address::{BaseAddressResolver, ConsoleBaseAddress};
use crate::constants::{PERMANENT_ERROR_REQUEUE_SECS, RETRYABLE_ERROR_REQUEUE_SECS};
use crate::context::{Context, Stores};
use crate::crd::Console;
use crate::errors::{BaseAddressError, ManagementStateError};
use crate::management_state::{handle_management_state, ManagementStateHandler};
use crate::topology::TopologyFact;
use anyhow::{Context as _, Result};
use kube::runtime::controller::Action;
use kube::ResourceExt;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Error type surfaced to the `kube::runtime` controller.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ReconcileError(#[from] anyhow::Error);

/// What one managed cycle saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleObservation {
    /// Public base address, empty until the console config is populated
    pub base_address: ConsoleBaseAddress,
    /// Topology snapshot, `None` until both singletons are cached
    pub topology: Option<TopologyFact>,
    /// False on an external control plane without the `Ingress` capability
    pub route_enabled: bool,
}

/// Read the console's externally visible state from the stores.
///
/// An unknown topology does not disable the route.
///
/// # Errors
///
/// Returns the [`BaseAddressError`] of the base address resolution.
pub fn observe_console(
    stores: &Stores,
    cancel: &CancellationToken,
) -> Result<ConsoleObservation, BaseAddressError> {
    let base_address = BaseAddressResolver::new(stores.config_maps.clone()).resolve(cancel)?;
    let topology = stores.topology();
    let route_enabled = !topology
        .as_ref()
        .is_some_and(TopologyFact::is_external_control_plane_without_ingress);

    Ok(ConsoleObservation {
        base_address,
        topology,
        route_enabled,
    })
}

/// Management state handler that observes and logs the console state.
#[derive(Clone)]
pub struct ConsoleHandler {
    stores: Stores,
}

impl ConsoleHandler {
    #[must_use]
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }
}

#[async_trait::async_trait]
impl ManagementStateHandler for ConsoleHandler {
    async fn handle_managed(&self, cancel: &CancellationToken) -> Result<()> {
        let observation = observe_console(&self.stores, cancel)
            .context("failed to observe console state")?;

        match &observation.topology {
            Some(fact) => debug!(
                topology = %fact.topology,
                capabilities = ?fact.enabled_capabilities,
                "Observed cluster topology"
            ),
            None => debug!("Cluster topology not cached yet"),
        }

        if !observation.route_enabled {
            info!("External control plane without Ingress capability, console route is not served");
        }

        if observation.base_address.is_empty() {
            info!("Console base address is not known yet");
        } else {
            info!(address = %observation.base_address, "Console base address");
        }

        Ok(())
    }

    async fn handle_unmanaged(&self, _cancel: &CancellationToken) -> Result<()> {
        debug!("Console is unmanaged, leaving it untouched");
        Ok(())
    }

    async fn handle_removed(&self, _cancel: &CancellationToken) -> Result<()> {
        info!("Console is marked as removed");
        Ok(())
    }
}

/// Reconcile the `Console` operator configuration.
///
/// # Errors
///
/// Returns a [`ReconcileError`] wrapping whatever the dispatch or the selected
/// handler failed with.
pub async fn reconcile_console(
    console: Arc<Console>,
    ctx: Arc<Context>,
) -> Result<Action, ReconcileError> {
    let name = console.name_any();
    debug!(name = %name, "Reconciling console");

    let cancel = ctx.shutdown.child_token();
    let handler = ConsoleHandler::new(ctx.stores.clone());

    match handle_management_state(&cancel, &handler, console.as_ref()).await {
        Ok(()) => {
            info!(name = %name, "Successfully reconciled console");
            Ok(Action::requeue(ctx.requeue_after))
        }
        Err(e) => {
            error!(name = %name, "Failed to reconcile console: {:#}", e);
            Err(e.into())
        }
    }
}

/// Error policy for the console controller.
pub fn error_policy(console: Arc<Console>, err: &ReconcileError, _ctx: Arc<Context>) -> Action {
    let interval = requeue_interval(&err.0);
    warn!(
        name = %console.name_any(),
        reason = error_reason(&err.0).unwrap_or("Unknown"),
        requeue_secs = interval.as_secs(),
        "Requeueing console after error"
    );
    Action::requeue(interval)
}

/// Requeue interval for a failed cycle.
///
/// Errors not raised by this crate (handler glue, API errors) count as retryable.
#[must_use]
pub fn requeue_interval(err: &anyhow::Error) -> Duration {
    let retryable = if let Some(e) = err.downcast_ref::<BaseAddressError>() {
        e.is_retryable()
    } else if let Some(e) = err.downcast_ref::<ManagementStateError>() {
        e.is_retryable()
    } else {
        true
    };

    if retryable {
        Duration::from_secs(RETRYABLE_ERROR_REQUEUE_SECS)
    } else {
        Duration::from_secs(PERMANENT_ERROR_REQUEUE_SECS)
    }
}

/// Status condition reason for a failed cycle, if this crate raised the error.
#[must_use]
pub fn error_reason(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(e) = err.downcast_ref::<BaseAddressError>() {
        Some(e.reason())
    } else {
        err.downcast_ref::<ManagementStateError>()
            .map(ManagementStateError::reason)
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod console_tests;
