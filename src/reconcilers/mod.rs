// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Kubernetes reconciliation controllers for the console.
//!
//! # Reconciliation Architecture
//!
//! The console operator follows the standard Kubernetes controller pattern:
//!
//! 1. **Watch** - Monitor the `Console` operator config and the console `ConfigMap`
//! 2. **Dispatch** - Run the branch matching the declared management state
//! 3. **Observe** - Resolve the console base address and topology from reflector stores
//!
//! # Available Reconcilers
//!
//! - [`reconcile_console`] - Dispatches on the `cluster` console's management state
//! - [`error_policy`] - Picks the requeue interval from the error's retryability
//!
//! # Example: Using a Reconciler
//!
//! ```rust,no_run
//! use console_operator::reconcilers::reconcile_console;
//! use console_operator::crd::Console;
//! use console_operator::context::Context;
//! use std::sync::Arc;
//!
//! async fn reconcile(ctx: Arc<Context>, console: Arc<Console>) -> anyhow::Result<()> {
//!     reconcile_console(console, ctx).await?;
//!     Ok(())
//! }
//! ```

pub mod console;

pub use console::{
    error_policy, observe_console, reconcile_console, ConsoleHandler, ConsoleObservation,
    ReconcileError,
};
