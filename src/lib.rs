// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

#![allow(unexpected_cfgs)]

//! # Console Operator - decision core of the OpenShift web console operator
//!
//! This library holds the pure decision logic the console operator's controllers
//! consult on every reconcile cycle. It performs no cluster writes of its own; all
//! reads go through locally mirrored state (reflector stores).
//!
//! ## Overview
//!
//! - Event filters that decide which watch notifications reach a controller
//! - Dispatch on the operator's declared management state
//! - The topology gate for externally hosted control planes without ingress
//! - The console server configuration document (`console-config.yaml`)
//! - Resolution of the console's public base address
//!
//! ## Modules
//!
//! - [`filters`] - Name and label event filters over watch payloads
//! - [`management_state`] - `Managed` / `Unmanaged` / `Removed` dispatch
//! - [`topology`] - Control plane topology and capability gate
//! - [`consoleserver`] - Console server config document codec and builder
//! - [`base_address`] - Console base address resolution
//! - [`crd`] - Typed views of the OpenShift resources the operator reads
//! - [`context`] - Shared context and reflector stores for the controller
//! - [`reconcilers`] - The console reconcile loop
//!
//! ## Example
//!
//! ```rust
//! use console_operator::filters::include_by_name;
//! use console_operator::topology::{is_external_control_plane_without_ingress, TopologyMode};
//! use k8s_openapi::api::core::v1::ConfigMap;
//! use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
//!
//! let cm = ConfigMap {
//!     metadata: ObjectMeta {
//!         name: Some("console-config".to_string()),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! assert!(include_by_name(["console-config"]).admits(&cm));
//!
//! assert!(is_external_control_plane_without_ingress(
//!     &TopologyMode::External,
//!     &["Console"],
//! ));
//! ```

pub mod base_address;
pub mod constants;
pub mod consoleserver;
pub mod context;
pub mod crd;
pub mod errors;
pub mod filters;
pub mod labels;
pub mod management_state;
pub mod reconcilers;
pub mod status_reasons;
pub mod topology;
