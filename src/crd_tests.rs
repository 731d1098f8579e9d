// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `crd.rs`

use super::*;
use crate::constants::{
    CONFIG_API_GROUP, KIND_CLUSTER_VERSION, KIND_CONSOLE, KIND_INFRASTRUCTURE,
    OPENSHIFT_API_VERSION, OPERATOR_API_GROUP,
};
use kube::{CustomResourceExt, Resource, ResourceExt};
use serde_json::json;

#[test]
fn test_console_api_coordinates() {
    assert_eq!(Console::group(&()), OPERATOR_API_GROUP);
    assert_eq!(Console::version(&()), OPENSHIFT_API_VERSION);
    assert_eq!(Console::kind(&()), KIND_CONSOLE);
    assert_eq!(Console::plural(&()), "consoles");
    assert_eq!(Console::crd_name(), "consoles.operator.openshift.io");
}

#[test]
fn test_config_api_coordinates() {
    assert_eq!(Infrastructure::api_version(&()), "config.openshift.io/v1");
    assert_eq!(ClusterVersion::api_version(&()), "config.openshift.io/v1");
    assert_eq!(ClusterVersion::plural(&()), "clusterversions");
    assert_eq!(Infrastructure::group(&()), CONFIG_API_GROUP);
    assert_eq!(Infrastructure::kind(&()), KIND_INFRASTRUCTURE);
    assert_eq!(ClusterVersion::group(&()), CONFIG_API_GROUP);
    assert_eq!(ClusterVersion::kind(&()), KIND_CLUSTER_VERSION);
}

#[test]
fn test_console_deserializes_management_state() {
    let console: Console = serde_json::from_value(json!({
        "apiVersion": "operator.openshift.io/v1",
        "kind": "Console",
        "metadata": { "name": "cluster" },
        "spec": {
            "managementState": "Unmanaged",
            "customization": {
                "brand": "okd",
                "documentationBaseURL": "https://docs.okd.io/"
            },
            "route": { "hostname": "ignored.example.com" }
        }
    }))
    .unwrap();

    assert_eq!(console.name_any(), "cluster");
    assert_eq!(console.spec.management_state, "Unmanaged");
    let customization = console.spec.customization.unwrap();
    assert_eq!(customization.brand.as_deref(), Some("okd"));
    assert_eq!(
        customization.documentation_base_url.as_deref(),
        Some("https://docs.okd.io/")
    );
}

#[test]
fn test_console_without_management_state_reads_empty() {
    let console: Console = serde_json::from_value(json!({
        "apiVersion": "operator.openshift.io/v1",
        "kind": "Console",
        "metadata": { "name": "cluster" },
        "spec": {}
    }))
    .unwrap();
    assert_eq!(console.spec.management_state, "");
}

#[test]
fn test_infrastructure_status_topology() {
    let infra: Infrastructure = serde_json::from_value(json!({
        "apiVersion": "config.openshift.io/v1",
        "kind": "Infrastructure",
        "metadata": { "name": "cluster" },
        "spec": {},
        "status": {
            "controlPlaneTopology": "External",
            "infrastructureTopology": "HighlyAvailable",
            "apiServerURL": "https://api.example.com:6443",
            "platform": "AWS"
        }
    }))
    .unwrap();

    let status = infra.status.unwrap();
    assert_eq!(status.control_plane_topology.as_deref(), Some("External"));
    assert_eq!(
        status.api_server_url.as_deref(),
        Some("https://api.example.com:6443")
    );
}

#[test]
fn test_cluster_version_capabilities() {
    let cv: ClusterVersion = serde_json::from_value(json!({
        "apiVersion": "config.openshift.io/v1",
        "kind": "ClusterVersion",
        "metadata": { "name": "version" },
        "spec": { "clusterID": "0000-1111" },
        "status": {
            "capabilities": {
                "enabledCapabilities": ["Console", "Ingress"],
                "knownCapabilities": ["Console", "Ingress", "openshift-samples"]
            }
        }
    }))
    .unwrap();

    assert_eq!(cv.spec.cluster_id, "0000-1111");
    let caps = cv.status.unwrap().capabilities.unwrap();
    assert_eq!(caps.enabled_capabilities, vec!["Console", "Ingress"]);
    assert_eq!(caps.known_capabilities.len(), 3);
}
