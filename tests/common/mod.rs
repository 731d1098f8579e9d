// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

// Common test utilities for integration tests

#![allow(dead_code)]

use k8s_openapi::api::core::v1::ConfigMap;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::client::Client;
use kube::runtime::reflector::{self, Store};
use kube::runtime::watcher::Event;
use std::collections::BTreeMap;

/// Get a Kubernetes client or skip the test if not in a cluster
pub async fn get_kube_client_or_skip() -> Option<Client> {
    match Client::try_default().await {
        Ok(client) => Some(client),
        Err(e) => {
            eprintln!("Skipping integration test: not running in Kubernetes cluster: {}", e);
            None
        }
    }
}

/// Build a `ConfigMap` with a single data entry
pub fn config_map(namespace: &str, name: &str, key: &str, value: &str) -> ConfigMap {
    ConfigMap {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        data: Some(BTreeMap::from([(key.to_string(), value.to_string())])),
        ..Default::default()
    }
}

/// Build a reflector store already holding the given `ConfigMap`s
pub fn config_map_store(config_maps: impl IntoIterator<Item = ConfigMap>) -> Store<ConfigMap> {
    let (reader, mut writer) = reflector::store::<ConfigMap>();
    for cm in config_maps {
        writer.apply_watcher_event(&Event::Apply(cm));
    }
    reader
}
