// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `base_address.rs`

use super::*;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

fn create_console_config_map(key: &str, yaml: &str) -> ConfigMap {
    ConfigMap {
        metadata: ObjectMeta {
            name: Some("console-config".to_string()),
            namespace: Some("openshift-console".to_string()),
            ..Default::default()
        },
        data: Some(BTreeMap::from([(key.to_string(), yaml.to_string())])),
        ..Default::default()
    }
}

fn resolver_for(cm: ConfigMap) -> BaseAddressResolver<Store<ConfigMap>> {
    let (reader, mut writer) = kube::runtime::reflector::store::<ConfigMap>();
    writer.apply_watcher_event(&kube::runtime::watcher::Event::Apply(cm));
    BaseAddressResolver::new(reader)
}

fn resolve_yaml(yaml: &str) -> Result<ConsoleBaseAddress, BaseAddressError> {
    resolver_for(create_console_config_map("console-config.yaml", yaml))
        .resolve(&CancellationToken::new())
}

#[test]
fn test_resolve_nominal() {
    let address = resolve_yaml(
        r"apiVersion: console.openshift.io/v1
kind: ConsoleConfig
clusterInfo:
  consoleBaseAddress: https://example.com
",
    )
    .unwrap();

    assert_eq!(address.to_string(), "https://example.com");
    assert_eq!(address.as_str(), "https://example.com");
    assert!(!address.is_empty());
    assert_eq!(address.host(), Some("example.com"));
    assert_eq!(address.url().map(Url::scheme), Some("https"));
}

#[test]
fn test_resolve_empty_address() {
    let address = resolve_yaml(
        r#"apiVersion: console.openshift.io/v1
kind: ConsoleConfig
clusterInfo:
  consoleBaseAddress: ""
"#,
    )
    .unwrap();

    assert!(address.is_empty());
    assert_eq!(address.to_string(), "");
    assert_eq!(address, ConsoleBaseAddress::empty());
}

#[test]
fn test_resolve_missing_address() {
    let address = resolve_yaml(
        r"apiVersion: console.openshift.io/v1
kind: ConsoleConfig
clusterInfo:
",
    )
    .unwrap();
    assert!(address.is_empty());
    assert_eq!(address.url(), None);
}

#[test]
fn test_resolve_wrong_data_key() {
    let resolver = resolver_for(create_console_config_map(
        "console-config",
        "clusterInfo:\n  consoleBaseAddress: https://example.com\n",
    ));

    let err = resolver.resolve(&CancellationToken::new()).unwrap_err();
    assert!(matches!(
        err,
        BaseAddressError::MissingConfigData { ref key, .. } if key == "console-config.yaml"
    ));
    assert!(err.is_retryable());
    assert!(err.to_string().starts_with("failed to find console config data"));
}

#[test]
fn test_resolve_empty_data_entry() {
    let err = resolve_yaml("").unwrap_err();
    assert!(matches!(err, BaseAddressError::MissingConfigData { .. }));
}

#[test]
fn test_resolve_config_map_without_data() {
    let mut cm = create_console_config_map("console-config.yaml", "");
    cm.data = None;

    let err = resolver_for(cm)
        .resolve(&CancellationToken::new())
        .unwrap_err();
    assert!(matches!(err, BaseAddressError::MissingConfigData { .. }));
}

#[test]
fn test_resolve_invalid_config() {
    let err = resolve_yaml(
        r"apiVersion: console.openshift.io/v1
kind: ConsoleConfig
clusterInfo
",
    )
    .unwrap_err();

    assert!(matches!(err, BaseAddressError::Parse(_)));
    assert!(!err.is_retryable());
    assert!(err
        .to_string()
        .starts_with("failed to parse console configuration"));
}

#[test]
fn test_resolve_invalid_url() {
    let err = resolve_yaml(
        r#"apiVersion: console.openshift.io/v1
kind: ConsoleConfig
clusterInfo:
  consoleBaseAddress: ":::invalid-url:::"
"#,
    )
    .unwrap_err();

    match &err {
        BaseAddressError::InvalidUrl { value, .. } => assert_eq!(value, ":::invalid-url:::"),
        other => panic!("expected InvalidUrl, got {other:?}"),
    }
    assert!(!err.is_retryable());
}

#[test]
fn test_resolve_rejects_relative_reference() {
    let err = resolve_yaml("clusterInfo:\n  consoleBaseAddress: console.example.com\n")
        .unwrap_err();
    assert!(matches!(
        err,
        BaseAddressError::InvalidUrl {
            source: url::ParseError::RelativeUrlWithoutBase,
            ..
        }
    ));
}

#[test]
fn test_resolve_missing_config_map() {
    let (reader, _writer) = kube::runtime::reflector::store::<ConfigMap>();
    let err = BaseAddressResolver::new(reader)
        .resolve(&CancellationToken::new())
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "failed to get console configmap: configmap openshift-console/console-config not found"
    );
    assert!(err.is_retryable());
}

#[test]
fn test_resolve_ignores_config_map_in_other_namespace() {
    let mut cm = create_console_config_map(
        "console-config.yaml",
        "clusterInfo:\n  consoleBaseAddress: https://example.com\n",
    );
    cm.metadata.namespace = Some("default".to_string());

    let err = resolver_for(cm)
        .resolve(&CancellationToken::new())
        .unwrap_err();
    assert!(matches!(err, BaseAddressError::Lookup(LookupError::NotFound { .. })));
}

#[test]
fn test_resolve_cancelled() {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let resolver = resolver_for(create_console_config_map(
        "console-config.yaml",
        "clusterInfo:\n  consoleBaseAddress: https://example.com\n",
    ));
    assert!(matches!(
        resolver.resolve(&cancel),
        Err(BaseAddressError::Cancelled)
    ));
}

#[test]
fn test_resolve_from_static_lookup() {
    let cm = create_console_config_map(
        "console-config.yaml",
        "clusterInfo:\n  consoleBaseAddress: https://console.apps.example.com\n",
    );
    let lookup = BTreeMap::from([(
        ("openshift-console".to_string(), "console-config".to_string()),
        cm,
    )]);

    let address = BaseAddressResolver::new(lookup)
        .resolve(&CancellationToken::new())
        .unwrap();
    assert_eq!(address.as_str(), "https://console.apps.example.com");

    let empty: BTreeMap<(String, String), ConfigMap> = BTreeMap::new();
    assert!(matches!(
        BaseAddressResolver::new(empty).resolve(&CancellationToken::new()),
        Err(BaseAddressError::Lookup(_))
    ));
}

#[test]
fn test_console_base_address_parse() {
    assert_eq!(ConsoleBaseAddress::parse("").unwrap(), ConsoleBaseAddress::empty());
    let address = ConsoleBaseAddress::parse("https://example.com/console").unwrap();
    assert_eq!(address.as_str(), "https://example.com/console");
    assert_eq!(address.url().unwrap().path(), "/console");
}
