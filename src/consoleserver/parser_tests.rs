// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `parser.rs`

use super::*;
use crate::consoleserver::{Brand, ConsoleServerConfigBuilder};

const NOMINAL_CONFIG: &str = r"apiVersion: console.openshift.io/v1
auth:
  clientID: console
  clientSecretFile: /var/oauth-config/clientSecret
  logoutRedirect: https://foobar.com/logout
clusterInfo:
  consoleBaseAddress: https://console-openshift-console.apps.foobar.com
  masterPublicURL: https://foobar.com/api
customization:
  branding: okd
  documentationBaseURL: https://foobar.com/docs
kind: ConsoleConfig
providers:
  statuspageID: status-12345
servingInfo:
  bindAddress: https://[::]:8443
  certFile: /var/serving-cert/tls.crt
  keyFile: /var/serving-cert/tls.key
session: {}
";

fn parse(input: &str) -> Result<ConsoleConfig, ConfigError> {
    ConsoleYamlParser.parse(input.as_bytes())
}

#[test]
fn test_parser_should_parse_a_nominal_config() {
    let expected = ConsoleServerConfigBuilder::new()
        .host("https://console-openshift-console.apps.foobar.com")
        .logout_url("https://foobar.com/logout")
        .brand(Brand::Okd)
        .doc_url("https://foobar.com/docs")
        .api_server_url("https://foobar.com/api")
        .status_page_id("status-12345")
        .config();

    let parsed = parse(NOMINAL_CONFIG).expect("nominal config must parse");
    assert_eq!(parsed, expected);
}

#[test]
fn test_parse_reads_every_section() {
    let config = parse(NOMINAL_CONFIG).unwrap();

    assert_eq!(config.api_version, "console.openshift.io/v1");
    assert_eq!(config.kind, "ConsoleConfig");
    let auth = config.auth.unwrap();
    assert_eq!(auth.client_id, "console");
    assert_eq!(auth.logout_redirect, "https://foobar.com/logout");
    let info = config.cluster_info.unwrap();
    assert_eq!(info.master_public_url, "https://foobar.com/api");
    assert_eq!(config.providers.unwrap().status_page_id, "status-12345");
    assert_eq!(config.serving_info.unwrap().bind_address, "https://[::]:8443");
    assert!(config.session.unwrap().entries.is_empty());
}

#[test]
fn test_parse_ignores_unknown_fields() {
    let config = parse(
        r"kind: ConsoleConfig
clusterInfo:
  consoleBaseAddress: https://example.com
  controlPlaneTopology: External
plugins:
  foo: https://foo.example.com
",
    )
    .unwrap();

    assert_eq!(config.console_base_address(), "https://example.com");
    assert_eq!(config.kind, "ConsoleConfig");
}

#[test]
fn test_parse_absent_fields_are_empty() {
    let config = parse("kind: ConsoleConfig\n").unwrap();
    assert_eq!(config.api_version, "");
    assert_eq!(config.cluster_info, None);
    assert_eq!(config.console_base_address(), "");
}

#[test]
fn test_parse_null_section_is_absent() {
    let config = parse(
        r"apiVersion: console.openshift.io/v1
kind: ConsoleConfig
clusterInfo:
",
    )
    .unwrap();
    assert_eq!(config.cluster_info, None);
    assert_eq!(config.console_base_address(), "");
}

#[test]
fn test_parse_null_leaf_is_empty() {
    let config = parse(
        r"clusterInfo:
  consoleBaseAddress: ~
  masterPublicURL: https://api.example.com
",
    )
    .unwrap();
    let info = config.cluster_info.unwrap();
    assert_eq!(info.console_base_address, "");
    assert_eq!(info.master_public_url, "https://api.example.com");
}

#[test]
fn test_parse_empty_string_address() {
    let config = parse("clusterInfo:\n  consoleBaseAddress: \"\"\n").unwrap();
    assert_eq!(config.console_base_address(), "");
    assert!(config.cluster_info.is_some());
}

#[test]
fn test_parse_empty_document() {
    assert_eq!(parse("").unwrap(), ConsoleConfig::default());
    assert_eq!(parse("  \n\t\n").unwrap(), ConsoleConfig::default());
}

#[test]
fn test_parse_null_document_is_empty() {
    assert_eq!(parse("null\n").unwrap(), ConsoleConfig::default());
    assert_eq!(parse("~\n").unwrap(), ConsoleConfig::default());
    assert_eq!(parse("---\n").unwrap(), ConsoleConfig::default());
    assert_eq!(parse("# only a comment\n").unwrap(), ConsoleConfig::default());
}

#[test]
fn test_parse_reads_first_document_of_stream() {
    let config = parse(
        r"kind: ConsoleConfig
clusterInfo:
  consoleBaseAddress: https://first.example.com
---
kind: Other
clusterInfo:
  consoleBaseAddress: https://second.example.com
",
    )
    .unwrap();

    assert_eq!(config.kind, "ConsoleConfig");
    assert_eq!(config.console_base_address(), "https://first.example.com");
}

#[test]
fn test_parse_does_not_validate_urls() {
    let config = parse("clusterInfo:\n  consoleBaseAddress: \":::invalid-url:::\"\n").unwrap();
    assert_eq!(config.console_base_address(), ":::invalid-url:::");
}

#[test]
fn test_parse_session_is_opaque() {
    let config = parse(
        r"session:
  cookieEncryptionKeyFile: /var/session-secret/sessionEncryptionKey
  cookieAuthenticationKeyFile: /var/session-secret/sessionAuthenticationKey
",
    )
    .unwrap();
    let session = config.session.unwrap();
    assert_eq!(session.entries.len(), 2);
    assert_eq!(
        session.entries.get("cookieEncryptionKeyFile"),
        Some(&serde_yaml::Value::String(
            "/var/session-secret/sessionEncryptionKey".to_string()
        ))
    );
}

#[test]
fn test_parse_broken_yaml_is_decode_error() {
    let err = parse(
        r"apiVersion: console.openshift.io/v1
kind: ConsoleConfig
clusterInfo
",
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Decode(_)));
    assert!(err.to_string().starts_with("failed to decode console config"));
}

#[test]
fn test_parse_wrong_node_type_is_decode_error() {
    assert!(matches!(
        parse("clusterInfo: [a, b]\n"),
        Err(ConfigError::Decode(_))
    ));
    assert!(matches!(
        parse("just a scalar\n"),
        Err(ConfigError::Decode(_))
    ));
}

#[test]
fn test_to_yaml_omits_empty_values() {
    let config = ConsoleConfig {
        kind: "ConsoleConfig".to_string(),
        cluster_info: Some(crate::consoleserver::ClusterInfo {
            console_base_address: "https://example.com".to_string(),
            master_public_url: String::new(),
        }),
        ..Default::default()
    };

    let yaml = config.to_yaml().unwrap();
    assert!(yaml.contains("kind: ConsoleConfig"));
    assert!(yaml.contains("consoleBaseAddress: https://example.com"));
    assert!(!yaml.contains("masterPublicURL"));
    assert!(!yaml.contains("apiVersion"));
    assert!(!yaml.contains("auth"));
}

#[test]
fn test_to_yaml_uses_document_key_names() {
    let yaml = parse(NOMINAL_CONFIG).unwrap().to_yaml().unwrap();
    for key in [
        "clientID:",
        "clientSecretFile:",
        "logoutRedirect:",
        "masterPublicURL:",
        "documentationBaseURL:",
        "statuspageID:",
        "bindAddress:",
        "certFile:",
        "keyFile:",
        "session: {}",
    ] {
        assert!(yaml.contains(key), "missing {key} in:\n{yaml}");
    }
}
