// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Decoding and encoding of `console-config.yaml`.

use super::types::ConsoleConfig;
use crate::errors::ConfigError;
use serde::Deserialize;
use tracing::debug;

/// Decodes console server configuration documents.
///
/// Stateless; one parser can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleYamlParser;

impl ConsoleYamlParser {
    /// Decode a YAML document into a [`ConsoleConfig`].
    ///
    /// Unknown keys are ignored and missing keys read as empty. A document containing
    /// only whitespace, or whose root is `null`, decodes to the empty configuration.
    /// Only the first document of a multi-document stream is read.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Decode`] if the document is not well-formed YAML or a node
    /// has the wrong shape (e.g. a scalar where a section is expected). No partially
    /// decoded configuration is ever returned.
    pub fn parse(&self, config_yaml: &[u8]) -> Result<ConsoleConfig, ConfigError> {
        if config_yaml.iter().all(u8::is_ascii_whitespace) {
            debug!("Console config document is empty");
            return Ok(ConsoleConfig::default());
        }

        let Some(document) = serde_yaml::Deserializer::from_slice(config_yaml).next() else {
            debug!("Console config stream holds no documents");
            return Ok(ConsoleConfig::default());
        };

        Option::<ConsoleConfig>::deserialize(document)
            .map(Option::unwrap_or_default)
            .map_err(ConfigError::Decode)
    }
}

impl ConsoleConfig {
    /// Encode this configuration as a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Encode`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(ConfigError::Encode)
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
