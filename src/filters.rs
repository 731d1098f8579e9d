// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Event filters deciding which watch notifications trigger a reconciliation.
//!
//! Filters run on the shared delivery path of a watch: every consumer of the same
//! stream waits while a filter runs. They therefore do no I/O, never block and only
//! touch the filter's own name or label set.
//!
//! # Architecture
//!
//! Raw watch notifications are resolved once, at the watch boundary, into a
//! [`WatchPayload`]. A deletion whose final state was missed still carries the
//! last-known object, so [`WatchPayload::DeletedLastKnown`] exposes the same
//! [`Identity`] as a live object and filters never care which one they got.
//! Payloads with no object metadata at all become [`WatchPayload::Opaque`].
//!
//! # Example
//!
//! ```rust
//! use console_operator::filters::{include_by_name, match_labels, WatchPayload};
//! use k8s_openapi::api::core::v1::ConfigMap;
//! use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
//! use std::collections::BTreeMap;
//!
//! let cm = ConfigMap {
//!     metadata: ObjectMeta {
//!         name: Some("console-config".to_string()),
//!         labels: Some(BTreeMap::from([("app".to_string(), "console".to_string())])),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! let payload = WatchPayload::live(&cm);
//! assert!(include_by_name(["console-config"]).matches(&payload));
//! assert!(match_labels([("app", "console")]).matches(&payload));
//! ```

use crate::errors::UnidentifiedPayload;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::runtime::watcher;
use kube::Resource;
use std::collections::{BTreeMap, BTreeSet};
use tracing::error;

/// The identity of a watched object: its name and labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    /// `metadata.name`, empty when unset
    pub name: String,
    /// `metadata.labels`
    pub labels: BTreeMap<String, String>,
}

impl Identity {
    /// Create an identity from a name and a label map.
    #[must_use]
    pub fn new(name: impl Into<String>, labels: BTreeMap<String, String>) -> Self {
        Self {
            name: name.into(),
            labels,
        }
    }

    /// Extract the identity of any Kubernetes resource.
    #[must_use]
    pub fn of<K: Resource>(obj: &K) -> Self {
        Self::from_meta(obj.meta())
    }

    fn from_meta(meta: &ObjectMeta) -> Self {
        Self {
            name: meta.name.clone().unwrap_or_default(),
            labels: meta.labels.clone().unwrap_or_default(),
        }
    }
}

/// A watch notification resolved into the shape filters operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchPayload {
    /// An object that was added or updated
    Live(Identity),
    /// The last known state of an object deleted while the watch was not looking
    DeletedLastKnown(Identity),
    /// A payload with no object metadata
    Opaque {
        /// Description of what was received instead
        type_name: String,
    },
}

impl WatchPayload {
    /// Payload for a live object.
    #[must_use]
    pub fn live<K: Resource>(obj: &K) -> Self {
        Self::Live(Identity::of(obj))
    }

    /// Payload for the last-known state of a deleted object.
    #[must_use]
    pub fn tombstone<K: Resource>(obj: &K) -> Self {
        Self::DeletedLastKnown(Identity::of(obj))
    }

    /// Resolve a `kube` watcher event.
    ///
    /// Returns `None` for the `Init`/`InitDone` markers of a relist, which carry no object.
    #[must_use]
    pub fn from_event<K: Resource>(event: &watcher::Event<K>) -> Option<Self> {
        match event {
            watcher::Event::Apply(obj) | watcher::Event::InitApply(obj) => Some(Self::live(obj)),
            watcher::Event::Delete(obj) => Some(Self::tombstone(obj)),
            watcher::Event::Init | watcher::Event::InitDone => None,
        }
    }

    /// Resolve an untyped JSON object, as delivered by a dynamic watch.
    ///
    /// Anything without a well-formed `metadata` object is [`WatchPayload::Opaque`].
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        let meta = value
            .get("metadata")
            .filter(|m| m.is_object())
            .and_then(|m| serde_json::from_value::<ObjectMeta>(m.clone()).ok());

        match meta {
            Some(meta) => Self::Live(Identity::from_meta(&meta)),
            None => Self::Opaque {
                type_name: json_type_name(value).to_string(),
            },
        }
    }

    /// The identity carried by this payload, unwrapping tombstones.
    ///
    /// # Errors
    ///
    /// Returns [`UnidentifiedPayload`] for [`WatchPayload::Opaque`].
    pub fn identity(&self) -> Result<&Identity, UnidentifiedPayload> {
        match self {
            Self::Live(identity) | Self::DeletedLastKnown(identity) => Ok(identity),
            Self::Opaque { type_name } => Err(UnidentifiedPayload {
                type_name: type_name.clone(),
            }),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// A stateless admission filter over watch payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventFilter {
    /// Admit objects whose name is in the set
    IncludeNames(BTreeSet<String>),
    /// Admit objects whose name is not in the set
    ExcludeNames(BTreeSet<String>),
    /// Admit objects carrying every one of these labels with exactly these values
    MatchLabels(BTreeMap<String, String>),
}

/// Filter admitting only objects named in `names`.
pub fn include_by_name<I, S>(names: I) -> EventFilter
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    EventFilter::IncludeNames(names.into_iter().map(Into::into).collect())
}

/// Exact inverse of [`include_by_name`].
pub fn exclude_by_name<I, S>(names: I) -> EventFilter
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    EventFilter::ExcludeNames(names.into_iter().map(Into::into).collect())
}

/// Filter admitting objects whose labels contain every `required` key with the same value.
pub fn match_labels<I, K, V>(required: I) -> EventFilter
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    EventFilter::MatchLabels(
        required
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    )
}

impl EventFilter {
    /// Evaluate the filter, reporting payloads that cannot be identified.
    ///
    /// # Errors
    ///
    /// Returns [`UnidentifiedPayload`] when the payload carries no metadata. The caller
    /// decides whether that is worth logging; [`EventFilter::matches`] does so.
    pub fn evaluate(&self, payload: &WatchPayload) -> Result<bool, UnidentifiedPayload> {
        let identity = payload.identity()?;
        Ok(match self {
            Self::IncludeNames(names) => names.contains(&identity.name),
            Self::ExcludeNames(names) => !names.contains(&identity.name),
            Self::MatchLabels(required) => labels_match(required, &identity.labels),
        })
    }

    /// Evaluate the filter on the watch path.
    ///
    /// Never fails: an unidentifiable payload is logged and does not match an include
    /// or label filter. An exclude filter stays the exact inverse of its include
    /// counterpart and therefore admits it.
    #[must_use]
    pub fn matches(&self, payload: &WatchPayload) -> bool {
        match self.evaluate(payload) {
            Ok(matched) => matched,
            Err(err) => {
                error!(error = %err, "Event filter could not identify watch payload");
                matches!(self, Self::ExcludeNames(_))
            }
        }
    }

    /// Evaluate the filter against a live object.
    #[must_use]
    pub fn admits<K: Resource>(&self, obj: &K) -> bool {
        self.matches(&WatchPayload::live(obj))
    }
}

fn labels_match(required: &BTreeMap<String, String>, labels: &BTreeMap<String, String>) -> bool {
    required
        .iter()
        .all(|(key, value)| labels.get(key) == Some(value))
}

#[cfg(test)]
#[path = "filters_tests.rs"]
mod filters_tests;
