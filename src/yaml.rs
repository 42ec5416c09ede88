// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! YAML rendering of live objects and loading of local manifests

use crate::constants::RUNTIME_METADATA_FIELDS;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Render an object as YAML.
///
/// With `with_runtime_state` unset the result reads like a user-authored
/// manifest: `status` and the server-populated metadata fields are dropped.
pub fn dump_as_yaml<K: Serialize>(obj: &K, with_runtime_state: bool) -> Result<String> {
    let mut value = serde_json::to_value(obj)?;
    if !with_runtime_state {
        strip_runtime_state(&mut value);
    }
    Ok(serde_yaml::to_string(&value)?)
}

fn strip_runtime_state(value: &mut Value) {
    let Some(object) = value.as_object_mut() else {
        return;
    };

    object.remove("status");

    if let Some(metadata) = object.get_mut("metadata").and_then(Value::as_object_mut) {
        for field in RUNTIME_METADATA_FIELDS {
            metadata.remove(*field);
        }
    }
}

/// Parse a manifest file into an object. Nothing is sent to the server.
pub fn load_from_yaml<K: DeserializeOwned>(path: impl AsRef<Path>) -> Result<K> {
    let path = path.as_ref();
    debug!("Loading manifest {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}
