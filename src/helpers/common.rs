// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Request plumbing shared by the resource helpers

use crate::error::{HelperError, Result};
use kube::{
    api::{DeleteParams, ListParams, PostParams},
    Api, Resource, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;
use tracing::{debug, info};

/// Render a label map as an equality-based label selector (`k1=v1,k2=v2`)
pub fn label_selector(labels: &BTreeMap<String, String>) -> String {
    labels
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(",")
}

/// List parameters matching every label in `labels`
pub fn with_labels(labels: &BTreeMap<String, String>) -> ListParams {
    ListParams::default().labels(&label_selector(labels))
}

/// List parameters matching a single label
pub fn with_label(key: &str, value: &str) -> ListParams {
    ListParams::default().labels(&format!("{}={}", key, value))
}

/// Create the object, or replace the live one if it already exists.
///
/// A replace must carry the live `resourceVersion`, so on conflict the
/// current object is read first.
pub async fn create_or_replace<K>(api: &Api<K>, obj: &K) -> Result<K>
where
    K: Resource<DynamicType = ()> + Clone + Debug + Serialize + DeserializeOwned,
{
    let name = obj
        .meta()
        .name
        .clone()
        .ok_or_else(|| HelperError::MissingName(K::kind(&()).to_string()))?;

    match api.create(&PostParams::default(), obj).await {
        Ok(created) => {
            info!("Created {} {}", K::kind(&()), name);
            Ok(created)
        }
        Err(kube::Error::Api(err)) if err.code == 409 => {
            debug!("{} {} already exists, replacing", K::kind(&()), name);
            let live = api.get(&name).await?;
            let mut replacement = obj.clone();
            replacement.meta_mut().resource_version = live.resource_version();
            let replaced = api
                .replace(&name, &PostParams::default(), &replacement)
                .await?;
            info!("Replaced {} {}", K::kind(&()), name);
            Ok(replaced)
        }
        Err(e) => Err(e.into()),
    }
}

/// Delete the named object. Returns `false` when there was nothing to delete.
pub async fn delete_if_exists<K>(api: &Api<K>, name: &str) -> Result<bool>
where
    K: Resource<DynamicType = ()> + Clone + Debug + DeserializeOwned,
{
    match api.delete(name, &DeleteParams::default()).await {
        Ok(_) => {
            info!("Deleted {} {}", K::kind(&()), name);
            Ok(true)
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("{} {} not found, nothing to delete", K::kind(&()), name);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
