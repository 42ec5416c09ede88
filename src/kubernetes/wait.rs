// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Bounded waiting on object conditions

use crate::error::{HelperError, Result};
use kube::{Api, Resource};
use kube::runtime::wait::{await_condition, Condition};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::time::Duration;
use tracing::{debug, warn};

/// Watch the named object until `condition` holds or `timeout` elapses.
///
/// Returns the object that satisfied the condition, or `None` when the
/// condition accepted a missing object.
pub async fn wait_for<K>(
    api: Api<K>,
    name: &str,
    condition: impl Condition<K>,
    timeout: Duration,
) -> Result<Option<K>>
where
    K: Resource + Clone + Debug + Send + DeserializeOwned + 'static,
{
    debug!("Waiting up to {:?} for {}", timeout, name);

    match tokio::time::timeout(timeout, await_condition(api, name, condition)).await {
        Ok(result) => Ok(result?),
        Err(_) => {
            warn!("Gave up waiting for {} after {:?}", name, timeout);
            Err(HelperError::Timeout(name.to_string()))
        }
    }
}

/// Like [`wait_for`], but the object must exist once the condition holds.
pub async fn wait_for_object<K>(
    api: Api<K>,
    name: &str,
    condition: impl Condition<K>,
    timeout: Duration,
) -> Result<K>
where
    K: Resource + Clone + Debug + Send + DeserializeOwned + 'static,
{
    wait_for(api, name, condition, timeout)
        .await?
        .ok_or_else(|| HelperError::NotFound(name.to_string()))
}
