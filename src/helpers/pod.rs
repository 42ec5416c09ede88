// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod helper, including log retrieval

use crate::error::{HelperError, Result};
use crate::helpers::common::{create_or_replace, delete_if_exists, with_label, with_labels};
use crate::kubernetes::wait_for_object;
use crate::yaml::{dump_as_yaml, load_from_yaml};
use futures::io::{AsyncWrite, AsyncWriteExt};
use k8s_openapi::api::core::v1::{Container, ContainerPort, Pod, PodSpec};
use kube::{
    api::{ListParams, LogParams, ObjectMeta},
    core::ObjectList,
    runtime::wait::conditions,
    Api, Client,
};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

pub struct PodHelper {
    client: Client,
}

/// Handle to a pod log being followed in the background.
///
/// Dropping the handle stops following the log.
pub struct LogWatch<W> {
    handle: Option<JoinHandle<Result<W>>>,
}

impl<W> LogWatch<W> {
    /// Stop following the log
    pub fn close(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }

    /// Whether the log stream has ended, failed or been closed
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the log stream to end and get the writer back
    pub async fn wait(mut self) -> Result<W> {
        let Some(handle) = self.handle.take() else {
            return Err(HelperError::LogWatchClosed("already taken".to_string()));
        };
        match handle.await {
            Ok(result) => result,
            Err(e) => Err(HelperError::LogWatchClosed(e.to_string())),
        }
    }
}

impl<W> Drop for LogWatch<W> {
    fn drop(&mut self) {
        self.close();
    }
}

impl PodHelper {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<Pod> {
        Api::namespaced(self.client.clone(), namespace)
    }

    pub async fn get(&self, namespace: &str, name: &str) -> Result<Option<Pod>> {
        Ok(self.api(namespace).get_opt(name).await?)
    }

    pub async fn list_all(&self) -> Result<ObjectList<Pod>> {
        let api: Api<Pod> = Api::all(self.client.clone());
        Ok(api.list(&ListParams::default()).await?)
    }

    pub async fn list_in_namespace(&self, namespace: &str) -> Result<ObjectList<Pod>> {
        Ok(self.api(namespace).list(&ListParams::default()).await?)
    }

    pub async fn list_with_label(
        &self,
        namespace: &str,
        key: &str,
        value: &str,
    ) -> Result<ObjectList<Pod>> {
        Ok(self.api(namespace).list(&with_label(key, value)).await?)
    }

    pub async fn list_with_labels(
        &self,
        namespace: &str,
        labels: &BTreeMap<String, String>,
    ) -> Result<ObjectList<Pod>> {
        Ok(self.api(namespace).list(&with_labels(labels)).await?)
    }

    /// Create (or replace) a single-container pod exposing `port`
    #[instrument(skip(self))]
    pub async fn create(
        &self,
        namespace: &str,
        name: &str,
        container_name: &str,
        image: &str,
        port: i32,
    ) -> Result<Pod> {
        let pod = Pod {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
            spec: Some(PodSpec {
                containers: vec![Container {
                    name: container_name.to_string(),
                    image: Some(image.to_string()),
                    ports: Some(vec![ContainerPort {
                        container_port: port,
                        ..Default::default()
                    }]),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Default::default()
        };

        self.update(namespace, &pod).await
    }

    pub async fn update(&self, namespace: &str, pod: &Pod) -> Result<Pod> {
        create_or_replace(&self.api(namespace), pod).await
    }

    pub async fn delete(&self, namespace: &str, name: &str) -> Result<bool> {
        delete_if_exists(&self.api(namespace), name).await
    }

    /// Fetch the current log of the pod's (only) container
    pub async fn log(&self, namespace: &str, name: &str) -> Result<String> {
        Ok(self.api(namespace).logs(name, &LogParams::default()).await?)
    }

    /// Follow the pod log, starting `tail_lines` back, and copy it into
    /// `writer` until the stream ends or the returned handle is closed.
    pub fn watch_log<W>(
        &self,
        namespace: &str,
        name: &str,
        tail_lines: i64,
        mut writer: W,
    ) -> LogWatch<W>
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let api = self.api(namespace);
        let name = name.to_string();
        let params = LogParams {
            follow: true,
            tail_lines: Some(tail_lines),
            ..Default::default()
        };

        info!("Following log of pod {}/{}", namespace, name);
        let handle = tokio::spawn(async move {
            let stream = api.log_stream(&name, &params).await?;
            let copied = futures::io::copy(stream, &mut writer).await?;
            writer.flush().await?;
            debug!("Log stream of pod {} ended after {} bytes", name, copied);
            Ok::<_, HelperError>(writer)
        });

        LogWatch {
            handle: Some(handle),
        }
    }

    /// Wait until the pod reports phase `Running`
    #[instrument(skip(self))]
    pub async fn wait_until_running(
        &self,
        namespace: &str,
        name: &str,
        timeout: Duration,
    ) -> Result<Pod> {
        wait_for_object(self.api(namespace), name, conditions::is_pod_running(), timeout).await
    }

    pub async fn to_yaml(
        &self,
        namespace: &str,
        name: &str,
        with_runtime_state: bool,
    ) -> Result<String> {
        let pod = self.api(namespace).get(name).await?;
        dump_as_yaml(&pod, with_runtime_state)
    }

    pub fn load_from_yaml(&self, path: impl AsRef<Path>) -> Result<Pod> {
        load_from_yaml(path)
    }
}
