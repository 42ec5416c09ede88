// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace helper

use crate::error::{HelperError, Result};
use crate::helpers::common::{delete_if_exists, with_label, with_labels};
use crate::yaml::{dump_as_yaml, load_from_yaml};
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{ListParams, ObjectMeta, PostParams},
    core::ObjectList,
    Api, Client,
};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, instrument};

pub struct NamespaceHelper {
    client: Client,
}

impl NamespaceHelper {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self) -> Api<Namespace> {
        Api::all(self.client.clone())
    }

    pub async fn get(&self, name: &str) -> Result<Option<Namespace>> {
        Ok(self.api().get_opt(name).await?)
    }

    pub async fn list_all(&self) -> Result<ObjectList<Namespace>> {
        Ok(self.api().list(&ListParams::default()).await?)
    }

    pub async fn list_with_label(&self, key: &str, value: &str) -> Result<ObjectList<Namespace>> {
        Ok(self.api().list(&with_label(key, value)).await?)
    }

    pub async fn list_with_labels(
        &self,
        labels: &BTreeMap<String, String>,
    ) -> Result<ObjectList<Namespace>> {
        Ok(self.api().list(&with_labels(labels)).await?)
    }

    pub async fn create(&self, name: &str) -> Result<Namespace> {
        self.create_with_labels(name, BTreeMap::new()).await
    }

    #[instrument(skip(self, labels))]
    pub async fn create_with_labels(
        &self,
        name: &str,
        labels: BTreeMap<String, String>,
    ) -> Result<Namespace> {
        let ns = Namespace {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                labels: (!labels.is_empty()).then_some(labels),
                ..Default::default()
            },
            ..Default::default()
        };
        let created = self.api().create(&PostParams::default(), &ns).await?;
        info!("Namespace {} created successfully", name);
        Ok(created)
    }

    /// Ensure a namespace exists in the cluster, create if it doesn't
    #[instrument(skip(self))]
    pub async fn ensure(&self, name: &str) -> Result<Namespace> {
        match self.api().get(name).await {
            Ok(ns) => {
                debug!("Namespace {} already exists", name);
                Ok(ns)
            }
            Err(kube::Error::Api(err)) if err.code == 404 => {
                info!("Creating namespace {}", name);
                self.create(name).await
            }
            Err(e) => Err(HelperError::KubeError(e)),
        }
    }

    /// Delete a namespace and, asynchronously on the server, everything in it
    pub async fn delete(&self, name: &str) -> Result<bool> {
        delete_if_exists(&self.api(), name).await
    }

    pub async fn to_yaml(&self, name: &str, with_runtime_state: bool) -> Result<String> {
        let ns = self.api().get(name).await?;
        dump_as_yaml(&ns, with_runtime_state)
    }

    pub fn load_from_yaml(&self, path: impl AsRef<Path>) -> Result<Namespace> {
        load_from_yaml(path)
    }
}
