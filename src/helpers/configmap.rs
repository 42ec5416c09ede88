// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ConfigMap helper

use crate::error::Result;
use crate::helpers::common::{create_or_replace, delete_if_exists, with_labels};
use crate::yaml::{dump_as_yaml, load_from_yaml};
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{
    api::{ListParams, ObjectMeta, PostParams},
    core::ObjectList,
    Api, Client,
};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, instrument};

pub struct ConfigMapHelper {
    client: Client,
}

impl ConfigMapHelper {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<ConfigMap> {
        Api::namespaced(self.client.clone(), namespace)
    }

    /// List config maps across all namespaces
    pub async fn list_all(&self) -> Result<ObjectList<ConfigMap>> {
        let api: Api<ConfigMap> = Api::all(self.client.clone());
        Ok(api.list(&ListParams::default()).await?)
    }

    pub async fn list_in_namespace(&self, namespace: &str) -> Result<ObjectList<ConfigMap>> {
        Ok(self.api(namespace).list(&ListParams::default()).await?)
    }

    pub async fn list_with_labels(
        &self,
        namespace: &str,
        labels: &BTreeMap<String, String>,
    ) -> Result<ObjectList<ConfigMap>> {
        Ok(self.api(namespace).list(&with_labels(labels)).await?)
    }

    /// Get a config map, `None` if it does not exist
    pub async fn get(&self, namespace: &str, name: &str) -> Result<Option<ConfigMap>> {
        Ok(self.api(namespace).get_opt(name).await?)
    }

    /// Create a config map holding `data`
    #[instrument(skip(self, data))]
    pub async fn create(
        &self,
        namespace: &str,
        name: &str,
        data: BTreeMap<String, String>,
    ) -> Result<ConfigMap> {
        let config_map = ConfigMap {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
            data: Some(data),
            ..Default::default()
        };

        let created = self
            .api(namespace)
            .create(&PostParams::default(), &config_map)
            .await?;
        info!("Created config map {}/{}", namespace, name);
        Ok(created)
    }

    /// Create or replace the given config map
    pub async fn update(&self, namespace: &str, config_map: &ConfigMap) -> Result<ConfigMap> {
        create_or_replace(&self.api(namespace), config_map).await
    }

    pub async fn delete(&self, namespace: &str, name: &str) -> Result<bool> {
        delete_if_exists(&self.api(namespace), name).await
    }

    /// Render the live config map as YAML
    pub async fn to_yaml(
        &self,
        namespace: &str,
        name: &str,
        with_runtime_state: bool,
    ) -> Result<String> {
        let config_map = self.api(namespace).get(name).await?;
        dump_as_yaml(&config_map, with_runtime_state)
    }

    pub fn load_from_yaml(&self, path: impl AsRef<Path>) -> Result<ConfigMap> {
        load_from_yaml(path)
    }
}
