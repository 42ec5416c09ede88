// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret helper

use crate::error::Result;
use crate::helpers::common::{create_or_replace, delete_if_exists, with_labels};
use crate::yaml::{dump_as_yaml, load_from_yaml};
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::{
    api::{ListParams, ObjectMeta, PostParams},
    core::ObjectList,
    Api, Client,
};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, instrument};

pub struct SecretHelper {
    client: Client,
}

impl SecretHelper {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<Secret> {
        Api::namespaced(self.client.clone(), namespace)
    }

    pub async fn list_all(&self) -> Result<ObjectList<Secret>> {
        let api: Api<Secret> = Api::all(self.client.clone());
        Ok(api.list(&ListParams::default()).await?)
    }

    pub async fn list_in_namespace(&self, namespace: &str) -> Result<ObjectList<Secret>> {
        Ok(self.api(namespace).list(&ListParams::default()).await?)
    }

    pub async fn list_with_labels(
        &self,
        namespace: &str,
        labels: &BTreeMap<String, String>,
    ) -> Result<ObjectList<Secret>> {
        Ok(self.api(namespace).list(&with_labels(labels)).await?)
    }

    pub async fn get(&self, namespace: &str, name: &str) -> Result<Option<Secret>> {
        Ok(self.api(namespace).get_opt(name).await?)
    }

    /// Create an opaque secret. Values are stored as their raw bytes.
    #[instrument(skip(self, data))]
    pub async fn create(
        &self,
        namespace: &str,
        name: &str,
        data: BTreeMap<String, String>,
    ) -> Result<Secret> {
        let secret = Secret {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
            data: Some(
                data.into_iter()
                    .map(|(k, v)| (k, ByteString(v.into_bytes())))
                    .collect(),
            ),
            ..Default::default()
        };

        let created = self
            .api(namespace)
            .create(&PostParams::default(), &secret)
            .await?;
        info!("Created secret {}/{}", namespace, name);
        Ok(created)
    }

    pub async fn update(&self, namespace: &str, secret: &Secret) -> Result<Secret> {
        create_or_replace(&self.api(namespace), secret).await
    }

    pub async fn delete(&self, namespace: &str, name: &str) -> Result<bool> {
        delete_if_exists(&self.api(namespace), name).await
    }

    pub async fn to_yaml(
        &self,
        namespace: &str,
        name: &str,
        with_runtime_state: bool,
    ) -> Result<String> {
        let secret = self.api(namespace).get(name).await?;
        dump_as_yaml(&secret, with_runtime_state)
    }

    pub fn load_from_yaml(&self, path: impl AsRef<Path>) -> Result<Secret> {
        load_from_yaml(path)
    }
}
