// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment helper: creation, image rollout and scaling

use crate::error::{HelperError, Result};
use crate::helpers::common::{delete_if_exists, with_labels};
use crate::yaml::{dump_as_yaml, load_from_yaml};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{Container, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::{
    api::{ListParams, ObjectMeta, Patch, PatchParams, PostParams},
    core::ObjectList,
    Api, Client,
};
use serde_json::json;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, instrument};

pub struct DeploymentHelper {
    client: Client,
}

impl DeploymentHelper {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<Deployment> {
        Api::namespaced(self.client.clone(), namespace)
    }

    pub async fn list_all(&self) -> Result<ObjectList<Deployment>> {
        let api: Api<Deployment> = Api::all(self.client.clone());
        Ok(api.list(&ListParams::default()).await?)
    }

    pub async fn list_in_namespace(&self, namespace: &str) -> Result<ObjectList<Deployment>> {
        Ok(self.api(namespace).list(&ListParams::default()).await?)
    }

    pub async fn list_with_labels(
        &self,
        namespace: &str,
        labels: &BTreeMap<String, String>,
    ) -> Result<ObjectList<Deployment>> {
        Ok(self.api(namespace).list(&with_labels(labels)).await?)
    }

    pub async fn get(&self, namespace: &str, name: &str) -> Result<Option<Deployment>> {
        Ok(self.api(namespace).get_opt(name).await?)
    }

    /// Create a single-container deployment.
    ///
    /// `labels` go on the deployment itself, `template_labels` on its pods and
    /// `selector_labels` form the pod selector; the selector must match the
    /// template labels for the API server to accept the object.
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip(self, labels, template_labels, command, selector_labels))]
    pub async fn create(
        &self,
        namespace: &str,
        name: &str,
        labels: BTreeMap<String, String>,
        replicas: i32,
        template_labels: BTreeMap<String, String>,
        container_name: &str,
        image: &str,
        command: Vec<String>,
        selector_labels: BTreeMap<String, String>,
    ) -> Result<Deployment> {
        let deployment = Deployment {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                labels: Some(labels),
                ..Default::default()
            },
            spec: Some(DeploymentSpec {
                replicas: Some(replicas),
                selector: LabelSelector {
                    match_labels: Some(selector_labels),
                    ..Default::default()
                },
                template: PodTemplateSpec {
                    metadata: Some(ObjectMeta {
                        labels: Some(template_labels),
                        ..Default::default()
                    }),
                    spec: Some(PodSpec {
                        containers: vec![Container {
                            name: container_name.to_string(),
                            image: Some(image.to_string()),
                            command: Some(command),
                            ..Default::default()
                        }],
                        ..Default::default()
                    }),
                },
                ..Default::default()
            }),
            ..Default::default()
        };

        let created = self
            .api(namespace)
            .create(&PostParams::default(), &deployment)
            .await?;
        info!("Created deployment {}/{} with {} replicas", namespace, name, replicas);
        Ok(created)
    }

    /// Roll new images onto the named containers of a deployment.
    ///
    /// `images` maps container name to image. Names that match no container
    /// in the pod template are not skipped: the call fails with
    /// [`HelperError::ContainerNotFound`] and nothing is written.
    #[instrument(skip(self, images))]
    pub async fn update_images(
        &self,
        namespace: &str,
        name: &str,
        images: &BTreeMap<String, String>,
    ) -> Result<Deployment> {
        let api = self.api(namespace);
        let mut deployment = api.get(name).await?;

        let containers = deployment
            .spec
            .as_mut()
            .and_then(|s| s.template.spec.as_mut())
            .map(|s| &mut s.containers);
        let Some(containers) = containers else {
            return Err(HelperError::ContainerNotFound(format!(
                "deployment {}/{} has no pod template containers",
                namespace, name
            )));
        };

        for (container_name, image) in images {
            let container = containers
                .iter_mut()
                .find(|c| &c.name == container_name)
                .ok_or_else(|| {
                    HelperError::ContainerNotFound(format!(
                        "{} in deployment {}/{}",
                        container_name, namespace, name
                    ))
                })?;
            debug!("Setting image of container {} to {}", container_name, image);
            container.image = Some(image.clone());
        }

        let updated = api.replace(name, &PostParams::default(), &deployment).await?;
        info!("Rolled out new images for deployment {}/{}", namespace, name);
        Ok(updated)
    }

    /// Set the replica count of a deployment
    #[instrument(skip(self))]
    pub async fn scale(&self, namespace: &str, name: &str, replicas: i32) -> Result<Deployment> {
        let patch = json!({ "spec": { "replicas": replicas } });
        let scaled = self
            .api(namespace)
            .patch(name, &PatchParams::default(), &Patch::Merge(&patch))
            .await?;
        info!("Scaled deployment {}/{} to {} replicas", namespace, name, replicas);
        Ok(scaled)
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
        let deployment = self.api(namespace).get(name).await?;
        dump_as_yaml(&deployment, with_runtime_state)
    }

    pub fn load_from_yaml(&self, path: impl AsRef<Path>) -> Result<Deployment> {
        load_from_yaml(path)
    }
}
