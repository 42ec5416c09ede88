// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Job helper

use crate::error::Result;
use crate::helpers::common::{create_or_replace, delete_if_exists, with_labels};
use crate::kubernetes::wait_for_object;
use crate::types::RestartPolicy;
use crate::yaml::{dump_as_yaml, load_from_yaml};
use k8s_openapi::api::batch::v1::{Job, JobSpec};
use k8s_openapi::api::core::v1::{Container, PodSpec, PodTemplateSpec};
use kube::{
    api::{ListParams, ObjectMeta, PostParams},
    core::ObjectList,
    runtime::wait::conditions,
    Api, Client,
};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};

pub struct JobHelper {
    client: Client,
}

/// Pod template running a single container with `args`
pub(crate) fn single_container_template(
    container_name: &str,
    image: &str,
    args: Vec<String>,
    restart_policy: RestartPolicy,
) -> PodTemplateSpec {
    PodTemplateSpec {
        metadata: None,
        spec: Some(PodSpec {
            containers: vec![Container {
                name: container_name.to_string(),
                image: Some(image.to_string()),
                args: Some(args),
                ..Default::default()
            }],
            restart_policy: Some(restart_policy.as_str().to_string()),
            ..Default::default()
        }),
    }
}

impl JobHelper {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<Job> {
        Api::namespaced(self.client.clone(), namespace)
    }

    pub async fn list_all(&self) -> Result<ObjectList<Job>> {
        let api: Api<Job> = Api::all(self.client.clone());
        Ok(api.list(&ListParams::default()).await?)
    }

    pub async fn list_in_namespace(&self, namespace: &str) -> Result<ObjectList<Job>> {
        Ok(self.api(namespace).list(&ListParams::default()).await?)
    }

    pub async fn list_with_labels(
        &self,
        namespace: &str,
        labels: &BTreeMap<String, String>,
    ) -> Result<ObjectList<Job>> {
        Ok(self.api(namespace).list(&with_labels(labels)).await?)
    }

    pub async fn get(&self, namespace: &str, name: &str) -> Result<Option<Job>> {
        Ok(self.api(namespace).get_opt(name).await?)
    }

    /// Create a job running a single container to completion
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip(self, labels, annotations, args))]
    pub async fn create(
        &self,
        namespace: &str,
        name: &str,
        labels: BTreeMap<String, String>,
        annotations: BTreeMap<String, String>,
        container_name: &str,
        image: &str,
        args: Vec<String>,
        restart_policy: RestartPolicy,
    ) -> Result<Job> {
        let job = Job {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                labels: Some(labels),
                annotations: Some(annotations),
                ..Default::default()
            },
            spec: Some(JobSpec {
                template: single_container_template(container_name, image, args, restart_policy),
                ..Default::default()
            }),
            ..Default::default()
        };

        let created = self
            .api(namespace)
            .create(&PostParams::default(), &job)
            .await?;
        info!("Created job {}/{}", namespace, name);
        Ok(created)
    }

    pub async fn update(&self, namespace: &str, job: &Job) -> Result<Job> {
        create_or_replace(&self.api(namespace), job).await
    }

    pub async fn delete(&self, namespace: &str, name: &str) -> Result<bool> {
        delete_if_exists(&self.api(namespace), name).await
    }

    /// Wait until the job reports a `Complete` condition
    #[instrument(skip(self))]
    pub async fn wait_until_completed(
        &self,
        namespace: &str,
        name: &str,
        timeout: Duration,
    ) -> Result<Job> {
        wait_for_object(self.api(namespace), name, conditions::is_job_completed(), timeout).await
    }

    pub async fn to_yaml(
        &self,
        namespace: &str,
        name: &str,
        with_runtime_state: bool,
    ) -> Result<String> {
        let job = self.api(namespace).get(name).await?;
        dump_as_yaml(&job, with_runtime_state)
    }

    pub fn load_from_yaml(&self, path: impl AsRef<Path>) -> Result<Job> {
        load_from_yaml(path)
    }
}
