// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CronJob helper

use crate::error::Result;
use crate::helpers::common::{create_or_replace, delete_if_exists, with_labels};
use crate::helpers::job::single_container_template;
use crate::types::RestartPolicy;
use crate::yaml::{dump_as_yaml, load_from_yaml};
use k8s_openapi::api::batch::v1::{CronJob, CronJobSpec, JobSpec, JobTemplateSpec};
use kube::{
    api::{ListParams, ObjectMeta, PostParams},
    core::ObjectList,
    Api, Client,
};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, instrument};

pub struct CronJobHelper {
    client: Client,
}

impl CronJobHelper {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<CronJob> {
        Api::namespaced(self.client.clone(), namespace)
    }

    pub async fn list_all(&self) -> Result<ObjectList<CronJob>> {
        let api: Api<CronJob> = Api::all(self.client.clone());
        Ok(api.list(&ListParams::default()).await?)
    }

    pub async fn list_in_namespace(&self, namespace: &str) -> Result<ObjectList<CronJob>> {
        Ok(self.api(namespace).list(&ListParams::default()).await?)
    }

    pub async fn list_with_labels(
        &self,
        namespace: &str,
        labels: &BTreeMap<String, String>,
    ) -> Result<ObjectList<CronJob>> {
        Ok(self.api(namespace).list(&with_labels(labels)).await?)
    }

    pub async fn get(&self, namespace: &str, name: &str) -> Result<Option<CronJob>> {
        Ok(self.api(namespace).get_opt(name).await?)
    }

    /// Create a cron job that runs a single container on `schedule`
    /// (standard five-field cron syntax, validated by the server)
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip(self, labels, args))]
    pub async fn create(
        &self,
        namespace: &str,
        name: &str,
        labels: BTreeMap<String, String>,
        schedule: &str,
        container_name: &str,
        image: &str,
        args: Vec<String>,
        restart_policy: RestartPolicy,
    ) -> Result<CronJob> {
        let cron_job = CronJob {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                labels: Some(labels),
                ..Default::default()
            },
            spec: Some(CronJobSpec {
                schedule: schedule.to_string(),
                job_template: JobTemplateSpec {
                    metadata: None,
                    spec: Some(JobSpec {
                        template: single_container_template(
                            container_name,
                            image,
                            args,
                            restart_policy,
                        ),
                        ..Default::default()
                    }),
                },
                ..Default::default()
            }),
            ..Default::default()
        };

        let created = self
            .api(namespace)
            .create(&PostParams::default(), &cron_job)
            .await?;
        info!("Created cron job {}/{} on schedule {}", namespace, name, schedule);
        Ok(created)
    }

    pub async fn update(&self, namespace: &str, cron_job: &CronJob) -> Result<CronJob> {
        create_or_replace(&self.api(namespace), cron_job).await
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
        let cron_job = self.api(namespace).get(name).await?;
        dump_as_yaml(&cron_job, with_runtime_state)
    }

    pub fn load_from_yaml(&self, path: impl AsRef<Path>) -> Result<CronJob> {
        load_from_yaml(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        already_exists_json, fixture, list_json, object_json, success_status_json, MockService,
    };
    use kube::ResourceExt;
    use serde_json::json;

    const NAMESPACE: &str = "cronjob-test-namespace";
    const CRON_JOBS: &str = "/apis/batch/v1/namespaces/cronjob-test-namespace/cronjobs";
    const CRON_JOB: &str = "/apis/batch/v1/namespaces/cronjob-test-namespace/cronjobs/cronjob-test";

    fn cron_job_json() -> String {
        object_json(
            "batch/v1",
            "CronJob",
            Some(NAMESPACE),
            "cronjob-test",
            json!({
                "spec": {
                    "schedule": "*/1 * * * *",
                    "jobTemplate": {
                        "spec": {
                            "template": {
                                "spec": {
                                    "containers": [{ "name": "hello", "image": "busybox" }],
                                    "restartPolicy": "OnFailure"
                                }
                            }
                        }
                    }
                },
                "status": { "lastScheduleTime": "2026-01-01T00:00:00Z" }
            }),
        )
    }

    #[tokio::test]
    async fn test_create_cron_job() {
        let mock = MockService::new().on_post(CRON_JOBS, 201, &cron_job_json());
        let helper = CronJobHelper::new(mock.client());

        let cron_job = helper
            .create(
                NAMESPACE,
                "cronjob-test",
                BTreeMap::from([("alpha".to_string(), "beta".to_string())]),
                "*/1 * * * *",
                "hello",
                "busybox",
                vec!["/bin/sh".to_string(), "-c".to_string(), "date".to_string()],
                RestartPolicy::OnFailure,
            )
            .await
            .unwrap();

        assert_eq!(cron_job.name_any(), "cronjob-test");
        let body = mock.last("POST").json_body();
        assert_eq!(body["apiVersion"], "batch/v1");
        assert_eq!(body["spec"]["schedule"], "*/1 * * * *");
        let pod_spec = &body["spec"]["jobTemplate"]["spec"]["template"]["spec"];
        assert_eq!(pod_spec["restartPolicy"], "OnFailure");
        assert_eq!(pod_spec["containers"][0]["args"][2], "date");
    }

    #[tokio::test]
    async fn test_list_all_and_with_labels() {
        let list = list_json("batch/v1", "CronJobList", &[cron_job_json()]);
        let mock = MockService::new()
            .on_get("/apis/batch/v1/cronjobs", 200, &list)
            .on_get(CRON_JOBS, 200, &list);
        let helper = CronJobHelper::new(mock.client());

        assert_eq!(helper.list_all().await.unwrap().items.len(), 1);
        let labels = BTreeMap::from([("alpha".to_string(), "beta".to_string())]);
        assert_eq!(helper.list_with_labels(NAMESPACE, &labels).await.unwrap().items.len(), 1);
        assert!(mock.last("GET").query.contains("labelSelector=alpha%3Dbeta"));
    }

    #[tokio::test]
    async fn test_update_existing_replaces() {
        let mock = MockService::new()
            .on_post(CRON_JOBS, 409, &already_exists_json("cronjobs", "cronjob-test"))
            .on_get(CRON_JOB, 200, &cron_job_json())
            .on_put(CRON_JOB, 200, &cron_job_json());
        let helper = CronJobHelper::new(mock.client());
        let cron_job: CronJob = serde_json::from_str(&cron_job_json()).unwrap();

        helper.update(NAMESPACE, &cron_job).await.unwrap();

        assert_eq!(mock.last("PUT").path, CRON_JOB);
    }

    #[tokio::test]
    async fn test_yaml_and_delete() {
        let mock = MockService::new()
            .on_get(CRON_JOB, 200, &cron_job_json())
            .on_delete(CRON_JOB, 200, &success_status_json());
        let helper = CronJobHelper::new(mock.client());

        let with_state = helper.to_yaml(NAMESPACE, "cronjob-test", true).await.unwrap();
        let without_state = helper.to_yaml(NAMESPACE, "cronjob-test", false).await.unwrap();
        assert!(with_state.contains("lastScheduleTime"));
        assert!(!without_state.contains("lastScheduleTime"));

        assert!(helper.delete(NAMESPACE, "cronjob-test").await.unwrap());
        assert!(!helper.delete(NAMESPACE, "other").await.unwrap());
    }

    #[tokio::test]
    async fn test_load_from_yaml() {
        let helper = CronJobHelper::new(MockService::new().client());

        let cron_job = helper.load_from_yaml(fixture("cronjob-example.yaml")).unwrap();

        assert_eq!(cron_job.spec.unwrap().schedule, "*/1 * * * *");
    }
}
