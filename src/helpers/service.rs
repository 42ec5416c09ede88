// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Service helper

use crate::error::Result;
use crate::helpers::common::{create_or_replace, delete_if_exists, with_labels};
use crate::types::{ServiceProtocol, ServiceType};
use crate::yaml::{dump_as_yaml, load_from_yaml};
use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::{
    api::{ListParams, ObjectMeta, PostParams},
    core::ObjectList,
    Api, Client,
};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, instrument};

pub struct ServiceHelper {
    client: Client,
}

impl ServiceHelper {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<Service> {
        Api::namespaced(self.client.clone(), namespace)
    }

    pub async fn get(&self, namespace: &str, name: &str) -> Result<Option<Service>> {
        Ok(self.api(namespace).get_opt(name).await?)
    }

    pub async fn list_all(&self) -> Result<ObjectList<Service>> {
        let api: Api<Service> = Api::all(self.client.clone());
        Ok(api.list(&ListParams::default()).await?)
    }

    pub async fn list_in_namespace(&self, namespace: &str) -> Result<ObjectList<Service>> {
        Ok(self.api(namespace).list(&ListParams::default()).await?)
    }

    pub async fn list_with_labels(
        &self,
        namespace: &str,
        labels: &BTreeMap<String, String>,
    ) -> Result<ObjectList<Service>> {
        Ok(self.api(namespace).list(&with_labels(labels)).await?)
    }

    /// Create a service with one port, selecting pods labelled
    /// `selector_key=selector_value`
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip(self))]
    pub async fn create(
        &self,
        namespace: &str,
        name: &str,
        selector_key: &str,
        selector_value: &str,
        port_name: &str,
        protocol: ServiceProtocol,
        port: i32,
        target_port: i32,
        service_type: ServiceType,
    ) -> Result<Service> {
        let service = Service {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            },
            spec: Some(ServiceSpec {
                selector: Some(BTreeMap::from([(
                    selector_key.to_string(),
                    selector_value.to_string(),
                )])),
                ports: Some(vec![ServicePort {
                    name: Some(port_name.to_string()),
                    protocol: Some(protocol.as_str().to_string()),
                    port,
                    target_port: Some(IntOrString::Int(target_port)),
                    ..Default::default()
                }]),
                type_: Some(service_type.as_str().to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let created = self
            .api(namespace)
            .create(&PostParams::default(), &service)
            .await?;
        info!("Created {} service {}/{}", service_type.as_str(), namespace, name);
        Ok(created)
    }

    pub async fn update(&self, namespace: &str, service: &Service) -> Result<Service> {
        create_or_replace(&self.api(namespace), service).await
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
        let service = self.api(namespace).get(name).await?;
        dump_as_yaml(&service, with_runtime_state)
    }

    pub fn load_from_yaml(&self, path: impl AsRef<Path>) -> Result<Service> {
        load_from_yaml(path)
    }
}
