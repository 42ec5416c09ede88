// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kube_helpers::config::Config;
use kube_helpers::helpers::{
    ConfigMapHelper, CronJobHelper, DeploymentHelper, JobHelper, NamespaceHelper, PodHelper,
    SecretHelper, ServiceHelper,
};
use kube_helpers::kubernetes::{configured_client_from_file, infer_client};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: kubeconfig={}, namespace={}",
        config.kubeconfig_path.display(),
        config.namespace
    );

    let client = if config.kubeconfig_path.exists() {
        configured_client_from_file(&config.kubeconfig_path).await?
    } else {
        warn!(
            "{} not found, inferring client configuration",
            config.kubeconfig_path.display()
        );
        infer_client().await?
    };

    let namespace = config.namespace.as_str();
    let namespaces = NamespaceHelper::new(client.clone());
    if namespaces.get(namespace).await?.is_none() {
        warn!("Namespace {} does not exist", namespace);
        return Ok(());
    }

    let pods = PodHelper::new(client.clone());
    let deployments = DeploymentHelper::new(client.clone());
    let services = ServiceHelper::new(client.clone());
    let jobs = JobHelper::new(client.clone());
    let cron_jobs = CronJobHelper::new(client.clone());
    let config_maps = ConfigMapHelper::new(client.clone());
    let secrets = SecretHelper::new(client);

    let (pods, deployments, services, jobs, cron_jobs, config_maps, secrets) = tokio::try_join!(
        pods.list_in_namespace(namespace),
        deployments.list_in_namespace(namespace),
        services.list_in_namespace(namespace),
        jobs.list_in_namespace(namespace),
        cron_jobs.list_in_namespace(namespace),
        config_maps.list_in_namespace(namespace),
        secrets.list_in_namespace(namespace),
    )?;

    info!("Inventory of namespace {}:", namespace);
    info!("  pods:        {}", pods.items.len());
    info!("  deployments: {}", deployments.items.len());
    info!("  services:    {}", services.items.len());
    info!("  jobs:        {}", jobs.items.len());
    info!("  cron jobs:   {}", cron_jobs.items.len());
    info!("  config maps: {}", config_maps.items.len());
    info!("  secrets:     {}", secrets.items.len());

    Ok(())
}
