// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client construction from kubeconfig files

use crate::error::{HelperError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a client from a kubeconfig file on disk
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub async fn configured_client_from_file(path: impl AsRef<Path>) -> Result<Client> {
    let path = path.as_ref();
    info!("Reading kubeconfig from {}", path.display());
    let contents = tokio::fs::read_to_string(path).await?;
    client_from_kubeconfig(&contents).await
}

/// Create a client from the contents of a kubeconfig document
pub async fn client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| HelperError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    debug!(
        "Using kubeconfig context {:?}",
        kubeconfig_parsed.current_context
    );

    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| {
                HelperError::KubeconfigError(format!("Failed to create config: {}", e))
            })?;

    Client::try_from(client_config)
        .map_err(|e| HelperError::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// Create a client from the environment (`KUBECONFIG`, `~/.kube/config` or
/// the in-cluster service account)
pub async fn infer_client() -> Result<Client> {
    Ok(Client::try_default().await?)
}
