// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to parse kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Wait failed: {0}")]
    WaitError(#[from] kube::runtime::wait::Error),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Timed out waiting for {0}")]
    Timeout(String),

    #[error("Object has no metadata.name: {0}")]
    MissingName(String),

    #[error("Log watch ended abnormally: {0}")]
    LogWatchClosed(String),

    #[error("Container not found: {0}")]
    ContainerNotFound(String),
}

pub type Result<T> = std::result::Result<T, HelperError>;
