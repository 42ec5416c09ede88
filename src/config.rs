// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as vars, DEFAULT_KUBECONFIG_FILE, DEFAULT_NAMESPACE};
use anyhow::{bail, Result};
use std::env;
use std::path::PathBuf;

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Kubeconfig file used to build the client
    pub kubeconfig_path: PathBuf,
    /// Namespace inspected by the inventory
    pub namespace: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let kubeconfig_path = lookup(vars::KUBECONFIG_FILE)
            .unwrap_or_else(|| DEFAULT_KUBECONFIG_FILE.to_string())
            .into();
        let namespace =
            lookup(vars::NAMESPACE).unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        if namespace.trim().is_empty() {
            bail!("{} must not be empty", vars::NAMESPACE);
        }

        Ok(Config {
            kubeconfig_path,
            namespace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.kubeconfig_path, PathBuf::from("./client-config"));
        assert_eq!(config.namespace, "default");
    }

    #[test]
    fn test_values_from_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("HELPERS_KUBECONFIG", "/etc/kube/config"),
            ("HELPERS_NAMESPACE", "apps"),
        ]))
        .unwrap();
        assert_eq!(config.kubeconfig_path, PathBuf::from("/etc/kube/config"));
        assert_eq!(config.namespace, "apps");
    }

    #[test]
    fn test_empty_namespace_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("HELPERS_NAMESPACE", " ")])).is_err());
    }
}
