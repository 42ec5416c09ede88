// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubeconfig file read when no other location is configured
pub const DEFAULT_KUBECONFIG_FILE: &str = "./client-config";

/// Namespace the inventory binary looks at when none is configured
pub const DEFAULT_NAMESPACE: &str = "default";

/// Environment variables read by [`crate::config::Config`]
pub mod env {
    pub const KUBECONFIG_FILE: &str = "HELPERS_KUBECONFIG";
    pub const NAMESPACE: &str = "HELPERS_NAMESPACE";
}

/// API version stamped on batch objects built by the job helpers
pub const API_BATCH_VERSION_V1: &str = "batch/v1";

/// Metadata fields filled in by the API server, dropped from YAML dumps
/// that exclude runtime state
pub const RUNTIME_METADATA_FIELDS: &[&str] = &[
    "creationTimestamp",
    "deletionGracePeriodSeconds",
    "deletionTimestamp",
    "generation",
    "managedFields",
    "resourceVersion",
    "selfLink",
    "uid",
];
