// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! One helper per resource kind, each wrapping a shared client.

pub mod common;
pub mod configmap;
pub mod cronjob;
pub mod deployment;
pub mod job;
pub mod namespace;
pub mod pod;
pub mod secret;
pub mod service;

pub use configmap::ConfigMapHelper;
pub use cronjob::CronJobHelper;
pub use deployment::DeploymentHelper;
pub use job::JobHelper;
pub use namespace::NamespaceHelper;
pub use pod::{LogWatch, PodHelper};
pub use secret::SecretHelper;
pub use service::ServiceHelper;
