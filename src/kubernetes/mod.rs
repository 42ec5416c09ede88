// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation and waiting on object conditions.

pub mod client;
pub mod wait;

pub use client::{client_from_kubeconfig, configured_client_from_file, infer_client};
pub use wait::{wait_for, wait_for_object};
