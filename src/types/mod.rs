// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Constant values accepted by the resource helpers.

pub mod restart_policy;
pub mod service;

pub use restart_policy::RestartPolicy;
pub use service::{ServiceProtocol, ServiceType};
