// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes-backed implementations of the readiness lookups.

pub mod status;

pub use status::DynamicStatusFetcher;
