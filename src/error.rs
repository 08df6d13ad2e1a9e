// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestkitError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to decode resource status: {0}")]
    StatusDecodeError(String),

    #[error("Invalid resource reference: {0}")]
    InvalidReference(String),

    #[error("Invalid poll settings: {0}")]
    InvalidPollSettings(String),

    #[error("Resource {resource} not ready after {timeout:?}")]
    ResourceNotReady { resource: String, timeout: Duration },

    #[error("Invalid logging configuration: {0}")]
    LoggingConfigError(String),
}

impl TestkitError {
    /// True when polling gave up because the deadline passed
    pub fn is_timeout(&self) -> bool {
        matches!(self, TestkitError::ResourceNotReady { .. })
    }
}

pub type Result<T> = std::result::Result<T, TestkitError>;
