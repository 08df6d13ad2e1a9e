// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::EVENTING_API_VERSION;
use crate::error::{Result, TestkitError};
use kube::core::{ApiResource, GroupVersion, GroupVersionKind};
use std::fmt;

/// Identifies a single namespaced object by kind, namespace and name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceReference {
    name: String,
    namespace: String,
    api_version: String,
    kind: String,
}

impl ResourceReference {
    pub fn new(name: &str, namespace: &str, api_version: &str, kind: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            api_version: api_version.to_string(),
            kind: kind.to_string(),
        }
    }

    /// Reference to an eventing resource in the default eventing API version
    pub fn meta(name: &str, namespace: &str, kind: &str) -> Self {
        Self::new(name, namespace, EVENTING_API_VERSION, kind)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Check that the reference can be resolved against the API server
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(TestkitError::InvalidReference(format!(
                "{}: name must not be empty",
                self
            )));
        }
        if self.namespace.is_empty() {
            return Err(TestkitError::InvalidReference(format!(
                "{}: namespace must not be empty",
                self
            )));
        }
        if self.kind.is_empty() {
            return Err(TestkitError::InvalidReference(format!(
                "{}: kind must not be empty",
                self
            )));
        }
        self.group_version_kind().map(|_| ())
    }

    pub fn group_version_kind(&self) -> Result<GroupVersionKind> {
        let gv: GroupVersion = self.api_version.parse().map_err(|e| {
            TestkitError::InvalidReference(format!(
                "invalid apiVersion '{}': {}",
                self.api_version, e
            ))
        })?;
        if gv.version.is_empty() || gv.version.contains('/') {
            return Err(TestkitError::InvalidReference(format!(
                "invalid apiVersion '{}'",
                self.api_version
            )));
        }
        Ok(gv.with_kind(&self.kind))
    }

    /// API resource with a plural name guessed from the kind
    pub fn api_resource(&self) -> Result<ApiResource> {
        Ok(ApiResource::from_gvk(&self.group_version_kind()?))
    }

    /// Name under which the time spent waiting on this resource is reported
    pub fn metric_name(&self) -> String {
        format!("WaitForResourceReady/{}", self.name)
    }
}

impl fmt::Display for ResourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {}/{}",
            self.api_version, self.kind, self.namespace, self.name
        )
    }
}
