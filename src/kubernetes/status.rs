// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Status lookups for arbitrary resource kinds through the dynamic API

use crate::error::{Result, TestkitError};
use crate::readiness::StatusFetcher;
use crate::types::{Condition, DuckStatus, ResourceReference};
use kube::{api::DynamicObject, Api, Client};
use tracing::{debug, instrument};

/// Fetches conditions of any kind that follows the duck-typed status shape.
#[derive(Clone)]
pub struct DynamicStatusFetcher {
    client: Client,
}

impl DynamicStatusFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl StatusFetcher for DynamicStatusFetcher {
    #[instrument(skip(self, reference), fields(resource = %reference))]
    async fn fetch_status(&self, reference: &ResourceReference) -> Result<Option<Vec<Condition>>> {
        let ar = reference.api_resource()?;
        let api: Api<DynamicObject> =
            Api::namespaced_with(self.client.clone(), reference.namespace(), &ar);

        let Some(object) = api.get_opt(reference.name()).await? else {
            return Ok(None);
        };

        let Some(status) = object.data.get("status") else {
            debug!("{} has no status yet", reference);
            return Ok(Some(Vec::new()));
        };

        let status: DuckStatus = serde_json::from_value(status.clone()).map_err(|e| {
            TestkitError::StatusDecodeError(format!("status of {}: {}", reference, e))
        })?;

        Ok(Some(status.conditions))
    }
}
