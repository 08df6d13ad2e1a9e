// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Duck-typed status shape shared by eventing resources.

use crate::constants::CONDITION_READY;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Condition {
    pub fn is_true(&self) -> bool {
        self.status == "True"
    }
}

/// The `status` block of any resource following the duck shape.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DuckStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// Readiness as observed on a single lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadinessStatus {
    found: bool,
    ready_condition: Option<Condition>,
}

impl ReadinessStatus {
    /// Status of an object that does not exist (yet)
    pub fn absent() -> Self {
        Self {
            found: false,
            ready_condition: None,
        }
    }

    /// Project a fetched condition list onto its Ready condition
    pub fn from_conditions(conditions: &[Condition]) -> Self {
        Self {
            found: true,
            ready_condition: conditions
                .iter()
                .find(|c| c.condition_type == CONDITION_READY)
                .cloned(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    pub fn ready_condition(&self) -> Option<&Condition> {
        self.ready_condition.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.found && self.ready_condition.as_ref().is_some_and(Condition::is_true)
    }
}
