// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Waiting for resources to report a true Ready condition.

pub mod poller;

pub use poller::{PollSettings, PollState, ReadinessPoller};

use crate::error::Result;
use crate::types::{Condition, ResourceReference};
use std::future::Future;

/// Looks up the current conditions of a referenced object.
///
/// `Ok(None)` means the object does not exist (yet), which callers treat as
/// "not ready" rather than as a failure.
pub trait StatusFetcher {
    fn fetch_status(
        &self,
        reference: &ResourceReference,
    ) -> impl Future<Output = Result<Option<Vec<Condition>>>> + Send;
}
