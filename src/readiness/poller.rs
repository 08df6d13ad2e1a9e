// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fixed-interval readiness polling with an absolute deadline.

use super::StatusFetcher;
use crate::constants::poll::{INTERVAL_SECS, TIMEOUT_SECS};
use crate::error::{Result, TestkitError};
use crate::types::{ReadinessStatus, ResourceReference};
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, info_span, warn, Instrument};

/// How often to check and how long to keep trying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub interval: Duration,
    pub timeout: Duration,
}

impl PollSettings {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(TestkitError::InvalidPollSettings(
                "interval must be greater than zero".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(TestkitError::InvalidPollSettings(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(INTERVAL_SECS),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        }
    }
}

/// Where a wait stands after a single readiness check.
///
/// `Polling` is the only non-terminal state; every other state ends the wait.
#[derive(Debug)]
pub enum PollState {
    Polling,
    Ready,
    Failed(TestkitError),
    TimedOut,
}

impl PollState {
    /// Compute the next state from the outcome of a check made at `now`.
    ///
    /// An absent object arrives here as a not-ready status, so it keeps
    /// polling until the deadline.
    pub fn advance(check: Result<ReadinessStatus>, now: Instant, deadline: Instant) -> Self {
        match check {
            Ok(status) if status.is_ready() => PollState::Ready,
            Err(e) => PollState::Failed(e),
            Ok(_) if now >= deadline => PollState::TimedOut,
            Ok(_) => PollState::Polling,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, PollState::Polling)
    }
}

/// Blocks until a referenced resource reports Ready, fails, or times out.
pub struct ReadinessPoller<F> {
    fetcher: F,
    settings: PollSettings,
}

impl<F: StatusFetcher> ReadinessPoller<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_settings(fetcher, PollSettings::default())
    }

    pub fn with_settings(fetcher: F, settings: PollSettings) -> Self {
        Self { fetcher, settings }
    }

    pub fn settings(&self) -> &PollSettings {
        &self.settings
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch the current status once and project its Ready condition
    pub async fn check_ready(&self, reference: &ResourceReference) -> Result<ReadinessStatus> {
        match self.fetcher.fetch_status(reference).await? {
            Some(conditions) => Ok(ReadinessStatus::from_conditions(&conditions)),
            None => {
                debug!("{} not found yet", reference);
                Ok(ReadinessStatus::absent())
            }
        }
    }

    /// Wait for the resource to become ready.
    ///
    /// The first check happens immediately, later ones every
    /// `settings.interval` until `settings.timeout` has passed since the call
    /// started. Lookup errors other than "not found" end the wait at once.
    pub async fn wait_until_ready(&self, reference: &ResourceReference) -> Result<()> {
        let span = info_span!(
            "wait_for_resource_ready",
            metric = %reference.metric_name(),
            resource = %reference
        );
        self.poll(reference).instrument(span).await
    }

    async fn poll(&self, reference: &ResourceReference) -> Result<()> {
        reference.validate()?;
        self.settings.validate()?;

        let start = Instant::now();
        let deadline = start + self.settings.timeout;
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            let check = self.check_ready(reference).await;
            let now = Instant::now();

            match PollState::advance(check, now, deadline) {
                PollState::Ready => {
                    info!(
                        attempts,
                        elapsed_ms = now.duration_since(start).as_millis() as u64,
                        "{} is ready",
                        reference
                    );
                    return Ok(());
                }
                PollState::Failed(e) => {
                    warn!(attempts, "Stopped waiting for {}: {}", reference, e);
                    return Err(e);
                }
                PollState::TimedOut => {
                    warn!(
                        attempts,
                        "{} did not become ready within {:?}",
                        reference,
                        self.settings.timeout
                    );
                    return Err(TestkitError::ResourceNotReady {
                        resource: reference.to_string(),
                        timeout: self.settings.timeout,
                    });
                }
                PollState::Polling => {
                    let delay = self.settings.interval.min(deadline - now);
                    debug!(attempts, "{} not ready, checking again in {:?}", reference, delay);
                    sleep(delay).await;
                }
            }
        }
    }
}
