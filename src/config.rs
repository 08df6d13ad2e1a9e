// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{logging::CONFIG_MAP_NAME_ENV, poll, EVENTING_API_VERSION};
use crate::readiness::PollSettings;
use crate::types::ResourceReference;
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

const DEFAULT_SYSTEM_NAMESPACE: &str = "knative-eventing";

/// Configuration of the readiness waiter loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Resource to wait for
    pub target: ResourceReference,
    pub poll: PollSettings,
    /// Name of the logging ConfigMap, if logging should follow it
    pub logging_config_map: Option<String>,
    /// Namespace holding the logging ConfigMap
    pub system_namespace: String,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = lookup("RESOURCE_NAME").context("RESOURCE_NAME environment variable not set")?;
        let namespace = lookup("RESOURCE_NAMESPACE")
            .context("RESOURCE_NAMESPACE environment variable not set")?;
        let kind = lookup("RESOURCE_KIND").context("RESOURCE_KIND environment variable not set")?;
        let api_version =
            lookup("RESOURCE_API_VERSION").unwrap_or_else(|| EVENTING_API_VERSION.to_string());

        let target = ResourceReference::new(&name, &namespace, &api_version, &kind);
        target.validate()?;

        let interval = parse_secs(&lookup, "POLL_INTERVAL_SECS", poll::INTERVAL_SECS)?;
        let timeout = parse_secs(&lookup, "POLL_TIMEOUT_SECS", poll::TIMEOUT_SECS)?;
        let poll = PollSettings::new(interval, timeout);
        poll.validate()?;

        Ok(Config {
            target,
            poll,
            logging_config_map: lookup(CONFIG_MAP_NAME_ENV).filter(|n| !n.is_empty()),
            system_namespace: lookup("SYSTEM_NAMESPACE")
                .unwrap_or_else(|| DEFAULT_SYSTEM_NAMESPACE.to_string()),
            log_level: lookup("LOG_LEVEL").filter(|l| !l.is_empty()),
        })
    }
}

fn parse_secs<F>(lookup: &F, key: &str, default: u64) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let secs = match lookup(key) {
        Some(value) => value
            .parse()
            .with_context(|| format!("{} must be a whole number of seconds, got '{}'", key, value))?,
        None => default,
    };
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("RESOURCE_NAME", "default"),
        ("RESOURCE_NAMESPACE", "ns1"),
        ("RESOURCE_KIND", "Broker"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();

        assert_eq!(config.target, ResourceReference::meta("default", "ns1", "Broker"));
        assert_eq!(config.poll, PollSettings::default());
        assert_eq!(config.logging_config_map, None);
        assert_eq!(config.system_namespace, "knative-eventing");
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("RESOURCE_API_VERSION", "v1"),
            ("POLL_INTERVAL_SECS", "2"),
            ("POLL_TIMEOUT_SECS", "30"),
            ("CONFIG_LOGGING_NAME", "config-logging"),
            ("SYSTEM_NAMESPACE", "eventing-system"),
            ("LOG_LEVEL", "debug"),
        ]);

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.target.api_version(), "v1");
        assert_eq!(config.poll.interval, Duration::from_secs(2));
        assert_eq!(config.poll.timeout, Duration::from_secs(30));
        assert_eq!(config.logging_config_map.as_deref(), Some("config-logging"));
        assert_eq!(config.system_namespace, "eventing-system");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_missing_name() {
        let err = Config::from_lookup(lookup(&REQUIRED[1..])).unwrap_err();
        assert!(err.to_string().contains("RESOURCE_NAME"));
    }

    #[test]
    fn test_invalid_interval() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("POLL_INTERVAL_SECS", "soon"));

        let err = Config::from_lookup(lookup(&vars)).unwrap_err();

        assert!(err.to_string().contains("POLL_INTERVAL_SECS"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("POLL_TIMEOUT_SECS", "0"));

        assert!(Config::from_lookup(lookup(&vars)).is_err());
    }
}
