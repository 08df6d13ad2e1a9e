// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API version used when a reference is built without an explicit one
pub const EVENTING_API_VERSION: &str = "eventing.knative.dev/v1alpha1";

/// Condition type that marks a resource as ready
pub const CONDITION_READY: &str = "Ready";

/// Readiness polling configuration
pub mod poll {
    /// Delay between two readiness checks in seconds
    pub const INTERVAL_SECS: u64 = 1;
    /// Maximum time to wait for a resource in seconds
    pub const TIMEOUT_SECS: u64 = 240;
}

/// Logging ConfigMap layout
pub mod logging {
    /// Environment variable holding the name of the logging ConfigMap
    pub const CONFIG_MAP_NAME_ENV: &str = "CONFIG_LOGGING_NAME";
    /// Key holding the logger configuration JSON
    pub const LOGGER_CONFIG_KEY: &str = "zap-logger-config";
    /// Prefix of the per-component level keys, e.g. `loglevel.controller`
    pub const LEVEL_KEY_PREFIX: &str = "loglevel.";
    /// Components that may carry their own level
    pub const COMPONENTS: &[&str] = &["controller", "webhook"];
}
