// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Logger construction and runtime level changes

use super::config::{parse_level, Encoding, LoggerSettings, LoggingConfig};
use crate::error::{Result, TestkitError};
use k8s_openapi::api::core::v1::ConfigMap;
use tracing::{debug, error, info, Dispatch, Level};
use tracing_subscriber::{
    filter::LevelFilter, fmt, prelude::*, reload, Registry,
};

/// Changes the level of a logger after it has been built.
#[derive(Clone)]
pub struct LevelHandle {
    inner: reload::Handle<LevelFilter, Registry>,
}

impl LevelHandle {
    /// Current level, `None` when everything is filtered out
    pub fn level(&self) -> Option<Level> {
        self.inner.clone_current().and_then(LevelFilter::into_level)
    }

    pub fn set_level(&self, level: Level) -> Result<()> {
        self.inner
            .reload(LevelFilter::from_level(level))
            .map_err(|e| TestkitError::LoggingConfigError(e.to_string()))
    }
}

/// A subscriber together with the handle that controls its level.
pub struct Logger {
    name: String,
    dispatch: Dispatch,
    level: LevelHandle,
}

impl Logger {
    fn build(name: &str, settings: LoggerSettings) -> Self {
        let (filter, handle) = reload::Layer::new(LevelFilter::from_level(settings.level));
        let fmt_layer = match settings.encoding {
            Encoding::Json => fmt::layer().json().boxed(),
            Encoding::Console => fmt::layer().boxed(),
        };
        let subscriber = Registry::default().with(filter).with(fmt_layer);

        Self {
            name: name.to_string(),
            dispatch: Dispatch::new(subscriber),
            level: LevelHandle { inner: handle },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a segment to the logger name, dot separated
    pub fn named(mut self, name: &str) -> Self {
        self.name = if self.name.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.name, name)
        };
        self
    }

    pub fn level_handle(&self) -> &LevelHandle {
        &self.level
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Make this logger the process-wide default
    pub fn install(&self) -> Result<()> {
        tracing::dispatcher::set_global_default(self.dispatch.clone())
            .map_err(|e| TestkitError::LoggingConfigError(e.to_string()))
    }

    /// Run `f` with this logger as the default of the current thread
    pub fn with_default<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

/// Create a logger from a logger configuration JSON.
///
/// A non-empty, valid `level_override` replaces the configured level. When
/// the configuration is empty or cannot be used, a fallback logger with the
/// default settings is returned instead.
pub fn new_logger(config_json: &str, level_override: &str) -> Logger {
    let override_level = if level_override.is_empty() {
        None
    } else {
        parse_level(level_override).ok()
    };

    match LoggerSettings::parse(config_json) {
        Ok(mut settings) => {
            if let Some(level) = override_level {
                settings.level = level;
            }
            debug!("Logging level set to {}", settings.level);
            Logger::build("", settings)
        }
        Err(e) => {
            debug!("Using fallback logger: {}", e);
            let mut settings = LoggerSettings::default();
            if let Some(level) = override_level {
                settings.level = level;
            }
            Logger::build("fallback", settings)
        }
    }
}

/// Create a logger for a component, honoring its configured level
pub fn new_logger_from_config(config: &LoggingConfig, component: &str) -> Logger {
    let level = config
        .level_for(component)
        .map(|l| l.as_str().to_lowercase())
        .unwrap_or_default();
    new_logger(&config.logger_config, &level).named(component)
}

/// Returns a callback that applies the level of `level_key` from each
/// ConfigMap it is given.
///
/// A component without an explicit level falls back to info. A ConfigMap that
/// fails to parse is logged and leaves the level untouched.
pub fn update_level_from_config_map(
    handle: LevelHandle,
    level_key: &str,
) -> impl Fn(&ConfigMap) + Send + Sync + 'static {
    let level_key = level_key.to_string();
    move |config_map: &ConfigMap| {
        let config = match LoggingConfig::from_config_map(config_map) {
            Ok(config) => config,
            Err(e) => {
                error!(
                    "Failed to parse the logging ConfigMap, keeping the previous level: {}",
                    e
                );
                return;
            }
        };

        let level = config.level_for(&level_key).unwrap_or(Level::INFO);
        let current = handle.level();
        if current != Some(level) {
            info!(
                "Updating logging level for {} from {:?} to {}",
                level_key, current, level
            );
            if let Err(e) = handle.set_level(level) {
                error!("Failed to update logging level for {}: {}", level_key, e);
            }
        }
    }
}
