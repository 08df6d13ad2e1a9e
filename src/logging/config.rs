// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Parsing of the logging ConfigMap

use crate::constants::logging::{COMPONENTS, LEVEL_KEY_PREFIX, LOGGER_CONFIG_KEY};
use crate::error::{Result, TestkitError};
use k8s_openapi::api::core::v1::ConfigMap;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use tracing::Level;

/// Logger configuration used when the ConfigMap does not carry one
pub const DEFAULT_LOGGER_CONFIG: &str = r#"{
  "level": "info",
  "development": false,
  "outputPaths": ["stdout"],
  "errorOutputPaths": ["stderr"],
  "encoding": "json"
}"#;

/// Logging configuration as read from the logging ConfigMap
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Raw logger configuration JSON
    pub logger_config: String,
    /// Levels of the components that set one explicitly
    pub levels: BTreeMap<String, Level>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            logger_config: DEFAULT_LOGGER_CONFIG.to_string(),
            levels: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Build the configuration from ConfigMap-style data
    pub fn from_map<K, V>(data: &BTreeMap<K, V>) -> Result<Self>
    where
        K: AsRef<str> + Ord,
        V: AsRef<str>,
    {
        let data: HashMap<&str, &str> = data
            .iter()
            .map(|(k, v)| (k.as_ref(), v.as_ref()))
            .collect();

        let logger_config = data
            .get(LOGGER_CONFIG_KEY)
            .map(|c| c.to_string())
            .unwrap_or_else(|| DEFAULT_LOGGER_CONFIG.to_string());

        let mut levels = BTreeMap::new();
        for component in COMPONENTS {
            if let Some(level) = data.get(format!("{}{}", LEVEL_KEY_PREFIX, component).as_str()) {
                levels.insert(component.to_string(), parse_level(level)?);
            }
        }

        Ok(Self {
            logger_config,
            levels,
        })
    }

    pub fn from_config_map(config_map: &ConfigMap) -> Result<Self> {
        match config_map.data.as_ref() {
            Some(data) => Self::from_map(data),
            None => Ok(Self::default()),
        }
    }

    pub fn level_for(&self, component: &str) -> Option<Level> {
        self.levels.get(component).copied()
    }
}

/// Output format of a logger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Console,
}

/// The subset of a logger configuration that drives the subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerSettings {
    pub level: Level,
    pub encoding: Encoding,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            encoding: Encoding::Json,
        }
    }
}

#[derive(Deserialize)]
struct RawLoggerConfig {
    #[serde(default)]
    level: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
}

impl LoggerSettings {
    pub fn parse(config_json: &str) -> Result<Self> {
        if config_json.trim().is_empty() {
            return Err(TestkitError::LoggingConfigError(
                "empty logging configuration".to_string(),
            ));
        }

        let raw: RawLoggerConfig = serde_json::from_str(config_json)
            .map_err(|e| TestkitError::LoggingConfigError(e.to_string()))?;

        let level = match raw.level.as_deref() {
            Some(level) => parse_level(level)?,
            None => Level::INFO,
        };
        let encoding = match raw.encoding.as_deref() {
            None | Some("json") => Encoding::Json,
            Some("console") => Encoding::Console,
            Some(other) => {
                return Err(TestkitError::LoggingConfigError(format!(
                    "unknown encoding: {}",
                    other
                )))
            }
        };

        Ok(Self { level, encoding })
    }
}

/// Parse a zap-style level name; an empty string means info
pub fn parse_level(level: &str) -> Result<Level> {
    match level.trim().to_lowercase().as_str() {
        "debug" => Ok(Level::DEBUG),
        "info" | "" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" | "dpanic" | "panic" | "fatal" => Ok(Level::ERROR),
        _ => Err(TestkitError::LoggingConfigError(format!(
            "invalid logging level: {}",
            level
        ))),
    }
}
