// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Logger setup driven by the platform's logging ConfigMap.
//!
//! Context-scoped loggers are plain `tracing` spans; this module only deals
//! with building subscribers and keeping their level in sync with the
//! ConfigMap.

pub mod config;
pub mod logger;

pub use config::{parse_level, Encoding, LoggerSettings, LoggingConfig, DEFAULT_LOGGER_CONFIG};
pub use logger::{
    new_logger, new_logger_from_config, update_level_from_config_map, LevelHandle, Logger,
};
