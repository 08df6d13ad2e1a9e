// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{Api, Client};
use tracing::{info, warn};

use eventing_testkit::config::Config;
use eventing_testkit::kubernetes::DynamicStatusFetcher;
use eventing_testkit::logging::{self, DEFAULT_LOGGER_CONFIG};
use eventing_testkit::readiness::ReadinessPoller;

const LOGGING_COMPONENT: &str = "controller";

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging; the level may be refined from the ConfigMap below
    let logger = logging::new_logger(
        DEFAULT_LOGGER_CONFIG,
        config.log_level.as_deref().unwrap_or_default(),
    );
    logger.install()?;

    info!(
        "Waiting for {} (interval={:?}, timeout={:?})",
        config.target, config.poll.interval, config.poll.timeout
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;

    if let Some(name) = config.logging_config_map.as_deref() {
        let config_maps: Api<ConfigMap> = Api::namespaced(client.clone(), &config.system_namespace);
        match config_maps.get_opt(name).await {
            Ok(Some(cm)) if config.log_level.is_none() => {
                logging::update_level_from_config_map(
                    logger.level_handle().clone(),
                    LOGGING_COMPONENT,
                )(&cm);
            }
            Ok(Some(_)) => info!("LOG_LEVEL is set, ignoring levels from ConfigMap {}", name),
            Ok(None) => warn!(
                "Logging ConfigMap {}/{} not found, keeping default level",
                config.system_namespace, name
            ),
            Err(e) => warn!("Failed to read logging ConfigMap {}: {}", name, e),
        }
    }

    let poller = ReadinessPoller::with_settings(DynamicStatusFetcher::new(client), config.poll);
    poller.wait_until_ready(&config.target).await?;

    info!("{} is ready", config.target);
    Ok(())
}
