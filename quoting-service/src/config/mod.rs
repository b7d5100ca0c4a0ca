//! Configuration module for quoting-service.

use rust_decimal::Decimal;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

use crate::services::index::CollisionPolicy;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
    pub pricing: PricingConfig,
    pub matching: MatchingConfig,
}

#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// VAT rate in percent applied on document totals.
    pub vat_rate_percent: Decimal,
}

#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// How the catalog index resolves duplicate spec keys.
    pub spec_collision: CollisionPolicy,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let vat_rate_percent = env::var("VAT_RATE_PERCENT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Decimal::TEN);
        if vat_rate_percent < Decimal::ZERO || vat_rate_percent > Decimal::ONE_HUNDRED {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "VAT_RATE_PERCENT must be between 0 and 100, got {}",
                vat_rate_percent
            )));
        }

        let spec_collision = match env::var("SPEC_COLLISION_POLICY") {
            Ok(value) => match value.as_str() {
                "keep_first" => CollisionPolicy::KeepFirst,
                "keep_last" => CollisionPolicy::KeepLast,
                other => {
                    return Err(AppError::ConfigError(anyhow::anyhow!(
                        "unknown SPEC_COLLISION_POLICY: {}",
                        other
                    )))
                }
            },
            Err(_) => CollisionPolicy::default(),
        };

        Ok(Self {
            common,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "quoting-service".to_string()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            pricing: PricingConfig { vat_rate_percent },
            matching: MatchingConfig { spec_collision },
        })
    }
}
