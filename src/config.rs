use std::{env, fmt::Display, str::FromStr};

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::common::errors::DomainError;
use crate::common::simple_types::{Money, TaxRate};

const DEFAULT_DELIVERY_FEE: &str = "5.00";
const DEFAULT_TAX_RATE: &str = "0.08";

/// Pricing constants applied to every cart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingConfig {
    pub delivery_fee: Money,
    pub tax_rate: TaxRate,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            delivery_fee: Money::new(Decimal::new(500, 2)),
            tax_rate: TaxRate::from_basis_points(800).unwrap_or_default(),
        }
    }
}

impl PricingConfig {
    /// Reads `DELIVERY_FEE` and `TAX_RATE` from the environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`PricingConfig::load`] but with an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            delivery_fee: try_load(&lookup, "DELIVERY_FEE", DEFAULT_DELIVERY_FEE, parse_fee)
                .unwrap_or(defaults.delivery_fee),
            tax_rate: try_load(&lookup, "TAX_RATE", DEFAULT_TAX_RATE, parse_tax_rate)
                .unwrap_or(defaults.tax_rate),
        }
    }
}

fn parse_fee(raw: &str) -> Result<Money, DomainError> {
    let value = parse_decimal(raw)?;
    if value < Decimal::ZERO {
        return Err(DomainError::invalid(format!(
            "delivery fee must not be negative, got {value}"
        )));
    }
    Ok(Money::new(value))
}

fn parse_tax_rate(raw: &str) -> Result<TaxRate, DomainError> {
    TaxRate::new(parse_decimal(raw)?)
}

fn parse_decimal(raw: &str) -> Result<Decimal, DomainError> {
    Decimal::from_str(raw.trim()).map_err(|e| DomainError::invalid(e.to_string()))
}

fn try_load<T, E: Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
    parse: impl Fn(&str) -> Result<T, E>,
) -> Option<T> {
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    parse(&raw)
        .map_err(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        assert_eq!(
            PricingConfig::from_lookup(lookup_from(&[])),
            PricingConfig::default()
        );
    }

    #[test]
    fn reads_overrides() {
        let config =
            PricingConfig::from_lookup(lookup_from(&[("DELIVERY_FEE", "3.50"), ("TAX_RATE", "0.1")]));

        assert_eq!(config.delivery_fee.value(), Decimal::new(350, 2));
        assert_eq!(config.tax_rate.value(), Decimal::new(1, 1));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config =
            PricingConfig::from_lookup(lookup_from(&[("DELIVERY_FEE", "-1"), ("TAX_RATE", "lots")]));

        assert_eq!(config, PricingConfig::default());
    }
}
