//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFRONT_DATA_DIR` - Directory holding persisted state (default: .gamestore)
//! - `STOREFRONT_CART_KEY` - Storage key for the cart (default: cart)
//! - `STOREFRONT_CHECKOUT_DELAY_MS` - Simulated payment time (default: 3000)
//! - `STOREFRONT_TAX_RATE` - Tax rate as a fraction (default: 0.10)
//! - `STOREFRONT_CURRENCY` - ISO 4217 display currency (default: EUR)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use gamestore_core::CurrencyCode;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::cart::DEFAULT_CART_KEY;
use crate::checkout::CheckoutSettings;

const DEFAULT_DATA_DIR: &str = ".gamestore";
const DEFAULT_CHECKOUT_DELAY_MS: &str = "3000";
const DEFAULT_TAX_RATE: &str = "0.10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory for file-backed storage
    pub data_dir: PathBuf,
    /// Storage key holding the cart
    pub cart_key: String,
    /// How long the simulated checkout takes
    pub checkout_delay: Duration,
    /// Tax rate applied to the cart subtotal
    pub tax_rate: Decimal,
    /// Currency used when formatting amounts
    pub currency: CurrencyCode,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cart_key: DEFAULT_CART_KEY.to_string(),
            checkout_delay: Duration::from_secs(3),
            tax_rate: Decimal::new(10, 2),
            currency: CurrencyCode::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = PathBuf::from(get_env_or_default(
            &lookup,
            "STOREFRONT_DATA_DIR",
            DEFAULT_DATA_DIR,
        ));

        let cart_key = get_env_or_default(&lookup, "STOREFRONT_CART_KEY", DEFAULT_CART_KEY);
        validate_storage_key(&cart_key, "STOREFRONT_CART_KEY")?;

        let delay_ms: u64 = parse_env(
            &lookup,
            "STOREFRONT_CHECKOUT_DELAY_MS",
            DEFAULT_CHECKOUT_DELAY_MS,
        )?;

        let tax_rate: Decimal = parse_env(&lookup, "STOREFRONT_TAX_RATE", DEFAULT_TAX_RATE)?;
        if tax_rate < Decimal::ZERO || tax_rate > Decimal::ONE {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_TAX_RATE".to_string(),
                format!("must be between 0 and 1 (got {tax_rate})"),
            ));
        }

        let currency: CurrencyCode = parse_env(&lookup, "STOREFRONT_CURRENCY", "EUR")?;

        Ok(Self {
            data_dir,
            cart_key,
            checkout_delay: Duration::from_millis(delay_ms),
            tax_rate,
            currency,
        })
    }

    /// Checkout parameters derived from this configuration.
    #[must_use]
    pub const fn checkout_settings(&self) -> CheckoutSettings {
        CheckoutSettings {
            delay: self.checkout_delay,
            tax_rate: self.tax_rate,
            currency: self.currency,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(lookup, key, default)
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Storage keys become file names, so they are restricted to a safe alphabet.
fn validate_storage_key(key: &str, var_name: &str) -> Result<(), ConfigError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "may only contain letters, digits, '-' and '_'".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.cart_key, "cart");
        assert_eq!(config.checkout_delay, Duration::from_secs(3));
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("STOREFRONT_DATA_DIR", "/tmp/store"),
            ("STOREFRONT_CART_KEY", "cart_v2"),
            ("STOREFRONT_CHECKOUT_DELAY_MS", "250"),
            ("STOREFRONT_TAX_RATE", "0.22"),
            ("STOREFRONT_CURRENCY", "usd"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/store"));
        assert_eq!(config.cart_key, "cart_v2");
        assert_eq!(config.checkout_delay, Duration::from_millis(250));
        assert_eq!(config.tax_rate, Decimal::new(22, 2));
        assert_eq!(config.currency, CurrencyCode::USD);
    }

    #[test]
    fn test_invalid_delay() {
        let result =
            StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_CHECKOUT_DELAY_MS", "soon")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "STOREFRONT_CHECKOUT_DELAY_MS"
        ));
    }

    #[test]
    fn test_tax_rate_out_of_range() {
        let result = StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_TAX_RATE", "1.5")]));
        assert!(result.is_err());

        let result = StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_TAX_RATE", "-0.1")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_cart_key_must_be_file_safe() {
        let result =
            StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_CART_KEY", "../cart")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_currency() {
        let result = StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_CURRENCY", "ZZZ")]));
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid environment variable STOREFRONT_CURRENCY: unknown currency code: ZZZ"
        );
    }

    #[test]
    fn test_checkout_settings() {
        let config = StorefrontConfig::default();
        let settings = config.checkout_settings();
        assert_eq!(settings.delay, config.checkout_delay);
        assert_eq!(settings.tax_rate, config.tax_rate);
        assert_eq!(settings.currency, CurrencyCode::EUR);
    }
}
