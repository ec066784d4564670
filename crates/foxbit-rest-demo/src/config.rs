/*
[INPUT]:  Values parsed from the command line
[OUTPUT]: Validated demo run parameters
[POS]:    Configuration layer - demo setup
[UPDATE]: When adding new demo options
*/

use std::time::Duration;

use anyhow::{Result, ensure};
use chrono::TimeDelta;
use rust_decimal::Decimal;

/// Parameters for one run of the order lifecycle demo
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Market symbol (e.g., "btcbrl")
    pub market: String,
    /// Base asset quantity of the limit order
    pub quantity: Decimal,
    /// Multiplier applied to the best bid; 0.9 places the order 10% below it
    pub price_factor: Decimal,
    /// Pause between placing the order and listing active orders
    pub settle_delay: Duration,
    /// How far back the active order listing looks
    pub lookback: TimeDelta,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            market: "btcbrl".to_string(),
            quantity: Decimal::new(1, 4),
            price_factor: Decimal::new(9, 1),
            settle_delay: Duration::from_millis(2000),
            lookback: TimeDelta::hours(1),
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.market.trim().is_empty(), "market symbol must not be empty");
        ensure!(
            self.quantity > Decimal::ZERO,
            "quantity must be positive, got {}",
            self.quantity
        );
        ensure!(
            self.price_factor > Decimal::ZERO && self.price_factor <= Decimal::ONE,
            "price factor must be in (0, 1], got {}",
            self.price_factor
        );
        ensure!(self.lookback > TimeDelta::zero(), "lookback must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DemoConfig::default();
        assert_eq!(config.quantity.to_string(), "0.0001");
        assert_eq!(config.price_factor.to_string(), "0.9");
        assert_eq!(config.settle_delay, Duration::from_secs(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_price_factor_bounds() {
        let mut config = DemoConfig {
            price_factor: Decimal::ONE,
            ..DemoConfig::default()
        };
        assert!(config.validate().is_ok());

        config.price_factor = Decimal::ZERO;
        assert!(config.validate().is_err());

        config.price_factor = Decimal::new(11, 1);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("price factor"));
    }

    #[test]
    fn test_rejects_empty_market_and_zero_quantity() {
        let config = DemoConfig {
            market: " ".to_string(),
            ..DemoConfig::default()
        };
        assert!(config.validate().is_err());

        let config = DemoConfig {
            quantity: Decimal::ZERO,
            ..DemoConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
