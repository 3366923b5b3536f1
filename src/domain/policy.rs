//! Selection policy parameters.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Limits applied to a single trade selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Exact number of instruments to select.
    pub max_trades: usize,
    /// Upper bound on distinct known sectors among the selection.
    pub max_sectors: usize,
    /// Candidates above this volatility are never selectable.
    pub max_volatility: Decimal,
}

impl SelectionPolicy {
    pub const DEFAULT_MAX_TRADES: usize = 5;
    pub const DEFAULT_MAX_SECTORS: usize = 3;
    pub const DEFAULT_MAX_VOLATILITY: Decimal = dec!(0.3);

    #[must_use]
    pub const fn new(max_trades: usize, max_sectors: usize, max_volatility: Decimal) -> Self {
        Self {
            max_trades,
            max_sectors,
            max_volatility,
        }
    }

    /// Check that the limits describe a solvable request.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated limit.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_trades == 0 {
            return Err("max_trades must be greater than 0".into());
        }
        if self.max_sectors == 0 {
            return Err("max_sectors must be greater than 0".into());
        }
        if self.max_volatility < Decimal::ZERO {
            return Err(format!(
                "max_volatility must be non-negative, got {}",
                self.max_volatility
            ));
        }
        Ok(())
    }
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_TRADES,
            Self::DEFAULT_MAX_SECTORS,
            Self::DEFAULT_MAX_VOLATILITY,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_policy() {
        let policy = SelectionPolicy::default();
        assert_eq!(policy.max_trades, 5);
        assert_eq!(policy.max_sectors, 3);
        assert_eq!(policy.max_volatility, dec!(0.3));
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn zero_limits_are_rejected() {
        assert!(SelectionPolicy::new(0, 3, dec!(0.3)).validate().is_err());
        assert!(SelectionPolicy::new(5, 0, dec!(0.3)).validate().is_err());
    }

    #[test]
    fn negative_volatility_cap_is_rejected() {
        let err = SelectionPolicy::new(5, 3, dec!(-0.1)).validate().unwrap_err();
        assert!(err.contains("max_volatility"));
    }
}
