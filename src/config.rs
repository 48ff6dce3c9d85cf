use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SimulationError};

/// longest term any policy may allow; keeps a schedule at 420 rows or fewer
pub const TERM_YEARS_CEILING: u32 = 35;

/// highest nominal annual rate any policy may allow, in percent
pub const ANNUAL_RATE_PERCENT_CEILING: Decimal = Decimal::ONE_HUNDRED;

/// policy bounds and affordability cutoff applied by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationPolicy {
    /// maximum share of gross monthly income the representative installment may take, in percent
    pub approval_threshold_percent: Decimal,
    pub min_term_years: u32,
    pub max_term_years: u32,
    pub max_annual_rate_percent: Decimal,
}

impl Default for SimulationPolicy {
    fn default() -> Self {
        Self {
            approval_threshold_percent: dec!(30.0),
            min_term_years: 1,
            max_term_years: TERM_YEARS_CEILING,
            max_annual_rate_percent: ANNUAL_RATE_PERCENT_CEILING,
        }
    }
}

impl SimulationPolicy {
    /// stricter affordability cutoff used for riskier credit profiles
    pub fn conservative() -> Self {
        Self {
            approval_threshold_percent: dec!(25.0),
            ..Self::default()
        }
    }

    /// load a policy from json; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: SimulationPolicy =
            serde_json::from_str(json).map_err(|e| SimulationError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// check the policy is internally consistent
    pub fn validate(&self) -> Result<()> {
        if self.min_term_years == 0 {
            return Err(SimulationError::InvalidConfiguration {
                message: "minimum term must be at least 1 year".to_string(),
            });
        }

        if self.min_term_years > self.max_term_years {
            return Err(SimulationError::InvalidConfiguration {
                message: format!(
                    "minimum term {} exceeds maximum term {}",
                    self.min_term_years, self.max_term_years
                ),
            });
        }

        if self.max_term_years > TERM_YEARS_CEILING {
            return Err(SimulationError::InvalidConfiguration {
                message: format!(
                    "maximum term {} exceeds the {} year ceiling",
                    self.max_term_years, TERM_YEARS_CEILING
                ),
            });
        }

        if self.approval_threshold_percent <= Decimal::ZERO
            || self.approval_threshold_percent > Decimal::ONE_HUNDRED
        {
            return Err(SimulationError::InvalidConfiguration {
                message: format!(
                    "approval threshold {}% not within (0, 100]",
                    self.approval_threshold_percent
                ),
            });
        }

        if self.max_annual_rate_percent < Decimal::ZERO
            || self.max_annual_rate_percent > ANNUAL_RATE_PERCENT_CEILING
        {
            return Err(SimulationError::InvalidConfiguration {
                message: format!(
                    "maximum annual rate {}% not within [0, {}]",
                    self.max_annual_rate_percent, ANNUAL_RATE_PERCENT_CEILING
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_policy() {
        let policy = SimulationPolicy::default();
        assert_eq!(policy.approval_threshold_percent, dec!(30));
        assert_eq!(policy.min_term_years, 1);
        assert_eq!(policy.max_term_years, 35);
        assert_eq!(policy.max_annual_rate_percent, dec!(100));
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let policy = SimulationPolicy::from_json(r#"{"approval_threshold_percent": "35"}"#).unwrap();
        assert_eq!(
            policy,
            SimulationPolicy {
                approval_threshold_percent: dec!(35),
                ..SimulationPolicy::default()
            }
        );
    }

    #[test]
    fn test_from_json_rejects_inverted_term_bounds() {
        let result = SimulationPolicy::from_json(r#"{"min_term_years": 10, "max_term_years": 5}"#);
        assert!(matches!(result, Err(SimulationError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = SimulationPolicy::from_json("{ not json");
        assert!(matches!(result, Err(SimulationError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_bounds_above_ceiling_are_rejected() {
        let long_term = SimulationPolicy {
            max_term_years: 80,
            ..SimulationPolicy::default()
        };
        assert!(matches!(long_term.validate(), Err(SimulationError::InvalidConfiguration { .. })));

        let unbounded_term = SimulationPolicy {
            max_term_years: u32::MAX,
            ..SimulationPolicy::default()
        };
        assert!(unbounded_term.validate().is_err());

        let usurious = SimulationPolicy {
            max_annual_rate_percent: dec!(500),
            ..SimulationPolicy::default()
        };
        assert!(usurious.validate().is_err());

        let at_ceiling = SimulationPolicy {
            max_term_years: TERM_YEARS_CEILING,
            max_annual_rate_percent: ANNUAL_RATE_PERCENT_CEILING,
            ..SimulationPolicy::default()
        };
        assert!(at_ceiling.validate().is_ok());
    }

    #[test]
    fn test_threshold_bounds() {
        let zero = SimulationPolicy {
            approval_threshold_percent: Decimal::ZERO,
            ..SimulationPolicy::default()
        };
        assert!(zero.validate().is_err());

        assert!(SimulationPolicy::conservative().validate().is_ok());
    }

    #[test]
    fn test_json_round_trip_keeps_policy() {
        let policy = SimulationPolicy::conservative();
        let json = policy.to_json_pretty().unwrap();
        assert_eq!(SimulationPolicy::from_json(&json).unwrap(), policy);
    }
}
