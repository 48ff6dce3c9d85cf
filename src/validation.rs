use rust_decimal::Decimal;
use tracing::warn;

use crate::config::SimulationPolicy;
use crate::decimal::Money;
use crate::errors::{Result, SimulationError};
use crate::types::SimulationInput;

/// bounds-checks a simulation input against a policy before any computation
pub struct InputValidator<'a> {
    policy: &'a SimulationPolicy,
}

impl<'a> InputValidator<'a> {
    pub fn new(policy: &'a SimulationPolicy) -> Self {
        Self { policy }
    }

    /// Returns the first violated constraint, checked in field order.
    pub fn validate(&self, input: &SimulationInput) -> Result<()> {
        let result = self.check(input);
        if let Err(err) = &result {
            warn!(field = err.field().unwrap_or("unknown"), error = %err, "rejected simulation input");
        }
        result
    }

    fn check(&self, input: &SimulationInput) -> Result<()> {
        if !input.property_value.is_positive() {
            return Err(SimulationError::NonPositivePropertyValue {
                value: input.property_value,
            });
        }
        ensure_within_ceiling("property_value", input.property_value)?;

        if input.down_payment.is_negative() || input.down_payment > input.property_value {
            return Err(SimulationError::DownPaymentOutOfRange {
                down_payment: input.down_payment,
                property_value: input.property_value,
            });
        }

        let (min, max) = (self.policy.min_term_years, self.policy.max_term_years);
        if input.term_years < min || input.term_years > max {
            return Err(SimulationError::TermOutOfRange {
                years: input.term_years,
                min,
                max,
            });
        }

        let rate = input.annual_interest_rate_percent;
        if rate < Decimal::ZERO || rate > self.policy.max_annual_rate_percent {
            return Err(SimulationError::RateOutOfRange {
                percent: rate,
                max: self.policy.max_annual_rate_percent,
            });
        }

        if !input.gross_monthly_income.is_positive() {
            return Err(SimulationError::NonPositiveIncome {
                value: input.gross_monthly_income,
            });
        }
        ensure_within_ceiling("gross_monthly_income", input.gross_monthly_income)?;

        Ok(())
    }
}

fn ensure_within_ceiling(field: &'static str, value: Money) -> Result<()> {
    if value > Money::MAX_INPUT {
        return Err(SimulationError::AmountTooLarge {
            field,
            value,
            max: Money::MAX_INPUT,
        });
    }
    Ok(())
}
