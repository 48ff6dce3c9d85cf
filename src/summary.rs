use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::Schedule;

/// lifetime totals of a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub financed_amount: Money,
    pub total_interest: Money,
    pub total_payable: Money,
}

pub struct SummaryAggregator;

impl SummaryAggregator {
    pub fn aggregate(financed_amount: Money, schedule: &Schedule) -> Totals {
        Totals {
            financed_amount,
            total_interest: schedule.total_interest,
            total_payable: financed_amount + schedule.total_interest,
        }
    }
}

/// affordability verdict for one representative installment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affordability {
    /// representative installment as a percentage of gross monthly income
    pub income_commitment_ratio: Decimal,
    /// largest installment the income supports under the threshold
    pub max_affordable_installment: Money,
    pub approved: bool,
}

pub struct AffordabilityEvaluator {
    threshold_percent: Decimal,
}

impl AffordabilityEvaluator {
    pub fn new(threshold_percent: Decimal) -> Self {
        Self { threshold_percent }
    }

    /// approve when the installment takes no more than the threshold share of income
    pub fn evaluate(&self, installment: Money, gross_monthly_income: Money) -> Affordability {
        let income_commitment_ratio = installment.percent_of(gross_monthly_income);
        Affordability {
            income_commitment_ratio,
            max_affordable_installment: gross_monthly_income.percentage(self.threshold_percent),
            approved: income_commitment_ratio <= self.threshold_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{SacCalculator, ScheduleCalculator};
    use crate::decimal::Rate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_payable_is_principal_plus_interest() {
        let principal = Money::from_major(12_000);
        let schedule = SacCalculator.build(principal, Rate::from_decimal(dec!(0.01)), 12);

        let totals = SummaryAggregator::aggregate(principal, &schedule);
        assert_eq!(totals.total_interest, Money::from_major(780));
        assert_eq!(totals.total_payable, Money::from_major(12_780));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let evaluator = AffordabilityEvaluator::new(dec!(30));
        let verdict = evaluator.evaluate(Money::from_major(2_400), Money::from_major(8_000));

        assert_eq!(verdict.income_commitment_ratio, dec!(30));
        assert_eq!(verdict.max_affordable_installment, Money::from_major(2_400));
        assert!(verdict.approved);
    }

    #[test]
    fn test_over_threshold_is_rejected() {
        let evaluator = AffordabilityEvaluator::new(dec!(30));
        let verdict = evaluator.evaluate(Money::from_cents(240_001), Money::from_major(8_000));
        assert!(!verdict.approved);
    }

    #[test]
    fn test_zero_installment_is_approved() {
        let evaluator = AffordabilityEvaluator::new(dec!(30));
        let verdict = evaluator.evaluate(Money::ZERO, Money::from_major(1_000));
        assert_eq!(verdict.income_commitment_ratio, Decimal::ZERO);
        assert!(verdict.approved);
    }
}
