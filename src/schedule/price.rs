use rust_decimal::Decimal;
use tracing::debug;

use crate::decimal::{Money, Rate};
use crate::interest::annuity_factor;
use crate::schedule::ScheduleCalculator;
use crate::types::{InstallmentRow, Schedule};

/// constant installment (french / annuity) system
///
/// The running balance is carried at full decimal precision and only rounded
/// when a row is written out. Any rounding inside the loop would compound at
/// `(1 + r)` per period and, for long terms at high rates, grow well past a cent.
pub struct PriceCalculator;

impl PriceCalculator {
    /// level installment for `principal` over `term_months`, at full precision
    pub fn installment(principal: Money, monthly_rate: Rate, term_months: u32) -> Decimal {
        principal.as_decimal() * annuity_factor(monthly_rate, term_months)
    }
}

impl ScheduleCalculator for PriceCalculator {
    fn build(&self, principal: Money, monthly_rate: Rate, term_months: u32) -> Schedule {
        if principal.is_zero() || term_months == 0 {
            return Schedule::empty();
        }

        let r = monthly_rate.as_decimal();
        let exact_installment = Self::installment(principal, monthly_rate, term_months);
        let installment = Money::from_decimal(exact_installment);

        let mut rows = Vec::with_capacity(term_months as usize);
        let mut balance = principal.as_decimal();
        let mut total_interest = Money::ZERO;

        for index in 1..=term_months {
            let exact_interest = balance * r;
            balance = (balance - (exact_installment - exact_interest)).max(Decimal::ZERO);
            if index == term_months {
                if !balance.is_zero() {
                    debug!(residue = %balance, "clamping final PRICE balance");
                }
                balance = Decimal::ZERO;
            }

            // the written installment is the same value on every row
            let interest = Money::from_decimal(exact_interest);
            let amortization = installment - interest;
            total_interest += interest;

            rows.push(InstallmentRow::new(
                index,
                amortization,
                interest,
                Money::from_decimal(balance),
            ));
        }

        debug!(term_months, %installment, %total_interest, "built PRICE schedule");

        Schedule {
            rows,
            representative_installment: installment,
            total_interest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::MonthlyRateConverter;
    use rust_decimal_macros::dec;

    #[test]
    fn test_level_installment() {
        let principal = Money::from_major(10_000);
        let rate = MonthlyRateConverter::from_annual_percent(dec!(12));

        let schedule = PriceCalculator.build(principal, rate, 12);
        assert_eq!(schedule.rows.len(), 12);
        assert_eq!(schedule.representative_installment.to_cents(), Money::from_cents(88_849));

        for row in &schedule.rows {
            assert_eq!(row.installment_value, schedule.representative_installment);
        }
    }

    #[test]
    fn test_growing_principal_portion() {
        let schedule = PriceCalculator.build(
            Money::from_major(10_000),
            MonthlyRateConverter::from_annual_percent(dec!(12)),
            12,
        );

        for pair in schedule.rows.windows(2) {
            assert!(pair[1].amortization_portion > pair[0].amortization_portion);
            assert!(pair[1].interest_portion < pair[0].interest_portion);
            assert!(pair[1].remaining_balance < pair[0].remaining_balance);
        }
        assert_eq!(schedule.rows[11].remaining_balance, Money::ZERO);
    }

    #[test]
    fn test_total_interest_matches_installment_total() {
        let principal = Money::from_major(240_000);
        let schedule = PriceCalculator.build(
            principal,
            MonthlyRateConverter::from_annual_percent(dec!(9.5)),
            360,
        );

        let expected = schedule.representative_installment * Decimal::from(360) - principal;
        assert!(schedule.total_interest.approx_eq(expected, Money::CENT));
        assert!(schedule.total_amortization().approx_eq(principal, Money::CENT));
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let principal = Money::from_major(12_000);
        let schedule = PriceCalculator.build(principal, Rate::ZERO, 12);

        assert_eq!(schedule.representative_installment, Money::from_major(1_000));
        assert_eq!(schedule.total_interest, Money::ZERO);
        for row in &schedule.rows {
            assert_eq!(row.amortization_portion, Money::from_major(1_000));
        }
    }

    #[test]
    fn test_extreme_rate_and_term_stay_balanced() {
        let principal = Money::from_major(1_000_000);
        let schedule = PriceCalculator.build(
            principal,
            MonthlyRateConverter::from_annual_percent(dec!(100)),
            420,
        );

        assert!(schedule.total_amortization().approx_eq(principal, Money::CENT));
        for row in &schedule.rows {
            assert!(!row.remaining_balance.is_negative());
        }
    }
}
