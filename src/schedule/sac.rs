use rust_decimal::Decimal;
use tracing::debug;

use crate::decimal::{Money, Rate};
use crate::schedule::ScheduleCalculator;
use crate::types::{InstallmentRow, Schedule};

/// constant amortization system: equal principal portions, interest on the remaining balance
pub struct SacCalculator;

impl ScheduleCalculator for SacCalculator {
    fn build(&self, principal: Money, monthly_rate: Rate, term_months: u32) -> Schedule {
        if principal.is_zero() || term_months == 0 {
            return Schedule::empty();
        }

        let amortization = principal / Decimal::from(term_months);

        let mut rows = Vec::with_capacity(term_months as usize);
        let mut balance = principal;
        let mut total_interest = Money::ZERO;

        for index in 1..=term_months {
            let interest = balance * monthly_rate.as_decimal();
            total_interest += interest;

            let mut ending_balance = (balance - amortization).max(Money::ZERO);
            if index == term_months {
                // the last period settles whatever sub-cent residue the split left behind
                if !ending_balance.is_zero() {
                    debug!(residue = %ending_balance, "clearing final SAC balance");
                }
                ending_balance = Money::ZERO;
            }

            rows.push(InstallmentRow::new(index, amortization, interest, ending_balance));
            balance = ending_balance;
        }

        let representative_installment = rows[0].installment_value;
        debug!(
            term_months,
            %amortization,
            first_installment = %representative_installment,
            %total_interest,
            "built SAC schedule"
        );

        Schedule {
            rows,
            representative_installment,
            total_interest,
        }
    }
}
