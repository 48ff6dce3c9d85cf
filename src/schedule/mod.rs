pub mod price;
pub mod sac;

use chrono::{Months, NaiveDate};

use crate::decimal::{Money, Rate};
use crate::types::{AmortizationSystem, InstallmentRow, Schedule};

pub use price::PriceCalculator;
pub use sac::SacCalculator;

/// builds a month-by-month repayment schedule for a principal
pub trait ScheduleCalculator {
    fn build(&self, principal: Money, monthly_rate: Rate, term_months: u32) -> Schedule;
}

/// dispatches to the calculator of the chosen amortization system
pub struct AmortizationCalculator {
    system: AmortizationSystem,
}

impl AmortizationCalculator {
    pub fn new(system: AmortizationSystem) -> Self {
        Self { system }
    }

    /// calculate full amortization schedule
    pub fn calculate_schedule(
        &self,
        principal: Money,
        monthly_rate: Rate,
        term_months: u32,
    ) -> Schedule {
        match self.system {
            AmortizationSystem::Sac => SacCalculator.build(principal, monthly_rate, term_months),
            AmortizationSystem::Price => PriceCalculator.build(principal, monthly_rate, term_months),
        }
    }
}

/// Stamp each row with its due date, one calendar month apart starting at
/// `first_due`. Days past the end of a shorter month clamp to its last day.
pub fn assign_due_dates(rows: &mut [InstallmentRow], first_due: NaiveDate) {
    for row in rows.iter_mut() {
        row.due_date = first_due.checked_add_months(Months::new(row.index - 1));
    }
}
