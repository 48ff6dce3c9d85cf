use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::SimulationPolicy;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::interest::MonthlyRateConverter;
use crate::schedule::{assign_due_dates, AmortizationCalculator};
use crate::summary::{AffordabilityEvaluator, SummaryAggregator};
use crate::types::{AmortizationSystem, InstallmentRow, SimulationInput};
use crate::validation::InputValidator;

/// complete outcome of one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub system: AmortizationSystem,
    pub financed_amount: Money,
    pub term_months: u32,
    pub monthly_rate: Rate,
    /// first row for SAC, the level installment for PRICE
    pub representative_installment: Money,
    pub total_interest: Money,
    pub total_payable: Money,
    /// representative installment as a percentage of gross monthly income
    pub income_commitment_ratio: Decimal,
    pub max_affordable_installment: Money,
    pub approved: bool,
    pub schedule: Vec<InstallmentRow>,
}

impl SimulationResult {
    /// row for a 1-based installment number
    pub fn installment(&self, index: u32) -> Option<&InstallmentRow> {
        index
            .checked_sub(1)
            .and_then(|i| self.schedule.get(i as usize))
    }

    /// outstanding balance once installment `index` is paid; index 0 is the financed amount
    pub fn balance_after(&self, index: u32) -> Option<Money> {
        if index == 0 {
            return Some(self.financed_amount);
        }
        self.installment(index).map(|row| row.remaining_balance)
    }

    pub fn first_installment(&self) -> Option<&InstallmentRow> {
        self.schedule.first()
    }

    pub fn last_installment(&self) -> Option<&InstallmentRow> {
        self.schedule.last()
    }
}

/// both amortization systems run on the same input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemComparison {
    pub sac: SimulationResult,
    pub price: SimulationResult,
}

impl SystemComparison {
    /// interest avoided over the loan's life by choosing SAC over PRICE
    pub fn interest_savings_with_sac(&self) -> Money {
        self.price.total_interest - self.sac.total_interest
    }
}

/// stateless simulation pipeline parameterized by an immutable policy
#[derive(Debug, Clone, Default)]
pub struct AmortizationEngine {
    policy: SimulationPolicy,
}

impl AmortizationEngine {
    pub fn new(policy: SimulationPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &SimulationPolicy {
        &self.policy
    }

    /// validate, build the schedule for the chosen system, then aggregate and evaluate
    #[instrument(skip(self, input), fields(system = %input.amortization_system))]
    pub fn simulate(&self, input: &SimulationInput) -> Result<SimulationResult> {
        InputValidator::new(&self.policy).validate(input)?;

        let financed_amount = input.financed_amount();
        let term_months = input.term_months();
        let monthly_rate = MonthlyRateConverter::from_annual_percent(input.annual_interest_rate_percent);

        let mut schedule = AmortizationCalculator::new(input.amortization_system)
            .calculate_schedule(financed_amount, monthly_rate, term_months);
        if let Some(first_due) = input.first_due_date {
            assign_due_dates(&mut schedule.rows, first_due);
        }

        let totals = SummaryAggregator::aggregate(financed_amount, &schedule);
        let affordability = AffordabilityEvaluator::new(self.policy.approval_threshold_percent)
            .evaluate(schedule.representative_installment, input.gross_monthly_income);

        info!(
            %financed_amount,
            installment = %schedule.representative_installment,
            ratio = %affordability.income_commitment_ratio.round_dp(2),
            approved = affordability.approved,
            "simulation complete"
        );

        Ok(SimulationResult {
            system: input.amortization_system,
            financed_amount,
            term_months,
            monthly_rate,
            representative_installment: schedule.representative_installment,
            total_interest: totals.total_interest,
            total_payable: totals.total_payable,
            income_commitment_ratio: affordability.income_commitment_ratio,
            max_affordable_installment: affordability.max_affordable_installment,
            approved: affordability.approved,
            schedule: schedule.rows,
        })
    }

    /// run the same input under both systems, ignoring its chosen system
    #[instrument(skip(self, input))]
    pub fn compare(&self, input: &SimulationInput) -> Result<SystemComparison> {
        Ok(SystemComparison {
            sac: self.simulate(&input.with_system(AmortizationSystem::Sac))?,
            price: self.simulate(&input.with_system(AmortizationSystem::Price))?,
        })
    }
}

/// simulate under the default policy
pub fn simulate(input: &SimulationInput) -> Result<SimulationResult> {
    AmortizationEngine::default().simulate(input)
}
