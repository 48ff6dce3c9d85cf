/// serializable, cent-rounded views of simulation results for export
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::engine::{SimulationResult, SystemComparison};
use crate::types::{AmortizationSystem, InstallmentRow};

#[derive(Debug, Serialize, Deserialize)]
pub struct SimulationView {
    pub system: AmortizationSystem,
    pub summary: SummaryView,
    pub schedule: Vec<InstallmentRow>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryView {
    pub financed_amount: Money,
    pub term_months: u32,
    pub monthly_rate_percent: Decimal,
    pub representative_installment: Money,
    pub total_interest: Money,
    pub total_payable: Money,
    pub income_commitment_ratio: Decimal,
    pub max_affordable_installment: Money,
    pub approved: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonView {
    pub sac: SimulationView,
    pub price: SimulationView,
    pub interest_savings_with_sac: Money,
}

impl SimulationView {
    pub fn from_result(result: &SimulationResult) -> Self {
        SimulationView {
            system: result.system,
            summary: SummaryView {
                financed_amount: result.financed_amount.to_cents(),
                term_months: result.term_months,
                monthly_rate_percent: result.monthly_rate.as_percentage().round_dp(4),
                representative_installment: result.representative_installment.to_cents(),
                total_interest: result.total_interest.to_cents(),
                total_payable: result.total_payable.to_cents(),
                income_commitment_ratio: result.income_commitment_ratio.round_dp(2),
                max_affordable_installment: result.max_affordable_installment.to_cents(),
                approved: result.approved,
            },
            schedule: result.schedule.iter().map(row_in_cents).collect(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl ComparisonView {
    pub fn from_comparison(comparison: &SystemComparison) -> Self {
        ComparisonView {
            sac: SimulationView::from_result(&comparison.sac),
            price: SimulationView::from_result(&comparison.price),
            interest_savings_with_sac: comparison.interest_savings_with_sac().to_cents(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl SimulationResult {
    /// json export of the cent-rounded view
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        SimulationView::from_result(self).to_json_pretty()
    }
}

fn row_in_cents(row: &InstallmentRow) -> InstallmentRow {
    InstallmentRow {
        index: row.index,
        due_date: row.due_date,
        amortization_portion: row.amortization_portion.to_cents(),
        interest_portion: row.interest_portion.to_cents(),
        installment_value: row.installment_value.to_cents(),
        remaining_balance: row.remaining_balance.to_cents(),
    }
}
