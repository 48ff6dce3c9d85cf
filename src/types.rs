use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{Result, SimulationError};

/// amortization system used to build the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmortizationSystem {
    /// constant amortization: equal principal portions, declining installment
    #[serde(rename = "SAC")]
    Sac,
    /// french/annuity system: equal installments, growing principal portion
    #[serde(rename = "PRICE")]
    Price,
}

impl AmortizationSystem {
    pub const ALL: [AmortizationSystem; 2] = [AmortizationSystem::Sac, AmortizationSystem::Price];

    pub fn code(&self) -> &'static str {
        match self {
            AmortizationSystem::Sac => "SAC",
            AmortizationSystem::Price => "PRICE",
        }
    }
}

impl std::fmt::Display for AmortizationSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// parameters of one financing simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    pub property_value: Money,
    pub down_payment: Money,
    pub term_years: u32,
    /// nominal annual rate, in percent (9.5 means 9.5% a year)
    pub annual_interest_rate_percent: Decimal,
    pub amortization_system: AmortizationSystem,
    pub gross_monthly_income: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_due_date: Option<NaiveDate>,
}

impl SimulationInput {
    pub fn builder() -> SimulationInputBuilder {
        SimulationInputBuilder::new()
    }

    /// principal being amortized
    pub fn financed_amount(&self) -> Money {
        self.property_value - self.down_payment
    }

    /// saturates instead of overflowing; the validator caps terms far below that
    pub fn term_months(&self) -> u32 {
        self.term_years.saturating_mul(12)
    }

    /// same parameters under a different amortization system
    pub fn with_system(&self, system: AmortizationSystem) -> Self {
        Self {
            amortization_system: system,
            ..self.clone()
        }
    }
}

pub struct SimulationInputBuilder {
    property_value: Option<Money>,
    down_payment: Option<Money>,
    term_years: Option<u32>,
    annual_interest_rate_percent: Option<Decimal>,
    amortization_system: Option<AmortizationSystem>,
    gross_monthly_income: Option<Money>,
    first_due_date: Option<NaiveDate>,
}

impl SimulationInputBuilder {
    pub fn new() -> Self {
        Self {
            property_value: None,
            down_payment: None,
            term_years: None,
            annual_interest_rate_percent: None,
            amortization_system: None,
            gross_monthly_income: None,
            first_due_date: None,
        }
    }

    pub fn property_value(mut self, value: Money) -> Self {
        self.property_value = Some(value);
        self
    }

    pub fn down_payment(mut self, value: Money) -> Self {
        self.down_payment = Some(value);
        self
    }

    pub fn term_years(mut self, years: u32) -> Self {
        self.term_years = Some(years);
        self
    }

    pub fn annual_rate_percent(mut self, percent: Decimal) -> Self {
        self.annual_interest_rate_percent = Some(percent);
        self
    }

    pub fn system(mut self, system: AmortizationSystem) -> Self {
        self.amortization_system = Some(system);
        self
    }

    pub fn gross_monthly_income(mut self, income: Money) -> Self {
        self.gross_monthly_income = Some(income);
        self
    }

    pub fn first_due_date(mut self, date: NaiveDate) -> Self {
        self.first_due_date = Some(date);
        self
    }

    /// Assemble the input. Down payment defaults to zero and the system to SAC;
    /// the other fields are required. Range checks are left to the validator.
    pub fn build(self) -> Result<SimulationInput> {
        let property_value = self.property_value.ok_or(SimulationError::InvalidConfiguration {
            message: "Property value required".to_string(),
        })?;

        let term_years = self.term_years.ok_or(SimulationError::InvalidConfiguration {
            message: "Term required".to_string(),
        })?;

        let annual_interest_rate_percent =
            self.annual_interest_rate_percent
                .ok_or(SimulationError::InvalidConfiguration {
                    message: "Interest rate required".to_string(),
                })?;

        let gross_monthly_income =
            self.gross_monthly_income
                .ok_or(SimulationError::InvalidConfiguration {
                    message: "Gross monthly income required".to_string(),
                })?;

        Ok(SimulationInput {
            property_value,
            down_payment: self.down_payment.unwrap_or(Money::ZERO),
            term_years,
            annual_interest_rate_percent,
            amortization_system: self.amortization_system.unwrap_or(AmortizationSystem::Sac),
            gross_monthly_income,
            first_due_date: self.first_due_date,
        })
    }
}

impl Default for SimulationInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// one month of the amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentRow {
    pub index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub amortization_portion: Money,
    pub interest_portion: Money,
    pub installment_value: Money,
    pub remaining_balance: Money,
}

impl InstallmentRow {
    pub fn new(
        index: u32,
        amortization_portion: Money,
        interest_portion: Money,
        remaining_balance: Money,
    ) -> Self {
        Self {
            index,
            due_date: None,
            amortization_portion,
            interest_portion,
            installment_value: amortization_portion + interest_portion,
            remaining_balance,
        }
    }
}

/// output of a schedule calculator, before aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub rows: Vec<InstallmentRow>,
    /// first row for SAC, the constant installment for PRICE
    pub representative_installment: Money,
    pub total_interest: Money,
}

impl Schedule {
    /// schedule of a loan with nothing financed
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            representative_installment: Money::ZERO,
            total_interest: Money::ZERO,
        }
    }

    pub fn total_amortization(&self) -> Money {
        self.rows.iter().map(|r| r.amortization_portion).sum()
    }
}
