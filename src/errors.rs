use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("property value must be positive: {value}")]
    NonPositivePropertyValue {
        value: Money,
    },

    #[error("down payment out of range: {down_payment} not within [0, {property_value}]")]
    DownPaymentOutOfRange {
        down_payment: Money,
        property_value: Money,
    },

    #[error("term out of range: {years} years not within [{min}, {max}]")]
    TermOutOfRange {
        years: u32,
        min: u32,
        max: u32,
    },

    #[error("annual interest rate out of range: {percent}% not within [0, {max}]")]
    RateOutOfRange {
        percent: Decimal,
        max: Decimal,
    },

    #[error("gross monthly income must be positive: {value}")]
    NonPositiveIncome {
        value: Money,
    },

    #[error("{field} too large: {value} exceeds {max}")]
    AmountTooLarge {
        field: &'static str,
        value: Money,
        max: Money,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

impl SimulationError {
    /// name of the input field that failed validation
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SimulationError::NonPositivePropertyValue { .. } => Some("property_value"),
            SimulationError::DownPaymentOutOfRange { .. } => Some("down_payment"),
            SimulationError::TermOutOfRange { .. } => Some("term_years"),
            SimulationError::RateOutOfRange { .. } => Some("annual_interest_rate_percent"),
            SimulationError::NonPositiveIncome { .. } => Some("gross_monthly_income"),
            SimulationError::AmountTooLarge { field, .. } => Some(*field),
            SimulationError::InvalidConfiguration { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
