pub mod compound;

use rust_decimal::Decimal;

use crate::decimal::Rate;

pub use compound::{annuity_factor, discount_factor};

const MONTHS_PER_YEAR: u32 = 12;

/// Converts a nominal annual rate into the monthly periodic rate.
///
/// The split is a plain division by twelve (`percent / 100 / 12`), not the
/// compounding equivalent `(1 + i)^(1/12) - 1`. Every schedule value depends
/// on this choice, so it stays nominal.
pub struct MonthlyRateConverter;

impl MonthlyRateConverter {
    /// monthly rate from an annual rate given in percent
    pub fn from_annual_percent(annual_percent: Decimal) -> Rate {
        Self::from_annual(Rate::from_percent(annual_percent))
    }

    /// monthly rate from an annual rate given as a fraction
    pub fn from_annual(annual: Rate) -> Rate {
        Rate::from_decimal(annual.as_decimal() / Decimal::from(MONTHS_PER_YEAR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_nominal_split() {
        let monthly = MonthlyRateConverter::from_annual_percent(dec!(12));
        assert_eq!(monthly.as_decimal(), dec!(0.01));
    }

    #[test]
    fn test_nine_and_a_half_percent() {
        let monthly = MonthlyRateConverter::from_annual_percent(dec!(9.5));
        assert_eq!(monthly.as_decimal().round_dp(7), dec!(0.0079167));
    }

    #[test]
    fn test_zero_rate() {
        assert!(MonthlyRateConverter::from_annual_percent(Decimal::ZERO).is_zero());
    }

    #[test]
    fn test_nominal_is_not_effective() {
        // 12% nominal compounds to more than 12% effective a year
        let monthly = MonthlyRateConverter::from_annual_percent(dec!(12));
        let effective = Decimal::ONE / discount_factor(monthly, 12) - Decimal::ONE;
        assert!(effective > dec!(0.12));
    }
}
