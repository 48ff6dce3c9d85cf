use rust_decimal::Decimal;

use crate::decimal::Rate;

/// present value of one unit due in `periods` periods, `(1 + r)^-periods`.
/// Shrinks toward zero as the term grows, so long terms at high rates cannot overflow.
pub fn discount_factor(periodic_rate: Rate, periods: u32) -> Decimal {
    let v = Decimal::ONE / (Decimal::ONE + periodic_rate.as_decimal());
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor *= v;
    }
    factor
}

/// Fraction of the principal paid each period under a level-payment annuity,
/// `r / (1 - (1 + r)^-n)`. With a zero rate the annuity degenerates to
/// straight-line repayment, `1 / n`.
pub fn annuity_factor(periodic_rate: Rate, periods: u32) -> Decimal {
    if periods == 0 {
        return Decimal::ZERO;
    }

    let r = periodic_rate.as_decimal();
    if r.is_zero() {
        return Decimal::ONE / Decimal::from(periods);
    }

    r / (Decimal::ONE - discount_factor(periodic_rate, periods))
}
