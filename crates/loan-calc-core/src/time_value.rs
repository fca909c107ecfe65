use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::LoanCalcError;
use crate::types::{Money, Percent, Rate};
use crate::LoanCalcResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Convert a quoted annual percentage (10.5) into a monthly decimal rate (0.00875).
pub fn monthly_rate(annual_rate_percent: Percent) -> Rate {
    annual_rate_percent / MONTHS_PER_YEAR / PERCENT
}

/// (1 + rate)^nper by exponentiation by squaring.
///
/// Errors when the factor leaves the representable decimal range.
pub fn compound_factor(rate: Rate, nper: u64) -> LoanCalcResult<Decimal> {
    (Decimal::ONE + rate).checked_powu(nper).ok_or_else(|| {
        LoanCalcError::invalid(
            "term_months",
            format!("(1 + {rate})^{nper} overflows the decimal range"),
        )
    })
}

/// Level payment that amortizes `principal` over `nper` periods at `rate`.
///
/// Returned unrounded and as a positive amount (the borrower's outflow).
pub fn level_payment(principal: Money, rate: Rate, nper: u64) -> LoanCalcResult<Money> {
    if nper == 0 {
        return Err(LoanCalcError::invalid(
            "term_months",
            "Number of periods must be > 0",
        ));
    }

    let periods = Decimal::from(nper);
    if rate.is_zero() {
        return Ok(principal / periods);
    }

    let factor = compound_factor(rate, nper)?;
    let denominator = factor - Decimal::ONE;
    // Rates below the decimal resolution collapse the factor to 1.
    if denominator.is_zero() {
        return Ok(principal / periods);
    }

    principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(factor))
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(|| {
            LoanCalcError::invalid("principal", "Installment overflows the decimal range")
        })
}

/// Round to whole currency units, half away from zero.
pub fn round_currency(amount: Money) -> Money {
    round_half_up(amount, 0)
}

/// Round to `dp` decimal places, half away from zero.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamp into the closed unit interval.
pub fn clamp_unit(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO).min(Decimal::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_rate_from_annual_percent() {
        assert_eq!(monthly_rate(dec!(10.5)), dec!(0.00875));
        assert_eq!(monthly_rate(dec!(12)), dec!(0.01));
        assert_eq!(monthly_rate(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_compound_factor_matches_known_value() {
        // 1.01^12 = 1.12682503013196972...
        let f = compound_factor(dec!(0.01), 12).unwrap();
        assert!((f - dec!(1.126825030131969720661201)).abs() < dec!(0.0000000001));
    }

    #[test]
    fn test_compound_factor_long_term_is_finite() {
        // 30-year mortgage at 24% p.a.
        let f = compound_factor(dec!(0.02), 360).unwrap();
        assert!(f > dec!(1_000) && f < dec!(2_000));
    }

    #[test]
    fn test_compound_factor_overflow_is_error() {
        assert!(compound_factor(dec!(10), 1_000).is_err());
    }

    #[test]
    fn test_level_payment_one_period() {
        // Single period: principal plus one period's interest
        let p = level_payment(dec!(100_000), dec!(0.01), 1).unwrap();
        assert_eq!(p.round_dp(6), dec!(101_000));
    }

    #[test]
    fn test_level_payment_zero_rate() {
        let p = level_payment(dec!(120_000), Decimal::ZERO, 12).unwrap();
        assert_eq!(p, dec!(10_000));
    }

    #[test]
    fn test_level_payment_zero_periods_rejected() {
        assert!(level_payment(dec!(1_000), dec!(0.01), 0).is_err());
    }

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency(dec!(16251.5)), dec!(16252));
        assert_eq!(round_currency(dec!(16251.49)), dec!(16251));
        assert_eq!(round_currency(dec!(0.5)), dec!(1));
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(dec!(-0.2)), Decimal::ZERO);
        assert_eq!(clamp_unit(dec!(1.7)), Decimal::ONE);
        assert_eq!(clamp_unit(dec!(0.25)), dec!(0.25));
    }
}
