//! Equated monthly installment (EMI) for a fixed-rate, fully amortizing loan.
//!
//! `EMI = P · r · (1+r)^n / ((1+r)^n − 1)` with `r = annual% / 12 / 100`,
//! or `P / n` when the rate is zero. The installment is rounded to whole
//! rupees (half-up) and every total is derived from the rounded figure, so
//! `total_payment == monthly_installment × term_months` holds exactly.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LoanCalcError;
use crate::time_value::{level_payment, monthly_rate, round_currency, round_half_up};
use crate::types::*;
use crate::LoanCalcResult;

const SHARE_DP: u32 = 2;

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

/// A loan to be amortized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    /// Amount borrowed, in rupees.
    pub principal: Money,
    /// Quoted annual rate, e.g. 10.5 for 10.5% p.a.
    pub annual_rate_percent: Percent,
    /// Tenure in months.
    pub term_months: i64,
}

/// Installment and life-of-loan totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationResult {
    /// Fixed monthly installment, whole rupees.
    pub monthly_installment: Money,
    /// `monthly_installment × term_months`.
    pub total_payment: Money,
    /// Interest paid over the life of the loan.
    pub total_interest: Money,
    /// Principal as a percentage of total payment.
    pub principal_share: Percent,
    /// Interest as a percentage of total payment.
    pub interest_share: Percent,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Compute the rounded EMI and the totals derived from it.
pub fn compute(request: &LoanRequest) -> LoanCalcResult<AmortizationResult> {
    let term = validate_request(request)?;
    let rate = monthly_rate(request.annual_rate_percent);

    let installment = round_currency(level_payment(request.principal, rate, term)?);
    let total_payment = installment
        .checked_mul(Decimal::from(term))
        .ok_or_else(|| {
            LoanCalcError::invalid("principal", "Total payment overflows the decimal range.")
        })?;

    let total_interest = if rate.is_zero() {
        Decimal::ZERO
    } else {
        (total_payment - request.principal).max(Decimal::ZERO)
    };

    let interest_share = if total_payment.is_zero() {
        Decimal::ZERO
    } else {
        round_half_up(total_interest / total_payment * dec!(100), SHARE_DP)
    };

    Ok(AmortizationResult {
        monthly_installment: installment,
        total_payment,
        total_interest,
        principal_share: dec!(100) - interest_share,
        interest_share,
    })
}

/// EMI calculation wrapped in the standard output envelope.
pub fn calculate_emi(
    request: &LoanRequest,
) -> LoanCalcResult<ComputationOutput<AmortizationResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let result = compute(request)?;

    let residual = result.total_payment - request.principal - result.total_interest;
    if !residual.is_zero() {
        if request.annual_rate_percent.is_zero() {
            warnings.push(format!(
                "Zero-rate installment rounding leaves a residual of {residual} over the term; \
                 the final installment absorbs it."
            ));
        } else {
            warnings.push(format!(
                "Rounded installment repays {} less than the principal; total interest floored at 0.",
                -residual
            ));
        }
    }
    if request.term_months > 360 {
        warnings.push(format!(
            "Tenure of {} months exceeds 30 years.",
            request.term_months
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "monthly_rate": "annual_rate_percent / 12 / 100",
        "rounding": "installment rounded half-up to whole rupees",
        "totals": "derived from the rounded installment",
    });

    Ok(with_metadata(
        "Fixed-rate reducing-balance EMI",
        &assumptions,
        warnings,
        elapsed,
        result,
    ))
}

pub(crate) fn validate_request(request: &LoanRequest) -> LoanCalcResult<u64> {
    if request.principal <= Decimal::ZERO {
        return Err(LoanCalcError::invalid(
            "principal",
            "Principal must be positive.",
        ));
    }
    if request.annual_rate_percent < Decimal::ZERO {
        return Err(LoanCalcError::invalid(
            "annual_rate_percent",
            "Annual rate cannot be negative.",
        ));
    }
    if request.term_months <= 0 {
        return Err(LoanCalcError::invalid(
            "term_months",
            "Term must be at least 1 month.",
        ));
    }
    Ok(request.term_months as u64)
}
