use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::emi::{compute, validate_request, AmortizationResult, LoanRequest};
use crate::error::LoanCalcError;
use crate::time_value::{monthly_rate, round_currency};
use crate::types::*;
use crate::LoanCalcResult;

/// Longest schedule produced row by row (100 years).
pub const MAX_SCHEDULE_MONTHS: u32 = 1_200;

/// Input for a month-by-month schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInput {
    #[serde(flatten)]
    pub request: LoanRequest,
    /// Due date of the first installment; later ones fall on the same day
    /// of each following month (clamped to month end).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_payment_date: Option<NaiveDate>,
}

/// A single month in the schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    pub month: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub opening_balance: Money,
    pub installment: Money,
    pub interest: Money,
    pub principal: Money,
    pub closing_balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationSchedule {
    pub summary: AmortizationResult,
    pub rows: Vec<ScheduleRow>,
    /// Sum of the installment column (differs from `summary.total_payment`
    /// only by the rounding residual carried in the final month).
    pub total_scheduled_payment: Money,
    pub total_scheduled_interest: Money,
}

/// Split every installment into interest and principal.
///
/// Interest is charged on the opening balance and rounded to whole rupees;
/// the final month repays whatever balance remains.
pub fn build_schedule(input: &ScheduleInput) -> LoanCalcResult<AmortizationSchedule> {
    let term = validate_request(&input.request)?;
    let term = u32::try_from(term)
        .ok()
        .filter(|t| *t <= MAX_SCHEDULE_MONTHS)
        .ok_or_else(|| {
            LoanCalcError::invalid(
                "term_months",
                format!("Schedules are limited to {MAX_SCHEDULE_MONTHS} months."),
            )
        })?;
    let summary = compute(&input.request)?;
    let rate = monthly_rate(input.request.annual_rate_percent);

    let mut rows = Vec::with_capacity(term as usize);
    let mut balance = input.request.principal;
    let mut total_scheduled_payment = Decimal::ZERO;
    let mut total_scheduled_interest = Decimal::ZERO;

    for month in 1..=term {
        let opening = balance;
        let interest = round_currency(opening.checked_mul(rate).ok_or_else(overflow)?);

        let principal = if month == term {
            opening
        } else {
            (summary.monthly_installment - interest)
                .max(Decimal::ZERO)
                .min(opening)
        };
        let installment = principal.checked_add(interest).ok_or_else(overflow)?;
        balance = opening - principal;

        total_scheduled_payment = total_scheduled_payment
            .checked_add(installment)
            .ok_or_else(overflow)?;
        total_scheduled_interest = total_scheduled_interest
            .checked_add(interest)
            .ok_or_else(overflow)?;

        rows.push(ScheduleRow {
            month,
            due_date: due_date(input.first_payment_date, month)?,
            opening_balance: opening,
            installment,
            interest,
            principal,
            closing_balance: balance,
        });
    }

    Ok(AmortizationSchedule {
        summary,
        rows,
        total_scheduled_payment,
        total_scheduled_interest,
    })
}

/// Schedule wrapped in the standard output envelope.
pub fn calculate_schedule(
    input: &ScheduleInput,
) -> LoanCalcResult<ComputationOutput<AmortizationSchedule>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let schedule = build_schedule(input)?;

    if let Some(last) = schedule.rows.last() {
        if last.installment != schedule.summary.monthly_installment {
            warnings.push(format!(
                "Final installment adjusted to {} to clear the remaining balance.",
                last.installment
            ));
        }
    }

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "interest": "opening balance x monthly rate, rounded to whole rupees",
        "final_month": "repays the remaining balance in full",
    });

    Ok(with_metadata(
        "Reducing-balance amortization schedule",
        &assumptions,
        warnings,
        elapsed,
        schedule,
    ))
}

fn overflow() -> LoanCalcError {
    LoanCalcError::invalid("principal", "Schedule amounts overflow the decimal range.")
}

fn due_date(first: Option<NaiveDate>, month: u32) -> LoanCalcResult<Option<NaiveDate>> {
    let Some(first) = first else {
        return Ok(None);
    };
    first
        .checked_add_months(Months::new(month - 1))
        .map(Some)
        .ok_or_else(|| {
            LoanCalcError::invalid("first_payment_date", "Schedule runs past the supported date range.")
        })
}
