use napi::Result as NapiResult;
use napi_derive::napi;

use loan_calc_core::amortization::{self, LoanRequest, ScheduleInput};
use loan_calc_core::application::{self, ApplicationLimits, FinancialDetails};
use loan_calc_core::currency;
use loan_calc_core::eligibility::{self, ApplicantProfile};
use loan_calc_core::offers::{self, ComparisonInput, LoanOffer};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    let input: LoanRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = amortization::compute(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: ScheduleInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = amortization::calculate_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Eligibility
// ---------------------------------------------------------------------------

#[napi]
pub fn score_eligibility(input_json: String) -> NapiResult<String> {
    let input: ApplicantProfile = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = eligibility::score(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn assess_eligibility(input_json: String) -> NapiResult<String> {
    let input: ApplicantProfile = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = eligibility::assess_eligibility(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Offers
// ---------------------------------------------------------------------------

#[napi]
pub fn rank_offers(input_json: String) -> NapiResult<String> {
    let input: Vec<LoanOffer> = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = offers::rank(input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compare_offers(input_json: String) -> NapiResult<String> {
    let input: ComparisonInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = offers::compare_offers(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Application
// ---------------------------------------------------------------------------

/// `limits_json` may be omitted to use the published limits.
#[napi]
pub fn validate_application(input_json: String, limits_json: Option<String>) -> NapiResult<String> {
    let input: FinancialDetails = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let limits: ApplicationLimits = match limits_json {
        Some(json) => serde_json::from_str(&json).map_err(to_napi_error)?,
        None => ApplicationLimits::default(),
    };
    let output = application::validate_application(&input, &limits).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// The amount is passed as a decimal string so it stays exact.
#[napi]
pub fn format_inr(amount: String, compact: Option<bool>) -> NapiResult<String> {
    let amount: rust_decimal::Decimal = amount.trim().parse().map_err(to_napi_error)?;
    Ok(if compact.unwrap_or(false) {
        currency::format_inr_compact(amount)
    } else {
        currency::format_inr(amount)
    })
}
