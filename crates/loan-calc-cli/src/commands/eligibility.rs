use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_calc_core::eligibility::{self, ApplicantProfile};

use crate::input;

/// Arguments for the eligibility assessment
#[derive(Args)]
pub struct EligibilityArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Self-declared CIBIL score (300-900)
    #[arg(long, alias = "cibil")]
    pub credit_score: Option<i32>,

    /// Net monthly income in rupees
    #[arg(long)]
    pub monthly_income: Option<Decimal>,

    /// Requested loan principal in rupees
    #[arg(long)]
    pub principal: Option<Decimal>,
}

pub fn run_eligibility(args: EligibilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile: ApplicantProfile = match input::read_input(args.input.as_deref())? {
        Some(profile) => profile,
        None => ApplicantProfile {
            declared_credit_score: args
                .credit_score
                .ok_or("--credit-score is required (or provide --input)")?,
            monthly_income: args
                .monthly_income
                .ok_or("--monthly-income is required (or provide --input)")?,
            requested_principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
        },
    };

    let result = eligibility::assess_eligibility(&profile)?;
    Ok(serde_json::to_value(result)?)
}
