use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_calc_core::application::{self, ApplicationLimits, FinancialDetails};

use crate::input;

/// Arguments for validating the financial-details step
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ValidateApplicationArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Employment type (salaried, self-employed, ...)
    #[arg(long, default_value = "")]
    pub employment_type: String,

    /// Net monthly income in rupees
    #[arg(long)]
    pub monthly_income: Option<Decimal>,

    /// Requested loan amount in rupees
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Purpose of the loan
    #[arg(long, default_value = "")]
    pub loan_purpose: String,

    /// Sum of existing monthly EMIs in rupees
    #[arg(long, default_value = "0")]
    pub existing_emi: Decimal,
}

pub fn run_validate_application(
    args: ValidateApplicationArgs,
    limits: &ApplicationLimits,
) -> Result<Value, Box<dyn std::error::Error>> {
    let details: FinancialDetails = match input::read_input(args.input.as_deref())? {
        Some(details) => details,
        None => FinancialDetails {
            employment_type: args.employment_type,
            monthly_income: args
                .monthly_income
                .ok_or("--monthly-income is required (or provide --input)")?,
            loan_amount: args
                .loan_amount
                .ok_or("--loan-amount is required (or provide --input)")?,
            loan_purpose: args.loan_purpose,
            existing_emi: args.existing_emi,
        },
    };

    let result = application::validate_application(&details, limits)?;
    Ok(serde_json::to_value(result)?)
}
