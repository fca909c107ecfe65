use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_calc_core::amortization::{self, LoanRequest, ScheduleInput};

use crate::input;

/// Arguments for the EMI calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct EmiArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal in rupees
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (10.5 = 10.5% p.a.)
    #[arg(long, alias = "annual-rate-percent")]
    pub rate: Option<Decimal>,

    /// Tenure in months
    #[arg(long, alias = "term-months")]
    pub term: Option<i64>,
}

/// Arguments for the month-by-month schedule
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: EmiArgs,

    /// Due date of the first installment (YYYY-MM-DD)
    #[arg(long)]
    pub first_payment_date: Option<NaiveDate>,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = loan_request(args)?;
    let result = amortization::calculate_emi(&request)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: ScheduleInput =
        if let Some(mut parsed) = input::read_input::<ScheduleInput>(args.loan.input.as_deref())? {
            if args.first_payment_date.is_some() {
                parsed.first_payment_date = args.first_payment_date;
            }
            parsed
        } else {
            ScheduleInput {
                request: request_from_flags(&args.loan)?,
                first_payment_date: args.first_payment_date,
            }
        };

    let result = amortization::calculate_schedule(&schedule_input)?;
    Ok(serde_json::to_value(result)?)
}

fn loan_request(args: EmiArgs) -> Result<LoanRequest, Box<dyn std::error::Error>> {
    match input::read_input::<LoanRequest>(args.input.as_deref())? {
        Some(request) => Ok(request),
        None => request_from_flags(&args),
    }
}

fn request_from_flags(args: &EmiArgs) -> Result<LoanRequest, Box<dyn std::error::Error>> {
    Ok(LoanRequest {
        principal: args
            .principal
            .ok_or("--principal is required (or provide --input)")?,
        annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
        term_months: args.term.ok_or("--term is required (or provide --input)")?,
    })
}
