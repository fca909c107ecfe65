use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_calc_core::offers::{self, ComparisonInput, LoanOffer};

use crate::input;

/// Arguments for ranking offers
#[derive(Args)]
pub struct RankOffersArgs {
    /// Path to a JSON array of offers
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for pricing a loan across offers
#[derive(Args)]
pub struct CompareOffersArgs {
    /// JSON file: either a full comparison request or just an array of offers
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal in rupees (overrides the file)
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Tenure in months (overrides the file)
    #[arg(long, alias = "term-months")]
    pub term: Option<i64>,
}

pub fn run_rank_offers(args: RankOffersArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let offer_list: Vec<LoanOffer> = input::read_input(args.input.as_deref())?
        .ok_or("--input <offers.json> or stdin required for ranking")?;

    tracing::debug!(offers = offer_list.len(), "ranking offers");
    let result = offers::rank_offers(offer_list);
    Ok(serde_json::to_value(result)?)
}

pub fn run_compare_offers(args: CompareOffersArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let data = input::read_input_value(args.input.as_deref())?
        .ok_or("--input <file.json> or stdin required for offer comparison")?;

    let comparison_input = match data {
        Value::Array(_) => ComparisonInput {
            offers: serde_json::from_value(data)?,
            principal: args
                .principal
                .ok_or("--principal is required when the input is an offer list")?,
            term_months: args
                .term
                .ok_or("--term is required when the input is an offer list")?,
        },
        other => {
            let mut parsed: ComparisonInput = serde_json::from_value(other)?;
            if let Some(principal) = args.principal {
                parsed.principal = principal;
            }
            if let Some(term) = args.term {
                parsed.term_months = term;
            }
            parsed
        }
    };

    tracing::debug!(
        offers = comparison_input.offers.len(),
        principal = %comparison_input.principal,
        term_months = comparison_input.term_months,
        "comparing offers"
    );
    let result = offers::compare_offers(&comparison_input)?;
    Ok(serde_json::to_value(result)?)
}
