use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use loan_calc_core::currency;

/// Arguments for rupee formatting
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FormatInrArgs {
    /// Amount in rupees
    #[arg(long)]
    pub amount: Decimal,

    /// Use the lakh shorthand (₹5.0L) for amounts of ₹1,00,000 and above
    #[arg(long)]
    pub compact: bool,
}

pub fn run_format_inr(args: FormatInrArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let formatted = if args.compact {
        currency::format_inr_compact(args.amount)
    } else {
        currency::format_inr(args.amount)
    };
    Ok(json!({ "result": { "amount": args.amount, "formatted": formatted } }))
}
