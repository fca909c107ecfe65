mod commands;
mod config;
mod input;
mod output;
mod telemetry;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::amortization::{EmiArgs, ScheduleArgs};
use commands::application::ValidateApplicationArgs;
use commands::currency::FormatInrArgs;
use commands::eligibility::EligibilityArgs;
use commands::offers::{CompareOffersArgs, RankOffersArgs};

/// Loan EMI, eligibility and offer comparison calculations
#[derive(Parser)]
#[command(
    name = "loancalc",
    version,
    about = "Loan EMI, eligibility and offer comparison calculations",
    long_about = "A CLI for loan calculations with decimal precision. Computes EMIs and \
                  amortization schedules, scores applicant eligibility, ranks and \
                  compares lender offers, and validates application details."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log filter for stderr diagnostics (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// YAML or JSON file with application limits
    #[arg(long, global = true)]
    limits: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the monthly installment and loan totals
    Emi(EmiArgs),
    /// Build a month-by-month amortization schedule
    Schedule(ScheduleArgs),
    /// Score an applicant's eligibility with a factor breakdown
    Eligibility(EligibilityArgs),
    /// Rank lender offers by rate and flag the recommended one
    RankOffers(RankOffersArgs),
    /// Price one loan request across lender offers
    CompareOffers(CompareOffersArgs),
    /// Validate the financial details of a loan application
    ValidateApplication(ValidateApplicationArgs),
    /// Format an amount in Indian rupees
    FormatInr(FormatInrArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = telemetry::init(&cli.log_level) {
        eprintln!("{}: {}", "error".red().bold(), e);
        process::exit(2);
    }

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::amortization::run_emi(args),
        Commands::Schedule(args) => commands::amortization::run_schedule(args),
        Commands::Eligibility(args) => commands::eligibility::run_eligibility(args),
        Commands::RankOffers(args) => commands::offers::run_rank_offers(args),
        Commands::CompareOffers(args) => commands::offers::run_compare_offers(args),
        Commands::ValidateApplication(args) => config::load_limits(cli.limits.as_deref())
            .and_then(|limits| commands::application::run_validate_application(args, &limits)),
        Commands::FormatInr(args) => commands::currency::run_format_inr(args),
        Commands::Version => {
            println!("loancalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
