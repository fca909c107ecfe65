use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::limits::ApplicationLimits;
use crate::currency::format_inr;
use crate::types::*;
use crate::LoanCalcResult;

/// The financial-details step of a loan application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialDetails {
    #[serde(default)]
    pub employment_type: String,
    pub monthly_income: Money,
    pub loan_amount: Money,
    #[serde(default)]
    pub loan_purpose: String,
    #[serde(default)]
    pub existing_emi: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub violations: Vec<FieldViolation>,
}

/// Check every rule and report all violations together.
pub fn validate_financial_details(
    details: &FinancialDetails,
    limits: &ApplicationLimits,
) -> ValidationReport {
    let mut violations = Vec::new();
    let mut violate = |field: &str, message: String| {
        violations.push(FieldViolation {
            field: field.into(),
            message,
        })
    };

    if details.employment_type.trim().is_empty() {
        violate("employmentType", "Employment type is required".into());
    }
    if details.monthly_income < limits.min_monthly_income {
        violate(
            "monthlyIncome",
            format!(
                "Minimum income requirement is {}",
                format_inr(limits.min_monthly_income)
            ),
        );
    }
    if details.loan_amount < limits.min_loan_amount {
        violate(
            "loanAmount",
            format!("Minimum loan amount is {}", format_inr(limits.min_loan_amount)),
        );
    }
    if details.loan_amount > limits.max_loan_amount {
        violate(
            "loanAmount",
            format!("Maximum loan amount is {}", format_inr(limits.max_loan_amount)),
        );
    }
    if details.loan_purpose.trim().is_empty() {
        violate("loanPurpose", "Loan purpose is required".into());
    }
    if details.existing_emi < Decimal::ZERO {
        violate("existingEmi", "EMI cannot be negative".into());
    }

    ValidationReport {
        valid: violations.is_empty(),
        violations,
    }
}

/// Validation wrapped in the standard output envelope.
///
/// Fails only when the limits themselves are inconsistent; applicant
/// mistakes are reported in the result.
pub fn validate_application(
    details: &FinancialDetails,
    limits: &ApplicationLimits,
) -> LoanCalcResult<ComputationOutput<ValidationReport>> {
    let start = Instant::now();
    limits.validate()?;

    let report = validate_financial_details(details, limits);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Loan application financial-details validation",
        limits,
        Vec::new(),
        elapsed,
        report,
    ))
}
