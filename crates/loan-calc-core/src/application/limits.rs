use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LoanCalcError;
use crate::types::Money;
use crate::LoanCalcResult;

/// Bounds applied to the financial-details step of an application.
///
/// Missing keys in a config file fall back to the published defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationLimits {
    pub min_monthly_income: Money,
    pub min_loan_amount: Money,
    pub max_loan_amount: Money,
}

impl Default for ApplicationLimits {
    fn default() -> Self {
        ApplicationLimits {
            min_monthly_income: dec!(15_000),
            min_loan_amount: dec!(100_000),
            max_loan_amount: dec!(5_000_000),
        }
    }
}

impl ApplicationLimits {
    pub fn validate(&self) -> LoanCalcResult<()> {
        for (field, value) in [
            ("min_monthly_income", self.min_monthly_income),
            ("min_loan_amount", self.min_loan_amount),
            ("max_loan_amount", self.max_loan_amount),
        ] {
            if value <= Decimal::ZERO {
                return Err(LoanCalcError::invalid(field, "Limit must be positive."));
            }
        }
        if self.min_loan_amount > self.max_loan_amount {
            return Err(LoanCalcError::invalid(
                "min_loan_amount",
                format!(
                    "Minimum loan amount {} exceeds maximum {}.",
                    self.min_loan_amount, self.max_loan_amount
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ApplicationLimits::default().validate().is_ok());
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let limits: ApplicationLimits =
            serde_json::from_str(r#"{ "maxLoanAmount": 7500000 }"#).unwrap();
        assert_eq!(limits.max_loan_amount, dec!(7_500_000));
        assert_eq!(limits.min_loan_amount, dec!(100_000));
        assert_eq!(limits.min_monthly_income, dec!(15_000));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let limits = ApplicationLimits {
            min_loan_amount: dec!(600_000),
            max_loan_amount: dec!(500_000),
            ..Default::default()
        };
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_non_positive_limit_rejected() {
        let limits = ApplicationLimits {
            min_monthly_income: Decimal::ZERO,
            ..Default::default()
        };
        assert!(limits.validate().is_err());
    }
}
