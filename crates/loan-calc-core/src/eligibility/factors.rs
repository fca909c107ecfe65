use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::scorer::{
    result_from_components, score_components, ApplicantProfile, EligibilityResult,
    ScoreComponents,
};
use crate::currency::{format_inr_compact, format_percent};
use crate::error::LoanCalcError;
use crate::types::*;
use crate::LoanCalcResult;

const GOOD_CREDIT_SCORE: i32 = 750;
const FAIR_CREDIT_SCORE: i32 = 650;
/// Loans up to three years of income count as comfortable.
const COMFORTABLE_INCOME_MONTHS: Decimal = dec!(36);
const COMPONENT_DP: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Good,
    Fair,
    Poor,
}

/// One line of the "contributing factors" breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityFactor {
    pub label: String,
    pub value: String,
    pub status: FactorStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityAssessment {
    #[serde(flatten)]
    pub result: EligibilityResult,
    pub components: ScoreComponents,
    pub factors: Vec<EligibilityFactor>,
    pub guidance: String,
}

/// Score plus the per-factor breakdown and guidance for the band.
pub fn assess(profile: &ApplicantProfile) -> LoanCalcResult<EligibilityAssessment> {
    let components = score_components(profile)?;
    let result = result_from_components(&components);

    Ok(EligibilityAssessment {
        guidance: result.band.guidance().to_string(),
        factors: factors(profile, &components)?,
        components: components.rounded(COMPONENT_DP),
        result,
    })
}

/// Assessment wrapped in the standard output envelope.
pub fn assess_eligibility(
    profile: &ApplicantProfile,
) -> LoanCalcResult<ComputationOutput<EligibilityAssessment>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let assessment = assess(profile)?;

    if assessment.components.affordability_component.is_zero() {
        warnings.push(
            "Requested principal is at least 10x annual income; affordability contributes nothing."
                .into(),
        );
    }

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "weights": { "credit": 40, "affordability": 40, "base": 20 },
        "credit_range": [300, 900],
        "affordability_zero_at": "principal = 10x annual income",
        "bands": { "Excellent": 80, "Good": 60, "Fair": 40 },
    });

    Ok(with_metadata(
        "Fixed-weight eligibility heuristic (credit / affordability / base)",
        &assumptions,
        warnings,
        elapsed,
        assessment,
    ))
}

fn factors(
    profile: &ApplicantProfile,
    components: &ScoreComponents,
) -> LoanCalcResult<Vec<EligibilityFactor>> {
    let credit_status = match profile.declared_credit_score {
        s if s >= GOOD_CREDIT_SCORE => FactorStatus::Good,
        s if s >= FAIR_CREDIT_SCORE => FactorStatus::Fair,
        _ => FactorStatus::Poor,
    };

    let ratio_percent = components
        .loan_to_annual_income_ratio
        .checked_mul(dec!(100))
        .ok_or_else(|| {
            LoanCalcError::invalid(
                "requested_principal",
                "Loan-to-income percentage overflows the decimal range.",
            )
        })?;
    // An income too large to multiply out covers any representable principal.
    let comfortable = match profile.monthly_income.checked_mul(COMFORTABLE_INCOME_MONTHS) {
        Some(limit) => profile.requested_principal <= limit,
        None => true,
    };
    let ratio_status = if comfortable {
        FactorStatus::Good
    } else {
        FactorStatus::Fair
    };

    Ok(vec![
        EligibilityFactor {
            label: "CIBIL Score".into(),
            value: profile.declared_credit_score.to_string(),
            status: credit_status,
        },
        EligibilityFactor {
            label: "Income".into(),
            value: format_inr_compact(profile.monthly_income),
            status: FactorStatus::Good,
        },
        EligibilityFactor {
            label: "Loan/Income Ratio".into(),
            value: format_percent(ratio_percent, 1),
            status: ratio_status,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::scorer::EligibilityBand;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn profile(credit: i32, income: Decimal, principal: Decimal) -> ApplicantProfile {
        ApplicantProfile {
            declared_credit_score: credit,
            monthly_income: income,
            requested_principal: principal,
        }
    }

    #[test]
    fn test_reference_assessment() {
        let a = assess(&profile(700, dec!(50_000), dec!(500_000))).unwrap();
        assert_eq!(a.result.score, 83);
        assert_eq!(a.result.band, EligibilityBand::Excellent);
        assert_eq!(a.components.credit_component, dec!(26.67));
        assert_eq!(a.components.affordability_component, dec!(36.67));
        assert_eq!(a.components.base_component, dec!(20));
        assert_eq!(
            a.guidance,
            "You have a high chance of approval with competitive rates."
        );
    }

    #[test]
    fn test_factor_breakdown() {
        let a = assess(&profile(700, dec!(50_000), dec!(500_000))).unwrap();
        assert_eq!(
            a.factors,
            vec![
                EligibilityFactor {
                    label: "CIBIL Score".into(),
                    value: "700".into(),
                    status: FactorStatus::Fair,
                },
                EligibilityFactor {
                    label: "Income".into(),
                    value: "₹50,000".into(),
                    status: FactorStatus::Good,
                },
                EligibilityFactor {
                    label: "Loan/Income Ratio".into(),
                    value: "83.3%".into(),
                    status: FactorStatus::Good,
                },
            ]
        );
    }

    #[test]
    fn test_credit_status_thresholds() {
        let status = |cs| assess(&profile(cs, dec!(50_000), dec!(500_000))).unwrap().factors[0].status;
        assert_eq!(status(750), FactorStatus::Good);
        assert_eq!(status(749), FactorStatus::Fair);
        assert_eq!(status(650), FactorStatus::Fair);
        assert_eq!(status(649), FactorStatus::Poor);
    }

    #[test]
    fn test_ratio_status_turns_fair_past_three_years_income() {
        let at_limit = assess(&profile(700, dec!(50_000), dec!(1_800_000))).unwrap();
        assert_eq!(at_limit.factors[2].status, FactorStatus::Good);

        let over = assess(&profile(700, dec!(50_000), dec!(1_800_001))).unwrap();
        assert_eq!(over.factors[2].status, FactorStatus::Fair);
    }

    #[test]
    fn test_extreme_ratio_is_invalid_input() {
        // Ratio 8.3e26 fits, the percentage 8.3e28 does not
        match assess(&profile(700, dec!(1), dec!(10_000_000_000_000_000_000_000_000_000))) {
            Err(LoanCalcError::InvalidInput { field, .. }) => {
                assert_eq!(field, "requested_principal")
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_very_large_income_is_comfortable() {
        // 36 months of this income exceeds the decimal range
        let a = assess(&profile(
            700,
            dec!(3_000_000_000_000_000_000_000_000_000),
            dec!(500_000),
        ))
        .unwrap();
        assert_eq!(a.factors[2].status, FactorStatus::Good);
        assert_eq!(a.factors[2].value, "0.0%");
    }

    #[test]
    fn test_income_factor_uses_lakh_form() {
        let a = assess(&profile(700, dec!(250_000), dec!(500_000))).unwrap();
        assert_eq!(a.factors[1].value, "₹2.5L");
    }

    #[test]
    fn test_assessment_json_flattens_score() {
        let a = assess(&profile(700, dec!(50_000), dec!(500_000))).unwrap();
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["score"], 83);
        assert_eq!(v["band"], "Excellent");
        assert_eq!(v["factors"][0]["status"], "fair");
    }

    #[test]
    fn test_envelope_warns_when_affordability_is_zero() {
        let out = assess_eligibility(&profile(800, dec!(10_000), dec!(2_000_000))).unwrap();
        assert_eq!(out.warnings.len(), 1);
        assert!(assess_eligibility(&profile(800, dec!(100_000), dec!(200_000)))
            .unwrap()
            .warnings
            .is_empty());
    }
}
