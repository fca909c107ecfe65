//! Suitability score for a loan applicant.
//!
//! A fixed-weight heuristic on a 0–100 scale:
//! 1. **Credit** (40): declared score mapped linearly from 300..900.
//! 2. **Affordability** (40): falls linearly to zero as the requested
//!    principal approaches 10x annual income.
//! 3. **Base** (20): flat.
//!
//! The weights and clamp bounds are a compatibility contract with the
//! published calculator, not tuning knobs.

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LoanCalcError;
use crate::time_value::{clamp_unit, round_half_up};
use crate::types::*;
use crate::LoanCalcResult;

pub const MIN_CREDIT_SCORE: i32 = 300;
pub const MAX_CREDIT_SCORE: i32 = 900;

const CREDIT_WEIGHT: Decimal = dec!(40);
const AFFORDABILITY_WEIGHT: Decimal = dec!(40);
const BASE_COMPONENT: Decimal = dec!(20);
/// Principal / annual income at which affordability reaches zero.
const RATIO_CEILING: Decimal = dec!(10);
const MONTHS_PER_YEAR: Decimal = dec!(12);

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantProfile {
    /// Self-reported CIBIL score, 300..=900.
    pub declared_credit_score: i32,
    pub monthly_income: Money,
    pub requested_principal: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EligibilityBand {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl EligibilityBand {
    /// Step function over the score; each band includes its lower bound.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => EligibilityBand::Excellent,
            60..=79 => EligibilityBand::Good,
            40..=59 => EligibilityBand::Fair,
            _ => EligibilityBand::Poor,
        }
    }

    /// Advice shown alongside the band.
    pub fn guidance(&self) -> &'static str {
        match self {
            EligibilityBand::Excellent => {
                "You have a high chance of approval with competitive rates."
            }
            EligibilityBand::Good => {
                "Your profile looks promising. A few improvements could boost your chances."
            }
            EligibilityBand::Fair => "Consider improving your CIBIL score or adjusting loan amount.",
            EligibilityBand::Poor => "Focus on improving your credit score before applying.",
        }
    }
}

impl std::fmt::Display for EligibilityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EligibilityBand::Excellent => write!(f, "Excellent"),
            EligibilityBand::Good => write!(f, "Good"),
            EligibilityBand::Fair => write!(f, "Fair"),
            EligibilityBand::Poor => write!(f, "Poor"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub score: u8,
    pub band: EligibilityBand,
}

/// Unrounded contributions behind a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComponents {
    pub credit_component: Decimal,
    pub affordability_component: Decimal,
    pub base_component: Decimal,
    /// Requested principal / (monthly income x 12).
    pub loan_to_annual_income_ratio: Decimal,
}

impl ScoreComponents {
    pub fn total(&self) -> Decimal {
        self.credit_component + self.affordability_component + self.base_component
    }

    /// Components rounded for display; the score is never derived from these.
    pub fn rounded(&self, dp: u32) -> Self {
        ScoreComponents {
            credit_component: round_half_up(self.credit_component, dp),
            affordability_component: round_half_up(self.affordability_component, dp),
            base_component: round_half_up(self.base_component, dp),
            loan_to_annual_income_ratio: round_half_up(self.loan_to_annual_income_ratio, dp),
        }
    }
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Score an applicant and assign a band.
pub fn score(profile: &ApplicantProfile) -> LoanCalcResult<EligibilityResult> {
    let components = score_components(profile)?;
    Ok(result_from_components(&components))
}

/// The weighted contributions behind `score`.
pub fn score_components(profile: &ApplicantProfile) -> LoanCalcResult<ScoreComponents> {
    validate_profile(profile)?;

    let credit_span = Decimal::from(MAX_CREDIT_SCORE - MIN_CREDIT_SCORE);
    let credit_fraction =
        Decimal::from(profile.declared_credit_score - MIN_CREDIT_SCORE) / credit_span;
    let credit_component = clamp_unit(credit_fraction) * CREDIT_WEIGHT;

    let annual_income = profile
        .monthly_income
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or_else(|| {
            LoanCalcError::invalid("monthly_income", "Annual income overflows the decimal range.")
        })?;
    let ratio = profile
        .requested_principal
        .checked_div(annual_income)
        .ok_or_else(|| {
            LoanCalcError::invalid(
                "requested_principal",
                "Loan-to-income ratio overflows the decimal range.",
            )
        })?;
    let affordability_component = clamp_unit(Decimal::ONE - ratio / RATIO_CEILING) * AFFORDABILITY_WEIGHT;

    Ok(ScoreComponents {
        credit_component,
        affordability_component,
        base_component: BASE_COMPONENT,
        loan_to_annual_income_ratio: ratio,
    })
}

pub(crate) fn result_from_components(components: &ScoreComponents) -> EligibilityResult {
    let total = round_half_up(components.total(), 0)
        .max(Decimal::ZERO)
        .min(dec!(100));
    // Clamped to 0..=100 above, so the conversion cannot fail.
    let score = total.to_u8().unwrap_or(0);

    EligibilityResult {
        score,
        band: EligibilityBand::from_score(score),
    }
}

pub(crate) fn validate_profile(profile: &ApplicantProfile) -> LoanCalcResult<()> {
    if !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&profile.declared_credit_score) {
        return Err(LoanCalcError::invalid(
            "declared_credit_score",
            format!(
                "Credit score must be between {MIN_CREDIT_SCORE} and {MAX_CREDIT_SCORE}, got {}.",
                profile.declared_credit_score
            ),
        ));
    }
    if profile.monthly_income <= Decimal::ZERO {
        return Err(LoanCalcError::invalid(
            "monthly_income",
            "Monthly income must be positive.",
        ));
    }
    if profile.requested_principal <= Decimal::ZERO {
        return Err(LoanCalcError::invalid(
            "requested_principal",
            "Requested principal must be positive.",
        ));
    }
    Ok(())
}
