pub mod factors;
pub mod scorer;

pub use factors::{assess, assess_eligibility, EligibilityAssessment, EligibilityFactor, FactorStatus};
pub use scorer::{
    score, score_components, ApplicantProfile, EligibilityBand, EligibilityResult, ScoreComponents,
};
