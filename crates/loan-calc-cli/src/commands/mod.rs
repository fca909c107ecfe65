pub mod amortization;
pub mod application;
pub mod currency;
pub mod eligibility;
pub mod offers;
