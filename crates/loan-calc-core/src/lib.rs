pub mod currency;
pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "amortization")]
pub mod amortization;

#[cfg(feature = "eligibility")]
pub mod eligibility;

#[cfg(feature = "offers")]
pub mod offers;

#[cfg(feature = "application")]
pub mod application;

pub use error::LoanCalcError;
pub use types::*;

/// Standard result type for all loan-calc operations
pub type LoanCalcResult<T> = Result<T, LoanCalcError>;
