pub mod limits;
pub mod validation;

pub use limits::ApplicationLimits;
pub use validation::{
    validate_application, validate_financial_details, FieldViolation, FinancialDetails,
    ValidationReport,
};
