pub mod emi;
pub mod schedule;

pub use emi::{calculate_emi, compute, AmortizationResult, LoanRequest};
pub use schedule::{
    build_schedule, calculate_schedule, AmortizationSchedule, ScheduleInput, ScheduleRow,
    MAX_SCHEDULE_MONTHS,
};
