pub mod fee_schedule;
pub mod renewal_anchor;

pub use fee_schedule::{validate_processor_fee, FeeCalculationResult, FeeScheduleInput};
pub use renewal_anchor::RenewalAnchor;
