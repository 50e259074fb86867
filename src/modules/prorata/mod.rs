pub mod models;
pub mod services;

pub use models::{FeeCalculationResult, FeeScheduleInput, RenewalAnchor};
pub use services::ProrataCalculator;
