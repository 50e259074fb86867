pub mod prorata_calculator;

pub use prorata_calculator::{ProrataCalculator, AVERAGE_DAYS_PER_MONTH};
