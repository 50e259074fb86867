use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::RenewalAnchor;
use crate::core::{AppError, Result};

/// Everything needed to price a new membership on a given day.
///
/// Assembled once by the caller from the level, the fee settings and the
/// checkout selection; the calculator never looks anything up on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeScheduleInput {
    /// Full annual fee of the selected membership level
    pub annual_fee: Decimal,
    /// Site-local date the calculation is made for
    pub today: NaiveDate,
    pub anchor: RenewalAnchor,
    /// Joining this close to renewal defers payment to the next cycle
    pub threshold_days: u32,
    pub pay_by_card: bool,
    /// Processor percentage fee, 0 <= p < 100
    pub processor_percentage: Decimal,
    pub processor_fixed_fee: Decimal,
}

impl FeeScheduleInput {
    /// Reject inputs that would price a membership nonsensically
    pub fn validate(&self) -> Result<()> {
        if self.annual_fee < Decimal::ZERO {
            return Err(AppError::invalid_input(format!(
                "Annual fee cannot be negative, got {}",
                self.annual_fee
            )));
        }

        validate_processor_fee(self.processor_percentage, self.processor_fixed_fee)
    }
}

/// Percentage must lie in [0, 100) and the fixed fee must be non-negative,
/// otherwise the gross-up denominator `1 - p` is zero or negative.
pub fn validate_processor_fee(percentage: Decimal, fixed_fee: Decimal) -> Result<()> {
    if percentage < Decimal::ZERO || percentage >= Decimal::ONE_HUNDRED {
        return Err(AppError::invalid_input(format!(
            "Processor percentage must be at least 0 and below 100, got {}",
            percentage
        )));
    }

    if fixed_fee < Decimal::ZERO {
        return Err(AppError::invalid_input(format!(
            "Processor fixed fee cannot be negative, got {}",
            fixed_fee
        )));
    }

    Ok(())
}

/// Outcome of a pro-rata calculation.
///
/// `total_due == pro_rata_amount + processor_fee` always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeCalculationResult {
    pub pro_rata_amount: Decimal,
    pub processor_fee: Decimal,
    pub total_due: Decimal,
    /// Whole months, rounded up, for display
    pub months_remaining: Decimal,
    pub days_remaining: i64,
    pub within_threshold: bool,
    pub next_renewal_date: NaiveDate,
}
