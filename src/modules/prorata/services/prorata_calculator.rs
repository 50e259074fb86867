use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::core::currency::round_up_to_scale;
use crate::core::{AppError, Result};
use crate::modules::prorata::models::{
    validate_processor_fee, FeeCalculationResult, FeeScheduleInput, RenewalAnchor,
};

/// Average days per month over a year. Pro-rata amounts depend on this exact
/// approximation, not on calendar months.
pub const AVERAGE_DAYS_PER_MONTH: Decimal = Decimal::from_parts(3044, 0, 0, false, 2);

const SECONDS_PER_DAY: i64 = 86_400;
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const CENT_SCALE: u32 = 2;
const ZERO_CENTS: Decimal = Decimal::from_parts(0, 0, 0, false, CENT_SCALE);
/// Dividing by 12 and by 30.44 each leave a 28-digit remainder. Exact
/// pro-rata amounts never have a nonzero digit this far out, so rounding here
/// first stops that error from tipping a whole-cent amount up a cent.
const EXACT_SCALE: u32 = 15;

/// Pro-rata membership fee calculator with card processor gross-up.
///
/// Every operation is pure; `today` is supplied by the caller.
pub struct ProrataCalculator;

impl ProrataCalculator {
    /// Next renewal on or after `today`.
    ///
    /// Uses the anchor in `today`'s year, moving to the following year only
    /// when `today` is strictly past it.
    pub fn compute_next_renewal_date(today: NaiveDate, anchor: RenewalAnchor) -> Result<NaiveDate> {
        let this_year = anchor_date(anchor, today.year())?;

        if today > this_year {
            anchor_date(anchor, today.year() + 1)
        } else {
            Ok(this_year)
        }
    }

    /// Whole days until renewal, partial days rounded up
    pub fn days_remaining(today: NaiveDate, renewal_date: NaiveDate) -> i64 {
        let seconds = renewal_date.signed_duration_since(today).num_seconds();
        // ceil(a / b) == -floor(-a / b)
        -(-seconds).div_euclid(SECONDS_PER_DAY)
    }

    /// Inclusive: joining exactly `threshold_days` before renewal is within
    pub fn within_threshold(days_remaining: i64, threshold_days: u32) -> bool {
        days_remaining <= i64::from(threshold_days)
    }

    pub fn months_remaining(days_remaining: i64) -> Decimal {
        Decimal::from(days_remaining) / AVERAGE_DAYS_PER_MONTH
    }

    /// `(annual_fee / 12) * months`, rounded up to the next cent.
    /// Zero inside the threshold or when no time remains.
    pub fn compute_pro_rata(
        annual_fee: Decimal,
        months_remaining: Decimal,
        within_threshold: bool,
    ) -> Result<Decimal> {
        if within_threshold || months_remaining <= Decimal::ZERO {
            return Ok(ZERO_CENTS);
        }

        let raw = (annual_fee / MONTHS_PER_YEAR)
            .checked_mul(months_remaining)
            .ok_or_else(|| {
                AppError::invalid_input(format!("Annual fee {} is too large to pro-rate", annual_fee))
            })?;

        Ok(round_up_to_scale(raw.round_dp(EXACT_SCALE), CENT_SCALE))
    }

    /// Gross up `base_amount` so that after the processor keeps
    /// `percentage% * total + fixed_fee` the organisation still nets the base.
    ///
    /// Returns `(total, fee_amount)`; `total` is rounded up to the next cent.
    pub fn apply_processor_fee(
        base_amount: Decimal,
        percentage: Decimal,
        fixed_fee: Decimal,
    ) -> Result<(Decimal, Decimal)> {
        validate_processor_fee(percentage, fixed_fee)?;

        let p = percentage / Decimal::ONE_HUNDRED;
        let gross = base_amount
            .checked_add(fixed_fee)
            .and_then(|amount| amount.checked_div(Decimal::ONE - p))
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Amount {} is too large to gross up at {}%",
                    base_amount, percentage
                ))
            })?;

        let total = round_up_to_scale(gross, CENT_SCALE);
        let fee_amount = total - base_amount;

        Ok((total, fee_amount))
    }

    /// Price a new membership for `input.today`
    pub fn calculate(input: &FeeScheduleInput) -> Result<FeeCalculationResult> {
        input.validate()?;

        let renewal_date = Self::compute_next_renewal_date(input.today, input.anchor)?;
        let days = Self::days_remaining(input.today, renewal_date);
        let threshold = Self::within_threshold(days, input.threshold_days);
        let months = Self::months_remaining(days);

        debug!(
            today = %input.today,
            renewal_date = %renewal_date,
            days_remaining = days,
            months_remaining = %months,
            within_threshold = threshold,
            "Computed renewal window"
        );

        let pro_rata = Self::compute_pro_rata(input.annual_fee, months, threshold)?;

        let (total, fee) = if input.pay_by_card && pro_rata > Decimal::ZERO {
            Self::apply_processor_fee(
                pro_rata,
                input.processor_percentage,
                input.processor_fixed_fee,
            )?
        } else {
            (pro_rata, ZERO_CENTS)
        };

        info!(
            "Pro-rata fee for annual {}: {} + processor {} = {} ({} days to {})",
            input.annual_fee, pro_rata, fee, total, days, renewal_date
        );

        Ok(FeeCalculationResult {
            pro_rata_amount: pro_rata,
            processor_fee: fee,
            total_due: total,
            months_remaining: months.ceil(),
            days_remaining: days,
            within_threshold: threshold,
            next_renewal_date: renewal_date,
        })
    }
}

fn anchor_date(anchor: RenewalAnchor, year: i32) -> Result<NaiveDate> {
    anchor.date_in_year(year).ok_or_else(|| {
        AppError::invalid_input(format!(
            "Renewal date {}-{:02}-{:02} is out of range",
            year,
            anchor.month(),
            anchor.day()
        ))
    })
}
