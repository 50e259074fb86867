use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::core::{AppError, Result};

/// Fixed calendar date (year-independent) on which every membership renews
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenewalAnchor {
    month: u32,
    day: u32,
}

impl RenewalAnchor {
    /// Build an anchor from a configured month (1-12) and day (1-31).
    ///
    /// Days that a month does not always have (29-31) are accepted and clamped
    /// per year by [`RenewalAnchor::date_in_year`].
    pub fn new(month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::invalid_input(format!(
                "Renewal month must be between 1 and 12, got {}",
                month
            )));
        }

        if !(1..=31).contains(&day) {
            return Err(AppError::invalid_input(format!(
                "Renewal day must be between 1 and 31, got {}",
                day
            )));
        }

        Ok(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The anchor's date in `year`, clamped to the last day of the month
    /// when the configured day does not exist (e.g. 29 Feb in 2025 -> 28 Feb).
    ///
    /// Returns `None` only when `year` is outside chrono's supported range.
    pub fn date_in_year(&self, year: i32) -> Option<NaiveDate> {
        let first = NaiveDate::from_ymd_opt(year, self.month, 1)?;
        let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
        NaiveDate::from_ymd_opt(year, self.month, self.day.min(last.day()))
    }
}
