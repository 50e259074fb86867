use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::core::{AppError, Result};

/// Source of the site-local calendar date.
///
/// Callers read `today()` once per calculation and pass the date along, so the
/// renewal date and the days remaining are always derived from the same day.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock shifted to the membership site's fixed UTC offset
#[derive(Debug, Clone, Copy)]
pub struct SiteClock {
    offset: FixedOffset,
}

impl SiteClock {
    /// Build a clock for a whole-hour UTC offset (South Africa is +2)
    pub fn from_offset_hours(hours: i32) -> Result<Self> {
        let offset = FixedOffset::east_opt(hours * 3600).ok_or_else(|| {
            AppError::Configuration(format!("Invalid site UTC offset: {} hours", hours))
        })?;
        Ok(Self { offset })
    }

    /// Site-local date for a UTC instant
    pub fn local_date(&self, utc_time: DateTime<Utc>) -> NaiveDate {
        utc_time.with_timezone(&self.offset).date_naive()
    }
}

impl Clock for SiteClock {
    fn today(&self) -> NaiveDate {
        self.local_date(Utc::now())
    }
}

/// Clock pinned to one date, for tests and replaying a past checkout
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
