use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::FlatError;

/// Inclusive day range used for dashboard summaries.
///
/// Callers normalize timezones upstream; the window itself is a plain
/// calendar-day span in whatever reference zone they picked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FlatError> {
        if end < start {
            return Err(FlatError::InvalidInput(
                "window end must not precede start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    /// First-to-last day of the month containing `reference`, the default
    /// dashboard range.
    pub fn month_of(reference: NaiveDate) -> Self {
        let start = reference.with_day(1).unwrap();
        let next_month = if reference.month() == 12 {
            NaiveDate::from_ymd_opt(reference.year() + 1, 1, 1).unwrap()
        } else {
            NaiveDate::from_ymd_opt(reference.year(), reference.month() + 1, 1).unwrap()
        };
        let end = next_month.pred_opt().unwrap();
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
