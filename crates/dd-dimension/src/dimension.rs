//! `DateDimension` — the date dimension over a range of keys.
//!
//! Rows are independent of each other, so generation is a parallel map over
//! the range; the result is always in key order.

use dd_core::ensure;
use dd_core::errors::Result;
use dd_time::{DateKey, HolidayCalendar, UnitedStatesFederal};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::engine::HalfYearDayRule;
use crate::holiday::HolidayClassifier;
use crate::row::DateRow;

/// Default first key of the dimension.
pub const DEFAULT_START: u32 = 20_000_101;

/// Default last key of the dimension.
pub const DEFAULT_END: u32 = 20_501_231;

/// An inclusive range of date keys plus the conventions used to derive rows.
#[derive(Debug, Clone)]
pub struct DateDimension<C = UnitedStatesFederal> {
    start: DateKey,
    end: DateKey,
    half_year_day: HalfYearDayRule,
    classifier: HolidayClassifier<C>,
}

impl DateDimension<UnitedStatesFederal> {
    /// A dimension over `start..=end` using US federal holidays.
    ///
    /// # Errors
    /// [`dd_core::Error::Precondition`] if `start > end`.
    pub fn new(start: DateKey, end: DateKey) -> Result<Self> {
        Self::with_calendar(start, end, UnitedStatesFederal)
    }
}

impl<C: HolidayCalendar> DateDimension<C> {
    /// A dimension over `start..=end` using `calendar` for holidays.
    pub fn with_calendar(start: DateKey, end: DateKey, calendar: C) -> Result<Self> {
        ensure!(start <= end, "start {start} is after end {end}");
        Ok(Self {
            start,
            end,
            half_year_day: HalfYearDayRule::default(),
            classifier: HolidayClassifier::new(calendar),
        })
    }

    /// Choose how `day_of_year_half` is numbered.
    pub fn half_year_day(mut self, rule: HalfYearDayRule) -> Self {
        self.half_year_day = rule;
        self
    }

    /// First key.
    pub fn start(&self) -> DateKey {
        self.start
    }

    /// Last key.
    pub fn end(&self) -> DateKey {
        self.end
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    /// Always `false`; a dimension holds at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the keys of the dimension.
    pub fn keys(&self) -> dd_time::date_key::DateKeyRange {
        DateKey::range_inclusive(self.start, self.end)
    }

    /// Derive the row for a single key.
    pub fn row(&self, key: DateKey) -> Result<DateRow> {
        DateRow::derive(key, &self.classifier, self.half_year_day)
    }

    /// Derive every row, in key order.
    pub fn rows(&self) -> Result<Vec<DateRow>> {
        let keys: Vec<DateKey> = self.keys().collect();
        debug!(
            start = %self.start,
            end = %self.end,
            calendar = self.classifier.calendar().name(),
            rule = ?self.half_year_day,
            "deriving date rows"
        );
        let rows = keys
            .par_iter()
            .map(|&key| self.row(key))
            .collect::<Result<Vec<_>>>()?;
        info!(rows = rows.len(), "date dimension derived");
        Ok(rows)
    }
}
