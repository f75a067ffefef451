//! `HolidayCalendar` trait and the empty calendar.
//!
//! A holiday calendar maps each date to an optional holiday label.  It is a
//! pure function of the date (and therefore of the year); no state is kept.

use std::collections::BTreeMap;

use crate::date::Date;

/// A national holiday calendar.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"United States (Federal)"`).
    fn name(&self) -> &str;

    /// Return the holiday label for `date`, if any.
    ///
    /// Observed-date entries carry their own label (for example
    /// `"Christmas Day (Observed)"`).
    fn label(&self, date: Date) -> Option<&'static str>;

    /// Return `true` if `date` carries any label.
    fn is_holiday(&self, date: Date) -> bool {
        self.label(date).is_some()
    }

    /// Return every labelled date of `year`, in date order.
    fn holidays_for_year(&self, year: u16) -> BTreeMap<Date, &'static str> {
        let mut holidays = BTreeMap::new();
        let Ok(mut d) = Date::from_ymd(year, 1, 1) else {
            return holidays;
        };
        while d.year() == year {
            if let Some(label) = self.label(d) {
                holidays.insert(d, label);
            }
            match d.add_days(1) {
                Ok(next) => d = next,
                Err(_) => break,
            }
        }
        holidays
    }
}

/// A calendar with no holidays at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn name(&self) -> &str {
        "None"
    }

    fn label(&self, _date: Date) -> Option<&'static str> {
        None
    }
}
