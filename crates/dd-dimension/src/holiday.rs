//! Holiday and peak-week classifier.
//!
//! Six holidays are recognised.  Three of them (New Year's Day, Thanksgiving,
//! and Christmas Day) are read straight from the national holiday calendar.
//! The other three have no calendar entry and are derived from an anchor:
//!
//! | derived       | anchor        | offset from anchor |
//! |---------------|---------------|--------------------|
//! | Black Friday  | Thanksgiving  | +1 day             |
//! | Cyber Monday  | Thanksgiving  | +4 days            |
//! | Christmas Eve | Christmas Day | −1 day             |
//!
//! Every other calendar label, including observed-date entries, is treated
//! as a working day.

use dd_core::errors::Result;
use dd_time::calendars::united_states::{CHRISTMAS_DAY, NEW_YEARS_DAY, THANKSGIVING};
use dd_time::{DateKey, HolidayCalendar, UnitedStatesFederal};

/// Name reported for dates that are not a recognised holiday.
pub const NOT_APPLICABLE: &str = "Not Applicable";

/// Days either side of a date searched for Black Friday.
const PEAK_SEARCH_DAYS: i32 = 7;

/// Half-width of the peak window centred on Black Friday.
const PEAK_HALF_WIDTH: i32 = 3;

/// A recognised holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holiday {
    /// January 1.
    NewYearsDay,
    /// Fourth Thursday of November.
    Thanksgiving,
    /// The day after Thanksgiving.
    BlackFriday,
    /// The Monday after Thanksgiving.
    CyberMonday,
    /// December 24.
    ChristmasEve,
    /// December 25.
    ChristmasDay,
}

impl Holiday {
    /// All recognised holidays.
    pub const ALL: [Holiday; 6] = [
        Holiday::BlackFriday,
        Holiday::Thanksgiving,
        Holiday::ChristmasDay,
        Holiday::ChristmasEve,
        Holiday::NewYearsDay,
        Holiday::CyberMonday,
    ];

    /// The display name, as written to the `holiday_name` column.
    pub fn name(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => NEW_YEARS_DAY,
            Holiday::Thanksgiving => THANKSGIVING,
            Holiday::BlackFriday => "Black Friday",
            Holiday::CyberMonday => "Cyber Monday",
            Holiday::ChristmasEve => "Christmas Eve",
            Holiday::ChristmasDay => CHRISTMAS_DAY,
        }
    }

    /// Look up a calendar label; `None` for unsupported labels.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.name() == label)
    }

    /// `true` for the three days that anchor the peak week.
    pub fn is_peak_anchor(&self) -> bool {
        matches!(
            self,
            Holiday::Thanksgiving | Holiday::BlackFriday | Holiday::CyberMonday
        )
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the derivation table: `derived` falls `offset` days after a
/// date labelled `anchor`.
struct Derivation {
    anchor: Holiday,
    offset: i32,
    derived: Holiday,
}

const DERIVATIONS: [Derivation; 3] = [
    Derivation {
        anchor: Holiday::Thanksgiving,
        offset: 1,
        derived: Holiday::BlackFriday,
    },
    Derivation {
        anchor: Holiday::Thanksgiving,
        offset: 4,
        derived: Holiday::CyberMonday,
    },
    Derivation {
        anchor: Holiday::ChristmasDay,
        offset: -1,
        derived: Holiday::ChristmasEve,
    },
];

/// Classifies date keys against a [`HolidayCalendar`].
#[derive(Debug, Clone, Default)]
pub struct HolidayClassifier<C = UnitedStatesFederal> {
    calendar: C,
}

impl HolidayClassifier<UnitedStatesFederal> {
    /// A classifier over US federal holidays.
    pub fn united_states() -> Self {
        Self::new(UnitedStatesFederal)
    }
}

impl<C: HolidayCalendar> HolidayClassifier<C> {
    /// Create a classifier over `calendar`.
    pub fn new(calendar: C) -> Self {
        Self { calendar }
    }

    /// The underlying calendar.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    fn direct(&self, key: DateKey) -> Option<Holiday> {
        self.calendar
            .label(key.to_date())
            .and_then(Holiday::from_label)
    }

    /// Return the recognised holiday on `key`, if any.
    ///
    /// A supported calendar label wins; otherwise the derivation table is
    /// consulted.  Anchors are only ever read directly from the calendar, so
    /// the lookup never recurses.
    pub fn classify(&self, key: DateKey) -> Result<Option<Holiday>> {
        if let Some(h) = self.direct(key) {
            return Ok(Some(h));
        }
        for rule in &DERIVATIONS {
            let anchor_key = key.add_days(-rule.offset)?;
            if self.direct(anchor_key) == Some(rule.anchor) {
                return Ok(Some(rule.derived));
            }
        }
        Ok(None)
    }

    /// `true` if `key` is one of the six recognised holidays.
    pub fn is_holiday(&self, key: DateKey) -> Result<bool> {
        Ok(self.classify(key)?.is_some())
    }

    /// Holiday name, or [`NOT_APPLICABLE`].
    pub fn holiday_name(&self, key: DateKey) -> Result<&'static str> {
        Ok(self.classify(key)?.map_or(NOT_APPLICABLE, |h| h.name()))
    }

    /// `true` from the Tuesday before Black Friday through Cyber Monday.
    ///
    /// Thanksgiving, Black Friday, and Cyber Monday are peak days outright.
    /// Otherwise Black Friday is searched for up to seven days either side,
    /// and `key` is peak when it lies within three days of it.
    pub fn is_peak_week(&self, key: DateKey) -> Result<bool> {
        if self.classify(key)?.is_some_and(|h| h.is_peak_anchor()) {
            return Ok(true);
        }
        let Some(black_friday) = self.black_friday_near(key)? else {
            return Ok(false);
        };
        let distance = key.to_date().days_between(black_friday.to_date());
        Ok(distance.abs() <= PEAK_HALF_WIDTH)
    }

    fn black_friday_near(&self, key: DateKey) -> Result<Option<DateKey>> {
        for offset in 1..=PEAK_SEARCH_DAYS {
            for candidate in [key.add_days(-offset)?, key.add_days(offset)?] {
                if self.classify(candidate)? == Some(Holiday::BlackFriday) {
                    return Ok(Some(candidate));
                }
            }
        }
        Ok(None)
    }
}
