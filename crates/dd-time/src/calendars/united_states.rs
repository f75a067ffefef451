//! United States federal holiday calendar.

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use crate::weekday::Weekday;

/// Label of New Year's Day.
pub const NEW_YEARS_DAY: &str = "New Year's Day";
/// Label of Martin Luther King Jr. Day.
pub const MLK_DAY: &str = "Martin Luther King Jr. Day";
/// Label of Washington's Birthday (Presidents' Day).
pub const WASHINGTONS_BIRTHDAY: &str = "Washington's Birthday";
/// Label of Memorial Day.
pub const MEMORIAL_DAY: &str = "Memorial Day";
/// Label of Juneteenth.
pub const JUNETEENTH: &str = "Juneteenth National Independence Day";
/// Label of Independence Day.
pub const INDEPENDENCE_DAY: &str = "Independence Day";
/// Label of Labor Day.
pub const LABOR_DAY: &str = "Labor Day";
/// Label of Columbus Day.
pub const COLUMBUS_DAY: &str = "Columbus Day";
/// Label of Veterans Day.
pub const VETERANS_DAY: &str = "Veterans Day";
/// Label of Thanksgiving.
pub const THANKSGIVING: &str = "Thanksgiving";
/// Label of Christmas Day.
pub const CHRISTMAS_DAY: &str = "Christmas Day";

/// United States — federal holidays.
///
/// Holidays:
/// * New Year's Day (Jan 1)
/// * Martin Luther King Jr. Day (3rd Mon in Jan, from 1986)
/// * Washington's Birthday (3rd Mon in Feb)
/// * Memorial Day (last Mon in May)
/// * Juneteenth National Independence Day (Jun 19, from 2021)
/// * Independence Day (Jul 4)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (2nd Mon in Oct)
/// * Veterans Day (Nov 11)
/// * Thanksgiving (4th Thu in Nov)
/// * Christmas Day (Dec 25)
///
/// Fixed-date holidays that fall on a Saturday are observed the Friday
/// before, on a Sunday the Monday after.  The observed date is labelled
/// `"<name> (Observed)"`; the actual date keeps the plain label.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStatesFederal;

impl HolidayCalendar for UnitedStatesFederal {
    fn name(&self) -> &str {
        "United States (Federal)"
    }

    fn label(&self, date: Date) -> Option<&'static str> {
        let (y, m, d) = date.ymd();
        us_federal_label(y, m, d, date.weekday())
    }
}

fn us_federal_label(y: u16, m: u8, d: u8, w: Weekday) -> Option<&'static str> {
    // Actual dates first: an observed entry never shadows a real one.
    let label = match (m, d) {
        (1, 1) => Some(NEW_YEARS_DAY),
        (6, 19) if y >= 2021 => Some(JUNETEENTH),
        (7, 4) => Some(INDEPENDENCE_DAY),
        (11, 11) => Some(VETERANS_DAY),
        (12, 25) => Some(CHRISTMAS_DAY),
        _ => None,
    };
    if label.is_some() {
        return label;
    }

    if w == Weekday::Monday {
        // MLK Day (3rd Monday of January)
        if y >= 1986 && m == 1 && (15..=21).contains(&d) {
            return Some(MLK_DAY);
        }
        // Washington's Birthday (3rd Monday of February)
        if m == 2 && (15..=21).contains(&d) {
            return Some(WASHINGTONS_BIRTHDAY);
        }
        // Memorial Day (last Monday of May)
        if m == 5 && d >= 25 {
            return Some(MEMORIAL_DAY);
        }
        // Labor Day (1st Monday of September)
        if m == 9 && d <= 7 {
            return Some(LABOR_DAY);
        }
        // Columbus Day (2nd Monday of October)
        if m == 10 && (8..=14).contains(&d) {
            return Some(COLUMBUS_DAY);
        }
    }
    // Thanksgiving (4th Thursday of November)
    if w == Weekday::Thursday && m == 11 && (22..=28).contains(&d) {
        return Some(THANKSGIVING);
    }

    observed_label(y, m, d, w)
}

/// Observed shifts: Friday before a Saturday holiday, Monday after a Sunday one.
fn observed_label(y: u16, m: u8, d: u8, w: Weekday) -> Option<&'static str> {
    match w {
        Weekday::Friday => match (m, d) {
            // New Year's Day of the following year falls on Saturday
            (12, 31) => Some("New Year's Day (Observed)"),
            (6, 18) if y >= 2021 => Some("Juneteenth National Independence Day (Observed)"),
            (7, 3) => Some("Independence Day (Observed)"),
            (11, 10) => Some("Veterans Day (Observed)"),
            (12, 24) => Some("Christmas Day (Observed)"),
            _ => None,
        },
        Weekday::Monday => match (m, d) {
            (1, 2) => Some("New Year's Day (Observed)"),
            (6, 20) if y >= 2021 => Some("Juneteenth National Independence Day (Observed)"),
            (7, 5) => Some("Independence Day (Observed)"),
            (11, 12) => Some("Veterans Day (Observed)"),
            (12, 26) => Some("Christmas Day (Observed)"),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn thanksgiving_2023() {
        let cal = UnitedStatesFederal;
        // 4th Thursday of November 2023 = Nov 23
        assert_eq!(cal.label(date(2023, 11, 23)), Some(THANKSGIVING));
        assert_eq!(cal.label(date(2023, 11, 24)), None);
    }

    #[test]
    fn christmas_on_saturday_is_observed_friday() {
        let cal = UnitedStatesFederal;
        // 2021-12-25 is a Saturday
        assert_eq!(cal.label(date(2021, 12, 25)), Some(CHRISTMAS_DAY));
        assert_eq!(
            cal.label(date(2021, 12, 24)),
            Some("Christmas Day (Observed)")
        );
    }

    #[test]
    fn new_year_on_saturday_is_observed_on_new_years_eve() {
        let cal = UnitedStatesFederal;
        // 2022-01-01 is a Saturday
        assert_eq!(
            cal.label(date(2021, 12, 31)),
            Some("New Year's Day (Observed)")
        );
        // 2023-01-01 is a Sunday
        assert_eq!(
            cal.label(date(2023, 1, 2)),
            Some("New Year's Day (Observed)")
        );
    }

    #[test]
    fn juneteenth_starts_2021() {
        let cal = UnitedStatesFederal;
        assert_eq!(cal.label(date(2020, 6, 19)), None);
        assert_eq!(cal.label(date(2023, 6, 19)), Some(JUNETEENTH));
    }

    #[test]
    fn federal_holidays_2023() {
        let cal = UnitedStatesFederal;
        let holidays = cal.holidays_for_year(2023);
        let expected = [
            ((1, 1), NEW_YEARS_DAY),
            ((1, 2), "New Year's Day (Observed)"),
            ((1, 16), MLK_DAY),
            ((2, 20), WASHINGTONS_BIRTHDAY),
            ((5, 29), MEMORIAL_DAY),
            ((6, 19), JUNETEENTH),
            ((7, 4), INDEPENDENCE_DAY),
            ((9, 4), LABOR_DAY),
            ((10, 9), COLUMBUS_DAY),
            ((11, 10), "Veterans Day (Observed)"),
            ((11, 11), VETERANS_DAY),
            ((11, 23), THANKSGIVING),
            ((12, 25), CHRISTMAS_DAY),
        ];
        let actual: Vec<_> = holidays.iter().map(|(d, l)| (*d, *l)).collect();
        let expected: Vec<_> = expected
            .iter()
            .map(|((m, d), l)| (date(2023, *m, *d), *l))
            .collect();
        assert_eq!(actual, expected);
    }
}
