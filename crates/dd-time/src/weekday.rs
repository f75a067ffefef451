//! `Weekday` — day-of-week enum.
//!
//! Two numberings are in use.  ISO 8601 numbers Monday = 1 … Sunday = 7 and
//! drives week arithmetic.  Retail reporting numbers Sunday = 1 …
//! Saturday = 7; that is the `day_of_week` attribute of a dimension row.

/// Day of the week.
///
/// Variants carry their ISO ordinal (Monday = 1, Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Construct from the ISO ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Construct from the Sunday-based ordinal (1 = Sunday … 7 = Saturday).
    pub fn from_sunday_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Sunday),
            2..=7 => Self::from_ordinal(n - 1),
            _ => None,
        }
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Return the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the Sunday-based ordinal (1 = Sunday … 7 = Saturday).
    pub fn sunday_ordinal(&self) -> u8 {
        self.ordinal() % 7 + 1
    }

    /// Return the full English name (`"Monday"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Return the three-letter abbreviation (`"Mon"`, …).
    pub fn short_name(&self) -> &'static str {
        &self.long_name()[..3]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_ordinal_cycle() {
        assert_eq!(Weekday::Sunday.sunday_ordinal(), 1);
        assert_eq!(Weekday::Monday.sunday_ordinal(), 2);
        assert_eq!(Weekday::Saturday.sunday_ordinal(), 7);
        for n in 1..=7u8 {
            let w = Weekday::from_sunday_ordinal(n).unwrap();
            assert_eq!(w.sunday_ordinal(), n);
            assert_eq!(Weekday::from_ordinal(w.ordinal()), Some(w));
        }
        assert!(Weekday::from_sunday_ordinal(0).is_none());
        assert!(Weekday::from_sunday_ordinal(8).is_none());
    }

    #[test]
    fn names() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
        assert_eq!(Weekday::Wednesday.short_name(), "Wed");
        assert!(Weekday::Sunday.is_weekend());
        assert!(!Weekday::Friday.is_weekend());
    }
}
