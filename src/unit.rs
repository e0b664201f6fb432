use crate::util::t;

/// A unit of time, from nanoseconds up to millennia.
///
/// Units are used for two things in this crate: adding an amount of some
/// unit to a value (for example, [`DateTime::checked_add_unit`]) and
/// truncating a value to some unit (for example, [`Time::truncated_to`]).
///
/// Units up to and including [`Unit::HalfDay`] are _time based_. They have
/// an exact length in nanoseconds. [`Unit::Day`] and bigger are _date based_.
/// Days and weeks are still treated as exactly 24 hours and 7 days
/// respectively when a fixed length is required, but months and bigger have
/// no fixed length at all.
///
/// [`DateTime::checked_add_unit`]: crate::civil::DateTime::checked_add_unit
/// [`Time::truncated_to`]: crate::civil::Time::truncated_to
///
/// # Example: ordering
///
/// Bigger units compare greater than smaller units.
///
/// ```
/// use calendrical::Unit;
///
/// assert!(Unit::Year > Unit::Nanosecond);
/// assert!(Unit::Day > Unit::HalfDay);
/// assert!(Unit::HalfDay > Unit::Hour);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Unit {
    /// One thousand years.
    Millennium = 13,
    /// One hundred years.
    Century = 12,
    /// Ten years.
    Decade = 11,
    /// A Gregorian calendar year. It has 365 days, or 366 in leap years.
    Year = 10,
    /// A Gregorian calendar month. It has one of 28, 29, 30 or 31 days.
    Month = 9,
    /// Seven days.
    Week = 8,
    /// A civil day.
    Day = 7,
    /// Twelve hours.
    HalfDay = 6,
    /// An hour is always 60 minutes.
    Hour = 5,
    /// A minute is always 60 seconds.
    Minute = 4,
    /// A second is always 1,000 milliseconds.
    Second = 3,
    /// A millisecond is always 1,000 microseconds.
    Millisecond = 2,
    /// A microsecond is always 1,000 nanoseconds.
    Microsecond = 1,
    /// The smallest granularity of time supported by this crate.
    Nanosecond = 0,
}

impl Unit {
    /// Returns true for units smaller than a day.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::Unit;
    ///
    /// assert!(Unit::HalfDay.is_time_based());
    /// assert!(!Unit::Day.is_time_based());
    /// ```
    pub fn is_time_based(self) -> bool {
        self <= Unit::HalfDay
    }

    /// Returns true for units of a day or bigger.
    pub fn is_date_based(self) -> bool {
        self >= Unit::Day
    }

    /// Returns the number of nanoseconds in this unit, when it has a fixed
    /// length.
    ///
    /// Days and weeks are treated as 24 hours and 7 days respectively.
    /// Months and bigger return `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::Unit;
    ///
    /// assert_eq!(Unit::Minute.nanoseconds(), Some(60_000_000_000));
    /// assert_eq!(Unit::Month.nanoseconds(), None);
    /// ```
    pub fn nanoseconds(self) -> Option<i64> {
        Some(match self {
            Unit::Nanosecond => 1,
            Unit::Microsecond => t::NANOS_PER_MICRO,
            Unit::Millisecond => t::NANOS_PER_MILLI,
            Unit::Second => t::NANOS_PER_SECOND,
            Unit::Minute => t::NANOS_PER_MINUTE,
            Unit::Hour => t::NANOS_PER_HOUR,
            Unit::HalfDay => 12 * t::NANOS_PER_HOUR,
            Unit::Day => t::NANOS_PER_DAY,
            Unit::Week => 7 * t::NANOS_PER_DAY,
            Unit::Month
            | Unit::Year
            | Unit::Decade
            | Unit::Century
            | Unit::Millennium => return None,
        })
    }

    /// Returns the number of nanoseconds in this unit when it evenly divides
    /// a day.
    ///
    /// This is the precondition for truncating a time of day to this unit.
    pub(crate) fn divisor_of_day(self) -> Option<i64> {
        let nanos = self.nanoseconds()?;
        if nanos > t::NANOS_PER_DAY || t::NANOS_PER_DAY % nanos != 0 {
            return None;
        }
        Some(nanos)
    }

    /// Returns the number of months in this unit, for units of a month or
    /// bigger.
    pub(crate) fn months(self) -> Option<i64> {
        Some(match self {
            Unit::Month => 1,
            Unit::Year => 12,
            Unit::Decade => 120,
            Unit::Century => 1_200,
            Unit::Millennium => 12_000,
            _ => return None,
        })
    }

    /// A human readable singular description of this unit of time.
    pub(crate) fn singular(&self) -> &'static str {
        match *self {
            Unit::Millennium => "millennium",
            Unit::Century => "century",
            Unit::Decade => "decade",
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::HalfDay => "half-day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
            Unit::Microsecond => "microsecond",
            Unit::Nanosecond => "nanosecond",
        }
    }

    /// A human readable plural description of this unit of time.
    pub(crate) fn plural(&self) -> &'static str {
        match *self {
            Unit::Millennium => "millennia",
            Unit::Century => "centuries",
            Unit::Decade => "decades",
            Unit::Year => "years",
            Unit::Month => "months",
            Unit::Week => "weeks",
            Unit::Day => "days",
            Unit::HalfDay => "half-days",
            Unit::Hour => "hours",
            Unit::Minute => "minutes",
            Unit::Second => "seconds",
            Unit::Millisecond => "milliseconds",
            Unit::Microsecond => "microseconds",
            Unit::Nanosecond => "nanoseconds",
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Unit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Unit {
        *g.choose(&[
            Unit::Millennium,
            Unit::Century,
            Unit::Decade,
            Unit::Year,
            Unit::Month,
            Unit::Week,
            Unit::Day,
            Unit::HalfDay,
            Unit::Hour,
            Unit::Minute,
            Unit::Second,
            Unit::Millisecond,
            Unit::Microsecond,
            Unit::Nanosecond,
        ])
        .unwrap()
    }
}
