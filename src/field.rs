use crate::{
    error::Error,
    util::b::{self, Bounds},
};

/// A named field of a date, time, datetime or zoned datetime.
///
/// Fields give uniform access to the components of values via `get` and
/// `with` methods. For example, [`Date::get`] and [`Date::with`]. Each type
/// only supports the fields that make sense for it: a [`Date`] has no
/// [`Field::HourOfDay`] and a [`Time`] has no [`Field::Year`]. Asking a type
/// for a field it doesn't support returns an error for which
/// [`Error::is_unsupported`] is true. Setting a supported field to a value
/// outside of [`Field::range`] returns an error for which
/// [`Error::is_range`] is true.
///
/// [`Date::get`]: crate::civil::Date::get
/// [`Date::with`]: crate::civil::Date::with
/// [`Date`]: crate::civil::Date
/// [`Time`]: crate::civil::Time
///
/// # Example
///
/// ```
/// use calendrical::{civil::date, Field};
///
/// let d = date(2024, 2, 29);
/// assert_eq!(d.get(Field::DayOfYear)?, 60);
/// assert_eq!(d.with(Field::MonthOfYear, 4)?, date(2024, 4, 29));
/// assert!(d.get(Field::HourOfDay).unwrap_err().is_unsupported());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Field {
    /// The nanosecond within the second, `0..=999_999_999`.
    NanoOfSecond,
    /// The nanosecond within the day, `0..=86_399_999_999_999`.
    NanoOfDay,
    /// The microsecond within the second, `0..=999_999`.
    MicroOfSecond,
    /// The millisecond within the second, `0..=999`.
    MilliOfSecond,
    /// The second within the minute, `0..=59`.
    SecondOfMinute,
    /// The second within the day, `0..=86_399`.
    SecondOfDay,
    /// The minute within the hour, `0..=59`.
    MinuteOfHour,
    /// The minute within the day, `0..=1_439`.
    MinuteOfDay,
    /// The hour within the day, `0..=23`.
    HourOfDay,
    /// The ISO day of the week, from Monday (`1`) to Sunday (`7`).
    DayOfWeek,
    /// The day of the month, `1..=31`.
    DayOfMonth,
    /// The day of the year, `1..=366`.
    DayOfYear,
    /// The number of days since 1970-01-01.
    EpochDay,
    /// The month of the year, `1..=12`.
    MonthOfYear,
    /// The number of months since January of year zero.
    ProlepticMonth,
    /// The proleptic year, `-999_999_999..=999_999_999`.
    Year,
    /// The number of seconds since 1970-01-01T00:00:00Z.
    InstantSeconds,
    /// The total number of seconds in a time zone offset.
    OffsetSeconds,
}

impl Field {
    /// Returns true when this field is a component of a date.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::Field;
    ///
    /// assert!(Field::EpochDay.is_date_based());
    /// assert!(!Field::NanoOfDay.is_date_based());
    /// assert!(!Field::InstantSeconds.is_date_based());
    /// ```
    pub fn is_date_based(self) -> bool {
        use self::Field::*;

        matches!(
            self,
            DayOfWeek
                | DayOfMonth
                | DayOfYear
                | EpochDay
                | MonthOfYear
                | ProlepticMonth
                | Year
        )
    }

    /// Returns true when this field is a component of a time of day.
    pub fn is_time_based(self) -> bool {
        use self::Field::*;

        matches!(
            self,
            NanoOfSecond
                | NanoOfDay
                | MicroOfSecond
                | MilliOfSecond
                | SecondOfMinute
                | SecondOfDay
                | MinuteOfHour
                | MinuteOfDay
                | HourOfDay
        )
    }

    /// Returns the inclusive range of values this field may take on.
    ///
    /// Some fields, such as [`Field::DayOfMonth`], may be further restricted
    /// by the value they're applied to.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::Field;
    ///
    /// assert_eq!(Field::MinuteOfDay.range(), (0, 1_439));
    /// assert_eq!(Field::OffsetSeconds.range(), (-64_800, 64_800));
    /// ```
    pub fn range(self) -> (i64, i64) {
        fn range<B: Bounds>() -> (i64, i64) {
            use crate::util::b::Primitive;

            (B::MIN.as_i64(), B::MAX.as_i64())
        }

        use self::Field::*;

        match self {
            NanoOfSecond => range::<b::SubsecNanosecond>(),
            NanoOfDay => range::<b::NanoOfDay>(),
            MicroOfSecond => range::<b::SubsecMicrosecond>(),
            MilliOfSecond => range::<b::SubsecMillisecond>(),
            SecondOfMinute => range::<b::Second>(),
            SecondOfDay => range::<b::SecondOfDay>(),
            MinuteOfHour => range::<b::Minute>(),
            MinuteOfDay => range::<b::MinuteOfDay>(),
            HourOfDay => range::<b::Hour>(),
            DayOfWeek => range::<b::Weekday>(),
            DayOfMonth => range::<b::Day>(),
            DayOfYear => range::<b::DayOfYear>(),
            EpochDay => range::<b::EpochDay>(),
            MonthOfYear => range::<b::Month>(),
            ProlepticMonth => range::<b::ProlepticMonth>(),
            Year => range::<b::Year>(),
            InstantSeconds => range::<b::InstantSecond>(),
            OffsetSeconds => range::<b::OffsetTotalSeconds>(),
        }
    }

    /// Checks that the given value is within [`Field::range`].
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::Field;
    ///
    /// assert_eq!(Field::HourOfDay.check(23)?, 23);
    /// assert!(Field::HourOfDay.check(24).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn check(self, value: i64) -> Result<i64, Error> {
        let (min, max) = self.range();
        if !(min <= value && value <= max) {
            return Err(Error::range(self.name(), value, min, max));
        }
        Ok(value)
    }

    /// A human readable name of this field.
    pub(crate) fn name(self) -> &'static str {
        use self::Field::*;

        match self {
            NanoOfSecond => "nanosecond-of-second",
            NanoOfDay => "nanosecond-of-day",
            MicroOfSecond => "microsecond-of-second",
            MilliOfSecond => "millisecond-of-second",
            SecondOfMinute => "second",
            SecondOfDay => "second-of-day",
            MinuteOfHour => "minute",
            MinuteOfDay => "minute-of-day",
            HourOfDay => "hour",
            DayOfWeek => "weekday",
            DayOfMonth => "day",
            DayOfYear => "day-of-year",
            EpochDay => "epoch-day",
            MonthOfYear => "month",
            ProlepticMonth => "proleptic-month",
            Year => "year",
            InstantSeconds => "instant-seconds",
            OffsetSeconds => "offset-total-seconds",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_categories_are_disjoint() {
        use self::Field::*;

        let all = [
            NanoOfSecond,
            NanoOfDay,
            MicroOfSecond,
            MilliOfSecond,
            SecondOfMinute,
            SecondOfDay,
            MinuteOfHour,
            MinuteOfDay,
            HourOfDay,
            DayOfWeek,
            DayOfMonth,
            DayOfYear,
            EpochDay,
            MonthOfYear,
            ProlepticMonth,
            Year,
            InstantSeconds,
            OffsetSeconds,
        ];
        for field in all {
            assert!(
                !(field.is_date_based() && field.is_time_based()),
                "{field} is both date and time based",
            );
            let (min, max) = field.range();
            assert!(min < max, "{field} has an empty range");
        }
    }

    #[test]
    fn check_errors() {
        insta::assert_snapshot!(
            Field::MonthOfYear.check(0).unwrap_err(),
            @"parameter 'month' with value 0 is not in the required range of 1..=12",
        );
    }
}
