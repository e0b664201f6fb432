use core::str::FromStr;

use crate::{
    civil::{Date, Time, Weekday},
    error::{civil::Error as E, unit::Error as UE, Error, ErrorContext},
    fmt::{
        temporal::{DEFAULT_DATETIME_PARSER, DEFAULT_DATETIME_PRINTER},
        FmtWrite,
    },
    tz::Offset,
    util::{arith, t},
    Duration, Field, Instant, Period, Unit,
};

/// A representation of a civil datetime in the proleptic Gregorian calendar.
///
/// A `DateTime` value corresponds to a pair of a [`Date`] and a [`Time`].
/// That is, a datetime contains a year, month, day, hour, minute, second and
/// the fractional number of nanoseconds.
///
/// A `DateTime` value is guaranteed to contain a valid date and time. For
/// example, neither `2023-02-29T00:00:00` nor `2015-06-30T23:59:60` are
/// valid `DateTime` values.
///
/// # Civil datetimes and instants
///
/// A civil datetime does not identify a unique moment in time on its own.
/// It needs an [`Offset`] (see [`DateTime::to_instant`]) or a time zone
/// (see [`Zoned`](crate::Zoned)).
///
/// # Example
///
/// ```
/// use calendrical::{civil::{date, DateTime}, tz::Offset};
///
/// let dt: DateTime = "2008-06-30T11:30:59.000000999".parse()?;
/// assert_eq!(dt, date(2008, 6, 30).at(11, 30, 59, 999));
///
/// let instant = dt.to_instant(Offset::constant(2))?;
/// assert_eq!(instant.to_string(), "2008-06-30T09:30:59.000000999Z");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    /// The minimum representable datetime value.
    pub const MIN: DateTime = DateTime::from_parts(Date::MIN, Time::MIN);

    /// The maximum representable datetime value.
    pub const MAX: DateTime = DateTime::from_parts(Date::MAX, Time::MAX);

    /// Creates a new `DateTime` value from its components.
    ///
    /// # Errors
    ///
    /// This returns a range error if the given values do not correspond to a
    /// valid date and time.
    pub fn new(
        year: i32,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
        subsec_nanosecond: i32,
    ) -> Result<DateTime, Error> {
        let date = Date::new(year, month, day)?;
        let time = Time::new(hour, minute, second, subsec_nanosecond)?;
        Ok(DateTime { date, time })
    }

    /// Creates a new `DateTime` value in a `const` context.
    ///
    /// # Panics
    ///
    /// This panics if the given values do not correspond to a valid date and
    /// time.
    pub const fn constant(
        year: i32,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
        subsec_nanosecond: i32,
    ) -> DateTime {
        let date = Date::constant(year, month, day);
        let time = Time::constant(hour, minute, second, subsec_nanosecond);
        DateTime { date, time }
    }

    /// Creates a `DateTime` from its date and time parts.
    #[inline]
    pub const fn from_parts(date: Date, time: Time) -> DateTime {
        DateTime { date, time }
    }

    /// Returns the date component of this datetime.
    #[inline]
    pub fn date(self) -> Date {
        self.date
    }

    /// Returns the time component of this datetime.
    #[inline]
    pub fn time(self) -> Time {
        self.time
    }

    /// Returns the year for this datetime.
    #[inline]
    pub fn year(self) -> i32 {
        self.date.year()
    }

    /// Returns the month for this datetime.
    #[inline]
    pub fn month(self) -> i8 {
        self.date.month()
    }

    /// Returns the day for this datetime.
    #[inline]
    pub fn day(self) -> i8 {
        self.date.day()
    }

    /// Returns the hour for this datetime.
    #[inline]
    pub fn hour(self) -> i8 {
        self.time.hour()
    }

    /// Returns the minute for this datetime.
    #[inline]
    pub fn minute(self) -> i8 {
        self.time.minute()
    }

    /// Returns the second for this datetime.
    #[inline]
    pub fn second(self) -> i8 {
        self.time.second()
    }

    /// Returns the fractional nanosecond for this datetime.
    #[inline]
    pub fn subsec_nanosecond(self) -> i32 {
        self.time.subsec_nanosecond()
    }

    /// Returns the weekday for this datetime.
    #[inline]
    pub fn weekday(self) -> Weekday {
        self.date.weekday()
    }

    /// Returns the ordinal day of the year for this datetime.
    #[inline]
    pub fn day_of_year(self) -> i16 {
        self.date.day_of_year()
    }

    /// Returns a copy of this datetime with the date replaced.
    #[inline]
    pub fn with_date(self, date: Date) -> DateTime {
        DateTime { date, ..self }
    }

    /// Returns a copy of this datetime with the time replaced.
    #[inline]
    pub fn with_time(self, time: Time) -> DateTime {
        DateTime { time, ..self }
    }

    /// Add the given number of years to this datetime. The time is unchanged.
    pub fn checked_add_years(self, years: i64) -> Result<DateTime, Error> {
        Ok(self.with_date(self.date.checked_add_years(years)?))
    }

    /// Add the given number of months to this datetime. The time is
    /// unchanged.
    pub fn checked_add_months(self, months: i64) -> Result<DateTime, Error> {
        Ok(self.with_date(self.date.checked_add_months(months)?))
    }

    /// Add the given number of weeks to this datetime.
    pub fn checked_add_weeks(self, weeks: i64) -> Result<DateTime, Error> {
        Ok(self.with_date(self.date.checked_add_weeks(weeks)?))
    }

    /// Add the given number of days to this datetime.
    pub fn checked_add_days(self, days: i64) -> Result<DateTime, Error> {
        Ok(self.with_date(self.date.checked_add_days(days)?))
    }

    /// Add the given number of hours to this datetime.
    ///
    /// Crossing midnight moves the date.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::date;
    ///
    /// let dt = date(2024, 12, 31).at(23, 0, 0, 0);
    /// assert_eq!(dt.checked_add_hours(2)?, date(2025, 1, 1).at(1, 0, 0, 0));
    /// assert_eq!(dt.checked_add_hours(-47)?, date(2024, 12, 30).at(0, 0, 0, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_add_hours(self, hours: i64) -> Result<DateTime, Error> {
        self.add_time_unit(hours, t::NANOS_PER_HOUR)
    }

    /// Add the given number of minutes to this datetime.
    pub fn checked_add_minutes(self, minutes: i64) -> Result<DateTime, Error> {
        self.add_time_unit(minutes, t::NANOS_PER_MINUTE)
    }

    /// Add the given number of seconds to this datetime.
    pub fn checked_add_seconds(self, seconds: i64) -> Result<DateTime, Error> {
        self.add_time_unit(seconds, t::NANOS_PER_SECOND)
    }

    /// Add the given number of nanoseconds to this datetime.
    pub fn checked_add_nanoseconds(
        self,
        nanoseconds: i64,
    ) -> Result<DateTime, Error> {
        self.add_time_unit(nanoseconds, 1)
    }

    /// Adds `amount` units of `unit_nanos` each, carrying whole days into
    /// the date.
    ///
    /// Callers must ensure `unit_nanos` evenly divides a day.
    fn add_time_unit(
        self,
        amount: i64,
        unit_nanos: i64,
    ) -> Result<DateTime, Error> {
        if amount == 0 {
            return Ok(self);
        }
        let per_day = t::NANOS_PER_DAY / unit_nanos;
        let days = arith::floor_div(amount, per_day);
        let rem = arith::floor_mod(amount, per_day) * unit_nanos;
        let (time, carry) = self.time.overflowing_add_nanoseconds(rem);
        let date = self.date.checked_add_days(days + carry)?;
        Ok(DateTime { date, time })
    }

    /// Add the given duration to this datetime.
    ///
    /// # Errors
    ///
    /// This returns an error if the resulting datetime is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::date, Duration};
    ///
    /// let dt = date(2024, 2, 28).at(12, 0, 0, 0);
    /// let dur = Duration::from_hours(36)?;
    /// assert_eq!(dt.checked_add_duration(dur)?, date(2024, 3, 1).at(0, 0, 0, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_add_duration(
        self,
        duration: Duration,
    ) -> Result<DateTime, Error> {
        let (time, days) = self.time.overflowing_add_duration(duration);
        let date =
            self.date.checked_add_days(days).context(E::FailedAddDuration)?;
        Ok(DateTime { date, time })
    }

    /// Subtract the given duration from this datetime.
    pub fn checked_sub_duration(
        self,
        duration: Duration,
    ) -> Result<DateTime, Error> {
        self.checked_add_duration(duration.checked_neg()?)
    }

    /// Add the given period to this datetime. The time is unchanged.
    pub fn checked_add(self, period: Period) -> Result<DateTime, Error> {
        Ok(self.with_date(self.date.checked_add(period)?))
    }

    /// Subtract the given period from this datetime. The time is unchanged.
    pub fn checked_sub(self, period: Period) -> Result<DateTime, Error> {
        Ok(self.with_date(self.date.checked_sub(period)?))
    }

    /// Add an amount of the given unit to this datetime.
    ///
    /// Time units carry into the date, and date units keep the time
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::date, Unit};
    ///
    /// let dt = date(2024, 1, 31).at(18, 0, 0, 0);
    /// assert_eq!(dt.checked_add_unit(1, Unit::HalfDay)?, date(2024, 2, 1).at(6, 0, 0, 0));
    /// assert_eq!(dt.checked_add_unit(1, Unit::Month)?, date(2024, 2, 29).at(18, 0, 0, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_add_unit(
        self,
        amount: i64,
        unit: Unit,
    ) -> Result<DateTime, Error> {
        let result = match unit.nanoseconds() {
            Some(nanos) if unit.is_time_based() => {
                self.add_time_unit(amount, nanos)
            }
            _ => self
                .date
                .checked_add_unit(amount, unit)
                .map(|date| self.with_date(date)),
        };
        result.with_context(|| E::FailedAddUnit { unit })
    }

    /// Truncate this datetime to the given unit.
    ///
    /// Only units up to and including [`Unit::Day`] are supported.
    /// Truncating to a day yields midnight on the same date.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit doesn't evenly divide a day.
    pub fn truncated_to(self, unit: Unit) -> Result<DateTime, Error> {
        Ok(self.with_time(self.time.truncated_to(unit)?))
    }

    /// Returns the instant corresponding to this datetime at the given
    /// offset from UTC.
    ///
    /// # Errors
    ///
    /// This returns an error if the instant is out of range. This can only
    /// happen for datetimes within a day of [`DateTime::MIN`] or
    /// [`DateTime::MAX`].
    pub fn to_instant(self, offset: Offset) -> Result<Instant, Error> {
        let second = self.to_local_epoch_second() - i64::from(offset.seconds());
        Instant::new(second, self.time.subsec_nanosecond())
            .context(E::OutOfRangeInstant)
    }

    /// Returns the civil datetime of the given instant at the given offset
    /// from UTC.
    ///
    /// # Errors
    ///
    /// This returns an error if the datetime would be out of range. This can
    /// only happen for instants within a day of [`Instant::MIN`] or
    /// [`Instant::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::{date, DateTime}, tz::Offset, Instant};
    ///
    /// let instant = Instant::from_epoch_second(1_214_818_259, 0)?;
    /// let dt = DateTime::from_instant(instant, Offset::constant(2))?;
    /// assert_eq!(dt, date(2008, 6, 30).at(11, 30, 59, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_instant(
        instant: Instant,
        offset: Offset,
    ) -> Result<DateTime, Error> {
        let local = instant.as_second() + i64::from(offset.seconds());
        let day = arith::floor_div(local, t::SECONDS_PER_DAY);
        let second = arith::floor_mod(local, t::SECONDS_PER_DAY);
        let date = Date::from_epoch_day(day)?;
        let time = Time::from_nano_of_day_unchecked(
            second * t::NANOS_PER_SECOND
                + i64::from(instant.subsec_nanosecond()),
        );
        Ok(DateTime { date, time })
    }

    /// Returns the number of seconds since `1970-01-01T00:00:00` as if this
    /// datetime were in UTC.
    pub(crate) fn to_local_epoch_second(self) -> i64 {
        self.date.to_epoch_day() * t::SECONDS_PER_DAY
            + i64::from(self.time.to_second_of_day())
    }

    /// Returns the duration from this datetime until the given datetime.
    ///
    /// Every day is treated as exactly 24 hours.
    pub fn duration_until(self, other: DateTime) -> Duration {
        let days = self.date.days_until(other.date);
        let nanos = other.time.to_nano_of_day() - self.time.to_nano_of_day();
        // At most ~6.3e16 seconds between the extreme dates, so no overflow.
        Duration::from_secs(days * t::SECONDS_PER_DAY)
            + Duration::from_nanos(nanos)
    }

    /// Returns the value of the given field.
    ///
    /// # Errors
    ///
    /// This returns an error if the field is neither date nor time based.
    pub fn get(self, field: Field) -> Result<i64, Error> {
        if field.is_date_based() {
            self.date.get(field)
        } else if field.is_time_based() {
            self.time.get(field)
        } else {
            Err(UE::UnsupportedField { field, on: "datetimes" }.into())
        }
    }

    /// Returns a copy of this datetime with the given field changed.
    ///
    /// # Errors
    ///
    /// This returns an error if the field is neither date nor time based, or
    /// if the value is not valid for the field.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::date, Field};
    ///
    /// let dt = date(2024, 3, 31).at(8, 0, 0, 0);
    /// assert_eq!(dt.with(Field::MonthOfYear, 4)?, date(2024, 4, 30).at(8, 0, 0, 0));
    /// assert_eq!(dt.with(Field::HourOfDay, 20)?, date(2024, 3, 31).at(20, 0, 0, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with(self, field: Field, value: i64) -> Result<DateTime, Error> {
        if field.is_date_based() {
            Ok(self.with_date(self.date.with(field, value)?))
        } else if field.is_time_based() {
            Ok(self.with_time(self.time.with(field, value)?))
        } else {
            Err(UE::UnsupportedField { field, on: "datetimes" }.into())
        }
    }
}

impl From<Date> for DateTime {
    fn from(date: Date) -> DateTime {
        DateTime::from_parts(date, Time::MIDNIGHT)
    }
}

impl core::fmt::Debug for DateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for DateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_DATETIME_PRINTER
            .print_datetime(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl FromStr for DateTime {
    type Err = Error;

    fn from_str(string: &str) -> Result<DateTime, Error> {
        DEFAULT_DATETIME_PARSER.parse_datetime(string)
    }
}

/// Adds a duration to a datetime.
///
/// # Panics
///
/// This panics if the result is out of range. Use
/// [`DateTime::checked_add_duration`] for a fallible version.
impl core::ops::Add<Duration> for DateTime {
    type Output = DateTime;

    #[inline]
    fn add(self, rhs: Duration) -> DateTime {
        self.checked_add_duration(rhs)
            .expect("adding duration to datetime overflowed")
    }
}

/// Subtracts a duration from a datetime.
///
/// # Panics
///
/// This panics if the result is out of range. Use
/// [`DateTime::checked_sub_duration`] for a fallible version.
impl core::ops::Sub<Duration> for DateTime {
    type Output = DateTime;

    #[inline]
    fn sub(self, rhs: Duration) -> DateTime {
        self.checked_sub_duration(rhs)
            .expect("subtracting duration from datetime overflowed")
    }
}

/// Adds a period to a datetime.
///
/// # Panics
///
/// This panics if the result is out of range. Use [`DateTime::checked_add`]
/// for a fallible version.
impl core::ops::Add<Period> for DateTime {
    type Output = DateTime;

    #[inline]
    fn add(self, rhs: Period) -> DateTime {
        self.checked_add(rhs).expect("adding period to datetime overflowed")
    }
}

/// Subtracts a period from a datetime.
///
/// # Panics
///
/// This panics if the result is out of range. Use [`DateTime::checked_sub`]
/// for a fallible version.
impl core::ops::Sub<Period> for DateTime {
    type Output = DateTime;

    #[inline]
    fn sub(self, rhs: Period) -> DateTime {
        self.checked_sub(rhs)
            .expect("subtracting period from datetime overflowed")
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for DateTime {
    fn arbitrary(g: &mut quickcheck::Gen) -> DateTime {
        DateTime::from_parts(Date::arbitrary(g), Time::arbitrary(g))
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = DateTime>> {
        alloc::boxed::Box::new(
            (self.date, self.time)
                .shrink()
                .map(|(date, time)| DateTime::from_parts(date, time)),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::civil::date;

    use super::*;

    #[test]
    fn add_time_units_carry_into_date() {
        let dt = date(2024, 2, 28).at(23, 59, 59, 999_999_999);
        assert_eq!(
            dt.checked_add_nanoseconds(1).unwrap(),
            date(2024, 2, 29).at(0, 0, 0, 0),
        );
        assert_eq!(
            dt.checked_add_seconds(-86_400).unwrap(),
            date(2024, 2, 27).at(23, 59, 59, 999_999_999),
        );
        assert_eq!(
            dt.checked_add_minutes(60 * 24 * 2 + 1).unwrap(),
            date(2024, 3, 2).at(0, 0, 59, 999_999_999),
        );
        assert!(DateTime::MAX.checked_add_nanoseconds(1).unwrap_err().is_range());
        assert!(DateTime::MIN.checked_add_hours(-1).unwrap_err().is_range());
    }

    #[test]
    fn add_duration() {
        let dt = date(1970, 1, 1).at(0, 0, 0, 0);
        let dur = Duration::new(-1, 999_999_999).unwrap();
        assert_eq!(
            dt.checked_add_duration(dur).unwrap(),
            date(1969, 12, 31).at(23, 59, 59, 999_999_999),
        );
        assert_eq!(dt - dur, date(1970, 1, 1).at(0, 0, 0, 1));

        let err = dt.checked_add_duration(Duration::MAX).unwrap_err();
        assert!(err.is_range());
        insta::assert_snapshot!(
            err,
            @"failed to add duration to datetime: parameter 'epoch-day' with value 106751991167300 is not in the required range of -365243219162..=365241780471",
        );
    }

    #[test]
    fn add_unit() {
        let dt = date(2000, 1, 1).at(12, 0, 0, 0);
        assert_eq!(
            dt.checked_add_unit(-1, Unit::Millennium).unwrap(),
            date(1000, 1, 1).at(12, 0, 0, 0),
        );
        assert_eq!(
            dt.checked_add_unit(3, Unit::Week).unwrap(),
            date(2000, 1, 22).at(12, 0, 0, 0),
        );
        assert_eq!(
            dt.checked_add_unit(90, Unit::Minute).unwrap(),
            date(2000, 1, 1).at(13, 30, 0, 0),
        );
        let err = dt.checked_add_unit(i64::MAX, Unit::Century).unwrap_err();
        assert!(err.is_arithmetic_overflow());
        insta::assert_snapshot!(
            err,
            @"failed to add centuries to datetime: integer overflow in multiplication",
        );
    }

    #[test]
    fn instant_conversion_at_extremes() {
        let offset = Offset::constant(18);
        assert!(DateTime::MIN.to_instant(offset).unwrap_err().is_range());
        assert!(DateTime::MIN.to_instant(-offset).is_ok());
        assert!(DateTime::MAX.to_instant(-offset).unwrap_err().is_range());
        assert!(DateTime::from_instant(Instant::MAX, offset)
            .unwrap_err()
            .is_range());
        assert_eq!(
            DateTime::from_instant(Instant::MAX, Offset::UTC).unwrap(),
            DateTime::MAX,
        );
        assert_eq!(
            DateTime::from_instant(Instant::MIN, Offset::UTC).unwrap(),
            DateTime::MIN,
        );
    }

    #[test]
    fn duration_until_extremes() {
        let d = DateTime::MIN.duration_until(DateTime::MAX);
        assert_eq!(
            d.as_secs(),
            (b_epoch_days() + 1) * t::SECONDS_PER_DAY - 1,
        );
        assert_eq!(d.subsec_nanos(), 999_999_999);
    }

    fn b_epoch_days() -> i64 {
        Date::MIN.days_until(Date::MAX)
    }

    quickcheck::quickcheck! {
        fn prop_instant_roundtrip(dt: DateTime, hours: i8) -> quickcheck::TestResult {
            let Ok(offset) = Offset::from_hours(hours) else {
                return quickcheck::TestResult::discard();
            };
            let instant = dt.to_instant(offset).unwrap();
            let got = DateTime::from_instant(instant, offset).unwrap();
            quickcheck::TestResult::from_bool(got == dt)
        }

        fn prop_duration_until_then_add(dt1: DateTime, dt2: DateTime) -> bool {
            dt1.checked_add_duration(dt1.duration_until(dt2)).unwrap() == dt2
        }

        fn prop_add_seconds_matches_duration(dt: DateTime, secs: i32) -> bool {
            let secs = i64::from(secs);
            dt.checked_add_seconds(secs).unwrap()
                == dt.checked_add_duration(Duration::from_secs(secs)).unwrap()
        }
    }
}
