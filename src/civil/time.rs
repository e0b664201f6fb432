use core::str::FromStr;

use crate::{
    civil::{Date, DateTime},
    error::{unit::Error as UE, Error},
    fmt::{
        temporal::{DEFAULT_DATETIME_PARSER, DEFAULT_DATETIME_PRINTER},
        FmtWrite,
    },
    util::{arith, b, t},
    Duration, Field, Unit,
};

/// A representation of civil "wall clock" time.
///
/// Conceptually, a `Time` value corresponds to the typical hours and minutes
/// that you might see on a clock. This type also contains the second and
/// fractional subsecond (to nanosecond precision) associated with a time.
///
/// # Civil time
///
/// A `Time` value behaves as if it corresponds precisely to a single
/// nanosecond within a day, where all days have `86,400` seconds. That is,
/// any given `Time` value corresponds to a nanosecond in the inclusive range
/// `[0, 86399999999999]`, where `0` corresponds to `00:00:00.000000000`
/// ([`Time::MIN`]) and `86399999999999` corresponds to `23:59:59.999999999`
/// ([`Time::MAX`]). Leap seconds are not supported.
///
/// # Arithmetic
///
/// Arithmetic on a `Time` wraps around midnight. The `overflowing_*`
/// routines also report how many days were crossed, which is how a
/// [`DateTime`] carries time arithmetic into its date.
///
/// ```
/// use calendrical::civil::time;
///
/// let t = time(23, 30, 0, 0);
/// assert_eq!(t.wrapping_add_hours(1), time(0, 30, 0, 0));
///
/// let (t, days) = time(1, 0, 0, 0).overflowing_add_nanoseconds(-2 * 3_600_000_000_000);
/// assert_eq!((t, days), (time(23, 0, 0, 0), -1));
/// ```
///
/// # Parsing and printing
///
/// A time is printed with hours and minutes, and only includes seconds and
/// a fraction when they are non-zero:
///
/// ```
/// use calendrical::civil::{time, Time};
///
/// assert_eq!(time(10, 15, 0, 0).to_string(), "10:15");
/// assert_eq!(time(10, 15, 30, 0).to_string(), "10:15:30");
/// assert_eq!(time(10, 15, 0, 500_000_000).to_string(), "10:15:00.500");
///
/// let t: Time = "10:15:30.000001".parse()?;
/// assert_eq!(t.subsec_nanosecond(), 1_000);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Time {
    hour: i8,
    minute: i8,
    second: i8,
    subsec_nanosecond: i32,
}

impl Time {
    /// The minimum representable time value.
    ///
    /// This corresponds to `00:00:00.000000000`.
    pub const MIN: Time = Time::midnight();

    /// The maximum representable time value.
    ///
    /// This corresponds to `23:59:59.999999999`.
    pub const MAX: Time = Time::constant(23, 59, 59, 999_999_999);

    /// The first instant of a day.
    pub const MIDNIGHT: Time = Time::midnight();

    /// Twelve o'clock in the afternoon.
    pub const NOON: Time = Time::constant(12, 0, 0, 0);

    /// Creates a new `Time` value from its component hour, minute, second
    /// and fractional subsecond (up to nanosecond precision) values.
    ///
    /// # Errors
    ///
    /// This returns a range error if any of the values are out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::Time;
    ///
    /// let t = Time::new(23, 59, 59, 999_999_999)?;
    /// assert_eq!(t, Time::MAX);
    /// assert!(Time::new(24, 0, 0, 0).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(
        hour: i8,
        minute: i8,
        second: i8,
        subsec_nanosecond: i32,
    ) -> Result<Time, Error> {
        let hour = b::Hour::check(hour)?;
        let minute = b::Minute::check(minute)?;
        let second = b::Second::check(second)?;
        let subsec_nanosecond = b::SubsecNanosecond::check(subsec_nanosecond)?;
        Ok(Time { hour, minute, second, subsec_nanosecond })
    }

    /// Creates a new `Time` value in a `const` context.
    ///
    /// # Panics
    ///
    /// This panics if any of the values are out of range.
    pub const fn constant(
        hour: i8,
        minute: i8,
        second: i8,
        subsec_nanosecond: i32,
    ) -> Time {
        if !b::Hour::contains(hour) {
            panic!("invalid hour");
        }
        if !b::Minute::contains(minute) {
            panic!("invalid minute");
        }
        if !b::Second::contains(second) {
            panic!("invalid second");
        }
        if !b::SubsecNanosecond::contains(subsec_nanosecond) {
            panic!("invalid nanosecond");
        }
        Time { hour, minute, second, subsec_nanosecond }
    }

    /// Returns the first moment of time in a day.
    pub const fn midnight() -> Time {
        Time { hour: 0, minute: 0, second: 0, subsec_nanosecond: 0 }
    }

    /// Creates a time from the number of nanoseconds since midnight.
    ///
    /// # Errors
    ///
    /// This returns a range error if the value is not in
    /// `0..=86_399_999_999_999`.
    pub fn from_nano_of_day(nanosecond: i64) -> Result<Time, Error> {
        let nanosecond = b::NanoOfDay::check(nanosecond)?;
        Ok(Time::from_nano_of_day_unchecked(nanosecond))
    }

    /// Creates a time from the number of seconds since midnight.
    ///
    /// # Errors
    ///
    /// This returns a range error if the value is not in `0..=86_399`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::{time, Time};
    ///
    /// assert_eq!(Time::from_second_of_day(3_661)?, time(1, 1, 1, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_second_of_day(second: i32) -> Result<Time, Error> {
        let second = b::SecondOfDay::check(second)?;
        Ok(Time::from_nano_of_day_unchecked(
            i64::from(second) * t::NANOS_PER_SECOND,
        ))
    }

    /// Callers must ensure the value is a valid nanosecond of a day.
    pub(crate) const fn from_nano_of_day_unchecked(nanosecond: i64) -> Time {
        let hour = (nanosecond / t::NANOS_PER_HOUR) as i8;
        let minute =
            ((nanosecond / t::NANOS_PER_MINUTE) % t::MINUTES_PER_HOUR) as i8;
        let second =
            ((nanosecond / t::NANOS_PER_SECOND) % t::SECONDS_PER_MINUTE) as i8;
        let subsec_nanosecond = (nanosecond % t::NANOS_PER_SECOND) as i32;
        Time { hour, minute, second, subsec_nanosecond }
    }

    /// Returns the "hour" component of this time.
    #[inline]
    pub fn hour(self) -> i8 {
        self.hour
    }

    /// Returns the "minute" component of this time.
    #[inline]
    pub fn minute(self) -> i8 {
        self.minute
    }

    /// Returns the "second" component of this time.
    #[inline]
    pub fn second(self) -> i8 {
        self.second
    }

    /// Returns the fractional nanosecond for this `Time` value.
    #[inline]
    pub fn subsec_nanosecond(self) -> i32 {
        self.subsec_nanosecond
    }

    /// Returns the "millisecond" component of this time.
    #[inline]
    pub fn millisecond(self) -> i16 {
        (self.subsec_nanosecond / t::NANOS_PER_MILLI as i32) as i16
    }

    /// Returns the "microsecond" component of this time, from `0` up to
    /// `999_999`.
    #[inline]
    pub fn microsecond(self) -> i32 {
        self.subsec_nanosecond / t::NANOS_PER_MICRO as i32
    }

    /// Returns the number of nanoseconds since midnight.
    #[inline]
    pub const fn to_nano_of_day(self) -> i64 {
        self.hour as i64 * t::NANOS_PER_HOUR
            + self.minute as i64 * t::NANOS_PER_MINUTE
            + self.second as i64 * t::NANOS_PER_SECOND
            + self.subsec_nanosecond as i64
    }

    /// Returns the number of whole seconds since midnight.
    #[inline]
    pub const fn to_second_of_day(self) -> i32 {
        self.hour as i32 * 3_600 + self.minute as i32 * 60 + self.second as i32
    }

    /// Returns a copy of this time with the hour changed.
    pub fn with_hour(self, hour: i8) -> Result<Time, Error> {
        let hour = b::Hour::check(hour)?;
        Ok(Time { hour, ..self })
    }

    /// Returns a copy of this time with the minute changed.
    pub fn with_minute(self, minute: i8) -> Result<Time, Error> {
        let minute = b::Minute::check(minute)?;
        Ok(Time { minute, ..self })
    }

    /// Returns a copy of this time with the second changed.
    pub fn with_second(self, second: i8) -> Result<Time, Error> {
        let second = b::Second::check(second)?;
        Ok(Time { second, ..self })
    }

    /// Returns a copy of this time with the fractional nanosecond changed.
    pub fn with_subsec_nanosecond(
        self,
        subsec_nanosecond: i32,
    ) -> Result<Time, Error> {
        let subsec_nanosecond = b::SubsecNanosecond::check(subsec_nanosecond)?;
        Ok(Time { subsec_nanosecond, ..self })
    }

    /// Add the given number of hours, wrapping around midnight.
    pub fn wrapping_add_hours(self, hours: i64) -> Time {
        self.wrapping_add_within_day(hours, t::NANOS_PER_HOUR)
    }

    /// Add the given number of minutes, wrapping around midnight.
    pub fn wrapping_add_minutes(self, minutes: i64) -> Time {
        self.wrapping_add_within_day(minutes, t::NANOS_PER_MINUTE)
    }

    /// Add the given number of seconds, wrapping around midnight.
    pub fn wrapping_add_seconds(self, seconds: i64) -> Time {
        self.wrapping_add_within_day(seconds, t::NANOS_PER_SECOND)
    }

    /// Add the given number of nanoseconds, wrapping around midnight.
    pub fn wrapping_add_nanoseconds(self, nanoseconds: i64) -> Time {
        self.overflowing_add_nanoseconds(nanoseconds).0
    }

    /// Add the given number of nanoseconds to this time, returning the
    /// wrapped time along with the number of days that were crossed.
    ///
    /// The number of days is negative when the addition went backwards past
    /// midnight. This never overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::{time, Time};
    ///
    /// let (t, days) = Time::MAX.overflowing_add_nanoseconds(1);
    /// assert_eq!((t, days), (time(0, 0, 0, 0), 1));
    ///
    /// let (t, days) = Time::MIN.overflowing_add_nanoseconds(i64::MIN);
    /// assert_eq!(days, -106_752);
    /// assert_eq!(t, time(0, 12, 43, 145_224_192));
    /// ```
    pub fn overflowing_add_nanoseconds(self, nanoseconds: i64) -> (Time, i64) {
        // Splitting first keeps the intermediate sum below two days.
        let days = arith::floor_div(nanoseconds, t::NANOS_PER_DAY);
        let rem = arith::floor_mod(nanoseconds, t::NANOS_PER_DAY);
        let sum = self.to_nano_of_day() + rem;
        let carry = arith::floor_div(sum, t::NANOS_PER_DAY);
        let nod = arith::floor_mod(sum, t::NANOS_PER_DAY);
        (Time::from_nano_of_day_unchecked(nod), days + carry)
    }

    /// Add the given duration to this time, returning the wrapped time along
    /// with the number of days that were crossed.
    ///
    /// This never overflows.
    pub fn overflowing_add_duration(self, duration: Duration) -> (Time, i64) {
        let secs = duration.as_secs();
        let days = arith::floor_div(secs, t::SECONDS_PER_DAY);
        let rem = arith::floor_mod(secs, t::SECONDS_PER_DAY);
        let sum = self.to_nano_of_day()
            + rem * t::NANOS_PER_SECOND
            + i64::from(duration.subsec_nanos());
        let carry = arith::floor_div(sum, t::NANOS_PER_DAY);
        let nod = arith::floor_mod(sum, t::NANOS_PER_DAY);
        (Time::from_nano_of_day_unchecked(nod), days + carry)
    }

    /// Add an amount of the given time unit, wrapping around midnight.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit is a day or bigger.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::time, Unit};
    ///
    /// let t = time(9, 0, 0, 0);
    /// assert_eq!(t.wrapping_add_unit(3, Unit::HalfDay)?, time(21, 0, 0, 0));
    /// assert!(t.wrapping_add_unit(1, Unit::Day).unwrap_err().is_unsupported());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn wrapping_add_unit(
        self,
        amount: i64,
        unit: Unit,
    ) -> Result<Time, Error> {
        if !unit.is_time_based() {
            return Err(UE::UnsupportedUnit { unit, op: "adding to a time" }
                .into());
        }
        // Every time based unit has a fixed length.
        let nanos = unit.nanoseconds().unwrap_or(1);
        Ok(self.wrapping_add_within_day(amount, nanos))
    }

    fn wrapping_add_within_day(self, amount: i64, unit_nanos: i64) -> Time {
        let per_day = t::NANOS_PER_DAY / unit_nanos;
        let delta = arith::floor_mod(amount, per_day) * unit_nanos;
        self.overflowing_add_nanoseconds(delta).0
    }

    /// Returns the duration from this time until the given time.
    ///
    /// The duration is negative when the given time is earlier, and is
    /// always less than a day in magnitude.
    pub fn duration_until(self, other: Time) -> Duration {
        Duration::from_nanos(other.to_nano_of_day() - self.to_nano_of_day())
    }

    /// Truncate this time to the given unit.
    ///
    /// Everything smaller than the unit is set to zero. Truncating to
    /// [`Unit::Day`] returns midnight.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit doesn't evenly divide a day.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::time, Unit};
    ///
    /// let t = time(15, 45, 30, 123_456_789);
    /// assert_eq!(t.truncated_to(Unit::Millisecond)?, time(15, 45, 30, 123_000_000));
    /// assert_eq!(t.truncated_to(Unit::Hour)?, time(15, 0, 0, 0));
    /// assert_eq!(t.truncated_to(Unit::HalfDay)?, time(12, 0, 0, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn truncated_to(self, unit: Unit) -> Result<Time, Error> {
        let Some(divisor) = unit.divisor_of_day() else {
            return Err(UE::UnsupportedUnit { unit, op: "truncating" }.into());
        };
        let nod = self.to_nano_of_day();
        Ok(Time::from_nano_of_day_unchecked((nod / divisor) * divisor))
    }

    /// Create a datetime from this time and the given date.
    pub const fn on(self, date: Date) -> DateTime {
        DateTime::from_parts(date, self)
    }

    /// Returns the value of the given time field.
    ///
    /// # Errors
    ///
    /// This returns an error if the field is not time based.
    pub fn get(self, field: Field) -> Result<i64, Error> {
        Ok(match field {
            Field::NanoOfSecond => i64::from(self.subsec_nanosecond),
            Field::NanoOfDay => self.to_nano_of_day(),
            Field::MicroOfSecond => i64::from(self.microsecond()),
            Field::MilliOfSecond => i64::from(self.millisecond()),
            Field::SecondOfMinute => i64::from(self.second),
            Field::SecondOfDay => i64::from(self.to_second_of_day()),
            Field::MinuteOfHour => i64::from(self.minute),
            Field::MinuteOfDay => {
                i64::from(self.hour) * t::MINUTES_PER_HOUR
                    + i64::from(self.minute)
            }
            Field::HourOfDay => i64::from(self.hour),
            field => {
                return Err(UE::UnsupportedField { field, on: "times" }.into())
            }
        })
    }

    /// Returns a copy of this time with the given field changed.
    ///
    /// Changing a coarse field keeps the finer ones. For example, setting
    /// [`Field::SecondOfDay`] keeps the fractional second, and setting
    /// [`Field::MilliOfSecond`] replaces the whole fraction.
    ///
    /// # Errors
    ///
    /// This returns an error if the field is not time based, or if the value
    /// is not valid for the field.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::time, Field};
    ///
    /// let t = time(10, 30, 15, 123_456_789);
    /// assert_eq!(t.with(Field::MilliOfSecond, 5)?, time(10, 30, 15, 5_000_000));
    /// assert_eq!(t.with(Field::MinuteOfDay, 61)?, time(1, 1, 15, 123_456_789));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with(self, field: Field, value: i64) -> Result<Time, Error> {
        if !field.is_time_based() {
            return Err(UE::UnsupportedField { field, on: "times" }.into());
        }
        let value = field.check(value)?;
        Ok(match field {
            Field::NanoOfSecond => {
                Time { subsec_nanosecond: value as i32, ..self }
            }
            Field::NanoOfDay => Time::from_nano_of_day_unchecked(value),
            Field::MicroOfSecond => Time {
                subsec_nanosecond: (value * t::NANOS_PER_MICRO) as i32,
                ..self
            },
            Field::MilliOfSecond => Time {
                subsec_nanosecond: (value * t::NANOS_PER_MILLI) as i32,
                ..self
            },
            Field::SecondOfMinute => Time { second: value as i8, ..self },
            Field::SecondOfDay => Time::from_nano_of_day_unchecked(
                value * t::NANOS_PER_SECOND
                    + i64::from(self.subsec_nanosecond),
            ),
            Field::MinuteOfHour => Time { minute: value as i8, ..self },
            Field::MinuteOfDay => Time {
                hour: (value / t::MINUTES_PER_HOUR) as i8,
                minute: (value % t::MINUTES_PER_HOUR) as i8,
                ..self
            },
            Field::HourOfDay => Time { hour: value as i8, ..self },
            field => {
                return Err(UE::UnsupportedField { field, on: "times" }.into())
            }
        })
    }
}

impl Default for Time {
    fn default() -> Time {
        Time::midnight()
    }
}

impl core::fmt::Debug for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_DATETIME_PRINTER
            .print_time(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl FromStr for Time {
    type Err = Error;

    fn from_str(string: &str) -> Result<Time, Error> {
        DEFAULT_DATETIME_PARSER.parse_time(string)
    }
}

/// Adds a duration to a time, wrapping around midnight.
impl core::ops::Add<Duration> for Time {
    type Output = Time;

    #[inline]
    fn add(self, rhs: Duration) -> Time {
        self.overflowing_add_duration(rhs).0
    }
}

/// Subtracts a duration from a time, wrapping around midnight.
impl core::ops::Sub<Duration> for Time {
    type Output = Time;

    #[inline]
    fn sub(self, rhs: Duration) -> Time {
        let secs = arith::floor_mod(rhs.as_secs(), t::SECONDS_PER_DAY);
        let nanos =
            secs * t::NANOS_PER_SECOND + i64::from(rhs.subsec_nanos());
        self.wrapping_add_nanoseconds(-nanos)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Time {
    fn arbitrary(g: &mut quickcheck::Gen) -> Time {
        let nod = i64::arbitrary(g).rem_euclid(t::NANOS_PER_DAY);
        Time::from_nano_of_day_unchecked(nod)
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Time>> {
        alloc::boxed::Box::new(
            self.to_nano_of_day()
                .shrink()
                .filter_map(|nod| Time::from_nano_of_day(nod).ok()),
        )
    }
}
