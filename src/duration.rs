use core::str::FromStr;

use crate::{
    error::{duration::Error as E, unit::Error as UE, Error, ErrorContext},
    fmt::{
        temporal::{DEFAULT_DATETIME_PARSER, DEFAULT_DATETIME_PRINTER},
        FmtWrite,
    },
    util::{arith, b, t},
    Instant, Unit,
};

/// An exact, signed amount of time with nanosecond precision.
///
/// A `Duration` is a number of seconds (an `i64`) plus a non-negative
/// fraction of a second in nanoseconds. The fraction is always in the range
/// `0..=999_999_999`, even for negative durations. So half a second before
/// zero is represented as `-1` seconds plus `500_000_000` nanoseconds.
///
/// Durations measure time on the instant time-line. A day is always exactly
/// 86,400 seconds. For calendar based amounts of time (years, months and
/// days whose length depends on the date), see [`Period`](crate::Period).
///
/// # Parsing and printing
///
/// Durations use the ISO 8601 duration format with only hours, minutes and
/// seconds (with days accepted when parsing):
///
/// ```
/// use calendrical::Duration;
///
/// let dur = Duration::from_secs(5_400);
/// assert_eq!(dur.to_string(), "PT1H30M");
///
/// let dur: Duration = "P1DT-0.5S".parse()?;
/// assert_eq!(dur, Duration::new(86_399, 500_000_000)?);
/// assert_eq!(dur.to_string(), "PT23H59M59.5S");
///
/// assert_eq!(Duration::new(0, -500_000_000)?.to_string(), "PT-0.5S");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Duration {
    secs: i64,
    nanos: i32,
}

impl Duration {
    /// A duration of zero time.
    pub const ZERO: Duration = Duration { secs: 0, nanos: 0 };

    /// The minimum possible duration.
    pub const MIN: Duration = Duration { secs: i64::MIN, nanos: 0 };

    /// The maximum possible duration.
    pub const MAX: Duration = Duration { secs: i64::MAX, nanos: 999_999_999 };

    /// Creates a new duration from the given number of seconds and an
    /// adjustment in nanoseconds.
    ///
    /// The nanosecond adjustment may be any value, including negative ones.
    /// It is folded into the seconds so that the stored fraction is in
    /// `0..=999_999_999`.
    ///
    /// # Errors
    ///
    /// This returns an error if folding the adjustment into the seconds
    /// overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::Duration;
    ///
    /// let dur = Duration::new(3, -1)?;
    /// assert_eq!((dur.as_secs(), dur.subsec_nanos()), (2, 999_999_999));
    ///
    /// let dur = Duration::new(-3, 2_000_000_001)?;
    /// assert_eq!((dur.as_secs(), dur.subsec_nanos()), (-1, 1));
    ///
    /// assert!(Duration::new(i64::MAX, 1_000_000_000).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(secs: i64, nanos: i64) -> Result<Duration, Error> {
        let carry = arith::floor_div(nanos, t::NANOS_PER_SECOND);
        let nanos = arith::floor_mod(nanos, t::NANOS_PER_SECOND) as i32;
        let secs = arith::add(secs, carry)
            .context(E::FailedDuration { op: "create" })?;
        Ok(Duration { secs, nanos })
    }

    /// Creates a duration from a number of seconds.
    #[inline]
    pub const fn from_secs(secs: i64) -> Duration {
        Duration { secs, nanos: 0 }
    }

    /// Creates a duration from a number of milliseconds.
    #[inline]
    pub const fn from_millis(millis: i64) -> Duration {
        let secs = arith::floor_div(millis, t::MILLIS_PER_SECOND);
        let millis = arith::floor_mod(millis, t::MILLIS_PER_SECOND);
        Duration { secs, nanos: (millis * t::NANOS_PER_MILLI) as i32 }
    }

    /// Creates a duration from a number of nanoseconds.
    #[inline]
    pub const fn from_nanos(nanos: i64) -> Duration {
        let secs = arith::floor_div(nanos, t::NANOS_PER_SECOND);
        let nanos = arith::floor_mod(nanos, t::NANOS_PER_SECOND) as i32;
        Duration { secs, nanos }
    }

    /// Creates a duration from a number of standard 24 hour days.
    ///
    /// # Errors
    ///
    /// This returns an error if the number of seconds overflows.
    pub fn from_days(days: i64) -> Result<Duration, Error> {
        Ok(Duration::from_secs(arith::mul(days, t::SECONDS_PER_DAY)?))
    }

    /// Creates a duration from a number of hours.
    ///
    /// # Errors
    ///
    /// This returns an error if the number of seconds overflows.
    pub fn from_hours(hours: i64) -> Result<Duration, Error> {
        Ok(Duration::from_secs(arith::mul(hours, t::SECONDS_PER_HOUR)?))
    }

    /// Creates a duration from a number of minutes.
    ///
    /// # Errors
    ///
    /// This returns an error if the number of seconds overflows.
    pub fn from_minutes(minutes: i64) -> Result<Duration, Error> {
        Ok(Duration::from_secs(arith::mul(minutes, t::SECONDS_PER_MINUTE)?))
    }

    /// Creates a duration from an amount of the given unit.
    ///
    /// Only units with an exact length are supported. That is, every unit up
    /// to and including [`Unit::Day`], which is treated as 24 hours.
    ///
    /// # Errors
    ///
    /// This returns an error if the unit is a week or bigger, or if the
    /// resulting duration overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{Duration, Unit};
    ///
    /// assert_eq!(Duration::from_unit(2, Unit::HalfDay)?, Duration::from_days(1)?);
    /// assert_eq!(Duration::from_unit(-1, Unit::Microsecond)?, Duration::new(-1, 999_999_000)?);
    /// assert!(Duration::from_unit(1, Unit::Month).unwrap_err().is_unsupported());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_unit(amount: i64, unit: Unit) -> Result<Duration, Error> {
        let nanos = match unit.nanoseconds() {
            Some(nanos) if unit <= Unit::Day => nanos,
            _ => {
                return Err(UE::UnsupportedUnit {
                    unit,
                    op: "creating a duration",
                }
                .into())
            }
        };
        if nanos >= t::NANOS_PER_SECOND {
            let secs = arith::mul(amount, nanos / t::NANOS_PER_SECOND)
                .context(E::FailedDuration { op: "create" })?;
            return Ok(Duration::from_secs(secs));
        }
        let per_second = t::NANOS_PER_SECOND / nanos;
        let secs = arith::floor_div(amount, per_second);
        let rem = arith::floor_mod(amount, per_second) * nanos;
        Ok(Duration { secs, nanos: rem as i32 })
    }

    /// Returns the duration between two instants.
    ///
    /// The duration is negative when `end` is before `start`.
    pub fn between(start: Instant, end: Instant) -> Duration {
        start.until(end)
    }

    /// Returns the number of whole seconds in this duration.
    ///
    /// For negative durations with a fraction, this is one less than the
    /// truncated number of seconds, since the fraction is always positive.
    #[inline]
    pub const fn as_secs(self) -> i64 {
        self.secs
    }

    /// Returns the non-negative fractional part of this duration in
    /// nanoseconds.
    #[inline]
    pub const fn subsec_nanos(self) -> i32 {
        self.nanos
    }

    /// Returns true if this duration is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.secs == 0 && self.nanos == 0
    }

    /// Returns true if this duration is strictly less than zero.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.secs < 0
    }

    /// Returns the number of whole days in this duration, assuming a day is
    /// always 86,400 seconds.
    pub fn to_days(self) -> i64 {
        self.secs / t::SECONDS_PER_DAY
    }

    /// Returns the number of whole hours in this duration.
    pub fn to_hours(self) -> i64 {
        self.secs / t::SECONDS_PER_HOUR
    }

    /// Returns the number of whole minutes in this duration.
    pub fn to_minutes(self) -> i64 {
        self.secs / t::SECONDS_PER_MINUTE
    }

    /// Returns the total number of milliseconds in this duration, discarding
    /// any finer precision.
    ///
    /// # Errors
    ///
    /// This returns an error if the result overflows an `i64`.
    pub fn to_millis(self) -> Result<i64, Error> {
        let millis = arith::mul(self.secs, t::MILLIS_PER_SECOND)?;
        let sub = i64::from(self.nanos) / t::NANOS_PER_MILLI;
        arith::add(millis, sub).context(E::FailedDuration { op: "convert" })
    }

    /// Returns the total number of nanoseconds in this duration.
    ///
    /// # Errors
    ///
    /// This returns an error if the result overflows an `i64`. This
    /// happens for durations longer than about 292 years.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::Duration;
    ///
    /// assert_eq!(Duration::new(-1, 1)?.to_nanos()?, -999_999_999);
    /// assert!(Duration::MAX.to_nanos().unwrap_err().is_arithmetic_overflow());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_nanos(self) -> Result<i64, Error> {
        arith::to_i64(self.as_i128_nanos())
            .context(E::FailedDuration { op: "convert" })
    }

    fn as_i128_nanos(self) -> i128 {
        i128::from(self.secs) * i128::from(t::NANOS_PER_SECOND)
            + i128::from(self.nanos)
    }

    fn from_i128_nanos(nanos: i128) -> Result<Duration, Error> {
        let per = i128::from(t::NANOS_PER_SECOND);
        let secs = arith::to_i64(nanos.div_euclid(per))?;
        let nanos = nanos.rem_euclid(per) as i32;
        Ok(Duration { secs, nanos })
    }

    /// Returns a copy of this duration with the whole seconds replaced.
    #[inline]
    pub fn with_secs(self, secs: i64) -> Duration {
        Duration { secs, ..self }
    }

    /// Returns a copy of this duration with the fraction replaced.
    ///
    /// # Errors
    ///
    /// This returns a range error if `nanos` is not in `0..=999_999_999`.
    pub fn with_nanos(self, nanos: i32) -> Result<Duration, Error> {
        let nanos = b::SubsecNanosecond::check(nanos)?;
        Ok(Duration { nanos, ..self })
    }

    /// Add two durations.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn checked_add(self, rhs: Duration) -> Result<Duration, Error> {
        let mut secs = arith::add(self.secs, rhs.secs)
            .context(E::FailedDuration { op: "add" })?;
        let mut nanos = self.nanos + rhs.nanos;
        if i64::from(nanos) >= t::NANOS_PER_SECOND {
            nanos -= t::NANOS_PER_SECOND as i32;
            secs =
                arith::add(secs, 1).context(E::FailedDuration { op: "add" })?;
        }
        Ok(Duration { secs, nanos })
    }

    /// Subtract `rhs` from this duration.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn checked_sub(self, rhs: Duration) -> Result<Duration, Error> {
        let mut secs = arith::sub(self.secs, rhs.secs)
            .context(E::FailedDuration { op: "subtract" })?;
        let mut nanos = self.nanos - rhs.nanos;
        if nanos < 0 {
            nanos += t::NANOS_PER_SECOND as i32;
            secs = arith::sub(secs, 1)
                .context(E::FailedDuration { op: "subtract" })?;
        }
        Ok(Duration { secs, nanos })
    }

    /// Multiply this duration by an integer.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn checked_mul(self, rhs: i64) -> Result<Duration, Error> {
        let nanos = self
            .as_i128_nanos()
            .checked_mul(i128::from(rhs))
            .ok_or_else(|| Error::overflow(crate::error::ArithmeticOp::Mul))
            .and_then(Duration::from_i128_nanos);
        nanos.context(E::FailedDuration { op: "multiply" })
    }

    /// Divide this duration by an integer, truncating toward zero at
    /// nanosecond precision.
    ///
    /// # Errors
    ///
    /// This returns an error when `rhs` is zero, or on overflow (only
    /// possible for `Duration::MIN / -1`).
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::Duration;
    ///
    /// let dur = Duration::from_secs(-1).checked_div(3)?;
    /// assert_eq!(dur, Duration::from_nanos(-333_333_333));
    /// assert!(Duration::from_secs(1).checked_div(0).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_div(self, rhs: i64) -> Result<Duration, Error> {
        if rhs == 0 {
            return Err(E::DivideByZero.into());
        }
        Duration::from_i128_nanos(self.as_i128_nanos() / i128::from(rhs))
            .context(E::FailedDuration { op: "divide" })
    }

    /// Negate this duration.
    ///
    /// # Errors
    ///
    /// This returns an error for [`Duration::MIN`], whose negation does not
    /// fit.
    pub fn checked_neg(self) -> Result<Duration, Error> {
        Duration::from_i128_nanos(-self.as_i128_nanos())
            .context(E::FailedDuration { op: "negate" })
    }

    /// Returns the absolute value of this duration.
    ///
    /// # Errors
    ///
    /// This returns an error for [`Duration::MIN`].
    pub fn abs(self) -> Result<Duration, Error> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }
}

impl core::fmt::Debug for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_DATETIME_PRINTER
            .print_duration(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(string: &str) -> Result<Duration, Error> {
        DEFAULT_DATETIME_PARSER.parse_duration(string)
    }
}

impl TryFrom<core::time::Duration> for Duration {
    type Error = Error;

    fn try_from(dur: core::time::Duration) -> Result<Duration, Error> {
        let secs = i64::try_from(dur.as_secs())
            .map_err(|_| Error::from(E::ConvertUnsignedTooBig))?;
        // Always less than 1,000,000,000.
        let nanos = dur.subsec_nanos() as i32;
        Ok(Duration { secs, nanos })
    }
}

impl TryFrom<Duration> for core::time::Duration {
    type Error = Error;

    fn try_from(dur: Duration) -> Result<core::time::Duration, Error> {
        let secs = u64::try_from(dur.secs)
            .map_err(|_| Error::from(E::ConvertNegativeToUnsigned))?;
        Ok(core::time::Duration::new(secs, dur.nanos as u32))
    }
}

/// Adds two durations.
///
/// # Panics
///
/// This panics on overflow. Use [`Duration::checked_add`] for a fallible
/// version.
impl core::ops::Add for Duration {
    type Output = Duration;

    #[inline]
    fn add(self, rhs: Duration) -> Duration {
        self.checked_add(rhs).expect("duration addition overflowed")
    }
}

/// Subtracts two durations.
///
/// # Panics
///
/// This panics on overflow. Use [`Duration::checked_sub`] for a fallible
/// version.
impl core::ops::Sub for Duration {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Duration) -> Duration {
        self.checked_sub(rhs).expect("duration subtraction overflowed")
    }
}

/// Multiplies a duration by an integer.
///
/// # Panics
///
/// This panics on overflow. Use [`Duration::checked_mul`] for a fallible
/// version.
impl core::ops::Mul<i64> for Duration {
    type Output = Duration;

    #[inline]
    fn mul(self, rhs: i64) -> Duration {
        self.checked_mul(rhs).expect("duration multiplication overflowed")
    }
}

/// Negates a duration.
///
/// # Panics
///
/// This panics for [`Duration::MIN`]. Use [`Duration::checked_neg`] for a
/// fallible version.
impl core::ops::Neg for Duration {
    type Output = Duration;

    #[inline]
    fn neg(self) -> Duration {
        self.checked_neg().expect("duration negation overflowed")
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Duration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Duration {
        let secs = i64::arbitrary(g);
        let nanos = i32::arbitrary(g).rem_euclid(1_000_000_000);
        Duration { secs, nanos }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Duration>> {
        alloc::boxed::Box::new(
            (self.secs, self.nanos)
                .shrink()
                .filter_map(|(secs, nanos)| {
                    Duration::new(secs, i64::from(nanos)).ok()
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn normalization() {
        let dur = Duration::new(0, -1).unwrap();
        assert_eq!((dur.as_secs(), dur.subsec_nanos()), (-1, 999_999_999));
        let dur = Duration::new(0, i64::MIN).unwrap();
        assert_eq!(dur, Duration::from_nanos(i64::MIN));
        assert!(Duration::new(i64::MIN, -1).unwrap_err().is_arithmetic_overflow());
        assert_eq!(Duration::from_millis(-1), Duration::new(-1, 999_000_000).unwrap());
    }

    #[test]
    fn arithmetic_overflow() {
        let err = Duration::MAX.checked_add(Duration::from_nanos(1)).unwrap_err();
        assert!(err.is_arithmetic_overflow());
        insta::assert_snapshot!(
            err,
            @"failed to add duration: integer overflow in addition",
        );
        assert!(Duration::MIN.checked_neg().unwrap_err().is_arithmetic_overflow());
        assert!(Duration::MIN.abs().is_err());
        assert_eq!(Duration::MAX.checked_neg().unwrap(), Duration::new(i64::MIN, 1).unwrap());
        assert!(Duration::MAX.checked_mul(2).unwrap_err().is_arithmetic_overflow());
        assert!(Duration::MIN.checked_div(-1).unwrap_err().is_arithmetic_overflow());
        insta::assert_snapshot!(
            Duration::ZERO.checked_div(0).unwrap_err(),
            @"cannot divide duration by zero",
        );
    }

    #[test]
    fn unit_conversions() {
        let dur = Duration::new(-3_601, 500_000_000).unwrap();
        assert_eq!(dur.to_hours(), -1);
        assert_eq!(dur.to_minutes(), -60);
        assert_eq!(dur.to_days(), 0);
        assert_eq!(dur.to_millis().unwrap(), -3_600_500);
        assert_eq!(Duration::from_unit(3, Unit::Millisecond).unwrap(), Duration::from_millis(3));
        assert!(Duration::from_unit(1, Unit::Week).unwrap_err().is_unsupported());
        assert!(Duration::from_unit(i64::MAX, Unit::Day).unwrap_err().is_arithmetic_overflow());
    }

    #[test]
    fn std_conversions() {
        let std = core::time::Duration::new(5, 7);
        let dur = Duration::try_from(std).unwrap();
        assert_eq!(dur, Duration::new(5, 7).unwrap());
        assert_eq!(core::time::Duration::try_from(dur).unwrap(), std);

        insta::assert_snapshot!(
            core::time::Duration::try_from(Duration::from_nanos(-1)).unwrap_err(),
            @"cannot convert negative duration to unsigned duration",
        );
        assert!(Duration::try_from(core::time::Duration::MAX).is_err());
    }

    #[test]
    fn display() {
        let cases = [
            (Duration::ZERO, "PT0S"),
            (Duration::from_secs(1), "PT1S"),
            (Duration::from_secs(-1), "PT-1S"),
            (Duration::from_secs(3_600 + 60 + 1), "PT1H1M1S"),
            (Duration::from_secs(-3_661), "PT-1H-1M-1S"),
            (Duration::from_millis(-500), "PT-0.5S"),
            (Duration::from_millis(-1_500), "PT-1.5S"),
            (Duration::from_nanos(1), "PT0.000000001S"),
            (Duration::from_secs(90_000), "PT25H"),
        ];
        for (dur, expected) in cases {
            assert_eq!(dur.to_string(), expected, "{dur:?}");
        }
    }

    quickcheck::quickcheck! {
        fn prop_nanos_in_range(secs: i64, nanos: i64) -> bool {
            match Duration::new(secs, nanos) {
                Ok(dur) => (0..1_000_000_000).contains(&dur.subsec_nanos()),
                Err(err) => err.is_arithmetic_overflow(),
            }
        }

        fn prop_add_then_sub(d1: Duration, d2: Duration) -> quickcheck::TestResult {
            let Ok(sum) = d1.checked_add(d2) else {
                return quickcheck::TestResult::discard();
            };
            quickcheck::TestResult::from_bool(sum.checked_sub(d2).unwrap() == d1)
        }

        fn prop_text_roundtrip(dur: Duration) -> bool {
            dur.to_string().parse::<Duration>().unwrap() == dur
        }
    }
}
