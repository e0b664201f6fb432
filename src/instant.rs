use core::str::FromStr;

use crate::{
    civil::DateTime,
    error::{civil::Error as CE, unit::Error as UE, Error, ErrorContext},
    fmt::{
        temporal::{DEFAULT_DATETIME_PARSER, DEFAULT_DATETIME_PRINTER},
        FmtWrite,
    },
    tz::Offset,
    util::{arith, b, t},
    Duration, Unit,
};

/// An instant in time represented as the number of nanoseconds since the
/// Unix epoch.
///
/// An instant is always in reference to a fixed point in time known as the
/// Unix epoch: `1970-01-01T00:00:00Z`. It is stored as a number of seconds
/// along with a fraction of a second in nanoseconds. The fraction is always
/// in `0..=999_999_999`, so an instant before the epoch with a fraction has
/// a whole second value one less than might be expected.
///
/// The range of instants is exactly the range of [`DateTime`] values in UTC,
/// from `-999999999-01-01T00:00:00Z` to `999999999-12-31T23:59:59.999999999Z`.
///
/// # Parsing and printing
///
/// Instants are printed in UTC with a `Z` designator, and always include
/// the seconds:
///
/// ```
/// use calendrical::Instant;
///
/// let instant = Instant::new(65, 567)?;
/// assert_eq!(instant.to_string(), "1970-01-01T00:01:05.000000567Z");
///
/// let instant: Instant = "2008-06-30T11:30:59+02:00".parse()?;
/// assert_eq!(instant.as_second(), 1_214_818_259);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Instant {
    second: i64,
    nanosecond: i32,
}

impl Instant {
    /// The Unix epoch, `1970-01-01T00:00:00Z`.
    pub const EPOCH: Instant = Instant { second: 0, nanosecond: 0 };

    /// The minimum representable instant.
    pub const MIN: Instant =
        Instant { second: b::InstantSecond::MIN, nanosecond: 0 };

    /// The maximum representable instant.
    pub const MAX: Instant =
        Instant { second: b::InstantSecond::MAX, nanosecond: 999_999_999 };

    /// Creates a new instant from a number of seconds since the Unix epoch
    /// and a fraction of a second.
    ///
    /// # Errors
    ///
    /// This returns a range error if the seconds are out of range, or the
    /// fraction is not in `0..=999_999_999`.
    pub fn new(second: i64, nanosecond: i32) -> Result<Instant, Error> {
        let second = b::InstantSecond::check(second)?;
        let nanosecond = b::SubsecNanosecond::check(nanosecond)?;
        Ok(Instant { second, nanosecond })
    }

    /// Creates a new instant from a number of seconds since the Unix epoch
    /// and an arbitrary adjustment in nanoseconds.
    ///
    /// The adjustment may be negative, or bigger than a second. It is folded
    /// into the seconds with floor division.
    ///
    /// # Errors
    ///
    /// This returns an error if the resulting instant is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::Instant;
    ///
    /// let instant = Instant::from_epoch_second(2, -1)?;
    /// assert_eq!(instant.as_second(), 1);
    /// assert_eq!(instant.subsec_nanosecond(), 999_999_999);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_epoch_second(
        second: i64,
        nano_adjustment: i64,
    ) -> Result<Instant, Error> {
        let carry = arith::floor_div(nano_adjustment, t::NANOS_PER_SECOND);
        let nanosecond =
            arith::floor_mod(nano_adjustment, t::NANOS_PER_SECOND) as i32;
        let second = arith::add(second, carry)?;
        Instant::new(second, nanosecond)
    }

    /// Creates a new instant from a number of milliseconds since the Unix
    /// epoch.
    ///
    /// # Errors
    ///
    /// This never fails for any `i64` value in practice, since the range of
    /// instants is much wider than `i64` milliseconds. It returns a
    /// `Result` for consistency with the other constructors.
    pub fn from_epoch_millis(millis: i64) -> Result<Instant, Error> {
        let dur = Duration::from_millis(millis);
        Instant::new(dur.as_secs(), dur.subsec_nanos())
    }

    /// Returns the current system time as an instant.
    ///
    /// # Panics
    ///
    /// This panics if the system clock is set to a time outside the range
    /// of instants, which is hundreds of millions of years away from now.
    #[cfg(feature = "std")]
    pub fn now() -> Instant {
        Instant::try_from(std::time::SystemTime::now())
            .expect("system time is within the range of instants")
    }

    /// Returns the number of whole seconds since the Unix epoch.
    #[inline]
    pub fn as_second(self) -> i64 {
        self.second
    }

    /// Returns the non-negative fraction of a second of this instant.
    #[inline]
    pub fn subsec_nanosecond(self) -> i32 {
        self.nanosecond
    }

    /// Returns the number of milliseconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// This returns an error if the number of milliseconds overflows an
    /// `i64`.
    pub fn to_epoch_millis(self) -> Result<i64, Error> {
        self.to_duration_since_epoch().to_millis()
    }

    fn to_duration_since_epoch(self) -> Duration {
        Duration::from_secs(self.second)
            + Duration::from_nanos(i64::from(self.nanosecond))
    }

    /// Add the given duration to this instant.
    ///
    /// # Errors
    ///
    /// This returns an arithmetic overflow error if the seconds overflow an
    /// `i64`, or a range error if the result is outside of
    /// [`Instant::MIN`] and [`Instant::MAX`].
    pub fn checked_add(self, duration: Duration) -> Result<Instant, Error> {
        let sum = self.to_duration_since_epoch().checked_add(duration)?;
        Instant::new(sum.as_secs(), sum.subsec_nanos())
    }

    /// Subtract the given duration from this instant.
    pub fn checked_sub(self, duration: Duration) -> Result<Instant, Error> {
        let diff = self.to_duration_since_epoch().checked_sub(duration)?;
        Instant::new(diff.as_secs(), diff.subsec_nanos())
    }

    /// Add the given number of seconds to this instant.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::Instant;
    ///
    /// let err = Instant::MAX.checked_add_seconds(i64::MAX).unwrap_err();
    /// assert!(err.is_arithmetic_overflow());
    ///
    /// let err = Instant::MAX.checked_add_seconds(1).unwrap_err();
    /// assert!(err.is_range());
    /// ```
    pub fn checked_add_seconds(self, seconds: i64) -> Result<Instant, Error> {
        self.checked_add(Duration::from_secs(seconds))
    }

    /// Add the given number of milliseconds to this instant.
    pub fn checked_add_millis(self, millis: i64) -> Result<Instant, Error> {
        self.checked_add(Duration::from_millis(millis))
    }

    /// Add the given number of nanoseconds to this instant.
    pub fn checked_add_nanoseconds(
        self,
        nanoseconds: i64,
    ) -> Result<Instant, Error> {
        self.checked_add(Duration::from_nanos(nanoseconds))
    }

    /// Add an amount of the given unit to this instant.
    ///
    /// Only units with an exact length are supported. Days are 24 hours.
    pub fn checked_add_unit(
        self,
        amount: i64,
        unit: Unit,
    ) -> Result<Instant, Error> {
        self.checked_add(Duration::from_unit(amount, unit)?)
    }

    /// Returns the duration from this instant until the given instant.
    ///
    /// This never fails, since the difference between any two instants fits
    /// in a duration.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{Duration, Instant};
    ///
    /// let start = Instant::new(10, 500_000_000)?;
    /// let end = Instant::new(9, 0)?;
    /// assert_eq!(start.until(end), Duration::from_millis(-1_500));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn until(self, other: Instant) -> Duration {
        // Instant seconds are bounded well within half of the `i64` range.
        Duration::from_secs(other.second - self.second)
            + Duration::from_nanos(
                i64::from(other.nanosecond) - i64::from(self.nanosecond),
            )
    }

    /// Truncate this instant to the given unit, as measured from the start
    /// of the UTC day.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit doesn't evenly divide a day.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{Instant, Unit};
    ///
    /// let instant: Instant = "1969-12-31T23:59:59.999Z".parse()?;
    /// let got = instant.truncated_to(Unit::Hour)?;
    /// assert_eq!(got.to_string(), "1969-12-31T23:00:00Z");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn truncated_to(self, unit: Unit) -> Result<Instant, Error> {
        let Some(divisor) = unit.divisor_of_day() else {
            return Err(UE::UnsupportedUnit { unit, op: "truncating" }.into());
        };
        let nod = arith::floor_mod(self.second, t::SECONDS_PER_DAY)
            * t::NANOS_PER_SECOND
            + i64::from(self.nanosecond);
        let truncated = (nod / divisor) * divisor;
        // Moving back within the same UTC day always stays in range.
        self.checked_add_nanoseconds(truncated - nod)
    }

    /// Returns the civil datetime of this instant at the given offset.
    ///
    /// # Errors
    ///
    /// This returns an error when the datetime would be out of range. This
    /// is only possible within a day of [`Instant::MIN`] or
    /// [`Instant::MAX`].
    pub fn to_datetime(self, offset: Offset) -> Result<DateTime, Error> {
        DateTime::from_instant(self, offset).context(CE::OutOfRangeInstant)
    }
}

impl core::fmt::Debug for Instant {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Instant {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_DATETIME_PRINTER
            .print_instant(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl FromStr for Instant {
    type Err = Error;

    fn from_str(string: &str) -> Result<Instant, Error> {
        DEFAULT_DATETIME_PARSER.parse_instant(string)
    }
}

#[cfg(feature = "std")]
impl TryFrom<std::time::SystemTime> for Instant {
    type Error = Error;

    fn try_from(system_time: std::time::SystemTime) -> Result<Instant, Error> {
        let unix_epoch = std::time::SystemTime::UNIX_EPOCH;
        let dur = match system_time.duration_since(unix_epoch) {
            Ok(dur) => Duration::try_from(dur)?,
            Err(err) => Duration::try_from(err.duration())?.checked_neg()?,
        };
        Instant::EPOCH.checked_add(dur)
    }
}

#[cfg(feature = "std")]
impl TryFrom<Instant> for std::time::SystemTime {
    type Error = Error;

    fn try_from(instant: Instant) -> Result<std::time::SystemTime, Error> {
        let unix_epoch = std::time::SystemTime::UNIX_EPOCH;
        let dur = instant.to_duration_since_epoch();
        let result = if dur.is_negative() {
            let dur = core::time::Duration::try_from(dur.checked_neg()?)?;
            unix_epoch.checked_sub(dur)
        } else {
            let dur = core::time::Duration::try_from(dur)?;
            unix_epoch.checked_add(dur)
        };
        result.ok_or_else(|| {
            Error::from_args(format_args!(
                "instant {instant} is out of range for the system clock",
            ))
        })
    }
}

/// Adds a duration to an instant.
///
/// # Panics
///
/// This panics if the result is out of range. Use [`Instant::checked_add`]
/// for a fallible version.
impl core::ops::Add<Duration> for Instant {
    type Output = Instant;

    #[inline]
    fn add(self, rhs: Duration) -> Instant {
        self.checked_add(rhs).expect("adding duration to instant overflowed")
    }
}

/// Subtracts a duration from an instant.
///
/// # Panics
///
/// This panics if the result is out of range. Use [`Instant::checked_sub`]
/// for a fallible version.
impl core::ops::Sub<Duration> for Instant {
    type Output = Instant;

    #[inline]
    fn sub(self, rhs: Duration) -> Instant {
        self.checked_sub(rhs)
            .expect("subtracting duration from instant overflowed")
    }
}

/// Returns the duration between two instants.
impl core::ops::Sub for Instant {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Instant) -> Duration {
        rhs.until(self)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Instant {
    fn arbitrary(g: &mut quickcheck::Gen) -> Instant {
        let second = i64::arbitrary(g)
            .rem_euclid(b::InstantSecond::MAX - b::InstantSecond::MIN + 1)
            + b::InstantSecond::MIN;
        let nanosecond = i32::arbitrary(g).rem_euclid(1_000_000_000);
        Instant { second, nanosecond }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Instant>> {
        alloc::boxed::Box::new(
            (self.second, self.nanosecond)
                .shrink()
                .filter_map(|(s, ns)| Instant::new(s, ns).ok()),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn epoch_second_normalization() {
        let i = Instant::from_epoch_second(2, -1).unwrap();
        assert_eq!((i.as_second(), i.subsec_nanosecond()), (1, 999_999_999));
        let i = Instant::from_epoch_second(-1, 2_000_000_001).unwrap();
        assert_eq!((i.as_second(), i.subsec_nanosecond()), (1, 1));
        let i = Instant::from_epoch_millis(-1).unwrap();
        assert_eq!((i.as_second(), i.subsec_nanosecond()), (-1, 999_000_000));
        assert_eq!(i.to_epoch_millis().unwrap(), -1);

        let err = Instant::from_epoch_second(i64::MAX, 1_000_000_000)
            .unwrap_err();
        assert!(err.is_arithmetic_overflow());
        let err = Instant::from_epoch_second(b::InstantSecond::MAX + 1, 0)
            .unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn extremes_print() {
        assert_eq!(
            Instant::MIN.to_string(),
            "-999999999-01-01T00:00:00Z",
        );
        assert_eq!(
            Instant::MAX.to_string(),
            "+999999999-12-31T23:59:59.999999999Z",
        );
        assert_eq!(Instant::EPOCH.to_string(), "1970-01-01T00:00:00Z");
        assert_eq!(
            Instant::new(65, 567).unwrap().to_string(),
            "1970-01-01T00:01:05.000000567Z",
        );
    }

    #[test]
    fn arithmetic_errors_are_disjoint() {
        let err = Instant::MAX.checked_add_seconds(i64::MAX).unwrap_err();
        assert!(err.is_arithmetic_overflow());
        assert!(!err.is_range());

        let err = Instant::MAX.checked_add_nanoseconds(1).unwrap_err();
        assert!(err.is_range());
        assert!(!err.is_arithmetic_overflow());

        assert!(Instant::MIN.checked_sub(Duration::from_nanos(1)).is_err());
        assert_eq!(
            Instant::MIN.until(Instant::MAX),
            Duration::new(
                b::InstantSecond::MAX - b::InstantSecond::MIN,
                999_999_999,
            )
            .unwrap(),
        );
    }

    #[test]
    fn truncation() {
        let i = Instant::from_epoch_second(-1, 123_456_789).unwrap();
        let got = i.truncated_to(Unit::Minute).unwrap();
        assert_eq!(got.as_second(), -60);
        assert_eq!(got.subsec_nanosecond(), 0);
        let got = i.truncated_to(Unit::Millisecond).unwrap();
        assert_eq!(got.subsec_nanosecond(), 123_000_000);
        assert_eq!(i.truncated_to(Unit::Day).unwrap().as_second(), -86_400);
        assert!(i.truncated_to(Unit::Month).unwrap_err().is_unsupported());
        assert_eq!(Instant::MIN.truncated_to(Unit::Day).unwrap(), Instant::MIN);
    }

    #[test]
    fn datetime_conversion() {
        let i = Instant::from_epoch_second(0, 0).unwrap();
        let dt = i.to_datetime(Offset::constant(-5)).unwrap();
        assert_eq!(dt.to_string(), "1969-12-31T19:00");
        insta::assert_snapshot!(
            Instant::MAX.to_datetime(Offset::constant(1)).unwrap_err(),
            @"civil datetime at the given offset is outside the supported range of instants: parameter 'epoch-day' with value 365241780472 is not in the required range of -365243219162..=365241780471",
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_time() {
        let now = Instant::now();
        let st = std::time::SystemTime::try_from(now).unwrap();
        assert_eq!(Instant::try_from(st).unwrap(), now);

        let before = std::time::SystemTime::UNIX_EPOCH
            - std::time::Duration::new(1, 500_000_000);
        let got = Instant::try_from(before).unwrap();
        assert_eq!((got.as_second(), got.subsec_nanosecond()), (-2, 500_000_000));
    }

    quickcheck::quickcheck! {
        fn prop_until_then_add(i1: Instant, i2: Instant) -> bool {
            i1.checked_add(i1.until(i2)).unwrap() == i2
        }

        fn prop_truncate_is_not_after(i: Instant, unit: Unit) -> quickcheck::TestResult {
            let Ok(got) = i.truncated_to(unit) else {
                return quickcheck::TestResult::discard();
            };
            quickcheck::TestResult::from_bool(got <= i)
        }

        fn prop_text_roundtrip(i: Instant) -> bool {
            i.to_string().parse::<Instant>().unwrap() == i
        }
    }
}
