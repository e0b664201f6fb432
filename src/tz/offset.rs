use core::str::FromStr;

use crate::{
    civil::DateTime,
    error::{tz::Error as E, Error},
    fmt::{
        temporal::{DEFAULT_DATETIME_PARSER, DEFAULT_DATETIME_PRINTER},
        FmtWrite,
    },
    util::{b, t},
    Instant,
};

/// Represents a fixed time zone offset.
///
/// Negative offsets correspond to time zones west of the prime meridian,
/// while positive offsets correspond to time zones east of the prime
/// meridian. Equivalently, in all cases, `civil-time - offset = UTC`.
///
/// Offsets are limited to the range `-18:00..=+18:00` and have a precision
/// of one second.
///
/// # Display format
///
/// The zero offset is printed as `Z`. Every other offset is printed as
/// `±HH:MM`, with `:SS` appended when there are seconds:
///
/// ```
/// use calendrical::tz::Offset;
///
/// assert_eq!(Offset::UTC.to_string(), "Z");
/// assert_eq!(Offset::constant(-5).to_string(), "-05:00");
/// assert_eq!(Offset::from_hms(5, 30, 15)?.to_string(), "+05:30:15");
///
/// let offset: Offset = "-03:30".parse()?;
/// assert_eq!(offset.seconds(), -12_600);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Offset {
    seconds: i32,
}

impl Offset {
    /// The minimum possible time zone offset, `-18:00`.
    pub const MIN: Offset = Offset::constant(-18);

    /// The maximum possible time zone offset, `+18:00`.
    pub const MAX: Offset = Offset::constant(18);

    /// The offset corresponding to UTC. That is, no offset at all.
    ///
    /// This is always equal to `Offset::ZERO`, but reads better when UTC is
    /// meant specifically.
    pub const UTC: Offset = Offset::ZERO;

    /// The offset corresponding to no offset at all.
    pub const ZERO: Offset = Offset::constant(0);

    /// Creates a new time zone offset in a `const` context from a given
    /// number of hours.
    ///
    /// # Panics
    ///
    /// This routine panics when the given number of hours is not in the
    /// range `-18..=18`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::tz::Offset;
    ///
    /// assert_eq!(Offset::constant(-5).seconds(), -18_000);
    /// ```
    #[inline]
    pub const fn constant(hours: i8) -> Offset {
        if !b::OffsetHours::contains(hours) {
            panic!("invalid time zone offset hours")
        }
        Offset::constant_seconds((hours as i32) * 60 * 60)
    }

    /// Creates a new time zone offset in a `const` context from a given
    /// number of seconds.
    ///
    /// # Panics
    ///
    /// This routine panics when the given number of seconds is not in the
    /// range `-64_800..=64_800`.
    #[inline]
    pub const fn constant_seconds(seconds: i32) -> Offset {
        if !b::OffsetTotalSeconds::contains(seconds) {
            panic!("invalid time zone offset seconds")
        }
        Offset { seconds }
    }

    /// Creates a new time zone offset from a given number of hours.
    ///
    /// # Errors
    ///
    /// This returns a range error when the given number of hours is not in
    /// the range `-18..=18`.
    pub fn from_hours(hours: i8) -> Result<Offset, Error> {
        let hours = b::OffsetHours::check(hours)?;
        Ok(Offset { seconds: i32::from(hours) * 3_600 })
    }

    /// Creates a new time zone offset from a given number of seconds.
    ///
    /// # Errors
    ///
    /// This returns a range error when the given number of seconds is not in
    /// the range `-64_800..=64_800`.
    pub fn from_seconds(seconds: i32) -> Result<Offset, Error> {
        let seconds = b::OffsetTotalSeconds::check(seconds)?;
        Ok(Offset { seconds })
    }

    /// Creates a new time zone offset from hours, minutes and seconds.
    ///
    /// All non-zero components must have the same sign.
    ///
    /// # Errors
    ///
    /// This returns an error when any component is out of range, when the
    /// components have different signs, or when the total is beyond
    /// `±18:00`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::tz::Offset;
    ///
    /// assert_eq!(Offset::from_hms(-5, -30, 0)?.seconds(), -19_800);
    /// assert!(Offset::from_hms(-5, 30, 0).is_err());
    /// assert!(Offset::from_hms(18, 0, 1).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_hms(
        hours: i8,
        minutes: i8,
        seconds: i8,
    ) -> Result<Offset, Error> {
        let hours = b::OffsetHours::check(hours)?;
        let minutes = b::OffsetMinutes::check(minutes)?;
        let seconds = b::OffsetSeconds::check(seconds)?;
        let any_positive = hours > 0 || minutes > 0 || seconds > 0;
        let any_negative = hours < 0 || minutes < 0 || seconds < 0;
        if any_positive && any_negative {
            return Err(E::MixedOffsetSigns { hours, minutes, seconds }.into());
        }
        Offset::from_seconds(
            i32::from(hours) * 3_600
                + i32::from(minutes) * 60
                + i32::from(seconds),
        )
    }

    /// Returns the total number of seconds in this offset.
    #[inline]
    pub fn seconds(self) -> i32 {
        self.seconds
    }

    /// Returns the negation of this offset.
    ///
    /// This never fails since the range of offsets is symmetric.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::tz::Offset;
    ///
    /// assert_eq!(Offset::constant(-5).negate(), Offset::constant(5));
    /// assert_eq!(-Offset::constant(-5), Offset::constant(5));
    /// ```
    #[inline]
    pub fn negate(self) -> Offset {
        Offset { seconds: -self.seconds }
    }

    /// Returns true if and only if this offset is less than zero.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.seconds < 0
    }

    /// Converts the given instant to a civil datetime using this offset.
    ///
    /// # Errors
    ///
    /// This returns an error when the datetime is out of range, which is
    /// only possible for instants within a day of [`Instant::MIN`] or
    /// [`Instant::MAX`].
    pub fn to_datetime(self, instant: Instant) -> Result<DateTime, Error> {
        instant.to_datetime(self)
    }

    /// Converts the given civil datetime to an instant using this offset.
    ///
    /// # Errors
    ///
    /// This returns an error when the instant is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::date, tz::Offset};
    ///
    /// let dt = date(1970, 1, 1).at(0, 0, 0, 0);
    /// let instant = Offset::constant(-5).to_instant(dt)?;
    /// assert_eq!(instant.as_second(), 18_000);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_instant(self, dt: DateTime) -> Result<Instant, Error> {
        dt.to_instant(self)
    }

    /// Returns the absolute hours component of this offset.
    pub(crate) fn part_hours(self) -> i8 {
        (self.seconds.unsigned_abs() / t::SECONDS_PER_HOUR as u32) as i8
    }

    /// Returns the absolute minutes component of this offset.
    pub(crate) fn part_minutes(self) -> i8 {
        ((self.seconds.unsigned_abs() / 60) % 60) as i8
    }

    /// Returns the absolute seconds component of this offset.
    pub(crate) fn part_seconds(self) -> i8 {
        (self.seconds.unsigned_abs() % 60) as i8
    }
}

impl core::fmt::Debug for Offset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Offset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_DATETIME_PRINTER
            .print_offset(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl FromStr for Offset {
    type Err = Error;

    fn from_str(string: &str) -> Result<Offset, Error> {
        DEFAULT_DATETIME_PARSER.parse_offset(string)
    }
}

/// Negate this offset.
///
/// This never panics.
impl core::ops::Neg for Offset {
    type Output = Offset;

    #[inline]
    fn neg(self) -> Offset {
        self.negate()
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Offset {
    fn arbitrary(g: &mut quickcheck::Gen) -> Offset {
        let seconds = i32::arbitrary(g).rem_euclid(2 * 64_800 + 1) - 64_800;
        Offset { seconds }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Offset>> {
        alloc::boxed::Box::new(
            self.seconds.shrink().filter_map(|s| Offset::from_seconds(s).ok()),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn parts() {
        let o = Offset::from_hms(-10, -20, -30).unwrap();
        assert_eq!((o.part_hours(), o.part_minutes(), o.part_seconds()), (10, 20, 30));
        assert!(o.is_negative());
        assert_eq!(o.to_string(), "-10:20:30");
    }

    #[test]
    fn errors() {
        insta::assert_snapshot!(
            Offset::from_hms(1, -1, 0).unwrap_err(),
            @"offset components 1, -1 and 0 must all have the same sign",
        );
        insta::assert_snapshot!(
            Offset::from_hours(19).unwrap_err(),
            @"parameter 'offset-hours' with value 19 is not in the required range of -18..=18",
        );
        insta::assert_snapshot!(
            Offset::from_seconds(-64_801).unwrap_err(),
            @"parameter 'offset-total-seconds' with value -64801 is not in the required range of -64800..=64800",
        );
    }

    quickcheck::quickcheck! {
        fn prop_negate_is_involution(o: Offset) -> bool {
            o.negate().negate() == o
        }

        fn prop_text_roundtrip(o: Offset) -> bool {
            o.to_string().parse::<Offset>().unwrap() == o
        }
    }
}
