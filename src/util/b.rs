/*!
Named bounds for the integer values that make up civil dates, times and
offsets.

Each bound is a zero sized type implementing [`Bounds`], which carries a
human readable name along with an inclusive minimum and maximum. Checking a
value against a bound produces a range error that names the offending
parameter.
*/

use crate::{util::common, Error};

macro_rules! define_bounds {
    ($((
        $name:ident,
        $ty:ty,
        $what:expr,
        $min:expr,
        $max:expr $(,)?
    )),* $(,)?) => {
        $(
            #[derive(Debug)]
            pub(crate) struct $name(());

            impl Bounds for $name {
                const WHAT: &'static str = $what;
                const MIN: Self::Primitive = $min;
                const MAX: Self::Primitive = $max;
                type Primitive = $ty;
            }

            #[allow(dead_code)]
            impl $name {
                pub(crate) const MIN: $ty = $min;
                pub(crate) const MAX: $ty = $max;

                #[inline]
                pub(crate) fn check(n: impl Into<i64>) -> Result<$ty, Error> {
                    <$name as Bounds>::check(n)
                }

                #[inline]
                pub(crate) const fn contains(n: $ty) -> bool {
                    $min <= n && n <= $max
                }
            }
        )*
    }
}

define_bounds! {
    (Year, i32, "year", -999_999_999, 999_999_999),
    (Month, i8, "month", 1, 12),
    (Day, i8, "day", 1, 31),
    (DayOfYear, i16, "day-of-year", 1, 366),
    (Weekday, i8, "weekday", 1, 7),
    (Hour, i8, "hour", 0, 23),
    (Minute, i8, "minute", 0, 59),
    (Second, i8, "second", 0, 59),
    (SubsecMillisecond, i16, "millisecond-of-second", 0, 999),
    (SubsecMicrosecond, i32, "microsecond-of-second", 0, 999_999),
    (SubsecNanosecond, i32, "nanosecond-of-second", 0, 999_999_999),
    (MinuteOfDay, i16, "minute-of-day", 0, 1_439),
    (SecondOfDay, i32, "second-of-day", 0, 86_399),
    (NanoOfDay, i64, "nanosecond-of-day", 0, 86_399_999_999_999),
    (
        EpochDay,
        i64,
        "epoch-day",
        common::to_epoch_day(Year::MIN, 1, 1),
        common::to_epoch_day(Year::MAX, 12, 31),
    ),
    (
        ProlepticMonth,
        i64,
        "proleptic-month",
        Year::MIN as i64 * 12,
        Year::MAX as i64 * 12 + 11,
    ),
    (
        InstantSecond,
        i64,
        "instant-seconds",
        EpochDay::MIN * 86_400,
        EpochDay::MAX * 86_400 + 86_399,
    ),
    // Offsets are limited to ±18 hours. Negating an offset always produces
    // another valid offset.
    (OffsetHours, i8, "offset-hours", -18, 18),
    (OffsetMinutes, i8, "offset-minutes", -59, 59),
    (OffsetSeconds, i8, "offset-seconds", -59, 59),
    (OffsetTotalSeconds, i32, "offset-total-seconds", -64_800, 64_800),
}

/// An interface for defining boundaries on integer values.
pub(crate) trait Bounds: Sized {
    /// A short human readable description of the values represented by these
    /// bounds.
    const WHAT: &'static str;

    /// The minimum boundary value.
    const MIN: Self::Primitive;

    /// The maximum boundary value.
    const MAX: Self::Primitive;

    /// The primitive integer representation for this boundary type.
    ///
    /// This is generally the smallest primitive integer type that fits the
    /// minimum and maximum allowed values.
    type Primitive: Primitive;

    /// Converts the 64-bit integer provided into the primitive representation
    /// of these bounds.
    ///
    /// # Errors
    ///
    /// This returns a range error if the given integer does not fit in the
    /// bounds prescribed by this trait implementation.
    #[inline]
    fn check(n: impl Into<i64>) -> Result<Self::Primitive, Error> {
        let n = n.into();
        if !(Self::MIN.as_i64() <= n && n <= Self::MAX.as_i64()) {
            return Err(Error::range(
                Self::WHAT,
                n,
                Self::MIN.as_i64(),
                Self::MAX.as_i64(),
            ));
        }
        Ok(Self::Primitive::from_i64(n))
    }
}

/// A simple trait for making `int as int` usable in a generic context.
///
/// All of these methods require callers to ensure the cast is correct.
pub(crate) trait Primitive:
    Clone + Copy + core::fmt::Debug + core::fmt::Display
{
    fn as_i64(self) -> i64;
    fn from_i64(n: i64) -> Self;
}

macro_rules! impl_primitive {
    ($($intty:ty),*) => {
        $(
            impl Primitive for $intty {
                fn as_i64(self) -> i64 { self as i64 }
                fn from_i64(n: i64) -> Self { n as $intty }
            }
        )*
    }
}

impl_primitive!(i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn basic_error_functionality() {
        let err = Month::check(13).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parameter 'month' with value 13 is not in the required range \
             of 1..=12",
        );
        assert!(err.is_range());
    }

    #[test]
    fn derived_bounds() {
        assert_eq!(EpochDay::MIN, -365_243_219_162);
        assert_eq!(EpochDay::MAX, 365_241_780_471);
        assert_eq!(InstantSecond::MIN, -31_557_014_135_596_800);
        assert_eq!(InstantSecond::MAX, 31_556_889_832_780_799);
        assert!(OffsetTotalSeconds::contains(-64_800));
        assert!(!OffsetTotalSeconds::contains(64_801));
    }
}
