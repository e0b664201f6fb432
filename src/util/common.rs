/*!
A collection of calendrical utility functions on primitive integers.

Everything here is `const` so that the boundary values of the civil types
(and of the bounds in `util::b`) can be derived at compile time.

# Algorithms

Conversion between civil dates and epoch days works on a calendar whose
years begin on March 1. This puts the leap day at the very end of the year,
which means the number of days before a given month never depends on
whether the year is a leap year. Day counts for whole years then follow the
usual closed form `365*y + y/4 - y/100 + y/400`, where all divisions round
toward negative infinity.
*/

/// The number of days from 0000-03-01 to 1970-01-01.
const DAYS_0000_03_01_TO_1970: i64 = 719_468;

/// The number of days in a 400 year cycle of the Gregorian calendar.
const DAYS_PER_CYCLE: i64 = 146_097;

/// The number of days preceding each month in a year starting in March.
///
/// Index `0` is March and index `11` is February.
const DAYS_BEFORE_MONTH_FROM_MARCH: [i64; 12] =
    [0, 31, 61, 92, 122, 153, 184, 214, 245, 275, 306, 337];

/// Returns true if and only if the given year is a leap year.
///
/// A leap year is a year with 366 days. Typical years have 365 days.
#[inline]
pub(crate) const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given year.
#[inline]
pub(crate) const fn days_in_year(year: i32) -> i16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the number of days in the given year and month.
///
/// This correctly returns `29` when the year is a leap year and the month is
/// February. Callers must ensure the month is in the range `1..=12`.
#[inline]
pub(crate) const fn days_in_month(year: i32, month: i8) -> i8 {
    if month == 2 {
        if is_leap_year(year) {
            29
        } else {
            28
        }
    } else {
        30 | (month ^ month >> 3)
    }
}

/// Returns the one-based ordinal day of the year for the given date.
#[inline]
pub(crate) const fn day_of_year(year: i32, month: i8, day: i8) -> i16 {
    const DAYS_BEFORE_MONTH: [i16; 12] =
        [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

    let mut doy = DAYS_BEFORE_MONTH[month as usize - 1] + day as i16;
    if month > 2 && is_leap_year(year) {
        doy += 1;
    }
    doy
}

/// Returns the number of days since 1970-01-01 for the given date.
///
/// Callers must ensure the date is valid. Every valid date in the range
/// `-999999999-01-01..=999999999-12-31` is supported without overflow.
#[inline]
pub(crate) const fn to_epoch_day(year: i32, month: i8, day: i8) -> i64 {
    let (year, month0) = if month <= 2 {
        (year as i64 - 1, month as usize + 9)
    } else {
        (year as i64, month as usize - 3)
    };
    let whole_years = 365 * year + year.div_euclid(4) - year.div_euclid(100)
        + year.div_euclid(400);
    whole_years
        + DAYS_BEFORE_MONTH_FROM_MARCH[month0]
        + (day as i64 - 1)
        - DAYS_0000_03_01_TO_1970
}

/// Returns the date corresponding to the given number of days since
/// 1970-01-01.
///
/// This is the exact inverse of [`to_epoch_day`]. Callers must ensure the
/// epoch day is within the bounds of `util::b::EpochDay`.
#[inline]
pub(crate) const fn from_epoch_day(epoch_day: i64) -> (i32, i8, i8) {
    let mut zero_day = epoch_day + DAYS_0000_03_01_TO_1970;
    // Move negative days into a positive 400 year cycle so that the year
    // estimate below only ever deals with non-negative values.
    let mut adjust = 0;
    if zero_day < 0 {
        let cycles = (zero_day + 1) / DAYS_PER_CYCLE - 1;
        adjust = cycles * 400;
        zero_day += -cycles * DAYS_PER_CYCLE;
    }
    let mut year = (400 * zero_day + 591) / DAYS_PER_CYCLE;
    let mut doy =
        zero_day - (365 * year + year / 4 - year / 100 + year / 400);
    if doy < 0 {
        year -= 1;
        doy = zero_day - (365 * year + year / 4 - year / 100 + year / 400);
    }
    year += adjust;

    let month0 = (doy * 5 + 2) / 153;
    let month = (month0 + 2) % 12 + 1;
    let day = doy - (month0 * 306 + 5) / 10 + 1;
    year += month0 / 10;
    (year as i32, month as i8, day as i8)
}

/// Returns the ISO weekday for the given epoch day, where Monday is `1` and
/// Sunday is `7`.
#[inline]
pub(crate) const fn weekday_from_epoch_day(epoch_day: i64) -> i8 {
    // 1970-01-01 was a Thursday.
    ((epoch_day + 3).rem_euclid(7) + 1) as i8
}
