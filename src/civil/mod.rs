/*!
Facilities for dealing with inexact dates and times.

# Overview

The essential types in this module are:

* [`Date`] is a specific day in the proleptic Gregorian calendar.
* [`Time`] is a specific wall clock time.
* [`DateTime`] is a combination of a day and a time.

Civil values are "inexact": they don't correspond to a precise instant in
time unless paired with an offset or a time zone. For example, `2024-03-10
02:30` describes a wall clock reading, but not a single moment, since that
reading happens at different instants in different places. In some time
zones it doesn't happen at all.

The free functions [`date`], [`time`] and [`datetime`] are convenient for
building civil values from literals in a `const` context. They panic on
invalid input.

# Example

```
use calendrical::{civil::date, Period};

let start = date(2010, 1, 1);
let end = date(2010, 2, 28);
assert_eq!(start.until(end)?, Period::new(0, 1, 27));
assert_eq!(start + Period::new(0, 1, 27), end);

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub use self::{date::Date, datetime::DateTime, time::Time, weekday::Weekday};

mod date;
mod datetime;
mod time;
mod weekday;

/// Creates a new `Date` value in a `const` context.
///
/// This is a convenience free function for [`Date::constant`].
///
/// # Panics
///
/// This panics if the given values do not correspond to a valid date.
///
/// # Example
///
/// ```
/// use calendrical::civil::date;
///
/// let d = date(2024, 2, 29);
/// assert_eq!(d.year(), 2024);
/// assert_eq!(d.month(), 2);
/// assert_eq!(d.day(), 29);
/// ```
#[inline]
pub const fn date(year: i32, month: i8, day: i8) -> Date {
    Date::constant(year, month, day)
}

/// Creates a new `Time` value in a `const` context.
///
/// This is a convenience free function for [`Time::constant`].
///
/// # Panics
///
/// This panics if the given values are out of range.
#[inline]
pub const fn time(
    hour: i8,
    minute: i8,
    second: i8,
    subsec_nanosecond: i32,
) -> Time {
    Time::constant(hour, minute, second, subsec_nanosecond)
}

/// Creates a new `DateTime` value in a `const` context.
///
/// This is a convenience free function for [`DateTime::constant`].
///
/// # Panics
///
/// This panics if the given values do not correspond to a valid date and
/// time.
///
/// # Example
///
/// ```
/// use calendrical::civil::datetime;
///
/// let dt = datetime(2024, 2, 29, 21, 30, 5, 123_456_789);
/// assert_eq!(dt.to_string(), "2024-02-29T21:30:05.123456789");
/// ```
#[inline]
pub const fn datetime(
    year: i32,
    month: i8,
    day: i8,
    hour: i8,
    minute: i8,
    second: i8,
    subsec_nanosecond: i32,
) -> DateTime {
    DateTime::constant(
        year,
        month,
        day,
        hour,
        minute,
        second,
        subsec_nanosecond,
    )
}
