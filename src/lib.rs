/*!
A proleptic Gregorian calendrical engine.

This crate provides civil dates and times, instants on the UTC time-line,
fixed-length durations, calendar periods, time zone resolution and a fixed
ISO 8601 text format for all of them.

# Overview

* [`civil::Date`], [`civil::Time`] and [`civil::DateTime`] are "wall clock"
values with no relation to any time zone.
* [`Instant`] is a point on the UTC time-line with nanosecond precision,
measured from the Unix epoch.
* [`Duration`] is an exact amount of time in seconds and nanoseconds.
* [`Period`] is an amount of calendar time in years, months and days.
* [`tz::Offset`] is a fixed offset from UTC, and [`tz::TimeZone`] maps
instants and civil datetimes to offsets via [`tz::ZoneRules`].
* [`Zoned`] is an instant in a time zone, and is where civil datetimes that
fall in gaps and overlaps get resolved.

Every value has a `Display` and `FromStr` implementation in terms of the
[`fmt::temporal`] format.

# Example

```
use calendrical::{civil::date, tz::{Offset, TimeZone}, Duration, Period, Zoned};

let dt = date(2024, 1, 31).at(9, 30, 0, 0);
assert_eq!(dt.checked_add(Period::from_months(1))?.to_string(), "2024-02-29T09:30");

let zdt = Zoned::new(dt, TimeZone::fixed(Offset::constant(-5)))?;
let later = zdt.checked_add_duration(Duration::from_secs(3_600))?;
assert_eq!(later.to_string(), "2024-01-31T10:30-05:00");
assert_eq!(later.to_instant().to_string(), "2024-01-31T15:30:00Z");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Errors

Every fallible operation returns this crate's single [`Error`] type. It can
be asked whether it's an arithmetic overflow, a range violation, a zone
resolution failure or a parse failure. Parse errors also report the byte
offset at which parsing failed.

# Crate features

* **std** (enabled by default) - Provides `std::error::Error` for [`Error`],
[`Instant::now`] and conversions with `std::time::SystemTime`. Without it,
this crate is `no_std` but still requires `alloc`.
* **logging** - Emits log messages through the [`log`] crate, mostly about how
civil datetimes in gaps and overlaps were resolved.

[`log`]: https://docs.rs/log
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Errors and time zones allocate.
extern crate alloc;

pub use crate::{
    duration::Duration, error::Error, field::Field, instant::Instant,
    period::Period, unit::Unit, zoned::Zoned,
};

#[macro_use]
mod logging;

pub mod civil;
mod duration;
mod error;
mod field;
pub mod fmt;
mod instant;
mod period;
pub mod tz;
mod unit;
mod util;
mod zoned;

#[cfg(test)]
mod tests {
    use crate::{civil::date, logging::Logger, tz::TimeZone};

    use super::*;

    #[test]
    fn types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Error>();
        assert_send_sync::<TimeZone>();
        assert_send_sync::<Zoned>();
    }

    #[test]
    fn every_value_displays() {
        let _ = Logger::init();

        let dt = date(2024, 6, 19).at(13, 5, 30, 250_000_000);
        insta::assert_snapshot!(dt.date(), @"2024-06-19");
        insta::assert_snapshot!(dt.time(), @"13:05:30.250");
        insta::assert_snapshot!(dt, @"2024-06-19T13:05:30.250");
        insta::assert_snapshot!(
            dt.to_instant(tz::Offset::UTC).unwrap(),
            @"2024-06-19T13:05:30.250Z",
        );
        insta::assert_snapshot!(
            Zoned::new(dt, TimeZone::UTC).unwrap(),
            @"2024-06-19T13:05:30.250Z",
        );
        insta::assert_snapshot!(Duration::from_millis(-1_500), @"PT-1.5S");
        insta::assert_snapshot!(Period::new(1, -2, 3), @"P1Y-2M3D");
    }
}
