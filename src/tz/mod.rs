/*!
Routines for interacting with time zones and offsets.

This crate doesn't ship time zone data. Instead, [`ZoneRules`] is the
interface through which zone data is consumed. [`TransitionRules`] is a
ready made implementation built from a list of transitions, and a
[`TimeZoneDatabase`] maps names to [`TimeZone`] values.

The core operation here is mapping a civil datetime to its valid offsets
via [`TimeZone::to_local_offsets`]. There are three possible outcomes:

* [`LocalOffsets::Normal`] means exactly one offset is valid.
* [`LocalOffsets::Gap`] means the civil datetime was skipped, for example
when clocks move forward for daylight saving time.
* [`LocalOffsets::Overlap`] means the civil datetime occurred twice, for
example when clocks move backward.

[`Zoned`](crate::Zoned) uses these outcomes to pick an offset.

# Example

```
use calendrical::{civil::date, tz::{Offset, TimeZone, TransitionRules}, Zoned};

let paris = TimeZone::new(
    "Europe/Paris",
    TransitionRules::new(
        Offset::constant(1),
        [
            (1_206_838_800, Offset::constant(2)),
            (1_224_982_800, Offset::constant(1)),
        ],
    )?,
)?;

// 02:30 doesn't exist on this day, so it's moved forward by the length of
// the gap.
let zdt = Zoned::new(date(2008, 3, 30).at(2, 30, 0, 0), paris)?;
assert_eq!(zdt.to_string(), "2008-03-30T03:30+02:00[Europe/Paris]");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub use self::{
    database::TimeZoneDatabase,
    offset::Offset,
    rules::{LocalOffsets, Transition, TransitionRules, ZoneRules},
    timezone::TimeZone,
};

mod database;
mod offset;
mod rules;
mod timezone;
