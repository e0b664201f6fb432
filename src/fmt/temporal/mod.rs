/*!
A fixed ISO 8601 text format for every value in this crate.

The grammar, by example:

| Type | Example |
| ---- | ------- |
| [`Date`](crate::civil::Date) | `2024-06-19`, `+10000-01-01`, `-0001-12-31` |
| [`Time`](crate::civil::Time) | `13:05`, `13:05:30`, `13:05:30.250` |
| [`DateTime`](crate::civil::DateTime) | `2024-06-19T13:05:30` |
| [`Offset`](crate::tz::Offset) | `Z`, `+05:30`, `-01:02:03` |
| [`Instant`](crate::Instant) | `2024-06-19T13:05:30Z` |
| [`Zoned`](crate::Zoned) | `2024-03-10T03:30-04:00[America/New_York]` |
| [`Duration`](crate::Duration) | `PT0S`, `PT8H6M12.345S`, `PT-0.5S` |
| [`Period`](crate::Period) | `P0D`, `P1Y2M3D`, `P-1M` |

Negative years have a `-` and at least four digits. Years after `9999` have
a `+` and five or more digits.
Fractional seconds are printed in groups of three digits, and are omitted
entirely when zero, as are seconds when both they and the fraction are zero.
Instants are always printed with seconds.

Durations count days as exactly 24 hours and print them as hours, so that
`P2D` parses but prints as `PT48H`. Each component of a duration or period
carries its own sign.

Printing always produces text that parses back to an equal value. Parsing
accepts a few alternatives on top of what is printed, such as lowercase
designators or `,` as a decimal separator in durations.

# Example

```
use calendrical::{civil::date, fmt::temporal::{DateTimeParser, DateTimePrinter}};

let printer = DateTimePrinter::new().separator(b' ');
let mut buf = String::new();
printer.print_datetime(&date(2024, 6, 19).at(7, 0, 0, 0), &mut buf)?;
assert_eq!(buf, "2024-06-19 07:00");

let parser = DateTimeParser::new();
assert_eq!(parser.parse_datetime("2024-06-19t07:00:00")?, date(2024, 6, 19).at(7, 0, 0, 0));

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub use self::{parser::DateTimeParser, printer::DateTimePrinter};

mod parser;
mod printer;

pub(crate) static DEFAULT_DATETIME_PARSER: DateTimeParser =
    DateTimeParser::new();

pub(crate) static DEFAULT_DATETIME_PRINTER: DateTimePrinter =
    DateTimePrinter::new();
