use crate::{
    civil::{Date, DateTime, Time},
    error::Error,
    fmt::{
        util::{fraction_group, DecimalFormatter},
        Write, WriteExt,
    },
    tz::Offset,
    util::t,
    Duration, Instant, Period, Zoned,
};

/// A printer for the ISO 8601 text of every value in this crate.
///
/// The output of this printer is always accepted by
/// [`DateTimeParser`](super::DateTimeParser). Most callers will use the
/// `Display` impls of each type instead, which use the default
/// configuration.
///
/// # Example
///
/// ```
/// use calendrical::{civil::date, fmt::temporal::DateTimePrinter};
///
/// let dt = date(2024, 6, 15).at(7, 0, 0, 0);
/// let printer = DateTimePrinter::new().separator(b' ');
/// let mut buf = String::new();
/// printer.print_datetime(&dt, &mut buf)?;
/// assert_eq!(buf, "2024-06-15 07:00");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct DateTimePrinter {
    lowercase: bool,
    separator: u8,
}

impl DateTimePrinter {
    /// Creates a printer with the default configuration.
    pub const fn new() -> DateTimePrinter {
        DateTimePrinter { lowercase: false, separator: b'T' }
    }

    /// Use lowercase for the datetime separator, the `Z` offset and the
    /// unit designators of durations and periods.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{fmt::temporal::DateTimePrinter, Duration};
    ///
    /// let printer = DateTimePrinter::new().lowercase(true);
    /// let mut buf = String::new();
    /// printer.print_duration(&Duration::from_secs(5_400), &mut buf)?;
    /// assert_eq!(buf, "pt1h30m");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub const fn lowercase(self, yes: bool) -> DateTimePrinter {
        DateTimePrinter { lowercase: yes, ..self }
    }

    /// Use the given ASCII character to separate the date and time.
    ///
    /// Note that only `T` (or `t`) is accepted by the parser.
    ///
    /// # Panics
    ///
    /// This panics when the given byte is not ASCII.
    pub const fn separator(self, ascii_char: u8) -> DateTimePrinter {
        assert!(ascii_char.is_ascii(), "separator must be ASCII");
        DateTimePrinter { separator: ascii_char, ..self }
    }

    /// Print a date as `YYYY-MM-DD`.
    ///
    /// Years outside of `-9999..=9999` get an explicit sign and as many
    /// digits as needed.
    pub fn print_date<W: Write>(
        &self,
        date: &Date,
        mut wtr: W,
    ) -> Result<(), Error> {
        static FMT_YEAR: DecimalFormatter = DecimalFormatter::new().padding(4);
        static FMT_BIG_YEAR: DecimalFormatter =
            DecimalFormatter::new().force_sign(true);
        static FMT_TWO: DecimalFormatter = DecimalFormatter::new().padding(2);

        if (-9_999..=9_999).contains(&date.year()) {
            wtr.write_int(&FMT_YEAR, date.year())?;
        } else {
            wtr.write_int(&FMT_BIG_YEAR, date.year())?;
        }
        wtr.write_str("-")?;
        wtr.write_int(&FMT_TWO, date.month())?;
        wtr.write_str("-")?;
        wtr.write_int(&FMT_TWO, date.day())?;
        Ok(())
    }

    /// Print a time as `HH:MM`, followed by seconds and a fraction only
    /// when they are needed.
    pub fn print_time<W: Write>(
        &self,
        time: &Time,
        wtr: W,
    ) -> Result<(), Error> {
        self.print_time_with(time, false, wtr)
    }

    /// Print a datetime as a date and a time joined by the separator.
    pub fn print_datetime<W: Write>(
        &self,
        dt: &DateTime,
        mut wtr: W,
    ) -> Result<(), Error> {
        self.print_date(&dt.date(), &mut wtr)?;
        self.print_separator(&mut wtr)?;
        self.print_time(&dt.time(), &mut wtr)?;
        Ok(())
    }

    /// Print an instant as a datetime in UTC, always including seconds, with
    /// a trailing `Z`.
    pub fn print_instant<W: Write>(
        &self,
        instant: &Instant,
        mut wtr: W,
    ) -> Result<(), Error> {
        let dt = instant.to_datetime(Offset::UTC)?;
        self.print_date(&dt.date(), &mut wtr)?;
        self.print_separator(&mut wtr)?;
        self.print_time_with(&dt.time(), true, &mut wtr)?;
        self.print_zulu(&mut wtr)?;
        Ok(())
    }

    /// Print an offset as `Z` when it's zero, and `±HH:MM[:SS]` otherwise.
    pub fn print_offset<W: Write>(
        &self,
        offset: &Offset,
        mut wtr: W,
    ) -> Result<(), Error> {
        static FMT_TWO: DecimalFormatter = DecimalFormatter::new().padding(2);

        if *offset == Offset::UTC {
            return self.print_zulu(&mut wtr);
        }
        wtr.write_str(if offset.is_negative() { "-" } else { "+" })?;
        wtr.write_int(&FMT_TWO, offset.part_hours())?;
        wtr.write_str(":")?;
        wtr.write_int(&FMT_TWO, offset.part_minutes())?;
        if offset.part_seconds() != 0 {
            wtr.write_str(":")?;
            wtr.write_int(&FMT_TWO, offset.part_seconds())?;
        }
        Ok(())
    }

    /// Print a zoned datetime as its datetime and offset, followed by the
    /// time zone identifier in brackets when it has one.
    pub fn print_zoned<W: Write>(
        &self,
        zoned: &Zoned,
        mut wtr: W,
    ) -> Result<(), Error> {
        self.print_datetime(&zoned.datetime(), &mut wtr)?;
        self.print_offset(&zoned.offset(), &mut wtr)?;
        if let Some(id) = zoned.time_zone().id() {
            wtr.write_str("[")?;
            wtr.write_str(id)?;
            wtr.write_str("]")?;
        }
        Ok(())
    }

    /// Print a duration as hours, minutes and seconds, such as `PT1H30M`.
    ///
    /// Each printed component carries the sign of the duration. Days are
    /// never used, so every duration prints the same way regardless of
    /// time zones.
    pub fn print_duration<W: Write>(
        &self,
        duration: &Duration,
        mut wtr: W,
    ) -> Result<(), Error> {
        static FMT_INT: DecimalFormatter = DecimalFormatter::new();
        static FMT_FRACTION: DecimalFormatter =
            DecimalFormatter::new().fractional(9);

        self.print_designator(b'P', &mut wtr)?;
        self.print_designator(b'T', &mut wtr)?;
        if duration.is_zero() {
            wtr.write_str("0")?;
            return self.print_designator(b'S', &mut wtr);
        }

        let secs = duration.as_secs();
        let nanos = duration.subsec_nanos();
        // A negative duration with a fraction is printed as the whole
        // seconds closer to zero, then the remaining fraction.
        let effective = if secs < 0 && nanos > 0 { secs + 1 } else { secs };
        let hours = effective / t::SECONDS_PER_HOUR;
        let minutes =
            (effective % t::SECONDS_PER_HOUR) / t::SECONDS_PER_MINUTE;
        let seconds = effective % t::SECONDS_PER_MINUTE;
        if hours != 0 {
            wtr.write_int(&FMT_INT, hours)?;
            self.print_designator(b'H', &mut wtr)?;
        }
        if minutes != 0 {
            wtr.write_int(&FMT_INT, minutes)?;
            self.print_designator(b'M', &mut wtr)?;
        }
        if seconds == 0 && nanos == 0 {
            return Ok(());
        }
        if secs < 0 && nanos > 0 && seconds == 0 {
            wtr.write_str("-0")?;
        } else {
            wtr.write_int(&FMT_INT, seconds)?;
        }
        if nanos > 0 {
            let fraction = if secs < 0 {
                t::NANOS_PER_SECOND - i64::from(nanos)
            } else {
                i64::from(nanos)
            };
            wtr.write_str(".")?;
            wtr.write_int(&FMT_FRACTION, fraction)?;
        }
        self.print_designator(b'S', &mut wtr)
    }

    /// Print a period as years, months and days, such as `P1Y2M3D`.
    ///
    /// Zero components are omitted. The zero period is `P0D`.
    pub fn print_period<W: Write>(
        &self,
        period: &Period,
        mut wtr: W,
    ) -> Result<(), Error> {
        static FMT_INT: DecimalFormatter = DecimalFormatter::new();

        self.print_designator(b'P', &mut wtr)?;
        if period.is_zero() {
            wtr.write_str("0")?;
            return self.print_designator(b'D', &mut wtr);
        }
        for (value, designator) in [
            (period.years(), b'Y'),
            (period.months(), b'M'),
            (period.days(), b'D'),
        ] {
            if value != 0 {
                wtr.write_int(&FMT_INT, value)?;
                self.print_designator(designator, &mut wtr)?;
            }
        }
        Ok(())
    }

    fn print_time_with<W: Write>(
        &self,
        time: &Time,
        always_seconds: bool,
        mut wtr: W,
    ) -> Result<(), Error> {
        static FMT_TWO: DecimalFormatter = DecimalFormatter::new().padding(2);

        wtr.write_int(&FMT_TWO, time.hour())?;
        wtr.write_str(":")?;
        wtr.write_int(&FMT_TWO, time.minute())?;
        let nanos = time.subsec_nanosecond();
        if !always_seconds && time.second() == 0 && nanos == 0 {
            return Ok(());
        }
        wtr.write_str(":")?;
        wtr.write_int(&FMT_TWO, time.second())?;
        if nanos != 0 {
            let (fraction, width) = fraction_group(nanos);
            wtr.write_str(".")?;
            wtr.write_int(&DecimalFormatter::new().padding(width), fraction)?;
        }
        Ok(())
    }

    fn print_separator<W: Write>(&self, mut wtr: W) -> Result<(), Error> {
        let sep = if self.lowercase {
            self.separator.to_ascii_lowercase()
        } else {
            self.separator
        };
        wtr.write_char(char::from(sep))
    }

    /// Prints the "zulu" indicator for a zero offset.
    fn print_zulu<W: Write>(&self, mut wtr: W) -> Result<(), Error> {
        wtr.write_str(if self.lowercase { "z" } else { "Z" })
    }

    fn print_designator<W: Write>(
        &self,
        upper: u8,
        mut wtr: W,
    ) -> Result<(), Error> {
        let designator =
            if self.lowercase { upper.to_ascii_lowercase() } else { upper };
        wtr.write_char(char::from(designator))
    }
}

impl Default for DateTimePrinter {
    fn default() -> DateTimePrinter {
        DateTimePrinter::new()
    }
}
