use calendrical::{
    civil::{date, Date, DateTime, Time},
    fmt::temporal::{DateTimeParser, DateTimePrinter},
    tz::{Offset, TimeZoneDatabase},
    Duration, Instant, Period, Zoned,
};

use crate::{paris_rules, Result};

fn database() -> TimeZoneDatabase {
    let mut db = TimeZoneDatabase::new();
    db.add("Europe/Paris", Offset::constant(1)).unwrap();
    db
}

#[test]
fn instant_with_nanoseconds() -> Result {
    let instant = Instant::from_epoch_second(65, 567)?;
    assert_eq!(instant.to_string(), "1970-01-01T00:01:05.000000567Z");
    assert_eq!("1970-01-01T00:01:05.000000567Z".parse::<Instant>()?, instant);
    assert_eq!(Instant::EPOCH.to_string(), "1970-01-01T00:00:00Z");
    Ok(())
}

#[test]
fn canonical_forms_round_trip() -> Result {
    fn check<T>(text: &str) -> Result
    where
        T: core::str::FromStr<Err = calendrical::Error> + ToString,
    {
        assert_eq!(text.parse::<T>()?.to_string(), text);
        Ok(())
    }

    check::<Date>("2024-02-29")?;
    check::<Date>("-0001-12-31")?;
    check::<Date>("+10000-01-01")?;
    check::<Date>("-999999999-01-01")?;
    check::<Time>("00:00")?;
    check::<Time>("23:59:59.999999999")?;
    check::<Time>("10:15:30.000001")?;
    check::<DateTime>("2008-06-30T11:30:59.100")?;
    check::<Offset>("Z")?;
    check::<Offset>("-05:30")?;
    check::<Offset>("+01:02:03")?;
    check::<Instant>("2008-06-30T09:30:59Z")?;
    check::<Zoned>("2008-06-30T11:30:59+02:00")?;
    check::<Duration>("PT0S")?;
    check::<Duration>("PT1H30M")?;
    check::<Duration>("PT-0.5S")?;
    check::<Duration>("PT-1M-0.75S")?;
    check::<Period>("P0D")?;
    check::<Period>("P1Y2M3D")?;
    check::<Period>("P-1M")?;
    Ok(())
}

#[test]
fn zoned_with_named_time_zone() -> Result {
    let mut db = TimeZoneDatabase::new();
    db.add("Europe/Paris", paris_rules())?;
    let text = "2008-06-30T11:30:59.000000999+02:00[Europe/Paris]";
    let zdt = DateTimeParser::new().parse_zoned_with(&db, text)?;
    assert_eq!(zdt.datetime(), date(2008, 6, 30).at(11, 30, 59, 999));
    assert_eq!(zdt.offset(), Offset::constant(2));
    assert_eq!(zdt.to_string(), text);
    Ok(())
}

#[test]
fn zoned_offset_in_text_fixes_the_instant() -> Result {
    let db = database();
    let parser = DateTimeParser::new();
    let zdt = parser.parse_zoned_with(&db, "2008-06-30T11:30+05:00[Europe/Paris]")?;
    assert_eq!(zdt.to_instant().to_string(), "2008-06-30T06:30:00Z");
    assert_eq!(zdt.to_string(), "2008-06-30T07:30+01:00[Europe/Paris]");

    let mut db = TimeZoneDatabase::new();
    db.add("Europe/Paris", paris_rules())?;
    let zdt = parser.parse_zoned_with(&db, "2008-06-30T11:30+05:00[Europe/Paris]")?;
    assert_eq!(zdt.to_instant().to_string(), "2008-06-30T06:30:00Z");
    assert_eq!(zdt.to_string(), "2008-06-30T08:30+02:00[Europe/Paris]");

    // Offsets that agree with the zone still pick a side of an overlap, and
    // an offset from before a gap moves the civil time past it.
    let zdt = parser.parse_zoned_with(&db, "2008-10-26T02:30+01:00[Europe/Paris]")?;
    assert_eq!(zdt.to_string(), "2008-10-26T02:30+01:00[Europe/Paris]");
    let zdt = parser.parse_zoned_with(&db, "2008-10-26T02:30+02:00[Europe/Paris]")?;
    assert_eq!(zdt.to_string(), "2008-10-26T02:30+02:00[Europe/Paris]");
    let zdt = parser.parse_zoned_with(&db, "2008-03-30T02:30+01:00[Europe/Paris]")?;
    assert_eq!(zdt.to_string(), "2008-03-30T03:30+02:00[Europe/Paris]");
    Ok(())
}

#[test]
fn parse_errors_report_positions() {
    let err = "2024-13-01".parse::<Date>().unwrap_err();
    assert!(err.is_parse());
    assert!(err.is_range());
    assert_eq!(err.parse_position(), Some(5));

    let err = "2024-02-30".parse::<Date>().unwrap_err();
    assert!(err.is_range());
    assert_eq!(err.parse_position(), Some(8));

    let err = "12:3".parse::<Time>().unwrap_err();
    assert_eq!(err.parse_position(), Some(3));

    let err = "2024-01-01T00:00".parse::<Instant>().unwrap_err();
    assert_eq!(err.parse_position(), Some(16));

    let err = "P1Y".parse::<Duration>().unwrap_err();
    assert!(err.is_parse());
    assert_eq!(err.parse_position(), Some(2));

    let err = "PT-2562047788015215H-30M-9S".parse::<Duration>().unwrap_err();
    assert!(err.is_parse());
    assert!(err.is_arithmetic_overflow());

    let err = DateTimeParser::new()
        .parse_zoned_with(&database(), "2008-06-30T11:30+02:00[Europe/Rome]")
        .unwrap_err();
    assert_eq!(err.parse_position(), Some(23));
    assert!(!err.is_range());
}

#[test]
fn printer_options() -> Result {
    let printer = DateTimePrinter::new().lowercase(true).separator(b' ');
    let mut buf = String::new();
    printer.print_datetime(&date(2024, 6, 19).at(7, 0, 0, 0), &mut buf)?;
    buf.push('|');
    printer.print_instant(&Instant::EPOCH, &mut buf)?;
    buf.push('|');
    printer.print_period(&Period::new(1, 0, 2), &mut buf)?;
    assert_eq!(buf, "2024-06-19 07:00|1970-01-01 00:00:00z|p1y2d");
    Ok(())
}
