use calendrical::{
    civil::date,
    tz::{LocalOffsets, Offset, TimeZone},
    Duration, Instant, Period, Unit, Zoned,
};

use crate::{paris, Result};

#[test]
fn paris_spring_forward_gap() -> Result {
    let dt = date(2008, 3, 30).at(2, 30, 0, 0);
    let LocalOffsets::Gap(transition) = paris().to_local_offsets(dt) else {
        panic!("expected a gap at {dt}");
    };
    assert_eq!(transition.offset_before(), Offset::constant(1));
    assert_eq!(transition.offset_after(), Offset::constant(2));
    assert_eq!(transition.duration(), Duration::from_secs(3_600));

    let zdt = Zoned::new(dt, paris())?;
    assert_eq!(zdt.datetime(), date(2008, 3, 30).at(3, 30, 0, 0));
    assert_eq!(zdt.offset(), Offset::constant(2));
    assert_eq!(zdt.to_string(), "2008-03-30T03:30+02:00[Europe/Paris]");

    let err = Zoned::strict(dt, Offset::constant(1), paris()).unwrap_err();
    assert!(err.is_zone_resolution());
    Ok(())
}

#[test]
fn paris_fall_back_overlap() -> Result {
    let dt = date(2008, 10, 26).at(2, 30, 0, 0);
    let zdt = Zoned::new(dt, paris())?;
    assert_eq!(zdt.offset(), Offset::constant(2));

    let earlier = zdt.with_earlier_offset_at_overlap();
    assert_eq!(earlier.offset(), Offset::constant(2));
    assert_eq!(earlier.datetime(), dt);

    let later = zdt.with_later_offset_at_overlap();
    assert_eq!(later.offset(), Offset::constant(1));
    assert_eq!(later.datetime(), dt);
    assert_eq!(
        later.to_instant().as_second() - earlier.to_instant().as_second(),
        3_600,
    );

    assert_eq!(Zoned::strict(dt, Offset::constant(1), paris())?, later);
    let err = Zoned::strict(dt, Offset::constant(3), paris()).unwrap_err();
    assert!(err.is_zone_resolution());
    Ok(())
}

#[test]
fn overlap_selection_outside_overlap_is_unchanged() -> Result {
    let zdt = Zoned::new(date(2008, 6, 30).at(11, 30, 0, 0), paris())?;
    assert_eq!(zdt.with_earlier_offset_at_overlap(), zdt);
    assert_eq!(zdt.with_later_offset_at_overlap(), zdt);
    Ok(())
}

#[test]
fn from_instant_is_unambiguous() -> Result {
    let end_of_summer = Instant::from_epoch_second(1_224_982_800, 0)?;
    let zdt = Zoned::from_instant(end_of_summer, paris())?;
    assert_eq!(zdt.datetime(), date(2008, 10, 26).at(2, 0, 0, 0));
    assert_eq!(zdt.offset(), Offset::constant(1));

    let just_before = end_of_summer.checked_sub(Duration::from_nanos(1))?;
    let zdt = Zoned::from_instant(just_before, paris())?;
    assert_eq!(zdt.datetime(), date(2008, 10, 26).at(2, 59, 59, 999_999_999));
    assert_eq!(zdt.offset(), Offset::constant(2));
    Ok(())
}

#[test]
fn changing_zones() -> Result {
    let zdt = Zoned::new(date(2008, 10, 26).at(2, 30, 0, 0), paris())?
        .with_later_offset_at_overlap();

    let utc = zdt.with_zone_same_instant(TimeZone::UTC)?;
    assert_eq!(utc.datetime(), date(2008, 10, 26).at(1, 30, 0, 0));
    assert_eq!(utc.to_instant(), zdt.to_instant());

    // The later offset survives because it's still valid.
    let same_local = zdt.with_zone_same_local(paris())?;
    assert_eq!(same_local, zdt);

    let fixed = zdt.with_zone_same_local(TimeZone::fixed(Offset::constant(-5)))?;
    assert_eq!(fixed.datetime(), zdt.datetime());
    assert_eq!(fixed.offset(), Offset::constant(-5));

    let fixed = zdt.with_fixed_offset_zone();
    assert_eq!(fixed.to_string(), "2008-10-26T02:30+01:00");
    Ok(())
}

#[test]
fn arithmetic_across_transitions() -> Result {
    // Exact durations follow the instant time-line.
    let zdt = Zoned::new(date(2008, 3, 30).at(1, 30, 0, 0), paris())?;
    let next = zdt.checked_add_duration(Duration::from_secs(3_600))?;
    assert_eq!(next.to_string(), "2008-03-30T03:30+02:00[Europe/Paris]");
    assert_eq!(
        zdt.checked_add_unit(1, Unit::Hour)?.to_string(),
        "2008-03-30T03:30+02:00[Europe/Paris]",
    );

    // Calendar periods follow the local time-line and are then resolved.
    let zdt = Zoned::new(date(2008, 3, 29).at(2, 30, 0, 0), paris())?;
    let next = zdt.checked_add(Period::from_days(1))?;
    assert_eq!(next.to_string(), "2008-03-30T03:30+02:00[Europe/Paris]");
    assert_eq!(zdt.duration_until(&next), Duration::from_secs(86_400));

    let zdt = Zoned::new(date(2008, 10, 25).at(2, 30, 0, 0), paris())?;
    let next = zdt.checked_add_unit(1, Unit::Day)?;
    assert_eq!(next.to_string(), "2008-10-26T02:30+02:00[Europe/Paris]");
    assert_eq!(zdt.duration_until(&next), Duration::from_secs(86_400));
    Ok(())
}
