use calendrical::{
    civil::{date, Date},
    Duration, Instant, Period, Unit,
};

use crate::Result;

#[test]
fn instant_from_negative_nano_adjustment() -> Result {
    let instant = Instant::from_epoch_second(2, -1)?;
    assert_eq!(instant.as_second(), 1);
    assert_eq!(instant.subsec_nanosecond(), 999_999_999);
    Ok(())
}

#[test]
fn add_year_to_leap_day_clamps() -> Result {
    assert_eq!(date(2008, 2, 29).checked_add_years(1)?, date(2009, 2, 28));
    assert_eq!(date(2008, 2, 29).checked_add_years(4)?, date(2012, 2, 29));
    assert_eq!(date(2024, 1, 31).checked_add_months(1)?, date(2024, 2, 29));
    assert_eq!(date(2023, 1, 31).checked_add_months(1)?, date(2023, 2, 28));
    Ok(())
}

#[test]
fn period_between_month_boundaries() -> Result {
    let p = Period::between(date(2010, 1, 1), date(2010, 2, 28))?;
    assert_eq!((p.years(), p.months(), p.days()), (0, 1, 27));

    let p = Period::between(date(2010, 1, 31), date(2010, 3, 1))?;
    assert_eq!((p.years(), p.months(), p.days()), (0, 1, 1));

    let p = Period::between(date(2008, 2, 29), date(2012, 2, 28))?;
    assert_eq!((p.years(), p.months(), p.days()), (3, 11, 30));
    Ok(())
}

#[test]
fn period_is_applied_years_then_months_then_days() -> Result {
    let d = date(2008, 1, 29);
    assert_eq!(d.checked_add(Period::new(1, 1, 0))?, date(2009, 2, 28));
    assert_eq!(d.checked_add(Period::new(0, 1, 1))?, date(2008, 3, 1));
    assert_eq!(
        date(2009, 2, 28).checked_sub(Period::new(1, 1, 0))?,
        date(2008, 1, 28),
    );
    Ok(())
}

#[test]
fn epoch_days_round_trip() -> Result {
    let mut epoch_day = Date::MIN.to_epoch_day();
    let max = Date::MAX.to_epoch_day();
    while epoch_day <= max {
        let d = Date::from_epoch_day(epoch_day)?;
        assert_eq!(d.to_epoch_day(), epoch_day);
        assert_eq!(Date::new(d.year(), d.month(), d.day())?, d);
        epoch_day += 1_234_567;
    }
    assert_eq!(date(1970, 1, 1).to_epoch_day(), 0);
    assert_eq!(date(1969, 12, 31).to_epoch_day(), -1);
    assert_eq!(date(2000, 3, 1).to_epoch_day(), 11_017);
    Ok(())
}

#[test]
fn leap_years() -> Result {
    for year in [-400, -4, 0, 4, 1996, 2000, 2024, 2400] {
        assert!(date(year, 1, 1).in_leap_year(), "{year}");
        assert_eq!(Date::new(year, 2, 1)?.days_in_month(), 29);
    }
    for year in [-100, -1, 1, 1900, 2023, 2100] {
        assert!(!date(year, 1, 1).in_leap_year(), "{year}");
        assert!(Date::new(year, 2, 29).unwrap_err().is_range());
    }
    Ok(())
}

#[test]
fn days_and_months_are_invertible() -> Result {
    let d = date(2021, 5, 17);
    for n in [-100_000, -367, -31, -1, 0, 1, 29, 365, 1_000_000] {
        assert_eq!(d.checked_add_days(n)?.checked_add_days(-n)?, d);
    }
    for n in [-1_200, -13, -1, 0, 1, 11, 1_200] {
        assert_eq!(d.checked_add_months(n)?.checked_add_months(-n)?, d);
    }
    Ok(())
}

#[test]
fn datetime_carries_into_date() -> Result {
    let dt = date(2024, 12, 31).at(23, 59, 59, 999_999_999);
    assert_eq!(dt.checked_add_nanoseconds(1)?, date(2025, 1, 1).at(0, 0, 0, 0));
    assert_eq!(
        dt.checked_add_unit(-48, Unit::Hour)?,
        date(2024, 12, 29).at(23, 59, 59, 999_999_999),
    );
    assert_eq!(
        dt.checked_add_duration(Duration::from_millis(-1))?,
        date(2024, 12, 31).at(23, 59, 59, 998_999_999),
    );
    Ok(())
}

#[test]
fn overflow_and_range_errors_are_distinct() {
    let err = Instant::MAX.checked_add_seconds(i64::MAX).unwrap_err();
    assert!(err.is_arithmetic_overflow());
    assert!(!err.is_range());

    let err = Instant::MAX.checked_add_seconds(1).unwrap_err();
    assert!(err.is_range());
    assert!(!err.is_arithmetic_overflow());

    let err = Date::MAX.checked_add_days(1).unwrap_err();
    assert!(err.is_range());

    let err = Duration::MAX.checked_add(Duration::from_nanos(1)).unwrap_err();
    assert!(err.is_arithmetic_overflow());
}

#[test]
fn duration_normalizes_nanos() -> Result {
    let d = Duration::new(0, -1)?;
    assert_eq!((d.as_secs(), d.subsec_nanos()), (-1, 999_999_999));
    let d = Duration::new(1, 2_500_000_000)?;
    assert_eq!((d.as_secs(), d.subsec_nanos()), (3, 500_000_000));
    Ok(())
}
