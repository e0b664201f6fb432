mod calendar;
mod text;
mod zoned;

/// A type alias we use for tests so that `?` works in test bodies.
type Result = std::result::Result<(), calendrical::Error>;

/// Returns the rules for Europe/Paris in 2008, the year used throughout these
/// tests.
///
/// Summer time began at 2008-03-30T01:00Z and ended at 2008-10-26T01:00Z.
fn paris_rules() -> calendrical::tz::TransitionRules {
    use calendrical::tz::{Offset, TransitionRules};

    TransitionRules::new(
        Offset::constant(1),
        [
            (1_206_838_800, Offset::constant(2)),
            (1_224_982_800, Offset::constant(1)),
        ],
    )
    .unwrap()
}

fn paris() -> calendrical::tz::TimeZone {
    calendrical::tz::TimeZone::new("Europe/Paris", paris_rules()).unwrap()
}
