/// A simple formatter for converting `i64` values to ASCII byte strings.
///
/// This avoids going through the `core::fmt` machinery for the small fixed
/// width integers that make up ISO 8601 text.
///
/// By default, this only includes the sign if it's negative. To always include
/// the sign, use `force_sign`.
#[derive(Clone, Debug)]
pub(crate) struct DecimalFormatter {
    force_sign: bool,
    padding: u8,
    fractional: bool,
}

impl DecimalFormatter {
    /// Creates a new decimal formatter using the default configuration.
    pub(crate) const fn new() -> DecimalFormatter {
        DecimalFormatter { force_sign: false, padding: 0, fractional: false }
    }

    /// Format the given value using this configuration as a decimal ASCII
    /// number.
    pub(crate) const fn format(&self, value: i64) -> Decimal {
        Decimal::new(self, value)
    }

    /// Forces a `+` sign to be rendered for non-negative values.
    pub(crate) const fn force_sign(self, yes: bool) -> DecimalFormatter {
        DecimalFormatter { force_sign: yes, ..self }
    }

    /// The minimum number of digits that this number should be formatted with.
    /// If the number would have fewer digits than this, then it is padded out
    /// with zeros until the minimum is reached.
    ///
    /// The padding is capped at the maximum number of digits for an `i64`
    /// value (which is 19).
    pub(crate) const fn padding(self, mut digits: u8) -> DecimalFormatter {
        if digits > Decimal::MAX_I64_DIGITS {
            digits = Decimal::MAX_I64_DIGITS;
        }
        DecimalFormatter { padding: digits, ..self }
    }

    /// Formats the number as the digits to the right of a decimal point.
    ///
    /// This implies `padding(precision)`, but also strips all trailing zeros.
    pub(crate) const fn fractional(self, precision: u8) -> DecimalFormatter {
        DecimalFormatter { fractional: true, ..self.padding(precision) }
    }
}

/// A formatted decimal number that can be converted to a sequence of bytes.
#[derive(Debug)]
pub(crate) struct Decimal {
    buf: [u8; Self::MAX_I64_LEN as usize],
    start: u8,
    end: u8,
}

impl Decimal {
    /// Discovered via `i64::MIN.to_string().len()`.
    const MAX_I64_LEN: u8 = 20;
    /// Discovered via `i64::MAX.to_string().len()`.
    const MAX_I64_DIGITS: u8 = 19;

    /// Using the given formatter, turn the value given into a decimal
    /// representation using ASCII bytes.
    pub(crate) const fn new(
        formatter: &DecimalFormatter,
        value: i64,
    ) -> Decimal {
        let mut decimal = Decimal {
            buf: [0; Self::MAX_I64_LEN as usize],
            start: Self::MAX_I64_LEN,
            end: Self::MAX_I64_LEN,
        };
        // Working with the unsigned absolute value sidesteps the asymmetry
        // of `i64::MIN`.
        let mut abs = value.unsigned_abs();
        loop {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'0' + (abs % 10) as u8;
            abs /= 10;
            if abs == 0 {
                break;
            }
        }
        while decimal.digits() < formatter.padding {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'0';
        }
        if value < 0 {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'-';
        } else if formatter.force_sign {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'+';
        }
        if formatter.fractional {
            while decimal.end > decimal.start
                && decimal.buf[decimal.end as usize - 1] == b'0'
            {
                decimal.end -= 1;
            }
        }
        decimal
    }

    /// Returns the number of ASCII bytes written so far, not counting any
    /// stripped trailing zeros.
    const fn digits(&self) -> u8 {
        self.end - self.start
    }

    /// Returns the ASCII representation of this decimal as a byte slice.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[usize::from(self.start)..usize::from(self.end)]
    }

    /// Returns the ASCII representation of this decimal as a string slice.
    pub(crate) fn as_str(&self) -> &str {
        // Every byte written is ASCII, so this never fails.
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}

/// Returns the given fractional nanoseconds scaled down to the narrowest
/// of 3, 6 or 9 digits that loses no precision, along with that width.
///
/// Callers must only use this for non-zero nanoseconds.
pub(crate) fn fraction_group(nanos: i32) -> (i64, u8) {
    let nanos = i64::from(nanos);
    if nanos % 1_000_000 == 0 {
        (nanos / 1_000_000, 3)
    } else if nanos % 1_000 == 0 {
        (nanos / 1_000, 6)
    } else {
        (nanos, 9)
    }
}

/// Splits the given input into two slices at the given position.
///
/// If the position is greater than the length of the slice given, then this
/// returns `None`.
#[inline]
pub(crate) fn split(input: &[u8], at: usize) -> Option<(&[u8], &[u8])> {
    if at > input.len() {
        None
    } else {
        Some(input.split_at(at))
    }
}

/// Returns the number of leading ASCII digits in the given input.
#[inline]
pub(crate) fn count_digits(input: &[u8]) -> usize {
    input.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parses a non-negative integer from a slice consisting only of ASCII
/// digits.
///
/// This returns `None` if the slice is empty, contains a non-digit or the
/// value overflows an `i64`.
#[inline]
pub(crate) fn parse_digits(digits: &[u8]) -> Option<i64> {
    if digits.is_empty() {
        return None;
    }
    let mut n: i64 = 0;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            return None;
        }
        n = n.checked_mul(10)?.checked_add(i64::from(byte - b'0'))?;
    }
    Some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal() {
        let x = DecimalFormatter::new().format(i64::MIN);
        assert_eq!(x.as_str(), "-9223372036854775808");

        let x = DecimalFormatter::new().format(i64::MAX);
        assert_eq!(x.as_str(), "9223372036854775807");

        let x = DecimalFormatter::new().force_sign(true).format(0);
        assert_eq!(x.as_str(), "+0");

        let x = DecimalFormatter::new().padding(4).format(-1);
        assert_eq!(x.as_str(), "-0001");

        let x = DecimalFormatter::new().force_sign(true).format(12_345);
        assert_eq!(x.as_str(), "+12345");

        let x = DecimalFormatter::new().fractional(9).format(500_000_000);
        assert_eq!(x.as_str(), "5");

        let x = DecimalFormatter::new().fractional(9).format(567);
        assert_eq!(x.as_str(), "000000567");
    }

    #[test]
    fn fraction_groups() {
        assert_eq!(fraction_group(500_000_000), (500, 3));
        assert_eq!(fraction_group(500_100_000), (500_100, 6));
        assert_eq!(fraction_group(567), (567, 9));
    }

    #[test]
    fn digits() {
        assert_eq!(count_digits(b"2024-"), 4);
        assert_eq!(parse_digits(b"0042"), Some(42));
        assert_eq!(parse_digits(b"4a"), None);
        assert_eq!(parse_digits(b""), None);
        assert_eq!(parse_digits(b"99999999999999999999"), None);
    }
}
