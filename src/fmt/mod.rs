/*!
Formatting and parsing of values in this crate.

The only supported text format is the fixed ISO 8601 grammar implemented in
the [`temporal`] module. Every type that can be formatted or parsed also
implements `Display` and `FromStr` in terms of that module, so most callers
never need to use it directly.

# The `Write` trait

Printers in this crate write into an implementation of [`Write`] instead of
[`core::fmt::Write`]. This lets printing report a crate [`Error`]. It is
implemented for `String` and `Vec<u8>`, and adapters are provided for
[`core::fmt::Write`] ([`FmtWrite`]) and, when the `std` feature is enabled,
`std::io::Write` ([`StdWrite`]).
*/

use alloc::{string::String, vec::Vec};

use crate::{error::Error, util::escape};

use self::util::{Decimal, DecimalFormatter};

pub mod temporal;
pub(crate) mod util;

/// The result of parsing a value out of a slice of bytes.
///
/// This contains the parsed value and the offset into the input at which
/// parsing stopped.
#[derive(Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub(crate) struct Parsed<'i, V> {
    /// The value parsed.
    pub(crate) value: V,
    /// The remaining unparsed input.
    pub(crate) input: &'i [u8],
}

impl<'i, V: core::fmt::Debug> core::fmt::Debug for Parsed<'i, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Parsed")
            .field("value", &self.value)
            .field("input", &escape::Bytes(self.input))
            .finish()
    }
}

/// A trait for printing values in this crate.
///
/// This trait is a minimal version of [`core::fmt::Write`] whose errors are
/// crate [`Error`] values.
pub trait Write {
    /// Write the given string to this writer, returning whether the write
    /// succeeded or not.
    fn write_str(&mut self, string: &str) -> Result<(), Error>;

    /// Write the given character to this writer, returning whether the write
    /// succeeded or not.
    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        self.write_str(char.encode_utf8(&mut [0; 4]))
    }
}

impl Write for String {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.push_str(string);
        Ok(())
    }
}

impl Write for Vec<u8> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.extend_from_slice(string.as_bytes());
        Ok(())
    }
}

impl<W: Write> Write for &mut W {
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        (**self).write_str(string)
    }

    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        (**self).write_char(char)
    }
}

/// An adapter for using `std::io::Write` implementations with [`Write`].
///
/// # Example
///
/// ```
/// use calendrical::{civil::date, fmt::{temporal::DateTimePrinter, StdWrite}};
///
/// let mut buf = vec![];
/// DateTimePrinter::new().print_date(&date(2024, 6, 15), StdWrite(&mut buf))?;
/// assert_eq!(buf, b"2024-06-15");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct StdWrite<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> Write for StdWrite<W> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.0.write_all(string.as_bytes()).map_err(|err| {
            Error::from_args(format_args!("failed to write output: {err}"))
        })
    }
}

/// An adapter for using `core::fmt::Write` implementations with [`Write`].
///
/// This is what the `Display` impls in this crate use.
#[derive(Clone, Debug)]
pub struct FmtWrite<W>(pub W);

impl<W: core::fmt::Write> Write for FmtWrite<W> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.0
            .write_str(string)
            .map_err(|_| crate::error::fmt::Error::StdFmtWriteAdapter.into())
    }
}

/// An extension trait to `Write` that provides crate specific helpers.
pub(crate) trait WriteExt: Write {
    /// Write the given number as a decimal using ASCII digits to this buffer.
    /// The given formatter controls how the decimal is formatted.
    #[inline]
    fn write_int(
        &mut self,
        formatter: &DecimalFormatter,
        n: impl Into<i64>,
    ) -> Result<(), Error> {
        self.write_decimal(&formatter.format(n.into()))
    }

    /// Write the given decimal number to this buffer.
    #[inline]
    fn write_decimal(&mut self, decimal: &Decimal) -> Result<(), Error> {
        self.write_str(decimal.as_str())
    }
}

impl<W: Write> WriteExt for W {}
