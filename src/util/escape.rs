/*!
Provides convenience routines for escaping raw bytes in error messages.
*/

/// Provides a convenient `Debug` implementation for a `u8`.
///
/// The `Debug` impl treats the byte as ASCII and emits a human readable
/// representation of it. If the byte isn't printable ASCII, then it's emitted
/// as a hex escape sequence.
#[derive(Clone, Copy)]
pub(crate) struct Byte(pub(crate) u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.0 {
            b' ' => f.write_str(" "),
            b'\\' => f.write_str(r"\\"),
            b'"' => f.write_str("\\\""),
            b if b.is_ascii_graphic() => {
                core::fmt::Display::fmt(&char::from(b), f)
            }
            b => write!(f, r"\x{b:02X}"),
        }
    }
}

impl core::fmt::Debug for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

/// Provides a convenient `Display` implementation for `&[u8]`.
///
/// Valid UTF-8 is emitted with control characters escaped. Invalid bytes are
/// emitted as hex escape sequences.
pub(crate) struct Bytes<'a>(pub(crate) &'a [u8]);

impl<'a> core::fmt::Display for Bytes<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut bytes = self.0;
        loop {
            let (valid, invalid) = match core::str::from_utf8(bytes) {
                Ok(valid) => (valid, &[][..]),
                Err(err) => {
                    let (valid, rest) = bytes.split_at(err.valid_up_to());
                    let len = err.error_len().unwrap_or(rest.len());
                    bytes = &rest[len..];
                    (
                        core::str::from_utf8(valid).unwrap_or_default(),
                        &rest[..len],
                    )
                }
            };
            write_escaped_str(f, valid)?;
            if invalid.is_empty() {
                return Ok(());
            }
            for &byte in invalid {
                write!(f, r"\x{byte:02X}")?;
            }
        }
    }
}

fn write_escaped_str(
    f: &mut core::fmt::Formatter,
    s: &str,
) -> core::fmt::Result {
    for ch in s.chars() {
        if ch.is_control() {
            write!(f, "{}", ch.escape_default())?;
        } else {
            write!(f, "{ch}")?;
        }
    }
    Ok(())
}

impl<'a> core::fmt::Debug for Bytes<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
