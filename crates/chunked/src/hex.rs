//! ASCII hexadecimal digit helpers used while reading chunk-size lines.

/// Returns true if `b` is an ASCII hex digit (`0-9`, `a-f`, `A-F`).
#[inline]
pub fn is_hex(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Converts an ASCII hex digit into its nibble value.
///
/// The result is only meaningful when [`is_hex`] holds for `b`; any other
/// byte maps to a value greater than 15.
#[inline]
pub fn unhex(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => u8::MAX,
    }
}
