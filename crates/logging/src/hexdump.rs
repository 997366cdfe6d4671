//! crates/logging/src/hexdump.rs
//! Grouped hexadecimal rendering of octet buffers.

use std::fmt::Write as _;

/// Number of `0xhh` tokens rendered on each line.
pub const HEX_VALUES_PER_LINE: usize = 16;

/// Width of one rendered token plus its separator (`0xhh `).
const TOKEN_WIDTH: usize = 5;

/// Appends the hexadecimal body for `bytes` to `out`.
///
/// Bytes are rendered in buffer order as lower-case `0xhh` tokens separated by
/// single spaces, [`HEX_VALUES_PER_LINE`] per line. Every line, including a
/// final partial one, ends with `\n`. An empty buffer appends nothing.
///
/// # Examples
///
/// ```
/// let mut out = String::new();
/// logging::render_octets(&[0x00, 0x0a, 0xff], &mut out);
/// assert_eq!(out, "0x00 0x0a 0xff\n");
/// ```
pub fn render_octets(bytes: &[u8], out: &mut String) {
    out.reserve(bytes.len() * TOKEN_WIDTH);
    for line in bytes.chunks(HEX_VALUES_PER_LINE) {
        for (index, byte) in line.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "0x{byte:02x}");
        }
        out.push('\n');
    }
}
