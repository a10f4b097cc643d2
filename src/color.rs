//! RGBA colors and their textual form at the drawing-surface boundary.

use std::fmt;

/// Format `value` as a `#`-prefixed lowercase hexadecimal string of exactly
/// `digits` characters: left-padded with zeros when short, keeping only the
/// last `digits` characters when long.
///
/// Colors travel to drawing surfaces as text in this form; the binary also
/// uses it to name artifacts after their seed.
pub fn to_hex(value: u64, digits: usize) -> String {
    let hex = format!("{value:x}");
    let start = hex.len().saturating_sub(digits);
    format!("#{:0>digits$}", &hex[start..])
}

/// A 32-bit color, 8 bits per channel, laid out as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x0000_00FF);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    /// The `#rrggbbaa` form exchanged with drawing surfaces.
    pub fn to_hex(self) -> String {
        to_hex(u64::from(self.0), 8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
