//! Fixed-cell bitmap fonts for the glyph blitter.
//!
//! Glyph data is stored column-major: each glyph is `width` columns of
//! `ceil(height / 8)` bytes, LSB of the first column byte is the top left
//! pixel of the cell. Cell geometry is a property of the table, not of the
//! blitter, so narrow and wide sets share one code path.
//!
//! The sets shipped here cover `'0'..=':'` in both geometries, enough for
//! clock and counter displays; anything richer is supplied by the caller.

/// A read-only lookup from character code to fixed-size glyph bitmap.
pub struct GlyphSet {
    /// Cell width in pixels
    pub width: usize,
    /// Cell height in pixels
    pub height: usize,
    /// First character code covered by `data`
    pub first: u8,
    /// Column-major glyph bitmaps, contiguous from `first` upward
    pub data: &'static [u8],
}

impl GlyphSet {
    pub const fn bytes_per_glyph(&self) -> usize { self.width * ((self.height + 7) / 8) }

    pub fn glyph_count(&self) -> usize { self.data.len() / self.bytes_per_glyph() }

    /// The column bytes for `code`, or `None` if the set does not cover it.
    pub fn glyph(&self, code: u8) -> Option<&'static [u8]> {
        if code < self.first {
            return None;
        }
        let n = self.bytes_per_glyph();
        let start = (code - self.first) as usize * n;
        if start + n > self.data.len() {
            return None;
        }
        Some(&self.data[start..start + n])
    }
}

/// Narrow 5x7 digits and colon, the classic terminal font shapes.
pub const DIGITS_5X7: GlyphSet = GlyphSet {
    width: 5,
    height: 7,
    first: b'0',
    data: &[
        0x3e, 0x51, 0x49, 0x45, 0x3e, // 0
        0x00, 0x42, 0x7f, 0x40, 0x00, // 1
        0x42, 0x61, 0x51, 0x49, 0x46, // 2
        0x21, 0x41, 0x45, 0x4b, 0x31, // 3
        0x18, 0x14, 0x12, 0x7f, 0x10, // 4
        0x27, 0x45, 0x45, 0x45, 0x39, // 5
        0x3c, 0x4a, 0x49, 0x49, 0x30, // 6
        0x01, 0x71, 0x09, 0x05, 0x03, // 7
        0x36, 0x49, 0x49, 0x49, 0x36, // 8
        0x06, 0x49, 0x49, 0x29, 0x1e, // 9
        0x00, 0x36, 0x36, 0x00, 0x00, // :
    ],
};

/// Wide 6x16 digits and colon, sized so four digits and a centre colon fill
/// the panel as a clock face.
pub const DIGITS_6X16: GlyphSet = GlyphSet {
    width: 6,
    height: 16,
    first: b'0',
    data: &[
        0xfe, 0x3f, 0xff, 0x7f, 0x01, 0x40, 0x01, 0x40, 0xff, 0x7f, 0xfe, 0x3f, // 0
        0x04, 0x40, 0x06, 0x40, 0xff, 0x7f, 0xff, 0x7f, 0x00, 0x40, 0x00, 0x40, // 1
        0x06, 0x7e, 0x07, 0x7f, 0x81, 0x41, 0xc1, 0x40, 0x7f, 0x40, 0x3e, 0x40, // 2
        0x06, 0x38, 0x07, 0x78, 0x41, 0x40, 0x41, 0x40, 0xff, 0x7f, 0xbe, 0x3f, // 3
        0xf0, 0x00, 0xf8, 0x00, 0x8c, 0x00, 0x86, 0x00, 0xff, 0x7f, 0xff, 0x7f, // 4
        0x7f, 0x30, 0x7f, 0x70, 0x21, 0x40, 0x21, 0x40, 0xe1, 0x7f, 0xc1, 0x3f, // 5
        0xfe, 0x3f, 0xff, 0x7f, 0x21, 0x40, 0x21, 0x40, 0xe3, 0x7f, 0xc2, 0x3f, // 6
        0x01, 0x70, 0x01, 0x7e, 0xc1, 0x0f, 0xf1, 0x01, 0x3f, 0x00, 0x0f, 0x00, // 7
        0xbe, 0x3f, 0xff, 0x7f, 0x41, 0x40, 0x41, 0x40, 0xff, 0x7f, 0xbe, 0x3f, // 8
        0x7e, 0x20, 0xff, 0x60, 0x81, 0x40, 0x81, 0x40, 0xff, 0x7f, 0xfe, 0x3f, // 9
        0x00, 0x00, 0x00, 0x00, 0x18, 0x0c, 0x18, 0x0c, 0x00, 0x00, 0x00, 0x00, // :
    ],
};
