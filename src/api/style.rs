use num_derive::{FromPrimitive, ToPrimitive};

/// On/off state of a single LED in the frame buffer mirror.
///
/// Polarity convention: `On` is a lit LED and is stored as a `1` bit. The
/// panel's active-low electrical behavior is confined to the scan driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelColor {
    Off,
    On,
}

impl From<bool> for PixelColor {
    fn from(lit: bool) -> Self { if lit { PixelColor::On } else { PixelColor::Off } }
}

impl From<PixelColor> for bool {
    fn from(c: PixelColor) -> bool { c == PixelColor::On }
}

/// Per-pixel compositing rule applied when drawing a shape's ink bit `s`
/// onto the existing destination bit `d`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum DrawMode {
    /// d = s
    Normal = 0,
    /// d = !s
    Inverse = 1,
    /// d = d ^ s
    Toggle = 2,
    /// d = d | s
    Or = 3,
    /// d = !(d | s)
    Nor = 4,
}

impl DrawMode {
    pub fn composite(&self, dest: bool, ink: bool) -> bool {
        match self {
            DrawMode::Normal => ink,
            DrawMode::Inverse => !ink,
            DrawMode::Toggle => dest ^ ink,
            DrawMode::Or => dest | ink,
            DrawMode::Nor => !(dest | ink),
        }
    }
}

/// Deterministic whole-panel fills used for hardware bring-up. Each selector
/// reproduces the same bitmap bit-for-bit every time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum TestPattern {
    /// Checkerboard with (0,0) lit
    Checkerboard = 0,
    /// Checkerboard with (0,0) dark
    InverseCheckerboard = 1,
    /// Even rows lit
    RowStripes = 2,
    /// Even columns lit
    ColumnStripes = 3,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Coordinate outside the panel bounds.
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    #[test]
    fn test_mode_wire_constants() {
        // callers drive these from byte-sized wire constants
        assert_eq!(DrawMode::from_u8(0), Some(DrawMode::Normal));
        assert_eq!(DrawMode::from_u8(3), Some(DrawMode::Or));
        assert_eq!(DrawMode::from_u8(5), None);
        assert_eq!(TestPattern::from_u8(2), Some(TestPattern::RowStripes));
    }

    #[test]
    fn test_composite_truth_table() {
        for &d in &[false, true] {
            for &s in &[false, true] {
                assert_eq!(DrawMode::Normal.composite(d, s), s);
                assert_eq!(DrawMode::Inverse.composite(d, s), !s);
                assert_eq!(DrawMode::Toggle.composite(d, s), d ^ s);
                assert_eq!(DrawMode::Or.composite(d, s), d | s);
                assert_eq!(DrawMode::Nor.composite(d, s), !(d | s));
            }
        }
    }
}
