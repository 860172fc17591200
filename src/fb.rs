use crate::api::{Error, PixelColor, Point};

/// Panel bounds. (0,0) is the top left corner; increasing Y moves downward,
/// increasing X moves right.
pub const WIDTH: isize = 32;
pub const HEIGHT: isize = 16;
pub const BITS_PER_PIXEL: usize = 1;
pub const ROW_BYTES: usize = WIDTH as usize * BITS_PER_PIXEL / 8;
pub const FB_SIZE: usize = ROW_BYTES * HEIGHT as usize; // 64 bytes

/// Mirror of the panel pixels in RAM, ready to be clocked out by the scan
/// driver. One bit per pixel, row-major, MSB first within each byte, so
/// byte 0 bit 7 is the top left pixel.
///
/// This is the strict layer: accessors fail with [`Error::OutOfRange`] for
/// any coordinate off the panel. The drawing ops in [`crate::op`] are the
/// tolerant layer and clip silently instead.
pub struct FrameBuffer {
    ram: [u8; FB_SIZE],
}

impl FrameBuffer {
    /// An all-dark buffer. `const` so the mirror can live in a `static`.
    pub const fn new() -> Self { FrameBuffer { ram: [0; FB_SIZE] } }

    fn locate(p: Point) -> Result<(usize, u8), Error> {
        if p.x < 0 || p.y < 0 || p.x >= WIDTH || p.y >= HEIGHT {
            return Err(Error::OutOfRange);
        }
        let index = p.y as usize * ROW_BYTES + (p.x as usize >> 3);
        let mask = 0x80 >> (p.x as usize & 7);
        Ok((index, mask))
    }

    pub fn get(&self, p: Point) -> Result<PixelColor, Error> {
        let (index, mask) = Self::locate(p)?;
        Ok(PixelColor::from(self.ram[index] & mask != 0))
    }

    /// Flips exactly one bit; no other pixel is touched.
    pub fn set(&mut self, p: Point, color: PixelColor) -> Result<(), Error> {
        let (index, mask) = Self::locate(p)?;
        match color {
            PixelColor::On => self.ram[index] |= mask,
            PixelColor::Off => self.ram[index] &= !mask,
        }
        Ok(())
    }

    /// Sets every pixel to `color` in one pass.
    pub fn fill(&mut self, color: PixelColor) {
        let fill = match color {
            PixelColor::On => 0xff,
            PixelColor::Off => 0x00,
        };
        self.ram = [fill; FB_SIZE];
    }

    /// One packed byte of a row; `col` indexes the 4 byte columns. Used by
    /// the scan driver, which only ever derives indices from panel bounds.
    pub fn byte(&self, row: usize, col: usize) -> u8 { self.ram[row * ROW_BYTES + col] }

    /// The raw mirror, for golden-output comparisons.
    pub fn as_bytes(&self) -> &[u8; FB_SIZE] { &self.ram }
}

impl Default for FrameBuffer {
    fn default() -> Self { Self::new() }
}
