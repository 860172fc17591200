use crate::api::{DrawMode, Point};
use crate::fb::FrameBuffer;
use crate::fonts::GlyphSet;
use crate::op::draw_pixel;

/// Blit the glyph for `code` with its cell's top left corner at `p`.
///
/// Every cell bit, lit or not, goes through [`draw_pixel`], so the mode
/// semantics apply to text exactly as they do to shapes: `Normal` stamps the
/// cell including its dark background, `Or` overlays only the lit strokes,
/// `Inverse` stamps the cell reversed out, and so on. Cells hanging off the
/// panel clip pixel by pixel; caller is responsible for advance/wrap.
pub fn draw_char(fb: &mut FrameBuffer, p: Point, code: u8, mode: DrawMode, font: &GlyphSet) {
    let cols = match font.glyph(code) {
        Some(g) => g,
        None => {
            log::warn!("no glyph for code {:#04x}", code);
            return;
        }
    };
    let col_bytes = (font.height + 7) / 8;
    for col in 0..font.width {
        for row in 0..font.height {
            let ink = cols[col * col_bytes + (row >> 3)] >> (row & 7) & 1 != 0;
            draw_pixel(fb, Point::new(p.x + col as isize, p.y + row as isize), mode, ink);
        }
    }
}
