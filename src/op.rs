use crate::api::{DrawMode, PixelColor, Point, TestPattern};
use crate::fb::{FrameBuffer, HEIGHT, WIDTH};

/// Composite one ink bit onto the buffer. Out-of-range coordinates are a
/// silent no-op: shapes routinely hang off the panel edges and are clipped
/// here, pixel by pixel.
pub fn draw_pixel(fb: &mut FrameBuffer, p: Point, mode: DrawMode, ink: bool) {
    let dest = match fb.get(p) {
        Ok(c) => bool::from(c),
        Err(_) => return,
    };
    // in bounds was just proven by the get, so the set cannot fail
    let _ = fb.set(p, PixelColor::from(mode.composite(dest, ink)));
}

/// Draw a line from `start` to `end`, integer Bresenham over all 8 octants.
/// Endpoints are interchangeable: A to B lights the same pixels as B to A.
/// Each pixel on the line is visited exactly once per call.
pub fn line(fb: &mut FrameBuffer, start: Point, end: Point, mode: DrawMode) {
    // rasterize from a canonical endpoint so the pixel set is independent of
    // the order the caller named the endpoints in
    let (a, b) = if (start.y, start.x) <= (end.y, end.x) { (start, end) } else { (end, start) };

    let mut x0 = a.x;
    let mut y0 = a.y;
    let x1 = b.x;
    let y1 = b.y;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -((y1 - y0).abs());
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy; /* error value e_xy */
    loop {
        draw_pixel(fb, Point::new(x0, y0), mode, true);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            /* e_xy+e_x > 0 */
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            /* e_xy+e_y < 0 */
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw a circle outline of `radius` around `center`, midpoint algorithm
/// with 8-way symmetric plotting.
///
/// Degenerate radii: 0 draws the single center pixel, negative is a no-op.
pub fn circle(fb: &mut FrameBuffer, center: Point, radius: isize, mode: DrawMode) {
    if radius < 0 {
        log::warn!("negative circle radius {}", radius);
        return;
    }
    if radius == 0 {
        draw_pixel(fb, center, mode, true);
        return;
    }
    let mut x = 0;
    let mut y = radius;
    let mut p = (5 - radius * 4) / 4;
    circle_points(fb, center, x, y, mode);
    while x < y {
        x += 1;
        if p < 0 {
            p += 2 * x + 1;
        } else {
            y -= 1;
            p += 2 * (x - y) + 1;
        }
        circle_points(fb, center, x, y, mode);
    }
}

/// Plot the up-to-8 reflections of one octant point. The axis and diagonal
/// cases are special-cased so no pixel is plotted twice, which keeps toggle
/// draws an involution.
fn circle_points(fb: &mut FrameBuffer, c: Point, x: isize, y: isize, mode: DrawMode) {
    if x == 0 {
        draw_pixel(fb, Point::new(c.x, c.y + y), mode, true);
        draw_pixel(fb, Point::new(c.x, c.y - y), mode, true);
        draw_pixel(fb, Point::new(c.x + y, c.y), mode, true);
        draw_pixel(fb, Point::new(c.x - y, c.y), mode, true);
    } else if x == y {
        draw_pixel(fb, Point::new(c.x + x, c.y + y), mode, true);
        draw_pixel(fb, Point::new(c.x - x, c.y + y), mode, true);
        draw_pixel(fb, Point::new(c.x + x, c.y - y), mode, true);
        draw_pixel(fb, Point::new(c.x - x, c.y - y), mode, true);
    } else if x < y {
        draw_pixel(fb, Point::new(c.x + x, c.y + y), mode, true);
        draw_pixel(fb, Point::new(c.x - x, c.y + y), mode, true);
        draw_pixel(fb, Point::new(c.x + x, c.y - y), mode, true);
        draw_pixel(fb, Point::new(c.x - x, c.y - y), mode, true);
        draw_pixel(fb, Point::new(c.x + y, c.y + x), mode, true);
        draw_pixel(fb, Point::new(c.x - y, c.y + x), mode, true);
        draw_pixel(fb, Point::new(c.x + y, c.y - x), mode, true);
        draw_pixel(fb, Point::new(c.x - y, c.y - x), mode, true);
    }
}

/// Order two corner points into (top-left, bottom-right).
fn normalize(a: Point, b: Point) -> (Point, Point) {
    let tl = Point::new(a.x.min(b.x), a.y.min(b.y));
    let br = Point::new(a.x.max(b.x), a.y.max(b.y));
    (tl, br)
}

/// Draw the single-pixel outline of the rectangle spanned by two opposite
/// corners, in either order.
pub fn rectangle(fb: &mut FrameBuffer, a: Point, b: Point, mode: DrawMode) {
    let (tl, br) = normalize(a, b);
    line(fb, Point::new(tl.x, tl.y), Point::new(br.x, tl.y), mode);
    line(fb, Point::new(br.x, tl.y), Point::new(br.x, br.y), mode);
    line(fb, Point::new(br.x, br.y), Point::new(tl.x, br.y), mode);
    line(fb, Point::new(tl.x, br.y), Point::new(tl.x, tl.y), mode);
}

/// Composite every pixel of the rectangle spanned by two opposite corners,
/// borders included.
pub fn filled_rectangle(fb: &mut FrameBuffer, a: Point, b: Point, mode: DrawMode) {
    let (tl, br) = normalize(a, b);
    for y in tl.y..=br.y {
        for x in tl.x..=br.x {
            draw_pixel(fb, Point::new(x, y), mode, true);
        }
    }
}

/// Overwrite the whole buffer with one of the bring-up test patterns.
pub fn test_pattern(fb: &mut FrameBuffer, pattern: TestPattern) {
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let lit = match pattern {
                TestPattern::Checkerboard => (x + y) & 1 == 0,
                TestPattern::InverseCheckerboard => (x + y) & 1 == 1,
                TestPattern::RowStripes => y & 1 == 0,
                TestPattern::ColumnStripes => x & 1 == 0,
            };
            let _ = fb.set(Point::new(x, y), PixelColor::from(lit));
        }
    }
}

/// Clear the panel mirror. `normal == true` blanks the panel (all LEDs off);
/// `false` lights every LED, for inverted drawing conventions.
pub fn clear(fb: &mut FrameBuffer, normal: bool) {
    fb.fill(if normal { PixelColor::Off } else { PixelColor::On });
}
