//! Graphics rendering functions
//!
//! Debug markings drawn onto a [`PixMut`]:
//! - Lines (Bresenham, 8-connected)
//! - Rectangle outlines
//!
//! Points that fall outside the image are clipped silently.

use super::PixMut;
use crate::bounds::Bounds;

/// Generate the points of a line using Bresenham's integer algorithm.
///
/// The line connects `(x1, y1)` to `(x2, y2)` inclusive with
/// 8-connectivity.
pub fn generate_line_pts(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
    if x1 == x2 && y1 == y2 {
        return vec![(x1, y1)];
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 > x1 { 1i32 } else { -1 };
    let sy = if y2 > y1 { 1i32 } else { -1 };

    let npts = dx.max(dy) + 1;
    let mut pts = Vec::with_capacity(npts as usize);

    let mut x = x1;
    let mut y = y1;

    if dx >= dy {
        // Step along x (more horizontal)
        let mut err = dx / 2;
        for _ in 0..npts {
            pts.push((x, y));
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
        }
    } else {
        // Step along y (more vertical)
        let mut err = dy / 2;
        for _ in 0..npts {
            pts.push((x, y));
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
        }
    }

    pts
}

/// Generate the outline points of a half-open rectangle.
///
/// Covers the top row, the last row (`bottom - 1`), the left column and
/// the last column (`right - 1`). An empty rectangle has no outline.
pub fn generate_box_outline_pts(b: &Bounds) -> Vec<(i32, i32)> {
    if b.is_empty() {
        return Vec::new();
    }
    let (l, r, t, bt) = (b.left as i32, b.right as i32, b.top as i32, b.bottom as i32);
    let mut pts = Vec::with_capacity(2 * (b.width() + b.height()) as usize);
    for x in l..r {
        pts.push((x, t));
        pts.push((x, bt - 1));
    }
    for y in t..bt {
        pts.push((l, y));
        pts.push((r - 1, y));
    }
    pts
}

impl PixMut {
    /// Write `val` at each point, skipping points outside the image.
    pub fn render_pts(&mut self, pts: &[(i32, i32)], val: u8) {
        let w = self.width() as i32;
        let h = self.height() as i32;
        for &(x, y) in pts {
            if x < 0 || x >= w || y < 0 || y >= h {
                continue;
            }
            self.set_pixel_unchecked(x as u32, y as u32, val);
        }
    }

    /// Render a line from (x1, y1) to (x2, y2).
    pub fn render_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, val: u8) {
        let pts = generate_line_pts(x1, y1, x2, y2);
        self.render_pts(&pts, val);
    }

    /// Render the outline of a half-open rectangle.
    pub fn render_box_outline(&mut self, b: &Bounds, val: u8) {
        let pts = generate_box_outline_pts(b);
        self.render_pts(&pts, val);
    }
}
