//! Scan-line polygon fill.
//!
//! Fill rule: even-odd at integer scanlines with a half-open vertical edge
//! rule (an edge spans `min_y <= y < max_y`, horizontal edges contribute no
//! crossings), then an inclusive Bresenham stroke of every closing edge so
//! boundary pixels count as inside. Even-odd and nonzero winding diverge
//! only on self-intersecting traces; even-odd is the rule here. The output
//! is a pure function of the vertex sequence and dimensions.

use poselab_api_core::{Dimensions, Mask, Point2};

use crate::boundary::PolygonBoundary;
use crate::error::SilhouetteError;

/// Fewest vertices that can form a polygon.
pub const MIN_VERTICES: usize = 3;

/// Close the boundary (last vertex back to the first) and fill it into a
/// fresh all-false mask of the given extent. Vertices may lie off the
/// canvas; out-of-range pixels are clipped. The source image is never
/// involved, let alone mutated.
pub fn rasterize(boundary: &PolygonBoundary, dims: Dimensions) -> Result<Mask, SilhouetteError> {
    let verts = boundary.vertices();
    if verts.len() < MIN_VERTICES {
        return Err(SilhouetteError::InsufficientVertices { got: verts.len() });
    }

    let mut mask = Mask::new(dims);
    if dims.area() == 0 {
        return Ok(mask);
    }
    fill_interior(verts, &mut mask);
    stroke_outline(verts, &mut mask);
    Ok(mask)
}

fn closed_edges(verts: &[Point2]) -> impl Iterator<Item = (Point2, Point2)> + '_ {
    (0..verts.len()).map(move |i| (verts[i], verts[(i + 1) % verts.len()]))
}

fn fill_interior(verts: &[Point2], mask: &mut Mask) {
    let y_min = verts.iter().map(|p| p.y).min().expect("at least 3 vertices");
    let y_max = verts.iter().map(|p| p.y).max().expect("at least 3 vertices");
    let y_lo = i64::from(y_min).max(0);
    let y_hi = i64::from(y_max).min(i64::from(mask.height()) - 1);

    let mut crossings: Vec<f64> = Vec::new();
    for y in y_lo..=y_hi {
        crossings.clear();
        for (a, b) in closed_edges(verts) {
            if a.y == b.y {
                continue;
            }
            let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
            if y < i64::from(lo.y) || y >= i64::from(hi.y) {
                continue;
            }
            let t = (y - i64::from(lo.y)) as f64 / f64::from(hi.y - lo.y);
            crossings.push(f64::from(lo.x) + t * f64::from(hi.x - lo.x));
        }
        crossings.sort_by(f64::total_cmp);

        // Crossing count is even under the half-open rule; fill each
        // in/out pair.
        for span in crossings.chunks_exact(2) {
            let x_lo = (span[0].ceil() as i64).max(0);
            let x_hi = (span[1].floor() as i64).min(i64::from(mask.width()) - 1);
            for x in x_lo..=x_hi {
                mask.set(x as u32, y as u32, true);
            }
        }
    }
}

fn stroke_outline(verts: &[Point2], mask: &mut Mask) {
    for (a, b) in closed_edges(verts) {
        draw_line(mask, a, b);
    }
}

fn draw_line(mask: &mut Mask, a: Point2, b: Point2) {
    let (mut x, mut y) = (i64::from(a.x), i64::from(a.y));
    let (x1, y1) = (i64::from(b.x), i64::from(b.y));
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if x >= 0 && y >= 0 && x < i64::from(mask.width()) && y < i64::from(mask.height()) {
            mask.set(x as u32, y as u32, true);
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
