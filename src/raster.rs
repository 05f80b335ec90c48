// Thick strokes for masks and template layers.
// A stroke segment is a "capsule": every pixel whose centre lies within
// `thickness / 2` of the segment. Round caps mean a polyline drawn one
// segment at a time is identical to the same polyline drawn in one go.

use crate::types::{BitMask, FrameBuffer, Point};

/// Call `f(x, y)` for every in-bounds pixel covered by the capsule (a, b).
fn for_each_capsule_pixel(
    width: usize,
    height: usize,
    a: Point,
    b: Point,
    thickness: u32,
    mut f: impl FnMut(usize, usize),
) {
    if thickness == 0 || width == 0 || height == 0 {
        return;
    }
    let r = thickness as f64 / 2.0;
    let r2 = r * r;
    let pad = r.ceil() as i32;

    // Scan just the bounding box of the capsule, clipped to the grid.
    let x0 = a.x.min(b.x).saturating_sub(pad).max(0);
    let y0 = a.y.min(b.y).saturating_sub(pad).max(0);
    let x1 = a.x.max(b.x).saturating_add(pad).min(width as i32 - 1);
    let y1 = a.y.max(b.y).saturating_add(pad).min(height as i32 - 1);
    if x0 > x1 || y0 > y1 {
        return;
    }

    // Same pixels whichever way the segment was drawn.
    let (a, b) = if (a.x, a.y) <= (b.x, b.y) { (a, b) } else { (b, a) };
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (dx, dy) = (b.x as f64 - ax, b.y as f64 - ay);
    let len2 = dx * dx + dy * dy;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let (px, py) = (x as f64 - ax, y as f64 - ay);
            // Project onto the segment, clamp to its ends.
            let t = if len2 > 0.0 { ((px * dx + py * dy) / len2).clamp(0.0, 1.0) } else { 0.0 };
            let (ex, ey) = (px - t * dx, py - t * dy);
            if ex * ex + ey * ey <= r2 {
                f(x as usize, y as usize);
            }
        }
    }
}

/// Set the capsule (a, b) in `mask`. Returns how many pixels flipped on.
pub fn stamp_segment(mask: &mut BitMask, a: Point, b: Point, thickness: u32) -> usize {
    let (w, h) = (mask.width, mask.height);
    let bits = &mut mask.bits;
    let mut added = 0;
    for_each_capsule_pixel(w, h, a, b, thickness, |x, y| {
        let bit = &mut bits[y * w + x];
        if !*bit {
            *bit = true;
            added += 1;
        }
    });
    added
}

/// Stamp every consecutive pair of `points`. A single point draws nothing.
pub fn stamp_polyline(mask: &mut BitMask, points: &[Point], thickness: u32) {
    for pair in points.windows(2) {
        stamp_segment(mask, pair[0], pair[1], thickness);
    }
}

/// Paint the capsule (a, b) in a solid colour.
/// Visual: a thick round-ended line appears on the frame.
pub fn paint_segment(fb: &mut FrameBuffer, a: Point, b: Point, thickness: u32, color: u32) {
    let w = fb.width;
    let pixels = &mut fb.pixels;
    for_each_capsule_pixel(w, fb.height, a, b, thickness, |x, y| {
        pixels[y * w + x] = color;
    });
}
