// Path accumulator: the fingertip trail for the current letter.
// Visual: every accepted point extends the red stroke drawn over the letter.

use crate::raster::stamp_segment;
#[cfg(test)]
use crate::raster::stamp_polyline;
use crate::types::{BitMask, Bounds, Point};

pub struct PathAccumulator {
    points: Vec<Point>, // accepted points, oldest first
    mask: BitMask,      // union of thick segments between consecutive points
    thickness: u32,
}

impl PathAccumulator {
    pub fn new(width: usize, height: usize, thickness: u32) -> Self {
        Self { points: Vec::new(), mask: BitMask::new(width, height), thickness }
    }

    /// Record `pointer` if it is present, inside `bounds` and on the target.
    /// Rejected points leave no trace; the next accepted point joins the last
    /// accepted one.
    pub fn accept(&mut self, pointer: Option<Point>, bounds: Bounds, target: &BitMask) -> bool {
        let Some(p) = pointer else { return false };
        if !bounds.contains(p) || !target.get(p) {
            return false;
        }

        // Only the newest segment needs drawing; earlier ones are already in.
        if let Some(&prev) = self.points.last() {
            stamp_segment(&mut self.mask, prev, p, self.thickness);
        }
        self.points.push(p);
        true
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn mask(&self) -> &BitMask {
        &self.mask
    }

    /// Forget the trail (new letter).
    pub fn clear(&mut self) {
        self.points.clear();
        self.mask.clear();
    }
}

/// Full recompute of a path mask from its points. The incremental mask kept by
/// [`PathAccumulator`] must always equal this.
#[cfg(test)]
pub fn rasterize_path(points: &[Point], thickness: u32, width: usize, height: usize) -> BitMask {
    let mut mask = BitMask::new(width, height);
    stamp_polyline(&mut mask, points, thickness);
    mask
}
