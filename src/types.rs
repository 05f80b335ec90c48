// Core types shared by the tracing pipeline.

#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A frame filled with one colour.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }
}

/// Integer pixel position in frame coordinates (x to the right, y down).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The frame rectangle `[0, width) x [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: usize,
    pub height: usize,
}

impl Bounds {
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Pull a point onto the nearest pixel inside the frame.
    pub fn clamp(&self, p: Point) -> Point {
        let max_x = self.width.saturating_sub(1) as i32;
        let max_y = self.height.saturating_sub(1) as i32;
        Point::new(p.x.clamp(0, max_x), p.y.clamp(0, max_y))
    }
}

/// Binary occupancy grid, same size as the frame.
/// Visual: unseen directly; target and path masks decide what gets tinted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitMask {
    pub width: usize,
    pub height: usize,
    pub bits: Vec<bool>, // length = width * height, row-major
}

impl BitMask {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, bits: vec![false; width * height] }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds { width: self.width, height: self.height }
    }

    /// False for anything outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> bool {
        self.bounds().contains(p) && self.bits[p.y as usize * self.width + p.x as usize]
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Number of pixels set in both masks.
    pub fn count_and(&self, other: &BitMask) -> usize {
        self.bits.iter().zip(&other.bits).filter(|(a, b)| **a && **b).count()
    }

    /// True when every pixel set here is also set in `other`.
    #[cfg(test)]
    pub fn is_subset_of(&self, other: &BitMask) -> bool {
        self.bits.iter().zip(&other.bits).all(|(a, b)| !*a || *b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_contain_and_clamp() {
        let b = Bounds { width: 4, height: 3 };
        assert!(b.contains(Point::new(0, 0)));
        assert!(b.contains(Point::new(3, 2)));
        assert!(!b.contains(Point::new(4, 0)));
        assert!(!b.contains(Point::new(0, -1)));
        assert_eq!(b.clamp(Point::new(-5, 9)), Point::new(0, 2));
        assert_eq!(b.clamp(Point::new(2, 1)), Point::new(2, 1));
    }

    #[test]
    fn mask_counts_and_intersections() {
        let mut a = BitMask::new(3, 2);
        let mut b = BitMask::new(3, 2);
        a.bits[0] = true;
        a.bits[4] = true;
        b.bits[4] = true;
        b.bits[5] = true;

        assert_eq!(a.count(), 2);
        assert_eq!(a.count_and(&b), 1);
        assert!(a.get(Point::new(1, 1)));
        assert!(!a.get(Point::new(7, 7)));
        assert!(!a.is_subset_of(&b));

        a.clear();
        assert_eq!(a.count(), 0);
        assert!(a.is_subset_of(&b));
    }
}
