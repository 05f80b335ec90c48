// Coverage: how much of the letter the trail has painted, 0.0..=1.0.

use crate::types::BitMask;

/// `|target AND path| / |target|`, or 0 for an empty target.
/// `target_total` is `target.count()`, cached by the caller since the target
/// never changes while a letter is up. Path pixels outside the target never count.
pub fn progress(target: &BitMask, path: &BitMask, target_total: usize) -> f32 {
    if target_total == 0 {
        return 0.0;
    }
    let hit = target.count_and(path);
    (hit as f32 / target_total as f32).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::stamp_segment;
    use crate::types::Point;

    #[test]
    fn empty_target_is_zero() {
        let target = BitMask::new(10, 10);
        let path = BitMask { width: 10, height: 10, bits: vec![true; 100] };
        assert_eq!(progress(&target, &path, target.count()), 0.0);
    }

    #[test]
    fn superset_path_is_exactly_one() {
        let mut target = BitMask::new(64, 64);
        stamp_segment(&mut target, Point::new(10, 10), Point::new(50, 40), 8);
        let mut path = target.clone();
        stamp_segment(&mut path, Point::new(0, 60), Point::new(63, 60), 6); // over-draw
        assert_eq!(progress(&target, &path, target.count()), 1.0);
    }

    #[test]
    fn partial_overlap_is_a_fraction() {
        let mut target = BitMask::new(4, 1);
        target.bits = vec![true, true, true, true];
        let mut path = BitMask::new(4, 1);
        path.bits = vec![true, false, false, false];
        assert_eq!(progress(&target, &path, target.count()), 0.25);
    }

    #[test]
    fn disjoint_path_is_zero() {
        let mut target = BitMask::new(50, 50);
        stamp_segment(&mut target, Point::new(5, 5), Point::new(5, 40), 4);
        let mut path = BitMask::new(50, 50);
        stamp_segment(&mut path, Point::new(40, 5), Point::new(40, 40), 4);
        assert_eq!(progress(&target, &path, target.count()), 0.0);
    }

    #[test]
    fn always_within_unit_range() {
        let mut target = BitMask::new(30, 30);
        stamp_segment(&mut target, Point::new(0, 15), Point::new(29, 15), 6);
        let mut path = BitMask::new(30, 30);
        for i in 0..30 {
            stamp_segment(&mut path, Point::new(i, 0), Point::new(29 - i, 29), 3);
            let p = progress(&target, &path, target.count());
            assert!((0.0..=1.0).contains(&p));
        }
    }
}
