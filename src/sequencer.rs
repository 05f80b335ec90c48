// Completion debouncer + letter sequencer.
// Tracing --(progress >= threshold)--> Celebrating --(dwell elapsed)--> Tracing (next letter)

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// Collecting trail points for the current letter.
    Tracing,
    /// Letter done; caption on screen, input ignored until the dwell passes.
    Celebrating { since: Instant },
}

/// What a call to [`Sequencer::update`] changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    None,
    /// Threshold crossed this frame.
    Completed,
    /// Dwell over; now on letter `index`.
    Advanced { index: usize },
}

pub struct Sequencer {
    index: usize,
    len: usize,
    phase: Phase,
    threshold: f32,
    dwell: Duration,
}

impl Sequencer {
    pub fn new(len: usize, start: usize, threshold: f32, dwell: Duration) -> Self {
        let len = len.max(1);
        Self { index: start % len, len, phase: Phase::Tracing, threshold, dwell }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_celebrating(&self) -> bool {
        matches!(self.phase, Phase::Celebrating { .. })
    }

    /// Feed this frame's progress. While celebrating, `progress` is not looked at.
    pub fn update(&mut self, progress: f32, now: Instant) -> Transition {
        match self.phase {
            Phase::Tracing => {
                if progress >= self.threshold {
                    self.phase = Phase::Celebrating { since: now };
                    Transition::Completed
                } else {
                    Transition::None
                }
            }
            Phase::Celebrating { since } => {
                if now.saturating_duration_since(since) > self.dwell {
                    self.index = (self.index + 1) % self.len;
                    self.phase = Phase::Tracing;
                    Transition::Advanced { index: self.index }
                } else {
                    Transition::None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    #[test]
    fn completes_once_then_holds() {
        let t0 = Instant::now();
        let mut seq = Sequencer::new(26, 0, 0.9, secs(3.0));

        assert_eq!(seq.update(0.5, t0), Transition::None);
        assert_eq!(seq.update(0.9, t0), Transition::Completed);
        assert_eq!(seq.phase(), Phase::Celebrating { since: t0 });

        // Progress drops or stays high: nothing re-fires during the dwell.
        assert_eq!(seq.update(1.0, t0 + secs(1.0)), Transition::None);
        assert_eq!(seq.update(0.0, t0 + secs(2.0)), Transition::None);
        assert_eq!(seq.update(1.0, t0 + secs(3.0)), Transition::None);
        assert!(seq.is_celebrating());
        assert_eq!(seq.index(), 0);
    }

    #[test]
    fn advances_after_dwell() {
        let t0 = Instant::now();
        let mut seq = Sequencer::new(26, 0, 0.9, secs(3.0));
        seq.update(0.95, t0);
        assert_eq!(seq.update(0.0, t0 + secs(3.1)), Transition::Advanced { index: 1 });
        assert_eq!(seq.phase(), Phase::Tracing);
    }

    #[test]
    fn below_threshold_never_completes() {
        let t0 = Instant::now();
        let mut seq = Sequencer::new(26, 0, 0.9, secs(3.0));
        for i in 0..100 {
            assert_eq!(seq.update(0.89, t0 + secs(i as f32)), Transition::None);
        }
        assert_eq!(seq.phase(), Phase::Tracing);
    }

    #[test]
    fn wraps_after_full_cycle() {
        let mut now = Instant::now();
        let mut seq = Sequencer::new(26, 0, 0.9, secs(3.0));
        for round in 1..=26 {
            assert_eq!(seq.update(1.0, now), Transition::Completed);
            now += secs(3.5);
            assert_eq!(seq.update(0.0, now), Transition::Advanced { index: round % 26 });
        }
        assert_eq!(seq.index(), 0);
    }

    #[test]
    fn start_index_wraps_into_range() {
        let seq = Sequencer::new(26, 27, 0.9, secs(3.0));
        assert_eq!(seq.index(), 1);
    }
}
