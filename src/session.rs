//! Session: the one owner of everything that changes while tracing.
//!
//! Per frame, [`Session::step`] runs the core pipeline in order:
//! pointer → path accumulator → coverage → sequencer. The compositor and
//! the frame loop only ever read from it.

use std::time::{Duration, Instant};

use log::{info, warn};

use crate::alphabet::{ALPHABET, Symbol};
use crate::coverage;
use crate::error::Error;
use crate::sequencer::{Phase, Sequencer, Transition};
use crate::target::{Target, build_target};
use crate::trace::PathAccumulator;
use crate::types::{Bounds, Point};

/// Knobs of the core, derived from the command line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSettings {
    pub thickness: u32,   // stroke width in pixels, same for letter and trail
    pub threshold: f32,   // coverage that counts as "done"
    pub dwell: Duration,  // how long the caption stays up
    pub start_index: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            thickness: 75, // 2 cm at 96 DPI
            threshold: 0.9,
            dwell: Duration::from_secs(3),
            start_index: 0,
        }
    }
}

pub struct Session {
    bounds: Bounds,
    settings: SessionSettings,
    sequencer: Sequencer,
    target: Target,
    trail: PathAccumulator,
    progress: f32,
}

impl Session {
    pub fn new(width: usize, height: usize, settings: SessionSettings) -> Self {
        let sequencer =
            Sequencer::new(ALPHABET.len(), settings.start_index, settings.threshold, settings.dwell);
        let target = make_target(ALPHABET[sequencer.index()], width, height, settings.thickness);
        Self {
            bounds: Bounds { width, height },
            settings,
            sequencer,
            target,
            trail: PathAccumulator::new(width, height, settings.thickness),
            progress: 0.0,
        }
    }

    /// One frame of the core. `pointer` may lie outside the frame; it is
    /// clamped onto the nearest edge pixel first.
    pub fn step(&mut self, pointer: Option<Point>, now: Instant) -> Transition {
        let pointer = pointer.map(|p| self.bounds.clamp(p));
        self.accept(pointer);

        let transition = self.sequencer.update(self.progress, now);
        match transition {
            Transition::Completed => {
                info!(
                    "Completed '{}' at {:.0}% coverage",
                    self.symbol().letter,
                    self.progress * 100.0
                );
            }
            Transition::Advanced { index } => self.load_letter(index),
            Transition::None => {}
        }
        transition
    }

    /// Offer a point to the trail. Ignored entirely while celebrating.
    pub fn accept(&mut self, pointer: Option<Point>) -> bool {
        if self.sequencer.is_celebrating() {
            return false;
        }
        let accepted = self.trail.accept(pointer, self.bounds, &self.target.mask);
        if accepted && self.trail.points().len() >= 2 {
            self.progress = coverage::progress(&self.target.mask, self.trail.mask(), self.target.pixel_count());
        }
        accepted
    }

    fn load_letter(&mut self, index: usize) {
        self.trail.clear();
        self.progress = 0.0;
        self.target =
            make_target(ALPHABET[index], self.bounds.width, self.bounds.height, self.settings.thickness);
        info!("Next letter: '{}'", self.symbol().letter);
    }

    pub fn symbol(&self) -> Symbol {
        self.target.symbol
    }

    pub fn index(&self) -> usize {
        self.sequencer.index()
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn trail(&self) -> &PathAccumulator {
        &self.trail
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Caption to show, only while celebrating.
    pub fn caption(&self) -> Option<String> {
        match self.phase() {
            Phase::Celebrating { .. } => Some(self.symbol().caption()),
            Phase::Tracing => None,
        }
    }
}

fn make_target(symbol: Symbol, width: usize, height: usize, thickness: u32) -> Target {
    let target = build_target(symbol, width, height, thickness);
    if target.is_degenerate() {
        warn!("{}", Error::DegenerateTarget { letter: symbol.letter });
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(thickness: u32) -> SessionSettings {
        SessionSettings { thickness, ..SessionSettings::default() }
    }

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    /// Walk the pointer along every centre-line of the current letter.
    fn trace_current_letter(session: &mut Session, now: Instant) {
        let path: Vec<Point> = session.target().strokes().iter().flatten().copied().collect();
        for p in path {
            session.step(Some(p), now);
        }
    }

    #[test]
    fn full_trace_completes_then_advances() {
        let t0 = Instant::now();
        let mut s = Session::new(640, 480, SessionSettings::default());
        assert_eq!(s.index(), 0);

        trace_current_letter(&mut s, t0);
        assert!(s.progress() >= 0.9);
        assert_eq!(s.phase(), Phase::Celebrating { since: t0 });
        assert_eq!(s.caption().as_deref(), Some("Good job! Apple starts with A!"));

        assert_eq!(s.step(None, t0 + secs(2.9)), Transition::None);
        assert_eq!(s.step(None, t0 + secs(3.01)), Transition::Advanced { index: 1 });
        assert_eq!(s.symbol().letter, 'B');
        assert!(s.trail().points().is_empty());
        assert_eq!(s.trail().mask().count(), 0);
        assert_eq!(s.progress(), 0.0);
        assert_eq!(s.phase(), Phase::Tracing);
        assert_eq!(s.caption(), None);
    }

    #[test]
    fn tracing_every_stroke_reaches_full_coverage() {
        let mut s = Session::new(640, 480, SessionSettings { threshold: 1.0, ..settings(75) });
        trace_current_letter(&mut s, Instant::now());
        assert_eq!(s.progress(), 1.0);
        assert!(s.target().mask.is_subset_of(s.trail().mask()));
    }

    #[test]
    fn path_outside_target_never_progresses() {
        let t0 = Instant::now();
        let mut s = Session::new(640, 480, SessionSettings::default());
        let corners = [(10, 10), (630, 10), (630, 470), (10, 470)];
        for i in 0..200 {
            let (x, y) = corners[i % corners.len()];
            s.step(Some(Point::new(x, y)), t0 + secs(i as f32 * 0.1));
            assert_eq!(s.progress(), 0.0);
            assert_eq!(s.phase(), Phase::Tracing);
        }
        assert!(s.trail().points().is_empty());
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn progress_never_decreases_while_tracing() {
        let t0 = Instant::now();
        let mut s = Session::new(320, 240, SessionSettings { threshold: 1.0, ..settings(24) });
        let path: Vec<Point> = s.target().strokes().iter().flatten().copied().collect();
        let mut last = 0.0;
        for p in path {
            s.step(Some(p), t0);
            s.step(Some(Point::new(2, 2)), t0); // off-target noise
            s.step(None, t0);
            assert!(s.progress() >= last);
            last = s.progress();
        }
        assert!(last > 0.0);
    }

    #[test]
    fn input_is_ignored_while_celebrating() {
        let t0 = Instant::now();
        let mut s = Session::new(320, 240, settings(24));
        trace_current_letter(&mut s, t0);
        assert!(matches!(s.phase(), Phase::Celebrating { .. }));

        let points = s.trail().points().to_vec();
        let mask = s.trail().mask().clone();
        let progress = s.progress();

        let on_target = s.target().strokes()[0][0];
        for i in 0..10 {
            assert!(!s.accept(Some(on_target)));
            s.step(Some(Point::new(on_target.x + i, on_target.y)), t0 + secs(0.1));
        }
        assert_eq!(s.trail().points(), points.as_slice());
        assert_eq!(s.trail().mask(), &mask);
        assert_eq!(s.progress(), progress);
    }

    #[test]
    fn pointer_outside_frame_is_clamped_not_propagated() {
        let mut s = Session::new(320, 240, settings(24));
        // Clamped onto (0, 0) / (319, 239): off the letter, silently ignored.
        assert_eq!(s.step(Some(Point::new(-500, -500)), Instant::now()), Transition::None);
        assert_eq!(s.step(Some(Point::new(5000, 5000)), Instant::now()), Transition::None);
        assert!(s.trail().points().is_empty());
    }

    #[test]
    fn whole_alphabet_cycles_back_to_start() {
        let mut now = Instant::now();
        let mut s = Session::new(160, 120, settings(10));
        for round in 1..=ALPHABET.len() {
            trace_current_letter(&mut s, now);
            assert!(matches!(s.phase(), Phase::Celebrating { .. }), "stuck on {}", s.symbol().letter);
            now += secs(3.5);
            s.step(None, now);
            assert_eq!(s.index(), round % ALPHABET.len());
        }
        assert_eq!(s.index(), 0);
        assert_eq!(s.symbol().letter, 'A');
    }

    #[test]
    fn starts_from_configured_letter() {
        let s = Session::new(160, 120, SessionSettings { start_index: 25, ..settings(10) });
        assert_eq!(s.symbol().letter, 'Z');
    }
}
