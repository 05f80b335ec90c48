// The frame loop: acquire → pointer → session → compose → present, until quit.
// Single-threaded; the only timer is the session's celebration dwell, which is
// polled against the Instant taken at the top of each iteration.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::compose::Compositor;
use crate::error::Error;
use crate::io::{FrameSink, FrameSource, PointerSource, QuitSignal};
use crate::sequencer::Transition;
use crate::session::Session;
use crate::types::FrameBuffer;

/// How the loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunStats {
    pub frames: u64,           // frames presented
    pub skipped: u64,          // iterations with no usable frame
    pub letters_completed: u32,
}

/// Run until `window` asks to quit, or until `max_missed` frames in a row are missing.
pub fn run<F, W>(
    frames: &mut F,
    window: &mut W,
    session: &mut Session,
    max_missed: u32,
) -> Result<RunStats, Error>
where
    F: FrameSource,
    W: PointerSource + FrameSink + QuitSignal,
{
    let compositor = Compositor::new();
    let b = session.bounds();
    let mut screen = FrameBuffer::filled(b.width, b.height, 0);
    let mut stats = RunStats { frames: 0, skipped: 0, letters_completed: 0 };
    let mut missed_in_a_row = 0u32;

    /* --- FPS (logged once per second at debug level) --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    while !window.quit_requested() {
        let now = Instant::now();

        /* 1) Live frame; a missing or odd-sized one just skips this iteration. */
        let live = match frames.next_frame() {
            Some(f) if f.width == b.width && f.height == b.height => f,
            other => {
                if let Some(f) = other {
                    warn!(
                        "{}",
                        Error::FrameSizeMismatch {
                            got_w: f.width,
                            got_h: f.height,
                            want_w: b.width,
                            want_h: b.height,
                        }
                    );
                }
                stats.skipped += 1;
                missed_in_a_row += 1;
                if missed_in_a_row >= max_missed {
                    return Err(Error::TooManyMissedFrames(missed_in_a_row));
                }
                continue;
            }
        };
        missed_in_a_row = 0;

        /* 2) Fingertip → core. */
        let pointer = window.poll();
        if session.step(pointer, now) == Transition::Completed {
            stats.letters_completed += 1;
        }

        /* 3) Compose and show. */
        compositor.render(&live, session, pointer, &mut screen)?;
        window.present(&screen)?;
        stats.frames += 1;

        frames_this_second += 1;
        let since = now.duration_since(last_fps_time);
        if since >= Duration::from_secs(1) {
            debug!("FPS: {:.1}", frames_this_second as f32 / since.as_secs_f32());
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!(
        "Quit after {} frames ({} skipped), {} letters completed",
        stats.frames, stats.skipped, stats.letters_completed
    );
    Ok(stats)
}
