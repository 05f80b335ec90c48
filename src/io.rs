// Seams between the tracing core and the outside world.
// The frame loop only talks to these traits, so the camera/window can be
// swapped for fakes in tests.

use crate::error::Error;
use crate::types::{FrameBuffer, Point};

/// Where the fingertip is this frame, in frame coordinates (already mirrored).
pub trait PointerSource {
    fn poll(&mut self) -> Option<Point>;
}

/// Live frames. `None` means "nothing this time", not "gone forever".
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<FrameBuffer>;
}

/// Where the composed frame goes.
pub trait FrameSink {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error>;
}

/// Polled once at the top of every iteration.
pub trait QuitSignal {
    fn quit_requested(&self) -> bool;
}
