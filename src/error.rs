// One error type for the whole app.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("Camera init error: {0}")]
    CameraInit(String), // Opening/starting the camera failed
    #[error("Frame unavailable: {0}")]
    FrameUnavailable(String), // Grabbing/decoding a frame failed (transient)
    #[error("Frame is {got_w}x{got_h}, expected {want_w}x{want_h}")]
    FrameSizeMismatch {
        got_w: usize,
        got_h: usize,
        want_w: usize,
        want_h: usize,
    },
    #[error("Target for '{letter}' has no pixels; progress is pinned to 0")]
    DegenerateTarget { letter: char },
    #[error("No camera frame for {0} consecutive iterations")]
    TooManyMissedFrames(u32),
    #[error("Invalid config: {0}")]
    Config(String),
}
