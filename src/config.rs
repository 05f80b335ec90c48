//! Command line configuration.

use std::time::Duration;

use clap::Parser;

use crate::alphabet::index_of;
use crate::error::Error;
use crate::session::SessionSettings;

const CM_PER_INCH: f32 = 2.54;

#[derive(Parser, Debug, Clone)]
#[command(name = "letter-trace")]
#[command(about = "Trace the alphabet with your fingertip in front of the webcam")]
pub struct Config {
    /// Camera index (0 = default webcam)
    #[arg(long, default_value_t = 0)]
    pub camera: u32,

    /// Requested capture width; the camera may pick something close
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Requested capture height
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Coverage (0-1] at which a letter counts as traced
    #[arg(long, default_value_t = 0.9)]
    pub threshold: f32,

    /// Seconds the "Good job!" caption stays before the next letter
    #[arg(long, default_value_t = 3.0)]
    pub dwell_secs: f32,

    /// Stroke width of the letter, in centimetres on screen
    #[arg(long, default_value_t = 2.0)]
    pub stroke_cm: f32,

    /// Assumed display density used to turn centimetres into pixels
    #[arg(long, default_value_t = 96.0)]
    pub dpi: f32,

    /// Letter to start from
    #[arg(long, default_value_t = 'A')]
    pub start: char,

    /// Give up after this many camera frames in a row fail
    #[arg(long, default_value_t = 60)]
    pub max_missed_frames: u32,

    /// Show the camera as-is instead of the mirrored selfie view
    #[arg(long)]
    pub no_mirror: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camera: 0,
            width: 640,
            height: 480,
            threshold: 0.9,
            dwell_secs: 3.0,
            stroke_cm: 2.0,
            dpi: 96.0,
            start: 'A',
            max_missed_frames: 60,
            no_mirror: false,
        }
    }
}

impl Config {
    /// Stroke width in whole pixels: `stroke_cm * dpi / 2.54`, truncated.
    pub fn stroke_thickness_px(&self) -> u32 {
        (self.stroke_cm * self.dpi / CM_PER_INCH) as u32
    }

    /// Check ranges and derive the core's settings.
    pub fn session_settings(&self) -> Result<SessionSettings, Error> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(Error::Config(format!("threshold must be in (0, 1], got {}", self.threshold)));
        }
        if !(self.dwell_secs >= 0.0 && self.dwell_secs.is_finite()) {
            return Err(Error::Config(format!("dwell must be >= 0 seconds, got {}", self.dwell_secs)));
        }
        let thickness = self.stroke_thickness_px();
        if thickness == 0 {
            return Err(Error::Config(format!(
                "stroke of {} cm at {} dpi is under one pixel",
                self.stroke_cm, self.dpi
            )));
        }
        let short_side = self.width.min(self.height);
        if thickness > short_side {
            return Err(Error::Config(format!(
                "stroke of {thickness} px is wider than the {short_side} px frame"
            )));
        }
        if self.max_missed_frames == 0 {
            return Err(Error::Config("max-missed-frames must be at least 1".into()));
        }
        let start_index = index_of(self.start)
            .ok_or_else(|| Error::Config(format!("no letter '{}' to start from", self.start)))?;
        let dwell = Duration::try_from_secs_f32(self.dwell_secs)
            .map_err(|e| Error::Config(format!("dwell of {} seconds: {e}", self.dwell_secs)))?;

        Ok(SessionSettings { thickness, threshold: self.threshold, dwell, start_index })
    }
}
