// Compositor: builds the frame the player sees from the live camera image and
// the session's current state. Holds nothing between frames except lookup tables.

use crate::alphabet::ALPHABET;
use crate::draw::{GLYPH_H, add_saturating, draw_text_5x7, fill_circle, text_width};
use crate::error::Error;
use crate::gamma::GammaLut;
use crate::session::Session;
use crate::types::{FrameBuffer, Point};

/// Opacity of the letter template over the camera image.
pub const TEMPLATE_ALPHA: f32 = 0.4;
const TRAIL_TINT: u32 = 0x00_FF_00_00;   // red, added on top
const CURSOR_COLOR: u32 = 0x00_00_FF_00; // green fingertip dot
const CURSOR_RADIUS: i32 = 10;
const HUD_COLOR: u32 = 0x00_FF_FF_FF;
const CAPTION_COLOR: u32 = 0x00_00_FF_00;
const HUD_SCALE: i32 = 2;
const CAPTION_MAX_SCALE: i32 = 3;

pub struct Compositor {
    lut: GammaLut,
}

impl Compositor {
    pub fn new() -> Self {
        Self { lut: GammaLut::new() }
    }

    /// Write the composed frame into `screen` (resized if needed).
    pub fn render(
        &self,
        live: &FrameBuffer,
        session: &Session,
        pointer: Option<Point>,
        screen: &mut FrameBuffer,
    ) -> Result<(), Error> {
        let b = session.bounds();
        if live.width != b.width || live.height != b.height {
            return Err(Error::FrameSizeMismatch {
                got_w: live.width,
                got_h: live.height,
                want_w: b.width,
                want_h: b.height,
            });
        }

        /* 1) Live camera is the base. */
        screen.width = live.width;
        screen.height = live.height;
        screen.pixels.clear();
        screen.pixels.extend_from_slice(&live.pixels);

        /* 2) Letter template, blended only where the letter is.
           Visual: the letter shows as a dark see-through shape. */
        let target = session.target();
        for (i, on) in target.mask.bits.iter().enumerate() {
            if *on {
                screen.pixels[i] = self.lut.mix(target.template.pixels[i], screen.pixels[i], TEMPLATE_ALPHA);
            }
        }

        /* 3) Trail in red, added on top of everything so far. */
        for (i, on) in session.trail().mask().bits.iter().enumerate() {
            if *on {
                screen.pixels[i] = add_saturating(screen.pixels[i], TRAIL_TINT);
            }
        }

        /* 4) Fingertip dot. */
        if let Some(p) = pointer {
            let p = b.clamp(p);
            fill_circle(screen, p.x, p.y, CURSOR_RADIUS, CURSOR_COLOR);
        }

        /* 5) HUD + caption. */
        draw_hud(screen, session);
        Ok(())
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

/// Percentage shown to the player, rounded down.
pub fn progress_percent(progress: f32) -> u32 {
    (progress.clamp(0.0, 1.0) * 100.0).floor() as u32
}

fn draw_hud(screen: &mut FrameBuffer, session: &Session) {
    let line = (GLYPH_H + 4) * HUD_SCALE;
    let lines = [
        "Trace the letter with your finger".to_string(),
        format!(
            "Letter {} ({}/{})  Progress: {}%",
            session.symbol().letter,
            session.index() + 1,
            ALPHABET.len(),
            progress_percent(session.progress())
        ),
        "Press Q or ESC to quit".to_string(),
    ];
    for (i, text) in lines.iter().enumerate() {
        draw_text_5x7(screen, 10, 10 + i as i32 * line, text, HUD_SCALE, HUD_COLOR);
    }

    if let Some(caption) = session.caption() {
        // Biggest scale that still fits, centred, 50 px above the bottom edge.
        let avail = screen.width as i32 - 20;
        let scale = (1..=CAPTION_MAX_SCALE)
            .rev()
            .find(|s| text_width(&caption, *s) <= avail)
            .unwrap_or(1);
        let x = (screen.width as i32 - text_width(&caption, scale)) / 2;
        let y = screen.height as i32 - 50 - GLYPH_H * scale;
        draw_text_5x7(screen, x, y, &caption, scale, CAPTION_COLOR);
    }
}
