// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the composed camera image.
// 2) The mouse standing in for a fingertip (held left button = finger present).
// 3) A filled cursor dot, and a 5x7 bitmap font for HUD text and captions.

use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

use crate::error::Error;
use crate::io::{FrameSink, PointerSource, QuitSignal};
use crate::types::{FrameBuffer, Point};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the camera feed.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Current mouse position in window pixel coordinates (clamped to the window).
    fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| Point::new(x.max(0.0) as i32, y.max(0.0) as i32))
    }
}

impl FrameSink for Drawer {
    /// Visual: the window immediately displays the new image.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&frame.pixels, frame.width, frame.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }
}

impl PointerSource for Drawer {
    fn poll(&mut self) -> Option<Point> {
        if self.window.get_mouse_down(MouseButton::Left) { self.mouse_pos() } else { None }
    }
}

impl QuitSignal for Drawer {
    /// Window closed, ESC or Q.
    fn quit_requested(&self) -> bool {
        !self.window.is_open()
            || self.window.is_key_down(Key::Escape)
            || self.window.is_key_down(Key::Q)
    }
}

/* ---------- Software drawing: pixels, additive tint, discs, tiny bitmap font ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    fb.pixels[y * fb.width + x] = color;
}

/// Channel-wise saturating add of two 0x00RRGGBB pixels.
/// Visual: repeated adds push a colour towards full intensity.
#[inline]
pub fn add_saturating(px: u32, tint: u32) -> u32 {
    let mut out = 0u32;
    for shift in [16u32, 8, 0] {
        let sum = ((px >> shift) & 0xFF) + ((tint >> shift) & 0xFF);
        out |= sum.min(255) << shift;
    }
    out
}

/// Solid disc centred at (cx,cy).
/// Visual: the round cursor dot that follows the fingertip.
pub fn fill_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    if radius < 0 {
        return;
    }
    let r2 = radius * radius;
    for y in (cy - radius)..=(cy + radius) {
        for x in (cx - radius)..=(cx + radius) {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, x, y, color);
            }
        }
    }
}

/* ---------- 5x7 bitmap font (upper-case ASCII, digits, a little punctuation) ---------- */

pub const GLYPH_W: i32 = 5;
pub const GLYPH_H: i32 = 7;
const ADVANCE: i32 = GLYPH_W + 1;

/// Return a 5x7 glyph bitmap. Lower-case input uses the upper-case shape.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Letters A..Z
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        // Punctuation
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '!' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00000,0b00100),
        '%' => g!(0b11000,0b11001,0b00010,0b00100,0b01000,0b10011,0b00011),
        '\'' => g!(0b00100,0b00100,0b01000,0b00000,0b00000,0b00000,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '/' => g!(0b00000,0b00001,0b00010,0b00100,0b01000,0b10000,0b00000),
        '(' => g!(0b00010,0b00100,0b01000,0b01000,0b01000,0b00100,0b00010),
        ')' => g!(0b01000,0b00100,0b00010,0b00010,0b00010,0b00100,0b01000),

        _ => None,
    }
}

/// Draw one glyph at (x,y), each font pixel a `scale` x `scale` block.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, scale: i32, color: u32) {
    let Some(rows) = glyph5x7(ch) else { return };
    for (ry, rowbits) in rows.iter().enumerate() {
        for rx in 0..GLYPH_W {
            if (rowbits & (1 << (4 - rx))) == 0 {
                continue;
            }
            for sy in 0..scale {
                for sx in 0..scale {
                    put_pixel(fb, x + rx * scale + sx, y + ry as i32 * scale + sy, color);
                }
            }
        }
    }
}

/// Width in pixels of `text` at `scale`.
pub fn text_width(text: &str, scale: i32) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 { 0 } else { (n * ADVANCE - 1) * scale }
}

/// Draw a text string using 5x7 glyphs with a drop shadow.
/// Visual: HUD text stays readable on both bright and dark video.
pub fn draw_text_5x7(fb: &mut FrameBuffer, x: i32, y: i32, text: &str, scale: i32, color: u32) {
    let scale = scale.max(1);
    // Shadow pass: offset by one font pixel in black
    for (i, ch) in text.chars().enumerate() {
        draw_char_5x7(fb, x + i as i32 * ADVANCE * scale + scale, y + scale, ch, scale, 0x00_00_00_00);
    }
    for (i, ch) in text.chars().enumerate() {
        draw_char_5x7(fb, x + i as i32 * ADVANCE * scale, y, ch, scale, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_pixel_ignores_out_of_bounds() {
        let mut fb = FrameBuffer::filled(4, 4, 0);
        put_pixel(&mut fb, -1, 0, 7);
        put_pixel(&mut fb, 4, 0, 7);
        put_pixel(&mut fb, 2, 3, 7);
        assert_eq!(fb.pixels.iter().filter(|p| **p == 7).count(), 1);
        assert_eq!(fb.pixels[3 * 4 + 2], 7);
    }

    #[test]
    fn saturating_add_clamps_per_channel() {
        assert_eq!(add_saturating(0x00_F0_10_00, 0x00_20_20_20), 0x00_FF_30_20);
        assert_eq!(add_saturating(0x00_00_00_00, 0x00_FF_00_00), 0x00_FF_00_00);
    }

    #[test]
    fn circle_is_round_and_clipped() {
        let mut fb = FrameBuffer::filled(30, 30, 0);
        fill_circle(&mut fb, 15, 15, 10, 1);
        assert_eq!(fb.pixels[15 * 30 + 25], 1);
        assert_eq!(fb.pixels[5 * 30 + 5], 0);

        let mut edge = FrameBuffer::filled(10, 10, 0);
        fill_circle(&mut edge, 0, 0, 3, 1);
        assert!(edge.pixels.iter().any(|p| *p == 1));
    }

    #[test]
    fn every_caption_character_has_a_glyph() {
        for s in crate::alphabet::ALPHABET.iter() {
            for ch in s.caption().chars() {
                assert!(glyph5x7(ch).is_some(), "missing glyph for {ch:?}");
            }
        }
        for ch in "Letter Z (26/26)  Progress: 100% | Press Q or ESC to quit".chars() {
            assert!(glyph5x7(ch).is_some(), "missing glyph for {ch:?}");
        }
    }

    #[test]
    fn text_width_scales() {
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("AB", 3), 33);
    }

    #[test]
    fn text_draws_colour_and_shadow() {
        let mut fb = FrameBuffer::filled(40, 20, 0x00_40_40_40);
        draw_text_5x7(&mut fb, 2, 2, "I", 2, 0x00_FF_FF_FF);
        assert!(fb.pixels.iter().any(|p| *p == 0x00_FF_FF_FF));
        assert!(fb.pixels.iter().any(|p| *p == 0));
    }
}
