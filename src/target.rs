// Target rasterizer: turns the current letter into
// 1) a binary mask of its thick stroke region (what the child must cover), and
// 2) a colour template used only for drawing the letter over the camera feed.

use crate::alphabet::{CAP_HEIGHT, Symbol};
use crate::raster::{paint_segment, stamp_polyline};
use crate::types::{BitMask, FrameBuffer, Point};

/// Cap height of the glyph as a fraction of the shorter canvas side.
pub const GLYPH_HEIGHT_FRACTION: f32 = 0.7;
/// Extra outline width (pixels) under the fill pass in the template.
pub const OUTLINE_MARGIN: u32 = 6;

const TEMPLATE_BACKGROUND: u32 = 0x00_FF_FF_FF;
const TEMPLATE_OUTLINE: u32 = 0x00_FF_FF_FF;
const TEMPLATE_FILL: u32 = 0x00_10_10_10;

/// Everything derived from one letter at one canvas size.
pub struct Target {
    pub symbol: Symbol,
    pub mask: BitMask,
    pub template: FrameBuffer,
    pixel_count: usize,
}

impl Target {
    /// Scaled centre-line polylines, in frame pixels.
    #[cfg(test)]
    pub fn strokes(&self) -> Vec<Vec<Point>> {
        layout_strokes(&self.symbol, self.mask.width, self.mask.height)
    }

    /// Set pixels in the mask. Cached; the mask never changes after build.
    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    pub fn is_degenerate(&self) -> bool {
        self.pixel_count == 0
    }
}

/// Map the glyph's font-unit strokes onto the canvas: cap height scales with
/// `min(width, height)`, glyph bounding box centred.
pub fn layout_strokes(symbol: &Symbol, width: usize, height: usize) -> Vec<Vec<Point>> {
    let glyph = symbol.strokes();
    if glyph.is_empty() {
        return Vec::new();
    }

    let (mut min_x, mut min_y, mut max_x, mut max_y) = (i8::MAX, i8::MAX, i8::MIN, i8::MIN);
    for &(x, y) in glyph.iter().flat_map(|s| s.iter()) {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    let scale = GLYPH_HEIGHT_FRACTION * width.min(height) as f32 / CAP_HEIGHT;
    let mid_x = (min_x as f32 + max_x as f32) / 2.0;
    let mid_y = (min_y as f32 + max_y as f32) / 2.0;
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;

    glyph
        .iter()
        .map(|stroke| {
            stroke
                .iter()
                .map(|&(x, y)| {
                    Point::new(
                        (cx + (x as f32 - mid_x) * scale).round() as i32,
                        (cy + (y as f32 - mid_y) * scale).round() as i32,
                    )
                })
                .collect()
        })
        .collect()
}

/// Build mask + template for `symbol`. Same inputs always give the same bits.
pub fn build_target(symbol: Symbol, width: usize, height: usize, thickness: u32) -> Target {
    let strokes = layout_strokes(&symbol, width, height);

    let mut mask = BitMask::new(width, height);
    for stroke in &strokes {
        stamp_polyline(&mut mask, stroke, thickness);
    }

    // Outline pass first (wider), then the fill on top.
    let mut template = FrameBuffer::filled(width, height, TEMPLATE_BACKGROUND);
    for (pass_thickness, color) in [
        (thickness.saturating_add(OUTLINE_MARGIN), TEMPLATE_OUTLINE),
        (thickness, TEMPLATE_FILL),
    ] {
        for stroke in &strokes {
            for pair in stroke.windows(2) {
                paint_segment(&mut template, pair[0], pair[1], pass_thickness, color);
            }
        }
    }

    let pixel_count = mask.count();
    Target { symbol, mask, template, pixel_count }
}
