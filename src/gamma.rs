// Gamma-correct pixel mixing with lookup tables instead of powf.
// Visual: the letter template fades into the camera image without dark fringes.

const LINEAR_STEPS: usize = 4096;

pub struct GammaLut {
    // sRGB(0..255) -> linear (0..1)
    to_linear: [f32; 256],
    // linear(0..1) -> sRGB(0..255), index = (linear * 4095).round()
    to_srgb: [u8; LINEAR_STEPS],
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

fn linear_to_srgb(l: f32) -> f32 {
    if l <= 0.003_130_8 { 12.92 * l } else { 1.055 * l.powf(1.0 / 2.4) - 0.055 }
}

impl GammaLut {
    /// Build both tables once at startup.
    pub fn new() -> Self {
        let mut to_linear = [0.0f32; 256];
        for (v, slot) in to_linear.iter_mut().enumerate() {
            *slot = srgb_to_linear(v as f32 / 255.0);
        }

        let mut to_srgb = [0u8; LINEAR_STEPS];
        for (i, slot) in to_srgb.iter_mut().enumerate() {
            let l = i as f32 / (LINEAR_STEPS - 1) as f32;
            *slot = (linear_to_srgb(l) * 255.0).round().clamp(0.0, 255.0) as u8;
        }

        Self { to_linear, to_srgb }
    }

    #[inline]
    fn lin(&self, v: u32) -> f32 {
        self.to_linear[(v & 0xFF) as usize]
    }

    #[inline]
    fn srgb(&self, l: f32) -> u32 {
        let idx = (l.clamp(0.0, 1.0) * (LINEAR_STEPS - 1) as f32).round() as usize;
        self.to_srgb[idx] as u32
    }

    /// Mix two 0x00RRGGBB pixels in linear light: `alpha` of `over`, the rest `under`.
    pub fn mix(&self, over: u32, under: u32, alpha: f32) -> u32 {
        let a = alpha.clamp(0.0, 1.0);
        let inv = 1.0 - a;
        let mut out = 0u32;
        for shift in [16u32, 8, 0] {
            let l = a * self.lin(over >> shift) + inv * self.lin(under >> shift);
            out |= self.srgb(l) << shift;
        }
        out
    }
}

impl Default for GammaLut {
    fn default() -> Self {
        Self::new()
    }
}
