//! Driver-to-value mapping: the cyclic rainbow color scale and the linear
//! height scale. Both are pure and total over [0, 1]; out-of-range inputs
//! wrap (color) or clamp (height).

/// Normalized RGBA color, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn as_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

// Cubehelix rotation coefficients (Green, D.A. 2011).
const CH_A: f32 = -0.148_61;
const CH_B: f32 = 1.782_77;
const CH_C: f32 = -0.292_27;
const CH_D: f32 = -0.906_49;
const CH_E: f32 = 1.972_94;

/// Cyclic rainbow scale with period 1: hue sweeps the full wheel while
/// saturation and lightness peak mid-cycle, so 0 and 1 map to the same color.
pub fn rainbow(t: f32) -> Rgba {
    let t = if t < 0.0 || t > 1.0 { t - t.floor() } else { t };
    let ts = (t - 0.5).abs();

    let hue_degrees = 360.0 * t - 100.0;
    let saturation = 1.5 - 1.5 * ts;
    let lightness = 0.8 - 0.9 * ts;

    cubehelix_to_rgba(hue_degrees, saturation, lightness)
}

fn cubehelix_to_rgba(hue_degrees: f32, saturation: f32, lightness: f32) -> Rgba {
    let h = (hue_degrees + 120.0).to_radians();
    let l = lightness;
    let amplitude = saturation * l * (1.0 - l);
    let (sin_h, cos_h) = h.sin_cos();

    Rgba::new(
        (l + amplitude * (CH_A * cos_h + CH_B * sin_h)).clamp(0.0, 1.0),
        (l + amplitude * (CH_C * cos_h + CH_D * sin_h)).clamp(0.0, 1.0),
        (l + amplitude * (CH_E * cos_h)).clamp(0.0, 1.0),
        1.0,
    )
}

/// Linear map from a [0, 1] driver to render-space block height. The lower
/// bound stays strictly positive so geometry never degenerates to zero depth.
#[derive(Debug, Clone, Copy)]
pub struct HeightScale {
    min: f32,
    max: f32,
}

impl HeightScale {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn map(&self, driver: f32) -> f32 {
        let t = driver.clamp(0.0, 1.0);
        self.min + (self.max - self.min) * t
    }
}
