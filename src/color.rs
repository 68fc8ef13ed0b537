use std::fmt;

/// Color in hue, saturation, luminance space.
///
/// All components are in `[0, 1]`. The hue covers the whole color wheel, so
/// 0 is red, 1/3 green, 2/3 blue, and it wraps around back to red at 1.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    hue: f64,
    saturation: f64,
    luminance: f64,
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, luminance: f64) -> Self {
        Hsl {
            hue: hue.rem_euclid(1.0),
            saturation: saturation.clamp(0.0, 1.0),
            luminance: luminance.clamp(0.0, 1.0),
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn luminance(&self) -> f64 {
        self.luminance
    }

    /// Move the hue along the color wheel.
    pub fn rotate(&mut self, amount: f64) {
        self.hue = (self.hue + amount).rem_euclid(1.0);
    }

    pub fn to_rgb(&self) -> [u8; 3] {
        let (h, s, l) = (self.hue, self.saturation, self.luminance);

        if s == 0.0 {
            let v = channel(l);
            return [v, v, v];
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        [h + 1.0 / 3.0, h, h - 1.0 / 3.0].map(|t| channel(hue_to_rgb(p, q, t)))
    }

    /// Format as a `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
