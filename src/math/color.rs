use std::f64::consts::TAU;
use std::fmt;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a `0xRRGGBB` value. Bits above 24 are ignored.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Returns the color as `0xRRGGBB`.
    #[must_use]
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Converts hue, saturation and lightness to RGB.
    ///
    /// `hue` wraps into `[0, 1)`; `saturation` and `lightness` are clamped
    /// to `[0, 1]`.
    #[must_use]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h = hue.rem_euclid(1.0);
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        if s <= 0.0 {
            let v = unit_to_channel(l);
            return Self::new(v, v, v);
        }

        let hi = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let lo = 2.0 * l - hi;
        Self::new(
            unit_to_channel(hue_to_unit(lo, hi, h + 1.0 / 3.0)),
            unit_to_channel(hue_to_unit(lo, hi, h)),
            unit_to_channel(hue_to_unit(lo, hi, h - 1.0 / 3.0)),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Three-phase cosine color sweep.
///
/// Each channel is `cos(2π·index/max + φ) * 127 + 128` with phases 0°, 120°
/// and 240° for red, green and blue. The sweep completes one full cycle
/// between `index = 0` and `index = max`, so both ends map to the same
/// color. A `max` of zero is treated as a zero angle.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn div_color(index: usize, max: usize) -> Rgb {
    let freq = if max == 0 {
        0.0
    } else {
        TAU * (index % max) as f64 / max as f64
    };
    let phase120 = TAU / 3.0;
    let phase240 = 2.0 * TAU / 3.0;

    Rgb::new(
        cosine_channel(freq),
        cosine_channel(freq + phase120),
        cosine_channel(freq + phase240),
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cosine_channel(angle: f64) -> u8 {
    (angle.cos() * 127.0 + 128.0).round().clamp(0.0, 255.0) as u8
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

fn hue_to_unit(lo: f64, hi: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        lo + (hi - lo) * 6.0 * t
    } else if t < 0.5 {
        hi
    } else if t < 2.0 / 3.0 {
        lo + (hi - lo) * 6.0 * (2.0 / 3.0 - t)
    } else {
        lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_color_cycles_once() {
        for max in [1, 7, 14, 50] {
            assert_eq!(div_color(0, max), div_color(max, max));
        }
    }

    #[test]
    fn div_color_start_is_red_heavy() {
        let c = div_color(0, 10);
        assert_eq!(c.r, 255);
        assert!((64..=65).contains(&c.g));
        assert!((64..=65).contains(&c.b));
    }

    #[test]
    fn div_color_half_cycle_is_cyan_heavy() {
        let c = div_color(5, 10);
        assert_eq!(c.r, 1);
        assert!(c.g > 190 && c.b > 190);
    }

    #[test]
    fn div_color_zero_max_does_not_divide() {
        assert_eq!(div_color(3, 0), div_color(0, 1));
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(Rgb::from_hsl(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hsl(1.0 / 3.0, 1.0, 0.5), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_hsl(2.0 / 3.0, 1.0, 0.5), Rgb::new(0, 0, 255));
    }

    #[test]
    fn hsl_hue_wraps() {
        assert_eq!(Rgb::from_hsl(1.0, 1.0, 0.5), Rgb::from_hsl(0.0, 1.0, 0.5));
    }

    #[test]
    fn hsl_gray_when_unsaturated() {
        assert_eq!(Rgb::from_hsl(0.3, 0.0, 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn hex_and_display() {
        let c = Rgb::from_hex(0x00ff_8040);
        assert_eq!(c, Rgb::new(0xff, 0x80, 0x40));
        assert_eq!(c.to_hex(), 0x00ff_8040);
        assert_eq!(c.to_string(), "rgb(255,128,64)");
    }
}
