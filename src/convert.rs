//! Conversions between RGB, HSL, HSV and hexadecimal notation.
//!
//! Every function here is pure. Channel ranges follow one convention
//! throughout the crate:
//!
//! - red, green, blue: `0.0..=255.0`
//! - hue: degrees, `0.0..360.0`
//! - saturation, lightness, value, alpha: `0.0..=1.0`
//!
//! Inputs are not clamped; out-of-range values produce out-of-range outputs.
//!
//! # Examples
//!
//! ```
//! use super_color::convert::{hex_to_rgba, rgb_to_hsl};
//!
//! let red = hex_to_rgba("#f00").unwrap();
//! assert_eq!((red.r, red.g, red.b, red.a), (255.0, 0.0, 0.0, 1.0));
//!
//! let hsl = rgb_to_hsl(red.r, red.g, red.b);
//! assert_eq!(hsl.h, 0.0);
//! assert_eq!(hsl.l, 0.5);
//! ```

use std::fmt;

/// Red, green and blue channels in `0.0..=255.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// [`Rgb`] plus alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Hue, saturation and lightness.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s_lightness: f64,
    pub l: f64,
}

/// [`Hsl`] plus alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsla {
    pub h: f64,
    pub s_lightness: f64,
    pub l: f64,
    pub a: f64,
}

/// Hue, saturation and value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s_value: f64,
    pub v: f64,
}

/// [`Hsv`] plus alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsva {
    pub h: f64,
    pub s_value: f64,
    pub v: f64,
    pub a: f64,
}

/// HSL and HSV derived from an RGB color. Output of [`rgb_to_hslsv`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HslHsv {
    pub h: f64,
    pub s_lightness: f64,
    pub l: f64,
    pub s_value: f64,
    pub v: f64,
}

/// RGB and the HSV saturation/value derived from an HSL color. Output of
/// [`hsl_to_rgbsv`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RgbHsv {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub s_value: f64,
    pub v: f64,
}

/// RGB and the HSL saturation/lightness derived from an HSV color. Output of
/// [`hsv_to_rgbsl`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RgbHsl {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub s_lightness: f64,
    pub l: f64,
}

/// Error for hexadecimal literals that are not `#` followed by 3, 4, 6 or 8
/// hex digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexFormatError {
    /// The literal does not start with `#`.
    MissingPrefix(String),
    /// The digit count is not 3, 4, 6 or 8.
    InvalidLength { input: String, digits: usize },
    /// A character after `#` is not a hex digit.
    InvalidDigit { input: String, digit: char },
}

impl fmt::Display for HexFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrefix(s) => write!(f, "Hex color must start with '#': {s}"),
            Self::InvalidLength { input, digits } => write!(
                f,
                "Hex color must have 3, 4, 6 or 8 digits, got {digits}: {input}"
            ),
            Self::InvalidDigit { input, digit } => {
                write!(f, "Invalid hex digit {digit:?} in color: {input}")
            }
        }
    }
}

impl std::error::Error for HexFormatError {}

/// Hue in degrees shared by RGB -> HSL and RGB -> HSV.
///
/// Takes normalized channels plus their max and the max-min spread.
fn hue_from_rgb(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let hue = if (max - r).abs() < f64::EPSILON {
        (g - b) / delta + (if g < b { 6.0 } else { 0.0 })
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    hue / 6.0 * 360.0
}

/// Convert RGB (`0..=255`) to HSL.
#[must_use]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = f64::midpoint(max, min);

    if (max - min).abs() < f64::EPSILON {
        return Hsl {
            h: 0.0,
            s_lightness: 0.0,
            l: lightness,
        };
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    Hsl {
        h: hue_from_rgb(r, g, b, max, delta),
        s_lightness: saturation,
        l: lightness,
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Convert HSL to RGB (`0..=255`).
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    if s == 0.0 {
        return Rgb {
            r: l * 255.0,
            g: l * 255.0,
            b: l * 255.0,
        };
    }

    let h = h / 360.0;
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb {
        r: hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        g: hue_to_channel(p, q, h) * 255.0,
        b: hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    }
}

/// Convert HSV to RGB (`0..=255`).
///
/// The sector index wraps with Euclidean modulo, so negative hues still land
/// in a valid sector.
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = h * 6.0 / 360.0;
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "rem_euclid keeps the sector in 0..6"
    )]
    let sector = (i.rem_euclid(6.0)) as usize;

    let r = [v, q, p, p, t, v][sector];
    let g = [t, v, v, q, p, p][sector];
    let b = [p, p, t, v, v, q][sector];

    Rgb {
        r: r * 255.0,
        g: g * 255.0,
        b: b * 255.0,
    }
}

/// Convert RGB (`0..=255`) to HSV.
#[must_use]
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> Hsv {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    let hue = if delta.abs() < f64::EPSILON {
        0.0
    } else {
        hue_from_rgb(r, g, b, max, delta)
    };

    Hsv {
        h: hue,
        s_value: saturation,
        v: max,
    }
}

/// Decode `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (case-insensitive).
///
/// Short forms duplicate each nibble. Forms without alpha are fully opaque;
/// the alpha byte is otherwise scaled to `0.0..=1.0`.
///
/// # Errors
///
/// Returns [`HexFormatError`] when the literal is not `#` followed by exactly
/// 3, 4, 6 or 8 hex digits.
pub fn hex_to_rgba(hex: &str) -> Result<Rgba, HexFormatError> {
    let Some(digits) = hex.strip_prefix('#') else {
        return Err(HexFormatError::MissingPrefix(hex.to_string()));
    };

    let nibbles = digits
        .chars()
        .map(|c| {
            c.to_digit(16).ok_or_else(|| HexFormatError::InvalidDigit {
                input: hex.to_string(),
                digit: c,
            })
        })
        .collect::<Result<Vec<u32>, _>>()?;

    let pair = |hi: u32, lo: u32| f64::from((hi << 4) | lo);
    let [r, g, b, a] = match nibbles.as_slice() {
        &[r, g, b] => [pair(r, r), pair(g, g), pair(b, b), 255.0],
        &[r, g, b, a] => [pair(r, r), pair(g, g), pair(b, b), pair(a, a)],
        &[r1, r2, g1, g2, b1, b2] => [pair(r1, r2), pair(g1, g2), pair(b1, b2), 255.0],
        &[r1, r2, g1, g2, b1, b2, a1, a2] => {
            [pair(r1, r2), pair(g1, g2), pair(b1, b2), pair(a1, a2)]
        }
        other => {
            return Err(HexFormatError::InvalidLength {
                input: hex.to_string(),
                digits: other.len(),
            });
        }
    };

    Ok(Rgba {
        r,
        g,
        b,
        a: a / 255.0,
    })
}

/// Derive HSL and HSV from RGB.
#[must_use]
pub fn rgb_to_hslsv(r: f64, g: f64, b: f64) -> HslHsv {
    let hsl = rgb_to_hsl(r, g, b);
    let hsv = rgb_to_hsv(r, g, b);

    HslHsv {
        h: hsl.h,
        s_lightness: hsl.s_lightness,
        l: hsl.l,
        s_value: hsv.s_value,
        v: hsv.v,
    }
}

/// Derive RGB and HSV saturation/value from HSL. The HSL input is not
/// recomputed.
#[must_use]
pub fn hsl_to_rgbsv(h: f64, s: f64, l: f64) -> RgbHsv {
    let Rgb { r, g, b } = hsl_to_rgb(h, s, l);
    let hsv = rgb_to_hsv(r, g, b);

    RgbHsv {
        r,
        g,
        b,
        s_value: hsv.s_value,
        v: hsv.v,
    }
}

/// Derive RGB and HSL saturation/lightness from HSV. The HSV input is not
/// recomputed.
///
/// `s_lightness` is reported equal to the derived lightness rather than the
/// HSL saturation. Existing serialized colors depend on this, so it is kept.
#[must_use]
pub fn hsv_to_rgbsl(h: f64, s: f64, v: f64) -> RgbHsl {
    let Rgb { r, g, b } = hsv_to_rgb(h, s, v);
    let hsl = rgb_to_hsl(r, g, b);

    RgbHsl {
        r,
        g,
        b,
        s_lightness: hsl.l,
        l: hsl.l,
    }
}
