//! Parsing of textual colors into the canonical multi-space record.
//!
//! Supported syntaxes (case-insensitive, surrounding whitespace ignored):
//!
//! - Named colors: `red`, `rebeccapurple`, and `transparent`
//! - Hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb(r, g, b)` and `rgba(r, g, b, a)`
//! - `hsl(h, s%, l%)` and `hsla(h, s%, l%, a)`
//! - `hsv(h, s%, v%)` and `hsva(h, s%, v%, a)`
//!
//! Hue may carry a `deg` suffix. Saturation, lightness and value followed by
//! `%` are percentages; without `%` they are already fractions in `0..=1`.
//!
//! A string that matches none of the grammars is not an error: [`parse_color`]
//! returns `None`.

use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;
use regex::{Captures, Regex};

use crate::color::{ColorAttributes, ColorFormat};
use crate::convert::{HslHsv, RgbHsl, RgbHsv, hsl_to_rgbsv, hsv_to_rgbsl, rgb_to_hslsv};
use crate::names;
use crate::sync::lock_recover_debug;

/// Number of normalized inputs remembered by [`parse_color`].
pub const PARSE_CACHE_CAPACITY: usize = 1024;

const NUMBER: &str = r"([0-9]+(?:\.[0-9]+)?|\.[0-9]+)";
const CHANNEL: &str = r"([0-9]{1,3})";

struct Matchers {
    rgb: Regex,
    rgba: Regex,
    hsl: Regex,
    hsla: Regex,
    hsv: Regex,
    hsva: Regex,
    hex8: Regex,
    hex6: Regex,
    hex4: Regex,
    hex3: Regex,
}

impl Matchers {
    fn new() -> Self {
        let rgb_args = format!(r"\s*{CHANNEL}\s*,\s*{CHANNEL}\s*,\s*{CHANNEL}\s*");
        let polar_args = format!(r"\s*{NUMBER}(?:deg)?\s*,\s*{NUMBER}(%?)\s*,\s*{NUMBER}(%?)\s*");
        let alpha_arg = format!(r",\s*{NUMBER}\s*");
        let compile = |pattern: String| Regex::new(&pattern).expect("valid regex");

        Self {
            rgb: compile(format!(r"^rgb\({rgb_args}\)$")),
            rgba: compile(format!(r"^rgba\({rgb_args}{alpha_arg}\)$")),
            hsl: compile(format!(r"^hsl\({polar_args}\)$")),
            hsla: compile(format!(r"^hsla\({polar_args}{alpha_arg}\)$")),
            hsv: compile(format!(r"^hsv\({polar_args}\)$")),
            hsva: compile(format!(r"^hsva\({polar_args}{alpha_arg}\)$")),
            hex8: compile(r"^#([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$".to_string()),
            hex6: compile(r"^#([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$".to_string()),
            hex4: compile(r"^#([0-9a-f])([0-9a-f])([0-9a-f])([0-9a-f])$".to_string()),
            hex3: compile(r"^#([0-9a-f])([0-9a-f])([0-9a-f])$".to_string()),
        }
    }
}

static MATCHERS: LazyLock<Matchers> = LazyLock::new(Matchers::new);

/// Parse a color string into its canonical record (cached).
///
/// The input is trimmed and lowercased, named colors are resolved, then the
/// grammars are tried in a fixed order: `rgb`, `rgba`, `hsl`, `hsla`, `hsv`,
/// `hsva`, 8-, 6-, 4- and 3-digit hex. The first match wins and fills in the
/// other color spaces.
///
/// Returns `None` when nothing matches.
///
/// # Examples
///
/// ```
/// use super_color::parse::parse_color;
/// use super_color::ColorFormat;
///
/// let red = parse_color("  RGB(255, 0, 0) ").unwrap();
/// assert_eq!(red.format, ColorFormat::Rgb);
/// assert_eq!(red.l, 0.5);
///
/// assert!(parse_color("not-a-color").is_none());
/// ```
#[must_use]
pub fn parse_color(color: &str) -> Option<ColorAttributes> {
    static CACHE: LazyLock<Mutex<LruCache<String, ColorAttributes>>> = LazyLock::new(|| {
        Mutex::new(LruCache::new(
            NonZeroUsize::new(PARSE_CACHE_CAPACITY).expect("non-zero"),
        ))
    });

    let normalized = color.trim().to_lowercase();

    if let Some(cached) = lock_recover_debug(&CACHE, "parse cache")
        .get(&normalized)
        .copied()
    {
        log::trace!("parse cache hit for {normalized:?}");
        return Some(cached);
    }

    let parsed = parse_uncached(&normalized);

    match parsed {
        Some(attributes) => {
            lock_recover_debug(&CACHE, "parse cache").put(normalized, attributes);
        }
        None => log::debug!("no color syntax matched {normalized:?}"),
    }

    parsed
}

fn parse_uncached(color: &str) -> Option<ColorAttributes> {
    let color = if let Some(hex) = names::name_to_hex(color) {
        hex
    } else if color == "transparent" {
        "#0000"
    } else {
        color
    };

    let m = &*MATCHERS;

    if let Some(caps) = m.rgb.captures(color) {
        let (r, g, b) = (number(&caps, 1)?, number(&caps, 2)?, number(&caps, 3)?);
        return Some(from_rgb(r, g, b, 1.0, ColorFormat::Rgb));
    }
    if let Some(caps) = m.rgba.captures(color) {
        let (r, g, b) = (number(&caps, 1)?, number(&caps, 2)?, number(&caps, 3)?);
        return Some(from_rgb(r, g, b, number(&caps, 4)?, ColorFormat::Rgb));
    }
    if let Some(caps) = m.hsl.captures(color) {
        let (h, s, l) = polar(&caps)?;
        return Some(from_hsl(h, s, l, 1.0));
    }
    if let Some(caps) = m.hsla.captures(color) {
        let (h, s, l) = polar(&caps)?;
        return Some(from_hsl(h, s, l, number(&caps, 6)?));
    }
    if let Some(caps) = m.hsv.captures(color) {
        let (h, s, v) = polar(&caps)?;
        return Some(from_hsv(h, s, v, 1.0));
    }
    if let Some(caps) = m.hsva.captures(color) {
        let (h, s, v) = polar(&caps)?;
        return Some(from_hsv(h, s, v, number(&caps, 6)?));
    }
    if let Some(caps) = m.hex8.captures(color) {
        let alpha = hex_channel(&caps, 4) / 255.0;
        return Some(from_hex(&caps, alpha));
    }
    if let Some(caps) = m.hex6.captures(color) {
        return Some(from_hex(&caps, 1.0));
    }
    if let Some(caps) = m.hex4.captures(color) {
        let alpha = hex_channel(&caps, 4) / 255.0;
        return Some(from_hex(&caps, alpha));
    }
    if let Some(caps) = m.hex3.captures(color) {
        return Some(from_hex(&caps, 1.0));
    }

    None
}

fn number(caps: &Captures<'_>, index: usize) -> Option<f64> {
    caps[index].parse().ok()
}

/// Hue, saturation and lightness/value from an hsl/hsv capture, with
/// percentages scaled down to fractions.
fn polar(caps: &Captures<'_>) -> Option<(f64, f64, f64)> {
    let fraction = |value: usize, percent: usize| {
        let n = number(caps, value)?;
        Some(if caps[percent].is_empty() { n } else { n / 100.0 })
    };
    Some((number(caps, 1)?, fraction(2, 3)?, fraction(4, 5)?))
}

/// One hex channel; single digits are doubled (`a` -> `aa`).
fn hex_channel(caps: &Captures<'_>, index: usize) -> f64 {
    let digits = &caps[index];
    let pair = if digits.len() == 1 {
        digits.repeat(2)
    } else {
        digits.to_string()
    };
    u8::from_str_radix(&pair, 16).map_or(0.0, f64::from)
}

fn from_hex(caps: &Captures<'_>, a: f64) -> ColorAttributes {
    let (r, g, b) = (
        hex_channel(caps, 1),
        hex_channel(caps, 2),
        hex_channel(caps, 3),
    );
    from_rgb(r, g, b, a, ColorFormat::Hex)
}

fn from_rgb(r: f64, g: f64, b: f64, a: f64, format: ColorFormat) -> ColorAttributes {
    let HslHsv {
        h,
        s_lightness,
        l,
        s_value,
        v,
    } = rgb_to_hslsv(r, g, b);
    ColorAttributes {
        r,
        g,
        b,
        h,
        s_lightness,
        l,
        s_value,
        v,
        a,
        format,
    }
}

fn from_hsl(h: f64, s_lightness: f64, l: f64, a: f64) -> ColorAttributes {
    let RgbHsv {
        r,
        g,
        b,
        s_value,
        v,
    } = hsl_to_rgbsv(h, s_lightness, l);
    ColorAttributes {
        r,
        g,
        b,
        h,
        s_lightness,
        l,
        s_value,
        v,
        a,
        format: ColorFormat::Hsl,
    }
}

fn from_hsv(h: f64, s_value: f64, v: f64, a: f64) -> ColorAttributes {
    let RgbHsl {
        r,
        g,
        b,
        s_lightness,
        l,
    } = hsv_to_rgbsl(h, s_value, v);
    ColorAttributes {
        r,
        g,
        b,
        h,
        s_lightness,
        l,
        s_value,
        v,
        a,
        format: ColorFormat::Hsv,
    }
}
