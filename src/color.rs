//! The color value object.
//!
//! A [`SuperColor`] stores RGB, HSL, HSV and alpha at the same time, so reads
//! in any space are free. Every setter recomputes the spaces that depend on
//! what it changed, keeping the representations consistent.
//!
//! # Examples
//!
//! ## Parsing Colors
//!
//! ```
//! use super_color::SuperColor;
//!
//! // Named colors
//! let red = SuperColor::parse("red").unwrap();
//!
//! // Hex colors, with optional alpha
//! let orange = SuperColor::parse("#ff8800").unwrap();
//! let faded = SuperColor::parse("#f808").unwrap();
//!
//! // Functional notations
//! let custom = SuperColor::parse("rgba(100, 150, 200, 0.5)").unwrap();
//! let green = SuperColor::parse("hsl(120deg, 100%, 50%)").unwrap();
//!
//! // Lenient constructor: unknown input falls back to black with a warning
//! let black = SuperColor::new("nonsense");
//! assert_eq!(black.to_hex(), "#000");
//! ```
//!
//! ## Updating Channels
//!
//! ```
//! use super_color::{HslUpdate, RgbUpdate, SuperColor};
//!
//! let mut color = SuperColor::parse("#ff0000").unwrap();
//! color.set_rgb(RgbUpdate::new().b(255.0));
//! assert_eq!(color.to_hex(), "#f0f");
//!
//! color.set_hsl(HslUpdate::new().l(0.25));
//! assert_eq!(color.to_hsla_string(), "hsl(300deg, 100%, 25%)");
//! ```
//!
//! ## Rendering
//!
//! ```
//! use super_color::{ColorFormat, SuperColor};
//!
//! let mut color = SuperColor::parse("rgba(255, 0, 0, 0.5)").unwrap();
//! assert_eq!(color.to_hex(), "#ff000080");
//! assert_eq!(color.to_string(), "rgba(255, 0, 0, 0.5)");
//!
//! color.set_alpha(1.0);
//! assert_eq!(color.to_string(), "red");
//! assert_eq!(color.to_string_with(false), "rgb(255, 0, 0)");
//!
//! color.set_format(ColorFormat::Hsv);
//! assert_eq!(color.to_string_with(false), "hsv(0deg, 100%, 100%)");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::convert::{
    HexFormatError, HslHsv, Hsla, Hsva, Rgb, RgbHsl, RgbHsv, Rgba, hex_to_rgba, hsl_to_rgb,
    hsl_to_rgbsv, hsv_to_rgbsl, rgb_to_hslsv,
};
use crate::names;
use crate::parse::parse_color;
use crate::utils::{js_number, round_int, round2};

/// Preferred textual family of a color, used by [`SuperColor::to_string_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFormat {
    /// `#rrggbb` and its short/alpha forms.
    #[default]
    Hex,
    /// `rgb()` / `rgba()`.
    Rgb,
    /// `hsl()` / `hsla()`.
    Hsl,
    /// `hsv()` / `hsva()`.
    Hsv,
}

impl ColorFormat {
    /// Get the name of this format.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            "hsv" => Ok(Self::Hsv),
            _ => Err(ColorParseError::UnknownFormat(s.to_string())),
        }
    }
}

/// Every representation of a color at once.
///
/// Produced by [`parse_color`] and accepted as-is by
/// [`SuperColor::from_attributes`]. Nothing checks that the spaces agree when
/// a record is built by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAttributes {
    /// Red, `0..=255`.
    pub r: f64,
    /// Green, `0..=255`.
    pub g: f64,
    /// Blue, `0..=255`.
    pub b: f64,
    /// Hue in degrees, `0..360`.
    pub h: f64,
    /// HSL saturation, `0..=1`.
    pub s_lightness: f64,
    /// HSL lightness, `0..=1`.
    pub l: f64,
    /// HSV saturation, `0..=1`.
    pub s_value: f64,
    /// HSV value, `0..=1`.
    pub v: f64,
    /// Alpha, `0..=1`.
    pub a: f64,
    /// Preferred rendering family.
    pub format: ColorFormat,
}

impl Default for ColorAttributes {
    /// Opaque black in hex format.
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            h: 0.0,
            s_lightness: 0.0,
            l: 0.0,
            s_value: 0.0,
            v: 0.0,
            a: 1.0,
            format: ColorFormat::Hex,
        }
    }
}

/// Partial RGB update for [`SuperColor::set_rgb`]. Unset channels keep their
/// current value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RgbUpdate {
    pub r: Option<f64>,
    pub g: Option<f64>,
    pub b: Option<f64>,
}

impl RgbUpdate {
    /// An update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set red.
    #[must_use]
    pub const fn r(mut self, r: f64) -> Self {
        self.r = Some(r);
        self
    }

    /// Set green.
    #[must_use]
    pub const fn g(mut self, g: f64) -> Self {
        self.g = Some(g);
        self
    }

    /// Set blue.
    #[must_use]
    pub const fn b(mut self, b: f64) -> Self {
        self.b = Some(b);
        self
    }
}

/// Partial HSL update for [`SuperColor::set_hsl`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HslUpdate {
    pub h: Option<f64>,
    pub s_lightness: Option<f64>,
    pub l: Option<f64>,
}

impl HslUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn h(mut self, h: f64) -> Self {
        self.h = Some(h);
        self
    }

    #[must_use]
    pub const fn s_lightness(mut self, s: f64) -> Self {
        self.s_lightness = Some(s);
        self
    }

    #[must_use]
    pub const fn l(mut self, l: f64) -> Self {
        self.l = Some(l);
        self
    }
}

/// Partial HSV update for [`SuperColor::set_hsv`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HsvUpdate {
    pub h: Option<f64>,
    pub s_value: Option<f64>,
    pub v: Option<f64>,
}

impl HsvUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn h(mut self, h: f64) -> Self {
        self.h = Some(h);
        self
    }

    #[must_use]
    pub const fn s_value(mut self, s: f64) -> Self {
        self.s_value = Some(s);
        self
    }

    #[must_use]
    pub const fn v(mut self, v: f64) -> Self {
        self.v = Some(v);
        self
    }
}

/// A color that keeps RGB, HSL, HSV and alpha in sync.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperColor {
    r: f64,
    g: f64,
    b: f64,
    h: f64,
    s_lightness: f64,
    l: f64,
    s_value: f64,
    v: f64,
    a: f64,
    format: ColorFormat,
}

impl Default for SuperColor {
    /// Opaque black in hex format.
    fn default() -> Self {
        Self::from_attributes(ColorAttributes::default())
    }
}

impl SuperColor {
    /// Parse a color, falling back to opaque black on failure.
    ///
    /// The failure is reported through `log::warn!`. Use [`SuperColor::parse`]
    /// to get the error instead.
    #[must_use]
    pub fn new(color: &str) -> Self {
        Self::parse(color).unwrap_or_else(|err| {
            log::warn!("Color parsing did not work: {err}. Falling back to black.");
            Self::default()
        })
    }

    /// Parse a color string.
    ///
    /// See [`parse_color`] for the accepted syntaxes.
    ///
    /// # Errors
    ///
    /// - `Empty` if the string is empty or only whitespace
    /// - `Unrecognized` if no color syntax matches
    pub fn parse(color: &str) -> Result<Self, ColorParseError> {
        let trimmed = color.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }
        parse_color(trimmed)
            .map(Self::from_attributes)
            .ok_or_else(|| ColorParseError::Unrecognized(trimmed.to_string()))
    }

    /// Build a color from a complete record, copied verbatim.
    #[must_use]
    pub const fn from_attributes(attributes: ColorAttributes) -> Self {
        Self {
            r: attributes.r,
            g: attributes.g,
            b: attributes.b,
            h: attributes.h,
            s_lightness: attributes.s_lightness,
            l: attributes.l,
            s_value: attributes.s_value,
            v: attributes.v,
            a: attributes.a,
            format: attributes.format,
        }
    }

    /// The full canonical record.
    #[must_use]
    pub const fn attributes(&self) -> ColorAttributes {
        ColorAttributes {
            r: self.r,
            g: self.g,
            b: self.b,
            h: self.h,
            s_lightness: self.s_lightness,
            l: self.l,
            s_value: self.s_value,
            v: self.v,
            a: self.a,
            format: self.format,
        }
    }

    #[must_use]
    pub const fn r(&self) -> f64 {
        self.r
    }

    #[must_use]
    pub const fn g(&self) -> f64 {
        self.g
    }

    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    #[must_use]
    pub const fn h(&self) -> f64 {
        self.h
    }

    #[must_use]
    pub const fn s_lightness(&self) -> f64 {
        self.s_lightness
    }

    #[must_use]
    pub const fn l(&self) -> f64 {
        self.l
    }

    #[must_use]
    pub const fn s_value(&self) -> f64 {
        self.s_value
    }

    #[must_use]
    pub const fn v(&self) -> f64 {
        self.v
    }

    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Preferred rendering family.
    #[must_use]
    pub const fn format(&self) -> ColorFormat {
        self.format
    }

    pub fn set_format(&mut self, format: ColorFormat) {
        self.format = format;
    }

    /// Set alpha. No other channel depends on it.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.a = alpha;
    }

    /// Rotate the hue within the HSL model.
    ///
    /// Only red, green and blue are recomputed. HSV saturation and value keep
    /// their previous values.
    pub fn set_hue(&mut self, hue: f64) {
        let Rgb { r, g, b } = hsl_to_rgb(hue, self.s_lightness, self.l);
        self.r = r;
        self.g = g;
        self.b = b;
        self.h = hue;
    }

    /// Replace every channel, alpha included, from a hex literal.
    ///
    /// # Errors
    ///
    /// Returns [`HexFormatError`] for anything but `#` followed by 3, 4, 6 or 8
    /// hex digits. The color is left unchanged in that case.
    pub fn set_hex(&mut self, color: &str) -> Result<(), HexFormatError> {
        let Rgba { r, g, b, a } = hex_to_rgba(color)?;
        let HslHsv {
            h,
            s_lightness,
            l,
            s_value,
            v,
        } = rgb_to_hslsv(r, g, b);

        self.r = r;
        self.g = g;
        self.b = b;
        self.a = a;

        self.h = h;
        self.s_lightness = s_lightness;
        self.l = l;
        self.s_value = s_value;
        self.v = v;
        Ok(())
    }

    /// Merge the given RGB channels and re-derive HSL and HSV.
    pub fn set_rgb(&mut self, update: RgbUpdate) {
        let r = update.r.unwrap_or(self.r);
        let g = update.g.unwrap_or(self.g);
        let b = update.b.unwrap_or(self.b);
        let HslHsv {
            h,
            s_lightness,
            l,
            s_value,
            v,
        } = rgb_to_hslsv(r, g, b);

        self.r = r;
        self.g = g;
        self.b = b;

        self.h = h;
        self.s_lightness = s_lightness;
        self.l = l;
        self.s_value = s_value;
        self.v = v;
    }

    /// Merge the given HSL channels and re-derive RGB and HSV.
    pub fn set_hsl(&mut self, update: HslUpdate) {
        let h = update.h.unwrap_or(self.h);
        let s_lightness = update.s_lightness.unwrap_or(self.s_lightness);
        let l = update.l.unwrap_or(self.l);
        let RgbHsv {
            r,
            g,
            b,
            s_value,
            v,
        } = hsl_to_rgbsv(h, s_lightness, l);

        self.h = h;
        self.s_lightness = s_lightness;
        self.l = l;
        self.s_value = s_value;
        self.v = v;
        self.r = r;
        self.g = g;
        self.b = b;
    }

    /// Merge the given HSV channels and re-derive RGB and HSL.
    ///
    /// The merged hue is stored in `h` as well.
    pub fn set_hsv(&mut self, update: HsvUpdate) {
        let h = update.h.unwrap_or(self.h);
        let s_value = update.s_value.unwrap_or(self.s_value);
        let v = update.v.unwrap_or(self.v);
        let RgbHsl {
            r,
            g,
            b,
            s_lightness,
            l,
        } = hsv_to_rgbsl(h, s_value, v);

        self.h = h;
        self.s_value = s_value;
        self.v = v;

        self.r = r;
        self.g = g;
        self.b = b;
        self.s_lightness = s_lightness;
        self.l = l;
    }

    #[expect(clippy::float_cmp, reason = "alpha is omitted only when exactly 1")]
    fn is_opaque(&self) -> bool {
        self.a == 1.0
    }

    /// Render as hex, compressed where possible.
    ///
    /// - When every pair, alpha included, is a doubled digit (`aa`, `33`),
    ///   each pair collapses to one digit (`#a3f`).
    /// - An alpha made only of `f` is dropped.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut alpha = if self.is_opaque() {
            "ff".to_string()
        } else {
            hex_pair(round_int(self.a * 255.0))
        };
        let mut red = hex_pair(round_int(self.r));
        let mut green = hex_pair(round_int(self.g));
        let mut blue = hex_pair(round_int(self.b));

        let doubled = |pair: &str| {
            let bytes = pair.as_bytes();
            bytes[0] == bytes[1]
        };
        if [&alpha, &red, &green, &blue].iter().all(|pair| doubled(pair.as_str())) {
            for pair in [&mut alpha, &mut red, &mut green, &mut blue] {
                pair.truncate(1);
            }
        }

        if alpha.bytes().all(|c| c == b'f') {
            alpha.clear();
        }

        format!("#{red}{green}{blue}{alpha}")
    }

    /// Rounded RGBA record.
    #[must_use]
    pub fn to_rgba(&self) -> Rgba {
        Rgba {
            r: whole(self.r),
            g: whole(self.g),
            b: whole(self.b),
            a: round2(self.a),
        }
    }

    /// `rgb(r, g, b)`, or `rgba(r, g, b, a)` when alpha is not exactly 1.
    #[must_use]
    pub fn to_rgba_string(&self) -> String {
        let (r, g, b) = (round_int(self.r), round_int(self.g), round_int(self.b));
        if self.is_opaque() {
            format!("rgb({r}, {g}, {b})")
        } else {
            format!("rgba({r}, {g}, {b}, {})", js_number(round2(self.a)))
        }
    }

    /// Rounded HSLA record.
    #[must_use]
    pub fn to_hsla(&self) -> Hsla {
        Hsla {
            h: whole(self.h),
            s_lightness: round2(self.s_lightness),
            l: round2(self.l),
            a: round2(self.a),
        }
    }

    /// `hsl(Hdeg, S%, L%)`, or `hsla(Hdeg, S%, L%, a)` when alpha is not
    /// exactly 1.
    #[must_use]
    pub fn to_hsla_string(&self) -> String {
        let h = round_int(self.h);
        let s = round_int(self.s_lightness * 100.0);
        let l = round_int(self.l * 100.0);
        if self.is_opaque() {
            format!("hsl({h}deg, {s}%, {l}%)")
        } else {
            format!("hsla({h}deg, {s}%, {l}%, {})", js_number(round2(self.a)))
        }
    }

    /// Rounded HSVA record.
    #[must_use]
    pub fn to_hsva(&self) -> Hsva {
        Hsva {
            h: whole(self.h),
            s_value: round2(self.s_value),
            v: round2(self.v),
            a: round2(self.a),
        }
    }

    /// `hsv(Hdeg, S%, V%)`, or `hsva(Hdeg, S%, V%, a)` when alpha is not
    /// exactly 1.
    #[must_use]
    pub fn to_hsva_string(&self) -> String {
        let h = round_int(self.h);
        let s = round_int(self.s_value * 100.0);
        let v = round_int(self.v * 100.0);
        if self.is_opaque() {
            format!("hsv({h}deg, {s}%, {v}%)")
        } else {
            format!("hsva({h}deg, {s}%, {v}%, {})", js_number(round2(self.a)))
        }
    }

    /// Render in the preferred format.
    ///
    /// When `prefer_name` is true and the hex form is a named color, the name
    /// is returned instead.
    #[must_use]
    pub fn to_string_with(&self, prefer_name: bool) -> String {
        let hex = self.to_hex();

        if prefer_name && let Some(name) = names::hex_to_name(&hex) {
            return name.to_string();
        }

        match self.format {
            ColorFormat::Hex => hex,
            ColorFormat::Rgb => self.to_rgba_string(),
            ColorFormat::Hsl => self.to_hsla_string(),
            ColorFormat::Hsv => self.to_hsva_string(),
        }
    }
}

fn whole(x: f64) -> f64 {
    #[expect(clippy::cast_precision_loss, reason = "rounded channel values are small")]
    let value = round_int(x) as f64;
    value
}

/// Lowercase hex, zero-padded to two digits. Negative values keep a leading
/// `-`.
fn hex_pair(value: i64) -> String {
    let digits = if value < 0 {
        format!("-{:x}", value.unsigned_abs())
    } else {
        format!("{value:x}")
    };
    if digits.len() == 1 {
        format!("0{digits}")
    } else {
        digits
    }
}

impl fmt::Display for SuperColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(true))
    }
}

impl FromStr for SuperColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SuperColor {
    type Error = ColorParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for SuperColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl From<ColorAttributes> for SuperColor {
    fn from(attributes: ColorAttributes) -> Self {
        Self::from_attributes(attributes)
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    Unrecognized(String),
    UnknownFormat(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty color string"),
            Self::Unrecognized(s) => write!(f, "Unrecognized color: {s}"),
            Self::UnknownFormat(s) => write!(f, "Unknown color format: {s}"),
        }
    }
}

impl std::error::Error for ColorParseError {}
