//! # super_color
//!
//! A color value object that keeps RGB, HSL, HSV and alpha in sync, parses
//! CSS-like color strings and serializes back to them.
//!
//! ## Quick Start
//!
//! ```rust
//! use super_color::prelude::*;
//!
//! let mut color = SuperColor::parse("hsl(200deg, 50%, 40%)").unwrap();
//! color.set_rgb(RgbUpdate::new().r(255.0));
//! color.set_alpha(0.5);
//!
//! println!("{}", color.to_hex());
//! println!("{}", color.to_rgba_string());
//! ```
//!
//! ## Core Concepts
//!
//! - **SuperColor**: The mutable value object, all spaces kept consistent
//! - **ColorAttributes**: The canonical record of every channel at once
//! - **ColorFormat**: Which textual family a color prefers to render as
//! - **parse_color**: String to record, cached, `None` when nothing matches
//! - **convert**: Pure conversions between RGB, HSL, HSV and hex
//!
//! ## Logging
//!
//! The crate emits through the [`log`] facade. [`logging::ColorLogger`] is a
//! small sink for applications without their own logger. With the `tracing`
//! feature, `logging::ColorTracingLayer` bridges tracing events into it.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod convert;
pub mod logging;
pub mod names;
pub mod parse;
pub mod sync;
pub mod utils;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{
        ColorAttributes, ColorFormat, ColorParseError, HslUpdate, HsvUpdate, RgbUpdate,
        SuperColor,
    };
    pub use crate::convert::{HexFormatError, Hsla, Hsva, Rgba};
    pub use crate::parse::parse_color;
}

// Re-export key types at crate root
pub use color::{
    ColorAttributes, ColorFormat, ColorParseError, HslUpdate, HsvUpdate, RgbUpdate, SuperColor,
};
pub use convert::HexFormatError;
pub use parse::parse_color;
