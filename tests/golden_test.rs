//! Golden (snapshot) tests for the string outputs.
//!
//! Serialized strings are part of the public contract, so every formatter
//! family is pinned here with inline `insta` snapshots.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test golden_test
//!
//! # Update snapshots when intentional changes are made
//! cargo insta test --accept
//! ```

mod common;

use common::init_test_logging;
use super_color::prelude::*;

// =============================================================================
// Hex
// =============================================================================

#[test]
fn golden_hex_shorthand() {
    init_test_logging();
    insta::assert_snapshot!(SuperColor::new("red").to_hex(), @"#f00");
    insta::assert_snapshot!(SuperColor::new("rgb(170, 170, 170)").to_hex(), @"#aaa");
}

#[test]
fn golden_hex_full() {
    init_test_logging();
    insta::assert_snapshot!(SuperColor::new("rgb(18, 52, 86)").to_hex(), @"#123456");
}

#[test]
fn golden_hex_with_alpha() {
    init_test_logging();
    insta::assert_snapshot!(SuperColor::new("rgba(255, 0, 0, 0.5)").to_hex(), @"#ff000080");
    insta::assert_snapshot!(SuperColor::new("#f008").to_hex(), @"#f008");
    insta::assert_snapshot!(SuperColor::new("transparent").to_hex(), @"#0000");
}

// =============================================================================
// Functional notations
// =============================================================================

#[test]
fn golden_rgba_strings() {
    init_test_logging();
    insta::assert_snapshot!(SuperColor::new("hsl(120, 100%, 25%)").to_rgba_string(), @"rgb(0, 128, 0)");
    insta::assert_snapshot!(SuperColor::new("rgba(0, 0, 0, 0.333)").to_rgba_string(), @"rgba(0, 0, 0, 0.33)");
}

#[test]
fn golden_hsla_strings() {
    init_test_logging();
    insta::assert_snapshot!(SuperColor::new("#336699").to_hsla_string(), @"hsl(210deg, 50%, 40%)");
    insta::assert_snapshot!(
        SuperColor::new("hsla(0, 100%, 50%, 0.25)").to_string_with(false),
        @"hsla(0deg, 100%, 50%, 0.25)"
    );
}

#[test]
fn golden_hsva_strings() {
    init_test_logging();
    insta::assert_snapshot!(SuperColor::new("#336699").to_hsva_string(), @"hsv(210deg, 67%, 60%)");
    insta::assert_snapshot!(
        SuperColor::new("hsva(90, 50%, 50%, 0.1)").to_hsva_string(),
        @"hsva(90deg, 50%, 50%, 0.1)"
    );
}

// =============================================================================
// Display and names
// =============================================================================

#[test]
fn golden_display_prefers_names() {
    init_test_logging();
    insta::assert_snapshot!(SuperColor::new("hsl(120, 100%, 25%)"), @"green");
    insta::assert_snapshot!(SuperColor::new("#0ff"), @"cyan");
    insta::assert_snapshot!(SuperColor::new("rgb(128, 128, 128)"), @"grey");
    insta::assert_snapshot!(SuperColor::new("hsv(240, 100%, 100%)"), @"blue");
    insta::assert_snapshot!(SuperColor::new("#639"), @"rebeccapurple");
}

#[test]
fn golden_display_without_name_uses_format() {
    init_test_logging();
    insta::assert_snapshot!(SuperColor::new("#123456"), @"#123456");
    insta::assert_snapshot!(SuperColor::new("rgb(1, 2, 3)"), @"rgb(1, 2, 3)");
    insta::assert_snapshot!(SuperColor::new("hsl(210, 50%, 40%)"), @"hsl(210deg, 50%, 40%)");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn golden_error_messages() {
    init_test_logging();
    let mut color = SuperColor::default();

    let err = color.set_hex("#12").unwrap_err();
    insta::assert_snapshot!(err, @"Hex color must have 3, 4, 6 or 8 digits, got 2: #12");

    let err = color.set_hex("123").unwrap_err();
    insta::assert_snapshot!(err, @"Hex color must start with '#': 123");

    let err = SuperColor::parse("bogus").unwrap_err();
    insta::assert_snapshot!(err, @"Unrecognized color: bogus");

    let err = SuperColor::parse("").unwrap_err();
    insta::assert_snapshot!(err, @"Empty color string");
}
