//! Logged assertion helpers.
//!
//! Each helper records what it checked at debug level and the mismatch at
//! error level, so a failing run under `RUST_LOG=debug` shows the values that
//! led up to it.

#![allow(dead_code)]

use std::fmt::Debug;

use super_color::SuperColor;

#[track_caller]
fn fail(context: &str, message: &str) -> ! {
    tracing::error!(context = context, "{message}");
    panic!("{context}: {message}");
}

/// Assert equality, logging both sides.
#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(context = context, actual = ?actual, expected = ?expected, "eq");
    if actual != expected {
        fail(context, &format!("expected {expected:?}, got {actual:?}"));
    }
}

#[track_caller]
pub fn assert_true_logged(context: &str, value: bool) {
    tracing::debug!(context = context, value = value, "true");
    if !value {
        fail(context, "expected true, got false");
    }
}

#[track_caller]
pub fn assert_false_logged(context: &str, value: bool) {
    tracing::debug!(context = context, value = value, "false");
    if value {
        fail(context, "expected false, got true");
    }
}

/// Unwrap an `Ok`, failing with the error otherwise.
#[track_caller]
pub fn assert_ok_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> T {
    tracing::debug!(context = context, result = ?result, "ok");
    match result {
        Ok(value) => value,
        Err(e) => fail(context, &format!("expected Ok, got Err({e:?})")),
    }
}

/// Unwrap an `Err`, failing with the value otherwise.
#[track_caller]
pub fn assert_err_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> E {
    tracing::debug!(context = context, result = ?result, "err");
    match result {
        Err(e) => e,
        Ok(value) => fail(context, &format!("expected Err, got Ok({value:?})")),
    }
}

#[track_caller]
pub fn assert_some_logged<T: Debug>(context: &str, option: Option<T>) -> T {
    tracing::debug!(context = context, option = ?option, "some");
    match option {
        Some(value) => value,
        None => fail(context, "expected Some, got None"),
    }
}

#[track_caller]
pub fn assert_none_logged<T: Debug>(context: &str, option: Option<T>) {
    tracing::debug!(context = context, option = ?option, "none");
    if let Some(value) = option {
        fail(context, &format!("expected None, got Some({value:?})"));
    }
}

#[track_caller]
pub fn assert_contains_logged(context: &str, haystack: &str, needle: &str) {
    tracing::debug!(context = context, haystack = haystack, needle = needle, "contains");
    if !haystack.contains(needle) {
        fail(context, &format!("{haystack:?} does not contain {needle:?}"));
    }
}

/// Assert red, green and blue of `color`, each within `epsilon`.
#[track_caller]
pub fn assert_rgb_logged(context: &str, color: &SuperColor, expected: (f64, f64, f64), epsilon: f64) {
    let actual = (color.r(), color.g(), color.b());
    tracing::debug!(context = context, actual = ?actual, expected = ?expected, "rgb");
    let within = |a: f64, b: f64| (a - b).abs() <= epsilon;
    if !(within(actual.0, expected.0) && within(actual.1, expected.1) && within(actual.2, expected.2)) {
        fail(
            context,
            &format!("expected rgb {expected:?} (within {epsilon}), got {actual:?}"),
        );
    }
}

/// Assert one fractional channel within `epsilon`.
#[track_caller]
pub fn assert_close_logged(context: &str, actual: f64, expected: f64, epsilon: f64) {
    tracing::debug!(context = context, actual = actual, expected = expected, "close");
    if (actual - expected).abs() > epsilon {
        fail(context, &format!("expected {expected} (within {epsilon}), got {actual}"));
    }
}
