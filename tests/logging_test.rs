//! Integration tests for the library's log output through `ColorLogger`.
//!
//! A `log` logger can be installed once per process, so every test shares one
//! `ColorLogger` writing into an in-memory buffer and runs serially.
//!
//! Run with: cargo test --test logging_test -- --nocapture

mod common;

use std::io::{self, Write};
use std::sync::{Arc, LazyLock, Mutex, Once};

use common::assertions::{
    assert_contains_logged, assert_eq_logged, assert_err_logged, assert_false_logged,
    assert_none_logged, assert_true_logged,
};
use log::LevelFilter;
use serial_test::serial;
use super_color::logging::ColorLogger;
use super_color::prelude::*;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.lock().unwrap());
        String::from_utf8(bytes).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

static BUFFER: LazyLock<SharedBuffer> = LazyLock::new(SharedBuffer::default);
static INIT: Once = Once::new();

/// Install the shared logger and discard anything logged so far.
fn capture() -> &'static SharedBuffer {
    INIT.call_once(|| {
        ColorLogger::new()
            .level(LevelFilter::Trace)
            .show_time(false)
            .show_target(true)
            .with_writer(BUFFER.clone())
            .init()
            .unwrap();
    });
    BUFFER.take();
    &BUFFER
}

fn lines_at(output: &str, level: &str) -> usize {
    output.lines().filter(|line| line.starts_with(level)).count()
}

#[test]
#[serial]
fn test_fallback_constructor_warns_once() {
    let buffer = capture();

    let color = SuperColor::new("definitely-bogus");
    let output = buffer.take();

    assert_eq_logged("fallback is black", color.to_hex(), "#000".to_string());
    assert_eq_logged("warning count", lines_at(&output, "WARN"), 1);
    assert_contains_logged(
        "warning text",
        &output,
        "WARN     Color parsing did not work: Unrecognized color: definitely-bogus. Falling back to black. (super_color::color)",
    );
}

#[test]
#[serial]
fn test_blank_input_warns_with_empty_error() {
    let buffer = capture();

    let _ = SuperColor::new("   ");
    let output = buffer.take();

    assert_contains_logged("empty warning", &output, "Empty color string");
}

#[test]
#[serial]
fn test_strict_parse_does_not_warn() {
    let buffer = capture();

    let err = assert_err_logged("strict parse", SuperColor::parse("also-bogus"));
    let output = buffer.take();

    assert_eq_logged(
        "error",
        err,
        ColorParseError::Unrecognized("also-bogus".to_string()),
    );
    assert_eq_logged("warning count", lines_at(&output, "WARN"), 0);
}

#[test]
#[serial]
fn test_parse_miss_logs_debug() {
    let buffer = capture();

    assert_none_logged("miss", parse_color("zzz-not-a-color"));
    let output = buffer.take();

    assert_contains_logged(
        "debug line",
        &output,
        "DEBUG    no color syntax matched \"zzz-not-a-color\" (super_color::parse)",
    );
}

#[test]
#[serial]
fn test_parse_cache_hit_logs_trace() {
    let buffer = capture();

    let first = parse_color("hsl(17, 23%, 31%)");
    let after_first = buffer.take();
    let second = parse_color("  HSL(17, 23%, 31%)");
    let after_second = buffer.take();

    assert_eq_logged("same result", first, second);
    assert_false_logged("first is a miss", after_first.contains("parse cache hit"));
    assert_true_logged("second is a hit", after_second.contains("TRACE    parse cache hit"));
}

#[test]
#[serial]
fn test_successful_parse_is_quiet_above_trace() {
    let buffer = capture();

    let _ = SuperColor::new("rgb(1, 2, 3)");
    let output = buffer.take();

    assert_eq_logged("warnings", lines_at(&output, "WARN"), 0);
    assert_eq_logged("debug lines", lines_at(&output, "DEBUG"), 0);
}
