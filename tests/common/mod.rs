//! Shared setup for the integration tests.
//!
//! The library logs through `log`. The subscriber installed here bridges those
//! records into tracing (the `tracing-log` default feature of
//! `tracing-subscriber`), so they show up next to the test's own events.
//!
//! - `RUST_LOG=super_color::parse=trace` shows parse cache hits
//! - `TEST_LOG_JSON=1` switches to JSON lines for CI

#![allow(dead_code)]

pub mod assertions;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Install the test subscriber once per test binary.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("super_color=debug,info"));
        let registry = tracing_subscriber::registry().with(filter);

        if std::env::var("TEST_LOG_JSON").is_ok() {
            registry
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_file(true)
                        .with_line_number(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}
