//! A compact line logger for the `log` facade.
//!
//! The library itself only emits through `log` macros (`warn!` when
//! [`SuperColor::new`](crate::SuperColor::new) falls back to black, `debug!`
//! on parse misses, `trace!` on cache hits). [`ColorLogger`] is an optional
//! sink for applications that want to see those records without pulling in a
//! full logging stack.
//!
//! Optional tracing integration is available via `ColorTracingLayer` when the
//! `tracing` feature is enabled.

use std::io::{self, Write};
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::sync::lock_recover;

const DEFAULT_TIME_FORMAT: &str = "[hour]:[minute]:[second]";

/// Line-oriented logger for the `log` crate.
///
/// Each record becomes one line: an optional timestamp, the padded level,
/// the message and optionally the target in parentheses.
///
/// ```text
/// 12:04:31 WARN     Color parsing did not work: Unrecognized color: bogus. Falling back to black.
/// ```
///
/// # Thread Safety
///
/// The sink and the last printed timestamp are behind mutexes with poison
/// recovery, so records from several threads never interleave within a line.
pub struct ColorLogger {
    level: LevelFilter,
    show_time: bool,
    omit_repeated_times: bool,
    show_level: bool,
    show_target: bool,
    time_format: OwnedFormatItem,
    last_time: Mutex<Option<String>>,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Default for ColorLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorLogger {
    /// Create a logger writing to stderr at `Info` level.
    #[must_use]
    pub fn new() -> Self {
        let time_format = time::format_description::parse_owned::<2>(DEFAULT_TIME_FORMAT)
            .unwrap_or_else(|_| OwnedFormatItem::Literal(Vec::<u8>::new().into_boxed_slice()));
        Self {
            level: LevelFilter::Info,
            show_time: true,
            omit_repeated_times: true,
            show_level: true,
            show_target: false,
            time_format,
            last_time: Mutex::new(None),
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Blank out a timestamp equal to the previous one.
    #[must_use]
    pub fn omit_repeated_times(mut self, omit: bool) -> Self {
        self.omit_repeated_times = omit;
        self
    }

    /// Enable or disable the level column.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Append the record target (usually the module path).
    #[must_use]
    pub fn show_target(mut self, show: bool) -> Self {
        self.show_target = show;
        self
    }

    /// Override the time format (a `time` format description such as
    /// `"[hour]:[minute]:[second]"`). Invalid descriptions are ignored.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Send output to `writer` instead of stderr.
    #[must_use]
    pub fn with_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Mutex::new(Box::new(writer));
        self
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Fails if a global logger was already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            let time_str = self.format_time();
            let display = if self.omit_repeated_times {
                let mut last = lock_recover(&self.last_time);
                if last.as_ref() == Some(&time_str) {
                    " ".repeat(time_str.len())
                } else {
                    *last = Some(time_str.clone());
                    time_str
                }
            } else {
                time_str
            };
            line.push_str(&display);
            line.push(' ');
        }

        if self.show_level {
            line.push_str(&format!("{:<8} ", record.level()));
        }

        line.push_str(&record.args().to_string());

        if self.show_target && !record.target().is_empty() {
            line.push_str(&format!(" ({})", record.target()));
        }

        line
    }

    fn write_line(&self, line: &str) {
        let mut writer = lock_recover(&self.writer);
        let _ = writeln!(writer, "{line}");
    }
}

impl Log for ColorLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record);
        self.write_line(&line);
    }

    fn flush(&self) {
        let _ = lock_recover(&self.writer).flush();
    }
}

#[cfg(feature = "tracing")]
mod tracing_integration {
    use super::ColorLogger;
    use log::{Level, Log};
    use std::fmt::Debug;

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level as TracingLevel, Subscriber};
    use tracing_subscriber::{Layer, layer::Context};

    /// Tracing layer that formats events with a [`ColorLogger`].
    pub struct ColorTracingLayer {
        logger: ColorLogger,
    }

    impl Default for ColorTracingLayer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ColorTracingLayer {
        /// Create a layer backed by a default `ColorLogger`.
        #[must_use]
        pub fn new() -> Self {
            Self {
                logger: ColorLogger::new(),
            }
        }

        /// Use an existing logger configuration.
        #[must_use]
        pub fn with_logger(logger: ColorLogger) -> Self {
            Self { logger }
        }

        /// Install as the global tracing subscriber.
        ///
        /// # Errors
        ///
        /// Fails if a global subscriber was already set.
        pub fn init(self) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
            use tracing_subscriber::prelude::*;

            let subscriber = tracing_subscriber::registry().with(self);
            tracing::subscriber::set_global_default(subscriber)
        }
    }

    #[derive(Default)]
    struct EventVisitor {
        message: Option<String>,
        fields: Vec<(String, String)>,
    }

    impl Visit for EventVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
            let rendered = format!("{value:?}");
            let rendered = strip_quotes(&rendered).to_string();
            if field.name() == "message" {
                self.message = Some(rendered);
            } else {
                self.fields.push((field.name().to_string(), rendered));
            }
        }
    }

    impl EventVisitor {
        fn into_message(self) -> String {
            let mut message = self.message.unwrap_or_default();
            if !self.fields.is_empty() {
                let extra = self
                    .fields
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                if message.is_empty() {
                    message = extra;
                } else {
                    message.push(' ');
                    message.push_str(&extra);
                }
            }
            message
        }
    }

    impl<S> Layer<S> for ColorTracingLayer
    where
        S: Subscriber,
    {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let metadata = event.metadata();
            let mut visitor = EventVisitor::default();
            event.record(&mut visitor);
            let message = visitor.into_message();

            let message_ref = message.as_str();
            let args = format_args!("{message_ref}");
            let record = log::Record::builder()
                .args(args)
                .level(map_tracing_level(*metadata.level()))
                .target(metadata.target())
                .file(metadata.file())
                .line(metadata.line())
                .module_path(metadata.module_path())
                .build();

            self.logger.log(&record);
        }
    }

    fn map_tracing_level(level: TracingLevel) -> Level {
        match level {
            TracingLevel::TRACE => Level::Trace,
            TracingLevel::DEBUG => Level::Debug,
            TracingLevel::INFO => Level::Info,
            TracingLevel::WARN => Level::Warn,
            TracingLevel::ERROR => Level::Error,
        }
    }

    fn strip_quotes(value: &str) -> &str {
        if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            &value[1..value.len() - 1]
        } else {
            value
        }
    }

}

#[cfg(feature = "tracing")]
pub use tracing_integration::ColorTracingLayer;
