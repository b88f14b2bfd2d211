//! Tracing subscriber setup.

use std::{env, io::IsTerminal};

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

/// Initialize the global tracing subscriber for structured logging.
///
/// Output goes to stderr so stdout carries only the startup notice.
///
/// - Color: `FORCE_COLOR=1|true|yes` forces on, `0|false|no` forces off,
///   anything else auto-detects a TTY on stderr
/// - Span events from `AXUM_SPAN_EVENTS`: `"full"`, `"enter_exit"`,
///   otherwise CLOSE only
/// - Level from `RUST_LOG` if set, else `AXUM_LOG_LEVEL` (default `debug`)
///
/// Call once at startup, before any tracing macros.
pub fn init_tracing() {
    // ---
    let span_events = match env::var("AXUM_SPAN_EVENTS").as_deref() {
        Ok("full") => FmtSpan::FULL,
        Ok("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    };

    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => std::io::stderr().is_terminal(),
    };

    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level_directive(env::var("AXUM_LOG_LEVEL").ok().as_deref()))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}

/// Map `AXUM_LOG_LEVEL` to a filter directive; unknown values fall back to `debug`.
fn level_directive(level: Option<&str>) -> String {
    // ---
    let level = match level {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("info") => "info",
        Some("warn") => "warn",
        Some("error") => "error",
        _ => "debug",
    };
    // hyper's connection-level chatter is noise at debug
    format!("{level},hyper=info")
}
