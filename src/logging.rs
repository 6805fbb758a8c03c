// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Logging setup shared by the binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging to stderr.
///
/// `RUST_LOG` overrides the default filter. `LOG_FORMAT=json` switches to
/// flattened structured JSON.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("strava_mileage=debug,info"));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        let format = tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .with_current_span(true)
            .flatten_event(true)
            .with_writer(std::io::stderr);
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(format)
            .try_init();
    } else {
        let format = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(format)
            .try_init();
    }
}
