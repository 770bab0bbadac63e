// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Logging setup for the binary.
//!
//! `LIGHTCAP_LOG` takes an `EnvFilter` directive (`debug`, `lightcap=trace`,
//! ...). Without it the level comes from `-v`, and defaults to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "LIGHTCAP_LOG";

/// Filter directive for `-v` occurrences.
pub fn verbosity_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `LIGHTCAP_LOG` if set and valid, else the `-v` level.
pub fn env_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbose)))
}

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .try_init();
}
