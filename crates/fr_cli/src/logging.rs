// crates/fr_cli/src/logging.rs
//
// stderr-only tracing setup. stdout carries results exclusively.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive; wins over flags.
pub const LOG_ENV: &str = "FR_LOG";

/// Default filter directive for the given `--quiet` / `-v` combination.
pub fn default_directive(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Pick the filter: a valid `FR_LOG` value wins, otherwise the flag level.
/// An unparsable `FR_LOG` yields the parse error alongside the fallback.
pub fn resolve_filter(env: Option<&str>, quiet: bool, verbose: u8) -> (EnvFilter, Option<String>) {
    let fallback = || EnvFilter::new(default_directive(quiet, verbose));
    match env {
        Some(directive) => match EnvFilter::try_new(directive) {
            Ok(filter) => (filter, None),
            Err(e) => (fallback(), Some(format!("ignoring {LOG_ENV}={directive:?}: {e}"))),
        },
        None => (fallback(), None),
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(quiet: bool, verbose: u8) {
    let env = std::env::var(LOG_ENV).ok();
    let (filter, rejected) = resolve_filter(env.as_deref(), quiet, verbose);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
    if let Some(msg) = rejected {
        eprintln!("fr: warning: {msg}");
    }
}
