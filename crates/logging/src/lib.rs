#![warn(missing_docs)]

//! Shared logging CLI arguments and tracing filter helpers for the moveme
//! workspace.

use std::env;

use clap::Args;
use tracing_subscriber::EnvFilter;

/// Logging controls for CLI apps.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Set global log level to trace (our crates only)
    #[arg(long, conflicts_with_all = ["debug", "log_level", "log_filter"])]
    pub trace: bool,

    /// Set global log level to debug (our crates only)
    #[arg(long, conflicts_with_all = ["trace", "log_level", "log_filter"])]
    pub debug: bool,

    /// Set a single global log level for our crates (error|warn|info|debug|trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Set an explicit tracing filter directive (overrides other flags)
    /// e.g. "placement=trace,mac_winops=debug"
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl LogArgs {
    /// Filter spec for these flags, falling back to `RUST_LOG` and then to
    /// `default_level` for our crates.
    pub fn spec(&self, default_level: &str) -> String {
        compute_spec(
            self.trace,
            self.debug,
            self.log_level.as_deref(),
            self.log_filter.as_deref(),
            env::var("RUST_LOG").ok().as_deref(),
            default_level,
        )
    }
}

/// List of crate targets that constitute "our" logs.
pub fn our_crates() -> &'static [&'static str] {
    &["moveme", "placement", "mac_winops", "logging"]
}

/// Build a filter directive string that sets the same `level` for all of our crates.
pub fn level_spec_for(level: &str) -> String {
    let lvl = level.to_ascii_lowercase();
    our_crates()
        .iter()
        .map(|t| format!("{}={}", t, lvl))
        .collect::<Vec<_>>()
        .join(",")
}

/// Compute the final filter spec string with precedence:
/// - `log_filter`
/// - `trace`/`debug`/`log_level` (crate-scoped)
/// - `rust_log` (the `RUST_LOG` value, if any)
/// - crate-scoped `default_level`
pub fn compute_spec(
    trace: bool,
    debug: bool,
    log_level: Option<&str>,
    log_filter: Option<&str>,
    rust_log: Option<&str>,
    default_level: &str,
) -> String {
    if let Some(spec) = log_filter {
        return spec.to_string();
    }
    if trace {
        return level_spec_for("trace");
    }
    if debug {
        return level_spec_for("debug");
    }
    if let Some(lvl) = log_level {
        return level_spec_for(lvl);
    }
    match rust_log {
        Some(spec) if !spec.trim().is_empty() => spec.to_string(),
        _ => level_spec_for(default_level),
    }
}

/// Create an `EnvFilter` from a spec string.
pub fn env_filter_from_spec(spec: &str) -> EnvFilter {
    EnvFilter::new(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let s = compute_spec(true, false, Some("info"), Some("x=trace"), Some("y=debug"), "warn");
        assert_eq!(s, "x=trace");
    }

    #[test]
    fn flags_scope_to_our_crates() {
        assert_eq!(
            compute_spec(false, true, None, None, Some("y=info"), "warn"),
            "moveme=debug,placement=debug,mac_winops=debug,logging=debug"
        );
        assert_eq!(
            compute_spec(false, false, Some("ERROR"), None, None, "warn"),
            level_spec_for("error")
        );
    }

    #[test]
    fn rust_log_then_default() {
        assert_eq!(
            compute_spec(false, false, None, None, Some("placement=trace"), "warn"),
            "placement=trace"
        );
        assert_eq!(
            compute_spec(false, false, None, None, Some("  "), "warn"),
            level_spec_for("warn")
        );
        assert_eq!(
            compute_spec(false, false, None, None, None, "warn"),
            level_spec_for("warn")
        );
    }
}
