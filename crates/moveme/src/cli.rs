//! Command-line interface definitions for moveme.

use clap::Parser;
use logging::LogArgs;

/// Command-line interface for the `moveme` binary.
#[derive(Parser, Debug)]
#[command(
    name = "moveme",
    about = "Move and resize the focused window to % offsets of its display",
    version,
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Logging controls shared across moveme crates.
    #[command(flatten)]
    pub log: LogArgs,

    /// Compute and print the target frame without moving the window.
    #[arg(long)]
    pub dry_run: bool,

    /// Offsets `x1 y1 x2 y2` as percentages of the display's usable area.
    /// `x1 y1` is the lower left corner, `x2 y2` the top right.
    #[arg(value_name = "OFFSET")]
    pub offsets: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_negative_offsets() {
        let cli = Cli::try_parse_from(["moveme", "-10", "0", "90", "-5.5"]).unwrap();
        assert_eq!(cli.offsets, ["-10", "0", "90", "-5.5"]);
        assert!(!cli.dry_run);
    }

    #[test]
    fn count_is_not_enforced_by_clap() {
        let cli = Cli::try_parse_from(["moveme", "10", "10"]).unwrap();
        assert_eq!(cli.offsets.len(), 2);
        let cli = Cli::try_parse_from(["moveme"]).unwrap();
        assert!(cli.offsets.is_empty());
    }

    #[test]
    fn flags_mix_with_offsets() {
        let cli =
            Cli::try_parse_from(["moveme", "--dry-run", "--debug", "10", "10", "90", "90"]).unwrap();
        assert!(cli.dry_run);
        assert!(cli.log.debug);
        assert_eq!(cli.offsets.len(), 4);
    }

    #[test]
    fn log_flags_conflict() {
        assert!(Cli::try_parse_from(["moveme", "--trace", "--debug", "1", "1", "2", "2"]).is_err());
    }
}
