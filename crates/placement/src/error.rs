//! Error types for planning and applying a placement.

use std::result;

use thiserror::Error;

/// Convenient result type for placement operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while planning or applying a placement.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The caller supplied something other than exactly four offsets.
    #[error("expected 4 frame offsets, got {0}")]
    InvalidArgumentCount(usize),

    /// An offset token did not parse to a finite number.
    #[error("offset {index} is not a number: '{token}'")]
    InvalidOffset {
        /// Zero-based position of the offending token.
        index: usize,
        /// The raw token as supplied.
        token: String,
    },

    /// Three or more offsets are zero, so at least one axis has zero extent.
    #[error("window dimension is zero in at least one axis")]
    DegenerateOffsets,

    /// No application currently owns focus.
    #[error("unable to get frontmost application")]
    NoFocusedApplication,

    /// The focused application has no window flagged as main.
    #[error("unable to get a main window, does one exist for this app?")]
    NoMainWindow,

    /// The main window's frame could not be read.
    #[error("unable to get main window frame: {0}")]
    UnreadableFrame(String),

    /// Display enumeration returned no primary display.
    #[error("no displays available")]
    NoDisplays,

    /// Accessibility permission is required but not granted.
    #[error("Accessibility permission missing")]
    Permission,

    /// The backend must run on the main thread.
    #[error("operation requires main thread")]
    MainThread,

    /// Setting a window attribute failed. Absorbed by the apply step.
    #[error("failed to set {attr}: {reason}")]
    Mutation {
        /// Attribute name (`position` or `size`).
        attr: &'static str,
        /// Backend-provided failure description.
        reason: String,
    },
}

impl Error {
    /// True for errors caused by bad offsets, where the usage text helps.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgumentCount(_) | Self::InvalidOffset { .. } | Self::DegenerateOffsets
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_are_offset_errors_only() {
        assert!(Error::InvalidArgumentCount(2).is_usage());
        assert!(Error::DegenerateOffsets.is_usage());
        assert!(
            Error::InvalidOffset {
                index: 0,
                token: "x".into()
            }
            .is_usage()
        );
        assert!(!Error::NoMainWindow.is_usage());
        assert!(!Error::UnreadableFrame("gone".into()).is_usage());
    }

    #[test]
    fn messages_render() {
        assert_eq!(
            Error::InvalidArgumentCount(3).to_string(),
            "expected 4 frame offsets, got 3"
        );
        assert_eq!(
            Error::Mutation {
                attr: "size",
                reason: "AX operation failed: code -25200".into()
            }
            .to_string(),
            "failed to set size: AX operation failed: code -25200"
        );
    }
}
