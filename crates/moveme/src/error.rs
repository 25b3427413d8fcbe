//! Error handling for the moveme binary.

use std::result;

use thiserror::Error;

/// Convenient result type for moveme operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that end a moveme run.
#[derive(Debug, Error)]
pub enum Error {
    /// Planning, lookup or validation failure.
    #[error(transparent)]
    Placement(#[from] placement::Error),
    /// No window backend exists for this platform.
    #[error("moving windows is only supported on macOS")]
    Unsupported,
}

#[cfg(target_os = "macos")]
impl From<mac_winops::Error> for Error {
    fn from(err: mac_winops::Error) -> Self {
        Self::Placement(err.into())
    }
}

impl Error {
    /// True when the usage text should follow the message.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Placement(e) if e.is_usage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_messages_pass_through() {
        let err = Error::from(placement::Error::InvalidArgumentCount(3));
        assert_eq!(err.to_string(), "expected 4 frame offsets, got 3");
        assert!(err.is_usage());
        assert!(!Error::Unsupported.is_usage());
        assert!(!Error::from(placement::Error::NoMainWindow).is_usage());
    }
}
