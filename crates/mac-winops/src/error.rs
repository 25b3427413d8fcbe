use thiserror::Error;

/// Errors that can occur during window operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Accessibility permission is required but not granted.
    #[error("Accessibility permission missing")]
    Permission,

    /// Failed to create an Accessibility API application element.
    #[error("Failed to create AX application element")]
    AppElement,

    /// No application is frontmost.
    #[error("No frontmost application")]
    NoFrontmostApp,

    /// The frontmost application has no window flagged AXMain.
    #[error("No main window for pid {0}")]
    NoMainWindow(i32),

    /// An Accessibility API operation failed with the given error code.
    #[error("AX operation failed: code {0}")]
    AxCode(i32),

    /// The AX element became invalid (e.g., window closed) during the operation.
    #[error("AX element invalid (window gone)")]
    WindowGone,

    /// Operation must be executed on the main thread.
    #[error("Operation requires main thread")]
    MainThread,

    /// The requested attribute or operation is not supported.
    #[error("Unsupported attribute")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for placement::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::Permission => Self::Permission,
            Error::MainThread => Self::MainThread,
            Error::AppElement | Error::NoFrontmostApp => Self::NoFocusedApplication,
            Error::NoMainWindow(_) => Self::NoMainWindow,
            Error::AxCode(_) | Error::WindowGone | Error::Unsupported => {
                Self::UnreadableFrame(e.to_string())
            }
        }
    }
}
