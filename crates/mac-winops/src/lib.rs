//! mac-winops: macOS window and display access for moveme.
//!
//! Implements [`placement::Desktop`] on top of AppKit (`NSScreen`,
//! `NSWorkspace`, `NSStatusBar`) for displays and focus, and the
//! Accessibility API for reading and writing window frames.
//!
//! All window operations require Accessibility permission. Display
//! enumeration requires the AppKit main thread.

mod error;

#[cfg(target_os = "macos")]
mod ax;
#[cfg(target_os = "macos")]
mod screen;
#[cfg(target_os = "macos")]
mod window;

pub use error::{Error, Result};

#[cfg(target_os = "macos")]
pub use desktop::MacDesktop;
#[cfg(target_os = "macos")]
pub use window::MacWindow;

#[cfg(target_os = "macos")]
mod desktop {
    use objc2_app_kit::NSWorkspace;
    use objc2_foundation::MainThreadMarker;
    use placement::{Desktop, DisplayInfo};
    use tracing::debug;

    use crate::{
        ax::{ax_check, main_window_for_pid},
        error::{Error, Result},
        screen,
        window::MacWindow,
    };

    /// The live macOS desktop. Construct on the main thread.
    pub struct MacDesktop {
        /// Proof that we are on the AppKit main thread.
        mtm: MainThreadMarker,
    }

    impl MacDesktop {
        /// Create a desktop handle; fails off the main thread.
        pub fn new() -> Result<Self> {
            let mtm = MainThreadMarker::new().ok_or(Error::MainThread)?;
            Ok(Self { mtm })
        }
    }

    /// PID of the frontmost application.
    fn frontmost_pid() -> Result<i32> {
        let app = unsafe { NSWorkspace::sharedWorkspace().frontmostApplication() };
        let app = app.ok_or(Error::NoFrontmostApp)?;
        let pid = unsafe { app.processIdentifier() };
        debug!("frontmost_pid: pid={}", pid);
        Ok(pid)
    }

    impl Desktop for MacDesktop {
        type Window = MacWindow;

        fn displays(&self) -> placement::Result<Vec<DisplayInfo>> {
            Ok(screen::displays(self.mtm))
        }

        fn menu_bar_thickness(&self) -> f64 {
            screen::menu_bar_thickness(self.mtm)
        }

        fn focused_main_window(&self) -> placement::Result<MacWindow> {
            ax_check()?;
            let pid = frontmost_pid()?;
            let elem = main_window_for_pid(pid)?;
            Ok(MacWindow::new(elem, pid))
        }
    }
}
