use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use parking_lot::Mutex;

use crate::{
    display::DisplayInfo,
    error::{Error, Result},
    geom::Rect,
};

/// A window whose frame can be read and written.
///
/// Frames are in window-reporting space (top-left origin, Y down).
pub trait WindowHandle {
    /// Current frame.
    fn frame(&self) -> Result<Rect>;
    /// Whether the size attribute is settable.
    fn is_resizable(&self) -> bool;
    /// Move the window's top-left corner to `(x, y)`.
    fn set_position(&self, x: f64, y: f64) -> Result<()>;
    /// Resize the window.
    fn set_size(&self, w: f64, h: f64) -> Result<()>;
}

/// Trait abstraction over the window system so placement can be exercised
/// without touching the OS.
pub trait Desktop {
    /// Window handle type produced by this desktop.
    type Window: WindowHandle;
    /// Enumerate displays in system order. The primary display has `id == 0`.
    fn displays(&self) -> Result<Vec<DisplayInfo>>;
    /// Height of the menu bar, removed from secondary displays' usable area.
    fn menu_bar_thickness(&self) -> f64;
    /// Main window of the focused application.
    fn focused_main_window(&self) -> Result<Self::Window>;
}

/// Shared state behind [`MockDesktop`] and its [`MockWindow`]s.
#[derive(Default)]
struct MockState {
    /// Recorded call names, in order.
    calls: Mutex<Vec<String>>,
    /// Displays returned by `displays`.
    displays: Mutex<Vec<DisplayInfo>>,
    /// Current window frame; `None` means no main window.
    frame: Mutex<Option<Rect>>,
    /// Menu bar thickness.
    menu_bar: Mutex<f64>,
    /// Error returned by `focused_main_window`, if set.
    fail_focus: Mutex<Option<Error>>,
    /// Number of `displays` calls.
    enumerations: AtomicUsize,
    /// Whether the window reports a settable size.
    resizable: AtomicBool,
    /// Make `frame` fail.
    fail_frame: AtomicBool,
    /// Make `set_position` fail.
    fail_position: AtomicBool,
    /// Make `set_size` fail.
    fail_size: AtomicBool,
}

/// In-memory desktop for tests: one window, configurable displays, call
/// recording, and injectable failures.
#[derive(Clone, Default)]
pub struct MockDesktop {
    /// State shared with handed-out windows.
    state: Arc<MockState>,
}

/// Window handle produced by [`MockDesktop`].
#[derive(Clone)]
pub struct MockWindow {
    /// State shared with the owning desktop.
    state: Arc<MockState>,
}

impl MockDesktop {
    /// Empty desktop: no displays, no window, resizable, 24pt menu bar.
    pub fn new() -> Self {
        let d = Self::default();
        d.state.resizable.store(true, Ordering::SeqCst);
        *d.state.menu_bar.lock() = 24.0;
        d
    }
    /// Displays returned by the next enumerations.
    pub fn set_displays(&self, displays: Vec<DisplayInfo>) {
        *self.state.displays.lock() = displays;
    }
    /// Menu bar thickness to report.
    pub fn set_menu_bar(&self, thickness: f64) {
        *self.state.menu_bar.lock() = thickness;
    }
    /// Main window frame; `None` removes the window.
    pub fn set_window(&self, frame: Option<Rect>) {
        *self.state.frame.lock() = frame;
    }
    /// Current window frame after any writes.
    pub fn window_frame(&self) -> Option<Rect> {
        *self.state.frame.lock()
    }
    /// Whether the window reports a settable size.
    pub fn set_resizable(&self, v: bool) {
        self.state.resizable.store(v, Ordering::SeqCst);
    }
    /// Error to return from `focused_main_window`.
    pub fn set_fail_focus(&self, err: Option<Error>) {
        *self.state.fail_focus.lock() = err;
    }
    /// Make frame reads fail.
    pub fn set_fail_frame(&self, v: bool) {
        self.state.fail_frame.store(v, Ordering::SeqCst);
    }
    /// Make position writes fail.
    pub fn set_fail_position(&self, v: bool) {
        self.state.fail_position.store(v, Ordering::SeqCst);
    }
    /// Make size writes fail.
    pub fn set_fail_size(&self, v: bool) {
        self.state.fail_size.store(v, Ordering::SeqCst);
    }
    /// Recorded call names, in order.
    pub fn calls(&self) -> Vec<String> {
        self.state.calls.lock().clone()
    }
    /// Whether a call with this name was recorded.
    pub fn calls_contains(&self, s: &str) -> bool {
        self.state.calls.lock().iter().any(|x| x == s)
    }
    /// Number of display enumerations so far.
    pub fn enumerations(&self) -> usize {
        self.state.enumerations.load(Ordering::SeqCst)
    }
}

impl MockState {
    /// Record a call.
    fn note(&self, s: &str) {
        self.calls.lock().push(s.to_string());
    }
}

impl Desktop for MockDesktop {
    type Window = MockWindow;

    fn displays(&self) -> Result<Vec<DisplayInfo>> {
        self.state.note("displays");
        self.state.enumerations.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.displays.lock().clone())
    }

    fn menu_bar_thickness(&self) -> f64 {
        *self.state.menu_bar.lock()
    }

    fn focused_main_window(&self) -> Result<MockWindow> {
        self.state.note("focused_main_window");
        if let Some(err) = self.state.fail_focus.lock().clone() {
            return Err(err);
        }
        if self.state.frame.lock().is_none() {
            return Err(Error::NoMainWindow);
        }
        Ok(MockWindow {
            state: self.state.clone(),
        })
    }
}

impl WindowHandle for MockWindow {
    fn frame(&self) -> Result<Rect> {
        self.state.note("frame");
        if self.state.fail_frame.load(Ordering::SeqCst) {
            return Err(Error::UnreadableFrame("mock".into()));
        }
        (*self.state.frame.lock()).ok_or(Error::NoMainWindow)
    }

    fn is_resizable(&self) -> bool {
        self.state.note("is_resizable");
        self.state.resizable.load(Ordering::SeqCst)
    }

    fn set_position(&self, x: f64, y: f64) -> Result<()> {
        self.state.note("set_position");
        if self.state.fail_position.load(Ordering::SeqCst) {
            return Err(Error::Mutation {
                attr: "position",
                reason: "mock".into(),
            });
        }
        if let Some(f) = self.state.frame.lock().as_mut() {
            f.x = x;
            f.y = y;
        }
        Ok(())
    }

    fn set_size(&self, w: f64, h: f64) -> Result<()> {
        self.state.note("set_size");
        if self.state.fail_size.load(Ordering::SeqCst) {
            return Err(Error::Mutation {
                attr: "size",
                reason: "mock".into(),
            });
        }
        if let Some(f) = self.state.frame.lock().as_mut() {
            f.w = w;
            f.h = h;
        }
        Ok(())
    }
}
