//! Pure planning pass: window frame and displays in, target frame out.

use tracing::debug;

use crate::{
    display::{self, DisplayInfo},
    error::{Error, Result},
    flip::Flip,
    geom::Rect,
    offsets::OffsetSet,
    policy::{Placement, ResizePolicy},
};

/// Window state read once from the backend at the start of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowState {
    /// Current frame in window-reporting space.
    pub frame: Rect,
    /// Whether the size attribute is settable.
    pub resizable: bool,
}

/// Everything computed for one placement, kept for logging and dry runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    /// Flip derived from this run's display list.
    pub flip: Flip,
    /// Current window frame in screen space.
    pub window: Rect,
    /// Display the window overlaps most.
    pub display: DisplayInfo,
    /// Usable rectangle of `display` after the menu bar adjustment.
    pub usable: Rect,
    /// Offsets mapped onto `usable`, before the resize policy.
    pub mapped: Rect,
    /// Policy chosen from the window's resizable flag.
    pub policy: ResizePolicy,
    /// Final frame in screen space, standardized.
    pub screen_target: Placement,
    /// Final frame in window-reporting space, ready for the backend.
    pub target: Rect,
}

impl Plan {
    /// Whether the backend should be asked to change the window size.
    #[inline]
    pub fn set_size(&self) -> bool {
        self.screen_target.set_size
    }
}

/// Run the planning pipeline.
///
/// `displays` must come from a fresh enumeration; `menu_bar` is the menu bar
/// thickness removed from secondary displays.
pub fn plan(
    offsets: &OffsetSet,
    window: &WindowState,
    displays: &[DisplayInfo],
    menu_bar: f64,
) -> Result<Plan> {
    let flip = Flip::from_displays(displays)?;
    let window_screen = flip.invert(&window.frame);
    let display = *display::select(&window_screen, displays).ok_or(Error::NoDisplays)?;
    let usable = display.usable_frame(menu_bar);
    let mapped = offsets.map(&usable);
    let policy = ResizePolicy::from_resizable(window.resizable);
    let resolved = policy.resolve(&mapped, &window_screen);
    let screen_target = Placement {
        rect: resolved.rect.standardized(),
        ..resolved
    };
    let target = flip.invert(&screen_target.rect);
    debug!("available frame {}", usable);
    debug!("window frame (screen) {}", window_screen);
    debug!(
        "resized frame (screen) {} policy={:?}",
        screen_target.rect, policy
    );
    debug!("resized frame (window) {}", target);
    Ok(Plan {
        flip,
        window: window_screen,
        display,
        usable,
        mapped,
        policy,
        screen_target,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU: f64 = 24.0;

    /// Primary 1000x800 at the origin with no reserved chrome, and a
    /// secondary 1000x1000 to its right.
    fn two_displays() -> Vec<DisplayInfo> {
        vec![
            DisplayInfo::new(
                0,
                Rect::new(0.0, 0.0, 1000.0, 800.0),
                Rect::new(0.0, 0.0, 1000.0, 800.0),
            ),
            DisplayInfo::new(
                1,
                Rect::new(1000.0, 0.0, 1000.0, 1000.0),
                Rect::new(1000.0, 0.0, 1000.0, 1000.0),
            ),
        ]
    }

    fn offsets(x1: f64, y1: f64, x2: f64, y2: f64) -> OffsetSet {
        OffsetSet::new(x1, y1, x2, y2).unwrap()
    }

    #[test]
    fn single_display_ten_percent_margin() {
        let displays = &two_displays()[..1];
        let win = WindowState {
            frame: Rect::new(10.0, 10.0, 300.0, 200.0),
            resizable: true,
        };
        let p = plan(&offsets(10.0, 10.0, 90.0, 90.0), &win, displays, MENU).unwrap();
        assert_eq!(p.display.id, 0);
        assert_eq!(p.usable, Rect::new(0.0, 0.0, 1000.0, 800.0));
        assert_eq!(p.mapped, Rect::new(100.0, 80.0, 800.0, 640.0));
        assert!(p.set_size());
        // Top edge at 720 in screen space is 80 below the top in AX space.
        assert_eq!(p.target, Rect::new(100.0, 80.0, 800.0, 640.0));
    }

    #[test]
    fn secondary_display_usable_height_is_trimmed() {
        let displays = two_displays();
        // Entirely on the secondary; AX y=-200 flips to screen y=700.
        let win = WindowState {
            frame: Rect::new(1200.0, -200.0, 300.0, 300.0),
            resizable: true,
        };
        let p = plan(&offsets(0.0, 0.0, 100.0, 100.0), &win, &displays, MENU).unwrap();
        assert_eq!(p.window, Rect::new(1200.0, 700.0, 300.0, 300.0));
        assert_eq!(p.display.id, 1);
        assert_eq!(p.usable.h, 1000.0 - MENU);
        assert_eq!(p.mapped, Rect::new(1000.0, 0.0, 1000.0, 1000.0 - MENU));
        // Back in AX space the top edge sits MENU below the secondary's top.
        assert_eq!(p.target.y, 800.0 - (1000.0 - MENU));
    }

    #[test]
    fn fixed_window_keeps_size_and_skips_resize() {
        let displays = &two_displays()[..1];
        let win = WindowState {
            frame: Rect::new(0.0, 0.0, 400.0, 300.0),
            resizable: false,
        };
        let p = plan(&offsets(10.0, 10.0, 90.0, 90.0), &win, displays, MENU).unwrap();
        assert_eq!(p.policy, ResizePolicy::Fixed);
        assert!(!p.set_size());
        assert_eq!(
            p.screen_target.rect,
            Rect::new(500.0 - 200.0, 400.0 - 150.0, 400.0, 300.0)
        );
    }

    #[test]
    fn inverted_offsets_are_standardized_before_handoff() {
        let displays = &two_displays()[..1];
        let win = WindowState {
            frame: Rect::new(0.0, 0.0, 400.0, 300.0),
            resizable: true,
        };
        let p = plan(&offsets(90.0, 90.0, 10.0, 10.0), &win, displays, MENU).unwrap();
        assert!(p.mapped.w < 0.0 && p.mapped.h < 0.0);
        assert_eq!(p.screen_target.rect, Rect::new(100.0, 80.0, 800.0, 640.0));
        assert!(p.target.w >= 0.0 && p.target.h >= 0.0);
    }

    #[test]
    fn no_primary_display_fails() {
        let displays = &two_displays()[1..];
        let win = WindowState {
            frame: Rect::new(0.0, 0.0, 400.0, 300.0),
            resizable: true,
        };
        assert_eq!(
            plan(&offsets(10.0, 10.0, 90.0, 90.0), &win, displays, MENU),
            Err(Error::NoDisplays)
        );
    }
}
