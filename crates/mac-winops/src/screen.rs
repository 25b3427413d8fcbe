//! Display enumeration via AppKit.

use objc2_app_kit::{NSScreen, NSStatusBar};
use objc2_foundation::{MainThreadMarker, NSRect};
use placement::{DisplayInfo, Rect};
use tracing::debug;

fn rect_from_ns(r: NSRect) -> Rect {
    Rect::new(r.origin.x, r.origin.y, r.size.width, r.size.height)
}

/// Enumerate screens in AppKit order. Index 0 is the menu-owning screen.
pub(crate) fn displays(mtm: MainThreadMarker) -> Vec<DisplayInfo> {
    NSScreen::screens(mtm)
        .iter()
        .enumerate()
        .map(|(id, s)| {
            let d = DisplayInfo::new(id, rect_from_ns(s.frame()), rect_from_ns(s.visibleFrame()));
            debug!("display: id={} full={} usable={}", d.id, d.full, d.usable);
            d
        })
        .collect()
}

/// Thickness of the system status bar (`NSStatusBar.systemStatusBar.thickness`).
pub(crate) fn menu_bar_thickness(mtm: MainThreadMarker) -> f64 {
    let thickness = NSStatusBar::systemStatusBar(mtm).thickness();
    debug!("menu_bar_thickness: {}", thickness);
    thickness
}
