//! Display description and target-display selection.

use tracing::{debug, trace};

use crate::geom::Rect;

/// One physical display as enumerated by the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayInfo {
    /// Enumeration index. `0` is the primary display, the one owning the
    /// menu bar.
    pub id: usize,
    /// Full bounds in screen space.
    pub full: Rect,
    /// Bounds minus the menu bar and Dock, in screen space.
    pub usable: Rect,
}

impl DisplayInfo {
    /// Describe a display.
    pub const fn new(id: usize, full: Rect, usable: Rect) -> Self {
        Self { id, full, usable }
    }

    /// True for the menu-owning display.
    #[inline]
    pub fn is_primary(&self) -> bool {
        self.id == 0
    }

    /// Usable rectangle to place windows into.
    ///
    /// Secondary displays report a usable frame that still includes the strip
    /// reserved for the menu bar, so `menu_bar` is taken off their height.
    pub fn usable_frame(&self, menu_bar: f64) -> Rect {
        if self.is_primary() {
            return self.usable;
        }
        Rect {
            h: self.usable.h - menu_bar,
            ..self.usable
        }
    }
}

/// Pick the display sharing the most area with `window` (screen space).
///
/// Ties keep the earliest display in `displays`. A window that overlaps no
/// display still selects one, since zero overlaps compare like any other.
/// Returns `None` only for an empty list.
pub fn select<'a>(window: &Rect, displays: &'a [DisplayInfo]) -> Option<&'a DisplayInfo> {
    let mut best: Option<(&DisplayInfo, f64)> = None;
    for d in displays {
        let overlap = window.overlap_area(&d.full);
        trace!("overlap: display={} full={} area={:.1}", d.id, d.full, overlap);
        if best.is_none_or(|(_, a)| overlap > a) {
            best = Some((d, overlap));
        }
    }
    let (d, area) = best?;
    debug!("selected display={} overlap={:.1} window={}", d.id, area, window);
    Some(d)
}
