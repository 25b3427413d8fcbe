//! Conversion between window-reporting space and screen space.
//!
//! Accessibility reports window frames with a top-left origin at the top of
//! the primary display and Y growing downward. AppKit screens use a
//! bottom-left origin with Y growing upward. Both share X and extent, so
//! converting is a vertical flip around the primary display's top edge.

use crate::{
    display::DisplayInfo,
    error::{Error, Result},
    geom::Rect,
};

/// Flip constant derived from one display enumeration.
///
/// Build a fresh value from every enumeration; displays can be rearranged
/// between runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flip {
    /// Top edge (`maxY`) of the primary display's full frame.
    pub global_max_y: f64,
}

impl Flip {
    /// Derive the flip from the primary display (`id == 0`).
    pub fn from_displays(displays: &[DisplayInfo]) -> Result<Self> {
        displays
            .iter()
            .find(|d| d.is_primary())
            .map(|d| Self {
                global_max_y: d.full.top(),
            })
            .ok_or(Error::NoDisplays)
    }

    /// Convert `r` to the other space. The transform is its own inverse.
    #[inline]
    pub fn invert(&self, r: &Rect) -> Rect {
        Rect {
            x: r.x,
            y: self.global_max_y - r.top(),
            w: r.w,
            h: r.h,
        }
    }
}

/// Convert `r` using the primary display found in `displays`.
pub fn invert(r: &Rect, displays: &[DisplayInfo]) -> Result<Rect> {
    Ok(Flip::from_displays(displays)?.invert(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary(w: f64, h: f64) -> DisplayInfo {
        DisplayInfo::new(0, Rect::new(0.0, 0.0, w, h), Rect::new(0.0, 0.0, w, h - 25.0))
    }

    #[test]
    fn window_at_top_left_maps_to_top_of_primary() {
        let displays = [primary(1440.0, 900.0)];
        let win = Rect::new(0.0, 0.0, 400.0, 300.0);
        let scr = invert(&win, &displays).unwrap();
        assert_eq!(scr, Rect::new(0.0, 600.0, 400.0, 300.0));
    }

    #[test]
    fn uses_primary_even_when_listed_later() {
        let secondary = DisplayInfo::new(
            1,
            Rect::new(1440.0, 0.0, 1920.0, 1200.0),
            Rect::new(1440.0, 0.0, 1920.0, 1200.0),
        );
        let displays = [secondary, primary(1440.0, 900.0)];
        let f = Flip::from_displays(&displays).unwrap();
        assert_eq!(f.global_max_y, 900.0);
    }

    #[test]
    fn display_below_primary_gets_negative_screen_y() {
        let displays = [primary(1440.0, 900.0)];
        // Window 100pt below the primary's bottom edge in AX space.
        let win = Rect::new(0.0, 1000.0, 400.0, 300.0);
        let scr = invert(&win, &displays).unwrap();
        assert_eq!(scr.y, -400.0);
    }

    #[test]
    fn round_trip_restores_y() {
        let displays = [primary(1512.0, 982.0)];
        let r = Rect::new(33.0, 120.5, 640.0, 480.0);
        let back = invert(&invert(&r, &displays).unwrap(), &displays).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn missing_primary_is_an_error() {
        assert_eq!(Flip::from_displays(&[]), Err(Error::NoDisplays));
        let only_secondary = [DisplayInfo::new(
            2,
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(0.0, 0.0, 10.0, 10.0),
        )];
        assert_eq!(Flip::from_displays(&only_secondary), Err(Error::NoDisplays));
    }
}
