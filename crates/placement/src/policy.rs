//! Resize policy: stretch to the mapped frame or center at the current size.

use crate::geom::Rect;

/// How the final frame is derived, chosen once per run from whether the
/// window's size attribute is settable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Position and size are both applied.
    Resizable,
    /// Only position is applied; the window keeps its size and is centered
    /// on the mapped rectangle.
    Fixed,
}

/// Final screen-space frame plus whether the size should be written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Target frame in screen space.
    pub rect: Rect,
    /// Whether the size attribute should be set.
    pub set_size: bool,
}

impl ResizePolicy {
    /// Select the policy from the window's resizable flag.
    pub fn from_resizable(resizable: bool) -> Self {
        if resizable {
            Self::Resizable
        } else {
            Self::Fixed
        }
    }

    /// Resolve the final frame for `mapped` given the window's `current`
    /// frame, both in screen space.
    pub fn resolve(self, mapped: &Rect, current: &Rect) -> Placement {
        match self {
            Self::Resizable => Placement {
                rect: *mapped,
                set_size: true,
            },
            Self::Fixed => Placement {
                rect: Rect {
                    x: mapped.cx() - current.w / 2.0,
                    y: mapped.cy() - current.h / 2.0,
                    w: current.w,
                    h: current.h,
                },
                set_size: false,
            },
        }
    }
}
