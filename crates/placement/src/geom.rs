//! Rectangle primitives shared by both coordinate spaces.
//!
//! A [`Rect`] carries no notion of which space it lives in; callers track
//! that. Edge helpers assume a Y-up reading (`bottom` is `y`, `top` is
//! `y + h`), which matches screen space. In window-reporting space the same
//! helpers still give the numeric min/max Y.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Compare two floats within `eps`.
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Length of the overlap between the intervals `[a1, a2]` and `[b1, b2]`.
#[inline]
pub fn overlap_1d(a1: f64, a2: f64, b1: f64, b2: f64) -> f64 {
    let l = a1.max(b1);
    let r = a2.min(b2);
    (r - l).max(0.0)
}

/// Axis-aligned rectangle in points.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    /// Origin X.
    pub x: f64,
    /// Origin Y.
    pub y: f64,
    /// Width. May be negative while offsets are being mapped.
    pub w: f64,
    /// Height. May be negative while offsets are being mapped.
    pub h: f64,
}

impl Rect {
    /// Build a rectangle from origin and extent.
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Minimum X.
    #[inline]
    pub fn left(&self) -> f64 {
        self.x.min(self.x + self.w)
    }

    /// Maximum X.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x.max(self.x + self.w)
    }

    /// Minimum Y.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y.min(self.y + self.h)
    }

    /// Maximum Y.
    #[inline]
    pub fn top(&self) -> f64 {
        self.y.max(self.y + self.h)
    }

    /// Center X.
    #[inline]
    pub fn cx(&self) -> f64 {
        self.x + self.w / 2.0
    }

    /// Center Y.
    #[inline]
    pub fn cy(&self) -> f64 {
        self.y + self.h / 2.0
    }

    /// Unsigned area.
    #[inline]
    pub fn area(&self) -> f64 {
        (self.w * self.h).abs()
    }

    /// Intersection with `other`, or `None` when the two do not overlap with
    /// positive area.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let w = overlap_1d(self.left(), self.right(), other.left(), other.right());
        let h = overlap_1d(self.bottom(), self.top(), other.bottom(), other.top());
        if w <= 0.0 || h <= 0.0 {
            return None;
        }
        Some(Self::new(
            self.left().max(other.left()),
            self.bottom().max(other.bottom()),
            w,
            h,
        ))
    }

    /// Area shared with `other`; zero when disjoint or merely touching.
    #[inline]
    pub fn overlap_area(&self, other: &Self) -> f64 {
        self.intersection(other).map_or(0.0, |r| r.area())
    }

    /// The same rectangle with non-negative width and height.
    ///
    /// A negative extent moves the origin to the opposite edge, so the
    /// covered region is unchanged.
    pub fn standardized(&self) -> Self {
        Self::new(self.left(), self.bottom(), self.w.abs(), self.h.abs())
    }

    /// Component-wise comparison within `eps`.
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        approx_eq(self.x, other.x, eps)
            && approx_eq(self.y, other.y, eps)
            && approx_eq(self.w, other.w, eps)
            && approx_eq(self.h, other.h, eps)
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "({:.1},{:.1},{:.1},{:.1})",
            self.x, self.y, self.w, self.h
        )
    }
}
