//! Percentage offsets and their validation.

use tracing::debug;

use crate::{
    error::{Error, Result},
    geom::Rect,
};

/// Number of offsets a placement takes.
pub const OFFSET_COUNT: usize = 4;

/// Lower-left `(x1, y1)` and upper-right `(x2, y2)` corners of the target
/// rectangle, in percent of a display's usable area.
///
/// Values outside `0..=100` and inverted corners are allowed; they map to
/// rectangles outside the usable area or with negative extent. A value can
/// only be built through [`OffsetSet::new`] or [`OffsetSet::parse`], so every
/// instance is finite and non-degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetSet {
    /// Left edge, percent of usable width.
    x1: f64,
    /// Bottom edge, percent of usable height.
    y1: f64,
    /// Right edge, percent of usable width.
    x2: f64,
    /// Top edge, percent of usable height.
    y2: f64,
}

impl OffsetSet {
    /// Validate four already-parsed offsets.
    ///
    /// Rejects non-finite values and sets where three or more values are
    /// exactly zero.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        if let Some((index, v)) = [x1, y1, x2, y2]
            .into_iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(Error::InvalidOffset {
                index,
                token: v.to_string(),
            });
        }
        let zeros = [x1, y1, x2, y2].iter().filter(|v| **v == 0.0).count();
        if zeros >= 3 {
            return Err(Error::DegenerateOffsets);
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Left edge, percent of usable width.
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// Bottom edge, percent of usable height.
    pub fn y1(&self) -> f64 {
        self.y1
    }

    /// Right edge, percent of usable width.
    pub fn x2(&self) -> f64 {
        self.x2
    }

    /// Top edge, percent of usable height.
    pub fn y2(&self) -> f64 {
        self.y2
    }

    /// Parse and validate raw command-line tokens.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        if tokens.len() != OFFSET_COUNT {
            return Err(Error::InvalidArgumentCount(tokens.len()));
        }
        let mut vals = [0.0; OFFSET_COUNT];
        for (index, (slot, tok)) in vals.iter_mut().zip(tokens).enumerate() {
            let raw = tok.as_ref();
            *slot = match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    return Err(Error::InvalidOffset {
                        index,
                        token: raw.to_string(),
                    });
                }
            };
        }
        let [x1, y1, x2, y2] = vals;
        let set = Self::new(x1, y1, x2, y2)?;
        debug!("offsets: x1={} y1={} x2={} y2={}", x1, y1, x2, y2);
        Ok(set)
    }

    /// Map the offsets onto `usable`, producing a screen-space rectangle.
    ///
    /// No clamping is performed.
    pub fn map(&self, usable: &Rect) -> Rect {
        Rect {
            x: usable.x + usable.w * self.x1 / 100.0,
            y: usable.y + usable.h * self.y1 / 100.0,
            w: (self.x2 - self.x1) * usable.w / 100.0,
            h: (self.y2 - self.y1) * usable.h / 100.0,
        }
    }
}
