use placement::{Rect, WindowHandle};
use tracing::debug;

use crate::ax::{
    AXElem, CGPoint, CGSize, ax_get_point, ax_get_size, ax_is_settable, ax_set_point, ax_set_size,
    cfstr,
};

/// Main window of an application, addressed through Accessibility.
pub struct MacWindow {
    /// Retained AX window element.
    elem: AXElem,
    /// Owning process.
    pid: i32,
}

impl MacWindow {
    pub(crate) fn new(elem: AXElem, pid: i32) -> Self {
        Self { elem, pid }
    }

    /// Process identifier of the owning application.
    pub fn pid(&self) -> i32 {
        self.pid
    }
}

impl WindowHandle for MacWindow {
    fn frame(&self) -> placement::Result<Rect> {
        let read = || -> crate::Result<Rect> {
            let p = ax_get_point(self.elem.as_ptr(), cfstr("AXPosition"))?;
            let s = ax_get_size(self.elem.as_ptr(), cfstr("AXSize"))?;
            Ok(Rect::new(p.x, p.y, s.width, s.height))
        };
        read().map_err(|e| placement::Error::UnreadableFrame(e.to_string()))
    }

    fn is_resizable(&self) -> bool {
        match ax_is_settable(self.elem.as_ptr(), cfstr("AXSize")) {
            Ok(v) => v,
            Err(e) => {
                debug!("is_resizable: pid={} err={}; assuming fixed", self.pid, e);
                false
            }
        }
    }

    fn set_position(&self, x: f64, y: f64) -> placement::Result<()> {
        ax_set_point(self.elem.as_ptr(), cfstr("AXPosition"), CGPoint { x, y }).map_err(|e| {
            placement::Error::Mutation {
                attr: "position",
                reason: e.to_string(),
            }
        })
    }

    fn set_size(&self, w: f64, h: f64) -> placement::Result<()> {
        ax_set_size(
            self.elem.as_ptr(),
            cfstr("AXSize"),
            CGSize {
                width: w,
                height: h,
            },
        )
        .map_err(|e| placement::Error::Mutation {
            attr: "size",
            reason: e.to_string(),
        })
    }
}
