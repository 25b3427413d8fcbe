//! Driving a [`Desktop`]: read state once, plan, write once.

use tracing::{debug, info, warn};

use crate::{
    error::{Error, Result},
    geom::Rect,
    offsets::OffsetSet,
    ops::{Desktop, WindowHandle},
    plan::{Plan, WindowState, plan},
};

/// Per-attribute results of writing a plan to a window.
///
/// Writes are best-effort: callers inspect this for logging and do not fail
/// on it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyOutcome {
    /// Result of setting the position.
    pub position: Result<()>,
    /// Result of setting the size; `None` when the size was not touched.
    pub size: Option<Result<()>>,
}

impl ApplyOutcome {
    /// True when every attempted write succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Errors from attempted writes.
    pub fn failures(&self) -> impl Iterator<Item = &Error> {
        self.position
            .as_ref()
            .err()
            .into_iter()
            .chain(self.size.as_ref().and_then(|r| r.as_ref().err()))
    }
}

/// Write `plan.target` to `win`: position first, then size when the policy
/// allows it. Each write is attempted exactly once.
pub fn apply<W: WindowHandle>(win: &W, plan: &Plan) -> ApplyOutcome {
    let t = plan.target;
    let position = win.set_position(t.x, t.y);
    let size = plan.set_size().then(|| win.set_size(t.w, t.h));
    ApplyOutcome { position, size }
}

/// Options for [`run`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Plan and report without writing to the window.
    pub dry_run: bool,
}

/// Result of a successful [`run`].
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The computed plan.
    pub plan: Plan,
    /// Write results; `None` for dry runs.
    pub outcome: Option<ApplyOutcome>,
    /// Frame read back after writing, when readable.
    pub after: Option<Rect>,
}

/// Place the focused application's main window according to `offsets`.
///
/// Lookup and read failures abort the run. Write failures are logged and
/// absorbed.
pub fn run<D: Desktop>(desktop: &D, offsets: &OffsetSet, opts: RunOptions) -> Result<Report> {
    let win = desktop.focused_main_window()?;
    let state = WindowState {
        frame: win.frame()?,
        resizable: win.is_resizable(),
    };
    debug!("window frame (window) {} resizable={}", state.frame, state.resizable);
    let displays = desktop.displays()?;
    debug!("displays: count={}", displays.len());
    let plan = plan(offsets, &state, &displays, desktop.menu_bar_thickness())?;

    if opts.dry_run {
        info!("dry run: target={} set_size={}", plan.target, plan.set_size());
        return Ok(Report {
            plan,
            outcome: None,
            after: None,
        });
    }

    let outcome = apply(&win, &plan);
    for err in outcome.failures() {
        warn!("ignored: {}", err);
    }
    let after = win.frame().ok();
    if let Some(a) = after {
        debug!("after resize (screen) {}", plan.flip.invert(&a));
    }
    info!(
        "placed display={} target={} set_size={}",
        plan.display.id,
        plan.target,
        plan.set_size()
    );
    Ok(Report {
        plan,
        outcome: Some(outcome),
        after,
    })
}
