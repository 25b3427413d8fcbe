#![warn(missing_docs)]

//! Entry point for the `moveme` binary.

mod cli;
mod error;

use std::{io, process};

use clap::Parser;
use placement::{OffsetSet, Plan, Report, RunOptions};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, registry};

use crate::{
    cli::Cli,
    error::{Error, Result},
};

/// Lines printed under the error message for bad offsets.
const USAGE: &str = concat!(
    "       format - x1 y1 x2 y2 % offsets\n",
    "       x1 y1 is lower left, x2 y2 is top right\n",
    "       e.g.\n",
    "       moveme 10 10 90 90\n",
    "           will center the window leaving a 10% margin around",
);

/// Default level for our crates when no flag or `RUST_LOG` is given.
const DEFAULT_LEVEL: &str = "warn";

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        print!("{}", render_error(&err));
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and place the focused window.
fn run() -> Result<()> {
    let Cli {
        log,
        dry_run,
        offsets,
    } = Cli::parse();
    let log_spec = log.spec(DEFAULT_LEVEL);
    registry()
        .with(logging::env_filter_from_spec(&log_spec))
        .with(fmt::layer().without_time().with_writer(io::stderr))
        .try_init()
        .ok();

    let offsets = OffsetSet::parse(offsets.as_slice())?;
    let report = place(&offsets, RunOptions { dry_run })?;
    if dry_run {
        print!("{}", render_plan(&report.plan));
    }
    Ok(())
}

/// Run the placement against the live desktop.
#[cfg(target_os = "macos")]
fn place(offsets: &OffsetSet, opts: RunOptions) -> Result<Report> {
    let desktop = mac_winops::MacDesktop::new()?;
    Ok(placement::run(&desktop, offsets, opts)?)
}

/// No backend off macOS.
#[cfg(not(target_os = "macos"))]
fn place(_offsets: &OffsetSet, _opts: RunOptions) -> Result<Report> {
    Err(Error::Unsupported)
}

/// Message for a failed run, followed by the usage text for offset errors.
fn render_error(err: &Error) -> String {
    let mut out = format!("error: {err}\n");
    if err.is_usage() {
        out.push_str(USAGE);
        out.push('\n');
    }
    out
}

/// Dry-run report of every intermediate frame.
fn render_plan(plan: &Plan) -> String {
    format!(
        "display: {}\n\
         available frame (screen): {}\n\
         window frame (screen): {}\n\
         resized frame (screen): {}\n\
         resized frame (window): {}\n\
         set size: {}\n",
        plan.display.id,
        plan.usable,
        plan.window,
        plan.screen_target.rect,
        plan.target,
        plan.set_size()
    )
}
