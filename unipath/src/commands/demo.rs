//! `demo` command: dump a backtrace of this process with its paths rewritten.
//!
//! The backtrace is rewritten relative to the current directory, so source
//! locations inside the working tree print as `<CWD>/...` and dependency sources
//! as `<CWD>/../...` or similar.

use anyhow::{anyhow, Context, Result};
use log::debug;
use std::backtrace::Backtrace;
use std::io::{self, Write};

use unipath_core::{Unifier, UnifyOptions};

use crate::cli::DemoCommand;

/// Separates the rewritten backtrace from the raw one.
pub const RAW_SEPARATOR: &str = "========================================";

/// An error carrying the backtrace of the place that raised it.
struct DemoFailure {
    message: String,
    backtrace: Backtrace,
}

impl DemoFailure {
    fn render(&self) -> String {
        format!("Error: {}\nStack backtrace:\n{}", self.message, self.backtrace)
    }
}

#[inline(never)]
fn dump_error() -> std::result::Result<(), DemoFailure> {
    Err(DemoFailure {
        message: "kabloowy!".to_string(),
        backtrace: Backtrace::force_capture(),
    })
}

/// Rewrites a rendered error dump relative to `cwd`.
pub fn rewrite_dump(dump: &str, cwd: &str) -> Result<String> {
    let unifier = Unifier::new(UnifyOptions::new().with_cwd_path_prefix(cwd))
        .context("Failed to compile rewrite passes")?;
    Ok(unifier.unify(dump))
}

pub fn run_demo_command(cmd: &DemoCommand) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    let cwd = cwd.to_string_lossy();
    debug!("Running demo with CWD prefix '{}'.", cwd);

    let failure = match dump_error() {
        Err(failure) => failure,
        Ok(()) => return Err(anyhow!("demo function unexpectedly succeeded")),
    };
    let raw = failure.render();
    let rewritten = rewrite_dump(&raw, &cwd)?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writeln!(writer, "{}", rewritten)?;
    if cmd.raw {
        writeln!(writer, "\n{}\n{}", RAW_SEPARATOR, raw)?;
    }
    Ok(())
}
