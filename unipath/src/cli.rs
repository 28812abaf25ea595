//! This file defines the command-line interface (CLI) for the unipath application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unipath_core::AliasSpec;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "unipath",
    author = "unipath contributors",
    version = env!("CARGO_PKG_VERSION"),
    about = "Make file paths in stack traces and logs platform-independent",
    long_about = "unipath rewrites path-like text in stack traces, log lines and error dumps: backslashes become forward slashes, drive letters are dropped, the working directory and its ancestors become <CWD>-relative, and configured path aliases are reduced to short logical names. URLs are left alone.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `unipath` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrites the paths in an input file or stdin.
    #[command(about = "Rewrites the paths in an input file or stdin.")]
    Unify(UnifyCommand),

    /// Prints a backtrace of this process with its paths rewritten.
    #[command(about = "Prints a backtrace of this process, rewritten relative to the current directory.")]
    Demo(DemoCommand),
}

/// Arguments for the `unify` command.
#[derive(Parser, Debug, Default)]
pub struct UnifyCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write rewritten output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to an options file (YAML, or JSON with a `.json` extension).
    #[arg(long = "config", value_name = "FILE", help = "Load options from a YAML or JSON file.")]
    pub config: Option<PathBuf>,

    /// Working directory to collapse into `<CWD>`.
    #[arg(long = "cwd", value_name = "PATH", env = "UNIPATH_CWD", help = "Collapse this directory (and its ancestors) into <CWD> markers.")]
    pub cwd: Option<String>,

    /// Use the current directory as the working directory.
    #[arg(long = "cwd-here", help = "Use the current directory as the <CWD> prefix (ignored when --cwd is given).")]
    pub cwd_here: bool,

    /// Alias specs applied after any from the options file.
    #[arg(long = "reduce", short = 'r', value_name = "ID[=REPLACEMENT]", help = "Reduce paths running through segment ID to /REPLACEMENT/... (repeatable).")]
    pub reduce: Vec<AliasSpec>,

    /// Keep `\u`, `\x`, `\w`, `\b` and `\n` escape sequences.
    #[arg(long = "explicit-escapes", help = "Treat backslashes before u, x, w, b and n as escape sequences, not separators.")]
    pub explicit_escapes: bool,

    /// Print per-pass rewrite counts to stderr.
    #[arg(long = "summary", help = "Print how many rewrites each pass made to stderr.")]
    pub summary: bool,
}

/// Arguments for the `demo` command.
#[derive(Parser, Debug, Default)]
pub struct DemoCommand {
    /// Also print the backtrace as captured.
    #[arg(long = "raw", help = "Also print the untouched backtrace after the rewritten one.")]
    pub raw: bool,
}
