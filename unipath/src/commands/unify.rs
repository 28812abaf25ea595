//! `unify` command implementation: rewrite the paths in a file or stdin.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use unipath_core::{merge_options, PassSummary, ReducePaths, Unifier, UnifyOptions};

use crate::cli::UnifyCommand;

/// Options for the `run_unify` runner, already separated from argument parsing.
pub struct UnifyRunOptions {
    pub input: String,
    pub output_path: Option<PathBuf>,
    pub summary: bool,
    pub quiet: bool,
}

/// Builds the effective `UnifyOptions` from an optional options file and the flags.
pub fn resolve_options(cmd: &UnifyCommand) -> Result<UnifyOptions> {
    let from_file = match &cmd.config {
        Some(path) => UnifyOptions::load_from_file(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => UnifyOptions::default(),
    };

    let cwd_path_prefix = match (&cmd.cwd, cmd.cwd_here) {
        (Some(cwd), _) => cwd.clone(),
        (None, true) => std::env::current_dir()
            .context("Failed to determine the current directory")?
            .to_string_lossy()
            .into_owned(),
        (None, false) => String::new(),
    };

    let from_flags = UnifyOptions {
        has_explicit_escapes: cmd.explicit_escapes,
        cwd_path_prefix,
        reduce_paths: if cmd.reduce.is_empty() {
            None
        } else {
            Some(ReducePaths::Many(cmd.reduce.clone()))
        },
    };

    Ok(merge_options(from_file, from_flags))
}

/// Reads the whole input from `path`, or stdin when no path is given.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
pub fn read_input(path: Option<&PathBuf>) -> Result<String> {
    let (bytes, source) = match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            let bytes = fs::read(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            (bytes, path.display().to_string())
        }
        None => {
            info!("Reading input from stdin.");
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read from stdin")?;
            (buffer, "stdin".to_string())
        }
    };
    Ok(decode_input(bytes, &source))
}

fn decode_input(bytes: Vec<u8>, source: &str) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| {
        warn!(
            "Input from {} is not valid UTF-8 (first bad byte at {}); replacing invalid sequences.",
            source,
            e.utf8_error().valid_up_to()
        );
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    })
}

/// The main operation runner for the `unify` command.
pub fn run_unify(unifier: &Unifier, opts: UnifyRunOptions) -> Result<()> {
    info!("Starting unify operation.");

    let (output, summary) = unifier.unify_with_summary(&opts.input);
    debug!(
        "Content rewritten. Original length: {}, rewritten length: {}",
        opts.input.len(),
        output.len()
    );

    write_output(opts.output_path.as_ref(), &output)?;

    if opts.summary && !opts.quiet {
        print_summary(&summary, &mut io::stderr())?;
    }

    info!("Unify operation completed.");
    Ok(())
}

/// Entry point used by `main`.
pub fn run_unify_command(cmd: &UnifyCommand, quiet: bool) -> Result<()> {
    let options = resolve_options(cmd)?;
    let unifier = Unifier::new(options).context("Failed to compile rewrite passes")?;
    let input = read_input(cmd.input_file.as_ref())?;

    run_unify(
        &unifier,
        UnifyRunOptions {
            input,
            output_path: cmd.output.clone(),
            summary: cmd.summary,
            quiet,
        },
    )
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            info!("Writing rewritten content to file: {}", path.display());
            fs::write(path, content)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writer.write_all(content.as_bytes())?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// Writes one `pass: N rewrites` line per pass.
pub fn print_summary<W: Write>(summary: &[PassSummary], writer: &mut W) -> Result<()> {
    writeln!(writer, "Rewrite summary:")?;
    for item in summary {
        writeln!(writer, "  {}: {} rewrites", item.pass_name, item.rewrites)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use unipath_core::AliasSpec;

    #[test]
    fn cwd_flag_wins_over_cwd_here() -> Result<()> {
        let cmd = UnifyCommand {
            cwd: Some("/explicit".to_string()),
            cwd_here: true,
            ..UnifyCommand::default()
        };
        assert_eq!(resolve_options(&cmd)?.cwd_path_prefix, "/explicit");
        Ok(())
    }

    #[test]
    fn cwd_here_uses_the_current_directory() -> Result<()> {
        let cmd = UnifyCommand {
            cwd_here: true,
            ..UnifyCommand::default()
        };
        let expected = std::env::current_dir()?.to_string_lossy().into_owned();
        assert_eq!(resolve_options(&cmd)?.cwd_path_prefix, expected);
        Ok(())
    }

    #[test]
    fn flags_map_onto_options() -> Result<()> {
        let cmd = UnifyCommand {
            explicit_escapes: true,
            reduce: vec![AliasSpec::from("a"), AliasSpec::from(("b", "B"))],
            ..UnifyCommand::default()
        };
        let options = resolve_options(&cmd)?;
        assert!(options.has_explicit_escapes);
        assert!(options.cwd_path_prefix.is_empty());
        assert_eq!(options.aliases().len(), 2);
        Ok(())
    }

    #[test]
    fn invalid_utf8_input_is_decoded_lossily() {
        assert_eq!(decode_input(b"C:\\a\\b".to_vec(), "test"), "C:\\a\\b");
        assert_eq!(decode_input(b"/a/b\xff/c".to_vec(), "test"), "/a/b\u{FFFD}/c");
    }

    #[test]
    fn summary_lists_every_pass() -> Result<()> {
        let summary = vec![
            PassSummary { pass_name: "escape".to_string(), rewrites: 3 },
            PassSummary { pass_name: "generic".to_string(), rewrites: 1 },
        ];
        let mut out = Vec::new();
        print_summary(&summary, &mut out)?;
        assert_eq!(
            String::from_utf8(out)?,
            "Rewrite summary:\n  escape: 3 rewrites\n  generic: 1 rewrites\n"
        );
        Ok(())
    }
}
