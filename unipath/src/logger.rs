//! Logger setup for the unipath binary.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Installs `env_logger` on stderr.
///
/// With `Some(level)` the level is forced, otherwise `RUST_LOG` decides and
/// defaults to `warn`. Safe to call more than once; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}
