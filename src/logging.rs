//! Logger initialisation for the binary and tests.

use env_logger::{Builder, Env};
use log::{debug, LevelFilter};

/// Initializes the global logger.
///
/// When `verbose` is `true`, all debug messages are printed. Otherwise only
/// info level and above are shown. `RUST_LOG` takes precedence over both.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    // Tests call `init` repeatedly; only the first call installs a logger.
    if builder.try_init().is_err() {
        debug!("logger already initialised; keeping the existing one");
    }
}
