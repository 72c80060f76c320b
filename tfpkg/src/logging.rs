//! Log output for the command line.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter, e.g. `TFPKG_LOG=tfpkg_hcl=debug`.
pub const LOG_ENV: &str = "TFPKG_LOG";

/// Install a stderr subscriber. `TFPKG_LOG` wins over the verbosity flags.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
