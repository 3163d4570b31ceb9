use ascii_tree::cli;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    setup_logging();

    // bad input is reported on stdout inside `run`; only I/O failures land here
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout carries only the drawing.
fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        )
        .init();
}
