//! Runs the fixed demonstration: CNOT, Toffoli and a general controlled NOT
//! on the sample values 0.7 / 0.3 / 0.8 / 0.4.
//!
//! Logging goes to stderr; set `RUST_LOG=debug` to see it.

use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    soft_gates::demo::write_demo(&mut out)
}
