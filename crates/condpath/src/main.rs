//! condpath CLI
//!
//! Runs the conditional-block scanners over a file and prints the result.
//! Set `RUST_LOG` (e.g. `RUST_LOG=condpath=trace`) to see scan events as a
//! tree on stderr; `--debug` picks which categories emit them.

use std::process::ExitCode;

mod args;
mod commands;
mod error;

/// Install the tracing subscriber when `RUST_LOG` is set.
///
/// Without `RUST_LOG` nothing is installed and every event is dropped at
/// the callsite.
fn init_tracing() {
    use tracing_subscriber::{prelude::*, EnvFilter};

    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true),
        )
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let env_debug = std::env::var(args::DEBUG_ENV).ok();

    let result = args::parse_args(&argv, env_debug.as_deref())
        .and_then(|invocation| commands::run(&invocation));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if err.wants_usage() {
                eprintln!();
                args::print_usage();
            }
            ExitCode::FAILURE
        }
    }
}
