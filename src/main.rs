// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commitpad::{App, Cli, Error};

fn main() -> ExitCode {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match App::new(cli).and_then(|mut app| app.run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => exit_code(e),
    }
}

/// `--verbose` wins over RUST_LOG; logs go to stderr so stdout stays clean
/// for `config` and `completions`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("commitpad=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("commitpad=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .without_time()
        .init();
}

fn exit_code(error: Error) -> ExitCode {
    match error {
        // Ctrl+C at a prompt: the message file is left as it was
        Error::Cancelled => {
            eprintln!("Aborted.");
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("{:?}", miette::Report::new(other));
            ExitCode::FAILURE
        }
    }
}
