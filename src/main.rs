// SPDX-License-Identifier: MPL-2.0
use exif_gps_editor::app::{self, Flags, USAGE};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let flags = match Flags::from_env() {
        Ok(flags) => flags,
        Err(failure) => {
            eprintln!("{failure}\n\n{USAGE}");
            return ExitCode::from(failure.exit_code());
        }
    };

    if flags.help {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            eprintln!("{failure}");
            ExitCode::from(failure.exit_code())
        }
    }
}
