// SPDX-License-Identifier: MPL-2.0
//! Command-line flags.

use super::Failure;
use crate::gps::Position;
use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: exif-gps-editor [OPTIONS] FILE

Show or edit the GPS position stored in an image's EXIF metadata.
Without an edit option the current position is printed.

Options:
  --set LAT,LON       Move the position to LAT,LON (decimal degrees)
  --previous          Move the position to the last one applied
  --origin            Rewrite the position already stored in the file
  --dry-run           Show what would be written without touching the file
  --config-dir DIR    Read and write settings.toml in DIR
  -h, --help          Print this help
";

/// What to do with the opened image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Action {
    /// Print the stored position.
    #[default]
    Show,
    MoveTo(Position),
    Previous,
    Origin,
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub file: Option<PathBuf>,
    pub config_dir: Option<String>,
    pub action: Action,
    pub dry_run: bool,
    pub help: bool,
}

impl Flags {
    pub fn from_env() -> Result<Self, Failure> {
        Self::from_args(pico_args::Arguments::from_env())
    }

    pub fn from_vec(args: Vec<OsString>) -> Result<Self, Failure> {
        Self::from_args(pico_args::Arguments::from_vec(args))
    }

    fn from_args(mut args: pico_args::Arguments) -> Result<Self, Failure> {
        let usage = |e: pico_args::Error| Failure::Usage(e.to_string());

        let help = args.contains(["-h", "--help"]);
        let config_dir: Option<String> = args.opt_value_from_str("--config-dir").map_err(usage)?;
        let set: Option<Position> = args.opt_value_from_str("--set").map_err(usage)?;
        let previous = args.contains("--previous");
        let origin = args.contains("--origin");
        let dry_run = args.contains("--dry-run");

        let action = match (set, previous, origin) {
            (None, false, false) => Action::Show,
            (Some(position), false, false) => Action::MoveTo(position),
            (None, true, false) => Action::Previous,
            (None, false, true) => Action::Origin,
            _ => {
                return Err(Failure::Usage(
                    "--set, --previous and --origin are mutually exclusive".to_string(),
                ))
            }
        };

        let mut rest = args.finish().into_iter();
        let file = rest.next();
        if let Some(arg) = file.as_ref().filter(|a| a.to_string_lossy().starts_with('-')) {
            return Err(Failure::Usage(format!(
                "unknown option: {}",
                arg.to_string_lossy()
            )));
        }
        if let Some(extra) = rest.next() {
            return Err(Failure::Usage(format!(
                "unexpected argument: {}",
                extra.to_string_lossy()
            )));
        }

        Ok(Self {
            file: file.map(PathBuf::from),
            config_dir,
            action,
            dry_run,
            help,
        })
    }
}
