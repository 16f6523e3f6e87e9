// SPDX-License-Identifier: MPL-2.0
//! Editing session and command-line orchestration.
//!
//! A [`Session`] models what the map editor does with one image: it remembers
//! where the image was tagged when opened, tracks the marker the user moves
//! around, and writes the marker back on apply. [`run`] drives a session from
//! parsed [`Flags`] and persists the last applied position in the config.

mod cli;
pub mod paths;

pub use cli::{Action, Flags, USAGE};

use crate::config;
use crate::error::{Error, Result};
use crate::gps::Position;
use crate::media::{self, GpsTags};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One image being geotagged.
#[derive(Debug, Clone)]
pub struct Session {
    path: PathBuf,
    tags: GpsTags,
    original: Position,
    marker: Position,
    previous: Position,
}

impl Session {
    /// Reads the GPS tags of `path` and centres the marker on them.
    ///
    /// `previous` is the last position applied to any image, usually taken
    /// from the config file.
    pub fn open(path: impl Into<PathBuf>, previous: Position) -> Result<Self> {
        let path = path.into();
        let tags = media::read_gps(&path)?;
        Ok(Self::from_tags(path, tags, previous))
    }

    /// Builds a session from tags that were already read.
    pub fn from_tags(path: PathBuf, tags: GpsTags, previous: Position) -> Self {
        let original = tags.position();
        debug!(path = %path.display(), %original, "session opened");
        Self {
            path,
            tags,
            original,
            marker: original,
            previous,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tags(&self) -> &GpsTags {
        &self.tags
    }

    /// Position stored in the image when the session was opened.
    pub fn original(&self) -> Position {
        self.original
    }

    /// Current marker position.
    pub fn marker(&self) -> Position {
        self.marker
    }

    /// Last position applied to an image.
    pub fn previous(&self) -> Position {
        self.previous
    }

    /// Moves the marker. `None` re-centres on the current marker.
    pub fn move_to(&mut self, position: Option<Position>) -> Position {
        if let Some(position) = position {
            self.marker = position;
        }
        self.marker
    }

    pub fn reset_to_origin(&mut self) -> Position {
        self.move_to(Some(self.original))
    }

    pub fn jump_to_previous(&mut self) -> Position {
        self.move_to(Some(self.previous))
    }

    pub fn is_modified(&self) -> bool {
        self.marker != self.original
    }

    /// Writes the marker into the image and remembers it as the previous
    /// position.
    pub fn apply(&mut self) -> Result<()> {
        self.apply_with(|path, position| media::write_gps(path, position))
    }

    fn apply_with<F>(&mut self, write: F) -> Result<()>
    where
        F: FnOnce(&Path, Position) -> Result<()>,
    {
        write(&self.path, self.marker)?;
        self.original = self.marker;
        self.previous = self.marker;
        info!(path = %self.path.display(), position = %self.marker, "position applied");
        Ok(())
    }
}

/// Why the command-line run stopped.
#[derive(Debug)]
pub enum Failure {
    /// No image path was given.
    NoFile,
    /// The image path does not name a regular file.
    FileNotFound(PathBuf),
    /// Arguments could not be understood.
    Usage(String),
    /// Reading or writing failed.
    Error(Error),
}

impl Failure {
    pub fn exit_code(&self) -> u8 {
        match self {
            Failure::NoFile | Failure::Usage(_) => 1,
            Failure::FileNotFound(_) => 2,
            Failure::Error(_) => 3,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::NoFile => write!(f, "No file!"),
            Failure::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            Failure::Usage(msg) => write!(f, "{}", msg),
            Failure::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<Error> for Failure {
    fn from(err: Error) -> Self {
        Failure::Error(err)
    }
}

/// Entry point used by `main.rs`.
pub fn run(flags: Flags) -> std::result::Result<(), Failure> {
    paths::init_cli_override(flags.config_dir.clone());

    let path = flags.file.ok_or(Failure::NoFile)?;
    if !path.is_file() {
        return Err(Failure::FileNotFound(path));
    }

    let (mut config, warning) = config::load();
    if let Some(warning) = warning {
        warn!("{}", warning);
    }

    let mut session = Session::open(path, config.previous_position())?;

    match flags.action {
        Action::Show => {
            print!("{}", describe(&session));
            return Ok(());
        }
        Action::MoveTo(position) => session.move_to(Some(position)),
        Action::Origin => session.reset_to_origin(),
        Action::Previous => session.jump_to_previous(),
    };

    if flags.dry_run {
        println!(
            "Would write {} to {}",
            session.marker(),
            session.path().display()
        );
        return Ok(());
    }

    session.apply()?;
    config.set_previous_position(session.previous());
    config::save(&config)?;

    println!("{}: {}", session.path().display(), session.marker());
    Ok(())
}

/// Human-readable summary of a session.
pub fn describe(session: &Session) -> String {
    let raw = |value: &Option<String>, reference: Option<crate::gps::Hemisphere>| {
        match (value, reference) {
            (Some(value), Some(reference)) => format!("{} ({})", value, reference),
            (Some(value), None) => value.clone(),
            (None, _) => "(none)".to_string(),
        }
    };
    let tags = session.tags();
    let position = if tags.has_coordinates() {
        session.original().to_string()
    } else {
        format!("{} (no GPS tags)", session.original())
    };

    format!(
        "File:      {}\nPosition:  {}\nLatitude:  {}\nLongitude: {}\nPrevious:  {}\n",
        session.path().display(),
        position,
        raw(&tags.latitude, tags.latitude_ref),
        raw(&tags.longitude, tags.longitude_ref),
        session.previous(),
    )
}
