// SPDX-License-Identifier: MPL-2.0
//! Latitude/longitude pairs and EXIF hemisphere references.

use std::fmt;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Hemisphere reference stored next to each EXIF GPS coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parses an EXIF reference letter (`N`, `S`, `E` or `W`).
    pub fn from_ref(value: &str) -> Option<Self> {
        match value.trim().trim_matches('"').to_ascii_uppercase().as_str() {
            "N" => Some(Hemisphere::North),
            "S" => Some(Hemisphere::South),
            "E" => Some(Hemisphere::East),
            "W" => Some(Hemisphere::West),
            _ => None,
        }
    }

    pub fn as_ref_str(self) -> &'static str {
        match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
            Hemisphere::East => "E",
            Hemisphere::West => "W",
        }
    }

    /// `-1.0` for the southern and western hemispheres, `1.0` otherwise.
    pub fn sign(self) -> f64 {
        match self {
            Hemisphere::South | Hemisphere::West => -1.0,
            Hemisphere::North | Hemisphere::East => 1.0,
        }
    }

    pub fn for_latitude(latitude: f64) -> Self {
        if latitude >= 0.0 {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }

    pub fn for_longitude(longitude: f64) -> Self {
        if longitude >= 0.0 {
            Hemisphere::East
        } else {
            Hemisphere::West
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref_str())
    }
}

/// A point on the map in signed decimal degrees.
///
/// Nothing here clamps or rejects out-of-range values; use [`Position::is_valid`]
/// when a caller needs that guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub const ORIGIN: Position = Position {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude_hemisphere(&self) -> Hemisphere {
        Hemisphere::for_latitude(self.latitude)
    }

    pub fn longitude_hemisphere(&self) -> Hemisphere {
        Hemisphere::for_longitude(self.longitude)
    }

    /// Returns true if both components are finite and inside their ranges.
    pub fn is_valid(&self) -> bool {
        (MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude)
            && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude)
    }

    /// Parses the `"lat,lon"` form used on the command line.
    pub fn parse(value: &str) -> Option<Self> {
        let (lat, lon) = value.split_once(',')?;
        let latitude = lat.trim().parse::<f64>().ok()?;
        let longitude = lon.trim().parse::<f64>().ok()?;
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        Some(Self::new(latitude, longitude))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6}° {}, {:.6}° {}",
            self.latitude.abs(),
            self.latitude_hemisphere(),
            self.longitude.abs(),
            self.longitude_hemisphere()
        )
    }
}

impl std::str::FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("expected LAT,LON but got {s:?}"))
    }
}
