// SPDX-License-Identifier: MPL-2.0
//! GPS tag extraction from image files (EXIF).
//!
//! Coordinates are exposed the way metadata tools print them: each tag as a
//! `"n/d n/d n/d"` string, decoded through [`crate::gps::codec`]. The hemisphere
//! reference tags are read separately.

use crate::error::{Error, Result};
use crate::gps::{self, Hemisphere, Position};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Raw GPS tags as stored in an image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpsTags {
    /// `GPSLatitude` in DMS string form
    pub latitude: Option<String>,
    /// `GPSLatitudeRef`
    pub latitude_ref: Option<Hemisphere>,
    /// `GPSLongitude` in DMS string form
    pub longitude: Option<String>,
    /// `GPSLongitudeRef`
    pub longitude_ref: Option<Hemisphere>,
}

impl GpsTags {
    /// Collects the GPS tags from already-parsed EXIF data.
    pub fn from_exif(exif: &exif::Exif) -> Self {
        let dms = |tag: exif::Tag| {
            exif.get_field(tag, exif::In::PRIMARY)
                .and_then(|field| format_rationals(&field.value))
        };
        let hemisphere = |tag: exif::Tag| {
            exif.get_field(tag, exif::In::PRIMARY)
                .and_then(|field| Hemisphere::from_ref(&field.display_value().to_string()))
        };

        Self {
            latitude: dms(exif::Tag::GPSLatitude),
            latitude_ref: hemisphere(exif::Tag::GPSLatitudeRef),
            longitude: dms(exif::Tag::GPSLongitude),
            longitude_ref: hemisphere(exif::Tag::GPSLongitudeRef),
        }
    }

    /// Returns true if both coordinate tags are present.
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// Decodes the tags into signed decimal degrees.
    ///
    /// Missing or malformed coordinates read as `0.0`. A reference tag, when
    /// present, supplies the sign.
    pub fn position(&self) -> Position {
        let signed = |value: &Option<String>, reference: Option<Hemisphere>| {
            let degrees = value.as_deref().map(gps::decode).unwrap_or(0.0);
            reference.map_or(degrees, |hemisphere| degrees * hemisphere.sign())
        };

        Position::new(
            signed(&self.latitude, self.latitude_ref),
            signed(&self.longitude, self.longitude_ref),
        )
    }
}

/// Renders a rational EXIF value as `"n/d n/d ..."`.
fn format_rationals(value: &exif::Value) -> Option<String> {
    match value {
        exif::Value::Rational(rationals) if !rationals.is_empty() => Some(
            rationals
                .iter()
                .map(|r| format!("{}/{}", r.num, r.denom))
                .collect::<Vec<_>>()
                .join(" "),
        ),
        _ => None,
    }
}

/// Reads the GPS tags of an image file.
///
/// A file without EXIF data yields empty tags.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read.
pub fn read_gps<P: AsRef<Path>>(path: P) -> Result<GpsTags> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::Io(e.to_string()))?;
    let mut reader = BufReader::new(file);

    match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => {
            let tags = GpsTags::from_exif(&exif);
            debug!(path = %path.display(), ?tags, "read GPS tags");
            Ok(tags)
        }
        Err(exif::Error::Io(e)) => Err(Error::Io(e.to_string())),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no EXIF data");
            Ok(GpsTags::default())
        }
    }
}
