// SPDX-License-Identifier: MPL-2.0
//! GPS tag writing for image files.
//!
//! Uses the `little_exif` crate, which rewrites the EXIF block in place and
//! keeps every tag it is not asked to change. Supported containers are JPEG,
//! PNG, WebP, TIFF, HEIF and JPEG XL.

use crate::error::{Error, Result};
use crate::gps::{self, Dms, Position};
use little_exif::exif_tag::ExifTag;
use little_exif::metadata::Metadata;
use little_exif::rational::uR64;
use std::path::Path;
use tracing::{debug, info, warn};

/// Builds the four GPS tags describing `position`.
///
/// Each coordinate is encoded from its absolute value and the sign goes into
/// the matching reference tag, since the DMS form cannot carry it.
///
/// # Errors
///
/// Returns [`Error::Coordinate`] if a component is too large for an EXIF
/// rational.
pub fn gps_tags(position: Position) -> Result<Vec<ExifTag>> {
    let latitude = gps::parse_dms(&gps::encode(position.latitude.abs()))?;
    let longitude = gps::parse_dms(&gps::encode(position.longitude.abs()))?;
    debug!(
        latitude = %latitude,
        longitude = %longitude,
        stored_latitude = latitude.to_degrees(),
        stored_longitude = longitude.to_degrees(),
        "encoded GPS rationals"
    );

    Ok(vec![
        ExifTag::GPSLatitudeRef(position.latitude_hemisphere().as_ref_str().to_string()),
        ExifTag::GPSLatitude(to_exif_rationals(&latitude)),
        ExifTag::GPSLongitudeRef(position.longitude_hemisphere().as_ref_str().to_string()),
        ExifTag::GPSLongitude(to_exif_rationals(&longitude)),
    ])
}

fn to_exif_rationals(dms: &Dms) -> Vec<uR64> {
    dms.as_array()
        .iter()
        .map(|r| uR64 {
            nominator: r.numerator,
            denominator: r.denominator,
        })
        .collect()
}

/// Writes `position` into the GPS tags of an image file.
///
/// # Errors
///
/// Returns an error if:
/// - The file format is not supported
/// - The file has no EXIF block to update
/// - The file cannot be written
pub fn write_gps<P: AsRef<Path>>(path: P, position: Position) -> Result<()> {
    let path = path.as_ref();

    if !is_format_supported(path) {
        return Err(Error::Metadata(format!(
            "Unsupported format for EXIF writing: '{}'",
            path.display()
        )));
    }

    if !position.is_valid() {
        warn!(%position, "writing coordinates outside the valid range");
    }

    let tags = gps_tags(position)?;

    // little_exif cannot add an EXIF block to a file that has none.
    let mut metadata = Metadata::new_from_path(path).map_err(|e| {
        Error::Metadata(format!(
            "Could not read existing EXIF from '{}': {:?}",
            path.display(),
            e
        ))
    })?;

    for tag in tags {
        metadata.set_tag(tag);
    }

    metadata.write_to_file(path).map_err(|e| {
        Error::Metadata(format!(
            "Failed to write EXIF metadata to '{}': {:?}",
            path.display(),
            e
        ))
    })?;

    info!(path = %path.display(), %position, "GPS coordinates written");
    Ok(())
}

/// Returns the list of file extensions that support EXIF writing.
pub fn supported_extensions() -> &'static [&'static str] {
    &[
        "jpg", "jpeg", "png", "webp", "tiff", "tif", "heic", "heif", "jxl",
    ]
}

/// Checks if a file format supports EXIF writing.
pub fn is_format_supported<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| supported_extensions().contains(&ext.to_lowercase().as_str()))
}
