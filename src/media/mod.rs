// SPDX-License-Identifier: MPL-2.0
//! Image metadata access.
//!
//! Reading goes through `kamadak-exif`, writing through `little_exif`.

pub mod metadata;
pub mod metadata_writer;

pub use metadata::{read_gps, GpsTags};
pub use metadata_writer::{is_format_supported, write_gps};
