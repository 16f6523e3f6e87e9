// SPDX-License-Identifier: MPL-2.0
//! GPS coordinate handling.
//!
//! - [`codec`]: conversion between the EXIF rational DMS string form and
//!   signed decimal degrees
//! - [`position`]: latitude/longitude pairs and hemisphere references

pub mod codec;
pub mod position;

pub use codec::{
    decode, decode_strict, encode, parse_dms, Dms, MalformedCoordinate, MalformedKind, Rational,
};
pub use position::{Hemisphere, Position};
