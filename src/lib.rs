// SPDX-License-Identifier: MPL-2.0
//! `exif_gps_editor` reads and rewrites the GPS position stored in an image's
//! EXIF metadata.
//!
//! The core is [`gps::codec`], which converts between the EXIF rational
//! degrees/minutes/seconds string and the signed decimal degrees used by map
//! widgets. Around it sit metadata access, a small TOML config remembering the
//! last applied position, and an editing session driven from the command line.

#![doc(html_root_url = "https://docs.rs/exif_gps_editor/1.0.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gps;
pub mod media;

#[cfg(test)]
pub(crate) mod test_utils;
