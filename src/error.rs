// SPDX-License-Identifier: MPL-2.0
use crate::gps::MalformedCoordinate;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// Reading or writing EXIF metadata failed.
    Metadata(String),
    Coordinate(MalformedCoordinate),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Metadata(e) => write!(f, "Metadata Error: {}", e),
            Error::Coordinate(e) => write!(f, "Coordinate Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MalformedCoordinate> for Error {
    fn from(err: MalformedCoordinate) -> Self {
        Error::Coordinate(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gps::decode_strict;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn metadata_error_formats_properly() {
        let err = Error::Metadata("no EXIF".into());
        assert_eq!(format!("{}", err), "Metadata Error: no EXIF");
    }

    #[test]
    fn malformed_coordinate_converts() {
        let err: Error = decode_strict("1/0 0/1 0/1").unwrap_err().into();
        match &err {
            Error::Coordinate(inner) => assert_eq!(inner.input(), "1/0 0/1 0/1"),
            _ => panic!("expected Coordinate variant"),
        }
        assert!(err.to_string().starts_with("Coordinate Error:"));
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let parse_error = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse_error.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
