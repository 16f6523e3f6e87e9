// SPDX-License-Identifier: MPL-2.0
//! Conversion between EXIF GPS rational strings and decimal degrees.
//!
//! EXIF stores a coordinate as three unsigned rationals (degrees, minutes,
//! seconds). Metadata libraries expose them as a string such as
//! `"49/1 50/1 23546/6000"`, while map widgets work with a signed `f64`.
//!
//! The string form never carries a sign: the hemisphere lives in a separate
//! reference tag (`N`/`S`, `E`/`W`) handled by [`super::position`].
//!
//! # Examples
//!
//! ```
//! use exif_gps_editor::gps::codec::{decode, encode};
//!
//! assert_eq!(encode(1.5), "1/1 30/1 0/6000");
//! assert_eq!(decode("1/1 30/1 0/6000"), 1.5);
//!
//! // Malformed input falls back to the origin.
//! assert_eq!(decode("not a coordinate"), 0.0);
//! ```

use std::fmt;

/// Denominator used for the seconds component when encoding.
pub const SECONDS_DENOMINATOR: u32 = 6000;

const MINUTES_PER_DEGREE: f64 = 60.0;
const SECONDS_PER_DEGREE: f64 = 3600.0;
const SECOND_UNITS_PER_MINUTE: f64 = 60.0 * SECONDS_DENOMINATOR as f64;

/// Why a DMS string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// The text is not three `<digits>/<digits>` pairs separated by single spaces.
    Pattern,
    /// One of the denominators is zero.
    ZeroDenominator,
    /// A component does not fit in an EXIF rational (32-bit).
    Overflow,
}

/// A DMS string that could not be interpreted as a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedCoordinate {
    input: String,
    kind: MalformedKind,
}

impl MalformedCoordinate {
    fn new(input: &str, kind: MalformedKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }

    /// The rejected text.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn kind(&self) -> MalformedKind {
        self.kind
    }
}

impl fmt::Display for MalformedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MalformedKind::Pattern => write!(f, "not a DMS coordinate: {:?}", self.input),
            MalformedKind::ZeroDenominator => {
                write!(f, "zero denominator in coordinate: {:?}", self.input)
            }
            MalformedKind::Overflow => {
                write!(f, "coordinate component out of range: {:?}", self.input)
            }
        }
    }
}

impl std::error::Error for MalformedCoordinate {}

/// An unsigned EXIF rational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn to_f64(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Degrees, minutes and seconds as stored in an EXIF GPS tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dms {
    pub degrees: Rational,
    pub minutes: Rational,
    pub seconds: Rational,
}

impl Dms {
    /// Evaluates the three rationals as unsigned decimal degrees.
    pub fn to_degrees(&self) -> f64 {
        self.degrees.to_f64()
            + (self.minutes.to_f64() / MINUTES_PER_DEGREE)
            + (self.seconds.to_f64() / SECONDS_PER_DEGREE)
    }

    pub fn as_array(&self) -> [Rational; 3] {
        [self.degrees, self.minutes, self.seconds]
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.degrees, self.minutes, self.seconds)
    }
}

/// Splits `"a/b c/d e/f"` into its six digit runs.
///
/// Exactly one ASCII space between pairs, ASCII digits only, no sign. A single
/// trailing newline is tolerated, as metadata tools often print one.
fn split_fields(value: &str) -> Option<[&str; 6]> {
    let value = value.strip_suffix('\n').unwrap_or(value);
    let mut pairs = value.split(' ');
    let mut fields = [""; 6];

    for slot in fields.chunks_mut(2) {
        let (numerator, denominator) = pairs.next()?.split_once('/')?;
        slot[0] = numerator;
        slot[1] = denominator;
    }

    if pairs.next().is_some() {
        return None;
    }

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    fields.iter().all(|&f| all_digits(f)).then_some(fields)
}

/// Parses a DMS string into EXIF rationals.
///
/// # Errors
///
/// Returns [`MalformedCoordinate`] when the text does not match the pattern,
/// a denominator is zero, or a component exceeds `u32::MAX`.
pub fn parse_dms(value: &str) -> Result<Dms, MalformedCoordinate> {
    let fields =
        split_fields(value).ok_or_else(|| MalformedCoordinate::new(value, MalformedKind::Pattern))?;

    let mut parsed = [0u32; 6];
    for (slot, field) in parsed.iter_mut().zip(fields) {
        *slot = field
            .parse()
            .map_err(|_| MalformedCoordinate::new(value, MalformedKind::Overflow))?;
    }

    if parsed[1] == 0 || parsed[3] == 0 || parsed[5] == 0 {
        return Err(MalformedCoordinate::new(value, MalformedKind::ZeroDenominator));
    }

    Ok(Dms {
        degrees: Rational::new(parsed[0], parsed[1]),
        minutes: Rational::new(parsed[2], parsed[3]),
        seconds: Rational::new(parsed[4], parsed[5]),
    })
}

/// Converts a DMS string to unsigned decimal degrees.
///
/// Components of any length are accepted; they are evaluated as `f64`
/// without rounding.
///
/// # Errors
///
/// Returns [`MalformedCoordinate`] on a pattern mismatch or a zero
/// denominator.
pub fn decode_strict(value: &str) -> Result<f64, MalformedCoordinate> {
    let fields =
        split_fields(value).ok_or_else(|| MalformedCoordinate::new(value, MalformedKind::Pattern))?;

    let mut parsed = [0.0f64; 6];
    for (slot, field) in parsed.iter_mut().zip(fields) {
        // Digit-only text always parses; huge values round like any f64 literal.
        *slot = field
            .parse()
            .map_err(|_| MalformedCoordinate::new(value, MalformedKind::Pattern))?;
    }

    let [deg_num, deg_den, min_num, min_den, sec_num, sec_den] = parsed;
    if deg_den == 0.0 || min_den == 0.0 || sec_den == 0.0 {
        return Err(MalformedCoordinate::new(value, MalformedKind::ZeroDenominator));
    }

    let degrees = deg_num / deg_den;
    let minutes = min_num / min_den;
    let seconds = sec_num / sec_den;

    Ok(degrees + (minutes / MINUTES_PER_DEGREE) + (seconds / SECONDS_PER_DEGREE))
}

/// Converts a DMS string to decimal degrees, returning `0.0` when the text is
/// malformed.
pub fn decode(value: &str) -> f64 {
    decode_strict(value).unwrap_or(0.0)
}

/// Converts decimal degrees to the DMS string form.
///
/// The degree part keeps the sign of `value` while minutes and seconds are
/// always non-negative, so a negative input cannot be recovered from the
/// string alone: the caller tracks the hemisphere. Seconds are truncated to
/// 1/6000 of a second.
///
/// Everything is computed in `f64` so arbitrarily large finite inputs still
/// produce exact integer digits. Non-finite input encodes as the origin.
pub fn encode(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };

    // Adding zero turns -0.0 into 0.0 so it prints without a sign.
    let degrees = value.trunc() + 0.0;
    let minutes = (value * MINUTES_PER_DEGREE)
        .trunc()
        .rem_euclid(MINUTES_PER_DEGREE)
        + 0.0;
    let seconds = (value.abs() * SECONDS_PER_DEGREE * f64::from(SECONDS_DENOMINATOR))
        .trunc()
        .rem_euclid(SECOND_UNITS_PER_MINUTE);

    format!("{degrees:.0}/1 {minutes:.0}/1 {seconds:.0}/{SECONDS_DENOMINATOR}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, assert_relative_eq, F64_EPSILON};

    #[test]
    fn decode_origin() {
        assert_eq!(decode("0/1 0/1 0/6000"), 0.0);
    }

    #[test]
    fn decode_full_precision() {
        let expected = 49.0 + 50.0 / 60.0 + (23546.0 / 6000.0) / 3600.0;
        assert_abs_diff_eq!(decode("49/1 50/1 23546/6000"), expected, epsilon = 1e-9);
    }

    #[test]
    fn decode_honours_every_denominator() {
        assert_abs_diff_eq!(
            decode("3/2 30/2 90/3"),
            1.5 + 0.25 + 30.0 / 3600.0,
            epsilon = F64_EPSILON
        );
    }

    #[test]
    fn decode_malformed_falls_back_to_origin() {
        assert_eq!(decode("malformed"), 0.0);
        assert_eq!(decode(""), 0.0);
        assert_eq!(decode("1/1 2/1"), 0.0);
        assert_eq!(decode("1/1 2/1 3/1 4/1"), 0.0);
        assert_eq!(decode("1/1  2/1 3/1"), 0.0);
        assert_eq!(decode(" 1/1 2/1 3/1"), 0.0);
        assert_eq!(decode("-1/1 2/1 3/1"), 0.0);
        assert_eq!(decode("1.5/1 2/1 3/1"), 0.0);
        assert_eq!(decode("1/ 2/1 3/1"), 0.0);
    }

    #[test]
    fn decode_tolerates_one_trailing_newline() {
        assert_eq!(decode("1/1 30/1 0/6000\n"), 1.5);
        assert_eq!(parse_dms("1/1 30/1 0/6000\n").unwrap().to_string(), "1/1 30/1 0/6000");

        assert_eq!(decode("1/1 30/1 0/6000\n\n"), 0.0);
        assert_eq!(decode("\n1/1 30/1 0/6000"), 0.0);
        assert_eq!(decode("1/1 30/1 0/6000\r\n"), 0.0);
        assert_eq!(decode("1/1 30/1 0/6000 \n"), 0.0);
    }

    #[test]
    fn decode_zero_denominator_falls_back_to_origin() {
        assert_eq!(decode("1/0 0/1 0/6000"), 0.0);
        assert_eq!(decode("1/1 0/0 0/6000"), 0.0);
        assert_eq!(decode("1/1 0/1 0/0"), 0.0);
    }

    #[test]
    fn decode_strict_reports_failure_kind() {
        let err = decode_strict("malformed").unwrap_err();
        assert_eq!(err.kind(), MalformedKind::Pattern);
        assert_eq!(err.input(), "malformed");

        let err = decode_strict("1/0 0/1 0/6000").unwrap_err();
        assert_eq!(err.kind(), MalformedKind::ZeroDenominator);
        assert!(err.to_string().contains("zero denominator"));
    }

    #[test]
    fn decode_accepts_components_wider_than_u32() {
        let value = decode_strict("99999999999/99999999999 0/1 0/1").unwrap();
        assert_eq!(value, 1.0);

        let value = decode_strict("12345678901234/1 0/1 0/1").unwrap();
        assert_relative_eq!(value, 12345678901234.0);
    }

    #[test]
    fn encode_origin() {
        assert_eq!(encode(0.0), "0/1 0/1 0/6000");
    }

    #[test]
    fn encode_degree_boundary() {
        assert_eq!(encode(1.0), "1/1 0/1 0/6000");
    }

    #[test]
    fn encode_half_degree() {
        assert_eq!(encode(1.5), "1/1 30/1 0/6000");
    }

    #[test]
    fn encode_negative_uses_euclidean_minutes() {
        // trunc(-195) mod 60 == 45 with a non-negative modulo
        assert_eq!(encode(-3.25), "-3/1 45/1 0/6000");
        assert_eq!(encode(-3.0), "-3/1 0/1 0/6000");
    }

    #[test]
    fn encode_small_negative_drops_sign_entirely() {
        assert_eq!(encode(-0.5), "0/1 30/1 0/6000");
        assert_eq!(encode(-0.0), "0/1 0/1 0/6000");
    }

    #[test]
    fn encode_truncates_seconds() {
        assert_eq!(encode(48.8566), "48/1 51/1 142560/6000");
        assert_eq!(encode(2.3522), "2/1 21/1 47520/6000");
    }

    #[test]
    fn encode_out_of_range_is_still_well_formed() {
        assert_eq!(encode(200.75), "200/1 45/1 0/6000");
        assert!(encode(1e300).ends_with("/1 44/1 88128/6000"));
        assert!(encode(-1e300).starts_with("-1000000000000000052504760255204420248704468"));
    }

    #[test]
    fn encode_non_finite_is_origin() {
        assert_eq!(encode(f64::NAN), "0/1 0/1 0/6000");
        assert_eq!(encode(f64::INFINITY), "0/1 0/1 0/6000");
        assert_eq!(encode(f64::NEG_INFINITY), "0/1 0/1 0/6000");
    }

    #[test]
    fn decode_recovers_encoded_value_within_one_second_unit() {
        let tolerance = 1.0 / 6000.0 / 3600.0;
        let mut value = 0.0;
        while value < 89.9 {
            let decoded = decode(&encode(value));
            assert!(
                (decoded - value).abs() < tolerance,
                "{value} -> {} -> {decoded}",
                encode(value)
            );
            value += 0.37;
        }
    }

    #[test]
    fn parse_dms_yields_rationals() {
        let dms = parse_dms("48/1 51/1 142560/6000").unwrap();
        assert_eq!(dms.degrees, Rational::new(48, 1));
        assert_eq!(dms.minutes, Rational::new(51, 1));
        assert_eq!(dms.seconds, Rational::new(142560, 6000));
        assert_eq!(dms.to_string(), "48/1 51/1 142560/6000");
        assert_abs_diff_eq!(dms.to_degrees(), 48.8566, epsilon = F64_EPSILON);
    }

    #[test]
    fn parse_dms_rejects_what_exif_cannot_store() {
        assert_eq!(
            parse_dms("4294967296/1 0/1 0/1").unwrap_err().kind(),
            MalformedKind::Overflow
        );
        assert_eq!(
            parse_dms("-3/1 45/1 0/6000").unwrap_err().kind(),
            MalformedKind::Pattern
        );
        assert_eq!(
            parse_dms("1/1 0/0 0/1").unwrap_err().kind(),
            MalformedKind::ZeroDenominator
        );
    }
}
