// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

// ==========================================================================
// GPS Defaults
// ==========================================================================

/// Latitude used as the previous position until something has been applied.
pub const DEFAULT_LATITUDE: f64 = 0.0;

/// Longitude used as the previous position until something has been applied.
pub const DEFAULT_LONGITUDE: f64 = 0.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_LATITUDE >= -90.0 && DEFAULT_LATITUDE <= 90.0);
    assert!(DEFAULT_LONGITUDE >= -180.0 && DEFAULT_LONGITUDE <= 180.0);
};
