use std::f64::consts::PI;

use crate::record::CapitalRecord;

/// Radius of the Earth in meters (IAG-GRS80 sphere).
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Converts an angle in degrees, minutes and seconds to decimal degrees.
/// Minutes and seconds are not range checked.
pub fn dms_to_decimal_degrees(d: f64, m: f64, s: f64) -> f64 {
    d + m / 60.0 + s / 3600.0
}

/// Converts decimal degrees to `(degrees, minutes, seconds)`.
///
/// Degrees and minutes truncate toward zero, so a negative angle yields
/// negative components rather than flooring (`-1.5` gives `(-1, -30, 0)`).
pub fn decimal_degrees_to_dms(dd: f64) -> (f64, f64, f64) {
    let d = dd.trunc();
    let x = (dd - d) * 60.0;
    let m = x.trunc();
    let s = (x - m) * 60.0;
    (d, m, s)
}

pub fn degrees_to_radians(dd: f64) -> f64 {
    dd * PI / 180.0
}

pub fn radians_to_degrees(rd: f64) -> f64 {
    rd * 180.0 / PI
}

/// Great-circle distance between two points given in radians, using the
/// spherical law of cosines.
///
/// The result is `central_angle * EARTH_RADIUS_M / 1000`: the Earth radius in
/// meters divided by 1000, scaled by the central angle in radians. Callers
/// have historically read it as kilometers.
pub fn distance_gps(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    // sin² + cos² can land a few ulps under 1, and acos magnifies that into
    // a visible non-zero distance.
    if lat_a == lat_b && lon_a == lon_b {
        return 0.0;
    }
    let cos_s = lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * (lon_b - lon_a).abs().cos();
    // Rounding can push near-identical and antipodal points just outside acos' domain.
    let s = cos_s.clamp(-1.0, 1.0).acos();
    s * EARTH_RADIUS_M / 1000.0
}

/// Distance between two records whose coordinates are stored in decimal degrees.
pub fn distance_between_records(a: &CapitalRecord, b: &CapitalRecord) -> f64 {
    distance_gps(
        degrees_to_radians(a.latitude),
        degrees_to_radians(a.longitude),
        degrees_to_radians(b.latitude),
        degrees_to_radians(b.longitude),
    )
}
